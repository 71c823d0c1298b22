//! Wizard backend endpoints.
//!
//! One async function per REST endpoint of the ad process flow. All of
//! them take the shared [`ApiClient`] plus the process correlation id
//! where the backend requires one; none of them touch wizard state.

use web_sys::{File, FormData};

use crate::services::api::ApiClient;
use crate::types::{
    AdProcessRequest, AdProcessResponse, AppError, AppResult, IdentifyRequest, IdentifyResponse,
    SuggestResponse, UploadResponse,
};

/// `POST /api/upload/` — store the image, returns its public URL.
pub async fn upload_image(client: &ApiClient, file: &File) -> AppResult<String> {
    let form = FormData::new()
        .map_err(|e| AppError::Validation(format!("Failed to create FormData: {:?}", e)))?;
    form.append_with_blob("file", file)
        .map_err(|e| AppError::Validation(format!("Failed to append file: {:?}", e)))?;

    let response: UploadResponse = client.post_multipart("/api/upload/", form).await?;
    Ok(response.url)
}

/// `POST /api/identify` — run image recognition.
///
/// Passes the existing process id when this run already has one, so the
/// backend attaches the images to the same process.
pub async fn identify(
    client: &ApiClient,
    image_url: String,
    ad_process_id: Option<String>,
) -> AppResult<IdentifyResponse> {
    let request = IdentifyRequest {
        image_urls: vec![image_url],
        ad_process_id,
    };
    client.post_json("/api/identify", &request).await
}

/// `POST /api/price/comparables` — collect comparable offers.
///
/// The response body is not used; only success matters.
pub async fn fetch_comparables(client: &ApiClient, ad_process_id: &str) -> AppResult<()> {
    let request = AdProcessRequest {
        ad_process_id: ad_process_id.to_string(),
    };
    client.post_json_discard("/api/price/comparables", &request).await
}

/// `POST /api/price/suggest` — derive a price suggestion.
pub async fn suggest_price(client: &ApiClient, ad_process_id: &str) -> AppResult<SuggestResponse> {
    let request = AdProcessRequest {
        ad_process_id: ad_process_id.to_string(),
    };
    client.post_json("/api/price/suggest", &request).await
}

/// `POST /api/listing/generate` — generate the ad copy.
///
/// The response body is not used; the listing is fetched separately.
pub async fn generate_listing(client: &ApiClient, ad_process_id: &str) -> AppResult<()> {
    let request = AdProcessRequest {
        ad_process_id: ad_process_id.to_string(),
    };
    client.post_json_discard("/api/listing/generate", &request).await
}

/// `GET /api/listing/ad-process/{id}` — fetch the generated listing.
pub async fn fetch_ad_process(
    client: &ApiClient,
    ad_process_id: &str,
) -> AppResult<AdProcessResponse> {
    client
        .get_json(&format!("/api/listing/ad-process/{}", ad_process_id))
        .await
}
