//! Thin HTTP client for the wizard backend.
//!
//! Wraps `gloo-net` requests against the configured base URL. All JSON
//! endpoints go through here; the upload endpoint uses multipart form
//! data. No authentication headers are added at this layer.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::{BACKEND_URL, VERBOSE_HTTP_LOG};
use crate::types::{AppError, AppResult};

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against the configured backend.
    pub fn new() -> Self {
        Self::with_base_url(BACKEND_URL)
    }

    /// Client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        if VERBOSE_HTTP_LOG {
            log::debug!("→ GET {}", path);
        }
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        decode_json(response, path).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.post_json_raw(path, body).await?;
        decode_json(response, path).await
    }

    /// POST a JSON body, check the status and drop the response body.
    ///
    /// For endpoints whose response the wizard does not use
    /// (comparables, generate).
    pub async fn post_json_discard<B>(&self, path: &str, body: &B) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.post_json_raw(path, body).await?;
        check_status(response, path).await?;
        Ok(())
    }

    /// POST multipart form data and decode the JSON response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> AppResult<T> {
        if VERBOSE_HTTP_LOG {
            log::debug!("→ POST {} (multipart)", path);
        }
        let request = Request::post(&self.url(path))
            .body(form)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        decode_json(response, path).await
    }

    async fn post_json_raw<B>(&self, path: &str, body: &B) -> AppResult<Response>
    where
        B: Serialize + ?Sized,
    {
        if VERBOSE_HTTP_LOG {
            log::debug!("→ POST {}", path);
        }
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;
        request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))
    }
}

/// Reject non-2xx responses, carrying the body for the error log.
async fn check_status(response: Response, path: &str) -> AppResult<Response> {
    if VERBOSE_HTTP_LOG {
        log::debug!("← {} {}", response.status(), path);
    }
    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Api(status, body));
    }
    Ok(response)
}

async fn decode_json<T: DeserializeOwned>(response: Response, path: &str) -> AppResult<T> {
    let response = check_status(response, path).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_joined_onto_the_base_url() {
        let client = ApiClient::with_base_url("http://localhost:8000");
        assert_eq!(
            client.url("/api/identify"),
            "http://localhost:8000/api/identify"
        );
        assert_eq!(
            client.url("/api/listing/ad-process/p1"),
            "http://localhost:8000/api/listing/ad-process/p1"
        );
    }
}
