//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Attribute Types** - the fixed-shape item record and its partial update
//! - **Price Types** - suggestion and string-or-number price payloads
//! - **API Types** - backend request/response structures
//! - **Step Label Types** - closed inline-formatting token set for step labels
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Attribute Types
// =============================================================================

/// Item attributes collected across the wizard run.
///
/// Populated by the identify step, edited by the user in step 1 and
/// overwritten field-by-field by the generated listing in step 3.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    /// Ad title (from the generated listing)
    pub title: String,
    /// Ad description (from the generated listing)
    pub description: String,
    /// Brand recognized on the image
    pub brand: String,
    /// Model or product type
    pub model_or_type: String,
    /// Category path, e.g. "Elektronik/Konsolen"
    pub category: String,
    /// Condition, one of the fixed German condition terms
    pub condition: String,
    /// Dominant color
    pub color: String,
    /// Free-form notes (accessories, packaging, defects)
    pub special_notes: String,
}

impl Attributes {
    /// Apply a partial update, overwriting only the fields the patch carries.
    ///
    /// Absent fields retain their prior values; unknown backend keys never
    /// reach this point because [`AttributesPatch`] drops them during
    /// deserialization.
    pub fn apply_patch(&mut self, patch: AttributesPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model_or_type) = patch.model_or_type {
            self.model_or_type = model_or_type;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(special_notes) = patch.special_notes {
            self.special_notes = special_notes;
        }
    }
}

/// Partial update over [`Attributes`].
///
/// Mirrors every attribute field as an `Option`; the backend's loosely
/// typed `identification` payload deserializes into this, silently
/// dropping keys that are not part of the fixed attribute set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributesPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub model_or_type: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub color: Option<String>,
    pub special_notes: Option<String>,
}

// =============================================================================
// Price Types
// =============================================================================

/// Price suggestion produced by the price step.
///
/// Read-only to the user; `suggested_price` is a decimal-as-string as
/// sent by the backend (may be empty when no comparables were found).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceSuggestion {
    /// Suggested price, e.g. "49.99"
    pub suggested_price: String,
    /// Human-readable reasoning behind the suggestion
    pub explanation: String,
}

/// A price as the listing endpoint sends it: either a JSON string or a
/// JSON number, depending on how the backend model filled the field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    /// Numeric price, e.g. `55`
    Number(f64),
    /// Decimal-as-string price, e.g. `"49.99"`
    Text(String),
}

// =============================================================================
// API Request Types
// =============================================================================

/// Request body for `POST /api/identify`.
#[derive(Clone, Debug, Serialize)]
pub struct IdentifyRequest {
    /// URLs of the uploaded images to analyze
    pub image_urls: Vec<String>,
    /// Existing process to attach the images to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_process_id: Option<String>,
}

/// Request body for the price and listing endpoints, which only need
/// the process correlation id.
#[derive(Clone, Debug, Serialize)]
pub struct AdProcessRequest {
    pub ad_process_id: String,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `POST /api/upload/`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL of the stored image
    pub url: String,
}

/// Response from `POST /api/identify`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifyResponse {
    /// Backend-assigned correlation id for this wizard run
    pub ad_process_id: String,
    /// Recognized attributes; unknown keys are dropped
    #[serde(default)]
    pub identification: AttributesPatch,
}

/// Response from `POST /api/price/suggest`.
///
/// Both fields are nullable on the wire; `None` maps to the empty string
/// in [`PriceSuggestion`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggested_price: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl From<SuggestResponse> for PriceSuggestion {
    fn from(resp: SuggestResponse) -> Self {
        PriceSuggestion {
            suggested_price: resp.suggested_price.unwrap_or_default(),
            explanation: resp.explanation.unwrap_or_default(),
        }
    }
}

/// Response from `GET /api/listing/ad-process/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdProcessResponse {
    /// Generated listing, absent while generation has not finished
    #[serde(default)]
    pub listing: Option<Listing>,
}

/// The generated ad copy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<PriceValue>,
}

// =============================================================================
// Step Label Types
// =============================================================================

/// Inline formatting token for a step label.
///
/// The step indicator never renders raw markup; labels are built from
/// this closed token set instead, so content injection is impossible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelToken {
    /// Plain text segment
    Text(&'static str),
    /// Optional hyphenation point (rendered as U+00AD)
    SoftHyphen,
}

/// A wizard step as shown by the step indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepLabel {
    /// Label tokens, rendered in order
    pub tokens: &'static [LabelToken],
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all backend communication.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Precondition failed before any network call (e.g. no file selected).
    Validation(String),
    /// Transport-level failure (connection refused, CORS, ...).
    Network(String),
    /// Non-2xx backend response, with status code and body.
    Api(u16, String),
    /// Response body could not be decoded.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Api(status, body) => write!(f, "Server error ({}): {}", status, body),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut attrs = Attributes {
            brand: "Sony".to_string(),
            color: "Schwarz".to_string(),
            ..Default::default()
        };
        attrs.apply_patch(AttributesPatch {
            brand: Some("Nintendo".to_string()),
            category: Some("Elektronik/Konsolen".to_string()),
            ..Default::default()
        });

        assert_eq!(attrs.brand, "Nintendo");
        assert_eq!(attrs.category, "Elektronik/Konsolen");
        // Absent keys retain their prior values
        assert_eq!(attrs.color, "Schwarz");
    }

    #[test]
    fn identification_drops_unknown_keys() {
        let json = r#"{
            "ad_process_id": "p1",
            "identification": {
                "brand": "Sony",
                "model_or_type": "WH-1000XM4",
                "confidence": 0.93,
                "bounding_box": [0, 0, 100, 100]
            }
        }"#;

        let resp: IdentifyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.ad_process_id, "p1");
        assert_eq!(resp.identification.brand.as_deref(), Some("Sony"));
        assert_eq!(resp.identification.title, None);
    }

    #[test]
    fn identify_request_omits_absent_process_id() {
        let req = IdentifyRequest {
            image_urls: vec!["http://localhost:8000/uploads/a.jpg".to_string()],
            ad_process_id: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("ad_process_id"));

        let req = IdentifyRequest {
            image_urls: vec![],
            ad_process_id: Some("p1".to_string()),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""ad_process_id":"p1""#));
    }

    #[test]
    fn listing_price_decodes_as_string_or_number() {
        let resp: AdProcessResponse = serde_json::from_str(
            r#"{"listing": {"title": "X", "price": 55}}"#,
        )
        .unwrap();
        let listing = resp.listing.unwrap();
        assert_eq!(listing.price, Some(PriceValue::Number(55.0)));

        let resp: AdProcessResponse = serde_json::from_str(
            r#"{"listing": {"title": "X", "price": "49.99"}}"#,
        )
        .unwrap();
        let listing = resp.listing.unwrap();
        assert_eq!(listing.price, Some(PriceValue::Text("49.99".to_string())));
    }

    #[test]
    fn suggest_response_tolerates_nulls() {
        let resp: SuggestResponse =
            serde_json::from_str(r#"{"suggested_price": null, "explanation": null}"#).unwrap();
        let suggestion = PriceSuggestion::from(resp);
        assert_eq!(suggestion.suggested_price, "");
        assert_eq!(suggestion.explanation, "");
    }
}
