//! Application configuration.
//!
//! Centralized configuration for the KI-Wizard frontend.
//! The backend URL can be baked in at compile time via the
//! `KIWIZARD_API_URL` environment variable; everything else is a constant.

/// Backend API base URL.
///
/// The FastAPI backend that performs upload, identification, pricing
/// and listing generation. Overridable at build time with
/// `KIWIZARD_API_URL`.
pub const BACKEND_URL: &str = match option_env!("KIWIZARD_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Minimum display duration for the blocking overlay (in milliseconds).
///
/// Async step actions keep the overlay up for at least this long, even
/// when the backend answers faster. Prevents flicker on fast responses.
pub const BLOCKING_MIN_MS: u32 = 5_000;

/// Verbose request/response logging.
///
/// Enabled in debug builds only; logs method, path and status for every
/// backend call at debug level.
pub const VERBOSE_HTTP_LOG: bool = cfg!(debug_assertions);

/// Accepted MIME filter for the upload file picker.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";
