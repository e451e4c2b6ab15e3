//! Error Types
//!
//! API and form errors. The UI never distinguishes kinds: every `ApiError`
//! becomes the same generic notice, and every `FormError` becomes a warning.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected status {actual} (expected {expected}): {message}")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        message: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("browser API error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Browser(format!("{:?}", value))
    }
}

/// Client-side validation failures, reported before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name and image are required")]
    NameAndImageRequired,
}
