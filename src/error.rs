//! Error types for the GroupMe client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The "not modified" condition is deliberately absent: it is a normal
//! outcome carried by [`crate::types::Fetched::NotModified`], not a failure.

use thiserror::Error;

/// The main error type for the GroupMe client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport / Parse Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {url}")]
    BaseUrl { url: String },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API error {code}: {errors:?}")]
    Api { code: u16, errors: Vec<String> },

    #[error("Response decoded but carried no payload: {message}")]
    Decode { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination did not terminate within {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },
}

impl Error {
    /// Create an API error from an envelope code and error list
    pub fn api(code: u16, errors: Vec<String>) -> Self {
        Self::Api { code, errors }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The numeric application-level code, if this is an API error
    pub fn api_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for the GroupMe client
pub type Result<T> = std::result::Result<T, Error>;
