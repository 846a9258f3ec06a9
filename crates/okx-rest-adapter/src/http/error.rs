/*
[INPUT]:  Error sources (HTTP, API envelope, serialization, signing, config)
[OUTPUT]: Typed internal errors and the flat caller-facing ExchangeError
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing the caller-facing shape
*/

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Identifier reported in the `ex` field of every [`ExchangeError`]
pub const EXCHANGE_NAME: &str = "OKX";

/// Internal error type for OKX adapter plumbing
#[derive(Error, Debug)]
pub enum OkxError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: i64, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Request could not be signed; raised before any network I/O
    #[error("Request signing failed: {0}")]
    Signing(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OkxError {
    /// Check if the error happened while building the signed request
    pub fn is_signing_failure(&self) -> bool {
        matches!(self, OkxError::Signing(_))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        OkxError::Api {
            code: i64::from(status.as_u16()),
            message: message.into(),
        }
    }
}

/// Result type alias for internal OKX operations
pub type Result<T> = std::result::Result<T, OkxError>;

/// Flat error returned by every public endpoint method.
///
/// Network failures, malformed responses and exchange-reported errors all
/// collapse into this one shape: `{error, code: -1, ex: "OKX"}`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{ex} request failed (code {code}): {error}")]
pub struct ExchangeError {
    pub error: String,
    pub code: i32,
    pub ex: String,
    #[serde(skip)]
    signing: bool,
}

impl ExchangeError {
    /// Code carried by every uniform error
    pub const CODE: i32 = -1;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: Self::CODE,
            ex: EXCHANGE_NAME.to_string(),
            signing: false,
        }
    }

    /// Wrap an internal failure, prefixing the call site that produced it
    pub fn from_failure(context: &str, err: OkxError) -> Self {
        tracing::warn!(context, error = %err, "okx request failed");
        Self {
            signing: err.is_signing_failure(),
            ..Self::new(format!("{context}: {err}"))
        }
    }

    /// True when the request never left the process because signing failed
    pub fn is_signing_failure(&self) -> bool {
        self.signing
    }
}

/// Result type alias for public endpoint methods
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;
