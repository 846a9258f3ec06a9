/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public OKX adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, HmacSigner};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    EXCHANGE_NAME,
    ExchangeError,
    ExchangeResult,
    OKX_BASE_URL,
    OkxClient,
    OkxError,
    RequestSigner,
    Result,
    SignedRequest,
};

// Re-export all types
pub use types::*;
