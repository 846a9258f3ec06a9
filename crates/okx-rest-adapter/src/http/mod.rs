/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Signed HTTP calls and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{EXCHANGE_NAME, ExchangeError, ExchangeResult, OkxError, Result};
pub use signature::{RequestSigner, SignedRequest};

pub use client::{ClientConfig, OKX_BASE_URL, OkxClient};
