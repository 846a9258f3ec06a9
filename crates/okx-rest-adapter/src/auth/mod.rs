/*
[INPUT]:  API credentials (explicit or environment)
[OUTPUT]: Credential ownership and HMAC-SHA256 digests
[POS]:    Auth layer - handles OKX API key authentication
[UPDATE]: When credential sources or digest methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::HmacSigner;
