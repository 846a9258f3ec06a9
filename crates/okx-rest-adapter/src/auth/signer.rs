/*
[INPUT]:  Message bytes and the shared API secret
[OUTPUT]: Base64-encoded HMAC-SHA256 digests
[POS]:    Auth layer - keyed digest used by the request signer
[UPDATE]: When changing digest algorithm or encoding
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{OkxError, Result};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer keyed by the API secret
pub struct HmacSigner<'a> {
    secret: &'a [u8],
}

impl<'a> HmacSigner<'a> {
    pub fn new(secret: &'a [u8]) -> Self {
        Self { secret }
    }

    /// Sign a message and return the raw digest
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(self.secret)
            .map_err(|err| OkxError::Signing(err.to_string()))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    /// Sign a message and return the digest in standard base64
    pub fn sign_base64(&self, message: &str) -> Result<String> {
        self.sign(message.as_bytes()).map(|digest| BASE64.encode(digest))
    }
}
