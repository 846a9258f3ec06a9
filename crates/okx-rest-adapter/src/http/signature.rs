/*
[INPUT]:  Method, path, query parameters, body and API credentials
[OUTPUT]: SignedRequest (timestamp + base64 HMAC) and its auth headers
[POS]:    HTTP layer - request signing for every authenticated call
[UPDATE]: When changing prehash format, encodings or header names
*/

use chrono::{DateTime, Utc};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use url::form_urlencoded;

use crate::auth::{Credentials, HmacSigner};
use crate::http::{OkxError, Result};

pub const HEADER_KEY: &str = "OK-ACCESS-KEY";
pub const HEADER_SIGN: &str = "OK-ACCESS-SIGN";
pub const HEADER_TIMESTAMP: &str = "OK-ACCESS-TIMESTAMP";
pub const HEADER_PASSPHRASE: &str = "OK-ACCESS-PASSPHRASE";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// One signed call, computed right before it is sent and then dropped.
///
/// `query` and `body` hold the exact strings that go on the wire, so the
/// server recomputes the same prehash from what it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    pub timestamp: String,
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: String,
    pub signature: String,
}

impl SignedRequest {
    /// Path plus `?query` when the query is non-empty
    pub fn request_path(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Message the signature was computed over
    pub fn prehash(&self) -> String {
        prehash(&self.timestamp, &self.method, &self.request_path(), &self.body)
    }

    /// Per-call headers: timestamp and signature
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_TIMESTAMP, header_value(&self.timestamp)?);
        let mut sign = header_value(&self.signature)?;
        sign.set_sensitive(true);
        headers.insert(HEADER_SIGN, sign);
        Ok(headers)
    }
}

/// Signs outgoing requests with HMAC-SHA256 over the OKX prehash string
#[derive(Debug)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current UTC time, millisecond precision, `Z` suffix
    pub fn timestamp() -> String {
        format_timestamp(Utc::now())
    }

    /// Sign a request stamped with the current time
    pub fn sign_request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&T>,
    ) -> Result<SignedRequest>
    where
        T: Serialize + ?Sized,
    {
        self.sign_at(Self::timestamp(), method, path, query, body)
    }

    /// Sign a request with an explicit timestamp.
    ///
    /// Format: `timestamp + METHOD + path[?query] + body`, where the body is
    /// always empty for GET.
    pub fn sign_at<T>(
        &self,
        timestamp: String,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&T>,
    ) -> Result<SignedRequest>
    where
        T: Serialize + ?Sized,
    {
        let body = if method == Method::GET {
            String::new()
        } else {
            canonical_body(body)?
        };

        let mut signed = SignedRequest {
            timestamp,
            method,
            path: path.to_string(),
            query: canonical_query(query),
            body,
            signature: String::new(),
        };
        signed.signature =
            HmacSigner::new(self.credentials.secret_bytes()).sign_base64(&signed.prehash())?;
        Ok(signed)
    }
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Build the string that gets signed
pub fn prehash(timestamp: &str, method: &Method, request_path: &str, body: &str) -> String {
    format!(
        "{timestamp}{}{request_path}{body}",
        method.as_str().to_uppercase()
    )
}

/// `key=value&key=value`, form-urlencoded, caller order preserved
pub fn canonical_query(params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Compact JSON in field/insertion order, or empty when there is no body
pub fn canonical_body<T>(body: Option<&T>) -> Result<String>
where
    T: Serialize + ?Sized,
{
    match body {
        None => Ok(String::new()),
        Some(value) => {
            let encoded = serde_json::to_string(value)
                .map_err(|err| OkxError::Signing(format!("body serialization: {err}")))?;
            Ok(match encoded.as_str() {
                "null" | "{}" => String::new(),
                _ => encoded,
            })
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|err| OkxError::Signing(format!("invalid header value: {err}")))
}
