/*
[INPUT]:  HTTP configuration (base URL, timeouts, demo flag) and credentials
[OUTPUT]: Configured reqwest client plus signed GET/POST helpers
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::auth::Credentials;
use crate::http::error::EXCHANGE_NAME;
use crate::http::signature::{HEADER_KEY, HEADER_PASSPHRASE};
use crate::http::{ExchangeError, ExchangeResult, OkxError, RequestSigner, Result};
use crate::types::ApiResponse;

/// Base URL for the OKX REST API
pub const OKX_BASE_URL: &str = "https://www.okx.com";

const SIMULATED_TRADING_HEADER: &str = "x-simulated-trading";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request budget
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub connect_timeout: Duration,
    /// Route requests to OKX demo trading
    #[serde(default)]
    pub simulated_trading: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            connect_timeout: default_timeout(),
            simulated_trading: false,
        }
    }
}

fn default_base_url() -> String {
    OKX_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Durations as (possibly fractional) seconds, e.g. `timeout: 0.5`
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer, de};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|err| de::Error::custom(format!("invalid duration {secs}: {err}")))
    }
}

/// Signed REST client for the OKX API.
///
/// Holds the only long-lived state: a pooled transport with static identity
/// headers and the signer owning the credentials. Every call is independent.
#[derive(Debug)]
pub struct OkxClient {
    http_client: Client,
    base_url: Url,
    signer: RequestSigner,
}

impl OkxClient {
    /// Create a client against the production host with default settings
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(api_key, api_secret, passphrase),
            ClientConfig::default(),
        )
    }

    /// Create a client from credentials found in the environment
    pub fn from_env(config: ClientConfig) -> Result<Self> {
        Self::with_config(Credentials::from_env()?, config)
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let headers = static_headers(&credentials, config.simulated_trading)?;
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            signer: RequestSigner::new(credentials),
        })
    }

    /// Exchange identifier, also reported in [`ExchangeError::ex`]
    pub fn name(&self) -> &'static str {
        EXCHANGE_NAME
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Resolve the endpoint URL, sign the path it actually carries, then build
    /// the request from the signed strings.
    ///
    /// The endpoint path is appended below the base URL's own path, and the
    /// signature covers the endpoint part only (`/api/v5/...`), normalized the
    /// same way it is transmitted. Fails before any I/O when the body cannot
    /// be serialized.
    pub(crate) fn signed_request<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&T>,
    ) -> Result<RequestBuilder>
    where
        T: Serialize + ?Sized,
    {
        let mut url = self.endpoint_url(path)?;
        let prefix_len = self.base_url.path().trim_end_matches('/').len();
        let endpoint_path = url.path()[prefix_len..].to_string();

        let signed = self.signer.sign_request(method, &endpoint_path, query, body)?;
        if !signed.query.is_empty() {
            url.set_query(Some(&signed.query));
        }
        debug!(method = %signed.method, path = %signed.request_path(), "okx signed request");

        let mut builder = self
            .http_client
            .request(signed.method.clone(), url)
            .headers(signed.headers()?);
        if !signed.body.is_empty() {
            builder = builder.body(signed.body);
        }
        Ok(builder)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| OkxError::Config(format!("base url {} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(path.trim_start_matches('/').split('/'));
        Ok(url)
    }

    /// Send a request and decode the JSON body
    pub(crate) async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(OkxError::api_error(status, text));
        }
        if text.trim().is_empty() {
            return Err(OkxError::InvalidResponse("empty response body".to_string()));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Signed GET returning the first element of the envelope's `data` array
    pub(crate) async fn fetch_first(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let builder = self.signed_request::<()>(Method::GET, path, query, None)?;
        let envelope: ApiResponse<Value> = serde_json::from_value(self.send_json(builder).await?)?;

        if !envelope.is_success() {
            return Err(OkxError::Api {
                code: envelope.code.unwrap_or(-1),
                message: envelope.msg,
            });
        }
        envelope
            .into_first()
            .ok_or_else(|| OkxError::InvalidResponse("missing or empty data array".to_string()))
    }

    /// Signed POST returning the raw response
    pub(crate) async fn submit<T>(&self, path: &str, body: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let builder = self.signed_request(Method::POST, path, &[], Some(body))?;
        self.send_json(builder).await
    }

    /// Generic signed GET.
    ///
    /// Transport failures, non-zero envelope codes and an absent or empty
    /// `data` array all surface as the same [`ExchangeError`].
    pub async fn get_request(&self, path: &str, query: &[(&str, String)]) -> ExchangeResult<Value> {
        self.fetch_first(path, query)
            .await
            .map_err(|err| ExchangeError::from_failure("get_request", err))
    }

    /// Generic signed POST returning the raw response body
    pub async fn post_request<T>(&self, path: &str, body: &T) -> ExchangeResult<Value>
    where
        T: Serialize + ?Sized,
    {
        self.submit(path, body)
            .await
            .map_err(|err| ExchangeError::from_failure("post_request", err))
    }
}

/// Parse the base URL, dropping trailing slashes, query and fragment
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(OkxError::Config(format!("base url {raw} cannot carry a path")));
    }
    let path = url.path().trim_end_matches('/').to_string();
    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn static_headers(credentials: &Credentials, simulated_trading: bool) -> Result<HeaderMap> {
    let secret_header = |value: &str, name: &str| {
        HeaderValue::from_str(value)
            .map(|mut header| {
                header.set_sensitive(true);
                header
            })
            .map_err(|_| OkxError::Config(format!("{name} is not a valid header value")))
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HEADER_KEY, secret_header(credentials.api_key(), "api key")?);
    headers.insert(
        HEADER_PASSPHRASE,
        secret_header(credentials.passphrase(), "passphrase")?,
    );
    if simulated_trading {
        headers.insert(SIMULATED_TRADING_HEADER, HeaderValue::from_static("1"));
    }
    Ok(headers)
}
