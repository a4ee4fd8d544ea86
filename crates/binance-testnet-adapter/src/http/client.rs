/*
[INPUT]:  HTTP configuration (base URL, timeouts, recvWindow) and API credentials
[OUTPUT]: Configured reqwest client ready for signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{BinanceError, RequestSigner, Result};
use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Base URL for the USDT-M futures testnet
pub const TESTNET_BASE_URL: &str = "https://testnet.binancefuture.com";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub recv_window: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window: Duration::from_millis(5000),
        }
    }
}

/// Credentials for SIGNED requests
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Build credentials, rejecting empty values
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.trim().is_empty() || api_secret.trim().is_empty() {
            return Err(BinanceError::Authentication {
                message: format!("{API_KEY_ENV} and {API_SECRET_ENV} must both be non-empty"),
            });
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = [API_KEY_ENV, API_SECRET_ENV]
            .into_iter()
            .filter(|name| lookup(*name).is_none_or(|value| value.trim().is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(BinanceError::Authentication {
                message: format!("missing {}", missing.join(", ")),
            });
        }
        Self::new(
            lookup(API_KEY_ENV).unwrap_or_default(),
            lookup(API_SECRET_ENV).unwrap_or_default(),
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the futures API
#[derive(Debug)]
pub struct BinanceClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
    config: ClientConfig,
}

impl BinanceClient {
    /// Create a testnet client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a testnet client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::with_config_and_base_url(config, credentials, TESTNET_BASE_URL)
    }

    /// Create a client against an explicit base URL
    pub fn with_config_and_base_url(
        config: ClientConfig,
        credentials: Credentials,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            signer: RequestSigner::new(credentials.api_secret.clone()),
            credentials,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build full URL for an endpoint
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build a SIGNED request with the parameters as a form body
    ///
    /// `timestamp` and `recvWindow` are appended before signing; the
    /// signature covers the exact body bytes sent.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;

        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }
        serializer.append_pair(
            "recvWindow",
            &self.config.recv_window.as_millis().to_string(),
        );
        serializer.append_pair("timestamp", &Utc::now().timestamp_millis().to_string());
        let mut body = serializer.finish();

        let signature = self.signer.sign_request(&body)?;
        body.push_str("&signature=");
        body.push_str(&signature);

        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body))
    }

    /// Send a request and decode a JSON body, mapping exchange errors
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(|err| self.transport_error(err))?;
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(Self::status_error(response).await);
        }

        let text = response.text().await.map_err(|err| self.transport_error(err))?;
        serde_json::from_str(&text).map_err(|err| {
            BinanceError::InvalidResponse(format!("unexpected response body ({err}): {text}"))
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> BinanceError {
        if err.is_timeout() {
            BinanceError::Timeout {
                duration: self.config.timeout.as_secs(),
            }
        } else {
            BinanceError::Http(err)
        }
    }

    async fn status_error(response: Response) -> BinanceError {
        let status = response.status();
        // 418 is an IP ban after ignoring 429s
        if status.as_u16() == 429 || status.as_u16() == 418 {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(60);
            return BinanceError::RateLimit { retry_after };
        }
        let body = response.text().await.unwrap_or_default();
        BinanceError::api_error(status, &body)
    }
}
