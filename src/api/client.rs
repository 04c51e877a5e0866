use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Default NewsAPI base URL. Endpoint paths are appended verbatim, so the
/// trailing slash matters.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

/// Query parameter name the credential travels under.
const API_KEY_PARAM: &str = "apiKey";

/// Fixed per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Raw outcome of a successful fetch: status code and body text.
#[derive(Debug, Clone)]
pub struct NewsResponse {
    pub status: u16,
    pub body: String,
}

pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl NewsClient {
    /// Create a client for `base_url`, authenticating every request with
    /// `api_key`. Both must be non-empty. The key is sent as an `apiKey`
    /// query parameter, not a header.
    pub fn new(base_url: &str, api_key: &str) -> ApiResult<Self> {
        if base_url.is_empty() {
            return Err(ApiError::InvalidArgument(
                "base URL cannot be empty".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(ApiError::InvalidArgument(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Issue a GET against `endpoint` with the given query parameters.
    ///
    /// The caller's map is copied before the credential is inserted, so it is
    /// never mutated. The encoded query carries the `apiKey` pair exactly
    /// once (a caller-supplied `apiKey` entry is replaced by the client's
    /// credential); pair order is unspecified.
    ///
    /// Statuses in 200..300 resolve to `Ok`. Any other status becomes
    /// [`ApiError::Api`] with the response body as diagnostic text, and
    /// network failures become [`ApiError::Transport`].
    #[instrument(skip(self, params))]
    pub async fn fetch_news(
        &self,
        endpoint: &str,
        params: &HashMap<String, String>,
    ) -> ApiResult<NewsResponse> {
        let url = self.build_url(endpoint, params)?;
        // Log without the query string; it carries the credential.
        debug!("GET {}{}", self.base_url, endpoint);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(NewsResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Build the request URL: base URL and endpoint concatenated verbatim,
    /// then the form-urlencoded parameters plus the credential.
    fn build_url(&self, endpoint: &str, params: &HashMap<String, String>) -> ApiResult<Url> {
        // Copy so the caller's map is never mutated.
        let mut params = params.clone();
        params.insert(API_KEY_PARAM.to_string(), self.api_key.clone());

        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}
