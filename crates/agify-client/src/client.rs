use reqwest::{header, Client, RequestBuilder};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::types::ApiResponse;

/// Name sent by the probes that only care about routing
const PROBE_NAME: &str = "testuser";

/// Client for the age prediction API.
///
/// Every method issues exactly one request and reports what the service
/// actually did: no retries, no caching, no status massaging. Non-2xx
/// answers become [`ApiError::Status`] with the original status and body.
#[derive(Debug, Clone)]
pub struct AgifyClient {
    config: ClientConfig,
    client: Client,
}

impl AgifyClient {
    /// Creates a client from the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { config, client })
    }

    /// Creates a client for `AGIFY_BASE_URL`, or production when unset
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `GET /?name=<name>`. An empty name is sent as-is so the service's own
    /// validation shows through.
    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> ApiResult<ApiResponse> {
        let request = self
            .client
            .get(self.config.endpoint("/"))
            .query(&[("name", name)]);
        self.execute("API request", request).await
    }

    /// `GET /?name=<name>&country_id=<country_id>`
    #[instrument(skip(self))]
    pub async fn get_by_name_with_country(
        &self,
        name: &str,
        country_id: &str,
    ) -> ApiResult<ApiResponse> {
        let request = self
            .client
            .get(self.config.endpoint("/"))
            .query(&[("name", name), ("country_id", country_id)]);
        self.execute("API request with country", request).await
    }

    /// `GET /?name=<name>&apikey=<api_key>`
    #[instrument(skip(self, api_key))]
    pub async fn get_by_name_with_api_key(
        &self,
        name: &str,
        api_key: &str,
    ) -> ApiResult<ApiResponse> {
        let request = self
            .client
            .get(self.config.endpoint("/"))
            .query(&[("name", name), ("apikey", api_key)]);
        self.execute("API request with API key", request).await
    }

    /// One request predicting every name, encoded as repeated `name[]`
    /// parameters in the given order
    #[instrument(skip(self, names), fields(batch_size = names.len()))]
    pub async fn get_batch<S: AsRef<str>>(&self, names: &[S]) -> ApiResult<ApiResponse> {
        let params: Vec<(&str, &str)> = names.iter().map(|n| ("name[]", n.as_ref())).collect();
        let request = self.client.get(self.config.endpoint("/")).query(&params);
        self.execute("Batch API request", request).await
    }

    /// `POST /`, which the service does not support
    #[instrument(skip(self))]
    pub async fn post_unsupported(&self) -> ApiResult<ApiResponse> {
        let request = self
            .client
            .post(self.config.endpoint("/"))
            .json(&json!({ "name": PROBE_NAME }));
        self.execute("POST request", request).await
    }

    /// `GET <path>?name=testuser` against an arbitrary path
    #[instrument(skip(self))]
    pub async fn get_from_endpoint(&self, path: &str) -> ApiResult<ApiResponse> {
        let request = self
            .client
            .get(self.config.endpoint(path))
            .query(&[("name", PROBE_NAME)]);
        self.execute(&format!("Request to {}", path), request).await
    }

    /// `GET /` with no query string at all
    #[instrument(skip(self))]
    pub async fn get_without_name_param(&self) -> ApiResult<ApiResponse> {
        let request = self.client.get(self.config.endpoint("/"));
        self.execute("Request without name parameter", request).await
    }

    async fn execute(&self, context: &str, request: RequestBuilder) -> ApiResult<ApiResponse> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            context: context.to_string(),
            source,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| ApiError::Transport {
            context: context.to_string(),
            source,
        })?;
        let data = decode_body(text);

        debug!(%status, "{} answered", context);

        if status.is_success() {
            Ok(ApiResponse::new(status, data))
        } else {
            Err(ApiError::Status {
                context: context.to_string(),
                status,
                body: (!data.is_null()).then_some(data),
            })
        }
    }
}

/// JSON when possible, the raw text otherwise, `null` for an empty body
fn decode_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
