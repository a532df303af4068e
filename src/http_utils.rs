//! HTTP transport for the PagerTree CLI client.
//!
//! This module owns the single persistent HTTP session used for the whole
//! process. Every request carries the same authorization, content type and
//! user agent headers, and every response is funnelled through one place that
//! turns non-2xx statuses into [`ApiError::RequestFailed`].

use crate::configuration::Configuration;
use crate::pagertree::ApiError;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, trace};

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("pagertree-cli/", env!("CARGO_PKG_VERSION"));

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header
    pub api_key: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl HttpRequestConfig {
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            base_url: configuration.base_url().trim_end_matches('/').to_string(),
            api_key: configuration.api_key().to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper with common request handling logic
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpRequestConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    ///
    /// The default headers are installed on the underlying session once, so
    /// individual requests never have to repeat them.
    pub fn new(config: HttpRequestConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
            ApiError::Validation("API key contains characters not allowed in a header".to_string())
        })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            ApiError::Validation("user agent contains invalid characters".to_string())
        })?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { client, config })
    }

    /// Get a reference to the HTTP client configuration
    pub fn config(&self) -> &HttpRequestConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Make a GET request with optional query parameters
    pub async fn get<Q>(&self, path: &str, query: Option<&Q>) -> Result<Option<Value>, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute_request(Method::GET, path, request).await
    }

    /// Make a POST request to the specified path with a JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Option<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.execute_request(Method::POST, path, request).await
    }

    /// Make a PUT request to the specified path, with a JSON body if one is given
    pub async fn put<B>(&self, path: &str, body: Option<&B>) -> Result<Option<Value>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.put(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute_request(Method::PUT, path, request).await
    }

    /// Make a DELETE request to the specified path
    pub async fn delete(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let request = self.client.delete(self.url(path));
        self.execute_request(Method::DELETE, path, request).await
    }

    /// Send the request and normalize the response.
    ///
    /// Returns `Ok(None)` for a successful response with an empty body.
    async fn execute_request(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Option<Value>, ApiError> {
        debug!("{} {}", method, path);

        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;
        trace!("Raw response ({}): {}", status, body);

        if !status.is_success() {
            debug!("{} {} failed with status {}", method, path, status);
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                error!("Failed to deserialize response: {}. Raw response: {}", e, body);
                Err(ApiError::Json(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> HttpRequestConfig {
        HttpRequestConfig {
            base_url: base_url.to_string(),
            api_key: "secret".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = HttpClient::new(config("https://api.example.com/api/v4")).unwrap();
        assert_eq!(
            client.url("/alerts/01"),
            "https://api.example.com/api/v4/alerts/01"
        );
    }

    #[test]
    fn test_api_key_with_newline_is_rejected() {
        let mut cfg = config("https://api.example.com");
        cfg.api_key = "bad\nkey".to_string();
        assert!(matches!(HttpClient::new(cfg), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("pagertree-cli/"));
    }
}
