//! Remote Data Source
//!
//! reqwest-backed client for the todos endpoint. One request per call,
//! no retries, no caching.

use reqwest::Client as HttpClient;
use url::Url;

use crate::models::TodoList;

/// Service the app talks to unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/";

/// Errors produced by the remote data source
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: unreachable host, timeout, interrupted body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with a success status
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    /// The body does not match the expected page shape
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot absorb the endpoint path
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// HTTP client for the remote todos API
#[derive(Debug, Clone)]
pub struct TodoApi {
    http_client: HttpClient,
    base_url: Url,
}

impl TodoApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(base_url)?))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the server's default page of todos.
    ///
    /// The body is read as text and decoded separately so transport
    /// failures and shape mismatches stay distinct variants.
    pub async fn list(&self) -> Result<TodoList, ApiError> {
        let url = self.todos_url()?;
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn todos_url(&self) -> Result<Url, url::ParseError> {
        self.base_url.join("todos")
    }
}

impl Default for TodoApi {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("Failed to parse default base URL");
        Self::new(base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_service() {
        let api = TodoApi::default();
        assert_eq!(api.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_url() {
        let api = TodoApi::from_url("http://localhost:3001").unwrap();
        assert_eq!(api.base_url().to_string(), "http://localhost:3001/");
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let api = TodoApi::from_url("http://localhost:3001/").unwrap();
        let url = api.todos_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/todos");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(TodoApi::from_url("not a base url").is_err());
    }
}
