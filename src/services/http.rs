//! Thin HTTP client over the backend race API
//!
//! The backend wraps every payload in a `{success, data, message, error}`
//! envelope; this client unwraps it, promoting `success: false` bodies and
//! transport failures alike into [`ApiError`] so service wrappers deal with a
//! single error shape.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::core::config;

/// Backend API failure: transport-level or reported by the envelope
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status, when the request got far enough to have one
    pub status: Option<StatusCode>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<StatusCode>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// True when the backend answered 404
    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::new(e.to_string(), e.status())
    }
}

/// Standard response envelope used by every backend endpoint
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
    error: Option<String>,
}

/// Shared reqwest wrapper carrying base URL, bearer token and timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Builds a client from process configuration
    pub fn from_config() -> Result<Self, ApiError> {
        Self::new(config::API_BASE_URL.clone(), config::BOT_BEARER_TOKEN.clone())
    }

    pub fn new(base_url: String, bearer_token: Option<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::new(format!("invalid bearer token: {}", e), None))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config::network::api_timeout())
            .default_headers(headers)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query).await
    }

    pub async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[]).await
    }

    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("API Request: POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        self.unwrap_envelope(response).await
    }

    pub async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::PUT, path, &[]).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, &[]).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("API Request: {} {}", method, url);

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        self.unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            log::error!("API Response Error: {} {}", status, url);
            return Err(ApiError::new(
                format!("API request failed with status {}", status),
                Some(status),
            ));
        }

        log::info!("API Response Success: {} {}", status, url);

        let envelope: ApiEnvelope<T> = response.json().await?;

        if !envelope.success {
            let message = envelope
                .error
                .or(envelope.message)
                .unwrap_or_else(|| "API operation failed".to_string());
            log::error!("API Business Logic Error: {} ({})", message, url);
            return Err(ApiError::new(message, Some(status)));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::new("API response missing data field", Some(status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpClient::new("http://localhost:4000/api/".to_string(), None).unwrap();
        assert_eq!(client.base_url, "http://localhost:4000/api");
    }

    #[test]
    fn test_api_error_not_found() {
        let e = ApiError::new("gone", Some(StatusCode::NOT_FOUND));
        assert!(e.is_not_found());
        let e = ApiError::new("server", Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!e.is_not_found());
    }
}
