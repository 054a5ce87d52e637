//! Shorten endpoint adapter and its request type.

use std::sync::Arc;
use std::sync::LazyLock;

use crate::application::adapters::dto::{self, ShortLinkDto};
use crate::domain::entities::ShortLink;
use crate::domain::transport::HttpTransport;
use crate::error::ApiResult;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use validator::{Validate, ValidationErrors};

/// Compiled regex for custom code validation: exactly five alphanumerics.
static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{5}$").unwrap());

/// Request to shorten a URL.
///
/// Validated at construction; a [`ShortenRequest`] that exists is well-formed,
/// so the facade and adapter never re-check it.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code (five alphanumeric characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = "*CODE_REGEX",
        message = "code must be exactly 5 alphanumeric characters"
    ))]
    pub code: Option<String>,
}

impl ShortenRequest {
    /// Builds a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when the URL is malformed or the custom
    /// code does not match `^[A-Za-z0-9]{5}$`.
    pub fn new(url: impl Into<String>, code: Option<String>) -> Result<Self, ValidationErrors> {
        let request = Self {
            url: url.into(),
            code,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Adapter for the short link creation endpoint.
///
/// Issues the POST and converts the raw response into a validated
/// [`ShortLink`], rejecting malformed payloads.
pub struct ShortenAdapter<T: HttpTransport> {
    transport: Arc<T>,
}

impl<T: HttpTransport> ShortenAdapter<T> {
    /// Creates a new shorten adapter.
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Submits a short link request.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ApiError::EmptyResponse`] on a missing body,
    /// [`crate::error::ApiError::InvalidResponse`] on a malformed one, and
    /// propagates transport failures unchanged.
    pub async fn create(&self, request: &ShortenRequest) -> ApiResult<ShortLink> {
        let mut body = json!({ "url": request.url });
        if let Some(code) = &request.code {
            body["code"] = json!(code);
        }

        let response = self.transport.post_json("/api/shorten", body).await?;
        dto::decode::<ShortLinkDto>(response)?.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transport::MockHttpTransport;
    use crate::error::ApiError;

    #[test]
    fn test_request_accepts_valid_input() {
        let request = ShortenRequest::new("https://example.com", Some("abc12".to_string()));
        assert!(request.is_ok());
    }

    #[test]
    fn test_request_without_code_is_valid() {
        assert!(ShortenRequest::new("https://example.com", None).is_ok());
    }

    #[test]
    fn test_request_rejects_malformed_url() {
        assert!(ShortenRequest::new("not a url", None).is_err());
    }

    #[test]
    fn test_request_rejects_bad_code() {
        for code in ["abcd", "abcdef", "ab c1", "abc1!"] {
            let request = ShortenRequest::new("https://example.com", Some(code.to_string()));
            assert!(request.is_err(), "code '{}' should be rejected", code);
        }
    }

    #[test]
    fn test_request_serializes_without_absent_code() {
        let request = ShortenRequest::new("https://example.com", None).unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("code").is_none());
    }

    #[tokio::test]
    async fn test_create_posts_to_shorten_path() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_post_json()
            .withf(|path, body| path == "/api/shorten" && body["url"] == "https://example.com")
            .return_once(|_, _| {
                Ok(Some(serde_json::json!({
                    "id": 1,
                    "code": "abc12",
                    "originalUrl": "https://example.com",
                    "createdAt": "2025-01-01T00:00:00Z",
                })))
            });

        let adapter = ShortenAdapter::new(Arc::new(transport));
        let request = ShortenRequest::new("https://example.com", None).unwrap();
        let link = adapter.create(&request).await.unwrap();

        assert_eq!(link.code, "abc12");
    }

    #[tokio::test]
    async fn test_create_empty_body_is_empty_response() {
        let mut transport = MockHttpTransport::new();
        transport.expect_post_json().return_once(|_, _| Ok(None));

        let adapter = ShortenAdapter::new(Arc::new(transport));
        let request = ShortenRequest::new("https://example.com", None).unwrap();

        assert!(matches!(
            adapter.create(&request).await,
            Err(ApiError::EmptyResponse)
        ));
    }
}
