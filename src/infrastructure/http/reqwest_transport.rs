//! Reqwest-backed implementation of the HTTP transport.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::transport::HttpTransport;
use crate::error::{ApiError, ApiResult};
use crate::utils::OriginResolver;

/// Production HTTP transport.
///
/// Resolves service-relative paths through the origin resolver, issues the
/// request, and converts the outcome into the tagged transport result. Every
/// failure is logged with method, URL, status, and elapsed time; the raised
/// error carries only the status and a short message.
///
/// No timeout is enforced here; configure one on the [`Client`] if the
/// caller needs it.
pub struct ReqwestTransport {
    client: Client,
    resolver: OriginResolver,
}

impl ReqwestTransport {
    /// Creates a transport from a reqwest client and an origin resolver.
    pub fn new(client: Client, resolver: OriginResolver) -> Self {
        Self { client, resolver }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ApiResult<Option<Value>> {
        let url = self.resolver.resolve(path);
        let started = Instant::now();

        let mut request = self.client.request(method.clone(), url.as_str());
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(
                method = %method,
                url = %url,
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %e,
                "HTTP request failed"
            );
            ApiError::Transport {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if !status.is_success() {
            warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                elapsed_ms,
                "HTTP request answered with error status"
            );
            return Err(ApiError::http_status(
                status.as_u16(),
                format!("HTTP {} for {}", status.as_u16(), url),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::connection(e.to_string()))?;

        debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms,
            bytes = bytes.len(),
            "HTTP request completed"
        );

        if bytes.is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::http_status(
                status.as_u16(),
                format!("undecodable JSON body from {}: {}", url, e),
            )
        })?;
        Ok(Some(value))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, path: &str) -> ApiResult<Option<Value>> {
        self.execute(Method::GET, path, None).await
    }

    async fn post_json(&self, path: &str, body: Value) -> ApiResult<Option<Value>> {
        self.execute(Method::POST, path, Some(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeContext;

    // In a detached context with no base URL the resolver leaves the path
    // relative, which reqwest rejects before any network I/O.
    #[tokio::test]
    async fn test_unresolvable_relative_path_is_transport_failure() {
        let resolver = OriginResolver::new(None, RuntimeContext::detached());
        let transport = ReqwestTransport::new(Client::new(), resolver);

        let result = transport.get_json("/api/ranking").await;

        match result {
            Err(ApiError::Transport { status, .. }) => assert!(status.is_none()),
            other => panic!("expected transport failure, got {:?}", other),
        }
    }
}
