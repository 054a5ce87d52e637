//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and injected into the client;
//! nothing reads ambient globals at request time. The origin resolver
//! receives the loaded values at construction and stays a pure function of
//! its inputs (see [`crate::utils::origin`]).
//!
//! ## Variables
//!
//! - `API_BASE_URL` - Base URL of the deployed backend (e.g.
//!   `https://shortener.example.com/api`). An empty value counts as unset,
//!   which selects the same-host fallback of the origin policy.
//! - `SHORTENER_SCHEME` - Scheme of the runtime context (default: `http`)
//! - `SHORTENER_HOST` - Hostname of the runtime context (default:
//!   `localhost`; set empty to model a detached, hostless context)
//! - `SHORTENER_PORT` - Port of the runtime context (optional)
//!
//! ```bash
//! export API_BASE_URL="https://shortener.example.com/api"
//! ```

use anyhow::{Context, Result};
use std::env;

/// Runtime context the client executes in.
///
/// Captures where the caller is running (scheme/host/port), which the origin
/// resolver uses to detect local development and to build the same-host
/// fallback. A context without a hostname is "detached": relative paths are
/// then left untouched.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    pub scheme: String,
    pub hostname: Option<String>,
    pub port: Option<u16>,
}

impl RuntimeContext {
    /// Creates a new runtime context.
    pub fn new(scheme: impl Into<String>, hostname: Option<String>, port: Option<u16>) -> Self {
        Self {
            scheme: scheme.into(),
            hostname,
            port,
        }
    }

    /// A context with no host information (tests, non-interactive tooling).
    pub fn detached() -> Self {
        Self {
            scheme: "http".to_string(),
            hostname: None,
            port: None,
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Configured backend base URL. `None` selects the same-host fallback.
    pub api_base_url: Option<String>,
    /// Where the client itself is running.
    pub context: RuntimeContext,
}

impl ClientConfig {
    /// Creates a configuration from explicit values.
    ///
    /// An empty base URL is normalized to `None`.
    pub fn new(api_base_url: Option<String>, context: RuntimeContext) -> Self {
        Self {
            api_base_url: api_base_url.filter(|url| !url.is_empty()),
            context,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is set to a value that does not
    /// parse as an absolute URL, or if `SHORTENER_PORT` is not a port number.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL").ok().filter(|url| !url.is_empty());

        if let Some(ref base) = api_base_url {
            url::Url::parse(base)
                .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", base))?;
        }

        let scheme = env::var("SHORTENER_SCHEME").unwrap_or_else(|_| "http".to_string());
        let hostname = match env::var("SHORTENER_HOST") {
            Ok(host) if host.is_empty() => None,
            Ok(host) => Some(host),
            Err(_) => Some("localhost".to_string()),
        };
        let port = match env::var("SHORTENER_PORT") {
            Ok(port) => Some(
                port.parse::<u16>()
                    .with_context(|| format!("SHORTENER_PORT is not a valid port: '{}'", port))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            api_base_url,
            context: RuntimeContext::new(scheme, hostname, port),
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        match &self.api_base_url {
            Some(base) => tracing::info!("  API base URL: {}", base),
            None => tracing::info!("  API base URL: (unset, same-host fallback)"),
        }
        tracing::info!(
            "  Runtime context: {}://{}:{}",
            self.context.scheme,
            self.context.hostname.as_deref().unwrap_or("(detached)"),
            self.context
                .port
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "API_BASE_URL",
            "SHORTENER_SCHEME",
            "SHORTENER_HOST",
            "SHORTENER_PORT",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = ClientConfig::from_env().unwrap();
        assert!(config.api_base_url.is_none());
        assert_eq!(config.context.scheme, "http");
        assert_eq!(config.context.hostname.as_deref(), Some("localhost"));
        assert!(config.context.port.is_none());
    }

    #[test]
    #[serial]
    fn test_empty_base_url_counts_as_unset() {
        clear_env();
        unsafe { env::set_var("API_BASE_URL", "") };
        let config = ClientConfig::from_env().unwrap();
        assert!(config.api_base_url.is_none());
    }

    #[test]
    #[serial]
    fn test_invalid_base_url_is_error() {
        clear_env();
        unsafe { env::set_var("API_BASE_URL", "not a url") };
        assert!(ClientConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_context_from_env() {
        clear_env();
        unsafe {
            env::set_var("SHORTENER_SCHEME", "https");
            env::set_var("SHORTENER_HOST", "app.example.com");
            env::set_var("SHORTENER_PORT", "4201");
        }
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.context.scheme, "https");
        assert_eq!(config.context.hostname.as_deref(), Some("app.example.com"));
        assert_eq!(config.context.port, Some(4201));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        unsafe { env::set_var("SHORTENER_PORT", "not-a-port") };
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    fn test_new_normalizes_empty_base() {
        let config = ClientConfig::new(Some(String::new()), RuntimeContext::detached());
        assert!(config.api_base_url.is_none());
    }
}
