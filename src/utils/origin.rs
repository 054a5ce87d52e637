//! Request origin resolution across deployment environments.
//!
//! Decides which absolute URL a service-relative path maps to. The policy,
//! in priority order:
//!
//! 1. Absolute paths (no leading `/`) pass through unchanged.
//! 2. In a local dev context (localhost on a dev-server port) the path stays
//!    relative; the dev proxy handles routing and CORS.
//! 3. With a configured base URL, the base loses any trailing `/` and
//!    trailing `/api` suffix, the path loses its leading `/api` segment, and
//!    the two are concatenated.
//! 4. Without a base URL the resolver guesses same-host at the default
//!    backend port, or leaves the path relative in a detached context.
//!
//! Resolution is a pure function of (path, context, config); the resolver
//! holds only immutable construction-time inputs and caches nothing.

use crate::config::RuntimeContext;

/// Dev-server ports whose traffic is routed by a local reverse proxy.
pub const DEV_PORTS: [u16; 2] = [4201, 4203];

/// Backend port used for the same-host fallback.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Resolves service-relative paths to absolute request URLs.
#[derive(Debug, Clone)]
pub struct OriginResolver {
    base_url: Option<String>,
    context: RuntimeContext,
}

impl OriginResolver {
    /// Creates a resolver from a configured base URL and runtime context.
    ///
    /// An empty base URL is treated as unset.
    pub fn new(base_url: Option<String>, context: RuntimeContext) -> Self {
        Self {
            base_url: base_url.filter(|url| !url.is_empty()),
            context,
        }
    }

    /// Resolves a request path to the URL to call.
    pub fn resolve(&self, path: &str) -> String {
        if !path.starts_with('/') {
            return path.to_string();
        }

        if self.is_local_dev() {
            return path.to_string();
        }

        if let Some(base) = &self.base_url {
            let base = base.trim_end_matches('/');
            let base = base.strip_suffix("/api").unwrap_or(base);
            return format!("{}{}", base, strip_api_prefix(path));
        }

        // The backend serves bare paths on its own port; without a
        // configured base the best guess is the current host.
        match &self.context.hostname {
            Some(host) => format!(
                "{}://{}:{}{}",
                self.context.scheme,
                host,
                DEFAULT_API_PORT,
                strip_api_prefix(path)
            ),
            None => path.to_string(),
        }
    }

    fn is_local_dev(&self) -> bool {
        let local_host = matches!(
            self.context.hostname.as_deref(),
            Some("localhost") | Some("127.0.0.1")
        );
        local_host && self.context.port.is_some_and(|p| DEV_PORTS.contains(&p))
    }
}

/// Strips a leading `/api` segment (`/api/stats` -> `/stats`, `/api` -> `/`).
fn strip_api_prefix(path: &str) -> &str {
    match path.strip_prefix("/api") {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}
