//! Top-level client wiring configuration, transport, and facades.

use std::sync::Arc;

use anyhow::Result;

use crate::application::facades::{
    RankingFacade, ShortenFacade, StatsFacade, StatsListFacade, SummaryFacade,
};
use crate::config::ClientConfig;
use crate::domain::transport::HttpTransport;
use crate::infrastructure::http::ReqwestTransport;
use crate::utils::OriginResolver;

/// The assembled client: one facade per feature, all sharing one transport.
///
/// Each facade exclusively owns its operation state; the shared transport is
/// stateless. Generic over the transport so tests can inject a stub.
pub struct ShortenerClient<T: HttpTransport> {
    pub shorten: ShortenFacade<T>,
    pub stats: StatsFacade<T>,
    pub stats_list: StatsListFacade<T>,
    pub ranking: RankingFacade<T>,
    pub summary: SummaryFacade<T>,
}

impl<T: HttpTransport> ShortenerClient<T> {
    /// Assembles a client over an existing transport.
    pub fn with_transport(transport: Arc<T>) -> Self {
        Self {
            shorten: ShortenFacade::new(transport.clone()),
            stats: StatsFacade::new(transport.clone()),
            stats_list: StatsListFacade::new(transport.clone()),
            ranking: RankingFacade::new(transport.clone()),
            summary: SummaryFacade::new(transport),
        }
    }
}

impl ShortenerClient<ReqwestTransport> {
    /// Assembles a production client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let resolver = OriginResolver::new(config.api_base_url.clone(), config.context.clone());
        let client = reqwest::Client::builder().build()?;
        let transport = Arc::new(ReqwestTransport::new(client, resolver));
        Ok(Self::with_transport(transport))
    }
}
