//! BrasilAPI Address Source
//!
//! Implements AddressSource against BrasilAPI's CEP v1 endpoint.
//!
//! See: https://brasilapi.com.br/docs#tag/CEP

use super::endpoint::endpoint_url;
use crate::domain::entities::Address;
use crate::domain::errors::LookupError;
use crate::domain::ports::{AddressSource, HttpFetcher};
use crate::domain::race_context::RaceContext;
use crate::domain::services::Normalizer;
use crate::domain::value_objects::{LookupKey, ProviderId};
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

pub const DEFAULT_BRASIL_API_URL: &str = "https://brasilapi.com.br";

/// BrasilAPI source: `GET {base}/api/cep/v1/{cep}`.
pub struct BrasilApiSource {
    base_url: String,
    fetcher: Arc<dyn HttpFetcher>,
}

impl BrasilApiSource {
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    /// Build the lookup URL for `key`.
    pub fn url_for(&self, key: &LookupKey) -> Result<Url, LookupError> {
        endpoint_url(&self.base_url, &["api", "cep", "v1"], key, &[])
    }
}

#[async_trait]
impl AddressSource for BrasilApiSource {
    fn provider(&self) -> ProviderId {
        ProviderId::BrasilApi
    }

    async fn lookup(&self, key: &LookupKey, ctx: &RaceContext) -> Result<Address, LookupError> {
        let url = self.url_for(key)?;
        tracing::debug!(provider = %self.provider(), %url, "querying");

        let body = self.fetcher.get(&url, ctx).await?;
        let payload = Normalizer::decode_brasil_api(&body)?;

        Ok(Normalizer::from_brasil_api(payload, self.provider()))
    }
}
