//! ViaCEP Address Source
//!
//! Implements AddressSource against ViaCEP's JSON web service.

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

pub const DEFAULT_VIA_CEP_URL: &str = "http://viacep.com.br";

/// ViaCEP source: `GET {base}/ws/{cep}/json/`.
///
/// ViaCEP answers unknown codes with 200 and an `erro` flag, which
/// surfaces as [`LookupError::NotFound`].
pub struct ViaCepSource {
    base_url: String,
    fetcher: Arc<dyn HttpFetcher>,
}

impl ViaCepSource {
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    pub fn url_for(&self, key: &LookupKey) -> Result<Url, LookupError> {
        endpoint_url(&self.base_url, &["ws"], key, &["json", ""])
    }
}

#[async_trait]
impl AddressSource for ViaCepSource {
    fn provider(&self) -> ProviderId {
        ProviderId::ViaCep
    }

    async fn lookup(&self, key: &LookupKey, ctx: &RaceContext) -> Result<Address, LookupError> {
        let url = self.url_for(key)?;
        tracing::debug!(provider = %self.provider(), %url, "querying");

        let body = self.fetcher.get(&url, ctx).await?;
        let payload = Normalizer::decode_via_cep(&body)?;

        Ok(Normalizer::from_via_cep(payload, self.provider()))
    }
}
