//! HTTP Fetcher Port
//!
//! Defines the interface for issuing a deadline-aware HTTP GET.

use crate::domain::errors::LookupError;
use crate::domain::race_context::RaceContext;
use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

/// Transport used by the address sources.
///
/// Implementations must abort in-flight I/O once `ctx` fires and report
/// it as [`LookupError::Transport`]. A non-2xx answer is
/// [`LookupError::UpstreamStatus`].
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET `url` and return the raw body.
    async fn get(&self, url: &Url, ctx: &RaceContext) -> Result<Bytes, LookupError>;
}
