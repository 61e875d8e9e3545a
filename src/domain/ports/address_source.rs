//! Address Source Port
//!
//! Defines the interface for one upstream address-lookup service.

use crate::domain::entities::Address;
use crate::domain::errors::LookupError;
use crate::domain::race_context::RaceContext;
use crate::domain::value_objects::{LookupKey, ProviderId};
use async_trait::async_trait;

/// One upstream service taking part in a race.
///
/// This is an outbound port: implementations build the provider request,
/// perform the I/O and normalize the payload into an [`Address`].
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Provider stamped onto every address this source returns.
    fn provider(&self) -> ProviderId;

    /// Look up `key`, giving up once `ctx` fires.
    ///
    /// Every failure is returned as a [`LookupError`]; implementations
    /// must not panic.
    async fn lookup(&self, key: &LookupKey, ctx: &RaceContext) -> Result<Address, LookupError>;
}
