//! Domain Entities - Core business objects
//!
//! The canonical address every provider is normalized into, and the
//! outcomes that flow from the lookups to the race coordinator and on
//! to the caller.

use crate::domain::errors::{LookupError, RaceError};
use crate::domain::value_objects::ProviderId;
use serde::Serialize;
use std::time::Duration;

/// Canonical address, independent of the provider's schema.
///
/// Built once per successful lookup and never mutated afterwards.
/// Unset fields are omitted when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Street name (logradouro)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Neighborhood (bairro)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// City (localidade)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Federative unit code (UF), e.g. "SP"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    /// Provider that answered
    pub source: ProviderId,
}

impl Address {
    /// Create an address with only the source set.
    pub fn empty(source: ProviderId) -> Self {
        Self {
            street: None,
            neighborhood: None,
            city: None,
            region_code: None,
            source,
        }
    }
}

/// Result of exactly one source lookup, published to the race channel.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub provider: ProviderId,
    pub result: Result<Address, LookupError>,
    /// Time from task start to publish
    pub elapsed: Duration,
}

/// A source that failed during a race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub provider: ProviderId,
    pub error: LookupError,
}

impl SourceFailure {
    pub fn new(provider: ProviderId, error: LookupError) -> Self {
        Self { provider, error }
    }
}

/// Terminal state of one race. Exactly one is produced per invocation.
#[derive(Debug, Clone)]
pub enum RaceOutcome {
    /// A source answered successfully before the deadline.
    Resolved(Address),
    /// The race ended on upstream failures, in arrival order.
    Failed(Vec<SourceFailure>),
    /// Nothing conclusive arrived before the deadline.
    TimedOut(Duration),
}

impl RaceOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, RaceOutcome::Resolved(_))
    }

    pub fn address(&self) -> Option<&Address> {
        match self {
            RaceOutcome::Resolved(address) => Some(address),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<Address, RaceError> {
        match self {
            RaceOutcome::Resolved(address) => Ok(address),
            RaceOutcome::Failed(failures) => Err(RaceError::AllSourcesFailed(failures)),
            RaceOutcome::TimedOut(timeout) => Err(RaceError::Timeout(timeout)),
        }
    }
}
