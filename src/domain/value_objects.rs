//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared between race tasks.

use serde::Serialize;
use std::sync::Arc;

/// Identifier of the upstream service that produced an address.
///
/// Providers do not identify themselves in their payloads, so the
/// adapter stamps this onto every address it normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProviderId {
    /// BrasilAPI (brasilapi.com.br)
    #[serde(rename = "BrasilAPI")]
    BrasilApi,
    /// ViaCEP (viacep.com.br)
    #[serde(rename = "ViaCEP")]
    ViaCep,
}

impl ProviderId {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrasilApi => "BrasilAPI",
            Self::ViaCep => "ViaCEP",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Postal code handed unchanged to every source in a race.
///
/// The key is opaque: no trimming, formatting or validation happens here.
/// Cloning is cheap so each spawned lookup can own a copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(Arc<str>);

impl LookupKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LookupKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LookupKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
