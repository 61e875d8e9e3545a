//! cepRace Library
//!
//! Resolves a Brazilian postal code (CEP) by racing several address
//! services and keeping the first answer. Exposed as a library for the
//! binary and for integration tests.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use application::{RacePolicy, RaceService, RaceSettings};
pub use config::load_config;
pub use domain::entities::{Address, RaceOutcome, SourceFailure, SourceOutcome};
pub use domain::errors::{LookupError, LookupErrorKind, RaceError};
pub use domain::ports::{AddressSource, HttpFetcher, RaceReporter};
pub use domain::race_context::RaceContext;
pub use domain::value_objects::{LookupKey, ProviderId};
