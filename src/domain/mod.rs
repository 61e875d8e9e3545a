//! Domain Layer
//!
//! Address model, provider payloads, race primitives and the ports
//! the outer layers implement.

pub mod entities;
pub mod errors;
pub mod payloads;
pub mod ports;
pub mod race_context;
pub mod services;
pub mod value_objects;

pub use entities::{Address, RaceOutcome, SourceFailure, SourceOutcome};
pub use errors::{ContextError, LookupError, LookupErrorKind, RaceError};
pub use race_context::RaceContext;
pub use value_objects::{LookupKey, ProviderId};
