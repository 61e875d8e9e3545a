//! Application Layer
//!
//! Use cases built on top of the domain ports.

mod race_service;

pub use race_service::{RacePolicy, RaceService, RaceSettings, DEFAULT_TIMEOUT};
