//! Tracing Race Reporter
//!
//! Implements RaceReporter by emitting `tracing` events.

use crate::domain::entities::{RaceOutcome, SourceFailure};
use crate::domain::ports::RaceReporter;
use crate::domain::value_objects::LookupKey;
use std::time::Duration;

/// Reports race events as log lines.
#[derive(Debug, Default, Clone)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl RaceReporter for TracingReporter {
    fn source_failed(&self, key: &LookupKey, failure: &SourceFailure) {
        tracing::warn!(
            cep = %key,
            kind = ?failure.error.kind(),
            "error fetching from {}: {}",
            failure.provider,
            failure.error
        );
    }

    fn race_finished(&self, key: &LookupKey, outcome: &RaceOutcome, elapsed: Duration) {
        match outcome {
            RaceOutcome::Resolved(address) => {
                tracing::info!(cep = %key, ?elapsed, "fastest source: {}", address.source);
                match serde_json::to_string(address) {
                    Ok(json) => tracing::info!(cep = %key, "address: {}", json),
                    Err(e) => tracing::info!(cep = %key, "address: {:?} ({})", address, e),
                }
            }
            RaceOutcome::Failed(failures) => {
                tracing::error!(
                    cep = %key,
                    ?elapsed,
                    failed_sources = failures.len(),
                    "error fetching address: every source failed"
                );
            }
            RaceOutcome::TimedOut(timeout) => {
                tracing::error!(
                    cep = %key,
                    ?elapsed,
                    "timeout of {}ms exceeded while fetching addresses",
                    timeout.as_millis()
                );
            }
        }
    }
}
