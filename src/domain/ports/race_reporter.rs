//! Race Reporter Port
//!
//! Receives the observable events of a race. Injected into the
//! coordinator instead of writing to a process-wide logger directly.

use crate::domain::entities::{RaceOutcome, SourceFailure};
use crate::domain::value_objects::LookupKey;
use std::time::Duration;

pub trait RaceReporter: Send + Sync {
    /// A source failed while the race was still undecided.
    fn source_failed(&self, key: &LookupKey, failure: &SourceFailure);

    /// The race reached its terminal state after `elapsed`.
    fn race_finished(&self, key: &LookupKey, outcome: &RaceOutcome, elapsed: Duration);
}
