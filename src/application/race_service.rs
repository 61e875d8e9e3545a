//! Race Service - Main application use case
//!
//! Fans a lookup out to every address source, takes the first
//! acceptable answer and leaves the losers to finish on their own.

use crate::domain::entities::{RaceOutcome, SourceFailure, SourceOutcome};
use crate::domain::ports::{AddressSource, RaceReporter};
use crate::domain::race_context::RaceContext;
use crate::domain::value_objects::LookupKey;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// Default race budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Which published outcomes end a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RacePolicy {
    /// Only a success ends the race early. Failures are collected and the
    /// race keeps waiting for a sibling, until the deadline or until every
    /// source has failed.
    #[default]
    FirstSuccess,
    /// The first outcome ends the race, success or failure.
    FirstOutcome,
}

impl RacePolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first-success" => Some(Self::FirstSuccess),
            "first-outcome" => Some(Self::FirstOutcome),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSuccess => "first-success",
            Self::FirstOutcome => "first-outcome",
        }
    }
}

/// Race tuning.
#[derive(Debug, Clone)]
pub struct RaceSettings {
    /// Deadline, measured from the start of the race
    pub timeout: Duration,
    pub policy: RacePolicy,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            policy: RacePolicy::default(),
        }
    }
}

/// Race coordinator.
///
/// Per call to [`RaceService::race`]:
/// 1. Creates a [`RaceContext`] with the configured deadline
/// 2. Spawns one detached task per source, all publishing to one channel
/// 3. Waits for the first conclusive outcome or the deadline
/// 4. Cancels the context and reports the terminal outcome
pub struct RaceService {
    sources: Vec<Arc<dyn AddressSource>>,
    reporter: Arc<dyn RaceReporter>,
    settings: RaceSettings,
}

impl RaceService {
    pub fn new(
        sources: Vec<Arc<dyn AddressSource>>,
        reporter: Arc<dyn RaceReporter>,
        settings: RaceSettings,
    ) -> Self {
        Self {
            sources,
            reporter,
            settings,
        }
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Race every source for `key` and return exactly one terminal outcome.
    ///
    /// Never waits longer than the configured timeout (plus scheduling
    /// slop), whether or not the losing sources ever finish.
    pub async fn race(&self, key: &LookupKey) -> RaceOutcome {
        let started = Instant::now();
        let ctx = RaceContext::with_timeout(self.settings.timeout);

        let outcome = if self.sources.is_empty() {
            tracing::warn!("no address sources configured");
            RaceOutcome::Failed(Vec::new())
        } else {
            let rx = self.spawn_lookups(key, &ctx);
            self.await_winner(key, &ctx, rx).await
        };

        // Losers see the cancellation and drop their in-flight requests.
        ctx.cancel();

        self.reporter.race_finished(key, &outcome, started.elapsed());
        outcome
    }

    /// Spawn one lookup per source.
    ///
    /// The channel holds one slot per source, so every publish succeeds
    /// without waiting even when nobody reads it any more.
    fn spawn_lookups(&self, key: &LookupKey, ctx: &RaceContext) -> mpsc::Receiver<SourceOutcome> {
        let (tx, rx) = mpsc::channel(self.sources.len());

        for source in &self.sources {
            let source = Arc::clone(source);
            let key = key.clone();
            let ctx = ctx.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let started = Instant::now();
                let provider = source.provider();
                let result = source.lookup(&key, &ctx).await;
                let outcome = SourceOutcome {
                    provider,
                    result,
                    elapsed: started.elapsed(),
                };

                if let Err(e) = tx.try_send(outcome) {
                    tracing::debug!(%provider, "discarding late outcome: {}", e);
                }
            });
        }

        rx
    }

    async fn await_winner(
        &self,
        key: &LookupKey,
        ctx: &RaceContext,
        mut rx: mpsc::Receiver<SourceOutcome>,
    ) -> RaceOutcome {
        let deadline = tokio::time::sleep_until(ctx.deadline());
        tokio::pin!(deadline);

        let mut failures: Vec<SourceFailure> = Vec::new();

        loop {
            tokio::select! {
                biased;

                _ = &mut deadline => {
                    return RaceOutcome::TimedOut(self.settings.timeout);
                }
                received = rx.recv() => {
                    let Some(outcome) = received else {
                        // Every sender is gone: all sources have reported.
                        return RaceOutcome::Failed(failures);
                    };

                    // Anything arriving past the deadline is stale, including
                    // failures the deadline itself caused.
                    if Instant::now() >= ctx.deadline() {
                        return RaceOutcome::TimedOut(self.settings.timeout);
                    }

                    match outcome.result {
                        Ok(address) => {
                            tracing::debug!(
                                provider = %outcome.provider,
                                elapsed = ?outcome.elapsed,
                                "source resolved"
                            );
                            return RaceOutcome::Resolved(address);
                        }
                        Err(error) => {
                            let failure = SourceFailure::new(outcome.provider, error);
                            self.reporter.source_failed(key, &failure);
                            failures.push(failure);

                            if self.settings.policy == RacePolicy::FirstOutcome
                                || failures.len() == self.sources.len()
                            {
                                return RaceOutcome::Failed(failures);
                            }
                        }
                    }
                }
            }
        }
    }
}
