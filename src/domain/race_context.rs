//! Race Context
//!
//! Shared deadline and cancellation token for one race.

use crate::domain::errors::ContextError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Deadline/cancellation token shared by every lookup of a race.
///
/// Created once by the coordinator. Lookups only read it; the
/// coordinator cancels it once the race is resolved. Cancellation is
/// advisory: work already finished is not undone.
#[derive(Clone)]
pub struct RaceContext {
    deadline: Instant,
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl RaceContext {
    /// Create a context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self {
            deadline,
            cancel_tx: Arc::new(cancel_tx),
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Time left before the deadline, zero once it has passed.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Cancel the race. Idempotent.
    pub fn cancel(&self) {
        if !self.cancel_tx.send_replace(true) {
            tracing::trace!("race context cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel_tx.borrow()
    }

    /// Whether the context has fired, and why.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            Some(ContextError::Cancelled)
        } else if Instant::now() >= self.deadline {
            Some(ContextError::DeadlineExceeded)
        } else {
            None
        }
    }

    /// Resolves when the deadline elapses or the context is cancelled.
    pub async fn done(&self) -> ContextError {
        if let Some(err) = self.err() {
            return err;
        }

        let mut cancel_rx = self.cancel_tx.subscribe();

        let cancelled = tokio::select! {
            _ = tokio::time::sleep_until(self.deadline) => false,
            changed = cancel_rx.wait_for(|flag| *flag) => changed.is_ok(),
        };
        if cancelled {
            return ContextError::Cancelled;
        }

        // The sender lives as long as `self`, so only the deadline gets here.
        tokio::time::sleep_until(self.deadline).await;
        ContextError::DeadlineExceeded
    }
}

impl std::fmt::Debug for RaceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaceContext")
            .field("remaining", &self.remaining())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
