//! Domain Errors
//!
//! Failures of a single source lookup, of the race as a whole, and of
//! the race context.

use crate::domain::entities::SourceFailure;
use std::time::Duration;

/// Why a race context stopped being live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("race deadline exceeded")]
    DeadlineExceeded,
    #[error("race cancelled")]
    Cancelled,
}

/// Coarse classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupErrorKind {
    RequestConstruction,
    Transport,
    UpstreamStatus,
    Decode,
    NotFound,
}

/// Error from one source's lookup.
///
/// Every variant is captured into a failed outcome; none of them ever
/// crosses the task boundary as a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The provider URL could not be built from the template.
    #[error("invalid request url '{url}': {reason}")]
    RequestConstruction { url: String, reason: String },

    /// Connection, DNS or I/O failure, including the race context firing.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("upstream returned status code {status}")]
    UpstreamStatus { status: u16 },

    /// The body is not a payload of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The provider explicitly reported the code as unknown.
    #[error("postal code not found")]
    NotFound,
}

impl LookupError {
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            Self::RequestConstruction { .. } => LookupErrorKind::RequestConstruction,
            Self::Transport(_) => LookupErrorKind::Transport,
            Self::UpstreamStatus { .. } => LookupErrorKind::UpstreamStatus,
            Self::Decode(_) => LookupErrorKind::Decode,
            Self::NotFound => LookupErrorKind::NotFound,
        }
    }
}

impl From<ContextError> for LookupError {
    fn from(err: ContextError) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Terminal failure of a race, as seen by the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RaceError {
    #[error("all sources failed: {}", describe_failures(.0))]
    AllSourcesFailed(Vec<SourceFailure>),

    #[error("timeout of {}ms exceeded while fetching addresses", .0.as_millis())]
    Timeout(Duration),
}

fn describe_failures(failures: &[SourceFailure]) -> String {
    if failures.is_empty() {
        return "no sources configured".to_string();
    }
    failures
        .iter()
        .map(|f| format!("{}: {}", f.provider, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}
