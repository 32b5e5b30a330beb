//! Attempt lifecycle observability
//!
//! Every attempt transition is surfaced through an [`EventSink`] in strict
//! chronological order: one started event per attempt, at most one terminal
//! event per attempt, and exactly one overall terminal event per raced
//! dial. Nothing is emitted after the dial future is dropped, and a
//! non-raced dial emits nothing at all.

use serde::Serialize;

use super::tcp::Candidate;
use crate::error::Error;

/// A single attempt-lifecycle or terminal event.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DialEvent {
    AttemptStarted {
        address: String,
        port: u16,
        family: u8,
    },
    AttemptFailed {
        address: String,
        port: u16,
        family: u8,
        error: String,
    },
    AttemptTimedOut {
        address: String,
        port: u16,
        family: u8,
    },
    /// Terminal: the race resolved with a winner.
    Connected {
        address: String,
        port: u16,
        family: u8,
    },
    /// Terminal: every candidate was attempted without success.
    Failed {
        errors: Vec<String>,
    },
}

impl DialEvent {
    pub(crate) fn attempt_started(candidate: &Candidate) -> Self {
        Self::AttemptStarted {
            address: candidate.ip().to_string(),
            port: candidate.port(),
            family: candidate.family_tag(),
        }
    }

    pub(crate) fn attempt_failed(candidate: &Candidate, error: &std::io::Error) -> Self {
        Self::AttemptFailed {
            address: candidate.ip().to_string(),
            port: candidate.port(),
            family: candidate.family_tag(),
            error: error.to_string(),
        }
    }

    pub(crate) fn attempt_timed_out(candidate: &Candidate) -> Self {
        Self::AttemptTimedOut {
            address: candidate.ip().to_string(),
            port: candidate.port(),
            family: candidate.family_tag(),
        }
    }

    pub(crate) fn connected(candidate: &Candidate) -> Self {
        Self::Connected {
            address: candidate.ip().to_string(),
            port: candidate.port(),
            family: candidate.family_tag(),
        }
    }

    pub(crate) fn failed(errors: &[Error]) -> Self {
        Self::Failed {
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Receiver for attempt lifecycle events.
///
/// Emission happens synchronously on the dial task; implementations should
/// hand off quickly.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: DialEvent);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: DialEvent) {}
}
