//! Race state machine
//!
//! The pure core of dual-stack connection establishment: a state machine
//! over candidate attempts with no sockets and no timers. The async driver
//! feeds it events (stagger expiry, attempt outcomes) and executes the
//! actions it returns. Keeping the transitions pure makes the ordering
//! rules (fail-fast advancement, first-success wins, queue-order
//! tie-break, late-event suppression) checkable as plain unit tests.

use std::io;

use super::candidates::Candidate;
use crate::error::{self, Error};

/// Engine-wide lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Created, nothing started yet.
    Idle,
    /// At least one attempt in flight and no decision reached.
    Racing,
    /// A winner connected; losers are aborted.
    Resolved,
    /// Every candidate was attempted and none connected.
    Exhausted,
}

/// Per-candidate attempt lifecycle. Leaves `Pending` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Queued,
    Pending,
    Connected,
    Failed,
    TimedOut,
    Aborted,
}

/// Inputs to the state machine.
#[derive(Debug)]
pub enum RaceEvent {
    /// The stagger interval elapsed with no decision.
    StaggerElapsed,
    /// The attempt for candidate `i` connected.
    Succeeded(usize),
    /// The attempt for candidate `i` failed at the OS level.
    Failed(usize, io::Error),
    /// The attempt for candidate `i` exceeded its per-attempt deadline.
    TimedOut(usize),
}

/// Outputs: what the driver must do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceAction {
    /// Start a connection attempt for candidate `i`.
    Start(usize),
    /// Drop every still-pending attempt; their handles close and any late
    /// result is discarded.
    AbortPending,
    /// The race resolved with candidate `i`; hand its stream to the caller.
    Finish(usize),
    /// The race exhausted the queue; surface the aggregate error.
    Fail,
}

/// State for one connection race. Exclusively owned by a single dial; never
/// shared across concurrent dials.
#[derive(Debug)]
pub struct RaceEngine {
    candidates: Vec<Candidate>,
    attempts: Vec<AttemptState>,
    errors: Vec<Error>,
    /// Queue cursor: index of the next candidate to start.
    next: usize,
    state: EngineState,
    winner: Option<usize>,
}

impl RaceEngine {
    #[must_use]
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let attempts = vec![AttemptState::Queued; candidates.len()];
        Self {
            candidates,
            attempts,
            errors: Vec::new(),
            next: 0,
            state: EngineState::Idle,
            winner: None,
        }
    }

    /// Start the race: first candidate goes out immediately.
    pub fn begin(&mut self) -> Vec<RaceAction> {
        debug_assert_eq!(self.state, EngineState::Idle);
        debug_assert!(self.candidates.len() >= 2);
        self.state = EngineState::Racing;
        self.start_next().into_iter().collect()
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    #[must_use]
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// True while candidates remain undequeued.
    #[must_use]
    pub fn has_queued(&self) -> bool {
        self.next < self.candidates.len()
    }

    #[must_use]
    pub fn attempt_state(&self, index: usize) -> AttemptState {
        self.attempts[index]
    }

    /// `ip:port` labels of every candidate started so far, in start order.
    ///
    /// Starts always happen in queue order, so this is the queue prefix up
    /// to the cursor.
    #[must_use]
    pub fn attempted(&self) -> Vec<String> {
        self.candidates[..self.next]
            .iter()
            .map(Candidate::label)
            .collect()
    }

    /// The accumulated per-attempt errors, in attempt order.
    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    /// Apply one event and return the actions it implies.
    pub fn on_event(&mut self, event: RaceEvent) -> Vec<RaceAction> {
        match event {
            RaceEvent::StaggerElapsed => {
                if self.state != EngineState::Racing {
                    return Vec::new();
                }
                self.start_next().into_iter().collect()
            }
            RaceEvent::Succeeded(index) => self.on_succeeded(index),
            RaceEvent::Failed(index, cause) => {
                let err = error::connect(self.candidates[index].addr(), cause);
                self.on_loss(index, AttemptState::Failed, err)
            }
            RaceEvent::TimedOut(index) => {
                let err = error::attempt_timeout(self.candidates[index].addr());
                self.on_loss(index, AttemptState::TimedOut, err)
            }
        }
    }

    fn on_succeeded(&mut self, index: usize) -> Vec<RaceAction> {
        if self.attempts[index] != AttemptState::Pending {
            // Already timed out or aborted; the late result is discarded.
            return Vec::new();
        }
        if self.state != EngineState::Racing {
            // A winner was already chosen this turn; strict queue order has
            // spoken, this handle closes unreported.
            self.attempts[index] = AttemptState::Aborted;
            return Vec::new();
        }

        self.attempts[index] = AttemptState::Connected;
        self.winner = Some(index);
        self.state = EngineState::Resolved;
        for (i, attempt) in self.attempts.iter_mut().enumerate() {
            if i != index && *attempt == AttemptState::Pending {
                *attempt = AttemptState::Aborted;
            }
        }

        debug_assert!(self.errors.len() < self.candidates.len());
        vec![RaceAction::AbortPending, RaceAction::Finish(index)]
    }

    fn on_loss(&mut self, index: usize, terminal: AttemptState, err: Error) -> Vec<RaceAction> {
        if self.attempts[index] != AttemptState::Pending || self.state != EngineState::Racing {
            // Duplicate or post-decision report; suppressed at the source.
            return Vec::new();
        }

        self.attempts[index] = terminal;
        self.errors.push(err);

        // Fail fast: a definitive loss advances the queue immediately
        // instead of waiting out the remaining stagger interval.
        if let Some(start) = self.start_next() {
            return vec![start];
        }
        if self
            .attempts
            .iter()
            .any(|attempt| *attempt == AttemptState::Pending)
        {
            return Vec::new();
        }

        self.state = EngineState::Exhausted;
        debug_assert_eq!(self.errors.len(), self.candidates.len());
        vec![RaceAction::Fail]
    }

    fn start_next(&mut self) -> Option<RaceAction> {
        if self.next >= self.candidates.len() {
            return None;
        }
        let index = self.next;
        debug_assert_eq!(self.attempts[index], AttemptState::Queued);
        self.attempts[index] = AttemptState::Pending;
        self.next += 1;
        Some(RaceAction::Start(index))
    }
}
