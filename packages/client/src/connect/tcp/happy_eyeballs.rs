//! Dual-stack connection racing
//!
//! Async driver for the [`RaceEngine`]: owns the in-flight attempt set, the
//! stagger timer, and each attempt's deadline, and executes the actions the
//! engine decides on. Dropping the returned future cancels the stagger
//! timer, every per-attempt deadline, and every pending socket in one go;
//! nothing is emitted after cancellation.

use std::pin::Pin;
use std::time::Duration;

use futures::future::BoxFuture;
use futures_util::future::FutureExt;
use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::net::TcpStream;
use tokio::time::{Instant, Sleep, sleep_until};
use tracing::{debug, trace};

use super::candidates::Candidate;
use super::engine::{RaceAction, RaceEngine, RaceEvent};
use crate::config::DialConfig;
use crate::connect::events::{DialEvent, EventSink};
use crate::error::{self, Error};

/// What a resolved race hands back to the dialer.
pub(crate) struct RaceOutcome {
    pub stream: TcpStream,
    pub winner: Candidate,
    /// `ip:port` labels of every candidate started, in start order.
    pub attempted: Vec<String>,
}

enum AttemptOutcome {
    Connected(TcpStream),
    Failed(std::io::Error),
    TimedOut,
}

type AttemptFuture = BoxFuture<'static, (usize, AttemptOutcome)>;

/// One connection attempt under its per-attempt deadline. The deadline
/// timer lives inside the future, so dropping the attempt cancels both the
/// socket and the timer; a timer that already fired cancels as a no-op.
fn attempt(index: usize, candidate: Candidate, deadline: Duration) -> AttemptFuture {
    async move {
        trace!(%candidate, "connection attempt in flight");
        let outcome = match tokio::time::timeout(deadline, TcpStream::connect(candidate.addr())).await
        {
            Ok(Ok(stream)) => AttemptOutcome::Connected(stream),
            Ok(Err(e)) => AttemptOutcome::Failed(e),
            Err(_elapsed) => AttemptOutcome::TimedOut,
        };
        (index, outcome)
    }
    .boxed()
}

fn start_attempt(
    action: RaceAction,
    candidates: &[Candidate],
    attempt_timeout: Duration,
    stagger: Duration,
    inflight: &mut FuturesUnordered<AttemptFuture>,
    stagger_timer: &mut Pin<Box<Sleep>>,
    sink: &dyn EventSink,
) {
    let RaceAction::Start(index) = action else {
        return;
    };
    let candidate = candidates[index];
    debug!(%candidate, index, "starting connection attempt");
    sink.emit(DialEvent::attempt_started(&candidate));
    inflight.push(attempt(index, candidate, attempt_timeout));
    stagger_timer.as_mut().reset(Instant::now() + stagger);
}

/// Race connection attempts across the candidate queue.
///
/// Requires at least two candidates; single-candidate dials take the plain
/// path and never engage the race machinery.
pub(crate) async fn run_race(
    candidates: Vec<Candidate>,
    config: &DialConfig,
    sink: &dyn EventSink,
) -> Result<RaceOutcome, Error> {
    debug_assert!(candidates.len() >= 2);

    let stagger = config.stagger();
    let attempt_timeout = config.attempt_timeout;

    let mut engine = RaceEngine::new(candidates.clone());
    let mut inflight: FuturesUnordered<AttemptFuture> = FuturesUnordered::new();
    let mut stagger_timer = Box::pin(sleep_until(Instant::now() + stagger));

    for action in engine.begin() {
        start_attempt(
            action,
            &candidates,
            attempt_timeout,
            stagger,
            &mut inflight,
            &mut stagger_timer,
            sink,
        );
    }

    loop {
        tokio::select! {
            biased;

            Some(first) = inflight.next() => {
                // Everything else that completed in this same scheduler turn
                // is drained now, so simultaneous successes are decided by
                // queue position rather than poll order.
                let mut batch = vec![first];
                while let Some(Some(more)) = inflight.next().now_or_never() {
                    batch.push(more);
                }
                batch.sort_by_key(|(index, _)| *index);

                if let Some(pos) = batch
                    .iter()
                    .position(|(_, outcome)| matches!(outcome, AttemptOutcome::Connected(_)))
                {
                    let (index, outcome) = batch.swap_remove(pos);
                    let AttemptOutcome::Connected(stream) = outcome else {
                        unreachable!()
                    };
                    let actions = engine.on_event(RaceEvent::Succeeded(index));
                    debug_assert!(actions.contains(&RaceAction::Finish(index)));

                    let winner = candidates[index];
                    debug!(%winner, "connection race resolved");
                    sink.emit(DialEvent::connected(&winner));

                    // Dropping `inflight` closes every losing socket; any
                    // result still in `batch`, a second success included,
                    // is discarded with it.
                    return Ok(RaceOutcome {
                        stream,
                        winner,
                        attempted: engine.attempted(),
                    });
                }

                for (index, outcome) in batch {
                    let candidate = candidates[index];
                    let event = match outcome {
                        AttemptOutcome::Failed(e) => {
                            debug!(%candidate, error = %e, "connection attempt failed");
                            sink.emit(DialEvent::attempt_failed(&candidate, &e));
                            RaceEvent::Failed(index, e)
                        }
                        AttemptOutcome::TimedOut => {
                            debug!(%candidate, "connection attempt timed out");
                            sink.emit(DialEvent::attempt_timed_out(&candidate));
                            RaceEvent::TimedOut(index)
                        }
                        AttemptOutcome::Connected(_) => unreachable!(),
                    };

                    for action in engine.on_event(event) {
                        match action {
                            RaceAction::Start(_) => start_attempt(
                                action,
                                &candidates,
                                attempt_timeout,
                                stagger,
                                &mut inflight,
                                &mut stagger_timer,
                                sink,
                            ),
                            RaceAction::Fail => {
                                let errors = engine.take_errors();
                                debug!(attempts = errors.len(), "connection race exhausted");
                                sink.emit(DialEvent::failed(&errors));
                                return Err(error::exhausted(errors));
                            }
                            RaceAction::AbortPending | RaceAction::Finish(_) => {}
                        }
                    }
                }
            }

            _ = stagger_timer.as_mut(), if engine.has_queued() => {
                for action in engine.on_event(RaceEvent::StaggerElapsed) {
                    start_attempt(
                        action,
                        &candidates,
                        attempt_timeout,
                        stagger,
                        &mut inflight,
                        &mut stagger_timer,
                        sink,
                    );
                }
            }
        }
    }
}
