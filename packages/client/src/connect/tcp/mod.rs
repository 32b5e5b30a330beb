//! TCP connection establishment
//!
//! Candidate sequencing, the race state machine and its async driver, the
//! non-raced single-attempt path, and socket tuning.

pub mod basic_connection;
pub mod candidates;
pub mod engine;
pub mod happy_eyeballs;
pub mod socket_config;

pub use candidates::{Candidate, sequence};
pub use engine::{AttemptState, EngineState, RaceAction, RaceEngine, RaceEvent};
pub use socket_config::configure_stream;
