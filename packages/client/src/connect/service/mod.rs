//! Dial orchestration
//!
//! The per-call pipeline: snapshot configuration, resolve candidates,
//! sequence them, then race or connect directly.

mod core;

pub use core::{Dialer, Established};
