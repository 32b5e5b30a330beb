//! Fluent dial configuration
//!
//! `DialBuilder` collects configuration, an optional custom resolver, and
//! an optional event sink, then produces a [`Dialer`] or connects directly.
//!
//! [`Dialer`]: dialrace_client::Dialer

pub mod core;
pub mod methods;

pub use core::DialBuilder;
