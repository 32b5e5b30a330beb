//! # dialrace client
//!
//! Dual-stack ("happy eyeballs") TCP connection establishment: a pluggable
//! resolution step feeding a staggered, cancellable race across candidate
//! addresses, with per-attempt deadlines, strict queue-order tie-breaks,
//! and full attempt-lifecycle observability.
//!
//! ## Shape
//!
//! - **Resolution** ([`dns::resolve`]) returns every address for a name in
//!   resolver order; literal IPs short-circuit the lookup.
//! - **Sequencing** ([`connect::tcp::candidates`]) fixes the attempt queue:
//!   resolver order by default, IPv4-first on request.
//! - **Racing** ([`connect::tcp::engine`] + [`connect::tcp::happy_eyeballs`])
//!   starts attempts at a stagger interval, advances early on definitive
//!   losses, resolves on the first success, and aborts the losers.
//! - **Reporting** ([`connect::events`]) surfaces each attempt transition
//!   and exactly one terminal outcome.
//!
//! A dial that never raced (single candidate, restricted family, or
//! auto-selection disabled) makes one plain attempt and leaves the
//! attempted-address list unset.
//!
//! The [`dns::wire`] codec exists for tests that mock resolvers at the
//! wire-format level; production dialing never touches it.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod connect;
pub mod dns;
pub mod error;
pub mod prelude;

// Re-export the primary surface at the crate root
pub use config::{
    DialConfig, IpVersion, TcpConfig, set_default_attempt_timeout, set_default_auto_select_family,
    set_default_ipv4_first,
};
pub use connect::{Candidate, DialEvent, Dialer, Established, EventSink, NoopSink};
pub use dns::resolve::{Addrs, DynResolver, GaiResolver, Name, Resolve, Resolving};
pub use error::{Error, Kind, Result};
