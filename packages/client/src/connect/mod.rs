//! Connection establishment
//!
//! Resolution feeds a fixed candidate queue; the queue is either raced
//! across families with staggered attempts or, for single candidates and
//! disabled auto-selection, connected to directly.

pub mod events;
pub mod service;
pub mod tcp;

pub use events::{DialEvent, EventSink, NoopSink};
pub use service::{Dialer, Established};
pub use tcp::{Candidate, sequence};
