//! Connection establishment configuration
//!
//! Static defaults with a process-wide get/set lifecycle plus an immutable
//! per-dial snapshot. A dial reads its configuration exactly once when it
//! begins; mutating the process-wide defaults mid-race has no effect on a
//! race already in flight.

pub mod defaults;
pub mod dial;

// Re-export all configuration types for easy access
pub use defaults::{
    default_attempt_timeout, default_auto_select_family, default_ipv4_first,
    set_default_attempt_timeout, set_default_auto_select_family, set_default_ipv4_first,
};
pub use dial::{DEFAULT_ATTEMPT_TIMEOUT, DialConfig, IpVersion, MIN_ATTEMPT_TIMEOUT, TcpConfig};
