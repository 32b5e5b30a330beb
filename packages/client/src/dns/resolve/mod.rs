//! Pluggable hostname resolution
//!
//! A resolver returns every address it knows for a name, in its own
//! preference order, with the address family carried by each `SocketAddr`.
//! The sequencing and racing layers above decide what to do with that order.

pub mod dynamic;
pub mod gai;
pub mod traits;
pub mod types;
pub mod utilities;

// Re-export core types and traits for public API
pub use dynamic::DynResolver;
pub use gai::GaiResolver;
pub use traits::{Resolve, Resolving};
pub use types::{Addrs, Name};
pub use utilities::{ip_literal, restrict_family, validate_hostname};
