//! DNS resolution
//!
//! The pluggable resolution step feeding connection establishment, plus a
//! minimal wire-format codec used by test mock resolvers.

pub use resolve::{Addrs, DynResolver, GaiResolver, Name, Resolve, Resolving};

#[cfg(feature = "hickory-dns")]
pub mod hickory;
pub mod resolve;
pub mod wire;
