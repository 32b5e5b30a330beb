//! DNS resolution traits and type aliases
//!
//! Contains the core Resolve trait and related type definitions
//! for the resolution system.

use futures::future::BoxFuture;

use super::types::{Addrs, Name};
use crate::error::BoxError;

/// Type alias for in-flight resolutions.
pub type Resolving = BoxFuture<'static, Result<Addrs, BoxError>>;

/// Trait for pluggable hostname resolution.
///
/// Implementations must return *all* addresses known for the name, in the
/// order the underlying source produced them; ports on the returned
/// addresses are ignored and rewritten by the caller. A lookup failure is
/// surfaced as-is and is never retried here.
pub trait Resolve: Send + Sync + 'static {
    fn resolve(&self, name: Name) -> Resolving;
}
