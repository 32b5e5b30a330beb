//! Shared handle over an arbitrary resolver implementation

use std::sync::Arc;

use super::gai::GaiResolver;
use super::traits::{Resolve, Resolving};
use super::types::Name;

/// Cloneable handle wrapping whichever [`Resolve`] implementation a dial
/// was configured with.
#[derive(Clone)]
pub struct DynResolver {
    resolver: Arc<dyn Resolve>,
}

impl std::fmt::Debug for DynResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynResolver").finish()
    }
}

impl DynResolver {
    pub fn new(resolver: Arc<dyn Resolve>) -> Self {
        Self { resolver }
    }

    /// Handle over the system resolver.
    pub fn gai() -> Self {
        Self::new(Arc::new(GaiResolver::new()))
    }

    /// Resolve a hostname using the configured resolver.
    pub fn resolve(&self, name: Name) -> Resolving {
        self.resolver.resolve(name)
    }
}

impl Default for DynResolver {
    fn default() -> Self {
        Self::gai()
    }
}
