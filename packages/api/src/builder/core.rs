//! Core builder structure

use dialrace_client::{DialConfig, Dialer, Error, Established};

/// Fluent builder over the client [`Dialer`].
///
/// The configuration starts from the process-wide defaults, captured when
/// the builder is created; setters below refine that snapshot.
#[derive(Debug)]
pub struct DialBuilder {
    pub(super) config: DialConfig,
    pub(super) dialer: Dialer,
}

impl DialBuilder {
    /// Start from the current process-wide defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: DialConfig::snapshot(),
            dialer: Dialer::new(),
        }
    }

    /// Finish configuration and produce a reusable dialer.
    #[must_use]
    pub fn build(self) -> Dialer {
        self.dialer.with_config(self.config)
    }

    /// Build and connect in one step.
    ///
    /// # Errors
    ///
    /// See [`Dialer::dial`].
    pub async fn connect(self, host: &str, port: u16) -> Result<Established, Error> {
        self.build().dial(host, port).await
    }
}

impl Default for DialBuilder {
    fn default() -> Self {
        Self::new()
    }
}
