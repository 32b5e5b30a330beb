//! Per-dial configuration
//!
//! Provides the immutable configuration value a single dial operates under.

use std::time::Duration;

/// Default per-attempt deadline, also used as the stagger interval when no
/// explicit override is set.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(250);

/// Floor applied to the per-attempt deadline.
pub const MIN_ATTEMPT_TIMEOUT: Duration = Duration::from_millis(10);

/// IP version preference for network connections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    /// IPv4 only
    V4,
    /// IPv6 only
    V6,
    /// Dual stack
    Dual,
}

impl Default for IpVersion {
    fn default() -> Self {
        Self::Dual
    }
}

/// TCP connection configuration
#[derive(Debug, Clone)]
pub struct TcpConfig {
    pub nodelay: bool,
    pub keepalive: Option<Duration>,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            nodelay: true,
            keepalive: Some(Duration::from_secs(60)),
        }
    }
}

/// Runtime dial configuration
///
/// A dial snapshots this once at start; the value is never re-read while the
/// race is in flight.
#[derive(Debug, Clone)]
pub struct DialConfig {
    /// Race connection attempts across both address families. When false a
    /// single attempt is made against the first resolved address.
    pub auto_select_family: bool,
    /// Per-attempt deadline. Also the stagger interval between successive
    /// attempt starts unless `stagger_interval` overrides it.
    pub attempt_timeout: Duration,
    /// Explicit delay between successive attempt starts.
    pub stagger_interval: Option<Duration>,
    /// Restrict resolution to a single family. `Dual` means no restriction.
    pub requested_family: IpVersion,
    /// Move all IPv4 candidates ahead of IPv6 ones, preserving order within
    /// each family.
    pub ipv4_first: bool,
    pub tcp: TcpConfig,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            auto_select_family: true,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
            stagger_interval: None,
            requested_family: IpVersion::Dual,
            ipv4_first: false,
            tcp: TcpConfig::default(),
        }
    }
}

impl DialConfig {
    /// Build a configuration from the current process-wide defaults.
    ///
    /// Called once per dial, at race start.
    #[must_use]
    pub fn snapshot() -> Self {
        Self {
            auto_select_family: super::defaults::default_auto_select_family(),
            attempt_timeout: super::defaults::default_attempt_timeout(),
            ipv4_first: super::defaults::default_ipv4_first(),
            ..Self::default()
        }
    }

    /// The delay between starting successive candidate attempts.
    #[must_use]
    pub fn stagger(&self) -> Duration {
        self.stagger_interval.unwrap_or(self.attempt_timeout)
    }

    /// Validate dial configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `attempt_timeout` is below the supported floor
    /// - the stagger override is zero
    pub fn validate(&self) -> Result<(), String> {
        if self.attempt_timeout < MIN_ATTEMPT_TIMEOUT {
            return Err(format!(
                "attempt_timeout must be at least {MIN_ATTEMPT_TIMEOUT:?}"
            ));
        }
        if let Some(stagger) = self.stagger_interval {
            if stagger.is_zero() {
                return Err("stagger_interval must be non-zero".to_string());
            }
        }
        Ok(())
    }
}
