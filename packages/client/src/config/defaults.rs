//! Process-wide dial defaults
//!
//! Simple get/set lifecycle. Values are read once into a [`DialConfig`]
//! snapshot when a dial begins, so a set call never affects a race that is
//! already running.
//!
//! [`DialConfig`]: super::DialConfig

use std::sync::RwLock;
use std::time::Duration;

use once_cell::sync::Lazy;

use super::dial::{DEFAULT_ATTEMPT_TIMEOUT, MIN_ATTEMPT_TIMEOUT};

struct Defaults {
    auto_select_family: bool,
    attempt_timeout: Duration,
    ipv4_first: bool,
}

static DEFAULTS: Lazy<RwLock<Defaults>> = Lazy::new(|| {
    RwLock::new(Defaults {
        auto_select_family: true,
        attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        ipv4_first: false,
    })
});

/// Whether new dials race attempts across address families by default.
#[must_use]
pub fn default_auto_select_family() -> bool {
    DEFAULTS
        .read()
        .expect("dial defaults lock poisoned")
        .auto_select_family
}

/// Enable or disable attempt racing for dials that do not set it explicitly.
pub fn set_default_auto_select_family(enabled: bool) {
    DEFAULTS
        .write()
        .expect("dial defaults lock poisoned")
        .auto_select_family = enabled;
}

/// The per-attempt deadline new dials start from.
#[must_use]
pub fn default_attempt_timeout() -> Duration {
    DEFAULTS
        .read()
        .expect("dial defaults lock poisoned")
        .attempt_timeout
}

/// Set the per-attempt deadline for dials that do not set it explicitly.
///
/// Values below the floor are clamped to [`MIN_ATTEMPT_TIMEOUT`].
pub fn set_default_attempt_timeout(timeout: Duration) {
    DEFAULTS
        .write()
        .expect("dial defaults lock poisoned")
        .attempt_timeout = timeout.max(MIN_ATTEMPT_TIMEOUT);
}

/// Whether sequencing moves IPv4 candidates ahead of IPv6 by default.
#[must_use]
pub fn default_ipv4_first() -> bool {
    DEFAULTS
        .read()
        .expect("dial defaults lock poisoned")
        .ipv4_first
}

/// Set the default candidate family ordering.
pub fn set_default_ipv4_first(enabled: bool) {
    DEFAULTS
        .write()
        .expect("dial defaults lock poisoned")
        .ipv4_first = enabled;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The defaults are process-wide, so exercise them in one test to avoid
    // cross-test interference under the parallel runner.
    #[test]
    fn set_get_roundtrip_and_clamp() {
        assert!(default_auto_select_family());

        set_default_attempt_timeout(Duration::from_millis(1));
        assert_eq!(default_attempt_timeout(), MIN_ATTEMPT_TIMEOUT);

        set_default_attempt_timeout(Duration::from_millis(400));
        assert_eq!(default_attempt_timeout(), Duration::from_millis(400));

        set_default_ipv4_first(true);
        assert!(default_ipv4_first());
        set_default_ipv4_first(false);

        // Restore for other tests in this process.
        set_default_attempt_timeout(DEFAULT_ATTEMPT_TIMEOUT);
    }
}
