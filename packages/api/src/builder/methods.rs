//! Builder configuration methods

use std::time::Duration;

use dialrace_client::{EventSink, IpVersion, Resolve};

use super::core::DialBuilder;

impl DialBuilder {
    /// Enable or disable dual-stack attempt racing.
    ///
    /// Disabled means one plain attempt against the first resolved address,
    /// with only the OS-level connect timeout in play.
    #[must_use]
    pub fn auto_select_family(mut self, enabled: bool) -> Self {
        self.config.auto_select_family = enabled;
        self
    }

    /// Per-attempt deadline. Also the stagger interval between successive
    /// attempt starts unless [`stagger_interval`] overrides it.
    ///
    /// [`stagger_interval`]: Self::stagger_interval
    #[must_use]
    pub fn attempt_timeout(mut self, timeout: Duration) -> Self {
        self.config.attempt_timeout = timeout;
        self
    }

    /// Explicit delay between starting successive candidate attempts.
    #[must_use]
    pub fn stagger_interval(mut self, interval: Duration) -> Self {
        self.config.stagger_interval = Some(interval);
        self
    }

    /// Restrict resolution to one address family. Implies no racing: a
    /// single attempt is made against the first matching address.
    #[must_use]
    pub fn family(mut self, family: IpVersion) -> Self {
        self.config.requested_family = family;
        self
    }

    /// Try every IPv4 candidate before any IPv6 one.
    #[must_use]
    pub fn ipv4_first(mut self, enabled: bool) -> Self {
        self.config.ipv4_first = enabled;
        self
    }

    /// Set TCP_NODELAY on the established stream.
    #[must_use]
    pub fn nodelay(mut self, enabled: bool) -> Self {
        self.config.tcp.nodelay = enabled;
        self
    }

    /// TCP keepalive time for the established stream; `None` disables it.
    #[must_use]
    pub fn keepalive(mut self, interval: Option<Duration>) -> Self {
        self.config.tcp.keepalive = interval;
        self
    }

    /// Replace the system resolver with a custom implementation.
    ///
    /// The resolver must return every address it knows for a name, in its
    /// own preference order.
    #[must_use]
    pub fn resolver<R: Resolve>(mut self, resolver: R) -> Self {
        self.dialer = self.dialer.with_resolver(resolver);
        self
    }

    /// Receive attempt lifecycle events for raced dials.
    #[must_use]
    pub fn events<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.dialer = self.dialer.with_events(sink);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_configuration() {
        let builder = DialBuilder::new()
            .auto_select_family(true)
            .attempt_timeout(Duration::from_millis(120))
            .stagger_interval(Duration::from_millis(40))
            .ipv4_first(true)
            .nodelay(false);

        assert_eq!(builder.config.attempt_timeout, Duration::from_millis(120));
        assert_eq!(
            builder.config.stagger_interval,
            Some(Duration::from_millis(40))
        );
        assert!(builder.config.ipv4_first);
        assert!(!builder.config.tcp.nodelay);
    }

    #[test]
    fn family_restriction_is_recorded() {
        let builder = DialBuilder::new().family(IpVersion::V6);
        assert_eq!(builder.config.requested_family, IpVersion::V6);
    }
}
