//! Core dialer structure and dial pipeline

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpStream;
use tracing::{debug, warn};

use crate::config::{DialConfig, IpVersion};
use crate::connect::events::{EventSink, NoopSink};
use crate::connect::tcp::{self, Candidate};
use crate::dns::resolve::{self, DynResolver, Name, Resolve};
use crate::error::{self, Error};

/// Establishes TCP connections with optional dual-stack attempt racing.
///
/// A dialer is cheap to clone and safe to share; every `dial` call creates
/// its own isolated race state and timers.
#[derive(Clone)]
pub struct Dialer {
    config: Option<DialConfig>,
    resolver: DynResolver,
    sink: Arc<dyn EventSink>,
}

impl Dialer {
    /// A dialer using the system resolver and, at each dial, the
    /// process-wide default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: None,
            resolver: DynResolver::gai(),
            sink: Arc::new(NoopSink),
        }
    }

    /// Pin this dialer to an explicit configuration instead of the
    /// process-wide defaults.
    #[must_use]
    pub fn with_config(mut self, config: DialConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the resolution step entirely.
    #[must_use]
    pub fn with_resolver<R: Resolve>(mut self, resolver: R) -> Self {
        self.resolver = DynResolver::new(Arc::new(resolver));
        self
    }

    /// Receive attempt lifecycle events for raced dials.
    #[must_use]
    pub fn with_events<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Connect to `host:port`.
    ///
    /// The configuration is read exactly once, here; later changes to the
    /// process-wide defaults never affect a dial already in flight.
    ///
    /// # Errors
    ///
    /// - configuration rejected by validation
    /// - resolution failure, surfaced unchanged
    /// - a single unwrapped connection error when racing was not engaged
    /// - the aggregate of every per-attempt error when the race exhausted
    ///   its candidates
    pub async fn dial(&self, host: &str, port: u16) -> Result<Established, Error> {
        let config = match &self.config {
            Some(config) => config.clone(),
            None => DialConfig::snapshot(),
        };
        config.validate().map_err(error::builder)?;

        let addrs = self.resolve_addrs(host).await?;
        let addrs = resolve::restrict_family(addrs, config.requested_family);
        if addrs.is_empty() {
            return Err(error::resolve(format!(
                "no addresses for {host} match the requested family"
            )));
        }

        let candidates = tcp::sequence(&addrs, port, config.ipv4_first);

        // Racing needs at least two candidates and an unrestricted family;
        // everything else degrades to one plain attempt.
        let raced = config.auto_select_family
            && config.requested_family == IpVersion::Dual
            && candidates.len() >= 2;

        if !raced {
            let candidate = candidates[0];
            let stream = tcp::basic_connection::connect_single(candidate).await?;
            self.finish(stream, candidate, None, &config)
        } else {
            debug!(host, port, candidates = candidates.len(), "racing connection attempts");
            let outcome =
                tcp::happy_eyeballs::run_race(candidates, &config, self.sink.as_ref()).await?;
            self.finish(
                outcome.stream,
                outcome.winner,
                Some(outcome.attempted),
                &config,
            )
        }
    }

    async fn resolve_addrs(&self, host: &str) -> Result<Vec<SocketAddr>, Error> {
        // Literal addresses bypass resolution entirely.
        if let Some(ip) = resolve::ip_literal(host) {
            return Ok(vec![SocketAddr::new(ip, 0)]);
        }

        resolve::validate_hostname(host).map_err(error::resolve)?;
        self.resolver
            .resolve(Name::from(host))
            .await
            .map_err(error::resolve)
    }

    fn finish(
        &self,
        stream: TcpStream,
        remote: Candidate,
        attempted: Option<Vec<String>>,
        config: &DialConfig,
    ) -> Result<Established, Error> {
        if let Err(e) = tcp::configure_stream(&stream, &config.tcp) {
            // The connection itself is good; tuning is best-effort.
            warn!(%remote, error = %e, "failed to apply socket options");
        }
        Ok(Established {
            stream,
            remote,
            attempted,
        })
    }
}

impl Default for Dialer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Dialer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dialer")
            .field("config", &self.config)
            .finish()
    }
}

/// An established connection and how it was reached.
#[derive(Debug)]
pub struct Established {
    /// The connected stream; ownership is the caller's.
    pub stream: TcpStream,
    /// The candidate that won (or the single candidate used).
    pub remote: Candidate,
    /// Every `ip:port` attempted, in attempt order. `None` when no race
    /// took place; a raced dial and a plain dial are distinguishable here
    /// by contract.
    pub attempted: Option<Vec<String>>,
}
