use std::error::Error as StdError;
use std::fmt;
use std::net::SocketAddr;

/// A Result alias where the Err case is `dialrace_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while establishing a connection.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync>>,
    addr: Option<SocketAddr>,
    attempts: Vec<Error>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Dial configuration rejected before any work started
    Builder,
    /// Name resolution failed outright; no connection was ever attempted
    Resolve,
    /// A single connection attempt was refused or otherwise failed at the OS level
    Connect,
    /// A single connection attempt exceeded its per-attempt deadline
    AttemptTimeout,
    /// Every candidate address was attempted and none connected
    Exhausted,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                addr: None,
                attempts: Vec::new(),
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_addr(mut self, addr: SocketAddr) -> Error {
        self.inner.addr = Some(addr);
        self
    }

    #[must_use]
    pub(crate) fn with_attempts(mut self, attempts: Vec<Error>) -> Error {
        self.inner.attempts = attempts;
        self
    }

    #[allow(dead_code)]
    pub(crate) fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Returns true if this error came from the resolution step.
    #[must_use]
    pub fn is_resolve(&self) -> bool {
        matches!(self.inner.kind, Kind::Resolve)
    }

    /// Returns true if this error is a single attempt's connection failure.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self.inner.kind, Kind::Connect)
    }

    /// Returns true if this error is a per-attempt deadline expiry.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self.inner.kind, Kind::AttemptTimeout)
    }

    /// Returns true if every candidate was attempted without success.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.inner.kind, Kind::Exhausted)
    }

    /// The remote address associated with this error, if any.
    #[must_use]
    pub fn addr(&self) -> Option<SocketAddr> {
        self.inner.addr
    }

    /// For an exhausted error, the per-attempt errors in attempt order.
    ///
    /// Empty for every other kind.
    #[must_use]
    pub fn attempt_errors(&self) -> &[Error] {
        &self.inner.attempts
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("dialrace::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref addr) = self.inner.addr {
            f.field("addr", addr);
        }

        if !self.inner.attempts.is_empty() {
            f.field("attempts", &self.inner.attempts);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::Resolve => f.write_str("dns resolution error")?,
            Kind::Connect => f.write_str("connection attempt error")?,
            Kind::AttemptTimeout => f.write_str("connection attempt timed out")?,
            Kind::Exhausted => {
                write!(
                    f,
                    "all connection attempts failed ({} errors)",
                    self.inner.attempts.len()
                )?;
            }
        }

        if let Some(addr) = self.inner.addr {
            write!(f, " for {addr}")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| &**e as &(dyn StdError + 'static))
    }
}
