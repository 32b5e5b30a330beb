use std::net::SocketAddr;

use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for an invalid dial configuration.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a failed name resolution.
pub fn resolve<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Resolve).with(e.into())
}

/// Creates an `Error` for a single failed connection attempt.
pub fn connect<E: Into<BoxError>>(addr: SocketAddr, e: E) -> Error {
    Error::new(Kind::Connect).with(e.into()).with_addr(addr)
}

/// Creates an `Error` for an attempt that exceeded its per-attempt deadline.
pub fn attempt_timeout(addr: SocketAddr) -> Error {
    Error::new(Kind::AttemptTimeout).with_addr(addr)
}

/// Creates the aggregate `Error` reported when every candidate failed.
///
/// The per-attempt errors are preserved in attempt order and exposed via
/// [`Error::attempt_errors`].
pub fn exhausted(attempts: Vec<Error>) -> Error {
    Error::new(Kind::Exhausted).with_attempts(attempts)
}
