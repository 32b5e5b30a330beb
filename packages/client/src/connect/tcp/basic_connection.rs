//! Single-attempt connection path
//!
//! Used when racing is disabled or only one candidate exists: one plain
//! connect against one address, subject only to the OS-level connect
//! timeout, with the error surfaced unwrapped.

use tokio::net::TcpStream;
use tracing::debug;

use super::candidates::Candidate;
use crate::error::{self, Error};

pub(crate) async fn connect_single(candidate: Candidate) -> Result<TcpStream, Error> {
    debug!(%candidate, "connecting without address racing");
    match TcpStream::connect(candidate.addr()).await {
        Ok(stream) => Ok(stream),
        Err(e) => {
            debug!(%candidate, error = %e, "connection failed");
            Err(error::connect(candidate.addr(), e))
        }
    }
}
