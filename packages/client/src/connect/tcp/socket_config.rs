//! TCP socket configuration utilities
//!
//! Applied to the winning stream before its ownership transfers to the
//! caller.

use socket2::{SockRef, TcpKeepalive};
use tokio::net::TcpStream;

use crate::config::TcpConfig;

/// Apply nodelay and keepalive settings to an established stream.
pub fn configure_stream(stream: &TcpStream, config: &TcpConfig) -> std::io::Result<()> {
    if config.nodelay {
        stream.set_nodelay(true)?;
    }

    if let Some(interval) = config.keepalive {
        let sock = SockRef::from(stream);
        sock.set_tcp_keepalive(&TcpKeepalive::new().with_time(interval))?;
    }

    Ok(())
}
