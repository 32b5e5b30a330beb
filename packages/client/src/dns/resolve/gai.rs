use std::io;
use std::net::SocketAddr;

use super::traits::{Resolve, Resolving};
use super::types::Name;

/// System resolver backed by `getaddrinfo` via [`tokio::net::lookup_host`].
#[derive(Debug)]
pub struct GaiResolver {
    _priv: (),
}

impl GaiResolver {
    pub fn new() -> Self {
        Self { _priv: () }
    }
}

impl Default for GaiResolver {
    fn default() -> Self {
        GaiResolver::new()
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let hostname = name.as_str().to_string();

        Box::pin(async move {
            // lookup_host requires a port; the caller rewrites ports anyway.
            let host_port = format!("{hostname}:0");
            let addrs: Vec<SocketAddr> = tokio::net::lookup_host(host_port).await?.collect();
            if addrs.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("No addresses found for {hostname}"),
                )
                .into());
            }
            Ok(addrs)
        })
    }
}
