//! DNS resolution via the [hickory-resolver](https://github.com/hickory-dns/hickory-dns) crate

use std::sync::Arc;

use hickory_resolver::TokioResolver;
use hickory_resolver::config::LookupIpStrategy;
use once_cell::sync::OnceCell;

use super::resolve::{Name, Resolve, Resolving};
use crate::error::BoxError;

/// Resolver backed by hickory-dns, implementing the `Resolve` trait.
///
/// Construction is delayed until the first lookup so that building a dialer
/// never touches the system resolver configuration.
#[derive(Debug, Default, Clone)]
pub struct HickoryResolver {
    state: Arc<OnceCell<TokioResolver>>,
}

impl HickoryResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        let hostname = name.as_str().to_string();

        Box::pin(async move {
            let instance = resolver.state.get_or_try_init(new_resolver)?;
            let lookup = instance.lookup_ip(hostname.as_str()).await?;
            let addrs = lookup
                .into_iter()
                .map(|ip| std::net::SocketAddr::new(ip, 0))
                .collect();
            Ok(addrs)
        })
    }
}

/// Create a resolver from the system configuration (`/etc/resolv.conf`),
/// with the lookup strategy widened to return both IPv4 and IPv6 addresses
/// so the dual-stack race has candidates from both families.
fn new_resolver() -> Result<TokioResolver, BoxError> {
    let mut builder = TokioResolver::builder_tokio()?;
    builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    Ok(builder.build())
}
