//! Resolution helper functions
//!
//! Literal-address detection, requested-family filtering, and hostname
//! validation used ahead of any resolver call.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::config::IpVersion;

/// Parse `host` as an IP address literal, accepting bracketed IPv6 forms
/// such as `[::1]`. Returns `None` for anything that needs resolution.
pub fn ip_literal(host: &str) -> Option<IpAddr> {
    let trimmed = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    IpAddr::from_str(trimmed).ok()
}

/// Keep only the addresses matching the requested family.
///
/// `Dual` passes everything through untouched; relative order is always
/// preserved.
pub fn restrict_family(addrs: Vec<SocketAddr>, family: IpVersion) -> Vec<SocketAddr> {
    match family {
        IpVersion::Dual => addrs,
        IpVersion::V4 => addrs.into_iter().filter(|a| a.is_ipv4()).collect(),
        IpVersion::V6 => addrs.into_iter().filter(|a| a.is_ipv6()).collect(),
    }
}

/// Cheap syntactic hostname check applied before hitting the resolver.
pub fn validate_hostname(hostname: &str) -> Result<(), String> {
    if hostname.is_empty() {
        return Err("hostname is empty".to_string());
    }
    if hostname.len() > 253 {
        return Err("hostname exceeds 253 characters".to_string());
    }
    for label in hostname.split('.') {
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("invalid hostname label: {label}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn ip_literal_detection() {
        assert_eq!(ip_literal("127.0.0.1"), Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert_eq!(ip_literal("::1"), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(ip_literal("[::1]"), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert_eq!(ip_literal("example.com"), None);
        assert_eq!(ip_literal("not-an-ip"), None);
    }

    #[test]
    fn family_restriction_preserves_order() {
        let addrs = vec![
            SocketAddr::new(Ipv6Addr::LOCALHOST.into(), 0),
            SocketAddr::new(Ipv4Addr::new(10, 0, 0, 1).into(), 0),
            SocketAddr::new(Ipv4Addr::new(10, 0, 0, 2).into(), 0),
        ];
        let v4 = restrict_family(addrs.clone(), IpVersion::V4);
        assert_eq!(v4.len(), 2);
        assert!(v4.iter().all(|a| a.is_ipv4()));
        assert_eq!(restrict_family(addrs.clone(), IpVersion::Dual), addrs);
    }

    #[test]
    fn hostname_validation() {
        assert!(validate_hostname("example.com").is_ok());
        assert!(validate_hostname("sub.example.com").is_ok());
        assert!(validate_hostname("").is_err());
        assert!(validate_hostname("-invalid.example").is_err());
        assert!(validate_hostname("invalid-.example").is_err());
    }
}
