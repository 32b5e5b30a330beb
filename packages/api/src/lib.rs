//! dialrace public API
//!
//! Dual-stack TCP dialing with a fluent builder. Connection attempts race
//! across address families with a stagger delay, so an unreachable family
//! never costs a full OS connect timeout.
//!
//! ```no_run
//! use dialrace::Dial;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dialrace::Error> {
//!     let established = Dial::builder()
//!         .attempt_timeout(std::time::Duration::from_millis(300))
//!         .connect("example.com", 443)
//!         .await?;
//!
//!     println!("connected to {}", established.remote);
//!     if let Some(attempted) = &established.attempted {
//!         println!("attempted: {attempted:?}");
//!     }
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::DialBuilder;

// Re-export important types from client package
pub use dialrace_client::{
    Candidate, DialConfig, DialEvent, Dialer, Error, Established, EventSink, IpVersion, Name,
    NoopSink, Resolve, Result, TcpConfig, set_default_attempt_timeout,
    set_default_auto_select_family, set_default_ipv4_first,
};

/// Main entry point providing static builder methods
pub struct Dial;

impl Dial {
    /// Create a new dial builder
    ///
    /// Shorthand for `DialBuilder::new()`
    #[must_use]
    pub fn builder() -> DialBuilder {
        DialBuilder::new()
    }

    /// Connect with the process-wide default configuration
    ///
    /// # Errors
    ///
    /// See [`Dialer::dial`].
    pub async fn connect(host: &str, port: u16) -> Result<Established> {
        Dialer::new().dial(host, port).await
    }
}

/// Create a new dial builder
///
/// Shorthand for `DialBuilder::new()`
#[must_use]
pub fn builder() -> DialBuilder {
    DialBuilder::new()
}
