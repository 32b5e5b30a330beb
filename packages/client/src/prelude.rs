//! Common imports for working with the dialer

pub use crate::config::{DialConfig, IpVersion, TcpConfig};
pub use crate::connect::{Candidate, DialEvent, Dialer, Established, EventSink, NoopSink};
pub use crate::dns::resolve::{Addrs, Name, Resolve, Resolving};
pub use crate::error::{BoxError, Error, Result};
