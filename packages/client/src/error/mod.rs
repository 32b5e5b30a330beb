pub mod constructors;
pub mod types;

// Re-export main types and functions
pub use constructors::*;
pub use types::{Error, Kind, Result};

// Type alias kept for callers that name the error by domain
pub type DialError = Error;

// Boxed error type shared by resolver implementations and error sources
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
