//! Configuration for findcname
//!
//! - `root`: main configuration and CLI overrides
//! - `dns`: nameservers, timeout, TCP fallback
//! - `logging`: logging settings
//! - `output`: report settings
//! - `errors`: configuration errors

pub mod dns;
pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use dns::{parse_nameserver, DnsConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
