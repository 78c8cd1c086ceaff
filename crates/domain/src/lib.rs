//! findcname domain layer
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod query_result;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use query_result::{QueryResult, QueryStatus, ResolutionFailure, ResponseStatus};
