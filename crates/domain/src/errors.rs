use crate::query_result::ResolutionFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to read domain list: {0}")]
    InputFile(String),

    #[error("Domain list contains no valid domains")]
    NoValidDomains,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("No nameservers configured")]
    NoNameservers,
}

impl DomainError {
    /// Classifies a resolution-time error into the status reported for the domain.
    ///
    /// Returns `None` for errors that are not produced while resolving a single
    /// domain (input file problems).
    pub fn resolution_failure(&self) -> Option<ResolutionFailure> {
        match self {
            DomainError::TransportTimeout { .. } => Some(ResolutionFailure::Timeout),
            DomainError::TransportConnectionRefused { .. } | DomainError::IoError(_) => {
                Some(ResolutionFailure::Transport)
            }
            DomainError::InvalidDnsResponse(_) => Some(ResolutionFailure::MalformedResponse),
            DomainError::InvalidDomainName(_) => Some(ResolutionFailure::InvalidQuery),
            DomainError::NoNameservers => Some(ResolutionFailure::NoNameservers),
            DomainError::InputFile(_) | DomainError::NoValidDomains => None,
        }
    }

    /// True for the errors that abort a run before any resolution starts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::InputFile(_) | DomainError::NoValidDomains)
    }
}
