use async_trait::async_trait;
use findcname_domain::{DomainError, DomainName};

/// An input line that could not be turned into a domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Domains read from the input, in input order.
#[derive(Debug, Clone, Default)]
pub struct DomainList {
    pub domains: Vec<DomainName>,
    pub skipped: Vec<SkippedLine>,
}

#[async_trait]
pub trait DomainListSource: Send + Sync {
    /// Reads the whole list. Failing to read the source at all, or finding no
    /// valid domain in it, is an error; bad individual lines are not.
    async fn read_domains(&self) -> Result<DomainList, DomainError>;
}
