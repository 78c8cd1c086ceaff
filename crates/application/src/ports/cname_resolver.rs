use async_trait::async_trait;
use findcname_domain::{DomainName, QueryResult};
use std::time::Duration;

/// Capability to resolve the CNAME records of one domain.
///
/// Implementations never fail at the call site: timeouts, transport errors
/// and malformed responses are reported through the result's status so the
/// caller can move on to the next domain.
#[async_trait]
pub trait CnameResolver: Send + Sync {
    async fn resolve_cname(&self, domain: &DomainName, timeout: Duration) -> QueryResult;
}
