use async_trait::async_trait;
use findcname_domain::DomainError;
use std::net::SocketAddr;

/// Where the resolver finds its nameservers when none are configured.
#[async_trait]
pub trait NameserverSource: Send + Sync {
    async fn nameservers(&self) -> Result<Vec<SocketAddr>, DomainError>;
}
