use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::tcp::TcpTransport;
use crate::dns::transport::udp::UdpTransport;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use findcname_application::ports::CnameResolver;
use findcname_domain::{DomainError, DomainName, QueryResult, ResolutionFailure};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Stub resolver that sends one CNAME query to a recursive nameserver.
///
/// Only the first nameserver is used. There is no retry and no cache; the
/// only second exchange is the TCP re-send of a truncated UDP answer.
pub struct StubCnameResolver {
    nameservers: Vec<SocketAddr>,
    tcp_fallback: bool,
}

impl StubCnameResolver {
    pub fn new(nameservers: Vec<SocketAddr>) -> Self {
        Self {
            nameservers,
            tcp_fallback: true,
        }
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }

    pub fn nameservers(&self) -> &[SocketAddr] {
        &self.nameservers
    }

    async fn query(
        &self,
        domain: &DomainName,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let server = *self.nameservers.first().ok_or(DomainError::NoNameservers)?;
        let deadline = Instant::now() + timeout;

        let (id, query_bytes) = MessageBuilder::build_cname_query(domain.as_str())?;

        let udp = UdpTransport::new(server);
        let raw = udp.send(&query_bytes, timeout).await?;
        debug!(
            domain = %domain,
            server = %server,
            protocol = raw.protocol_used,
            bytes = raw.bytes.len(),
            "Received DNS response"
        );
        let response = ResponseParser::parse_for(&raw.bytes, id)?;

        if !(response.truncated && self.tcp_fallback) {
            return Ok(response);
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(DomainError::TransportTimeout {
                server: server.to_string(),
            });
        }

        let tcp = TcpTransport::new(server);
        debug!(
            domain = %domain,
            server = %server,
            from = udp.protocol_name(),
            to = tcp.protocol_name(),
            "Truncated answer, re-sending"
        );

        let raw = tcp.send(&query_bytes, remaining).await?;
        debug!(
            domain = %domain,
            server = %server,
            protocol = raw.protocol_used,
            bytes = raw.bytes.len(),
            "Received DNS response"
        );
        ResponseParser::parse_for(&raw.bytes, id)
    }
}

#[async_trait]
impl CnameResolver for StubCnameResolver {
    async fn resolve_cname(&self, domain: &DomainName, timeout: Duration) -> QueryResult {
        match self.query(domain, timeout).await {
            Ok(response) => {
                if response.is_server_error() {
                    warn!(domain = %domain, rcode = ?response.rcode, "Nameserver reported an error");
                }
                QueryResult::answered(domain.clone(), response.status(), response.cname_targets)
            }
            Err(e) => {
                if ResponseParser::is_transport_error(&e) {
                    warn!(domain = %domain, error = %e, "No response from nameserver");
                } else {
                    warn!(domain = %domain, error = %e, "Unusable DNS response");
                }
                let failure = e
                    .resolution_failure()
                    .unwrap_or(ResolutionFailure::MalformedResponse);
                QueryResult::failed(domain.clone(), failure)
            }
        }
    }
}
