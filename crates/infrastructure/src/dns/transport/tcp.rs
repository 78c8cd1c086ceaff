use super::{map_io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use findcname_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport (RFC 1035 §4.2.2 two-byte length prefix).
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<TransportResponse, DomainError> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::InvalidDomainName(format!(
                "DNS message too large for TCP: {} bytes",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| map_io_error(e, self.server_addr, "connect to"))?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(message_bytes);

        stream
            .write_all(&framed)
            .await
            .map_err(|e| map_io_error(e, self.server_addr, "send TCP query to"))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = message_bytes.len(),
            "TCP query sent"
        );

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| map_io_error(e, self.server_addr, "read TCP length from"))?;

        let response_len = u16::from_be_bytes(len_buf) as usize;
        let mut response = vec![0u8; response_len];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| map_io_error(e, self.server_addr, "read TCP response from"))?;

        debug!(
            server = %self.server_addr,
            bytes_received = response_len,
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response,
            protocol_used: "TCP",
        })
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| timeout_error(self.server_addr))?
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
