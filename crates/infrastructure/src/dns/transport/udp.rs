use super::{map_io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use findcname_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Fixed DNS header length
const DNS_HEADER_LEN: usize = 12;

/// DNS over UDP transport. A fresh socket is bound per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| map_io_error(e, self.server_addr, "bind UDP socket for"))?;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| map_io_error(e, self.server_addr, "send UDP query to"))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| map_io_error(e, self.server_addr, "receive UDP response from"))?;

            // Datagrams from anyone else are not our answer
            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            // A full header carrying another query's ID is a stale or stray
            // reply; shorter datagrams go to the parser and fail there
            if bytes_received >= DNS_HEADER_LEN
                && message_bytes.len() >= 2
                && recv_buf[..2] != message_bytes[..2]
            {
                warn!(
                    server = %self.server_addr,
                    expected_id = u16::from_be_bytes([message_bytes[0], message_bytes[1]]),
                    received_id = u16::from_be_bytes([recv_buf[0], recv_buf[1]]),
                    "UDP response ID mismatch, still waiting"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(TransportResponse {
                bytes: recv_buf,
                protocol_used: "UDP",
            });
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
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
        "UDP"
    }
}
