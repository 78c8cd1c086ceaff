#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

/// Answer record served by the mock.
#[derive(Debug, Clone)]
pub enum MockRecord {
    Cname(&'static str),
    A([u8; 4]),
}

/// How the mock server reacts to a query.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer with the given RCODE and records.
    Respond { rcode: u8, records: Vec<MockRecord> },
    /// UDP answer has TC set and no records; TCP answers with `records`.
    Truncated { records: Vec<MockRecord> },
    /// Never answer.
    Silent,
    /// Answer with a transaction ID that does not match the query.
    WrongId,
    /// Send a wrong-ID answer first, then the real answer with `records`.
    StrayThenAnswer { records: Vec<MockRecord> },
    /// Answer with bytes that are not a DNS message.
    Garbage,
}

/// Mock DNS server on 127.0.0.1 (UDP, plus TCP on the same port).
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Vec<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts the server on an OS-assigned port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (udp_tx, mut udp_rx) = oneshot::channel::<()>();
        let (tcp_tx, mut tcp_rx) = oneshot::channel::<()>();

        let udp_behavior = behavior.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut udp_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            for response in udp_replies(&udp_behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut tcp_rx => break,
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                continue;
                            }
                            let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                continue;
                            }
                            if let Some(response) = tcp_reply(&behavior, &query) {
                                let mut framed = (response.len() as u16).to_be_bytes().to_vec();
                                framed.extend_from_slice(&response);
                                let _ = stream.write_all(&framed).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: vec![udp_tx, tcp_tx],
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        for tx in self.shutdown_tx.drain(..) {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for tx in self.shutdown_tx.drain(..) {
            let _ = tx.send(());
        }
    }
}

fn with_flipped_id(mut response: Vec<u8>) -> Vec<u8> {
    response[0] ^= 0xff;
    response[1] ^= 0xff;
    response
}

fn udp_replies(behavior: &MockBehavior, query: &[u8]) -> Vec<Vec<u8>> {
    match behavior {
        MockBehavior::StrayThenAnswer { records } => vec![
            with_flipped_id(encode_response(query, RCODE_NXDOMAIN, &[], false)),
            encode_response(query, RCODE_NOERROR, records, false),
        ],
        other => udp_reply(other, query).into_iter().collect(),
    }
}

fn udp_reply(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
    match behavior {
        MockBehavior::Respond { rcode, records } => {
            Some(encode_response(query, *rcode, records, false))
        }
        MockBehavior::Truncated { .. } => Some(encode_response(query, RCODE_NOERROR, &[], true)),
        MockBehavior::Silent => None,
        MockBehavior::WrongId => Some(with_flipped_id(encode_response(
            query,
            RCODE_NOERROR,
            &[],
            false,
        ))),
        MockBehavior::StrayThenAnswer { records } => {
            Some(encode_response(query, RCODE_NOERROR, records, false))
        }
        MockBehavior::Garbage => Some(vec![0xde, 0xad, 0xbe, 0xef]),
    }
}

fn tcp_reply(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
    match behavior {
        MockBehavior::Truncated { records } => {
            Some(encode_response(query, RCODE_NOERROR, records, false))
        }
        other => udp_reply(other, query),
    }
}

/// Builds a wire-format response to `query`.
///
/// Every answer record's owner is a pointer to the question name.
pub fn encode_response(query: &[u8], rcode: u8, records: &[MockRecord], truncated: bool) -> Vec<u8> {
    let question_end = question_end(query);
    let mut response = Vec::with_capacity(512);

    // Transaction ID
    response.extend_from_slice(&query[0..2]);

    // QR=1, Opcode=0, AA=0, TC, RD=1
    response.push(if truncated { 0x83 } else { 0x81 });
    // RA=1, Z=0, RCODE
    response.push(0x80 | (rcode & 0x0f));

    // Questions count (from query)
    response.extend_from_slice(&query[4..6]);
    // Answers count
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    // Authority and additional: 0
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    response.extend_from_slice(&query[12..question_end]);

    for record in records {
        response.extend_from_slice(&[0xc0, 0x0c]);
        match record {
            MockRecord::Cname(target) => {
                let rdata = encode_name(target);
                response.extend_from_slice(&[0x00, 0x05, 0x00, 0x01]);
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
                response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
                response.extend_from_slice(&rdata);
            }
            MockRecord::A(ip) => {
                response.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
                response.extend_from_slice(&[0x00, 0x04]);
                response.extend_from_slice(ip);
            }
        }
    }

    response
}

/// Offset just past the first question (name + QTYPE + QCLASS).
fn question_end(query: &[u8]) -> usize {
    let mut pos = 12;
    while pos < query.len() && query[pos] != 0 {
        pos += query[pos] as usize + 1;
    }
    (pos + 5).min(query.len())
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_name() {
        assert_eq!(
            encode_name("a.bc."),
            vec![1, b'a', 2, b'b', b'c', 0]
        );
    }

    #[test]
    fn test_question_end_skips_name_and_type() {
        let query = vec![
            0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // header
            0x01, b'a', 0x00, // name
            0x00, 0x05, 0x00, 0x01, // CNAME IN
        ];
        assert_eq!(question_end(&query), query.len());
    }
}
