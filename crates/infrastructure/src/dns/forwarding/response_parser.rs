use findcname_domain::{DomainError, ResponseStatus};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

/// The parts of a DNS response the CNAME lookup cares about.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// CNAME targets from the answer section, in answer order, each ending
    /// with a dot.
    pub cname_targets: Vec<String>,

    /// Answer records of any other type (ignored for reporting).
    pub other_answers: usize,
}

impl DnsResponse {
    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::from_code(u16::from(self.rcode))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a DNS response and checks it answers the query with `expected_id`.
    pub fn parse_for(response_bytes: &[u8], expected_id: u16) -> Result<DnsResponse, DomainError> {
        let response = Self::parse(response_bytes)?;
        if response.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                response.id, expected_id
            )));
        }
        Ok(response)
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "message is not a response (QR bit clear)".to_string(),
            ));
        }

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut cname_targets = Vec::new();
        let mut other_answers = 0;

        for record in message.answers() {
            match record.data() {
                RData::CNAME(canonical) => {
                    let mut name = canonical.to_utf8();
                    if !name.ends_with('.') {
                        name.push('.');
                    }
                    debug!(owner = %record.name(), cname = %name, "CNAME record found");
                    cname_targets.push(name);
                }
                _ => other_answers += 1,
            }
        }

        debug!(
            id = message.id(),
            rcode = ?rcode,
            cname_records = cname_targets.len(),
            other_answers = other_answers,
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            cname_targets,
            other_answers,
        })
    }

    pub fn is_transport_error(error: &DomainError) -> bool {
        matches!(
            error,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::IoError(_)
        )
    }
}
