use async_trait::async_trait;
use findcname_application::ports::NameserverSource;
use findcname_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, warn};

const DNS_PORT: u16 = 53;

/// Extracts nameserver addresses from resolv.conf content, in file order.
///
/// Format:
/// ```text
/// # comment
/// nameserver 192.168.1.1
/// nameserver 2001:db8::1
/// search example.com
/// ```
pub fn parse_resolv_conf(content: &str) -> Vec<SocketAddr> {
    let mut nameservers = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }

        let Some(value) = fields.next() else {
            warn!(line = line, "nameserver directive without address");
            continue;
        };

        // Link-local zone ids (fe80::1%eth0) cannot be expressed as a plain SocketAddr
        if value.contains('%') {
            debug!(nameserver = value, "Skipping zone-scoped nameserver");
            continue;
        }

        match IpAddr::from_str(value) {
            Ok(ip) => nameservers.push(SocketAddr::new(ip, DNS_PORT)),
            Err(e) => {
                warn!(error = %e, nameserver = value, "Invalid nameserver in resolv.conf");
            }
        }
    }

    nameservers
}

/// System nameserver source backed by resolv.conf.
pub struct SystemResolvConf {
    path: String,
}

impl SystemResolvConf {
    pub fn new() -> Self {
        Self {
            path: "/etc/resolv.conf".to_string(),
        }
    }

    /// Create a reader for a custom resolv.conf path (useful for testing)
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for SystemResolvConf {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameserverSource for SystemResolvConf {
    async fn nameservers(&self) -> Result<Vec<SocketAddr>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path, e))
        })?;

        let nameservers = parse_resolv_conf(&content);
        debug!(path = %self.path, count = nameservers.len(), "resolv.conf parsed");
        Ok(nameservers)
    }
}
