use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_DNS_PORT: u16 = 53;

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Nameservers to query ("ip", "ip:port" or "[v6]:port").
    /// Empty means: read them from `resolv_conf`.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Query timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Re-send truncated UDP answers over TCP
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,
}

impl DnsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }

    /// Parses every configured nameserver, failing on the first bad entry.
    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.nameservers
            .iter()
            .map(|s| parse_nameserver(s))
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            query_timeout: default_query_timeout(),
            tcp_fallback: default_true(),
            resolv_conf: default_resolv_conf(),
        }
    }
}

/// Parses a nameserver address, defaulting the port to 53.
pub fn parse_nameserver(value: &str) -> Result<SocketAddr, String> {
    let value = value.trim();

    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }

    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| format!("invalid nameserver address '{}'", value))
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}
