use std::fmt;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A host name to resolve.
///
/// Always non-empty, lowercase, without a trailing dot. Cloning is cheap
/// (`Arc<str>`), so results can carry the name without copying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

impl DomainName {
    /// Validates a bare host name.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if name.is_empty() {
            return Err("domain name cannot be empty".to_string());
        }
        if name.len() > MAX_NAME_LEN {
            return Err(format!(
                "domain name exceeds {} characters",
                MAX_NAME_LEN
            ));
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err(format!("empty label in '{}'", name));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(format!(
                    "label '{}' exceeds {} characters",
                    label, MAX_LABEL_LEN
                ));
            }
            if let Some(c) = label
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            {
                return Err(format!("invalid character '{}' in '{}'", c, name));
            }
        }

        Ok(Self(Arc::from(name.to_ascii_lowercase())))
    }

    /// Extracts the host component from a line of the domain list.
    ///
    /// Accepts bare host names and URLs. Scheme, userinfo, port, path, query
    /// and fragment are discarded.
    pub fn from_input_line(line: &str) -> Result<Self, String> {
        let line = line.trim();

        let rest = match line.find("://") {
            Some(idx) => &line[idx + 3..],
            None => line,
        };

        let authority_end = rest
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(rest.len());
        let authority = &rest[..authority_end];

        let host_port = match authority.rfind('@') {
            Some(idx) => &authority[idx + 1..],
            None => authority,
        };

        if host_port.starts_with('[') {
            return Err(format!("IP literal '{}' has no CNAME", host_port));
        }

        let host = match host_port.split_once(':') {
            Some((host, port)) => {
                if !port.is_empty() && !port.chars().all(|c| c.is_ascii_digit()) {
                    return Err(format!("invalid port in '{}'", host_port));
                }
                host
            }
            None => host_port,
        };

        if host.is_empty() {
            return Err(format!("no host found in '{}'", line));
        }

        Self::parse(host)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
