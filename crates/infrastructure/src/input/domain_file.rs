use async_trait::async_trait;
use findcname_application::ports::{DomainList, DomainListSource, SkippedLine};
use findcname_domain::{DomainError, DomainName};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, warn};

/// Turns the text of a domain list into domain names.
///
/// Blank lines are ignored. Lines that do not yield a host name are recorded
/// in `skipped` and do not stop parsing.
pub fn parse_domain_list(content: &str) -> DomainList {
    let mut list = DomainList::default();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match DomainName::from_input_line(line) {
            Ok(domain) => list.domains.push(domain),
            Err(reason) => {
                warn!(
                    line = idx + 1,
                    content = line.trim(),
                    reason = %reason,
                    "Malformed domain, skipping"
                );
                list.skipped.push(SkippedLine {
                    line: idx + 1,
                    content: line.trim().to_string(),
                    reason,
                });
            }
        }
    }

    list
}

/// Domain list read from a UTF-8 text file, one entry per line.
pub struct FileDomainList {
    path: PathBuf,
}

impl FileDomainList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DomainListSource for FileDomainList {
    async fn read_domains(&self) -> Result<DomainList, DomainError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::InputFile(format!("{}: {}", self.path.display(), e)))?;

        let list = parse_domain_list(&content);
        if list.domains.is_empty() {
            return Err(DomainError::NoValidDomains);
        }

        debug!(
            path = %self.path.display(),
            domains = list.domains.len(),
            skipped = list.skipped.len(),
            "Domain list loaded"
        );

        Ok(list)
    }
}
