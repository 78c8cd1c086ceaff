#![allow(dead_code)]

use async_trait::async_trait;
use findcname_application::ports::CnameResolver;
use findcname_domain::{DomainName, QueryResult, ResolutionFailure, ResponseStatus};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
enum MockAnswer {
    Response(ResponseStatus, Vec<String>),
    Failure(ResolutionFailure),
}

// ============================================================================
// Mock CnameResolver
// ============================================================================

/// Resolver with canned answers per domain. Unknown domains get NXDOMAIN.
/// Records every call so tests can check ordering.
#[derive(Clone, Default)]
pub struct MockCnameResolver {
    answers: Arc<Mutex<HashMap<String, MockAnswer>>>,
    calls: Arc<Mutex<Vec<(String, Duration)>>>,
}

impl MockCnameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cnames(self, domain: &str, targets: &[&str]) -> Self {
        self.answers.lock().unwrap().insert(
            domain.to_string(),
            MockAnswer::Response(
                ResponseStatus::NoError,
                targets.iter().map(|t| t.to_string()).collect(),
            ),
        );
        self
    }

    pub fn with_status(self, domain: &str, status: ResponseStatus) -> Self {
        self.answers.lock().unwrap().insert(
            domain.to_string(),
            MockAnswer::Response(status, vec!["leaked.example.net.".to_string()]),
        );
        self
    }

    pub fn with_failure(self, domain: &str, failure: ResolutionFailure) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert(domain.to_string(), MockAnswer::Failure(failure));
        self
    }

    pub fn calls(&self) -> Vec<(String, Duration)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CnameResolver for MockCnameResolver {
    async fn resolve_cname(&self, domain: &DomainName, timeout: Duration) -> QueryResult {
        self.calls
            .lock()
            .unwrap()
            .push((domain.to_string(), timeout));

        let answer = self.answers.lock().unwrap().get(domain.as_str()).cloned();
        match answer {
            Some(MockAnswer::Response(status, records)) => {
                QueryResult::answered(domain.clone(), status, records)
            }
            Some(MockAnswer::Failure(failure)) => QueryResult::failed(domain.clone(), failure),
            None => QueryResult::answered(domain.clone(), ResponseStatus::NXDomain, Vec::new()),
        }
    }
}

pub fn domains(names: &[&str]) -> Vec<DomainName> {
    names
        .iter()
        .map(|n| DomainName::parse(n).unwrap())
        .collect()
}
