use crate::ports::CnameResolver;
use findcname_domain::{DomainName, QueryResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    /// Queries that got a DNS response (any RCODE)
    pub answered: usize,
    /// Queries that got no usable response
    pub failed: usize,
}

pub struct ResolveCnamesUseCase {
    resolver: Arc<dyn CnameResolver>,
    timeout: Duration,
}

impl ResolveCnamesUseCase {
    pub fn new(resolver: Arc<dyn CnameResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    /// Resolves `domains` one at a time, in order, handing each result to
    /// `on_result` as soon as it is available.
    ///
    /// A failed domain never stops the batch.
    pub async fn execute<F>(&self, domains: &[DomainName], mut on_result: F) -> BatchSummary
    where
        F: FnMut(&QueryResult),
    {
        let mut summary = BatchSummary {
            total: domains.len(),
            ..Default::default()
        };

        for domain in domains {
            let result = self.resolver.resolve_cname(domain, self.timeout).await;

            if result.status().is_error() {
                summary.failed += 1;
                warn!(domain = %domain, status = %result.status(), "CNAME query failed");
            } else {
                summary.answered += 1;
                debug!(
                    domain = %domain,
                    status = %result.status(),
                    records = result.records().len(),
                    "CNAME query answered"
                );
            }

            on_result(&result);
        }

        info!(
            total = summary.total,
            answered = summary.answered,
            failed = summary.failed,
            "Batch complete"
        );

        summary
    }

    /// Resolves the whole batch and returns the results in input order.
    pub async fn collect(&self, domains: &[DomainName]) -> Vec<QueryResult> {
        let mut results = Vec::with_capacity(domains.len());
        self.execute(domains, |result| results.push(result.clone()))
            .await;
        results
    }
}
