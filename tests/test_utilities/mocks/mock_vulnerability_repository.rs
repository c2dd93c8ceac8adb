use async_trait::async_trait;
use package_finder::prelude::*;
use package_finder::shared::ResolutionResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock VulnerabilityRepository keyed by the raw token
///
/// Tokens without a registered report fail as if the service answered
/// without a `vulnerabilities` field.
#[derive(Default, Clone)]
pub struct MockVulnerabilityRepository {
    reports: HashMap<String, Vec<VulnerabilityRecord>>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockVulnerabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, token: &str, report: Vec<VulnerabilityRecord>) -> Self {
        self.reports.insert(token.to_string(), report);
        self
    }

    pub fn queried_tokens(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VulnerabilityRepository for MockVulnerabilityRepository {
    async fn fetch_vulnerabilities(
        &self,
        token: &str,
    ) -> ResolutionResult<Vec<VulnerabilityRecord>> {
        self.queries.lock().unwrap().push(token.to_string());

        self.reports
            .get(token)
            .cloned()
            .ok_or_else(|| ResolutionError::MissingField {
                url: format!("http://advisory.test/{}", token),
                field: "vulnerabilities",
            })
    }
}
