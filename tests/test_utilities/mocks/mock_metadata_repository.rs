use async_trait::async_trait;
use package_finder::prelude::*;
use package_finder::shared::ResolutionResult;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock MetadataRepository keyed by `name@version`
///
/// Identifiers without a registered record fail with a 404 status, the
/// same way an unknown package fails against the live registry.
#[derive(Default, Clone)]
pub struct MockMetadataRepository {
    records: HashMap<String, MetadataRecord>,
    missing_links: Vec<String>,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl MockMetadataRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, version: &str, record: MetadataRecord) -> Self {
        self.records.insert(format!("{}@{}", name, version), record);
        self
    }

    /// The registration leaf exists but carries no catalog entry link
    pub fn with_missing_link(mut self, name: &str, version: &str) -> Self {
        self.missing_links.push(format!("{}@{}", name, version));
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl MetadataRepository for MockMetadataRepository {
    async fn fetch_metadata(
        &self,
        identifier: &PackageIdentifier,
    ) -> ResolutionResult<MetadataRecord> {
        let key = identifier.to_string();
        self.lookups.lock().unwrap().push(key.clone());

        let url = format!(
            "http://registry.test/{}/{}.json",
            identifier.name().to_lowercase(),
            identifier.version()
        );
        if self.missing_links.contains(&key) {
            return Err(ResolutionError::MissingLink {
                url,
                field: "catalogEntry",
            });
        }

        self.records
            .get(&key)
            .cloned()
            .ok_or(ResolutionError::HttpStatus { url, status: 404 })
    }
}
