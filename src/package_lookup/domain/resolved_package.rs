use super::{MetadataRecord, PackageIdentifier, VulnerabilityRecord};

/// Outcome of resolving one identifier against both services
///
/// `metadata` is `None` when the registry lookup failed.
/// `vulnerabilities` is `None` when the advisory lookup failed and
/// `Some(vec![])` when it succeeded without findings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPackage {
    token: String,
    identifier: PackageIdentifier,
    metadata: Option<MetadataRecord>,
    vulnerabilities: Option<Vec<VulnerabilityRecord>>,
}

impl ResolvedPackage {
    pub fn new(
        token: String,
        identifier: PackageIdentifier,
        metadata: Option<MetadataRecord>,
        vulnerabilities: Option<Vec<VulnerabilityRecord>>,
    ) -> Self {
        Self {
            token,
            identifier,
            metadata,
            vulnerabilities,
        }
    }

    /// The raw input token, exactly as read
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn identifier(&self) -> &PackageIdentifier {
        &self.identifier
    }

    pub fn metadata(&self) -> Option<&MetadataRecord> {
        self.metadata.as_ref()
    }

    pub fn vulnerabilities(&self) -> Option<&[VulnerabilityRecord]> {
        self.vulnerabilities.as_deref()
    }

    /// Number of known vulnerabilities; 0 when none were found or the lookup failed
    pub fn vulnerability_count(&self) -> usize {
        self.vulnerabilities.as_ref().map_or(0, Vec::len)
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerability_count() > 0
    }
}
