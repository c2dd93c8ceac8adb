use chrono::{DateTime, FixedOffset};

/// Deprecation notice attached to a package version
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeprecationRecord {
    pub id: Option<String>,
    pub message: Option<String>,
    pub reasons: Option<Vec<String>>,
}

/// Normalized registry metadata for one package version
///
/// Every field is independently optional. A record only exists when the
/// registry lookup fully succeeded; a failed lookup yields no record at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRecord {
    pub id: Option<String>,
    pub authors: Option<String>,
    pub copyright: Option<String>,
    pub created: Option<DateTime<FixedOffset>>,
    pub version: Option<String>,
    pub last_edited: Option<DateTime<FixedOffset>>,
    pub license_url: Option<String>,
    pub deprecation: Option<DeprecationRecord>,

    // Extended attributes
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub is_prerelease: Option<bool>,
    pub package_hash: Option<String>,
    pub package_hash_algorithm: Option<String>,
    pub package_size: Option<u64>,
    pub project_url: Option<String>,
    pub published: Option<DateTime<FixedOffset>>,
    pub repository: Option<String>,
    pub require_license_acceptance: Option<bool>,
    pub serviceable: Option<bool>,
    pub verbatim_version: Option<String>,
}
