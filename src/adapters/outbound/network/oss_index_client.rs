use super::http_client::{append_segments, parse_base_url, JsonHttpClient};
use super::json_decoder::lenient;
use crate::package_lookup::domain::VulnerabilityRecord;
use crate::ports::outbound::VulnerabilityRepository;
use crate::shared::error::ResolutionError;
use crate::shared::{ResolutionResult, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ComponentReport {
    #[serde(default)]
    vulnerabilities: Option<Vec<ReportedVulnerability>>,
}

#[derive(Debug, Deserialize)]
struct ReportedVulnerability {
    #[serde(default, deserialize_with = "lenient::string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    reference: Option<String>,
}

impl From<ReportedVulnerability> for VulnerabilityRecord {
    fn from(reported: ReportedVulnerability) -> Self {
        VulnerabilityRecord::new(reported.title, reported.description, reported.reference)
    }
}

/// OssIndexClient adapter fetching component reports from the advisory service
///
/// The raw identifier token is appended to the report endpoint unchanged
/// (one path segment). A non-success status is a failure even if the
/// service sends a body with it.
pub struct OssIndexClient {
    http: JsonHttpClient,
    advisory_url: Url,
}

impl OssIndexClient {
    pub const DEFAULT_ADVISORY_URL: &'static str =
        "https://ossindex.sonatype.org/api/v3/component-report";

    /// Creates a client for the component-report endpoint at `advisory_url`
    pub fn new(http: JsonHttpClient, advisory_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            advisory_url: parse_base_url(advisory_url)?,
        })
    }

    /// URL of the component report for the raw token
    pub fn report_url(&self, token: &str) -> ResolutionResult<Url> {
        append_segments(&self.advisory_url, &[token])
    }
}

#[async_trait]
impl VulnerabilityRepository for OssIndexClient {
    async fn fetch_vulnerabilities(&self, token: &str) -> ResolutionResult<Vec<VulnerabilityRecord>> {
        let url = self.report_url(token)?;
        let report: ComponentReport = self.http.get_json(&url).await?;

        let vulnerabilities = report
            .vulnerabilities
            .ok_or_else(|| ResolutionError::MissingField {
                url: url.to_string(),
                field: "vulnerabilities",
            })?;

        Ok(vulnerabilities
            .into_iter()
            .map(VulnerabilityRecord::from)
            .collect())
    }
}
