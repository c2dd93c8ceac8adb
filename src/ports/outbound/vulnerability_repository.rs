use crate::package_lookup::domain::VulnerabilityRecord;
use crate::shared::ResolutionResult;
use async_trait::async_trait;

/// VulnerabilityRepository port for querying known vulnerabilities
///
/// This port abstracts the security-advisory service, keyed by the raw
/// identifier token as read from the input.
#[async_trait]
pub trait VulnerabilityRepository: Send + Sync {
    /// Fetches the known vulnerabilities of a package version
    ///
    /// # Arguments
    /// * `token` - Raw identifier token (`name@version`)
    ///
    /// # Returns
    /// Vulnerabilities in the order reported by the service. An empty list
    /// means the query succeeded and nothing is known.
    ///
    /// # Errors
    /// Returns a `ResolutionError` if the request fails, the status is not
    /// a success, or the report cannot be decoded.
    async fn fetch_vulnerabilities(&self, token: &str) -> ResolutionResult<Vec<VulnerabilityRecord>>;
}
