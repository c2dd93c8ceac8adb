use crate::package_lookup::domain::{MetadataRecord, PackageIdentifier};
use crate::shared::ResolutionResult;
use async_trait::async_trait;

/// MetadataRepository port for resolving package metadata
///
/// This port abstracts the package registry used to resolve an identifier
/// to its canonical metadata record.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the lookup can run alongside
/// the vulnerability query for the same identifier.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Resolves the metadata record of one package version
    ///
    /// # Arguments
    /// * `identifier` - Parsed package identifier
    ///
    /// # Returns
    /// The complete metadata record. A record is never returned partially.
    ///
    /// # Errors
    /// Returns a `ResolutionError` if:
    /// - Any request fails or returns a non-success status
    /// - A response body cannot be decoded
    /// - The registry does not point to a catalog entry
    async fn fetch_metadata(&self, identifier: &PackageIdentifier)
        -> ResolutionResult<MetadataRecord>;
}
