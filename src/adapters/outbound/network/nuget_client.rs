use super::http_client::{append_segments, parse_base_url, JsonHttpClient};
use super::json_decoder::lenient;
use crate::package_lookup::domain::{DeprecationRecord, MetadataRecord, PackageIdentifier};
use crate::ports::outbound::MetadataRepository;
use crate::shared::error::ResolutionError;
use crate::shared::{ResolutionResult, Result};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use reqwest::Url;
use serde::Deserialize;

/// Registration leaf returned by the lookup hop
///
/// Only the pointer to the catalog entry is kept.
#[derive(Debug, Deserialize)]
struct RegistrationLeaf {
    #[serde(rename = "catalogentry", default, deserialize_with = "lenient::link")]
    catalog_entry: Option<String>,
}

/// Catalog entry document returned by the second hop
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(rename = "@id", default, deserialize_with = "lenient::string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    authors: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    copyright: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    created: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient::string")]
    version: Option<String>,
    #[serde(rename = "lastedited", default, deserialize_with = "lenient::timestamp")]
    last_edited: Option<DateTime<FixedOffset>>,
    #[serde(rename = "licenseurl", default, deserialize_with = "lenient::string")]
    license_url: Option<String>,
    #[serde(default)]
    deprecation: Option<CatalogDeprecation>,
    #[serde(default, deserialize_with = "lenient::string")]
    description: Option<String>,
    #[serde(rename = "iconurl", default, deserialize_with = "lenient::string")]
    icon_url: Option<String>,
    #[serde(rename = "isprerelease", default, deserialize_with = "lenient::boolean")]
    is_prerelease: Option<bool>,
    #[serde(rename = "packagehash", default, deserialize_with = "lenient::string")]
    package_hash: Option<String>,
    #[serde(
        rename = "packagehashalgorithm",
        default,
        deserialize_with = "lenient::string"
    )]
    package_hash_algorithm: Option<String>,
    #[serde(rename = "packagesize", default, deserialize_with = "lenient::unsigned")]
    package_size: Option<u64>,
    #[serde(rename = "projecturl", default, deserialize_with = "lenient::string")]
    project_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    published: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "lenient::string")]
    repository: Option<String>,
    #[serde(
        rename = "requirelicenseacceptance",
        default,
        deserialize_with = "lenient::boolean"
    )]
    require_license_acceptance: Option<bool>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    serviceable: Option<bool>,
    #[serde(rename = "verbatimversion", default, deserialize_with = "lenient::string")]
    verbatim_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogDeprecation {
    #[serde(rename = "@id", default, deserialize_with = "lenient::string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    message: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    reasons: Option<Vec<String>>,
}

impl From<CatalogDeprecation> for DeprecationRecord {
    fn from(deprecation: CatalogDeprecation) -> Self {
        Self {
            id: deprecation.id,
            message: deprecation.message,
            reasons: deprecation.reasons,
        }
    }
}

impl From<CatalogEntry> for MetadataRecord {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            authors: entry.authors,
            copyright: entry.copyright,
            created: entry.created,
            version: entry.version,
            last_edited: entry.last_edited,
            license_url: entry.license_url,
            deprecation: entry.deprecation.map(DeprecationRecord::from),
            description: entry.description,
            icon_url: entry.icon_url,
            is_prerelease: entry.is_prerelease,
            package_hash: entry.package_hash,
            package_hash_algorithm: entry.package_hash_algorithm,
            package_size: entry.package_size,
            project_url: entry.project_url,
            published: entry.published,
            repository: entry.repository,
            require_license_acceptance: entry.require_license_acceptance,
            serviceable: entry.serviceable,
            verbatim_version: entry.verbatim_version,
        }
    }
}

/// NuGetRegistryClient adapter resolving package metadata from the NuGet registration API
///
/// Resolution takes two strictly sequential hops: the registration leaf for
/// `{name}/{version}.json` points at a catalog entry, which is fetched and
/// decoded into a [`MetadataRecord`]. No hop is retried.
pub struct NuGetRegistryClient {
    http: JsonHttpClient,
    registry_url: Url,
}

impl NuGetRegistryClient {
    pub const DEFAULT_REGISTRY_URL: &'static str =
        "https://api.nuget.org/v3/registration5-semver1";

    /// Creates a client for the registration endpoint at `registry_url`
    pub fn new(http: JsonHttpClient, registry_url: &str) -> Result<Self> {
        Ok(Self {
            http,
            registry_url: parse_base_url(registry_url)?,
        })
    }

    /// URL of the registration leaf for `identifier`; the name is lower-cased
    pub fn lookup_url(&self, identifier: &PackageIdentifier) -> ResolutionResult<Url> {
        let name = identifier.name().to_lowercase();
        let leaf = format!("{}.json", identifier.version());
        append_segments(&self.registry_url, &[&name, &leaf])
    }

    async fn fetch_catalog_entry_url(&self, lookup_url: &Url) -> ResolutionResult<Url> {
        let leaf: RegistrationLeaf = self.http.get_json(lookup_url).await?;

        let catalog_entry = leaf.catalog_entry.ok_or_else(|| ResolutionError::MissingLink {
            url: lookup_url.to_string(),
            field: "catalogEntry",
        })?;

        Url::parse(&catalog_entry).map_err(|e| ResolutionError::InvalidUrl {
            url: catalog_entry.clone(),
            details: e.to_string(),
        })
    }
}

#[async_trait]
impl MetadataRepository for NuGetRegistryClient {
    async fn fetch_metadata(
        &self,
        identifier: &PackageIdentifier,
    ) -> ResolutionResult<MetadataRecord> {
        let lookup_url = self.lookup_url(identifier)?;
        let catalog_url = self.fetch_catalog_entry_url(&lookup_url).await?;

        let entry: CatalogEntry = self.http.get_json(&catalog_url).await?;
        Ok(entry.into())
    }
}
