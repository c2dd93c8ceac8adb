//! package-finder - registry metadata and vulnerability lookup for package identifiers
//!
//! Reads `name@version` identifiers, resolves each one against a package
//! registry (two-hop registration lookup) and a security-advisory service,
//! and renders one text report per identifier.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`package_lookup`): Identifiers, records and report assembly
//! - **Application Layer** (`application`): The lookup use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use package_finder::prelude::*;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let http = JsonHttpClient::new(Duration::from_secs(30))?;
//! let registry = NuGetRegistryClient::new(http.clone(), NuGetRegistryClient::DEFAULT_REGISTRY_URL)?;
//! let advisory = OssIndexClient::new(http, OssIndexClient::DEFAULT_ADVISORY_URL)?;
//!
//! // Create use case
//! let use_case = FindPackagesUseCase::new(
//!     registry,
//!     advisory,
//!     StderrProgressReporter::new(),
//!     ReportAssembler::new(ReportLayout::Standard),
//! );
//!
//! // Execute
//! let tokens = vec!["Newtonsoft.Json@13.0.1".to_string()];
//! let reports: Vec<String> = use_case.run(&tokens).collect().await;
//! for report in reports {
//!     println!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod package_lookup;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        JsonHttpClient, NuGetRegistryClient, OssIndexClient,
    };
    pub use crate::application::dto::LookupSummary;
    pub use crate::application::use_cases::FindPackagesUseCase;
    pub use crate::ports::outbound::{
        MetadataRepository, OutputPresenter, PackageListReader, ProgressReporter,
        VulnerabilityRepository,
    };
    pub use crate::package_lookup::domain::{
        DeprecationRecord, MetadataRecord, PackageIdentifier, ResolvedPackage,
        VulnerabilityRecord,
    };
    pub use crate::package_lookup::services::{ReportAssembler, ReportLayout};
    pub use crate::shared::error::{ExitCode, FailureKind, PackageFinderError, ResolutionError};
    pub use crate::shared::Result;
}
