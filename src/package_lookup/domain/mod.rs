pub mod metadata_record;
pub mod package_identifier;
pub mod resolved_package;
pub mod vulnerability;

pub use metadata_record::{DeprecationRecord, MetadataRecord};
pub use package_identifier::PackageIdentifier;
pub use resolved_package::ResolvedPackage;
pub use vulnerability::VulnerabilityRecord;
