/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, advisory service, file system, console).
pub mod metadata_repository;
pub mod output_presenter;
pub mod package_list_reader;
pub mod progress_reporter;
pub mod vulnerability_repository;

pub use metadata_repository::MetadataRepository;
pub use output_presenter::OutputPresenter;
pub use package_list_reader::PackageListReader;
pub use progress_reporter::ProgressReporter;
pub use vulnerability_repository::VulnerabilityRepository;
