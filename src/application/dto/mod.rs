/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod lookup_summary;

pub use lookup_summary::LookupSummary;
