/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives the outside world only through the
/// outbound ports declared here (registry, advisory service, file system,
/// console).
pub mod outbound;
