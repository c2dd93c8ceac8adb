/// Package lookup domain layer
///
/// Pure domain models and services with no infrastructure dependencies.
pub mod domain;
pub mod services;
