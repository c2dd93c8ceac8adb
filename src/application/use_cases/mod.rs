/// Use cases module containing application business logic orchestration
mod find_packages;

pub use find_packages::FindPackagesUseCase;
