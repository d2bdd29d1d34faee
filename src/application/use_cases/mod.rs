/// Use cases module containing application business logic orchestration
mod normalize_packages;

pub use normalize_packages::NormalizePackagesUseCase;
