//! dep-normalizer - dependency graph normalization for flat package lists
//!
//! Turns the flat package list reported by a package-manager scan (every
//! root package with its immediate dependencies) into a duplicate-free
//! dependency graph: direct, transitive and all dependencies. Go
//! identifiers of the form `name@module` are split, and packages pinned to
//! a pseudo version are tracked so they can be excluded from the final list.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`normalization`): Graph construction and identifier policies
//! - **Application Layer** (`application`): Use cases, DTOs, factories and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_normalizer::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = NormalizePackagesUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     GoVersionCleaner::new(),
//!     GoPseudoVersionClassifier::new(),
//! );
//!
//! let request = NormalizeRequest::new(
//!     vec![PathBuf::from("packages.json")],
//!     Some(Ecosystem::Golang),
//!     ParsingMode::ModuleAware,
//!     true,
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response.read_model())?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod normalization;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::golang::{GoPseudoVersionClassifier, GoVersionCleaner};
    pub use crate::application::dto::{NormalizeRequest, NormalizeResponse, OutputFormat, ParsingMode};
    pub use crate::application::use_cases::NormalizePackagesUseCase;
    pub use crate::normalization::domain::{
        Ecosystem, NormalizedPackages, PackageIdentity, RawPackage, ReportMetadata,
    };
    pub use crate::normalization::policies::IdentifierParser;
    pub use crate::ports::outbound::{
        NormalizedFormatter, OutputPresenter, PackageList, PackageListReader, ProgressReporter,
        PseudoVersionClassifier, VersionCleaner,
    };
    pub use crate::shared::Result;
}
