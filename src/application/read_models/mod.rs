//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for formatters.

mod normalized_read_model;
mod normalized_read_model_builder;
mod package_view;

pub use normalized_read_model::{
    NormalizedReadModel, PseudoVersionView, ReportMetadataView, SummaryView,
};
pub use normalized_read_model_builder::NormalizedReadModelBuilder;
pub use package_view::{DependencyView, PackageView};
