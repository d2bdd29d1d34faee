//! Normalized read model for query and formatting operations
//!
//! Flattens a `NormalizedPackages` aggregate into sorted vectors so
//! formatters never have to know about the domain's set types.

use super::package_view::{DependencyView, PackageView};
use std::collections::BTreeMap;

/// Main read model for a normalization result
#[derive(Debug, Clone)]
pub struct NormalizedReadModel {
    pub metadata: ReportMetadataView,
    pub ecosystem: String,
    pub summary: SummaryView,
    pub direct_dependencies: Vec<PackageView>,
    pub transitive_dependencies: Vec<PackageView>,
    /// All packages, or all except pseudo-flagged ones when exclusion was requested
    pub dependencies: Vec<PackageView>,
    pub dependency_graph: Vec<DependencyView>,
    /// Present for module-based ecosystems only
    pub pseudo_versions: Option<PseudoVersionView>,
}

/// View representation of report metadata
#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub serial_number: String,
}

/// Counts shown at the top of every report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryView {
    pub direct_count: usize,
    pub transitive_count: usize,
    pub total_count: usize,
    pub pseudo_count: usize,
    /// Size of `NormalizedReadModel::dependencies`
    pub dependency_count: usize,
    pub pseudo_excluded: bool,
}

/// Pseudo-version bookkeeping for module-based ecosystems
#[derive(Debug, Clone, Default)]
pub struct PseudoVersionView {
    pub modules: Vec<String>,
    pub versions: BTreeMap<String, String>,
    pub packages: Vec<PackageView>,
}
