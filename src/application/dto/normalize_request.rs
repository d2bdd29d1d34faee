use crate::normalization::domain::Ecosystem;
use std::path::PathBuf;

/// How Go identifiers are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsingMode {
    /// Strict `name@module` parsing with pseudo-version tracking
    #[default]
    ModuleAware,
    /// Module suffix stripped from top-level names only; no pseudo tracking
    Legacy,
}

/// NormalizeRequest - Internal request DTO for the normalization use case
#[derive(Debug, Clone)]
pub struct NormalizeRequest {
    /// Package list files, concatenated in this order
    pub input_paths: Vec<PathBuf>,
    /// Ecosystem chosen by the caller; falls back to the one declared in the inputs
    pub ecosystem: Option<Ecosystem>,
    pub parsing_mode: ParsingMode,
    /// Whether the final dependency list drops pseudo-flagged packages
    pub exclude_pseudo: bool,
}

impl NormalizeRequest {
    pub fn new(
        input_paths: Vec<PathBuf>,
        ecosystem: Option<Ecosystem>,
        parsing_mode: ParsingMode,
        exclude_pseudo: bool,
    ) -> Self {
        Self {
            input_paths,
            ecosystem,
            parsing_mode,
            exclude_pseudo,
        }
    }
}
