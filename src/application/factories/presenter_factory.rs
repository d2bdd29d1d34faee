use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter for an optional output path
    ///
    /// # Arguments
    /// * `output_path` - File to write to; `None` writes to stdout
    pub fn create(output_path: Option<PathBuf>) -> Box<dyn OutputPresenter> {
        match output_path {
            Some(path) => Box::new(FileSystemWriter::new(path)),
            None => Box::new(StdoutPresenter::new()),
        }
    }
}
