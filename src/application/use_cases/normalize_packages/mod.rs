use crate::application::dto::{NormalizeRequest, NormalizeResponse};
use crate::application::factories::ParserFactory;
use crate::normalization::domain::{Ecosystem, NormalizedPackages, RawPackage};
use crate::normalization::services::ReportGenerator;
use crate::ports::outbound::{
    PackageListReader, ProgressReporter, PseudoVersionClassifier, VersionCleaner,
};
use crate::shared::error::NormalizerError;
use crate::shared::Result;
use std::path::PathBuf;

/// NormalizePackagesUseCase - Core use case for dependency normalization
///
/// Reads every input file, settles on one ecosystem, and builds the
/// duplicate-free graph with the identifier strategy of that ecosystem.
///
/// # Type Parameters
/// * `R` - PackageListReader implementation
/// * `PR` - ProgressReporter implementation
/// * `C` - VersionCleaner implementation
/// * `P` - PseudoVersionClassifier implementation
pub struct NormalizePackagesUseCase<R, PR, C, P> {
    package_list_reader: R,
    progress_reporter: PR,
    version_cleaner: C,
    pseudo_classifier: P,
}

impl<R, PR, C, P> NormalizePackagesUseCase<R, PR, C, P>
where
    R: PackageListReader,
    PR: ProgressReporter,
    C: VersionCleaner,
    P: PseudoVersionClassifier,
{
    /// Creates a new NormalizePackagesUseCase with injected dependencies
    pub fn new(
        package_list_reader: R,
        progress_reporter: PR,
        version_cleaner: C,
        pseudo_classifier: P,
    ) -> Self {
        Self {
            package_list_reader,
            progress_reporter,
            version_cleaner,
            pseudo_classifier,
        }
    }

    /// Executes the normalization use case
    ///
    /// # Errors
    /// Returns an error if no input is given, a file cannot be read or
    /// parsed, the ecosystem cannot be determined, or an identifier is
    /// malformed for the selected ecosystem.
    pub fn execute(&self, request: NormalizeRequest) -> Result<NormalizeResponse> {
        if request.input_paths.is_empty() {
            return Err(NormalizerError::Validation {
                message: "at least one input file is required".to_string(),
            }
            .into());
        }

        let (packages, declared) = self.read_inputs(&request.input_paths)?;
        let ecosystem = Self::resolve_ecosystem(request.ecosystem, &declared)?;
        self.progress_reporter
            .report(&format!("🧭 Ecosystem: {}", ecosystem));

        let parser = ParserFactory::create(
            ecosystem,
            request.parsing_mode,
            &self.version_cleaner,
            &self.pseudo_classifier,
        );
        let normalized = NormalizedPackages::build(&packages, ecosystem, parser.as_ref())?;
        self.report_summary(&normalized);

        let metadata = ReportGenerator::generate_default_metadata();
        Ok(NormalizeResponse::new(
            normalized,
            metadata,
            request.exclude_pseudo,
        ))
    }

    /// Reads all inputs in order, returning the concatenated packages and
    /// every ecosystem a file declared alongside the file that declared it
    fn read_inputs(&self, paths: &[PathBuf]) -> Result<(Vec<RawPackage>, Vec<(Ecosystem, PathBuf)>)> {
        let mut packages = Vec::new();
        let mut declared = Vec::new();

        for (index, path) in paths.iter().enumerate() {
            self.progress_reporter.report_progress(
                index,
                paths.len(),
                Some(&format!("📖 Loading package list from: {}", path.display())),
            );

            let list = self.package_list_reader.read_package_list(path)?;
            if list.packages.is_empty() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} contains no packages.",
                    path.display()
                ));
            }
            if let Some(ecosystem) = list.ecosystem {
                declared.push((ecosystem, path.clone()));
            }
            packages.extend(list.packages);
        }

        self.progress_reporter.report_progress(
            paths.len(),
            paths.len(),
            Some(&format!("✅ Loaded {} root package(s)", packages.len())),
        );

        Ok((packages, declared))
    }

    /// The requested ecosystem wins; otherwise all declaring files must agree
    fn resolve_ecosystem(
        requested: Option<Ecosystem>,
        declared: &[(Ecosystem, PathBuf)],
    ) -> Result<Ecosystem> {
        if let Some(ecosystem) = requested {
            return Ok(ecosystem);
        }

        let Some((first, first_path)) = declared.first() else {
            return Err(NormalizerError::Validation {
                message: "no ecosystem given; pass --ecosystem or declare `ecosystem` in the input file".to_string(),
            }
            .into());
        };

        if let Some((other, other_path)) = declared.iter().find(|(e, _)| e != first) {
            return Err(NormalizerError::Validation {
                message: format!(
                    "input files declare conflicting ecosystems: {} ({}) and {} ({})",
                    first,
                    first_path.display(),
                    other,
                    other_path.display()
                ),
            }
            .into());
        }

        Ok(*first)
    }

    fn report_summary(&self, normalized: &NormalizedPackages) {
        self.progress_reporter.report(&format!(
            "🔗 {} direct, {} transitive, {} unique package(s)",
            normalized.direct_dependency_count(),
            normalized.transitive_dependency_count(),
            normalized.total_package_count()
        ));

        let pseudo_count = normalized.pseudo_packages().len();
        if pseudo_count > 0 {
            self.progress_reporter.report(&format!(
                "🧪 {} package(s) pinned to a pseudo version across {} module(s)",
                pseudo_count,
                normalized.modules().len()
            ));
        }

        self.progress_reporter
            .report_completion("✅ Normalization complete");
    }
}

#[cfg(test)]
mod tests;
