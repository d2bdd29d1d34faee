use crate::application::read_models::{
    DependencyView, NormalizedReadModel, PackageView, PseudoVersionView, SummaryView,
};
use crate::ports::outbound::NormalizedFormatter;
use crate::shared::Result;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|\n";

/// MarkdownFormatter adapter for rendering a human-readable report
///
/// Sections: summary, direct and transitive tables, the adjacency list,
/// the final dependency list and, for module-based ecosystems, the
/// pseudo-version bookkeeping.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn escape_inline_code(text: &str) -> String {
        text.replace('`', "'")
    }

    fn render_package_table(output: &mut String, packages: &[PackageView], empty_note: &str) {
        if packages.is_empty() {
            output.push_str(&format!("*{}*\n\n", empty_note));
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for package in packages {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&package.name),
                Self::escape_markdown_table_cell(&package.version)
            ));
        }
        output.push('\n');
    }

    fn inline_package(package: &PackageView) -> String {
        format!(
            "`{}@{}`",
            Self::escape_inline_code(&package.name),
            Self::escape_inline_code(&package.version)
        )
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &NormalizedReadModel) {
        output.push_str("# Normalized Dependency Report\n\n");
        output.push_str(&format!("- **Ecosystem**: {}\n", model.ecosystem));
        output.push_str(&format!(
            "- **Generated by**: {} {}\n",
            model.metadata.tool_name, model.metadata.tool_version
        ));
        output.push_str(&format!("- **Timestamp**: {}\n", model.metadata.timestamp));
        output.push_str(&format!(
            "- **Serial number**: {}\n\n",
            model.metadata.serial_number
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Direct dependencies | {} |\n",
            summary.direct_count
        ));
        output.push_str(&format!(
            "| Transitive dependencies | {} |\n",
            summary.transitive_count
        ));
        output.push_str(&format!("| Total packages | {} |\n", summary.total_count));
        output.push_str(&format!(
            "| Pseudo-version packages | {} |\n",
            summary.pseudo_count
        ));
        output.push('\n');
    }

    fn render_graph(&self, output: &mut String, graph: &[DependencyView]) {
        output.push_str("## Dependency Graph\n\n");
        if graph.is_empty() {
            output.push_str("*No packages*\n\n");
            return;
        }

        for entry in graph {
            output.push_str(&format!("- {}\n", Self::inline_package(&entry.package)));
            for dependency in &entry.depends_on {
                output.push_str(&format!("  - {}\n", Self::inline_package(dependency)));
            }
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, model: &NormalizedReadModel) {
        output.push_str("## All Dependencies\n\n");
        if model.summary.pseudo_excluded {
            output.push_str(&format!(
                "Pseudo-version packages excluded ({} of {} listed).\n\n",
                model.summary.dependency_count, model.summary.total_count
            ));
        }
        Self::render_package_table(output, &model.dependencies, "No dependencies");
    }

    fn render_pseudo_versions(&self, output: &mut String, pseudo: &PseudoVersionView) {
        output.push_str("## Pseudo Versions\n\n");
        if pseudo.packages.is_empty() {
            output.push_str("*No pseudo-version packages*\n\n");
            return;
        }

        output.push_str("Modules referenced through a pseudo version:\n\n");
        for module in &pseudo.modules {
            output.push_str(&format!("- `{}`\n", Self::escape_inline_code(module)));
        }
        output.push('\n');
        Self::render_package_table(output, &pseudo.packages, "No pseudo-version packages");
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizedFormatter for MarkdownFormatter {
    fn format(&self, model: &NormalizedReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, &model.summary);

        output.push_str("## Direct Dependencies\n\n");
        Self::render_package_table(
            &mut output,
            &model.direct_dependencies,
            "No direct dependencies",
        );

        output.push_str("## Transitive Dependencies\n\n");
        Self::render_package_table(
            &mut output,
            &model.transitive_dependencies,
            "No transitive dependencies",
        );

        self.render_graph(&mut output, &model.dependency_graph);
        self.render_dependencies(&mut output, model);

        if let Some(pseudo) = &model.pseudo_versions {
            self.render_pseudo_versions(&mut output, pseudo);
        }

        Ok(output)
    }
}
