use clap::Parser;
use dep_normalizer::application::dto::{NormalizeRequest, OutputFormat, ParsingMode};
use dep_normalizer::config::ConfigFile;
use dep_normalizer::normalization::domain::Ecosystem;
use std::path::PathBuf;

/// Normalize flat package lists into a duplicate-free dependency graph
#[derive(Parser, Debug)]
#[command(name = "dep-normalizer")]
#[command(version)]
#[command(
    about = "Normalize flat package lists into a duplicate-free dependency graph",
    long_about = None
)]
pub struct Args {
    /// Package list file (JSON, YAML or TOML)
    /// Can be specified multiple times; lists are concatenated in order
    #[arg(short, long = "input", value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Ecosystem of the packages: maven, npm, pypi or golang
    /// (falls back to the config file, then to the input file's `ecosystem` field)
    #[arg(short, long)]
    pub ecosystem: Option<Ecosystem>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Drop packages pinned to a pseudo version from the final dependency list
    #[arg(long)]
    pub exclude_pseudo: bool,

    /// Strip the `@module` suffix from top-level Go names only, without pseudo-version tracking
    #[arg(long)]
    pub legacy_module_parsing: bool,

    /// Path to a config file (defaults to ./dep-normalizer.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Options after merging the command line with the config file
#[derive(Debug)]
pub struct RunSettings {
    pub request: NormalizeRequest,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Args {
    /// Command-line values win over config values; flags only ever switch a
    /// behavior on, so a `true` from either source enables it.
    pub fn into_settings(self, config: Option<ConfigFile>) -> RunSettings {
        let config = config.unwrap_or_default();

        let legacy = self.legacy_module_parsing || config.legacy_module_parsing.unwrap_or(false);
        let parsing_mode = if legacy {
            ParsingMode::Legacy
        } else {
            ParsingMode::ModuleAware
        };

        let request = NormalizeRequest::new(
            self.inputs,
            self.ecosystem.or(config.ecosystem),
            parsing_mode,
            self.exclude_pseudo || config.exclude_pseudo.unwrap_or(false),
        );

        RunSettings {
            request,
            format: self.format.or(config.format).unwrap_or_default(),
            output: self.output,
        }
    }
}
