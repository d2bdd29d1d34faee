mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use dep_normalizer::adapters::outbound::console::StderrProgressReporter;
use dep_normalizer::adapters::outbound::filesystem::FileSystemReader;
use dep_normalizer::adapters::outbound::golang::{GoPseudoVersionClassifier, GoVersionCleaner};
use dep_normalizer::application::factories::{FormatterFactory, PresenterFactory};
use dep_normalizer::application::use_cases::NormalizePackagesUseCase;
use dep_normalizer::config::{self, ConfigFile};
use dep_normalizer::shared::error::ExitCode;
use dep_normalizer::shared::Result;
use std::process;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // Printing can only fail if stderr is gone
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = args.into_settings(config);

    // Create adapters (Dependency Injection)
    let use_case = NormalizePackagesUseCase::new(
        FileSystemReader::new(),
        StderrProgressReporter::new(),
        GoVersionCleaner::new(),
        GoPseudoVersionClassifier::new(),
    );

    let response = use_case.execute(settings.request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.read_model())?;

    let presenter = PresenterFactory::create(settings.output);
    presenter.present(&formatted_output)?;

    Ok(())
}

/// An explicit `--config` must exist; the implicit one is optional
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}
