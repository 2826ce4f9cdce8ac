mod cli;

use cli::Args;
use license_fulfill::adapters::outbound::console::StderrProgressReporter;
use license_fulfill::adapters::outbound::inventory::JsonInventoryReader;
use license_fulfill::adapters::outbound::spdx::{SpdxEvaluator, SpdxLicenseTexts};
use license_fulfill::application::dto::{FulfillRequest, OutputFormat};
use license_fulfill::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use license_fulfill::application::use_cases::FulfillLicensesUseCase;
use license_fulfill::config::{self, ConfigFile, StartPaths, CONFIG_FILENAME};
use license_fulfill::shared::error::ExitCode;
use license_fulfill::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?.unwrap_or_default();

    let format = args
        .format
        .or(config.output_format()?)
        .unwrap_or(OutputFormat::Json);
    let request = build_request(&args, &config)?;

    // Create adapters (Dependency Injection)
    let license_texts =
        SpdxLicenseTexts::with_custom_texts(config.license_texts.clone().unwrap_or_default());
    let use_case = FulfillLicensesUseCase::new(
        JsonInventoryReader::new(),
        SpdxEvaluator::new(),
        license_texts,
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(&request).await?;

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted_output = FormatterFactory::create(format).format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if args.check && response.has_violations() {
        eprintln!(
            "{}",
            format!(
                "🚫 {} fulfillment(s) do not satisfy the license policy.",
                response.summary.rejected_fulfillments
            )
            .red()
        );
        return Ok(ExitCode::PolicyViolations);
    }

    Ok(ExitCode::Success)
}

/// Loads the explicit config file, or auto-discovers one in the working directory
fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        let config = config::load_config_from_path(path)?;
        eprintln!("📝 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let discovered = config::discover_config(Path::new("."))?;
    if discovered.is_some() {
        eprintln!("📝 Auto-discovered config file: {}", CONFIG_FILENAME);
    }
    Ok(discovered)
}

/// Merges CLI arguments over the config file into a validated request
///
/// Command-line paths replace configured ones; `--production` can only
/// switch production mode on.
fn build_request(args: &Args, config: &ConfigFile) -> Result<FulfillRequest> {
    let start_paths = if !args.path.is_empty() {
        args.path.clone()
    } else {
        config
            .start_path
            .clone()
            .map(StartPaths::into_vec)
            .unwrap_or_else(|| vec![PathBuf::from(".")])
    };

    let mut builder = FulfillRequest::builder()
        .start_paths(start_paths)
        .production(args.production || config.production.unwrap_or(false))
        .overrides(config.overrides.clone().unwrap_or_default())
        .agreed_licenses(config.agreed_licenses.clone().unwrap_or_default())
        .ignore_packages(config.ignore_packages.clone().unwrap_or_default());

    if let Some(ref unknown) = config.unknown {
        builder = builder.unknown(unknown.clone());
    }
    if let Some(ref custom_format) = config.custom_format {
        builder = builder.custom_format(custom_format.clone());
    }
    if let Some(ref files) = config.acceptable_license_files {
        builder = builder.acceptable_license_files(files.clone());
    }

    builder.build()
}
