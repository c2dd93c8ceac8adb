mod cli;

use cli::Args;
use futures::StreamExt;
use package_finder::adapters::outbound::console::StderrProgressReporter;
use package_finder::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use package_finder::adapters::outbound::network::{
    JsonHttpClient, NuGetRegistryClient, OssIndexClient,
};
use package_finder::application::use_cases::FindPackagesUseCase;
use package_finder::config::{discover_config, load_config_from_path, Settings};
use package_finder::package_lookup::services::ReportAssembler;
use package_finder::ports::outbound::{OutputPresenter, PackageListReader, ProgressReporter};
use package_finder::shared::error::ExitCode;
use package_finder::shared::Result;
use std::path::Path;
use std::pin::pin;
use std::process;

#[tokio::main]
async fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let progress_reporter = StderrProgressReporter::new();

    // Load config: explicit path must exist, otherwise auto-discover
    let file_config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    if let Some(config) = &file_config {
        for warning in config.unknown_field_warnings() {
            progress_reporter.report_error(&warning);
        }
    }
    let settings = Settings::merge(args.overrides(), file_config);

    // Read identifiers
    let tokens = FileSystemReader::new().read_package_list(&args.input)?;
    progress_reporter.report(&format!(
        "📖 Loaded {} package identifier(s) from: {}",
        tokens.len(),
        args.input.display()
    ));

    // Create adapters (Dependency Injection); both resolvers share one client
    let http = JsonHttpClient::new(settings.timeout)?;
    let registry = NuGetRegistryClient::new(http.clone(), &settings.registry_url)?;
    let advisory = OssIndexClient::new(http, &settings.advisory_url)?;

    let presenter: Box<dyn OutputPresenter> = match &args.output {
        Some(output_path) => {
            progress_reporter.report(&format!(
                "📝 Writing reports to: {}",
                output_path.display()
            ));
            Box::new(FileSystemWriter::create(output_path.clone())?)
        }
        None => Box::new(StdoutPresenter::new()),
    };

    let use_case = FindPackagesUseCase::new(
        registry,
        advisory,
        progress_reporter,
        ReportAssembler::new(settings.layout),
    );

    // Present each report as soon as its identifier is resolved
    let mut resolved_packages = Vec::with_capacity(tokens.len());
    let mut resolved_stream = pin!(use_case.resolve_all(&tokens));
    while let Some(resolved) = resolved_stream.next().await {
        use_case.present(presenter.as_ref(), &resolved)?;
        resolved_packages.push(resolved);
    }

    let summary = use_case.summarize(&resolved_packages);

    if settings.fail_on_vulnerabilities && summary.has_vulnerabilities() {
        Ok(ExitCode::VulnerabilitiesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}
