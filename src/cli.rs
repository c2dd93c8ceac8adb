use clap::Parser;
use package_finder::config::ConfigFile;
use std::path::PathBuf;

/// Resolve registry metadata and known vulnerabilities for package identifiers
#[derive(Parser, Debug)]
#[command(name = "package-finder")]
#[command(version)]
#[command(
    about = "Resolve registry metadata and known vulnerabilities for name@version package identifiers",
    long_about = None
)]
pub struct Args {
    /// Input file with one name@version identifier per line
    #[arg(value_name = "INPUT", default_value = "packages.txt")]
    pub input: PathBuf,

    /// Path to a config file (defaults to package-finder.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the package registry
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Base URL of the vulnerability advisory service
    #[arg(long, value_name = "URL")]
    pub advisory_url: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Include the extended metadata fields in each report
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when any vulnerability is found
    #[arg(long)]
    pub fail_on_vulnerabilities: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values given on the command line, in config file form
    ///
    /// Flags that were not passed are `None` so they do not mask the file.
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            registry_url: self.registry_url.clone(),
            advisory_url: self.advisory_url.clone(),
            timeout_secs: self.timeout,
            extended: self.extended.then_some(true),
            fail_on_vulnerabilities: self.fail_on_vulnerabilities.then_some(true),
            ..ConfigFile::default()
        }
    }
}
