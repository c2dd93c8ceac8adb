use crate::application::dto::LookupSummary;
use crate::package_lookup::domain::{PackageIdentifier, ResolvedPackage};
use crate::package_lookup::services::ReportAssembler;
use crate::ports::outbound::{
    MetadataRepository, OutputPresenter, ProgressReporter, VulnerabilityRepository,
};
use crate::shared::{ResolutionResult, Result};
use futures::stream::{self, Stream, StreamExt};
use std::fmt;

/// Service a resolution failure came from, used in warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupSource {
    Registry,
    Advisory,
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupSource::Registry => write!(f, "registry"),
            LookupSource::Advisory => write!(f, "advisory"),
        }
    }
}

/// FindPackagesUseCase - Core use case driving the lookup pipeline
///
/// For every identifier the registry and the advisory service are queried
/// independently, and the outcome is handed to the `ReportAssembler`.
/// Identifiers are processed one at a time, in input order; a failed lookup
/// only empties the corresponding half of that identifier's report.
///
/// # Type Parameters
/// * `MR` - MetadataRepository implementation
/// * `VR` - VulnerabilityRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct FindPackagesUseCase<MR, VR, PR> {
    metadata_repository: MR,
    vulnerability_repository: VR,
    progress_reporter: PR,
    assembler: ReportAssembler,
}

impl<MR, VR, PR> FindPackagesUseCase<MR, VR, PR>
where
    MR: MetadataRepository,
    VR: VulnerabilityRepository,
    PR: ProgressReporter,
{
    /// Creates a new FindPackagesUseCase with injected dependencies
    pub fn new(
        metadata_repository: MR,
        vulnerability_repository: VR,
        progress_reporter: PR,
        assembler: ReportAssembler,
    ) -> Self {
        Self {
            metadata_repository,
            vulnerability_repository,
            progress_reporter,
            assembler,
        }
    }

    /// Resolves one raw token against both services
    ///
    /// The registry lookup uses the parsed identifier, the advisory query
    /// the raw token. Both run concurrently. Failures are reported as
    /// warnings and turned into absent results.
    pub async fn resolve_package(&self, token: &str) -> ResolvedPackage {
        let identifier = PackageIdentifier::parse(token);

        let (metadata, vulnerabilities) = tokio::join!(
            self.metadata_repository.fetch_metadata(&identifier),
            self.vulnerability_repository.fetch_vulnerabilities(token),
        );

        let metadata = self.absent_on_failure(token, LookupSource::Registry, metadata);
        let vulnerabilities = self.absent_on_failure(token, LookupSource::Advisory, vulnerabilities);

        ResolvedPackage::new(token.to_string(), identifier, metadata, vulnerabilities)
    }

    /// Lazily resolves every token, one at a time, in input order
    ///
    /// Nothing is fetched until the stream is polled; each item is yielded
    /// as soon as its identifier is resolved.
    pub fn resolve_all<'a>(
        &'a self,
        tokens: &'a [String],
    ) -> impl Stream<Item = ResolvedPackage> + 'a {
        let total = tokens.len();

        stream::iter(tokens.iter().enumerate()).then(move |(index, token)| async move {
            self.progress_reporter
                .report_progress(index, total, Some(token.as_str()));
            let resolved = self.resolve_package(token).await;
            self.progress_reporter
                .report_progress(index + 1, total, Some(token.as_str()));
            resolved
        })
    }

    /// Lazily produces one text report per token, in input order
    pub fn run<'a>(&'a self, tokens: &'a [String]) -> impl Stream<Item = String> + 'a {
        self.resolve_all(tokens)
            .map(move |resolved| self.assembler.assemble(&resolved))
    }

    /// Assembles the report for `package` and hands it to `presenter`
    ///
    /// The write happens with the progress display suspended.
    pub fn present(
        &self,
        presenter: &dyn OutputPresenter,
        package: &ResolvedPackage,
    ) -> Result<()> {
        let report = self.assembler.assemble(package);
        let mut outcome = Ok(());
        self.progress_reporter
            .suspend(&mut || outcome = presenter.present(&report));
        outcome
    }

    /// Computes run totals and reports them as the completion message
    pub fn summarize(&self, packages: &[ResolvedPackage]) -> LookupSummary {
        let summary = LookupSummary::from_packages(packages);
        self.report_summary(&summary);
        summary
    }

    /// Reports the completion message for an already computed summary
    pub fn report_summary(&self, summary: &LookupSummary) {
        self.progress_reporter
            .report_completion(&format!("✅ {}", summary));
    }

    fn absent_on_failure<T>(
        &self,
        token: &str,
        source: LookupSource,
        result: ResolutionResult<T>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} lookup for '{}' failed ({}): {}",
                    source,
                    token,
                    error.kind(),
                    error
                ));
                None
            }
        }
    }
}
