use crate::package_lookup::domain::ResolvedPackage;
use std::fmt;

/// LookupSummary - Totals over one lookup run
///
/// Used for the completion message and to decide the exit code when
/// `--fail-on-vulnerabilities` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSummary {
    /// Identifiers processed
    pub packages: usize,
    /// Identifiers whose registry lookup succeeded
    pub metadata_resolved: usize,
    /// Identifiers whose advisory query succeeded (including empty results)
    pub advisories_resolved: usize,
    /// Identifiers with at least one known vulnerability
    pub vulnerable_packages: usize,
    /// Vulnerabilities found across all identifiers
    pub vulnerabilities_found: usize,
}

impl LookupSummary {
    pub fn from_packages(packages: &[ResolvedPackage]) -> Self {
        let mut summary = Self::default();
        for package in packages {
            summary.record(package);
        }
        summary
    }

    /// Adds one resolved package to the totals
    pub fn record(&mut self, package: &ResolvedPackage) {
        self.packages += 1;
        if package.metadata().is_some() {
            self.metadata_resolved += 1;
        }
        if package.vulnerabilities().is_some() {
            self.advisories_resolved += 1;
        }
        if package.has_vulnerabilities() {
            self.vulnerable_packages += 1;
            self.vulnerabilities_found += package.vulnerability_count();
        }
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerabilities_found > 0
    }
}

impl fmt::Display for LookupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Looked up {} package(s): metadata resolved for {}, advisories resolved for {}, {} vulnerability(ies) in {} package(s)",
            self.packages,
            self.metadata_resolved,
            self.advisories_resolved,
            self.vulnerabilities_found,
            self.vulnerable_packages
        )
    }
}
