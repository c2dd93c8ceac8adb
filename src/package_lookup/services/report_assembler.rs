use crate::package_lookup::domain::{
    DeprecationRecord, MetadataRecord, ResolvedPackage, VulnerabilityRecord,
};
use chrono::{DateTime, FixedOffset};

/// Placeholder printed for any absent value
pub const NOT_AVAILABLE: &str = "N/A";

/// Which metadata fields a report lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLayout {
    /// Identifier, authors, copyright, timestamps, version, license URL, deprecation
    #[default]
    Standard,
    /// Standard fields followed by the extended catalog attributes
    Extended,
}

enum FieldValue {
    Scalar(fn(&MetadataRecord) -> Option<String>),
    Deprecation,
}

struct MetadataField {
    label: &'static str,
    value: FieldValue,
}

const STANDARD_FIELDS: &[MetadataField] = &[
    MetadataField {
        label: "Id",
        value: FieldValue::Scalar(|r| r.id.clone()),
    },
    MetadataField {
        label: "Authors",
        value: FieldValue::Scalar(|r| r.authors.clone()),
    },
    MetadataField {
        label: "Copyright",
        value: FieldValue::Scalar(|r| r.copyright.clone()),
    },
    MetadataField {
        label: "Created",
        value: FieldValue::Scalar(|r| r.created.as_ref().map(format_timestamp)),
    },
    MetadataField {
        label: "Version",
        value: FieldValue::Scalar(|r| r.version.clone()),
    },
    MetadataField {
        label: "LastEdited",
        value: FieldValue::Scalar(|r| r.last_edited.as_ref().map(format_timestamp)),
    },
    MetadataField {
        label: "LicenseUrl",
        value: FieldValue::Scalar(|r| r.license_url.clone()),
    },
    MetadataField {
        label: "Deprecation",
        value: FieldValue::Deprecation,
    },
];

const EXTENDED_FIELDS: &[MetadataField] = &[
    MetadataField {
        label: "Description",
        value: FieldValue::Scalar(|r| r.description.clone()),
    },
    MetadataField {
        label: "IconUrl",
        value: FieldValue::Scalar(|r| r.icon_url.clone()),
    },
    MetadataField {
        label: "IsPrerelease",
        value: FieldValue::Scalar(|r| r.is_prerelease.map(|v| v.to_string())),
    },
    MetadataField {
        label: "PackageHash",
        value: FieldValue::Scalar(|r| r.package_hash.clone()),
    },
    MetadataField {
        label: "PackageHashAlgorithm",
        value: FieldValue::Scalar(|r| r.package_hash_algorithm.clone()),
    },
    MetadataField {
        label: "PackageSize",
        value: FieldValue::Scalar(|r| r.package_size.map(|v| v.to_string())),
    },
    MetadataField {
        label: "ProjectUrl",
        value: FieldValue::Scalar(|r| r.project_url.clone()),
    },
    MetadataField {
        label: "Published",
        value: FieldValue::Scalar(|r| r.published.as_ref().map(format_timestamp)),
    },
    MetadataField {
        label: "Repository",
        value: FieldValue::Scalar(|r| r.repository.clone()),
    },
    MetadataField {
        label: "RequireLicenseAcceptance",
        value: FieldValue::Scalar(|r| r.require_license_acceptance.map(|v| v.to_string())),
    },
    MetadataField {
        label: "Serviceable",
        value: FieldValue::Scalar(|r| r.serviceable.map(|v| v.to_string())),
    },
    MetadataField {
        label: "VerbatimVersion",
        value: FieldValue::Scalar(|r| r.verbatim_version.clone()),
    },
];

fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.to_rfc3339()
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// ReportAssembler renders one resolved package as a text block
///
/// Output is deterministic: fields are listed in table order and every
/// absent value is printed as `N/A`. Absent and empty vulnerability lists
/// both print `Vulnerabilities: 0`; entries are listed only for a positive
/// count, in the order the advisory service returned them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportAssembler {
    layout: ReportLayout,
}

impl ReportAssembler {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    /// Renders the report block. Every line, including the last, ends with `\n`.
    pub fn assemble(&self, package: &ResolvedPackage) -> String {
        let mut output = String::new();
        output.push_str(&format!("Package: {}\n", package.token()));

        self.render_metadata(&mut output, package.metadata());
        Self::render_vulnerabilities(&mut output, package.vulnerabilities());

        output
    }

    fn fields(&self) -> impl Iterator<Item = &'static MetadataField> {
        let extended: &'static [MetadataField] = match self.layout {
            ReportLayout::Standard => &[],
            ReportLayout::Extended => EXTENDED_FIELDS,
        };
        STANDARD_FIELDS.iter().chain(extended.iter())
    }

    fn render_metadata(&self, output: &mut String, metadata: Option<&MetadataRecord>) {
        for field in self.fields() {
            match field.value {
                FieldValue::Scalar(accessor) => {
                    let value = metadata.and_then(accessor);
                    output.push_str(&format!("{}: {}\n", field.label, or_na(value.as_deref())));
                }
                FieldValue::Deprecation => {
                    let deprecation = metadata.and_then(|m| m.deprecation.as_ref());
                    Self::render_deprecation(output, field.label, deprecation);
                }
            }
        }
    }

    fn render_deprecation(
        output: &mut String,
        label: &str,
        deprecation: Option<&DeprecationRecord>,
    ) {
        let Some(deprecation) = deprecation else {
            output.push_str(&format!("{}: {}\n", label, NOT_AVAILABLE));
            return;
        };

        let reasons = match &deprecation.reasons {
            Some(reasons) => reasons.join(", "),
            None => NOT_AVAILABLE.to_string(),
        };

        output.push_str(&format!("{}:\n", label));
        output.push_str(&format!(" - Id: {}\n", or_na(deprecation.id.as_deref())));
        output.push_str(&format!(
            " - Message: {}\n",
            or_na(deprecation.message.as_deref())
        ));
        output.push_str(&format!(" - Reasons: {}\n", reasons));
    }

    fn render_vulnerabilities(output: &mut String, vulnerabilities: Option<&[VulnerabilityRecord]>) {
        let vulnerabilities = vulnerabilities.unwrap_or_default();
        output.push_str(&format!("Vulnerabilities: {}\n", vulnerabilities.len()));

        for (index, vulnerability) in vulnerabilities.iter().enumerate() {
            output.push_str(&format!("Vulnerability #{}:\n", index + 1));
            output.push_str(&format!(
                " - Title: {}\n",
                or_na(vulnerability.title.as_deref())
            ));
            output.push_str(&format!(
                " - Description: {}\n",
                or_na(vulnerability.description.as_deref())
            ));
            output.push_str(&format!(
                " - Reference: {}\n",
                or_na(vulnerability.reference.as_deref())
            ));
        }
    }
}
