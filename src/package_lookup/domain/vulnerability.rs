/// A known vulnerability reported by the advisory service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VulnerabilityRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reference: Option<String>,
}

impl VulnerabilityRecord {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        reference: Option<String>,
    ) -> Self {
        Self {
            title,
            description,
            reference,
        }
    }
}
