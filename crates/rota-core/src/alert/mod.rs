pub mod severity;

pub use severity::Severity;

/// An inbound monitoring event: identifier, level, message, optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    id: String,
    severity: Severity,
    summary: String,
    details: Option<String>,
}

impl Alert {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        summary: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            summary: summary.into(),
            details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Title used by collaborators when they need a single line for this
    /// alert (ticket titles, chat headers).
    pub fn full_title(&self) -> String {
        format!("[{}] {}", self.severity.as_str(), self.id)
    }
}
