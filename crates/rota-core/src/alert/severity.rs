use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Ok,
    Info,
}

impl Severity {
    /// Lenient parse of a monitoring level string. Levels arrive in whatever
    /// casing the pipeline emits ("CRITICAL", "warn", "OK"); anything
    /// unrecognized is informational.
    pub fn parse(level: &str) -> Self {
        let level = level.to_lowercase();
        if level.contains("crit") {
            Self::Critical
        } else if level.contains("warn") {
            Self::Warning
        } else if level.contains("ok") {
            Self::Ok
        } else {
            Self::Info
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Ok => "ok",
            Self::Info => "info",
        }
    }
}
