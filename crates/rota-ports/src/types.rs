use serde::Deserialize;

/// Alert payload as posted by the monitoring pipeline, before domain
/// validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlert {
    pub id: String,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}
