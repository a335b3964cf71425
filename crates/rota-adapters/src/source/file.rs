use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use rota_core::config::ScheduleConfig;
use rota_ports::error::SourceError;
use rota_ports::outbound::ScheduleSource;

/// Reads the schedule document from a local file. The document is re-read on
/// every fetch so edits take effect on the next alert.
pub struct FileScheduleSource {
    path: PathBuf,
}

impl FileScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleSource for FileScheduleSource {
    async fn fetch(&self) -> Result<ScheduleConfig, SourceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| SourceError::Malformed(e.to_string()))?;
        debug!(path = %self.path.display(), "loaded schedule document");
        Ok(config)
    }
}
