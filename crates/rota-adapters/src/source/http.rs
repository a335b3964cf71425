use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use rota_core::config::ScheduleConfig;
use rota_ports::error::SourceError;
use rota_ports::outbound::ScheduleSource;

/// Fetches the schedule document from a remote URL, fresh on every call.
/// Timeouts belong here, on the fetch step, not in the resolver.
pub struct HttpScheduleSource {
    client: reqwest::Client,
    url: String,
}

impl HttpScheduleSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn fetch(&self) -> Result<ScheduleConfig, SourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let config = response.json::<ScheduleConfig>().await.map_err(|e| {
            if e.is_decode() {
                SourceError::Malformed(e.to_string())
            } else {
                SourceError::Unavailable(e.to_string())
            }
        })?;
        debug!(url = %self.url, "fetched schedule document");
        Ok(config)
    }
}
