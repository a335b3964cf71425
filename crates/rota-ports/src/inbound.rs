use async_trait::async_trait;
use chrono::{DateTime, Utc};

use rota_core::resolver::Resolution;

use crate::error::SourceError;
use crate::types::RawAlert;

/// Driving port for whatever transport delivers alerts (TCP listener,
/// webhook, ...). The transport itself is out of scope.
#[async_trait]
pub trait AlertReceiver: Send + Sync {
    async fn receive(&self, raw: RawAlert, now: DateTime<Utc>) -> Result<Resolution, SourceError>;
}
