use rota_ports::error::{NotifyError, SourceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("schedule source error: {0}")]
    Source(#[from] SourceError),
    #[error("event publish error: {0}")]
    Publish(#[from] NotifyError),
}
