use thiserror::Error;

/// The schedule snapshot could not be obtained. This is the one condition
/// that prevents a resolution from starting.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("schedule source unavailable: {0}")]
    Unavailable(String),
    #[error("schedule document malformed: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("delivery failed: {0}")]
    DeliveryFailed(String),
}
