use async_trait::async_trait;

use rota_core::alert::Alert;
use rota_core::config::ScheduleConfig;
use rota_core::events::DomainEvent;
use rota_core::person::Person;

use crate::error::{NotifyError, SourceError};

/// Fetches a fresh schedule snapshot; called once per incoming alert, never
/// cached across resolutions.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch(&self) -> Result<ScheduleConfig, SourceError>;
}

/// Issue-tracker collaborator: makes the responsible people the assignees of
/// the ticket tracking this alert.
#[async_trait]
pub trait IssueAssigner: Send + Sync {
    async fn assign(&self, alert: &Alert, responders: &[Person]) -> Result<(), NotifyError>;
}

/// Chat collaborator: tells the responsible people about the alert.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn notify(&self, alert: &Alert, responders: &[Person]) -> Result<(), NotifyError>;
}

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, events: Vec<DomainEvent>) -> Result<(), NotifyError>;
}
