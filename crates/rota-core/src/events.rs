use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::alert::Severity;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DomainEvent {
    AlertReceived(AlertReceived),
    RespondersResolved(RespondersResolved),
    ConfigDegraded(ConfigDegraded),
}

impl DomainEvent {
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::AlertReceived(e) => e.occurred_at,
            Self::RespondersResolved(e) => e.occurred_at,
            Self::ConfigDegraded(e) => e.occurred_at,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            Self::AlertReceived(_) => "alert.received",
            Self::RespondersResolved(_) => "alert.responders_resolved",
            Self::ConfigDegraded(_) => "schedule.config_degraded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertReceived {
    pub alert_id: String,
    pub severity: Severity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespondersResolved {
    pub alert_id: String,
    pub chains: Vec<String>,
    pub people: Vec<String>,
    pub occurred_at: DateTime<Utc>,
}

/// The resolution went through, but only by dropping defective configuration
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDegraded {
    pub alert_id: String,
    pub issues: Vec<String>,
    pub occurred_at: DateTime<Utc>,
}
