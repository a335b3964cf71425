use chrono::{DateTime, Utc};
use tracing::warn;

use rota_core::alert::{Alert, Severity};
use rota_core::events::{AlertReceived, ConfigDegraded, DomainEvent, RespondersResolved};
use rota_core::resolver::{Resolution, Resolver};
use rota_ports::outbound::{ChatNotifier, EventPublisher, IssueAssigner, ScheduleSource};
use rota_ports::types::RawAlert;

use crate::error::AppError;

/// Orchestrates one alert: fetch a fresh schedule snapshot, resolve the
/// responsible people, then hand them to the issue-tracker and chat
/// collaborators.
pub struct AlertService<S, I, N, EP>
where
    S: ScheduleSource,
    I: IssueAssigner,
    N: ChatNotifier,
    EP: EventPublisher,
{
    source: S,
    tracker: I,
    chat: N,
    events: EP,
    resolver: Resolver,
}

impl<S, I, N, EP> AlertService<S, I, N, EP>
where
    S: ScheduleSource,
    I: IssueAssigner,
    N: ChatNotifier,
    EP: EventPublisher,
{
    pub fn new(source: S, tracker: I, chat: N, events: EP) -> Self {
        Self {
            source,
            tracker,
            chat,
            events,
            resolver: Resolver::new(),
        }
    }

    pub async fn receive(&self, raw: RawAlert, now: DateTime<Utc>) -> Result<Resolution, AppError> {
        let alert = Alert::new(raw.id, Severity::parse(&raw.level), raw.message, raw.details);

        self.events
            .publish(vec![DomainEvent::AlertReceived(AlertReceived {
                alert_id: alert.id().to_string(),
                severity: alert.severity(),
                occurred_at: now,
            })])
            .await?;

        // One fresh snapshot per alert.
        let config = self.source.fetch().await?;
        let resolution = self.resolver.resolve(&config, alert.id(), now.date_naive());

        for issue in &resolution.issues {
            warn!(alert_id = alert.id(), %issue, "schedule configuration defect");
        }
        if !resolution.issues.is_empty() {
            self.events
                .publish(vec![DomainEvent::ConfigDegraded(ConfigDegraded {
                    alert_id: alert.id().to_string(),
                    issues: resolution.issues.iter().map(ToString::to_string).collect(),
                    occurred_at: now,
                })])
                .await?;
        }

        self.events
            .publish(vec![DomainEvent::RespondersResolved(RespondersResolved {
                alert_id: alert.id().to_string(),
                chains: resolution.chains.clone(),
                people: resolution
                    .responders
                    .names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
                occurred_at: now,
            })])
            .await?;

        // Collaborators are best effort: a failing tracker must not block the
        // chat notification, and neither failure aborts the resolution.
        let responders = resolution.responders.people();
        if let Err(err) = self.tracker.assign(&alert, responders).await {
            warn!(alert_id = alert.id(), error = %err, "issue assignment failed");
        }
        if let Err(err) = self.chat.notify(&alert, responders).await {
            warn!(alert_id = alert.id(), error = %err, "chat notification failed");
        }

        Ok(resolution)
    }
}
