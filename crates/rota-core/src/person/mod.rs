pub mod directory;
pub mod weekdays;

use chrono::{Datelike, NaiveDate};

use crate::names::PersonName;

pub use directory::PersonDirectory;
pub use weekdays::WeekdaySet;

/// A schedule-aware identity. Availability is a pure function of the current
/// date, the weekly schedule and the override; it is recomputed on every
/// query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: PersonName,
    github: Option<String>,
    slack: Option<String>,
    days: WeekdaySet,
    override_until: Option<NaiveDate>,
}

impl Person {
    pub fn new(name: PersonName) -> Self {
        Self {
            name,
            github: None,
            slack: None,
            days: WeekdaySet::full(),
            override_until: None,
        }
    }

    pub fn set_github(&mut self, login: impl Into<String>) {
        self.github = Some(login.into());
    }

    pub fn set_slack(&mut self, login: impl Into<String>) {
        self.slack = Some(login.into());
    }

    pub fn set_days(&mut self, days: WeekdaySet) {
        self.days = days;
    }

    pub fn set_override_until(&mut self, until: NaiveDate) {
        self.override_until = Some(until);
    }

    /// On leave through `override_until`: the override holds while today is
    /// strictly before it.
    pub fn is_overridden(&self, today: NaiveDate) -> bool {
        match self.override_until {
            Some(until) => today < until,
            None => false,
        }
    }

    pub fn is_available(&self, today: NaiveDate) -> bool {
        self.days.contains(today.weekday()) && !self.is_overridden(today)
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    pub fn slack(&self) -> Option<&str> {
        self.slack.as_deref()
    }

    pub fn days(&self) -> WeekdaySet {
        self.days
    }

    pub fn override_until(&self) -> Option<NaiveDate> {
        self.override_until
    }
}
