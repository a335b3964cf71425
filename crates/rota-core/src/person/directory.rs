use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::config::{ConfigIssue, ScheduleConfig};
use crate::names::PersonName;

use super::{Person, WeekdaySet};

/// People known to the schedule document, keyed by their configured name.
///
/// Names are unique ignoring case; a second spelling that differs only by
/// case is dropped with a diagnostic. Lookups stay exact.
#[derive(Debug, Clone, Default)]
pub struct PersonDirectory {
    people: BTreeMap<String, Person>,
}

impl PersonDirectory {
    pub fn from_config(config: &ScheduleConfig) -> (Self, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut people = BTreeMap::new();
        let mut seen = BTreeSet::new();

        for (name, raw) in &config.people {
            if !seen.insert(name.to_lowercase()) {
                issues.push(ConfigIssue::DuplicatePerson { name: name.clone() });
                continue;
            }

            let mut person = Person::new(PersonName::new(name));
            if let Some(login) = &raw.github {
                person.set_github(login);
            }
            if let Some(login) = &raw.slack {
                person.set_slack(login);
            }

            if let Some(days) = &raw.schedule {
                let mut set = WeekdaySet::empty();
                for day in days {
                    match day.parse() {
                        Ok(day) => set.insert(day),
                        Err(_) => issues.push(ConfigIssue::InvalidWeekday {
                            person: name.clone(),
                            value: day.clone(),
                        }),
                    }
                }
                person.set_days(set);
            }

            if let Some(raw_date) = &raw.override_until {
                match parse_override_date(raw_date) {
                    Some(date) => person.set_override_until(date),
                    // Treated as never overridden.
                    None => issues.push(ConfigIssue::InvalidOverrideDate {
                        person: name.clone(),
                        value: raw_date.clone(),
                    }),
                }
            }

            people.insert(name.clone(), person);
        }

        (Self { people }, issues)
    }

    pub fn get(&self, name: &str) -> Option<&Person> {
        self.people.get(name)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }
}

fn parse_override_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
