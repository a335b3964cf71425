use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schedule document as fetched from its external source. One snapshot per
/// resolution, immutable after the fetch, never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub people: BTreeMap<String, RawPerson>,
    #[serde(default)]
    pub escalation_chains: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub device_services: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub default_chain: Vec<String>,
}

/// Person attributes as written in the document, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPerson {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub slack: Option<String>,
    /// Weekday names; absent means on call every day.
    #[serde(default)]
    pub schedule: Option<Vec<String>>,
    /// Date (or timestamp) the person is on leave until.
    #[serde(default)]
    pub override_until: Option<String>,
}

/// A configuration defect the resolver worked around. None of these abort a
/// resolution; they are returned with the result so the caller can log them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("unknown name {name:?} in escalation chain {chain:?}")]
    UnknownName { chain: String, name: String },
    #[error("malformed entry token {token:?} in escalation chain {chain:?}")]
    MalformedToken { chain: String, token: String },
    #[error("unparseable override date {value:?} for {person}")]
    InvalidOverrideDate { person: String, value: String },
    #[error("unknown weekday {value:?} in schedule for {person}")]
    InvalidWeekday { person: String, value: String },
    #[error("duplicate person name {name:?} (names are unique ignoring case)")]
    DuplicatePerson { name: String },
    #[error("cyclic escalation chain: {chain}")]
    CyclicChain { chain: String },
}
