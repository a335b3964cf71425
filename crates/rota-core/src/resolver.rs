use chrono::NaiveDate;

use crate::config::{ConfigIssue, ScheduleConfig};
use crate::error::DomainError;
use crate::escalation::{ChainBuilder, EscalationChain, ResponderSet};
use crate::person::PersonDirectory;

/// Outcome of one resolution: who to notify, which chains matched, and every
/// configuration defect that was worked around along the way.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub responders: ResponderSet,
    pub chains: Vec<String>,
    pub issues: Vec<ConfigIssue>,
}

/// Composition root. Builds people and chains fresh from a config snapshot
/// and resolves the responsible set for one alert id; holds no state between
/// calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver;

impl Resolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(
        &self,
        config: &ScheduleConfig,
        alert_id: &str,
        today: NaiveDate,
    ) -> Resolution {
        let (people, mut issues) = PersonDirectory::from_config(config);
        let mut builder = ChainBuilder::new(&people, &config.escalation_chains);

        // Every device key that occurs in the alert id contributes its chain;
        // matching is unanchored and ignores case.
        let mut matched: Vec<EscalationChain> = Vec::new();
        let mut any_device_hit = false;
        let alert_folded = alert_id.to_lowercase();
        for (device, raw_chain) in &config.device_services {
            if alert_folded.contains(&device.to_lowercase()) {
                any_device_hit = true;
                match builder.build(device, raw_chain) {
                    Ok(chain) => matched.push(chain),
                    Err(DomainError::CyclicEscalationChain(chain)) => {
                        issues.push(ConfigIssue::CyclicChain { chain })
                    }
                }
            }
        }

        // The default chain only covers alerts no device key claimed.
        if !any_device_hit {
            let name = format!("DEFAULT-{alert_id}");
            match builder.build(&name, &config.default_chain) {
                Ok(chain) => matched.push(chain),
                Err(DomainError::CyclicEscalationChain(chain)) => {
                    issues.push(ConfigIssue::CyclicChain { chain })
                }
            }
        }

        let mut responders = ResponderSet::new();
        for chain in &matched {
            responders.merge(chain.responsible_people(today));
        }
        issues.extend(builder.take_issues());

        Resolution {
            responders,
            chains: matched.iter().map(|c| c.name().to_string()).collect(),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::config::RawPerson;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    fn person() -> RawPerson {
        RawPerson::default()
    }

    fn off_duty() -> RawPerson {
        RawPerson {
            schedule: Some(vec![]),
            ..RawPerson::default()
        }
    }

    fn map<V>(entries: Vec<(&str, V)>) -> BTreeMap<String, V> {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn tokens(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn all_matching_device_chains_are_unioned() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person()), ("bob", person())]),
            device_services: map(vec![
                ("GC05", tokens(&["alice"])),
                ("camera", tokens(&["bob"])),
                ("GC11", tokens(&["alice"])),
            ]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "GC05-camera-temp", today());
        assert_eq!(resolution.responders.names(), vec!["alice", "bob"]);
        assert_eq!(resolution.chains, vec!["GC05", "camera"]);
        assert!(resolution.issues.is_empty());
    }

    #[test]
    fn device_matching_ignores_case() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person())]),
            device_services: map(vec![("gc05", tokens(&["alice"]))]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "GC05-temp", today());
        assert_eq!(resolution.responders.names(), vec!["alice"]);
    }

    #[test]
    fn unmatched_alert_falls_back_to_the_default_chain() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person())]),
            device_services: map(vec![("GC05", tokens(&["alice"]))]),
            default_chain: tokens(&["alice"]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "unrelated-host", today());
        assert_eq!(resolution.responders.names(), vec!["alice"]);
        assert_eq!(resolution.chains, vec!["DEFAULT-unrelated-host"]);
    }

    #[test]
    fn default_chain_with_unavailable_soft_entry_yields_nobody() {
        let config = ScheduleConfig {
            people: map(vec![("alice", off_duty())]),
            default_chain: tokens(&["alice"]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "x", today());
        assert!(resolution.responders.is_empty());
    }

    #[test]
    fn empty_default_chain_resolves_to_empty_set_without_issues() {
        let config = ScheduleConfig::default();
        let resolution = Resolver::new().resolve(&config, "x", today());
        assert!(resolution.responders.is_empty());
        assert!(resolution.issues.is_empty());
    }

    #[test]
    fn resolution_is_idempotent() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person()), ("bob", off_duty())]),
            escalation_chains: map(vec![("floor", tokens(&["bob", "alice"]))]),
            device_services: map(vec![("GC05", tokens(&["floor", "ghost"]))]),
            ..ScheduleConfig::default()
        };

        let resolver = Resolver::new();
        let first = resolver.resolve(&config, "GC05-temp", today());
        let second = resolver.resolve(&config, "GC05-temp", today());
        assert_eq!(first.responders, second.responders);
        assert_eq!(first.chains, second.chains);
        assert_eq!(first.issues, second.issues);
    }

    #[test]
    fn cyclic_chain_is_confined_to_the_chain_that_references_it() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person())]),
            escalation_chains: map(vec![("a", tokens(&["b"])), ("b", tokens(&["a"]))]),
            device_services: map(vec![
                ("GC05", tokens(&["a"])),
                ("camera", tokens(&["alice"])),
            ]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "GC05-camera", today());
        // The healthy chain still resolves.
        assert_eq!(resolution.responders.names(), vec!["alice"]);
        assert!(resolution
            .issues
            .contains(&ConfigIssue::CyclicChain { chain: "a".into() }));
    }

    #[test]
    fn matched_but_broken_device_chain_does_not_fall_back_to_default() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person())]),
            escalation_chains: map(vec![("a", tokens(&["a"]))]),
            device_services: map(vec![("GC05", tokens(&["a"]))]),
            default_chain: tokens(&["alice"]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "GC05-temp", today());
        assert!(resolution.responders.is_empty());
        assert_eq!(
            resolution.issues,
            vec![ConfigIssue::CyclicChain { chain: "a".into() }]
        );
    }

    #[test]
    fn unknown_entries_surface_as_issues_but_do_not_block_resolution() {
        let config = ScheduleConfig {
            people: map(vec![("alice", person())]),
            device_services: map(vec![("GC05", tokens(&["ghost", "alice"]))]),
            ..ScheduleConfig::default()
        };

        let resolution = Resolver::new().resolve(&config, "GC05", today());
        assert_eq!(resolution.responders.names(), vec!["alice"]);
        assert_eq!(
            resolution.issues,
            vec![ConfigIssue::UnknownName {
                chain: "GC05".into(),
                name: "ghost".into()
            }]
        );
    }
}
