use std::collections::BTreeMap;

use crate::config::ConfigIssue;
use crate::error::DomainError;
use crate::names::ChainName;
use crate::person::PersonDirectory;

use super::token::{TokenPattern, FORCED};
use super::{ChainEntry, EscalationChain, Responder};

/// Builds typed chains from raw token lists, resolving nested references
/// eagerly and recording every entry it had to drop.
///
/// Unknown names and malformed tokens degrade to omission; only a cyclic
/// chain reference fails the chain being built.
pub struct ChainBuilder<'a> {
    people: &'a PersonDirectory,
    raw_chains: &'a BTreeMap<String, Vec<String>>,
    pattern: TokenPattern,
    issues: Vec<ConfigIssue>,
}

impl<'a> ChainBuilder<'a> {
    pub fn new(
        people: &'a PersonDirectory,
        raw_chains: &'a BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            people,
            raw_chains,
            pattern: TokenPattern::new(),
            issues: Vec::new(),
        }
    }

    pub fn build(
        &mut self,
        name: &str,
        raw_entries: &[String],
    ) -> Result<EscalationChain, DomainError> {
        let mut path = Vec::new();
        self.build_inner(name, raw_entries, None, &mut path)
    }

    fn build_inner(
        &mut self,
        name: &str,
        raw_entries: &[String],
        inherited: Option<&str>,
        path: &mut Vec<String>,
    ) -> Result<EscalationChain, DomainError> {
        path.push(name.to_string());

        let mut sequence = Vec::new();
        for raw in raw_entries {
            let Some(token) = self.pattern.parse(raw) else {
                self.issues.push(ConfigIssue::MalformedToken {
                    chain: name.to_string(),
                    token: raw.clone(),
                });
                continue;
            };

            // A modifier inherited from the referencing entry overrides the
            // per-entry one.
            let modifiers = match inherited {
                Some(flags) if !flags.is_empty() => flags.to_string(),
                _ => token.modifiers.clone(),
            };
            let is_forced = modifiers.contains(FORCED);

            if let Some(person) = self.people.get(&token.name) {
                sequence.push(ChainEntry::new(Responder::Person(person.clone()), is_forced));
            } else if let Some(nested) = self.raw_chains.get(&token.name) {
                if path.iter().any(|seen| seen == &token.name) {
                    return Err(DomainError::CyclicEscalationChain(token.name));
                }
                let subchain =
                    self.build_inner(&token.name, nested, Some(modifiers.as_str()), path)?;
                sequence.push(ChainEntry::new(Responder::Chain(subchain), is_forced));
            } else {
                self.issues.push(ConfigIssue::UnknownName {
                    chain: name.to_string(),
                    name: token.name,
                });
            }
        }

        path.pop();
        Ok(EscalationChain::new(ChainName::new(name), sequence))
    }

    /// Issues recorded so far; the resolver drains these into its result.
    pub fn take_issues(&mut self) -> Vec<ConfigIssue> {
        std::mem::take(&mut self.issues)
    }
}
