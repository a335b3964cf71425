pub mod builder;
pub mod token;

use chrono::NaiveDate;

use crate::names::ChainName;
use crate::person::Person;

pub use builder::ChainBuilder;
pub use token::EntryToken;

/// Either side of the person/chain duality a chain entry can reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Responder {
    Person(Person),
    Chain(EscalationChain),
}

impl Responder {
    /// Chains are structural and always available; people follow their
    /// schedule and override.
    pub fn is_available(&self, today: NaiveDate) -> bool {
        match self {
            Self::Person(person) => person.is_available(today),
            Self::Chain(_) => true,
        }
    }

    fn collect_into(&self, today: NaiveDate, out: &mut ResponderSet) {
        match self {
            // A person, asked directly, is their own responsible person;
            // availability was the caller's concern.
            Self::Person(person) => out.insert(person.clone()),
            Self::Chain(chain) => chain.collect_into(today, out),
        }
    }
}

/// One resolved entry of a chain sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainEntry {
    responder: Responder,
    forced: bool,
}

impl ChainEntry {
    pub fn new(responder: Responder, forced: bool) -> Self {
        Self { responder, forced }
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    pub fn forced(&self) -> bool {
        self.forced
    }
}

/// An ordered list of people and nested chains. The order is a priority
/// order: the first available soft entry wins.
#[derive(Debug, Clone, PartialEq)]
pub struct EscalationChain {
    name: ChainName,
    sequence: Vec<ChainEntry>,
}

impl EscalationChain {
    pub fn new(name: ChainName, sequence: Vec<ChainEntry>) -> Self {
        Self { name, sequence }
    }

    pub fn name(&self) -> &ChainName {
        &self.name
    }

    pub fn sequence(&self) -> &[ChainEntry] {
        &self.sequence
    }

    /// Who is responsible right now. Forced entries always contribute and
    /// never stop the scan; the first available soft entry contributes and
    /// ends it.
    pub fn responsible_people(&self, today: NaiveDate) -> ResponderSet {
        let mut set = ResponderSet::new();
        self.collect_into(today, &mut set);
        set
    }

    fn collect_into(&self, today: NaiveDate, out: &mut ResponderSet) {
        for entry in &self.sequence {
            if entry.forced() {
                entry.responder().collect_into(today, out);
                continue;
            }
            if entry.responder().is_available(today) {
                entry.responder().collect_into(today, out);
                return;
            }
        }
    }
}

/// Insertion-ordered set of responders, deduplicated by person name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponderSet {
    people: Vec<Person>,
}

impl ResponderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, person: Person) {
        if !self.people.iter().any(|p| p.name() == person.name()) {
            self.people.push(person);
        }
    }

    pub fn merge(&mut self, other: ResponderSet) {
        for person in other.people {
            self.insert(person);
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn names(&self) -> Vec<&str> {
        self.people.iter().map(|p| p.name().as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::PersonName;
    use crate::person::WeekdaySet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    fn available(name: &str) -> Person {
        Person::new(PersonName::new(name))
    }

    fn unavailable(name: &str) -> Person {
        let mut person = Person::new(PersonName::new(name));
        person.set_days(WeekdaySet::empty());
        person
    }

    fn soft(person: Person) -> ChainEntry {
        ChainEntry::new(Responder::Person(person), false)
    }

    fn forced(person: Person) -> ChainEntry {
        ChainEntry::new(Responder::Person(person), true)
    }

    fn chain(name: &str, sequence: Vec<ChainEntry>) -> EscalationChain {
        EscalationChain::new(ChainName::new(name), sequence)
    }

    #[test]
    fn single_available_soft_entry_resolves_to_that_person() {
        let c = chain("c", vec![soft(available("alice"))]);
        assert_eq!(c.responsible_people(today()).names(), vec!["alice"]);
    }

    #[test]
    fn soft_scan_skips_unavailable_and_stops_at_first_available() {
        let c = chain(
            "c",
            vec![
                soft(unavailable("alice")),
                soft(available("bob")),
                soft(available("carol")),
            ],
        );
        // alice never included, carol never reached.
        assert_eq!(c.responsible_people(today()).names(), vec!["bob"]);
    }

    #[test]
    fn forced_entry_does_not_stop_the_scan() {
        let c = chain(
            "c",
            vec![forced(available("alice")), soft(available("bob"))],
        );
        assert_eq!(c.responsible_people(today()).names(), vec!["alice", "bob"]);
    }

    #[test]
    fn forced_entries_contribute_regardless_of_availability() {
        let c = chain(
            "c",
            vec![forced(unavailable("alice")), forced(unavailable("bob"))],
        );
        assert_eq!(c.responsible_people(today()).names(), vec!["alice", "bob"]);
    }

    #[test]
    fn all_unavailable_soft_entries_yield_empty_set() {
        let c = chain("c", vec![soft(unavailable("alice")), soft(unavailable("bob"))]);
        assert!(c.responsible_people(today()).is_empty());
    }

    #[test]
    fn soft_chain_entry_is_always_available_and_stops_the_scan() {
        // The nested chain resolves to nobody, but a chain is structurally
        // available, so the soft scan still ends there.
        let empty_handed = chain("sub", vec![soft(unavailable("alice"))]);
        let c = chain(
            "c",
            vec![
                ChainEntry::new(Responder::Chain(empty_handed), false),
                soft(available("bob")),
            ],
        );
        assert!(c.responsible_people(today()).is_empty());
    }

    #[test]
    fn forced_chain_entry_contributes_its_resolution() {
        let sub = chain("sub", vec![soft(available("carol"))]);
        let c = chain(
            "c",
            vec![
                ChainEntry::new(Responder::Chain(sub), true),
                soft(available("bob")),
            ],
        );
        assert_eq!(c.responsible_people(today()).names(), vec!["carol", "bob"]);
    }

    #[test]
    fn responders_are_deduplicated_by_name() {
        let alice = available("alice");
        let c = chain("c", vec![forced(alice.clone()), soft(alice)]);
        assert_eq!(c.responsible_people(today()).names(), vec!["alice"]);
    }

    #[test]
    fn responder_set_preserves_insertion_order() {
        let mut set = ResponderSet::new();
        set.insert(available("carol"));
        set.insert(available("alice"));
        set.insert(available("carol"));
        assert_eq!(set.names(), vec!["carol", "alice"]);
    }

    #[test]
    fn merge_unions_without_duplicates() {
        let mut left = ResponderSet::new();
        left.insert(available("alice"));
        let mut right = ResponderSet::new();
        right.insert(available("alice"));
        right.insert(available("bob"));

        left.merge(right);
        assert_eq!(left.names(), vec!["alice", "bob"]);
    }
}
