use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("cyclic escalation chain: {0}")]
    CyclicEscalationChain(String),
}
