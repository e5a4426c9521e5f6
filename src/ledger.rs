//! Append-only ledger of proof steps

use serde::{Deserialize, Serialize};

use crate::step::ProofStep;

/// The ordered, append-only history of a proof's steps
///
/// The ledger is the canonical record of everything asserted during
/// construction. Steps are never edited or removed; the only mutation
/// is [`append`](ProofLedger::append).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofLedger {
    steps: Vec<ProofStep>,
}

impl ProofLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step, returning its zero-based index
    pub fn append(&mut self, step: ProofStep) -> usize {
        self.steps.push(step);
        self.steps.len() - 1
    }

    /// Look up a step by zero-based index
    pub fn get(&self, index: usize) -> Option<&ProofStep> {
        self.steps.get(index)
    }

    /// Number of steps recorded so far
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the ledger has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ProofStep> {
        self.steps.iter()
    }

    /// The most recently appended step, if any
    pub fn last(&self) -> Option<&ProofStep> {
        self.steps.last()
    }

    /// Whether any step's statement contains `needle`, case-insensitively
    pub fn any_statement_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.steps
            .iter()
            .any(|step| step.statement.to_lowercase().contains(&needle))
    }

    /// Whether any step's reason contains `needle`, case-insensitively
    pub fn any_reason_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.steps
            .iter()
            .any(|step| step.reason.to_lowercase().contains(&needle))
    }
}

impl<'a> IntoIterator for &'a ProofLedger {
    type Item = &'a ProofStep;
    type IntoIter = std::slice::Iter<'a, ProofStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
