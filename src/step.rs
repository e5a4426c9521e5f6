//! Individual entries in the proof ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step in a proof
///
/// Each step pairs a statement with the reason it is asserted and the
/// earlier ledger entries it derives from. References are zero-based
/// ledger indices internally; rendered output shows 1-based step
/// numbers. Steps are immutable once appended to a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// The statement this step asserts
    pub statement: String,

    /// Justification for the step
    pub reason: String,

    /// Zero-based indices of the ledger entries this step derives from
    pub references: Vec<usize>,
}

impl ProofStep {
    /// Create a new proof step
    pub fn new(
        statement: impl Into<String>,
        reason: impl Into<String>,
        references: Vec<usize>,
    ) -> Self {
        Self {
            statement: statement.into(),
            reason: reason.into(),
            references,
        }
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.statement, self.reason)?;
        if !self.references.is_empty() {
            // display is 1-based even though the ledger is 0-based
            let numbers: Vec<String> = self
                .references
                .iter()
                .map(|index| (index + 1).to_string())
                .collect();
            write!(f, " (from steps {})", numbers.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_references() {
        let step = ProofStep::new("p implies q", "Given premise", Vec::new());
        assert_eq!(step.to_string(), "p implies q [Given premise]");
    }

    #[test]
    fn display_renders_one_based_step_numbers() {
        let step = ProofStep::new("q", "Modus ponens", vec![0, 2]);
        assert_eq!(step.to_string(), "q [Modus ponens] (from steps 1, 3)");
    }

    #[test]
    fn serializes_to_json() {
        let step = ProofStep::new("q", "Modus ponens", vec![1]);
        let json = serde_json::to_string(&step).unwrap();
        let back: ProofStep = serde_json::from_str(&json).unwrap();
        assert_eq!(back, step);
    }
}
