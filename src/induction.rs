//! Proof by induction with sample-based checks
//!
//! The builder in this module replaces a formal inductive argument
//! with empirical spot-checking: the caller supplies a predicate over
//! an integer, and the engine evaluates it at the base case and at a
//! small set of sample values. Passing these checks is evidence for
//! the inductive step, not a proof of it. This approximation is
//! deliberate and callers should treat a verified induction proof
//! accordingly.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ProofError, ProofResult};
use crate::proof::Proof;
use crate::strategy::ProofStrategy;

/// A proof using the induction strategy
///
/// Wraps a [`Proof`] fixed to [`ProofStrategy::Induction`], adding a
/// base case value and a fixed inductive variable symbol. Derefs to
/// [`Proof`] for the shared construction operations. The verification
/// predicates are call parameters, never stored state, so the proof
/// itself stays serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InductionProof {
    proof: Proof,
    base_case: i64,
    variable: String,
}

impl InductionProof {
    /// Create an induction proof over the variable `n` with base case 1
    pub fn new() -> Self {
        Self::with_base_case(1)
    }

    /// Create an induction proof with an explicit base case value
    pub fn with_base_case(base_case: i64) -> Self {
        Self {
            proof: Proof::new(ProofStrategy::Induction),
            base_case,
            variable: "n".to_string(),
        }
    }

    /// The base case value fixed at construction
    pub fn base_case(&self) -> i64 {
        self.base_case
    }

    /// The inductive variable symbol
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Record the base case, checking it with the supplied predicate
    ///
    /// The predicate is evaluated at the base case value. The step is
    /// appended to the ledger whether or not the check passes, so a
    /// failed attempt stays visible in the audit trail; on failure the
    /// error surfaces after the step is recorded.
    pub fn add_base_case<F>(&mut self, statement: impl Into<String>, verification: F) -> ProofResult<()>
    where
        F: Fn(i64) -> bool,
    {
        let holds = verification(self.base_case);
        debug!(
            "base case check at {} = {}: {}",
            self.variable, self.base_case, holds
        );
        self.proof
            .add_step(statement, "Base case verification", Vec::new());
        if holds {
            Ok(())
        } else {
            Err(ProofError::BaseCaseFailed {
                variable: self.variable.clone(),
                value: self.base_case,
            })
        }
    }

    /// Record the inductive hypothesis
    ///
    /// No computable check applies; the hypothesis is assumed.
    pub fn add_inductive_hypothesis(&mut self, statement: impl Into<String>) {
        self.proof
            .add_step(statement, "Inductive hypothesis", Vec::new());
    }

    /// Record the inductive step, spot-checking the predicate
    ///
    /// The predicate is evaluated at each value in `test_values` in
    /// order, defaulting to the three values starting at the base
    /// case. Evaluation short-circuits at the first failure, which is
    /// reported with the failing value, and no step is appended in
    /// that case. The step is only recorded when every sample passes.
    pub fn add_inductive_step<F>(
        &mut self,
        statement: impl Into<String>,
        verification: F,
        test_values: Option<Vec<i64>>,
    ) -> ProofResult<()>
    where
        F: Fn(i64) -> bool,
    {
        let values = test_values
            .unwrap_or_else(|| (self.base_case..self.base_case + 3).collect());
        for value in values {
            if !verification(value) {
                debug!(
                    "inductive step check failed at {} = {}",
                    self.variable, value
                );
                return Err(ProofError::InductiveStepFailed {
                    variable: self.variable.clone(),
                    value,
                });
            }
        }
        self.proof
            .add_step(statement, "Inductive step verification", Vec::new());
        Ok(())
    }
}

impl Default for InductionProof {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for InductionProof {
    type Target = Proof;

    fn deref(&self) -> &Self::Target {
        &self.proof
    }
}

impl DerefMut for InductionProof {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_base_case_records_one_step() {
        let mut proof = InductionProof::new();
        proof
            .add_base_case("P(1) holds", |n| n == 1)
            .unwrap();
        assert_eq!(proof.ledger().len(), 1);
        assert_eq!(proof.ledger().get(0).unwrap().reason, "Base case verification");
    }

    #[test]
    fn failing_base_case_errors_but_still_records_the_step() {
        let mut proof = InductionProof::new();
        let err = proof.add_base_case("P(1) holds", |_| false).unwrap_err();
        assert_eq!(
            err,
            ProofError::BaseCaseFailed {
                variable: "n".to_string(),
                value: 1,
            }
        );
        assert_eq!(proof.ledger().len(), 1);
    }

    #[test]
    fn inductive_step_short_circuits_and_names_the_failing_value() {
        let mut proof = InductionProof::new();
        let err = proof
            .add_inductive_step("P(n) implies P(n+1)", |n| n < 2, Some(vec![1, 2, 3]))
            .unwrap_err();
        assert_eq!(
            err,
            ProofError::InductiveStepFailed {
                variable: "n".to_string(),
                value: 2,
            }
        );
        // failure appends nothing
        assert!(proof.ledger().is_empty());
    }

    #[test]
    fn default_test_values_start_at_the_base_case() {
        let mut proof = InductionProof::with_base_case(5);
        let seen = std::cell::RefCell::new(Vec::new());
        proof
            .add_inductive_step(
                "P(n) implies P(n+1)",
                |n| {
                    seen.borrow_mut().push(n);
                    true
                },
                None,
            )
            .unwrap();
        assert_eq!(seen.into_inner(), vec![5, 6, 7]);
    }
}
