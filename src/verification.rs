//! Structural verification engine
//!
//! Checks that a proof object is well-formed for its declared strategy.
//! This is structural soundness only: a clean check means the ledger,
//! the step references, and the strategy-specific shape are in order.
//! It does not mean the underlying mathematics is correct.
//!
//! The engine runs a shared pre-check (non-empty ledger, conclusion
//! present, every reference in range) and then dispatches on the
//! strategy for the remaining rules. Findings are reported as
//! [`StructuralIssue`] values; `Proof::verify()` reduces them to a
//! boolean.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::proof::Proof;
use crate::strategy::ProofStrategy;

/// A structural defect found in a proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructuralIssue {
    /// The ledger has no steps
    EmptyLedger,

    /// No conclusion has been set
    MissingConclusion,

    /// A step references a ledger index that does not exist
    ReferenceOutOfRange {
        /// Zero-based index of the offending step
        step: usize,
        /// The out-of-range reference
        reference: usize,
        /// Ledger length at verification time
        ledger_len: usize,
    },

    /// A contradiction proof has no assumptions to contradict
    MissingAssumptions,

    /// A contradiction proof never states a contradiction
    MissingContradictionStep,

    /// An induction proof has no base case step
    MissingBaseCase,

    /// An induction proof has no inductive step
    MissingInductiveStep,
}

impl fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLedger => write!(f, "proof has no steps"),
            Self::MissingConclusion => write!(f, "no conclusion has been set"),
            Self::ReferenceOutOfRange {
                step,
                reference,
                ledger_len,
            } => write!(
                f,
                "step {} references step {} but the ledger has {} steps",
                step + 1,
                reference + 1,
                ledger_len
            ),
            Self::MissingAssumptions => {
                write!(f, "contradiction proof has no assumptions")
            }
            Self::MissingContradictionStep => {
                write!(f, "no step states a contradiction")
            }
            Self::MissingBaseCase => write!(f, "no step verifies a base case"),
            Self::MissingInductiveStep => {
                write!(f, "no step verifies an inductive step")
            }
        }
    }
}

/// Collect every structural issue in the proof's current state
///
/// Pure over the proof: calling this repeatedly never mutates anything.
pub fn structural_issues(proof: &Proof) -> Vec<StructuralIssue> {
    let mut issues = Vec::new();

    if proof.ledger().is_empty() {
        issues.push(StructuralIssue::EmptyLedger);
    }
    if proof.conclusion().is_none() {
        issues.push(StructuralIssue::MissingConclusion);
    }

    let ledger_len = proof.ledger().len();
    for (index, step) in proof.ledger().iter().enumerate() {
        for &reference in &step.references {
            if reference >= ledger_len {
                issues.push(StructuralIssue::ReferenceOutOfRange {
                    step: index,
                    reference,
                    ledger_len,
                });
            }
        }
    }

    match proof.strategy() {
        ProofStrategy::Contradiction => contradiction_rules(proof, &mut issues),
        ProofStrategy::Induction => induction_rules(proof, &mut issues),
        // no rules beyond the shared pre-check
        ProofStrategy::Direct | ProofStrategy::Contrapositive => {}
    }

    trace!(
        "structural check of {} proof found {} issue(s)",
        proof.strategy(),
        issues.len()
    );
    issues
}

fn contradiction_rules(proof: &Proof, issues: &mut Vec<StructuralIssue>) {
    if proof.assumptions().is_empty() {
        issues.push(StructuralIssue::MissingAssumptions);
    }
    if !proof.ledger().any_statement_contains("contradiction") {
        issues.push(StructuralIssue::MissingContradictionStep);
    }
}

fn induction_rules(proof: &Proof, issues: &mut Vec<StructuralIssue>) {
    if !proof.ledger().any_reason_contains("base case") {
        issues.push(StructuralIssue::MissingBaseCase);
    }
    if !proof.ledger().any_reason_contains("inductive step") {
        issues.push(StructuralIssue::MissingInductiveStep);
    }
}
