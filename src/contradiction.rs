//! Proof by contradiction

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::proof::Proof;
use crate::strategy::ProofStrategy;

/// A proof using the contradiction strategy
///
/// Wraps a [`Proof`] fixed to [`ProofStrategy::Contradiction`] and
/// adds a bookkeeping operation for recording the contradiction
/// itself. Derefs to [`Proof`] for the shared construction
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContradictionProof {
    proof: Proof,
}

impl ContradictionProof {
    /// Create an empty contradiction proof
    pub fn new() -> Self {
        Self {
            proof: Proof::new(ProofStrategy::Contradiction),
        }
    }

    /// Record that two earlier steps contradict each other
    ///
    /// Appends a step stating
    /// `"Contradiction: {statement1} contradicts {statement2}"` with
    /// reason "Logical contradiction" and references to the two step
    /// indices. Bookkeeping only: the indices are not range checked
    /// here (that happens in `verify()`), and no check is made that
    /// the referenced steps actually conflict.
    pub fn add_contradiction(
        &mut self,
        statement1: &str,
        statement2: &str,
        step1_index: usize,
        step2_index: usize,
    ) {
        let text = format!("Contradiction: {} contradicts {}", statement1, statement2);
        self.proof
            .add_step(text, "Logical contradiction", vec![step1_index, step2_index]);
    }
}

impl Default for ContradictionProof {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ContradictionProof {
    type Target = Proof;

    fn deref(&self) -> &Self::Target {
        &self.proof
    }
}

impl DerefMut for ContradictionProof {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.proof
    }
}
