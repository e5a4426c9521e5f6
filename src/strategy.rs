//! Proof strategies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ProofError;

/// The declared reasoning pattern of a proof
///
/// The strategy is fixed when the proof is created and governs which
/// structural rules `verify()` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofStrategy {
    /// Direct derivation from premises
    Direct,

    /// Proof by contradiction
    Contradiction,

    /// Proof by induction
    Induction,

    /// Proof by contrapositive
    Contrapositive,
}

impl fmt::Display for ProofStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Direct => "direct",
            Self::Contradiction => "contradiction",
            Self::Induction => "induction",
            Self::Contrapositive => "contrapositive",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ProofStrategy {
    type Err = ProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "contradiction" => Ok(Self::Contradiction),
            "induction" => Ok(Self::Induction),
            "contrapositive" => Ok(Self::Contrapositive),
            other => Err(ProofError::UnknownStrategy(other.to_string())),
        }
    }
}
