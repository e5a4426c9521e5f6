//! Structured, checkable mathematical proofs
//!
//! This crate models proofs as structured objects instead of free
//! text. A caller assembles a [`Proof`] out of discrete, justified
//! steps recorded in an append-only ledger, tags it with a reasoning
//! strategy (direct, contradiction, induction, contrapositive), and
//! then runs `verify()` to check that the object is structurally
//! well-formed for that strategy.
//!
//! Verification is structural, never mathematical: a verified proof
//! has the right shape (steps present, conclusion set, references in
//! range, strategy-specific rules met), but nothing here establishes
//! mathematical truth. The [`InductionProof`] builder in particular
//! replaces a formal inductive argument with sample-based predicate
//! checks, which is deliberate; see the [`induction`] module docs.
//!
//! A small Curry-Howard [`type_system`] accompanies the engine,
//! relating the proof view to a propositions-as-types view.

pub mod contradiction;
pub mod errors;
pub mod induction;
pub mod ledger;
pub mod proof;
pub mod statement;
pub mod step;
pub mod strategy;
pub mod type_system;
pub mod verification;

pub use contradiction::ContradictionProof;
pub use errors::{ProofError, ProofResult, TypeError, TypeResult};
pub use induction::InductionProof;
pub use ledger::ProofLedger;
pub use proof::Proof;
pub use statement::Statement;
pub use step::ProofStep;
pub use strategy::ProofStrategy;
pub use type_system::{Term, Ty, TypeContext};
pub use verification::StructuralIssue;
