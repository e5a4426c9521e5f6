//! Proof aggregate and its construction operations

use std::fmt::Write as _;
use std::io::{self, Write};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ledger::ProofLedger;
use crate::step::ProofStep;
use crate::strategy::ProofStrategy;
use crate::verification::{structural_issues, StructuralIssue};

/// A structured, checkable proof
///
/// A proof is built by an ordered sequence of mutation calls, each of
/// which appends to the ledger. The ledger is the canonical history;
/// the premise and assumption sets are derived indexes into it kept
/// for fast lookup by the verification rules, not independent facts.
///
/// `verify()` checks structural soundness only. A `true` result means
/// the proof object is well-formed for its declared strategy; it is
/// not a certificate of mathematical correctness, and `false` means
/// "not yet a valid proof of this strategy", never a refutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proof {
    strategy: ProofStrategy,
    premises: FxHashSet<String>,
    assumptions: FxHashSet<String>,
    ledger: ProofLedger,
    conclusion: Option<String>,
}

impl Proof {
    /// Create an empty proof with the given strategy
    ///
    /// The strategy is fixed for the lifetime of the proof.
    pub fn new(strategy: ProofStrategy) -> Self {
        Self {
            strategy,
            premises: FxHashSet::default(),
            assumptions: FxHashSet::default(),
            ledger: ProofLedger::new(),
            conclusion: None,
        }
    }

    /// The strategy declared at construction
    pub fn strategy(&self) -> ProofStrategy {
        self.strategy
    }

    /// Distinct premise texts added so far
    pub fn premises(&self) -> &FxHashSet<String> {
        &self.premises
    }

    /// Distinct assumption texts added so far
    pub fn assumptions(&self) -> &FxHashSet<String> {
        &self.assumptions
    }

    /// The append-only step ledger
    pub fn ledger(&self) -> &ProofLedger {
        &self.ledger
    }

    /// The conclusion, if one has been set
    pub fn conclusion(&self) -> Option<&str> {
        self.conclusion.as_deref()
    }

    /// Record a premise
    ///
    /// The premise set collapses duplicates, but every call appends a
    /// ledger entry; the ledger keeps the full history.
    pub fn add_premise(&mut self, statement: impl Into<String>) {
        let text = statement.into();
        debug!("adding premise: {}", text);
        self.premises.insert(text.clone());
        self.ledger
            .append(ProofStep::new(text, "Given premise", Vec::new()));
    }

    /// Record an assumption
    ///
    /// Used by the contradiction and contrapositive strategies. Same
    /// set-plus-ledger behavior as [`add_premise`](Proof::add_premise).
    pub fn add_assumption(&mut self, statement: impl Into<String>) {
        let text = statement.into();
        debug!("adding assumption: {}", text);
        self.assumptions.insert(text.clone());
        self.ledger
            .append(ProofStep::new(text, "Assumption", Vec::new()));
    }

    /// Append a derivation step
    ///
    /// References are zero-based ledger indices. They are not range
    /// checked here: a step may cite an index that does not exist yet,
    /// and the dangling reference only surfaces when `verify()` runs.
    pub fn add_step(
        &mut self,
        statement: impl Into<String>,
        reason: impl Into<String>,
        references: Vec<usize>,
    ) {
        let step = ProofStep::new(statement, reason, references);
        debug!("adding step {}: {}", self.ledger.len() + 1, step);
        self.ledger.append(step);
    }

    /// Set the conclusion, overwriting any previous one
    ///
    /// Does not append a ledger entry.
    pub fn set_conclusion(&mut self, statement: impl Into<String>) {
        let text = statement.into();
        debug!("setting conclusion: {}", text);
        self.conclusion = Some(text);
    }

    /// Check structural soundness for the declared strategy
    ///
    /// Pure and repeatable; never panics and never mutates. Returns
    /// `false` while the ledger is empty or no conclusion is set, if
    /// any step references an out-of-range index, or if the
    /// strategy-specific rules are not met.
    pub fn verify(&self) -> bool {
        let issues = structural_issues(self);
        debug!(
            "verify() on {} proof: {} issue(s)",
            self.strategy,
            issues.len()
        );
        issues.is_empty()
    }

    /// Diagnostic form of [`verify`](Proof::verify): every structural
    /// issue in the current state
    pub fn structural_issues(&self) -> Vec<StructuralIssue> {
        structural_issues(self)
    }

    /// Render the proof as human-readable text
    ///
    /// Premises and assumptions are listed in first-appearance order
    /// taken from the ledger, and steps are numbered from 1.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "Proof by {}", self.strategy).unwrap();

        writeln!(out, "Premises:").unwrap();
        for text in self.ledger_texts_with_reason("Given premise") {
            writeln!(out, "  - {}", text).unwrap();
        }
        writeln!(out, "Assumptions:").unwrap();
        for text in self.ledger_texts_with_reason("Assumption") {
            writeln!(out, "  - {}", text).unwrap();
        }

        writeln!(out, "Steps:").unwrap();
        for (index, step) in self.ledger.iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, step).unwrap();
        }

        match &self.conclusion {
            Some(conclusion) => writeln!(out, "Conclusion: {}", conclusion).unwrap(),
            None => writeln!(out, "Conclusion: (not set)").unwrap(),
        }
        out
    }

    /// Write the rendered proof to an output sink, line by line
    pub fn display<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for line in self.render().lines() {
            writeln!(sink, "{}", line)?;
        }
        Ok(())
    }

    /// First-appearance projection of ledger statements with the given
    /// reason, deduplicated
    fn ledger_texts_with_reason<'a>(&'a self, reason: &'a str) -> impl Iterator<Item = &'a str> {
        let mut seen = FxHashSet::default();
        self.ledger
            .iter()
            .filter(move |step| step.reason == reason)
            .filter_map(move |step| {
                seen.insert(step.statement.as_str())
                    .then_some(step.statement.as_str())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_premise_collapses_in_set_but_not_in_ledger() {
        let mut proof = Proof::new(ProofStrategy::Direct);
        proof.add_premise("x > 0");
        proof.add_premise("x > 0");
        assert_eq!(proof.premises().len(), 1);
        assert_eq!(proof.ledger().len(), 2);
    }

    #[test]
    fn set_conclusion_overwrites_and_adds_no_ledger_entry() {
        let mut proof = Proof::new(ProofStrategy::Direct);
        proof.set_conclusion("first");
        proof.set_conclusion("second");
        assert_eq!(proof.conclusion(), Some("second"));
        assert!(proof.ledger().is_empty());
    }

    #[test]
    fn render_numbers_steps_from_one() {
        let mut proof = Proof::new(ProofStrategy::Direct);
        proof.add_premise("p");
        proof.add_step("q", "Modus ponens", vec![0]);
        proof.set_conclusion("q");
        let rendered = proof.render();
        assert!(rendered.contains("1. p [Given premise]"));
        assert!(rendered.contains("2. q [Modus ponens] (from steps 1)"));
        assert!(rendered.contains("Conclusion: q"));
    }

    #[test]
    fn display_writes_the_rendered_lines() {
        let mut proof = Proof::new(ProofStrategy::Direct);
        proof.add_premise("p");
        proof.set_conclusion("p");
        let mut sink = Vec::new();
        proof.display(&mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert_eq!(text, proof.render());
    }
}
