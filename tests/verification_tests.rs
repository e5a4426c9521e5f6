//! Strategy-specific structural verification rules

use proofcraft::{Proof, ProofStrategy, StructuralIssue};

#[test]
fn contradiction_requires_assumptions() {
    let mut proof = Proof::new(ProofStrategy::Contradiction);
    proof.add_premise("p");
    proof.add_step("Contradiction: p contradicts not p", "Logical contradiction", vec![0]);
    proof.set_conclusion("not p is false");

    assert!(!proof.verify());
    assert!(proof
        .structural_issues()
        .contains(&StructuralIssue::MissingAssumptions));
}

#[test]
fn contradiction_requires_a_contradiction_step() {
    let mut proof = Proof::new(ProofStrategy::Contradiction);
    proof.add_assumption("not p");
    proof.add_step("q", "Derivation", vec![0]);
    proof.set_conclusion("p");

    assert!(!proof.verify());
    assert!(proof
        .structural_issues()
        .contains(&StructuralIssue::MissingContradictionStep));
}

#[test]
fn contradiction_statement_match_is_case_insensitive() {
    let mut proof = Proof::new(ProofStrategy::Contradiction);
    proof.add_assumption("not p");
    proof.add_step("this yields a CONTRADICTION with step 1", "Observation", vec![0]);
    proof.set_conclusion("p");

    assert!(proof.verify());
}

#[test]
fn induction_requires_base_case_and_inductive_step_reasons() {
    let mut proof = Proof::new(ProofStrategy::Induction);
    proof.add_step("P(1) holds", "Base case verification", Vec::new());
    proof.set_conclusion("P(n) for all n");
    assert!(!proof.verify());
    assert!(proof
        .structural_issues()
        .contains(&StructuralIssue::MissingInductiveStep));

    proof.add_step("P(n) implies P(n+1)", "INDUCTIVE STEP checked", Vec::new());
    assert!(proof.verify());
}

#[test]
fn direct_and_contrapositive_only_need_the_shared_checks() {
    for strategy in [ProofStrategy::Direct, ProofStrategy::Contrapositive] {
        let mut proof = Proof::new(strategy);
        proof.add_premise("p implies q");
        proof.add_step("q", "Modus ponens", vec![0]);
        proof.set_conclusion("q");
        assert!(proof.verify(), "{} proof should verify", strategy);
    }
}

#[test]
fn out_of_range_reference_fails_any_strategy() {
    let mut proof = Proof::new(ProofStrategy::Direct);
    proof.add_premise("p");
    proof.add_step("q", "Derivation", vec![7]);
    proof.set_conclusion("q");

    assert!(!proof.verify());
    assert!(proof.structural_issues().contains(
        &StructuralIssue::ReferenceOutOfRange {
            step: 1,
            reference: 7,
            ledger_len: 2,
        }
    ));
}

#[test]
fn dangling_reference_becomes_valid_once_the_target_exists() {
    let mut proof = Proof::new(ProofStrategy::Direct);
    proof.add_premise("p");
    // cites step 3 before it exists; append never validates
    proof.add_step("q", "Forward citation", vec![2]);
    proof.set_conclusion("q");
    assert!(!proof.verify());

    proof.add_step("r", "Derivation", vec![0]);
    assert!(proof.verify());
}

#[test]
fn boundary_reference_is_out_of_range() {
    let mut proof = Proof::new(ProofStrategy::Direct);
    proof.add_premise("p");
    // index equal to the ledger length is invalid
    proof.add_step("q", "Derivation", vec![2]);
    proof.set_conclusion("q");
    assert!(!proof.verify());
}

#[test]
fn issues_accumulate_rather_than_mask_each_other() {
    let proof = Proof::new(ProofStrategy::Contradiction);
    let issues = proof.structural_issues();
    assert!(issues.contains(&StructuralIssue::EmptyLedger));
    assert!(issues.contains(&StructuralIssue::MissingConclusion));
    assert!(issues.contains(&StructuralIssue::MissingAssumptions));
}
