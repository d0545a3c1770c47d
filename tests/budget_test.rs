//! Opt-in search budgets over rule sets with no terminating proof
//!
//! Default search is unbounded; a recursive predicate with no base case
//! diverges. These tests bound execution externally through ProverConfig
//! rather than asserting termination of the default configuration.

use hornlog::{
    ask_with_config, parse_program, parse_query, Interner, KnowledgeBase, Prover, ProverConfig,
    VariableSupply,
};

/// reachable has a recursive rule but no base case: every query diverges
/// under unbounded search.
fn divergent_kb(interner: &mut Interner) -> KnowledgeBase {
    let rules = parse_program(
        r#"
        edge(a, b).
        reachable(?x, ?y) :- reachable(?x, ?z), edge(?z, ?y).
        "#,
        interner,
    )
    .unwrap();
    KnowledgeBase::new(rules, interner).unwrap()
}

#[test]
fn test_step_budget_terminates_divergent_query() {
    let mut interner = Interner::new();
    let kb = divergent_kb(&mut interner);
    let query = parse_query("reachable(a, b)", &mut interner).unwrap();

    let config = ProverConfig {
        max_steps: Some(2_000),
        max_depth: None,
    };
    let solutions = ask_with_config(&kb, &query, config);
    assert!(solutions.is_empty());
}

/// Left recursion drives the proof 10,000 levels deep before the budget
/// trips. Search state lives on an explicit heap stack, so memory per
/// level is bounded and the native call stack stays flat.
#[test]
fn test_growing_step_budgets_keep_stack_flat() {
    let mut interner = Interner::new();
    let kb = divergent_kb(&mut interner);
    let query = parse_query("reachable(a, b)", &mut interner).unwrap();

    for budget in [500, 2_000, 10_000] {
        let config = ProverConfig {
            max_steps: Some(budget),
            max_depth: None,
        };
        let prover = Prover::with_config(&kb, config).with_supply(VariableSupply::new());
        let mut solutions = prover.solve(&query);
        assert_eq!(solutions.by_ref().count(), 0);
        assert!(solutions.budget_exhausted());
        assert!(solutions.steps() >= budget);
    }
}

#[test]
fn test_depth_budget_reports_truncation() {
    let mut interner = Interner::new();
    let kb = divergent_kb(&mut interner);
    let query = parse_query("reachable(a, ?where)", &mut interner).unwrap();

    let config = ProverConfig {
        max_steps: None,
        max_depth: Some(64),
    };
    let prover = Prover::with_config(&kb, config).with_supply(VariableSupply::new());
    let mut solutions = prover.solve(&query);
    assert_eq!(solutions.by_ref().count(), 0);
    assert!(solutions.budget_exhausted());
}

#[test]
fn test_budget_leaves_terminating_queries_alone() {
    let mut interner = Interner::new();
    let rules = parse_program(
        r#"
        edge(a, b).
        edge(b, c).
        reachable(?x, ?y) :- edge(?x, ?y).
        reachable(?x, ?y) :- edge(?x, ?z), reachable(?z, ?y).
        "#,
        &mut interner,
    )
    .unwrap();
    let kb = KnowledgeBase::new(rules, &interner).unwrap();
    let query = parse_query("reachable(a, ?where)", &mut interner).unwrap();

    let config = ProverConfig {
        max_steps: Some(100_000),
        max_depth: Some(1_000),
    };
    let prover = Prover::with_config(&kb, config).with_supply(VariableSupply::new());
    let mut solutions = prover.solve(&query);
    assert_eq!(solutions.by_ref().count(), 2); // b, then c through b
    assert!(!solutions.budget_exhausted());
}

#[test]
fn test_prefix_consumption_of_infinite_answer_stream() {
    let mut interner = Interner::new();
    // A cyclic graph with a base case: infinitely many proofs of
    // reachable(a, ?w). Lazy enumeration still hands out a prefix.
    let rules = parse_program(
        r#"
        edge(a, b).
        edge(b, a).
        reachable(?x, ?y) :- edge(?x, ?y).
        reachable(?x, ?y) :- edge(?x, ?z), reachable(?z, ?y).
        "#,
        &mut interner,
    )
    .unwrap();
    let kb = KnowledgeBase::new(rules, &interner).unwrap();
    let query = parse_query("reachable(a, ?where)", &mut interner).unwrap();

    let prover = Prover::new(&kb).with_supply(VariableSupply::new());
    let first_three: Vec<_> = prover.solve(&query).take(3).collect();
    assert_eq!(first_three.len(), 3);
    let names: Vec<String> = first_three
        .iter()
        .map(|theta| theta.walk(query.args[1]).display(&interner).to_string())
        .collect();
    // Direct edge to b, then b->a, then b->a->b
    assert_eq!(names, vec!["b", "a", "b"]);
}
