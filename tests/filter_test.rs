//! Filter soundness: pruning irrelevant rules never changes the answers

use hornlog::{
    ask, parse_program, parse_query, prove_goal, relevant_subset, Interner, KnowledgeBase,
    Predicate,
};

/// A knowledge base mixing the family fragment with unrelated predicates
fn mixed_kb(interner: &mut Interner) -> KnowledgeBase {
    let rules = parse_program(
        r#"
        parent(john, mary).
        parent(mary, sue).

        likes(mary, wine).
        likes(sue, cheese).
        enjoys(?x, ?y) :- likes(?x, ?y).

        ancestor(?x, ?y) :- parent(?x, ?y).
        ancestor(?x, ?y) :- parent(?x, ?z), ancestor(?z, ?y).

        happy(?x) :- enjoys(?x, wine).
        "#,
        interner,
    )
    .unwrap();
    KnowledgeBase::new(rules, interner).unwrap()
}

fn answers(kb: &KnowledgeBase, query: &Predicate, interner: &Interner) -> Vec<Vec<String>> {
    ask(kb, query)
        .iter()
        .map(|theta| {
            theta
                .bindings_for(query)
                .into_iter()
                .map(|(_, term)| term.display(interner).to_string())
                .collect()
        })
        .collect()
}

/// Filtered and unfiltered search must agree, answer for answer, in order.
fn assert_filter_sound(kb: &KnowledgeBase, query_text: &str, interner: &mut Interner) {
    let query = parse_query(query_text, interner).unwrap();
    let filtered = relevant_subset(kb, &query);
    assert_eq!(
        answers(kb, &query, interner),
        answers(&filtered, &query, interner),
        "filter changed the solutions of {}",
        query_text
    );
}

#[test]
fn test_filter_soundness_across_queries() {
    let mut interner = Interner::new();
    let kb = mixed_kb(&mut interner);
    for query in [
        "ancestor(john, ?who)",
        "ancestor(?a, ?b)",
        "ancestor(john, sue)",
        "parent(?p, ?c)",
        "happy(?who)",
        "enjoys(sue, ?what)",
        "likes(?x, wine)",
        "unknown(?x)",
    ] {
        assert_filter_sound(&kb, query, &mut interner);
    }
}

#[test]
fn test_filter_keeps_transitive_dependencies() {
    let mut interner = Interner::new();
    let kb = mixed_kb(&mut interner);
    // happy -> enjoys -> likes: two hops of body dependencies
    let query = parse_query("happy(?who)", &mut interner).unwrap();
    let filtered = relevant_subset(&kb, &query);
    assert_eq!(filtered.len(), 4); // happy rule, enjoys rule, two likes facts
    assert_eq!(answers(&filtered, &query, &interner), vec![vec!["mary".to_string()]]);
}

#[test]
fn test_filter_drops_everything_for_unknown_goal() {
    let mut interner = Interner::new();
    let kb = mixed_kb(&mut interner);
    let query = parse_query("unknown(?x)", &mut interner).unwrap();
    let filtered = relevant_subset(&kb, &query);
    assert!(filtered.is_empty());
    assert!(ask(&filtered, &query).is_empty());
}

#[test]
fn test_prove_goal_uses_filtered_base() {
    let mut interner = Interner::new();
    let kb = mixed_kb(&mut interner);
    let query = parse_query("ancestor(john, ?who)", &mut interner).unwrap();
    let report = prove_goal(&kb, &query, &interner);
    assert!(report.proved);
    assert_eq!(report.solutions.len(), 2);
    assert!(report.rules_considered < report.rules_total);
    assert_eq!(report.rules_total, kb.len());
}
