//! Dependency-closure filter: prune rules irrelevant to a query
//!
//! Before search, the knowledge base can be narrowed to the rules
//! reachable from the query through head/body signature dependencies. The
//! filter computes the least fixpoint of "wanted" signatures starting from
//! the query's own, then keeps exactly the rules whose head is wanted, in
//! their original relative order. Search over the filtered base yields the
//! identical ordered solution sequence as over the full base.

use crate::kb::KnowledgeBase;
use crate::logic::{Predicate, Signature};
use std::collections::HashSet;

/// The sub-base of rules reachable from `goal` through body dependencies.
pub fn relevant_subset(kb: &KnowledgeBase, goal: &Predicate) -> KnowledgeBase {
    let mut wanted: HashSet<Signature> = HashSet::new();
    wanted.insert(goal.signature());

    let mut selected = vec![false; kb.len()];
    let mut changed = true;
    while changed {
        changed = false;
        for (i, rule) in kb.rules().iter().enumerate() {
            if selected[i] || !wanted.contains(&rule.head.signature()) {
                continue;
            }
            selected[i] = true;
            changed = true;
            for pred in &rule.body {
                wanted.insert(pred.signature());
            }
        }
    }

    let rules = kb
        .rules()
        .iter()
        .zip(selected)
        .filter(|(_, keep)| *keep)
        .map(|(rule, _)| rule.clone())
        .collect();
    KnowledgeBase::from_validated(rules)
}
