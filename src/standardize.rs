//! Standardize-apart: fresh variable renaming per rule use
//!
//! Every time the search engine selects a rule, all variables of that rule
//! instance are stamped with a fresh generation number, consistently across
//! the head and body. The generation comes from a monotonic counter and is
//! never reused, so two proof branches using the same rule at the same time
//! can never collide on a variable, and neither can two concurrent queries
//! drawing from the same supply.

use crate::logic::{Predicate, Rule, Term};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Source of fresh variable generations.
///
/// A cloneable handle over an atomic counter. [`VariableSupply::global`]
/// hands out the process-wide supply used by the default query driver;
/// [`VariableSupply::new`] gives an isolated counter, which keeps generation
/// numbers deterministic in tests.
#[derive(Debug, Clone)]
pub struct VariableSupply {
    counter: Arc<AtomicU64>,
}

impl VariableSupply {
    /// Create an isolated supply starting at generation 1
    pub fn new() -> Self {
        VariableSupply {
            counter: Arc::new(AtomicU64::new(1)),
        }
    }

    /// A handle to the single process-wide supply
    pub fn global() -> Self {
        static GLOBAL: OnceLock<VariableSupply> = OnceLock::new();
        GLOBAL.get_or_init(VariableSupply::new).clone()
    }

    /// Draw the next generation number. Monotonic, never reused.
    pub fn fresh(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for VariableSupply {
    fn default() -> Self {
        VariableSupply::new()
    }
}

/// Rename every variable of a rule to a fresh generation, consistently
/// within this one instance. The original rule is untouched; the mapping
/// is just the generation stamp, discarded with the returned instance.
pub fn standardize_apart(rule: &Rule, supply: &VariableSupply) -> Rule {
    let generation = supply.fresh();
    Rule {
        head: stamp_predicate(&rule.head, generation),
        body: rule
            .body
            .iter()
            .map(|p| stamp_predicate(p, generation))
            .collect(),
    }
}

fn stamp_predicate(predicate: &Predicate, generation: u64) -> Predicate {
    Predicate {
        symbol: predicate.symbol,
        args: predicate
            .args
            .iter()
            .map(|&arg| match arg {
                Term::Variable(v) => Term::Variable(v.with_generation(generation)),
                Term::Constant(_) => arg,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{Interner, Variable};

    fn ancestor_rule(interner: &mut Interner) -> Rule {
        let anc = interner.intern_predicate("ancestor");
        let par = interner.intern_predicate("parent");
        let x = Term::Variable(Variable::new(interner.intern_variable("x")));
        let y = Term::Variable(Variable::new(interner.intern_variable("y")));
        let z = Term::Variable(Variable::new(interner.intern_variable("z")));
        Rule::new(
            Predicate::new(anc, vec![x, y]),
            vec![
                Predicate::new(par, vec![x, z]),
                Predicate::new(anc, vec![z, y]),
            ],
        )
    }

    #[test]
    fn test_two_standardizations_are_disjoint() {
        let mut interner = Interner::new();
        let rule = ancestor_rule(&mut interner);
        let supply = VariableSupply::new();

        let r1 = standardize_apart(&rule, &supply);
        let r2 = standardize_apart(&rule, &supply);

        let vars1 = r1.variables();
        let vars2 = r2.variables();
        assert!(vars1.is_disjoint(&vars2));
        // And both are disjoint from the source rule's variables
        assert!(vars1.is_disjoint(&rule.variables()));
    }

    #[test]
    fn test_renaming_is_consistent_within_instance() {
        let mut interner = Interner::new();
        let rule = ancestor_rule(&mut interner);
        let supply = VariableSupply::new();

        let r = standardize_apart(&rule, &supply);
        // head's ?x and first body goal's ?x must be the same variable
        assert_eq!(r.head.args[0], r.body[0].args[0]);
        // head's ?y and second body goal's ?y must be the same variable
        assert_eq!(r.head.args[1], r.body[1].args[1]);
        // Still exactly three distinct variables
        assert_eq!(r.variables().len(), 3);
    }

    #[test]
    fn test_constants_pass_through() {
        let mut interner = Interner::new();
        let p = interner.intern_predicate("parent");
        let john = Term::Constant(crate::logic::Constant::new(
            interner.intern_constant("john"),
        ));
        let fact = Rule::fact(Predicate::new(p, vec![john, john]));

        let supply = VariableSupply::new();
        assert_eq!(standardize_apart(&fact, &supply), fact);
    }

    #[test]
    fn test_supply_is_monotonic_across_clones() {
        let supply = VariableSupply::new();
        let clone = supply.clone();
        let a = supply.fresh();
        let b = clone.fresh();
        let c = supply.fresh();
        assert!(a < b && b < c);
    }
}
