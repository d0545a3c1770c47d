//! Horn clauses: a head predicate with a conjunctive body

use super::interner::Interner;
use super::predicate::Predicate;
use super::term::Variable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A definite clause. An empty body makes the rule a fact.
///
/// Variables are scoped to the rule they appear in; the search engine
/// standardizes every rule apart before use, so the same rule can take part
/// in several proof branches at once without variable capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub head: Predicate,
    pub body: Vec<Predicate>,
}

impl Rule {
    /// Create a rule from a head and body
    pub fn new(head: Predicate, body: Vec<Predicate>) -> Self {
        Rule { head, body }
    }

    /// Create a fact (a rule with an empty body)
    pub fn fact(head: Predicate) -> Self {
        Rule {
            head,
            body: Vec::new(),
        }
    }

    /// True if this rule has no body
    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }

    /// Collect all variables occurring in the head and body
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        self.head.collect_variables(vars);
        for pred in &self.body {
            pred.collect_variables(vars);
        }
    }

    /// All variables of this rule as a set
    pub fn variables(&self) -> HashSet<Variable> {
        let mut vars = HashSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Format this rule with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> RuleDisplay<'a> {
        RuleDisplay {
            rule: self,
            interner,
        }
    }
}

/// Display wrapper for Rule that includes an interner for name resolution
pub struct RuleDisplay<'a> {
    rule: &'a Rule,
    interner: &'a Interner,
}

impl fmt::Display for RuleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule.head.display(self.interner))?;
        if !self.rule.is_fact() {
            write!(f, " :- ")?;
            for (i, pred) in self.rule.body.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", pred.display(self.interner))?;
            }
        }
        write!(f, ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::term::{Constant, Term};

    #[test]
    fn test_fact_has_empty_body() {
        let mut interner = Interner::new();
        let p = interner.intern_predicate("parent");
        let john = Term::Constant(Constant::new(interner.intern_constant("john")));
        let rule = Rule::fact(Predicate::new(p, vec![john, john]));
        assert!(rule.is_fact());
        assert!(rule.variables().is_empty());
    }

    #[test]
    fn test_variables_span_head_and_body() {
        let mut interner = Interner::new();
        let anc = interner.intern_predicate("ancestor");
        let par = interner.intern_predicate("parent");
        let x = Term::Variable(Variable::new(interner.intern_variable("x")));
        let y = Term::Variable(Variable::new(interner.intern_variable("y")));
        let z = Term::Variable(Variable::new(interner.intern_variable("z")));

        // ancestor(?x,?y) :- parent(?x,?z), ancestor(?z,?y)
        let rule = Rule::new(
            Predicate::new(anc, vec![x, y]),
            vec![
                Predicate::new(par, vec![x, z]),
                Predicate::new(anc, vec![z, y]),
            ],
        );
        assert_eq!(rule.variables().len(), 3);
    }
}
