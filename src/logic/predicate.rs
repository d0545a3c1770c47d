//! Predicates: a name applied to an ordered list of terms

use super::interner::{Interner, PredicateId};
use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A predicate symbol with arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredicateSymbol {
    pub id: PredicateId,
    pub arity: usize,
}

impl PredicateSymbol {
    /// Create a new predicate symbol from an ID and arity
    pub fn new(id: PredicateId, arity: usize) -> Self {
        PredicateSymbol { id, arity }
    }

    /// Get the name of this predicate symbol from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.resolve_predicate(self.id)
    }
}

/// Lookup key for rules: predicates are comparable only when both the
/// name and the argument count match.
pub type Signature = (PredicateId, usize);

/// A predicate applied to terms, e.g. `parent(john, ?x)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub symbol: PredicateSymbol,
    pub args: Vec<Term>,
}

impl Predicate {
    /// Create a predicate from a symbol ID and arguments; the arity is
    /// taken from the argument count.
    pub fn new(id: PredicateId, args: Vec<Term>) -> Self {
        Predicate {
            symbol: PredicateSymbol::new(id, args.len()),
            args,
        }
    }

    /// The (name, arity) signature of this predicate
    pub fn signature(&self) -> Signature {
        (self.symbol.id, self.symbol.arity)
    }

    /// Number of arguments
    pub fn arity(&self) -> usize {
        self.symbol.arity
    }

    /// True if no argument is a variable
    pub fn is_ground(&self) -> bool {
        !self.args.iter().any(Term::is_variable)
    }

    /// Collect all variables occurring in the arguments
    pub fn collect_variables(&self, vars: &mut HashSet<Variable>) {
        for term in &self.args {
            if let Term::Variable(v) = term {
                vars.insert(*v);
            }
        }
    }

    /// Format this predicate with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> PredicateDisplay<'a> {
        PredicateDisplay {
            predicate: self,
            interner,
        }
    }
}

/// Display wrapper for Predicate that includes an interner for name resolution
pub struct PredicateDisplay<'a> {
    predicate: &'a Predicate,
    interner: &'a Interner,
}

impl fmt::Display for PredicateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.predicate.symbol.name(self.interner))?;
        for (i, arg) in self.predicate.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg.display(self.interner))?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.symbol.id)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
