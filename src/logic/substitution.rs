//! Immutable variable substitutions
//!
//! A substitution maps variables to terms and may contain chains (a
//! variable bound to another variable). Resolving a term walks the chain to
//! a fixpoint. Substitutions are persistent values: [`Substitution::bind`]
//! returns an extended copy and never mutates the receiver, so sibling
//! search branches can hold diverging substitutions built from a common
//! prefix without any sharing discipline.

use super::interner::Interner;
use super::predicate::Predicate;
use super::term::{Term, Variable};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// An immutable mapping from variables to terms.
///
/// The map is private: the only way to add a binding is [`bind`], and the
/// unifier refuses bindings that would close a chain into a cycle, so
/// [`walk`] always terminates.
///
/// [`bind`]: Substitution::bind
/// [`walk`]: Substitution::walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    map: HashMap<Variable, Term>,
}

// Serialize as a sorted sequence of (variable, term) pairs: JSON maps need
// string keys, and sorting keeps the output independent of hash order.
impl Serialize for Substitution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(Variable, Term)> = self.iter().collect();
        entries.sort_by_key(|(v, _)| (v.id, v.generation));
        entries.serialize(serializer)
    }
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Return a copy of this substitution extended with `var -> term`.
    ///
    /// The receiver is left untouched.
    #[must_use]
    pub fn bind(&self, var: Variable, term: Term) -> Substitution {
        let mut map = self.map.clone();
        map.insert(var, term);
        Substitution { map }
    }

    /// Get the term a variable is directly bound to, if any
    pub fn get(&self, var: Variable) -> Option<Term> {
        self.map.get(&var).copied()
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: Variable) -> bool {
        self.map.contains_key(&var)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no variable is bound
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the raw bindings (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (Variable, Term)> + '_ {
        self.map.iter().map(|(&v, &t)| (v, t))
    }

    /// Chase a term through binding chains to its fixpoint: either a
    /// constant or an unbound variable.
    ///
    /// An acyclic map cannot chain longer than its size; the unifier
    /// refuses cycle-closing bindings, so a longer chase means the map
    /// was built outside the engine. That violation asserts in debug
    /// builds and stops the chase in release builds.
    pub fn walk(&self, term: Term) -> Term {
        let mut current = term;
        let mut steps = 0;
        while let Term::Variable(v) = current {
            match self.map.get(&v) {
                Some(&bound) if bound != current => {
                    steps += 1;
                    debug_assert!(
                        steps <= self.map.len(),
                        "binding chain exceeds map size: the map contains a cycle"
                    );
                    if steps > self.map.len() {
                        break;
                    }
                    current = bound;
                }
                _ => break,
            }
        }
        current
    }

    /// Apply this substitution to every argument of a predicate, walking
    /// each to its fixpoint. The predicate name is untouched.
    pub fn substitute(&self, predicate: &Predicate) -> Predicate {
        Predicate {
            symbol: predicate.symbol,
            args: predicate.args.iter().map(|&arg| self.walk(arg)).collect(),
        }
    }

    /// Resolve only the source-level variables of a goal, fully walked.
    ///
    /// This is the caller-facing answer view: standardize-apart
    /// intermediates (nonzero generation) are internal and omitted.
    pub fn bindings_for(&self, goal: &Predicate) -> Vec<(Variable, Term)> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for &arg in &goal.args {
            if let Term::Variable(v) = arg {
                if v.generation == 0 && seen.insert(v) {
                    out.push((v, self.walk(arg)));
                }
            }
        }
        out
    }

    /// Format this substitution with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> SubstitutionDisplay<'a> {
        SubstitutionDisplay {
            subst: self,
            interner,
        }
    }
}

/// Display wrapper for Substitution that includes an interner for name
/// resolution. Bindings are printed in a stable order (sorted by key) so
/// output does not depend on hash iteration order.
pub struct SubstitutionDisplay<'a> {
    subst: &'a Substitution,
    interner: &'a Interner,
}

impl fmt::Display for SubstitutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(Variable, Term)> = self.subst.iter().collect();
        entries.sort_by_key(|(v, _)| (v.id, v.generation));
        write!(f, "{{")?;
        for (i, (var, term)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{} -> {}",
                Term::Variable(*var).display(self.interner),
                term.display(self.interner)
            )?;
        }
        write!(f, "}}")
    }
}
