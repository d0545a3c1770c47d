//! Atomic terms: constants and variables
//!
//! The rule language is function-free, so a term is either an opaque
//! constant or a variable. Both are small `Copy` values built on interned
//! symbol IDs.

use super::interner::{ConstantId, Interner, VariableId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A logic variable.
///
/// `generation` distinguishes standardized-apart copies of the same source
/// variable: 0 means "as written in the rule", a nonzero value is stamped by
/// [`standardize_apart`](crate::standardize::standardize_apart) each time a
/// rule is used in a proof. Two variables are the same binding site only if
/// both fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
    pub generation: u64,
}

impl Variable {
    /// Create a source-level variable (generation 0)
    pub fn new(id: VariableId) -> Self {
        Variable { id, generation: 0 }
    }

    /// Create a standardized-apart copy of this variable
    pub fn with_generation(self, generation: u64) -> Self {
        Variable {
            id: self.id,
            generation,
        }
    }

    /// Get the base name of this variable from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.resolve_variable(self.id)
    }
}

/// An opaque constant symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub id: ConstantId,
}

impl Constant {
    /// Create a new constant from an ID
    pub fn new(id: ConstantId) -> Self {
        Constant { id }
    }

    /// Get the name of this constant from the interner
    pub fn name<'a>(&self, interner: &'a Interner) -> &'a str {
        interner.resolve_constant(self.id)
    }
}

/// A term: tagged constant or variable, never distinguished by spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
}

impl Term {
    /// True if this term is a variable
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// The variable inside this term, if any
    pub fn as_variable(&self) -> Option<Variable> {
        match self {
            Term::Variable(v) => Some(*v),
            Term::Constant(_) => None,
        }
    }

    /// Format this term with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            interner,
        }
    }
}

/// Display wrapper for Term that includes an interner for name resolution
pub struct TermDisplay<'a> {
    term: &'a Term,
    interner: &'a Interner,
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Term::Variable(v) => {
                write!(f, "?{}", v.name(self.interner))?;
                if v.generation != 0 {
                    write!(f, "#{}", v.generation)?;
                }
                Ok(())
            }
            Term::Constant(c) => write!(f, "{}", c.name(self.interner)),
        }
    }
}

// Display implementations that show IDs (for debugging without interner)

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{}#{}", self.id, self.generation)
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_distinguishes_variables() {
        let mut interner = Interner::new();
        let x = Variable::new(interner.intern_variable("x"));
        let x1 = x.with_generation(1);
        let x2 = x.with_generation(2);
        assert_eq!(x1.id, x2.id);
        assert_ne!(x1, x2);
        assert_ne!(x, x1);
    }

    #[test]
    fn test_term_tag_not_spelling() {
        let mut interner = Interner::new();
        // A constant and a variable with the same spelling are unrelated
        let c = Term::Constant(Constant::new(interner.intern_constant("x")));
        let v = Term::Variable(Variable::new(interner.intern_variable("x")));
        assert!(v.is_variable());
        assert!(!c.is_variable());
        assert_ne!(c, v);
    }
}
