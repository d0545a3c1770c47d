//! Data model for the Horn-clause language
//!
//! This module provides the fundamental types: terms, predicates, rules,
//! substitutions, and the symbol interner.

pub mod interner;
pub mod predicate;
pub mod rule;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use interner::{ConstantId, Interner, PredicateId, VariableId};
pub use predicate::{Predicate, PredicateDisplay, PredicateSymbol, Signature};
pub use rule::{Rule, RuleDisplay};
pub use substitution::{Substitution, SubstitutionDisplay};
pub use term::{Constant, Term, TermDisplay, Variable};
