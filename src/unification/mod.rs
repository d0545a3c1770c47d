//! Unification algorithm for function-free terms and predicates

mod unify;


pub use unify::{unify, unify_terms, UnificationError, UnificationResult};
