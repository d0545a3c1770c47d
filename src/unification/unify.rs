//! Unification over function-free predicates and terms
//!
//! Unification threads an immutable [`Substitution`] through each step:
//! every successful binding produces a fresh substitution value, so a
//! failed attempt leaves the caller's substitution exactly as it was.

use crate::logic::{ConstantId, Predicate, PredicateId, Substitution, Term, Variable};

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Why a unification attempt failed. Failure is a normal outcome, not a
/// fault; the search engine just moves on to the next candidate rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Predicate names don't match
    NameClash(PredicateId, PredicateId),
    /// Arities don't match
    ArityMismatch(usize, usize),
    /// Two distinct constants
    ConstantClash(ConstantId, ConstantId),
    /// Binding the variable would close its chain into a cycle
    BindingCycle(Variable, Term),
}

impl std::fmt::Display for UnificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnificationError::NameClash(p1, p2) => {
                write!(f, "predicate name clash: {} vs {}", p1, p2)
            }
            UnificationError::ArityMismatch(a1, a2) => {
                write!(f, "arity mismatch: {} vs {}", a1, a2)
            }
            UnificationError::ConstantClash(c1, c2) => {
                write!(f, "constant clash: {} vs {}", c1, c2)
            }
            UnificationError::BindingCycle(v, t) => {
                write!(f, "binding {} to {} would create a cycle", v, t)
            }
        }
    }
}

/// Unify two predicates under an existing substitution.
///
/// Fails fast on name or arity mismatch, then unifies arguments pairwise
/// left to right, threading the substitution through each pair.
pub fn unify(x: &Predicate, y: &Predicate, theta: &Substitution) -> UnificationResult {
    if x.symbol.id != y.symbol.id {
        return Err(UnificationError::NameClash(x.symbol.id, y.symbol.id));
    }
    if x.symbol.arity != y.symbol.arity || x.args.len() != y.args.len() {
        return Err(UnificationError::ArityMismatch(x.args.len(), y.args.len()));
    }

    let mut theta = theta.clone();
    for (&xi, &yi) in x.args.iter().zip(y.args.iter()) {
        theta = unify_terms(xi, yi, &theta)?;
    }
    Ok(theta)
}

/// Unify two terms under an existing substitution.
pub fn unify_terms(x: Term, y: Term, theta: &Substitution) -> UnificationResult {
    let x = theta.walk(x);
    let y = theta.walk(y);

    match (x, y) {
        // Identical after walking: same constant, or same unbound variable
        _ if x == y => Ok(theta.clone()),

        // An unbound variable on either side gets bound
        (Term::Variable(v), other) | (other, Term::Variable(v)) => unify_var(v, other, theta),

        // Two distinct constants
        (Term::Constant(c1), Term::Constant(c2)) => {
            Err(UnificationError::ConstantClash(c1.id, c2.id))
        }
    }
}

/// Bind variable `v` to term `x`, resolving through existing bindings.
///
/// `v` and `x` arrive already walked: `v` is unbound under `theta`. The
/// cycle guard rejects binding `v` to a term whose chain leads back to `v`
/// (in the function-free fragment that means `x` walks to `v` itself, which
/// the equality case of [`unify_terms`] already absorbed, so this is a
/// defensive invariant check rather than a reachable failure).
fn unify_var(v: Variable, x: Term, theta: &Substitution) -> UnificationResult {
    if let Some(bound) = theta.get(v) {
        return unify_terms(bound, x, theta);
    }
    if let Term::Variable(xv) = x {
        if let Some(bound) = theta.get(xv) {
            return unify_terms(Term::Variable(v), bound, theta);
        }
    }
    if theta.walk(x) == Term::Variable(v) {
        return Err(UnificationError::BindingCycle(v, x));
    }
    Ok(theta.bind(v, x))
}
