//! Knowledge base: ordered rule storage with signature lookup
//!
//! Rules are kept in declaration order; that order is what the search
//! engine follows when it tries alternative rules for a goal. Lookup goes
//! through an insertion-ordered index from (name, arity) signatures to rule
//! positions, built once at construction.

use crate::logic::{Interner, Predicate, Rule, Signature};
use indexmap::IndexMap;
use std::fmt;

/// Rejected rule shapes, caught at construction time.
///
/// Search-time failure to prove is never an error; these are the only
/// faults the engine raises, and they surface before any query runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KbError {
    /// A predicate with an empty name (rule position, head or body index)
    EmptyPredicateName { rule: usize },
    /// A predicate whose declared arity disagrees with its argument count
    ArityInconsistent {
        rule: usize,
        declared: usize,
        actual: usize,
    },
}

impl fmt::Display for KbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KbError::EmptyPredicateName { rule } => {
                write!(f, "rule {}: empty predicate name", rule)
            }
            KbError::ArityInconsistent {
                rule,
                declared,
                actual,
            } => write!(
                f,
                "rule {}: declared arity {} but {} arguments",
                rule, declared, actual
            ),
        }
    }
}

/// An immutable, insertion-order-preserving collection of rules, indexed
/// by head signature.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    rules: Vec<Rule>,
    /// Head signature -> positions of matching rules, in declaration order
    index: IndexMap<Signature, Vec<usize>>,
}

impl KnowledgeBase {
    /// Build a knowledge base, validating every rule. Validation fails
    /// fast: the first malformed rule aborts construction.
    pub fn new(rules: Vec<Rule>, interner: &Interner) -> Result<Self, KbError> {
        for (i, rule) in rules.iter().enumerate() {
            validate_predicate(&rule.head, i, interner)?;
            for pred in &rule.body {
                validate_predicate(pred, i, interner)?;
            }
        }
        Ok(Self::from_validated(rules))
    }

    /// Build without re-validating. Used internally when the rules are
    /// already part of a validated knowledge base (e.g. the relevance
    /// filter rebuilding a subset).
    pub(crate) fn from_validated(rules: Vec<Rule>) -> Self {
        let mut index: IndexMap<Signature, Vec<usize>> = IndexMap::new();
        for (i, rule) in rules.iter().enumerate() {
            index.entry(rule.head.signature()).or_default().push(i);
        }
        KnowledgeBase { rules, index }
    }

    /// All rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the knowledge base holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Positions of the rules whose head signature matches `sig`, in
    /// declaration order. An unknown signature yields an empty slice.
    pub fn candidates(&self, sig: Signature) -> &[usize] {
        self.index.get(&sig).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The ordered rules whose head matches the goal's (name, arity)
    pub fn rules_for_goal<'a>(&'a self, goal: &Predicate) -> impl Iterator<Item = &'a Rule> + 'a {
        self.candidates(goal.signature())
            .iter()
            .map(move |&i| &self.rules[i])
    }

    /// All head signatures present, in first-declaration order
    pub fn signatures(&self) -> impl Iterator<Item = Signature> + '_ {
        self.index.keys().copied()
    }
}

fn validate_predicate(pred: &Predicate, rule: usize, interner: &Interner) -> Result<(), KbError> {
    if pred.symbol.name(interner).is_empty() {
        return Err(KbError::EmptyPredicateName { rule });
    }
    if pred.symbol.arity != pred.args.len() {
        return Err(KbError::ArityInconsistent {
            rule,
            declared: pred.symbol.arity,
            actual: pred.args.len(),
        });
    }
    Ok(())
}
