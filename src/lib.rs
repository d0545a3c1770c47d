//! hornlog: backward-chaining SLD resolution over function-free Horn clauses
//!
//! The crate answers queries against a knowledge base of facts and rules
//! (conjunctive bodies, no negation, no compound terms) by depth-first
//! backward chaining, enumerating every satisfying substitution lazily and
//! in a deterministic order.
//!
//! Typical use:
//!
//! ```
//! use hornlog::{ask, parse_program, parse_query, Interner, KnowledgeBase};
//!
//! let mut interner = Interner::new();
//! let rules = parse_program(
//!     "parent(john, mary).
//!      parent(mary, sue).
//!      ancestor(?x, ?y) :- parent(?x, ?y).
//!      ancestor(?x, ?y) :- parent(?x, ?z), ancestor(?z, ?y).",
//!     &mut interner,
//! ).unwrap();
//! let kb = KnowledgeBase::new(rules, &interner).unwrap();
//!
//! let query = parse_query("ancestor(john, ?who)", &mut interner).unwrap();
//! let solutions = ask(&kb, &query);
//! assert_eq!(solutions.len(), 2);
//! ```

pub mod filter;
pub mod kb;
pub mod logic;
pub mod parser;
pub mod prover;
pub mod query;
pub mod standardize;
pub mod unification;

// Re-export commonly used types from logic
pub use logic::{
    Constant, ConstantId, Interner, Predicate, PredicateId, PredicateSymbol, Rule, Signature,
    Substitution, Term, Variable, VariableId,
};

// Re-export the engine surface
pub use filter::relevant_subset;
pub use kb::{KbError, KnowledgeBase};
pub use prover::{Prover, ProverConfig, Solutions};
pub use query::{ask, ask_with_config, prove_goal, ProofReport};
pub use standardize::{standardize_apart, VariableSupply};
pub use unification::{unify, unify_terms, UnificationError, UnificationResult};

pub use parser::{parse_program, parse_query, parse_rule, ParseError};
