//! Query driver: materialize answers, optionally through the relevance
//! filter, with a human-readable trace report.

use crate::filter::relevant_subset;
use crate::kb::KnowledgeBase;
use crate::logic::{Interner, Predicate, Substitution};
use crate::prover::{Prover, ProverConfig};
use serde::Serialize;

/// Run the query to exhaustion and collect every satisfying substitution,
/// in proof order. An empty result means "no proof found" and is a normal
/// outcome, never an error.
pub fn ask(kb: &KnowledgeBase, query: &Predicate) -> Vec<Substitution> {
    let prover = Prover::new(kb);
    prover.solve(query).collect()
}

/// Like [`ask`], with explicit search limits.
pub fn ask_with_config(
    kb: &KnowledgeBase,
    query: &Predicate,
    config: ProverConfig,
) -> Vec<Substitution> {
    let prover = Prover::with_config(kb, config);
    prover.solve(query).collect()
}

/// Outcome of a proved (or failed) query, with trace lines for end users.
#[derive(Debug, Clone, Serialize)]
pub struct ProofReport {
    /// The query, rendered through the interner
    pub query: String,
    /// True if at least one proof was found
    pub proved: bool,
    /// Every satisfying substitution, in proof order
    pub solutions: Vec<Substitution>,
    /// Human-readable summary lines
    pub trace: Vec<String>,
    /// Rules that survived the dependency-closure filter
    pub rules_considered: usize,
    /// Rules in the full knowledge base
    pub rules_total: usize,
}

/// Prove a goal against the dependency-closure subset of the knowledge
/// base and summarize the outcome. Filtering never changes the answers;
/// it only shrinks the rule set the search walks over.
pub fn prove_goal(kb: &KnowledgeBase, query: &Predicate, interner: &Interner) -> ProofReport {
    let filtered = relevant_subset(kb, query);
    let solutions = ask(&filtered, query);
    let proved = !solutions.is_empty();

    let rendered = query.display(interner).to_string();
    let mut trace = Vec::new();
    if proved {
        trace.push(format!("Goal proved: {}", rendered));
        trace.push(format!("Solutions found: {}", solutions.len()));
        trace.push(format!(
            "Example substitution: {}",
            solutions[0].display(interner)
        ));
    } else {
        trace.push(format!("Goal failed: {}", rendered));
        trace.push("No substitutions returned.".to_string());
    }

    ProofReport {
        query: rendered,
        proved,
        solutions,
        trace,
        rules_considered: filtered.len(),
        rules_total: kb.len(),
    }
}
