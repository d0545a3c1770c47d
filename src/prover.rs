//! Backward-chaining SLD resolution search
//!
//! The search is depth-first, leftmost-goal, leftmost-rule, following the
//! knowledge base's declaration order. Search state is an explicit stack
//! of choice points owned by [`Solutions`], so a `next()` call uses
//! bounded native stack no matter how deep a proof gets: deep recursion
//! costs heap, not call frames. Each choice point remembers a resolved
//! goal, the substitution it was reached under, and the rule candidates
//! not yet tried (OR choices); the conjunction still owed once that goal
//! succeeds rides along as a pending-goal list (AND sequencing).
//!
//! There is no memoization and, by default, no depth or step limit: a
//! query over recursive rules with no terminating proof will not
//! terminate unless the caller opts into a budget through
//! [`ProverConfig`] or wraps the whole query in an external timeout.

use crate::kb::KnowledgeBase;
use crate::logic::{Predicate, Substitution};
use crate::standardize::{standardize_apart, VariableSupply};
use crate::unification::unify;

/// Search limits. Both default to `None`: unbounded search is the
/// documented default, and a budget is strictly opt-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProverConfig {
    /// Maximum number of rule attempts before the search stops yielding
    pub max_steps: Option<u64>,
    /// Maximum proof depth (rule applications along one branch)
    pub max_depth: Option<usize>,
}

/// Counters a running search keeps for its consumer.
#[derive(Debug, Default)]
pub struct SearchMeter {
    steps: u64,
    truncated: bool,
}

impl SearchMeter {
    /// Record one rule attempt; false once the step budget is spent.
    fn consume_step(&mut self, limit: Option<u64>) -> bool {
        let used = self.steps;
        self.steps += 1;
        if let Some(max) = limit {
            if used >= max {
                self.truncated = true;
                return false;
            }
        }
        true
    }

    fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    /// Rule attempts so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// True if any branch was cut off by a budget
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// One choice point: a goal resolved against the current substitution,
/// plus the rule candidates not yet tried for it. `pending` holds the
/// rest of the conjunction owed after this goal, each tagged with its
/// proof depth.
struct Frame<'a> {
    resolved: Predicate,
    theta: Substitution,
    depth: usize,
    pending: Vec<(Predicate, usize)>,
    candidates: &'a [usize],
    pos: usize,
}

/// Lazy, restartable sequence of satisfying substitutions.
///
/// Solutions arrive in proof order (depth-first, leftmost rule first).
/// When a budget from [`ProverConfig`] cuts the search short, the iterator
/// simply ends; [`Solutions::budget_exhausted`] tells truncation apart
/// from genuine exhaustion.
pub struct Solutions<'a> {
    kb: &'a KnowledgeBase,
    config: ProverConfig,
    supply: VariableSupply,
    meter: SearchMeter,
    stack: Vec<Frame<'a>>,
    ready: Option<Substitution>,
}

impl Iterator for Solutions<'_> {
    type Item = Substitution;

    fn next(&mut self) -> Option<Substitution> {
        if let Some(found) = self.ready.take() {
            return Some(found);
        }
        loop {
            let mut frame = self.stack.pop()?;
            if frame.pos >= frame.candidates.len() {
                continue;
            }
            let idx = frame.candidates[frame.pos];
            frame.pos += 1;
            let last_candidate = frame.pos >= frame.candidates.len();

            if !self.meter.consume_step(self.config.max_steps) {
                if !last_candidate {
                    self.stack.push(frame);
                }
                continue;
            }

            let rule = standardize_apart(&self.kb.rules()[idx], &self.supply);
            let theta1 = match unify(&rule.head, &frame.resolved, &frame.theta) {
                Err(_) => {
                    if !last_candidate {
                        self.stack.push(frame);
                    }
                    continue;
                }
                Ok(theta1) => theta1,
            };

            // Body goals go one level deeper; the inherited conjunction
            // keeps the depths it was tagged with.
            let child_depth = frame.depth + 1;
            let mut pending: Vec<(Predicate, usize)> = rule
                .body
                .into_iter()
                .map(|goal| (goal, child_depth))
                .collect();
            if last_candidate {
                // No alternatives remain here; hand over the conjunction
                // and let the spent frame go.
                pending.append(&mut frame.pending);
            } else {
                pending.extend(frame.pending.iter().cloned());
                self.stack.push(frame);
            }

            if let Some(found) = self.schedule(pending, theta1) {
                return Some(found);
            }
        }
    }
}

impl<'a> Solutions<'a> {
    /// Open a choice point for the first goal of `pending` under `theta`,
    /// or report `theta` as a solution when no goals remain.
    fn schedule(
        &mut self,
        mut pending: Vec<(Predicate, usize)>,
        theta: Substitution,
    ) -> Option<Substitution> {
        if pending.is_empty() {
            return Some(theta);
        }
        let (goal, depth) = pending.remove(0);
        if let Some(max) = self.config.max_depth {
            if depth > max {
                self.meter.mark_truncated();
                return None;
            }
        }
        let resolved = theta.substitute(&goal);
        let candidates = self.kb.candidates(resolved.signature());
        self.stack.push(Frame {
            resolved,
            theta,
            depth,
            pending,
            candidates,
            pos: 0,
        });
        None
    }

    /// True if a step or depth budget stopped the enumeration early
    pub fn budget_exhausted(&self) -> bool {
        self.meter.truncated()
    }

    /// Rule attempts consumed so far
    pub fn steps(&self) -> u64 {
        self.meter.steps()
    }
}

/// Per-query SLD search engine over a borrowed knowledge base.
///
/// The prover itself holds no search state: [`Prover::solve`] hands a
/// self-contained [`Solutions`] to the caller, sharing only the knowledge
/// base and the fresh-variable supply.
pub struct Prover<'a> {
    kb: &'a KnowledgeBase,
    config: ProverConfig,
    supply: VariableSupply,
}

impl<'a> Prover<'a> {
    /// Create a prover with default (unbounded) configuration, drawing
    /// fresh variables from the process-wide supply.
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Prover {
            kb,
            config: ProverConfig::default(),
            supply: VariableSupply::global(),
        }
    }

    /// Create a prover with explicit configuration
    pub fn with_config(kb: &'a KnowledgeBase, config: ProverConfig) -> Self {
        Prover {
            kb,
            config,
            supply: VariableSupply::global(),
        }
    }

    /// Use a caller-owned variable supply (deterministic generation
    /// numbers for tests; isolation between engines).
    pub fn with_supply(mut self, supply: VariableSupply) -> Self {
        self.supply = supply;
        self
    }

    /// Prove `goal` under the empty substitution, yielding every
    /// satisfying substitution lazily, in proof order.
    pub fn solve(&self, goal: &Predicate) -> Solutions<'a> {
        let mut solutions = Solutions {
            kb: self.kb,
            config: self.config,
            supply: self.supply.clone(),
            meter: SearchMeter::default(),
            stack: Vec::new(),
            ready: None,
        };
        solutions.ready = solutions.schedule(vec![(goal.clone(), 0)], Substitution::new());
        solutions
    }
}
