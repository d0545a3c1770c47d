//! Symbol interning for efficient comparison and compact terms
//!
//! Symbol names are stored once in per-type arenas and referenced by `u32`
//! IDs everywhere else. This gives O(1) comparison and hashing and lets
//! `Term` be `Copy`. Each symbol type has its own ID type:
//! - `VariableId` for variables
//! - `ConstantId` for constants
//! - `PredicateId` for predicate names
//!
//! The interner is built while rules and queries are constructed; during
//! search it is only read (for display), so a knowledge base and its
//! interner can be shared across concurrent queries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// ID for an interned variable name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(pub(crate) u32);

/// ID for an interned constant name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstantId(pub(crate) u32);

/// ID for an interned predicate name
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PredicateId(pub(crate) u32);

impl VariableId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl ConstantId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl PredicateId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Internal string arena for a single symbol type
#[derive(Debug, Clone, Default)]
struct StringArena {
    /// Interned strings, indexed by ID
    strings: Vec<String>,
    /// Lookup table from string to ID
    lookup: HashMap<String, u32>,
}

impl StringArena {
    fn new() -> Self {
        StringArena {
            strings: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Intern a string, returning its ID (get-or-create)
    fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    /// Resolve an ID to its string
    fn resolve(&self, id: u32) -> &str {
        &self.strings[id as usize]
    }

    /// Get the ID for an already-interned string (returns None if not found)
    fn get(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    /// Number of interned strings
    fn len(&self) -> usize {
        self.strings.len()
    }
}

/// Symbol interner for the Horn-clause language
///
/// Stores all symbol names in separate arenas for variables, constants,
/// and predicates. Passed through explicitly rather than held in global
/// state, so independent knowledge bases never share symbol tables.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    variables: StringArena,
    constants: StringArena,
    predicates: StringArena,
}

impl Interner {
    /// Create a new empty interner
    pub fn new() -> Self {
        Interner {
            variables: StringArena::new(),
            constants: StringArena::new(),
            predicates: StringArena::new(),
        }
    }

    // === Variable interning ===

    /// Intern a variable name, returning its ID (get-or-create)
    pub fn intern_variable(&mut self, name: &str) -> VariableId {
        VariableId(self.variables.intern(name))
    }

    /// Resolve a variable ID to its name
    pub fn resolve_variable(&self, id: VariableId) -> &str {
        self.variables.resolve(id.0)
    }

    /// Get the ID for an already-interned variable (returns None if not found)
    pub fn get_variable(&self, name: &str) -> Option<VariableId> {
        self.variables.get(name).map(VariableId)
    }

    /// Number of interned variable names
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    // === Constant interning ===

    /// Intern a constant name, returning its ID (get-or-create)
    pub fn intern_constant(&mut self, name: &str) -> ConstantId {
        ConstantId(self.constants.intern(name))
    }

    /// Resolve a constant ID to its name
    pub fn resolve_constant(&self, id: ConstantId) -> &str {
        self.constants.resolve(id.0)
    }

    /// Get the ID for an already-interned constant (returns None if not found)
    pub fn get_constant(&self, name: &str) -> Option<ConstantId> {
        self.constants.get(name).map(ConstantId)
    }

    /// Number of interned constant names
    pub fn constant_count(&self) -> usize {
        self.constants.len()
    }

    // === Predicate interning ===

    /// Intern a predicate name, returning its ID (get-or-create)
    pub fn intern_predicate(&mut self, name: &str) -> PredicateId {
        PredicateId(self.predicates.intern(name))
    }

    /// Resolve a predicate ID to its name
    pub fn resolve_predicate(&self, id: PredicateId) -> &str {
        self.predicates.resolve(id.0)
    }

    /// Get the ID for an already-interned predicate (returns None if not found)
    pub fn get_predicate(&self, name: &str) -> Option<PredicateId> {
        self.predicates.get(name).map(PredicateId)
    }

    /// Number of interned predicate names
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

// === Display implementations for debugging ===

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

impl fmt::Display for ConstantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

// === Serde implementations ===
// IDs serialize as raw u32; name resolution happens through display wrappers.

impl Serialize for VariableId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for VariableId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(VariableId)
    }
}

impl Serialize for ConstantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConstantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(ConstantId)
    }
}

impl Serialize for PredicateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PredicateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(PredicateId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_get_or_create() {
        let mut interner = Interner::new();
        let a = interner.intern_constant("john");
        let b = interner.intern_constant("john");
        let c = interner.intern_constant("mary");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.constant_count(), 2);
    }

    #[test]
    fn test_arenas_are_independent() {
        let mut interner = Interner::new();
        let v = interner.intern_variable("x");
        let c = interner.intern_constant("x");
        // Same spelling, different symbol types, both resolvable
        assert_eq!(interner.resolve_variable(v), "x");
        assert_eq!(interner.resolve_constant(c), "x");
    }

    #[test]
    fn test_get_without_intern() {
        let mut interner = Interner::new();
        assert_eq!(interner.get_predicate("parent"), None);
        let id = interner.intern_predicate("parent");
        assert_eq!(interner.get_predicate("parent"), Some(id));
    }
}
