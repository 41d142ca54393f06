// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-type attribute tables.

use crate::descriptor::AttributeSlot;
use crate::value::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Attributes defined directly on one type, keyed by exact name.
///
/// Values are classified into an [`AttributeSlot`] when stored, so lookups
/// never re-inspect the value to decide how to evaluate it.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    slots: HashMap<Arc<str>, AttributeSlot>,
}

impl AttributeTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name`, replacing (and returning) any previous slot.
    pub fn insert(&mut self, name: impl Into<Arc<str>>, value: Value) -> Option<AttributeSlot> {
        self.slots.insert(name.into(), AttributeSlot::classify(value))
    }

    /// Slot stored under `name`.
    pub fn get(&self, name: &str) -> Option<&AttributeSlot> {
        self.slots.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no attributes are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Attribute names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(|k| &**k).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SlotKind;

    #[test]
    fn test_insert_classifies() {
        let mut table = AttributeTable::new();
        table.insert("x", Value::Int(7));
        table.insert("f", Value::function("f", |_| Ok(Value::None)));

        assert_eq!(table.get("x").map(AttributeSlot::kind), Some(SlotKind::Plain));
        assert_eq!(
            table.get("f").map(AttributeSlot::kind),
            Some(SlotKind::NonDataDescriptor)
        );
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = AttributeTable::new();
        assert!(table.insert("x", Value::Int(1)).is_none());
        let previous = table.insert("x", Value::Int(2));
        assert!(previous.is_some());
        assert_eq!(table.len(), 1);
        assert_eq!(table.names(), ["x"]);
    }

    #[test]
    fn test_exact_name_match() {
        let mut table = AttributeTable::new();
        table.insert("__enter__", Value::Int(1));
        assert!(table.contains("__enter__"));
        assert!(!table.contains("__ENTER__"));
        assert!(!table.contains("__enter"));
    }
}
