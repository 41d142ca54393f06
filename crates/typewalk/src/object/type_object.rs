// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type identities.

use crate::object::AttributeTable;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to an immutable type.
pub type TypeRef = Arc<TypeObject>;

static NEXT_TYPE_ID: AtomicU64 = AtomicU64::new(1);

/// A type: identity, own attributes, and resolution order.
///
/// Invariants (established by the builder, not re-checked here):
/// - `ancestors` never contains the type itself
/// - `ancestors` is finite, acyclic, and ends in the root type (empty for the root)
pub struct TypeObject {
    id: u64,
    name: Arc<str>,
    table: AttributeTable,
    bases: Vec<TypeRef>,
    ancestors: Vec<TypeRef>,
}

impl TypeObject {
    /// Assemble a type from already validated parts.
    pub(crate) fn from_parts(
        name: impl Into<Arc<str>>,
        table: AttributeTable,
        bases: Vec<TypeRef>,
        ancestors: Vec<TypeRef>,
    ) -> TypeRef {
        Arc::new(Self {
            id: NEXT_TYPE_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            table,
            bases,
            ancestors,
        })
    }

    /// Process-unique id; never reused.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Attributes defined directly on this type.
    pub fn attributes(&self) -> &AttributeTable {
        &self.table
    }

    /// Direct bases, in declaration order.
    pub fn bases(&self) -> &[TypeRef] {
        &self.bases
    }

    /// Proper ancestors, most specific first.
    pub fn ancestors(&self) -> &[TypeRef] {
        &self.ancestors
    }

    /// The type itself followed by its ancestors.
    pub fn search_order(&self) -> impl Iterator<Item = &TypeObject> {
        std::iter::once(self).chain(self.ancestors.iter().map(|t| &**t))
    }

    /// `true` if `other` is this type or one of its ancestors.
    pub fn is_subtype_of(&self, other: &TypeObject) -> bool {
        self.search_order().any(|t| t.id == other.id)
    }

    /// `true` for the universal root type.
    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }
}

impl PartialEq for TypeObject {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeObject {}

impl fmt::Debug for TypeObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ancestors: Vec<&str> = self.ancestors.iter().map(|t| t.name()).collect();
        f.debug_struct("TypeObject")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("attributes", &self.table.names())
            .field("ancestors", &ancestors)
            .finish()
    }
}
