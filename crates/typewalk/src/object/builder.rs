// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for types.
//!
//! The builder is the only place a [`TypeObject`] gets created outside the
//! builtin table. It validates the bases and computes the ancestor list with
//! C3 linearization, so every built type satisfies the ancestor invariants
//! the lookup engine relies on.

use crate::builtins::builtins;
use crate::config::MAX_ANCESTORS;
use crate::error::Error;
use crate::object::{AttributeTable, TypeObject, TypeRef};
use crate::value::{ClassMethod, GetSetDescriptor, Property, StaticMethod, Value};
use std::fmt;
use std::sync::Arc;

/// Errors produced while building a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The type name is empty.
    EmptyName,
    /// The same base was listed twice.
    DuplicateBase { name: String },
    /// No consistent resolution order exists for the given bases.
    InconsistentHierarchy { bases: Vec<String> },
    /// The ancestor list would exceed [`MAX_ANCESTORS`].
    TooDeep { name: String, depth: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyName => write!(f, "type name is empty"),
            BuildError::DuplicateBase { name } => write!(f, "duplicate base class {}", name),
            BuildError::InconsistentHierarchy { bases } => write!(
                f,
                "cannot create a consistent method resolution order for bases {}",
                bases.join(", ")
            ),
            BuildError::TooDeep { name, depth } => write!(
                f,
                "type '{}' has {} ancestors (limit {})",
                name, depth, MAX_ANCESTORS
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Builder for creating [`TypeObject`] instances.
#[derive(Debug)]
pub struct TypeBuilder {
    name: String,
    bases: Vec<TypeRef>,
    table: AttributeTable,
}

impl TypeBuilder {
    /// Create a new builder. Without explicit bases the type derives from `object`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            table: AttributeTable::new(),
        }
    }

    /// Append a direct base.
    pub fn base(mut self, base: &TypeRef) -> Self {
        self.bases.push(Arc::clone(base));
        self
    }

    /// Define an attribute.
    pub fn attr(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.table.insert(name, value.into());
        self
    }

    /// Define a method from a native body. `args[0]` is the instance.
    pub fn method(
        self,
        name: &str,
        body: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        let func = Value::function(name, body);
        self.attr(name, func)
    }

    /// Define a read-only property from a native getter.
    pub fn property(
        self,
        name: &str,
        getter: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        let fget = Value::function(name, getter);
        self.attr(name, Value::Property(Arc::new(Property::new(name, fget))))
    }

    /// Define a static method from a native body.
    pub fn static_method(
        self,
        name: &str,
        body: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        let func = Value::function(name, body);
        self.attr(name, Value::StaticMethod(Arc::new(StaticMethod::new(func))))
    }

    /// Define a class method from a native body. `args[0]` is the type.
    pub fn class_method(
        self,
        name: &str,
        body: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        let func = Value::function(name, body);
        self.attr(name, Value::ClassMethod(Arc::new(ClassMethod::new(func))))
    }

    /// Define a native get-set slot.
    pub fn getset(self, descriptor: GetSetDescriptor) -> Self {
        let name = descriptor.name().to_string();
        self.attr(name, Value::GetSet(Arc::new(descriptor)))
    }

    /// Validate bases, linearize, and freeze the type.
    pub fn build(self) -> Result<TypeRef, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyName);
        }

        let bases = if self.bases.is_empty() {
            vec![Arc::clone(&builtins().object)]
        } else {
            self.bases
        };

        for (i, base) in bases.iter().enumerate() {
            if bases[..i].iter().any(|b| b.id() == base.id()) {
                return Err(BuildError::DuplicateBase {
                    name: base.name().to_string(),
                });
            }
        }

        let ancestors = linearize(&bases).ok_or_else(|| BuildError::InconsistentHierarchy {
            bases: bases.iter().map(|b| b.name().to_string()).collect(),
        })?;

        if ancestors.len() > MAX_ANCESTORS {
            return Err(BuildError::TooDeep {
                name: self.name,
                depth: ancestors.len(),
            });
        }

        let ty = TypeObject::from_parts(self.name, self.table, bases, ancestors);
        log::debug!(
            "[builder] built type '{}' (id={}, attrs={}) mro=[{}]",
            ty.name(),
            ty.id(),
            ty.attributes().len(),
            ty.ancestors()
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(ty)
    }
}

/// C3 linearization of the proper ancestors of a type with `bases`.
///
/// Merges each base's own search order with the base list itself. Returns
/// `None` when no order respects every local precedence constraint.
fn linearize(bases: &[TypeRef]) -> Option<Vec<TypeRef>> {
    let mut seqs: Vec<Vec<TypeRef>> = bases
        .iter()
        .map(|b| {
            std::iter::once(Arc::clone(b))
                .chain(b.ancestors().iter().cloned())
                .collect()
        })
        .collect();
    seqs.push(bases.to_vec());

    let mut out = Vec::new();
    loop {
        seqs.retain(|s| !s.is_empty());
        if seqs.is_empty() {
            return Some(out);
        }

        // First head that does not appear in the tail of any sequence.
        let next = seqs
            .iter()
            .map(|s| &s[0])
            .find(|head| {
                !seqs
                    .iter()
                    .any(|s| s[1..].iter().any(|t| t.id() == head.id()))
            })
            .cloned()?;

        for seq in &mut seqs {
            if seq[0].id() == next.id() {
                seq.remove(0);
            }
        }
        out.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ty: &TypeRef) -> Vec<&str> {
        ty.ancestors().iter().map(|t| t.name()).collect()
    }

    #[test]
    fn test_default_base_is_object() {
        let t = TypeBuilder::new("T").build().unwrap();
        assert_eq!(names(&t), ["object"]);
        assert_eq!(t.bases().len(), 1);
        assert!(t.ancestors().iter().all(|a| a.id() != t.id()));
    }

    #[test]
    fn test_single_inheritance_chain() {
        let a = TypeBuilder::new("A").build().unwrap();
        let b = TypeBuilder::new("B").base(&a).build().unwrap();
        let c = TypeBuilder::new("C").base(&b).build().unwrap();
        assert_eq!(names(&c), ["B", "A", "object"]);
    }

    #[test]
    fn test_diamond() {
        let a = TypeBuilder::new("A").build().unwrap();
        let b = TypeBuilder::new("B").base(&a).build().unwrap();
        let c = TypeBuilder::new("C").base(&a).build().unwrap();
        let d = TypeBuilder::new("D").base(&b).base(&c).build().unwrap();
        assert_eq!(names(&d), ["B", "C", "A", "object"]);
    }

    #[test]
    fn test_inconsistent_hierarchy() {
        let a = TypeBuilder::new("A").build().unwrap();
        let b = TypeBuilder::new("B").base(&a).build().unwrap();
        // A before its own subclass B cannot be linearized.
        let err = TypeBuilder::new("C").base(&a).base(&b).build().unwrap_err();
        assert!(matches!(err, BuildError::InconsistentHierarchy { .. }));
    }

    #[test]
    fn test_duplicate_base() {
        let a = TypeBuilder::new("A").build().unwrap();
        let err = TypeBuilder::new("B").base(&a).base(&a).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateBase {
                name: "A".to_string()
            }
        );
        assert_eq!(err.to_string(), "duplicate base class A");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            TypeBuilder::new("").build().unwrap_err(),
            BuildError::EmptyName
        );
    }

    #[test]
    fn test_builtin_bases() {
        let b = builtins();
        let my_int = TypeBuilder::new("MyInt").base(&b.int_type).build().unwrap();
        assert_eq!(names(&my_int), ["int", "object"]);
    }
}
