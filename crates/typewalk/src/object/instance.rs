// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Instances of built types.

use crate::object::TypeRef;
use crate::value::Value;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to an instance.
pub type ObjectRef = Arc<Object>;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// An instance: owning type plus per-instance attribute storage.
///
/// The storage exists for ordinary attribute access by the host. Special
/// lookups resolve through the type only and never read it.
pub struct Object {
    id: u64,
    ty: TypeRef,
    dict: RwLock<HashMap<Arc<str>, Value>>,
}

impl Object {
    /// Create an instance of `ty` with empty instance storage.
    pub fn new(ty: &TypeRef) -> ObjectRef {
        Arc::new(Self {
            id: NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed),
            ty: Arc::clone(ty),
            dict: RwLock::new(HashMap::new()),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The owning type.
    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    /// Store `value` in instance storage, returning the previous value.
    pub fn set_attr(&self, name: impl Into<Arc<str>>, value: Value) -> Option<Value> {
        self.dict.write().insert(name.into(), value)
    }

    /// Read from instance storage only.
    pub fn instance_attr(&self, name: &str) -> Option<Value> {
        self.dict.read().get(name).cloned()
    }

    /// Remove from instance storage.
    pub fn del_attr(&self, name: &str) -> Option<Value> {
        self.dict.write().remove(name)
    }

    /// Number of instance-level attributes.
    pub fn instance_attr_count(&self) -> usize {
        self.dict.read().len()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("id", &self.id)
            .field("type", &self.ty.name())
            .field("instance_attrs", &self.instance_attr_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::TypeBuilder;

    #[test]
    fn test_instance_storage() {
        let ty = TypeBuilder::new("T").build().unwrap();
        let obj = Object::new(&ty);

        assert!(obj.instance_attr("x").is_none());
        assert!(obj.set_attr("x", Value::Int(1)).is_none());
        assert_eq!(obj.instance_attr("x"), Some(Value::Int(1)));
        assert_eq!(obj.set_attr("x", Value::Int(2)), Some(Value::Int(1)));
        assert_eq!(obj.del_attr("x"), Some(Value::Int(2)));
        assert_eq!(obj.instance_attr_count(), 0);
    }

    #[test]
    fn test_distinct_ids() {
        let ty = TypeBuilder::new("T").build().unwrap();
        let a = Object::new(&ty);
        let b = Object::new(&ty);
        assert_ne!(a.id(), b.id());
        assert!(Arc::ptr_eq(a.type_ref(), b.type_ref()));
    }
}
