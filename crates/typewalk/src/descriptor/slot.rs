// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Classified attribute slots.

use crate::value::{ClassMethod, Function, GetSetDescriptor, Property, StaticMethod, Value};
use std::sync::Arc;

/// Kind tag of an [`AttributeSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Plain,
    NonDataDescriptor,
    DataDescriptor,
}

/// How a descriptor produces its instance-specific result.
#[derive(Debug, Clone)]
pub enum Binder {
    /// Function: binds into a method over the instance.
    Method(Arc<Function>),
    /// Static method: yields the wrapped callable.
    Static(Arc<StaticMethod>),
    /// Class method: binds the wrapped callable to the instance's type.
    Class(Arc<ClassMethod>),
    /// Native getter.
    GetSet(Arc<GetSetDescriptor>),
    /// Property: calls its getter with the instance.
    Property(Arc<Property>),
}

impl Binder {
    /// The descriptor as a value (same identity as what was stored).
    pub fn to_value(&self) -> Value {
        match self {
            Binder::Method(f) => Value::Function(Arc::clone(f)),
            Binder::Static(s) => Value::StaticMethod(Arc::clone(s)),
            Binder::Class(c) => Value::ClassMethod(Arc::clone(c)),
            Binder::GetSet(g) => Value::GetSet(Arc::clone(g)),
            Binder::Property(p) => Value::Property(Arc::clone(p)),
        }
    }
}

/// An attribute stored in a type's table.
#[derive(Debug, Clone)]
pub enum AttributeSlot {
    /// Returned as-is.
    Plain(Value),
    /// Binds on instance access; has no setter.
    NonDataDescriptor(Binder),
    /// Binds on instance access; also has a setter.
    DataDescriptor(Binder),
}

impl AttributeSlot {
    /// Classify `value` by the capabilities it exposes.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Function(f) => Self::NonDataDescriptor(Binder::Method(f)),
            Value::StaticMethod(s) => Self::NonDataDescriptor(Binder::Static(s)),
            Value::ClassMethod(c) => Self::NonDataDescriptor(Binder::Class(c)),
            Value::GetSet(g) if g.has_setter() => Self::DataDescriptor(Binder::GetSet(g)),
            Value::GetSet(g) => Self::NonDataDescriptor(Binder::GetSet(g)),
            Value::Property(p) => Self::DataDescriptor(Binder::Property(p)),
            other => Self::Plain(other),
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Self::Plain(_) => SlotKind::Plain,
            Self::NonDataDescriptor(_) => SlotKind::NonDataDescriptor,
            Self::DataDescriptor(_) => SlotKind::DataDescriptor,
        }
    }

    /// The stored value, unevaluated.
    pub fn value(&self) -> Value {
        match self {
            Self::Plain(v) => v.clone(),
            Self::NonDataDescriptor(b) | Self::DataDescriptor(b) => b.to_value(),
        }
    }
}
