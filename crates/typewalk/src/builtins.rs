// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in types.
//!
//! Process-wide immortal singletons, initialized once on first use and never
//! torn down. The lookup engine only reads them through the generic
//! [`TypeObject`] accessors; the published-name table below is for hosts that
//! expose the types by name.

use crate::error::Error;
use crate::object::{AttributeTable, TypeObject, TypeRef};
use crate::value::{GetSetDescriptor, Value};
use std::sync::{Arc, OnceLock};

static BUILTINS: OnceLock<BuiltinTypes> = OnceLock::new();

/// The built-in type singletons.
#[derive(Debug)]
pub struct BuiltinTypes {
    /// Universal root; every ancestor list ends here.
    pub object: TypeRef,
    /// Metatype of all type objects.
    pub type_type: TypeRef,
    pub none_type: TypeRef,
    pub bool_type: TypeRef,
    pub int_type: TypeRef,
    pub float_type: TypeRef,
    pub str_type: TypeRef,
    pub function: TypeRef,
    pub builtin_function: TypeRef,
    pub method: TypeRef,
    pub property: TypeRef,
    pub staticmethod: TypeRef,
    pub classmethod: TypeRef,
    pub getset_descriptor: TypeRef,
}

/// Get the built-in types, initializing them on first call.
pub fn builtins() -> &'static BuiltinTypes {
    BUILTINS.get_or_init(BuiltinTypes::init)
}

impl BuiltinTypes {
    fn init() -> Self {
        let mut object_table = AttributeTable::new();
        object_table.insert(
            "__class__",
            Value::GetSet(Arc::new(
                GetSetDescriptor::new("__class__", |inst| {
                    Ok(Value::Type(Arc::clone(inst.type_of())))
                })
                .with_setter(|inst, _| {
                    Err(Error::raise(
                        "TypeError",
                        format!(
                            "__class__ assignment not supported for '{}' objects",
                            inst.type_name()
                        ),
                    ))
                }),
            )),
        );
        let object = TypeObject::from_parts("object", object_table, Vec::new(), Vec::new());

        let derived = |name: &str, table: AttributeTable| {
            TypeObject::from_parts(
                name,
                table,
                vec![Arc::clone(&object)],
                vec![Arc::clone(&object)],
            )
        };

        let mut type_table = AttributeTable::new();
        type_table.insert(
            "__name__",
            Value::GetSet(Arc::new(GetSetDescriptor::new("__name__", |inst| match inst {
                Value::Type(t) => Ok(Value::Str(t.name_arc())),
                other => Err(Error::raise(
                    "TypeError",
                    format!(
                        "descriptor '__name__' for 'type' objects doesn't apply to a '{}' object",
                        other.type_name()
                    ),
                )),
            }))),
        );

        let int_type = derived("int", AttributeTable::new());
        let bool_type = TypeObject::from_parts(
            "bool",
            AttributeTable::new(),
            vec![Arc::clone(&int_type)],
            vec![Arc::clone(&int_type), Arc::clone(&object)],
        );

        let types = Self {
            type_type: derived("type", type_table),
            none_type: derived("NoneType", AttributeTable::new()),
            bool_type,
            int_type,
            float_type: derived("float", AttributeTable::new()),
            str_type: derived("str", AttributeTable::new()),
            function: derived("function", AttributeTable::new()),
            builtin_function: derived("builtin_function_or_method", AttributeTable::new()),
            method: derived("method", AttributeTable::new()),
            property: derived("property", AttributeTable::new()),
            staticmethod: derived("staticmethod", AttributeTable::new()),
            classmethod: derived("classmethod", AttributeTable::new()),
            getset_descriptor: derived("getset_descriptor", AttributeTable::new()),
            object,
        };
        log::debug!("[builtins] initialized built-in types (root id={})", types.object.id());
        types
    }
}

/// Public names under which built-in types are exposed, in name order.
pub const PUBLISHED_NAMES: &[&str] = &[
    "BuiltinFunctionType",
    "BuiltinMethodType",
    "FunctionType",
    "GetSetDescriptorType",
    "LambdaType",
    "MethodType",
    "NoneType",
];

impl BuiltinTypes {
    /// Resolve a published name. Aliases share identity.
    fn published(&self, name: &str) -> Option<&TypeRef> {
        match name {
            "BuiltinFunctionType" | "BuiltinMethodType" => Some(&self.builtin_function),
            "FunctionType" | "LambdaType" => Some(&self.function),
            "GetSetDescriptorType" => Some(&self.getset_descriptor),
            "MethodType" => Some(&self.method),
            "NoneType" => Some(&self.none_type),
            _ => None,
        }
    }
}

/// All published `(name, type)` pairs, in name order.
pub fn published_types() -> Vec<(&'static str, TypeRef)> {
    let b = builtins();
    PUBLISHED_NAMES
        .iter()
        .filter_map(|name| b.published(name).map(|ty| (*name, Arc::clone(ty))))
        .collect()
}

/// Published type by name.
pub fn published_type(name: &str) -> Option<TypeRef> {
    builtins().published(name).map(Arc::clone)
}
