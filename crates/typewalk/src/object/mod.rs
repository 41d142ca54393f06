// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type graph and instances.
//!
//! - **TypeObject**: immutable type identity with its own attribute table and
//!   its precomputed ancestor list (method resolution order, self excluded)
//! - **AttributeTable**: name -> classified [`AttributeSlot`]
//! - **Object**: instance of a type, carrying per-instance storage that the
//!   special lookup path never reads
//! - **TypeBuilder**: host-side construction, C3 linearization of ancestors
//!
//! Types are shared as [`TypeRef`] (`Arc<TypeObject>`) and are never mutated
//! after [`TypeBuilder::build`], which is what lets concurrent lookups read
//! them without locking.
//!
//! # Example
//!
//! ```
//! use typewalk::object::{Object, TypeBuilder};
//! use typewalk::Value;
//!
//! let base = TypeBuilder::new("T").attr("x", Value::Int(7)).build().unwrap();
//! let derived = TypeBuilder::new("U").base(&base).attr("x", Value::Int(9)).build().unwrap();
//!
//! let names: Vec<&str> = derived.search_order().map(|t| t.name()).collect();
//! assert_eq!(names, ["U", "T", "object"]);
//!
//! let u = Value::Object(Object::new(&derived));
//! assert_eq!(u.type_name(), "U");
//! ```
//!
//! [`AttributeSlot`]: crate::descriptor::AttributeSlot

mod builder;
mod instance;
mod table;
mod type_object;

pub use builder::{BuildError, TypeBuilder};
pub use instance::{Object, ObjectRef};
pub use table::AttributeTable;
pub use type_object::{TypeObject, TypeRef};
