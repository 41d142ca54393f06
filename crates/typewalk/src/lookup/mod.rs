// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Special attribute lookup.
//!
//! Resolves an attribute through the *type* of a value, never through the
//! value's own storage, then applies the descriptor protocol. This is the
//! path protocol dispatch uses (`__enter__`, `__iter__`, ...), where an
//! instance attribute with the same name must not shadow the type's.
//!
//! # Entry points
//!
//! - [`lookup_special_or_default`]: missing attribute -> default, or a
//!   not-found error when no default was given
//! - [`lookup_special_method`]: missing attribute -> `Value::None`
//! - [`call_lookup_special`] / [`call_lookup_special_method`]: the same two
//!   operations over positional argument slices, with arity checks
//!
//! All of them run on [`LookupEngine::global`]. Hosts wanting a private cache
//! or configuration create their own [`LookupEngine`].
//!
//! # Example
//!
//! ```
//! use typewalk::lookup::{lookup_special_method, lookup_special_or_default};
//! use typewalk::object::{Object, TypeBuilder};
//! use typewalk::Value;
//!
//! let t = TypeBuilder::new("T").attr("x", Value::Int(7)).build().unwrap();
//! let obj = Object::new(&t);
//! obj.set_attr("x", Value::Int(100)); // instance storage is ignored
//! let t_inst = Value::Object(obj);
//!
//! let x = lookup_special_method(&t_inst, &Value::str("x")).unwrap();
//! assert_eq!(x, Value::Int(7));
//!
//! let fallback = Value::str("fallback");
//! let y = lookup_special_or_default(&t_inst, &Value::str("y"), Some(&fallback)).unwrap();
//! assert!(y.is(&fallback));
//! ```

mod cache;
mod engine;
mod entry;

pub use cache::SlotCache;
pub use engine::{LookupEngine, LookupResult, LookupStats};
pub use entry::{
    call_lookup_special, call_lookup_special_method, lookup_special_method,
    lookup_special_or_default,
};
