// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # typewalk - type-rooted special attribute resolution
//!
//! A small object model (types with attribute tables and linearized ancestor
//! lists, instances with their own storage) and the lookup runtimes use for
//! protocol dispatch: find an attribute on the *type* of a value, skipping
//! the value's own storage, then apply the descriptor protocol.
//!
//! ## Quick Start
//!
//! ```rust
//! use typewalk::lookup::{lookup_special_method, lookup_special_or_default};
//! use typewalk::object::{Object, TypeBuilder};
//! use typewalk::{ErrorKind, Value};
//!
//! let t = TypeBuilder::new("T")
//!     .attr("x", Value::Int(7))
//!     .method("__enter__", |args| Ok(args[0].clone()))
//!     .build()
//!     .unwrap();
//! let u = TypeBuilder::new("U").base(&t).attr("x", Value::Int(9)).build().unwrap();
//!
//! let u_inst = Value::Object(Object::new(&u));
//!
//! // Subclass definitions shadow ancestors.
//! assert_eq!(lookup_special_method(&u_inst, &Value::str("x")).unwrap(), Value::Int(9));
//!
//! // Functions bind to the instance.
//! let enter = lookup_special_method(&u_inst, &Value::str("__enter__")).unwrap();
//! assert!(enter.call(&[]).unwrap().is(&u_inst));
//!
//! // Missing attributes.
//! let err = lookup_special_or_default(&u_inst, &Value::str("y"), None).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert!(lookup_special_method(&u_inst, &Value::str("y")).unwrap().is_none());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------+
//! |  Entry points   lookup_special_or_default / _method        |
//! +------------------------------------------------------------+
//! |  LookupEngine   [type] ++ ancestors, first match wins      |
//! |                 optional (type, name) slot cache           |
//! +------------------------------------------------------------+
//! |  Descriptors    Plain | NonDataDescriptor | DataDescriptor |
//! +------------------------------------------------------------+
//! |  Type graph     TypeObject, AttributeTable, builtins       |
//! +------------------------------------------------------------+
//! ```
//!
//! ## Thread safety
//!
//! Types are immutable once built and shared as `Arc`. Lookups from any
//! number of threads need no synchronization; only instance storage (which
//! lookups never touch) and the optional cache use locks internally.

pub mod builtins;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod lookup;
pub mod object;
pub mod value;

pub use config::LookupConfig;
pub use descriptor::{AttributeSlot, SlotKind};
pub use error::{Error, ErrorKind};
pub use lookup::{LookupEngine, LookupResult};
pub use object::{BuildError, Object, ObjectRef, TypeBuilder, TypeObject, TypeRef};
pub use value::Value;
