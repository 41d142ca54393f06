// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Public entry points over the global engine.
//!
//! Two independent contracts share one engine:
//!
//! - `lookup_special(object, name[, default])`: raises when the attribute is
//!   missing and no default is given
//! - `lookup_special_method(object, name)`: missing is a silent `None`
//!
//! The `call_*` variants take positional arguments the way a host's calling
//! convention delivers them and check the argument count first.

use crate::error::Error;
use crate::lookup::LookupEngine;
use crate::value::Value;

/// Look up `name` on the type of `instance`, skipping instance storage.
///
/// Returns `default` (same identity) when missing, or a not-found error if no
/// default was given. `name` must be a string.
pub fn lookup_special_or_default(
    instance: &Value,
    name: &Value,
    default: Option<&Value>,
) -> Result<Value, Error> {
    LookupEngine::global().lookup_special_or_default(instance, name, default)
}

/// Look up special method `name` on the type of `instance`.
///
/// Returns `Value::None` when missing. `name` must be a string.
pub fn lookup_special_method(instance: &Value, name: &Value) -> Result<Value, Error> {
    LookupEngine::global().lookup_special_method(instance, name)
}

/// `lookup_special(object, name[, default], /)` with positional arguments.
pub fn call_lookup_special(args: &[Value]) -> Result<Value, Error> {
    check_positional("lookup_special", args, 2, 3)?;
    lookup_special_or_default(&args[0], &args[1], args.get(2))
}

/// `lookup_special_method(obj, attr, /)` with positional arguments.
pub fn call_lookup_special_method(args: &[Value]) -> Result<Value, Error> {
    check_positional("lookup_special_method", args, 2, 2)?;
    lookup_special_method(&args[0], &args[1])
}

fn check_positional(
    function: &'static str,
    args: &[Value],
    min: usize,
    max: usize,
) -> Result<(), Error> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(Error::ArgumentCount {
            function,
            min,
            max,
            got: args.len(),
        })
    }
}
