// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime errors raised by lookups and by user-supplied callables.
//!
//! A single [`Error`] type flows through the whole read path. Errors raised
//! by native bodies (property getters, functions) are returned by the lookup
//! engine exactly as produced, so callers see the original failure.

use std::fmt;

/// Type names in "no special attribute" messages are cut at this many chars.
const NOT_FOUND_TYPE_NAME_MAX: usize = 50;
/// Type names in "attribute name must be string" messages are cut here.
const USAGE_TYPE_NAME_MAX: usize = 200;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed malformed arguments (wrong type or count).
    Usage,
    /// The attribute is absent from the type and all of its ancestors.
    NotFound,
    /// A descriptor's bind operation or a called body failed.
    Evaluation,
}

/// Errors produced by the lookup entry points and by native callables.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The attribute name argument was not a string.
    AttributeNameType { got: String },
    /// Wrong number of positional arguments for a boundary function.
    ArgumentCount {
        function: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },
    /// No type in the search order defines the attribute.
    NoSpecialAttribute { type_name: String, name: String },
    /// A value was called that has no call behavior.
    NotCallable { type_name: String },
    /// A property without getter was read through an instance.
    NoGetter { name: String, type_name: String },
    /// Failure raised by native code, identified by an exception name.
    Raised { exception: String, message: String },
}

impl Error {
    /// Error raised from native code, e.g. `Error::raise("ValueError", "bad input")`.
    pub fn raise(exception: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Raised {
            exception: exception.into(),
            message: message.into(),
        }
    }

    pub(crate) fn attribute_name_type(type_name: &str) -> Self {
        Self::AttributeNameType {
            got: truncate(type_name, USAGE_TYPE_NAME_MAX),
        }
    }

    pub(crate) fn no_special_attribute(type_name: &str, name: &str) -> Self {
        Self::NoSpecialAttribute {
            type_name: truncate(type_name, NOT_FOUND_TYPE_NAME_MAX),
            name: name.to_string(),
        }
    }

    pub(crate) fn not_callable(type_name: &str) -> Self {
        Self::NotCallable {
            type_name: type_name.to_string(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AttributeNameType { .. } | Self::ArgumentCount { .. } => ErrorKind::Usage,
            Self::NoSpecialAttribute { .. } => ErrorKind::NotFound,
            Self::NotCallable { .. } | Self::NoGetter { .. } | Self::Raised { .. } => {
                ErrorKind::Evaluation
            }
        }
    }

    /// Name of the exception class a host would surface for this error.
    pub fn exception_name(&self) -> &str {
        match self {
            Self::AttributeNameType { .. } | Self::ArgumentCount { .. } => "TypeError",
            Self::NotCallable { .. } => "TypeError",
            Self::NoSpecialAttribute { .. } | Self::NoGetter { .. } => "AttributeError",
            Self::Raised { exception, .. } => exception,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeNameType { got } => {
                write!(f, "attribute name must be string, not '{}'", got)
            }
            Self::ArgumentCount {
                function,
                min,
                max,
                got,
            } => {
                let plural = |n: usize| if n == 1 { "argument" } else { "arguments" };
                if min == max {
                    write!(f, "{} expected {} {}, got {}", function, min, plural(*min), got)
                } else if got < min {
                    write!(
                        f,
                        "{} expected at least {} {}, got {}",
                        function,
                        min,
                        plural(*min),
                        got
                    )
                } else {
                    write!(
                        f,
                        "{} expected at most {} {}, got {}",
                        function,
                        max,
                        plural(*max),
                        got
                    )
                }
            }
            Self::NoSpecialAttribute { type_name, name } => {
                write!(f, "'{}' object has no special attribute '{}'", type_name, name)
            }
            Self::NotCallable { type_name } => write!(f, "'{}' object is not callable", type_name),
            Self::NoGetter { name, type_name } => {
                write!(f, "property '{}' of '{}' object has no getter", name, type_name)
            }
            Self::Raised { exception, message } => write!(f, "{}: {}", exception, message),
        }
    }
}

impl std::error::Error for Error {}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Error::attribute_name_type("int").kind(), ErrorKind::Usage);
        assert_eq!(
            Error::no_special_attribute("T", "y").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(Error::raise("ValueError", "x").kind(), ErrorKind::Evaluation);
        assert_eq!(Error::not_callable("int").kind(), ErrorKind::Evaluation);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::attribute_name_type("int").to_string(),
            "attribute name must be string, not 'int'"
        );
        assert_eq!(
            Error::no_special_attribute("U", "y").to_string(),
            "'U' object has no special attribute 'y'"
        );
        assert_eq!(
            Error::raise("RuntimeError", "boom").to_string(),
            "RuntimeError: boom"
        );
    }

    #[test]
    fn test_argument_count_messages() {
        let few = Error::ArgumentCount {
            function: "lookup_special",
            min: 2,
            max: 3,
            got: 1,
        };
        assert_eq!(
            few.to_string(),
            "lookup_special expected at least 2 arguments, got 1"
        );

        let many = Error::ArgumentCount {
            function: "lookup_special",
            min: 2,
            max: 3,
            got: 4,
        };
        assert_eq!(
            many.to_string(),
            "lookup_special expected at most 3 arguments, got 4"
        );

        let exact = Error::ArgumentCount {
            function: "lookup_special_method",
            min: 2,
            max: 2,
            got: 3,
        };
        assert_eq!(
            exact.to_string(),
            "lookup_special_method expected 2 arguments, got 3"
        );
    }

    #[test]
    fn test_type_name_truncated() {
        let long = "X".repeat(80);
        match Error::no_special_attribute(&long, "y") {
            Error::NoSpecialAttribute { type_name, .. } => assert_eq!(type_name.len(), 50),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_exception_names() {
        assert_eq!(Error::attribute_name_type("int").exception_name(), "TypeError");
        assert_eq!(
            Error::no_special_attribute("T", "y").exception_name(),
            "AttributeError"
        );
        assert_eq!(Error::raise("KeyError", "k").exception_name(), "KeyError");
    }
}
