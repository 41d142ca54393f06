// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime values.
//!
//! Reference variants share their payload through `Arc`, so cloning a
//! [`Value`] never copies the underlying object and [`Value::is`] can compare
//! identities.

use crate::builtins::builtins;
use crate::error::Error;
use crate::object::{ObjectRef, TypeRef};
use std::fmt;
use std::sync::Arc;

/// Native body of a function: receives positional arguments.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, Error> + Send + Sync>;

/// Native getter of a get-set descriptor: receives the instance.
pub type GetterFn = Arc<dyn Fn(&Value) -> Result<Value, Error> + Send + Sync>;

/// Native setter of a get-set descriptor: receives the instance and new value.
pub type SetterFn = Arc<dyn Fn(&Value, Value) -> Result<(), Error> + Send + Sync>;

/// A value visible to the runtime.
#[derive(Clone, Debug)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),

    /// A type object (class).
    Type(TypeRef),
    /// An instance of a user-built type.
    Object(ObjectRef),

    /// Function defined on a type; binds to instances.
    Function(Arc<Function>),
    /// Builtin function; never binds.
    Builtin(Arc<Function>),
    /// Callable closed over a receiver.
    BoundMethod(Arc<BoundMethod>),

    // Descriptors
    Property(Arc<Property>),
    StaticMethod(Arc<StaticMethod>),
    ClassMethod(Arc<ClassMethod>),
    GetSet(Arc<GetSetDescriptor>),
}

impl Value {
    /// Create a string value.
    pub fn str(s: impl AsRef<str>) -> Self {
        Self::Str(Arc::from(s.as_ref()))
    }

    /// Wrap a native body as a function value (binds when stored on a type).
    pub fn function(
        name: impl Into<Arc<str>>,
        body: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        Self::Function(Arc::new(Function::new(name, body)))
    }

    /// Wrap a native body as a builtin function value (never binds).
    pub fn builtin(
        name: impl Into<Arc<str>>,
        body: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        Self::Builtin(Arc::new(Function::new(name, body)))
    }

    /// The type of this value.
    pub fn type_of(&self) -> &TypeRef {
        let b = builtins();
        match self {
            Self::None => &b.none_type,
            Self::Bool(_) => &b.bool_type,
            Self::Int(_) => &b.int_type,
            Self::Float(_) => &b.float_type,
            Self::Str(_) => &b.str_type,
            Self::Type(_) => &b.type_type,
            Self::Object(obj) => obj.type_ref(),
            Self::Function(_) => &b.function,
            Self::Builtin(_) => &b.builtin_function,
            Self::BoundMethod(_) => &b.method,
            Self::Property(_) => &b.property,
            Self::StaticMethod(_) => &b.staticmethod,
            Self::ClassMethod(_) => &b.classmethod,
            Self::GetSet(_) => &b.getset_descriptor,
        }
    }

    /// Name of this value's type.
    pub fn type_name(&self) -> &str {
        self.type_of().name()
    }

    /// Check if value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Try to get as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(&**s),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a type object.
    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get as a bound method.
    pub fn as_bound_method(&self) -> Option<&BoundMethod> {
        match self {
            Self::BoundMethod(m) => Some(m),
            _ => None,
        }
    }

    /// Identity comparison.
    ///
    /// Reference variants compare by pointer; immediates compare by value.
    pub fn is(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => Arc::ptr_eq(a, b),
            (Self::Type(a), Self::Type(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) | (Self::Builtin(a), Self::Builtin(b)) => {
                Arc::ptr_eq(a, b)
            }
            (Self::BoundMethod(a), Self::BoundMethod(b)) => Arc::ptr_eq(a, b),
            (Self::Property(a), Self::Property(b)) => Arc::ptr_eq(a, b),
            (Self::StaticMethod(a), Self::StaticMethod(b)) => Arc::ptr_eq(a, b),
            (Self::ClassMethod(a), Self::ClassMethod(b)) => Arc::ptr_eq(a, b),
            (Self::GetSet(a), Self::GetSet(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Call this value with positional arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        match self {
            Self::Function(f) | Self::Builtin(f) => f.call(args),
            Self::BoundMethod(m) => m.call(args),
            Self::StaticMethod(s) => s.func().call(args),
            other => Err(Error::not_callable(other.type_name())),
        }
    }
}

/// Equality: immediates and strings by content, everything else by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            _ => self.is(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Str(s) => write!(f, "'{}'", s),
            Self::Type(t) => write!(f, "<class '{}'>", t.name()),
            Self::Object(obj) => write!(f, "<{} object #{}>", obj.type_ref().name(), obj.id()),
            Self::Function(func) => write!(f, "<function {}>", func.name()),
            Self::Builtin(func) => write!(f, "<built-in function {}>", func.name()),
            Self::BoundMethod(m) => write!(f, "{}", m),
            Self::Property(p) => write!(f, "<property '{}'>", p.name()),
            Self::StaticMethod(s) => write!(f, "<staticmethod({})>", s.func()),
            Self::ClassMethod(c) => write!(f, "<classmethod({})>", c.func()),
            Self::GetSet(g) => write!(f, "<attribute '{}'>", g.name()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::str(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Arc::from(v))
    }
}

impl From<TypeRef> for Value {
    fn from(v: TypeRef) -> Self {
        Self::Type(v)
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Self::Object(v)
    }
}

// ---------------------------------------------------------------------------
// Callables
// ---------------------------------------------------------------------------

/// A named native function.
pub struct Function {
    name: Arc<str>,
    body: NativeFn,
}

impl Function {
    pub fn new(
        name: impl Into<Arc<str>>,
        body: impl Fn(&[Value]) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        (self.body)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}

/// A callable with its first argument fixed.
#[derive(Debug)]
pub struct BoundMethod {
    func: Value,
    receiver: Value,
}

impl BoundMethod {
    pub fn new(func: Value, receiver: Value) -> Self {
        Self { func, receiver }
    }

    /// The wrapped callable.
    pub fn func(&self) -> &Value {
        &self.func
    }

    /// The value the callable is closed over.
    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    /// Call with the receiver prepended to `args`.
    pub fn call(&self, args: &[Value]) -> Result<Value, Error> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(self.receiver.clone());
        full.extend_from_slice(args);
        self.func.call(&full)
    }
}

impl fmt::Display for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let func_name = match &self.func {
            Value::Function(func) | Value::Builtin(func) => func.name().to_string(),
            other => other.to_string(),
        };
        let owner = match &self.receiver {
            Value::Type(t) => t.name().to_string(),
            other => other.type_name().to_string(),
        };
        write!(f, "<bound method {}.{} of {}>", owner, func_name, self.receiver)
    }
}

// ---------------------------------------------------------------------------
// Descriptor values
// ---------------------------------------------------------------------------

/// Computed attribute with optional getter and setter callables.
///
/// Always a data descriptor, whether or not a setter is present.
#[derive(Debug)]
pub struct Property {
    name: Arc<str>,
    fget: Option<Value>,
    fset: Option<Value>,
}

impl Property {
    /// Property with a getter only.
    pub fn new(name: impl Into<Arc<str>>, fget: Value) -> Self {
        Self {
            name: name.into(),
            fget: Some(fget),
            fset: None,
        }
    }

    /// Property without any accessor; reading it through an instance fails.
    pub fn without_getter(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            fget: None,
            fset: None,
        }
    }

    /// Attach a setter callable.
    pub fn with_setter(mut self, fset: Value) -> Self {
        self.fset = Some(fset);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn getter(&self) -> Option<&Value> {
        self.fget.as_ref()
    }

    pub fn setter(&self) -> Option<&Value> {
        self.fset.as_ref()
    }
}

/// Wrapper whose binding yields the wrapped callable untouched.
#[derive(Debug)]
pub struct StaticMethod {
    func: Value,
}

impl StaticMethod {
    pub fn new(func: Value) -> Self {
        Self { func }
    }

    pub fn func(&self) -> &Value {
        &self.func
    }
}

/// Wrapper whose binding closes the callable over the instance's type.
#[derive(Debug)]
pub struct ClassMethod {
    func: Value,
}

impl ClassMethod {
    pub fn new(func: Value) -> Self {
        Self { func }
    }

    pub fn func(&self) -> &Value {
        &self.func
    }
}

/// Native accessor pair, the shape builtin types use for computed slots.
///
/// Without a setter it is a non-data descriptor, with one a data descriptor.
pub struct GetSetDescriptor {
    name: Arc<str>,
    getter: GetterFn,
    setter: Option<SetterFn>,
}

impl GetSetDescriptor {
    pub fn new(
        name: impl Into<Arc<str>>,
        getter: impl Fn(&Value) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            getter: Arc::new(getter),
            setter: None,
        }
    }

    pub fn with_setter(
        mut self,
        setter: impl Fn(&Value, Value) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(Arc::new(setter));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }

    /// Run the native getter for `instance`.
    pub fn get(&self, instance: &Value) -> Result<Value, Error> {
        (self.getter)(instance)
    }
}

impl fmt::Debug for GetSetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetSetDescriptor")
            .field("name", &self.name)
            .field("has_setter", &self.has_setter())
            .finish()
    }
}
