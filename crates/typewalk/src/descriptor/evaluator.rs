// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptor evaluation.

use crate::descriptor::{AttributeSlot, Binder};
use crate::error::Error;
use crate::value::{BoundMethod, Value};
use std::sync::Arc;

/// Compute the effective value of `slot` accessed through `instance`.
///
/// Plain values come back unchanged. Descriptors bind when an instance is
/// given and return themselves otherwise. Failures raised while binding
/// (a getter raising, a non-callable getter) are returned untouched.
pub fn evaluate(slot: &AttributeSlot, instance: Option<&Value>) -> Result<Value, Error> {
    match (slot, instance) {
        (AttributeSlot::Plain(value), _) => Ok(value.clone()),
        (
            AttributeSlot::NonDataDescriptor(binder) | AttributeSlot::DataDescriptor(binder),
            Some(instance),
        ) => binder.bind(instance),
        (AttributeSlot::NonDataDescriptor(binder) | AttributeSlot::DataDescriptor(binder), None) => {
            Ok(binder.to_value())
        }
    }
}

impl Binder {
    /// Produce the instance-specific result.
    pub fn bind(&self, instance: &Value) -> Result<Value, Error> {
        match self {
            Binder::Method(func) => Ok(Value::BoundMethod(Arc::new(BoundMethod::new(
                Value::Function(Arc::clone(func)),
                instance.clone(),
            )))),
            Binder::Static(sm) => Ok(sm.func().clone()),
            Binder::Class(cm) => {
                let owner = Value::Type(Arc::clone(instance.type_of()));
                Ok(Value::BoundMethod(Arc::new(BoundMethod::new(
                    cm.func().clone(),
                    owner,
                ))))
            }
            Binder::GetSet(getset) => getset.get(instance),
            Binder::Property(prop) => match prop.getter() {
                Some(fget) => fget.call(std::slice::from_ref(instance)),
                None => Err(Error::NoGetter {
                    name: prop.name().to_string(),
                    type_name: instance.type_name().to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Object, TypeBuilder};
    use crate::value::{ClassMethod, GetSetDescriptor, Property, StaticMethod};

    fn instance() -> Value {
        let ty = TypeBuilder::new("T").build().unwrap();
        Value::Object(Object::new(&ty))
    }

    #[test]
    fn test_plain_ignores_instance() {
        let value = Value::str("same");
        let slot = AttributeSlot::classify(value.clone());
        assert!(evaluate(&slot, None).unwrap().is(&value));
        assert!(evaluate(&slot, Some(&instance())).unwrap().is(&value));
    }

    #[test]
    fn test_function_binds_to_instance() {
        let func = Value::function("get_self", |args| Ok(args[0].clone()));
        let slot = AttributeSlot::classify(func.clone());
        let inst = instance();

        let bound = evaluate(&slot, Some(&inst)).unwrap();
        let method = bound.as_bound_method().expect("bound method");
        assert!(method.receiver().is(&inst));
        assert!(method.func().is(&func));
        assert!(bound.call(&[]).unwrap().is(&inst));
    }

    #[test]
    fn test_unbound_returns_descriptor() {
        let func = Value::function("f", |_| Ok(Value::None));
        let slot = AttributeSlot::classify(func.clone());
        assert!(evaluate(&slot, None).unwrap().is(&func));

        let prop = Value::Property(Arc::new(Property::without_getter("p")));
        let slot = AttributeSlot::classify(prop.clone());
        assert!(evaluate(&slot, None).unwrap().is(&prop));
    }

    #[test]
    fn test_property_getter_called() {
        let fget = Value::function("answer", |_| Ok(Value::Int(42)));
        let prop = Value::Property(Arc::new(Property::new("answer", fget)));
        let slot = AttributeSlot::classify(prop);
        assert_eq!(evaluate(&slot, Some(&instance())).unwrap(), Value::Int(42));
    }

    #[test]
    fn test_property_without_getter() {
        let prop = Value::Property(Arc::new(Property::without_getter("p")));
        let slot = AttributeSlot::classify(prop);
        let err = evaluate(&slot, Some(&instance())).unwrap_err();
        assert_eq!(err.to_string(), "property 'p' of 'T' object has no getter");
    }

    #[test]
    fn test_getter_error_propagates_verbatim() {
        let raised = Error::raise("ValueError", "getter exploded");
        let expected = raised.clone();
        let getset = GetSetDescriptor::new("bad", move |_| Err(raised.clone()));
        let slot = AttributeSlot::classify(Value::GetSet(Arc::new(getset)));
        assert_eq!(evaluate(&slot, Some(&instance())).unwrap_err(), expected);
    }

    #[test]
    fn test_static_and_class_methods() {
        let func = Value::function("f", |args| Ok(args.first().cloned().unwrap_or(Value::None)));
        let inst = instance();

        let sm = AttributeSlot::classify(Value::StaticMethod(Arc::new(StaticMethod::new(
            func.clone(),
        ))));
        assert!(evaluate(&sm, Some(&inst)).unwrap().is(&func));

        let cm = AttributeSlot::classify(Value::ClassMethod(Arc::new(ClassMethod::new(
            func.clone(),
        ))));
        let bound = evaluate(&cm, Some(&inst)).unwrap();
        let owner = bound.call(&[]).unwrap();
        assert!(owner.is(&Value::Type(Arc::clone(inst.type_of()))));
    }
}
