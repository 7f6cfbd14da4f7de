//! Built-in destructuring policies, tried after caller-supplied ones

use super::{DestructuringPolicy, PropertyValueFactory};
use crate::core::{LogValue, PropertyValue, Scalar, ScalarValue};

/// Function-like values are captured by signature, never introspected
#[derive(Debug, Default)]
pub struct CallableDestructuringPolicy;

impl DestructuringPolicy for CallableDestructuringPolicy {
    fn try_destructure(
        &self,
        value: &dyn LogValue,
        _factory: &dyn PropertyValueFactory,
    ) -> Option<PropertyValue> {
        let signature = value.as_callable()?;
        Some(ScalarValue::new(Scalar::String(signature.to_string())).into())
    }
}

/// Type and member descriptors are captured by name
#[derive(Debug, Default)]
pub struct TypeDescriptorDestructuringPolicy;

impl DestructuringPolicy for TypeDescriptorDestructuringPolicy {
    fn try_destructure(
        &self,
        value: &dyn LogValue,
        _factory: &dyn PropertyValueFactory,
    ) -> Option<PropertyValue> {
        let name = value.as_type_descriptor()?;
        Some(ScalarValue::new(Scalar::String(name.to_string())).into())
    }
}
