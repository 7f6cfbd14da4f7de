//! Conversion policies consulted by the converter
//!
//! Two extension points decide how a value is represented:
//! - `ScalarConversionPolicy`: turns a value into a single scalar
//! - `DestructuringPolicy`: replaces structural decomposition of a value
//!   when destructuring is requested
//!
//! Policies are tried in order and the first match wins. They receive the
//! value and a `PropertyValueFactory` for nested conversions; going through
//! the factory keeps depth accounting intact.

pub mod destructuring;
pub mod scalar;
pub mod scalar_types;

use crate::core::{Destructuring, LogValue, PropertyValue, ScalarValue};

pub use destructuring::{CallableDestructuringPolicy, TypeDescriptorDestructuringPolicy};
pub use scalar::{
    BuiltInScalarConversionPolicy, ByteSequenceScalarConversionPolicy,
    EnumScalarConversionPolicy, NullableScalarConversionPolicy,
};
pub use scalar_types::{is_built_in_scalar, is_valid_dictionary_key, ScalarConstructor, ScalarType};

/// Converts nested values on behalf of a policy
pub trait PropertyValueFactory {
    /// Convert a value, `None` meaning absent
    fn create_property_value(
        &self,
        value: Option<&dyn LogValue>,
        destructuring: Destructuring,
    ) -> PropertyValue;

    /// Run only the scalar policy chain
    fn convert_to_scalar(&self, value: &dyn LogValue) -> Option<ScalarValue>;
}

/// Converts a value into a scalar, or declines
pub trait ScalarConversionPolicy: Send + Sync {
    fn try_convert_to_scalar(
        &self,
        value: &dyn LogValue,
        factory: &dyn PropertyValueFactory,
    ) -> Option<ScalarValue>;
}

/// Produces a custom representation for a value being destructured, or declines
pub trait DestructuringPolicy: Send + Sync {
    fn try_destructure(
        &self,
        value: &dyn LogValue,
        factory: &dyn PropertyValueFactory,
    ) -> Option<PropertyValue>;
}
