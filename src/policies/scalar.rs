//! Built-in scalar conversion policies, in the order the converter tries them

use super::scalar_types::{self, ScalarType};
use super::{PropertyValueFactory, ScalarConversionPolicy};
use crate::core::{LogValue, Scalar, ScalarValue};
use std::any::TypeId;
use std::collections::HashMap;

/// Byte sequences longer than this are summarized rather than encoded in full
pub const MAXIMUM_BYTE_SEQUENCE_LENGTH: usize = 1024;

/// Leading bytes kept when summarizing a long byte sequence
pub const SUMMARIZED_BYTE_COUNT: usize = 16;

/// Wraps values of built-in and caller-registered scalar types verbatim
#[derive(Debug, Default)]
pub struct BuiltInScalarConversionPolicy {
    additional: HashMap<TypeId, ScalarType>,
}

impl BuiltInScalarConversionPolicy {
    pub fn new(additional_scalar_types: impl IntoIterator<Item = ScalarType>) -> Self {
        Self {
            additional: additional_scalar_types
                .into_iter()
                .map(|t| (t.type_id(), t))
                .collect(),
        }
    }
}

impl ScalarConversionPolicy for BuiltInScalarConversionPolicy {
    fn try_convert_to_scalar(
        &self,
        value: &dyn LogValue,
        _factory: &dyn PropertyValueFactory,
    ) -> Option<ScalarValue> {
        let any = value.as_any();
        let type_id = any.type_id();
        scalar_types::built_in(type_id)
            .or_else(|| self.additional.get(&type_id))
            .and_then(|t| t.construct(any))
            .map(ScalarValue::new)
    }
}

/// Unwraps optionally-absent values; absent becomes null
#[derive(Debug, Default)]
pub struct NullableScalarConversionPolicy;

impl ScalarConversionPolicy for NullableScalarConversionPolicy {
    fn try_convert_to_scalar(
        &self,
        value: &dyn LogValue,
        factory: &dyn PropertyValueFactory,
    ) -> Option<ScalarValue> {
        match value.as_optional()? {
            None => Some(ScalarValue::null()),
            Some(inner) => factory.convert_to_scalar(inner),
        }
    }
}

/// Captures enumerated constants, leaving symbolic or numeric display to renderers
#[derive(Debug, Default)]
pub struct EnumScalarConversionPolicy;

impl ScalarConversionPolicy for EnumScalarConversionPolicy {
    fn try_convert_to_scalar(
        &self,
        value: &dyn LogValue,
        _factory: &dyn PropertyValueFactory,
    ) -> Option<ScalarValue> {
        value
            .as_enum_constant()
            .map(|constant| ScalarValue::new(Scalar::Enum(constant)))
    }
}

/// Encodes byte sequences (`Vec<u8>`, `[u8; N]`, `Bytes`) as uppercase hex
///
/// Sequences over `MAXIMUM_BYTE_SEQUENCE_LENGTH` bytes keep only the first
/// `SUMMARIZED_BYTE_COUNT` bytes, followed by `... (N bytes)`.
#[derive(Debug, Default)]
pub struct ByteSequenceScalarConversionPolicy;

impl ByteSequenceScalarConversionPolicy {
    pub fn encode(bytes: &[u8]) -> String {
        if bytes.len() > MAXIMUM_BYTE_SEQUENCE_LENGTH {
            format!(
                "{}... ({} bytes)",
                hex::encode_upper(&bytes[..SUMMARIZED_BYTE_COUNT]),
                bytes.len()
            )
        } else {
            hex::encode_upper(bytes)
        }
    }
}

impl ScalarConversionPolicy for ByteSequenceScalarConversionPolicy {
    fn try_convert_to_scalar(
        &self,
        value: &dyn LogValue,
        _factory: &dyn PropertyValueFactory,
    ) -> Option<ScalarValue> {
        value
            .as_bytes()
            .or_else(|| value.as_any().downcast_ref::<Vec<u8>>().map(Vec::as_slice))
            .map(|bytes| ScalarValue::new(Scalar::String(Self::encode(bytes))))
    }
}
