//! Output formats for captured values
//!
//! `PropertyValue` implements `Serialize`, so captured trees can be written
//! with any serde data format. Scalars serialize as their natural JSON-like
//! type where one exists and as their default text otherwise; structures
//! carry their type tag under `TYPE_TAG_PROPERTY`.
//!
//! Structure properties and dictionary entries serialize in capture order.
//! Dictionary keys are written as the key's unquoted text, so keys that
//! render alike (the integer `1` and the string `"1"`) share one JSON key;
//! a `serde_json::Value` keeps the later entry.

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "json")]
pub use json::JsonValueFormatter;

use crate::core::{PropertyValue, Scalar, ScalarValue, TemplateProperty};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Key holding a structure's type tag in serialized output
pub const TYPE_TAG_PROPERTY: &str = "_typeTag";

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Scalar(value) => value.serialize(serializer),
            PropertyValue::Sequence(sequence) => {
                let mut seq = serializer.serialize_seq(Some(sequence.len()))?;
                for element in sequence.elements() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            PropertyValue::Dictionary(dictionary) => {
                let mut map = serializer.serialize_map(Some(dictionary.len()))?;
                // keys of different kinds can render to the same text
                for (key, value) in dictionary.elements() {
                    map.serialize_entry(&key.value().to_string(), value)?;
                }
                map.end()
            }
            PropertyValue::Structure(structure) => {
                let tagged = structure.type_tag().is_some() as usize;
                let mut map =
                    serializer.serialize_map(Some(structure.properties().len() + tagged))?;
                if let Some(tag) = structure.type_tag() {
                    map.serialize_entry(TYPE_TAG_PROPERTY, tag)?;
                }
                for property in structure.properties() {
                    map.serialize_entry(property.name(), property.value())?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::I8(v) => serializer.serialize_i8(*v),
            Scalar::I16(v) => serializer.serialize_i16(*v),
            Scalar::I32(v) => serializer.serialize_i32(*v),
            Scalar::I64(v) => serializer.serialize_i64(*v),
            Scalar::Isize(v) => serializer.serialize_i64(*v as i64),
            Scalar::U8(v) => serializer.serialize_u8(*v),
            Scalar::U16(v) => serializer.serialize_u16(*v),
            Scalar::U32(v) => serializer.serialize_u32(*v),
            Scalar::U64(v) => serializer.serialize_u64(*v),
            Scalar::Usize(v) => serializer.serialize_u64(*v as u64),
            // Not every format can hold 128-bit integers or non-finite floats
            Scalar::I128(v) if i64::try_from(*v).is_ok() => serializer.serialize_i64(*v as i64),
            Scalar::U128(v) if u64::try_from(*v).is_ok() => serializer.serialize_u64(*v as u64),
            Scalar::F32(v) if v.is_finite() => serializer.serialize_f32(*v),
            Scalar::F64(v) if v.is_finite() => serializer.serialize_f64(*v),
            Scalar::String(v) => serializer.serialize_str(v),
            other => serializer.collect_str(other),
        }
    }
}

impl Serialize for TemplateProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name(), self.value())?;
        map.end()
    }
}
