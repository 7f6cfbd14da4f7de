//! Structured values produced by capturing log call arguments
//!
//! A captured value is one of four shapes:
//! - `ScalarValue`: a single atomic value (including null)
//! - `SequenceValue`: an ordered list of values
//! - `DictionaryValue`: scalar keys mapped to values, in insertion order
//! - `StructureValue`: named properties with an optional type tag
//!
//! Trees are immutable once built and are `Send + Sync`.

use super::error::{CaptureError, Result};
use super::format_provider::FormatProvider;
use super::scalar::Scalar;
use indexmap::IndexMap;
use std::fmt;

/// A captured value
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Scalar(ScalarValue),
    Sequence(SequenceValue),
    Dictionary(DictionaryValue),
    Structure(StructureValue),
}

impl PropertyValue {
    /// Write the textual rendering of this value
    ///
    /// Sequences pass `format` on to their elements; dictionaries and
    /// structures only pass the provider.
    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        match self {
            PropertyValue::Scalar(v) => v.render(out, format, provider),
            PropertyValue::Sequence(v) => v.render(out, format, provider),
            PropertyValue::Dictionary(v) => v.render(out, format, provider),
            PropertyValue::Structure(v) => v.render(out, format, provider),
        }
    }

    /// Render to a new string
    pub fn to_string_with(
        &self,
        format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.render(&mut out, format, provider);
        out
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            PropertyValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceValue> {
        match self {
            PropertyValue::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&DictionaryValue> {
        match self {
            PropertyValue::Dictionary(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&StructureValue> {
        match self {
            PropertyValue::Structure(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, None, None)
    }
}

/// A single atomic value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScalarValue(Scalar);

impl ScalarValue {
    pub fn new(value: impl Into<Scalar>) -> Self {
        Self(value.into())
    }

    pub fn null() -> Self {
        Self(Scalar::Null)
    }

    pub fn value(&self) -> &Scalar {
        &self.0
    }

    pub fn into_inner(self) -> Scalar {
        self.0
    }

    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        self.0.render(out, format, provider)
    }
}

impl From<Scalar> for ScalarValue {
    fn from(value: Scalar) -> Self {
        Self(value)
    }
}

impl From<ScalarValue> for PropertyValue {
    fn from(value: ScalarValue) -> Self {
        PropertyValue::Scalar(value)
    }
}

/// An ordered, fixed-length list of values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceValue {
    elements: Vec<PropertyValue>,
}

impl SequenceValue {
    pub fn new(elements: impl IntoIterator<Item = PropertyValue>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn elements(&self) -> &[PropertyValue] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        out.write_char('[')?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            element.render(out, format, provider)?;
        }
        out.write_char(']')
    }
}

impl From<SequenceValue> for PropertyValue {
    fn from(value: SequenceValue) -> Self {
        PropertyValue::Sequence(value)
    }
}

/// Scalar keys mapped to values
///
/// Keys are unique; a repeated key keeps its first position and takes the
/// last value written for it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictionaryValue {
    elements: IndexMap<ScalarValue, PropertyValue>,
}

impl DictionaryValue {
    pub fn new(elements: impl IntoIterator<Item = (ScalarValue, PropertyValue)>) -> Self {
        let mut map = IndexMap::new();
        for (key, value) in elements {
            map.insert(key, value);
        }
        Self { elements: map }
    }

    pub fn elements(&self) -> &IndexMap<ScalarValue, PropertyValue> {
        &self.elements
    }

    pub fn get(&self, key: &ScalarValue) -> Option<&PropertyValue> {
        self.elements.get(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        _format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        out.write_char('[')?;
        for (i, (key, value)) in self.elements.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            out.write_char('(')?;
            key.render(out, None, provider)?;
            out.write_str(": ")?;
            value.render(out, None, provider)?;
            out.write_char(')')?;
        }
        out.write_char(']')
    }
}

impl From<DictionaryValue> for PropertyValue {
    fn from(value: DictionaryValue) -> Self {
        PropertyValue::Dictionary(value)
    }
}

/// Named properties captured from an object's members
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StructureValue {
    type_tag: Option<String>,
    properties: Vec<TemplateProperty>,
}

impl StructureValue {
    pub fn new(type_tag: Option<String>, properties: Vec<TemplateProperty>) -> Self {
        Self {
            type_tag,
            properties,
        }
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub fn properties(&self) -> &[TemplateProperty] {
        &self.properties
    }

    /// Look up a property by name
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        _format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        if let Some(tag) = &self.type_tag {
            out.write_str(tag)?;
            out.write_char(' ')?;
        }
        out.write_str("{ ")?;
        for (i, property) in self.properties.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            out.write_str(&property.name)?;
            out.write_str(": ")?;
            property.value.render(out, None, provider)?;
        }
        out.write_str(" }")
    }
}

impl From<StructureValue> for PropertyValue {
    fn from(value: StructureValue) -> Self {
        PropertyValue::Structure(value)
    }
}

/// A named property value
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateProperty {
    name: String,
    value: PropertyValue,
}

impl TemplateProperty {
    /// Create a property, rejecting empty or whitespace-only names
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Result<Self> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(CaptureError::property_name(name));
        }
        Ok(Self { name, value })
    }

    /// Callers guarantee the name is valid
    pub(crate) fn new_unchecked(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn into_parts(self) -> (String, PropertyValue) {
        (self.name, self.value)
    }
}

impl fmt::Display for TemplateProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
