//! Named properties captured for a single log event
//!
//! This module provides:
//! - `CapturedProperties`: the ordered set of properties for one event
//! - `PropertyCaptureBuilder`: fluent capture of several arguments through a converter

use super::converter::{Destructuring, PropertyValueConverter};
use super::error::Result;
use super::log_value::LogValue;
use super::property_value::{PropertyValue, TemplateProperty};
use std::fmt;

/// Properties captured for one log event, in capture order
///
/// Capturing a name twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapturedProperties {
    properties: Vec<TemplateProperty>,
}

impl CapturedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, replacing any existing one with the same name
    pub fn add(&mut self, property: TemplateProperty) {
        match self
            .properties
            .iter_mut()
            .find(|p| p.name() == property.name())
        {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.value())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateProperty> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Format properties as name=value pairs
    pub fn format_fields(&self) -> String {
        self.properties
            .iter()
            .map(|p| format!("{}={}", p.name(), p.value()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert to a JSON object keyed by property name
    #[cfg(feature = "json")]
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        crate::formatting::JsonValueFormatter::new().format_properties(self.iter())
    }
}

impl fmt::Display for CapturedProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl IntoIterator for CapturedProperties {
    type Item = TemplateProperty;
    type IntoIter = std::vec::IntoIter<TemplateProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

/// Fluent capture of log call arguments
///
/// # Example
///
/// ```
/// use rust_log_capture::prelude::*;
///
/// let converter = PropertyValueConverter::builder().build().unwrap();
/// let properties = converter
///     .capture()
///     .property("UserId", &42)
///     .stringify("Tags", &vec!["a", "b"])
///     .build()
///     .unwrap();
///
/// assert_eq!(properties.format_fields(), "UserId=42 Tags=\"[\\\"a\\\", \\\"b\\\"]\"");
/// ```
pub struct PropertyCaptureBuilder<'a> {
    converter: &'a PropertyValueConverter,
    properties: CapturedProperties,
    error: Option<super::error::CaptureError>,
}

impl<'a> PropertyCaptureBuilder<'a> {
    pub fn new(converter: &'a PropertyValueConverter) -> Self {
        Self {
            converter,
            properties: CapturedProperties::new(),
            error: None,
        }
    }

    /// Capture a value without destructuring
    #[must_use]
    pub fn property(self, name: impl Into<String>, value: &dyn LogValue) -> Self {
        self.capture(name, value, Destructuring::Default)
    }

    /// Capture a value, destructuring composite values into structures
    #[must_use]
    pub fn destructure(self, name: impl Into<String>, value: &dyn LogValue) -> Self {
        self.capture(name, value, Destructuring::Destructure)
    }

    /// Capture a value's default textual form
    #[must_use]
    pub fn stringify(self, name: impl Into<String>, value: &dyn LogValue) -> Self {
        self.capture(name, value, Destructuring::Stringify)
    }

    /// Capture with an explicit mode
    #[must_use]
    pub fn capture(
        mut self,
        name: impl Into<String>,
        value: &dyn LogValue,
        destructuring: Destructuring,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        let converted = self.converter.convert(value, destructuring);
        match TemplateProperty::new(name, converted) {
            Ok(property) => self.properties.add(property),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Finish, failing if any captured name was invalid
    pub fn build(self) -> Result<CapturedProperties> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.properties),
        }
    }
}

impl PropertyValueConverter {
    /// Start capturing several named arguments
    pub fn capture(&self) -> PropertyCaptureBuilder<'_> {
        PropertyCaptureBuilder::new(self)
    }
}
