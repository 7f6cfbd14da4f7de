//! JSON output for captured values

use super::TYPE_TAG_PROPERTY;
use crate::core::{PropertyValue, Result, TemplateProperty};
use serde_json::{Map, Value};

/// Formats captured values as JSON
///
/// # Example
///
/// ```
/// use rust_log_capture::prelude::*;
/// use rust_log_capture::formatting::JsonValueFormatter;
///
/// let converter = PropertyValueConverter::builder().build().unwrap();
/// let value = converter.convert(&vec![1, 2], Destructuring::Default);
///
/// let json = JsonValueFormatter::new().format(&value);
/// assert_eq!(json, serde_json::json!([1, 2]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonValueFormatter {
    pretty: bool,
}

impl JsonValueFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Formatter whose text output is indented
    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }

    /// Convert a captured value to a JSON value
    #[must_use]
    pub fn format(&self, value: &PropertyValue) -> Value {
        // Serializing into a Value only fails for non-string map keys, which
        // PropertyValue never produces
        serde_json::to_value(value).unwrap_or(Value::Null)
    }

    /// Convert properties to one JSON object keyed by name
    #[must_use]
    pub fn format_properties<'a>(
        &self,
        properties: impl IntoIterator<Item = &'a TemplateProperty>,
    ) -> Value {
        let object: Map<String, Value> = properties
            .into_iter()
            .map(|p| (p.name().to_string(), self.format(p.value())))
            .collect();
        Value::Object(object)
    }

    /// Write a captured value as JSON text
    pub fn to_text(&self, value: &PropertyValue) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }

    pub fn type_tag_property(&self) -> &'static str {
        TYPE_TAG_PROPERTY
    }
}
