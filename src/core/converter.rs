//! Conversion of log call arguments into property values
//!
//! For a value and a destructuring mode the converter:
//! 1. returns null for an absent value
//! 2. flattens to text under `Stringify`
//! 3. tries the scalar policies in order
//! 4. under `Destructure`, tries the destructuring policies in order
//!    (caller-supplied first, then built-ins)
//! 5. converts mappings to dictionaries (or sequences of pairs when the key
//!    type cannot key a dictionary) and enumerables to sequences
//! 6. under `Destructure`, captures the value's members as a structure
//! 7. otherwise flattens to text
//!
//! Nested values go through a `DepthLimiter`, which bounds recursion.

use super::config::ConverterConfig;
use super::depth_limiter::DepthLimiter;
use super::error::Result;
use super::log_value::{LogValue, Mapping, Member};
use super::property_value::{
    DictionaryValue, PropertyValue, ScalarValue, SequenceValue, StructureValue, TemplateProperty,
};
use super::scalar::Scalar;
use super::self_log::self_log;
use crate::policies::{
    is_valid_dictionary_key, BuiltInScalarConversionPolicy, ByteSequenceScalarConversionPolicy,
    CallableDestructuringPolicy, DestructuringPolicy, EnumScalarConversionPolicy,
    NullableScalarConversionPolicy, PropertyValueFactory, ScalarConversionPolicy, ScalarType,
    TypeDescriptorDestructuringPolicy,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// How a value should be captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Destructuring {
    /// Scalars stay scalars, collections are walked, other values become text
    #[default]
    Default,
    /// Decompose composite values into structures
    Destructure,
    /// Always use the default textual form
    Stringify,
}

/// Converts arbitrary values into property values
///
/// The policy chain and limits are fixed at construction, so one converter
/// can serve concurrent callers.
///
/// # Example
///
/// ```
/// use rust_log_capture::prelude::*;
///
/// let converter = PropertyValueConverter::builder()
///     .maximum_destructuring_depth(5)
///     .build()
///     .unwrap();
///
/// let value = converter.convert(&vec![1, 2, 3], Destructuring::Default);
/// assert_eq!(value.to_string(), "[1, 2, 3]");
/// ```
pub struct PropertyValueConverter {
    maximum_destructuring_depth: usize,
    maximum_string_length: Option<usize>,
    maximum_collection_count: Option<usize>,
    scalar_policies: Vec<Box<dyn ScalarConversionPolicy>>,
    destructuring_policies: Vec<Box<dyn DestructuringPolicy>>,
}

impl PropertyValueConverter {
    /// Create a converter with the given depth, extra scalar types and extra
    /// destructuring policies
    ///
    /// Fails when `maximum_destructuring_depth` is negative.
    pub fn new(
        maximum_destructuring_depth: i32,
        additional_scalar_types: Vec<ScalarType>,
        additional_destructuring_policies: Vec<Box<dyn DestructuringPolicy>>,
    ) -> Result<Self> {
        let mut builder = Self::builder()
            .maximum_destructuring_depth(maximum_destructuring_depth)
            .scalar_types(additional_scalar_types);
        for policy in additional_destructuring_policies {
            builder = builder.destructuring_policy_boxed(policy);
        }
        builder.build()
    }

    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    pub fn maximum_destructuring_depth(&self) -> usize {
        self.maximum_destructuring_depth
    }

    /// Capture a named value, destructuring it when `destructure` is set
    ///
    /// Fails only when `name` is empty or whitespace.
    pub fn create_property(
        &self,
        name: impl Into<String>,
        value: &dyn LogValue,
        destructure: bool,
    ) -> Result<TemplateProperty> {
        let destructuring = if destructure {
            Destructuring::Destructure
        } else {
            Destructuring::Default
        };
        TemplateProperty::new(name, self.convert(value, destructuring))
    }

    /// Convert a present value
    pub fn convert(&self, value: &dyn LogValue, destructuring: Destructuring) -> PropertyValue {
        self.create_property_value_at(Some(value), destructuring, 1)
    }

    pub(crate) fn create_property_value_at(
        &self,
        value: Option<&dyn LogValue>,
        destructuring: Destructuring,
        depth: usize,
    ) -> PropertyValue {
        let Some(mut value) = value else {
            return ScalarValue::null().into();
        };
        while let Some(inner) = value.deref_value() {
            value = inner;
        }

        if let Some(None) = value.as_optional() {
            return ScalarValue::null().into();
        }

        if destructuring == Destructuring::Stringify {
            return self.stringify(value);
        }

        let limiter = DepthLimiter::new(self, depth, self.maximum_destructuring_depth);

        if destructuring == Destructuring::Destructure && self.maximum_string_length.is_some() {
            if let Some(text) = as_text(value.as_any()) {
                return ScalarValue::new(Scalar::String(self.truncate(text))).into();
            }
        }

        if let Some(scalar) = self.convert_to_scalar_with(value, &limiter) {
            return scalar.into();
        }

        if destructuring == Destructuring::Destructure {
            for policy in &self.destructuring_policies {
                if let Some(result) = policy.try_destructure(value, &limiter) {
                    return result;
                }
            }
        }

        if let Some(Some(inner)) = value.as_optional() {
            return self.create_property_value_at(Some(inner), destructuring, depth);
        }

        if let Some(mapping) = value.as_mapping() {
            return self.convert_mapping(mapping, destructuring, &limiter);
        }

        if let Some(elements) = value.as_sequence() {
            let elements = elements
                .take(self.collection_limit())
                .map(|element| limiter.create_property_value(Some(element), destructuring));
            return SequenceValue::new(elements).into();
        }

        if destructuring == Destructuring::Destructure {
            if let Some(members) = value.members() {
                return self.convert_structure(value, members, &limiter);
            }
        }

        ScalarValue::new(Scalar::String(value.to_log_string())).into()
    }

    /// Run the scalar policy chain with `factory` for nested values
    pub(crate) fn convert_to_scalar_with(
        &self,
        value: &dyn LogValue,
        factory: &dyn PropertyValueFactory,
    ) -> Option<ScalarValue> {
        self.scalar_policies
            .iter()
            .find_map(|policy| policy.try_convert_to_scalar(value, factory))
    }

    /// Default textual form, truncated to the configured length
    pub(crate) fn stringify(&self, value: &dyn LogValue) -> PropertyValue {
        ScalarValue::new(Scalar::String(self.truncate(value.to_log_string()))).into()
    }

    fn truncate(&self, text: String) -> String {
        match self.maximum_string_length {
            Some(max) if text.chars().count() > max => {
                let mut truncated: String = text.chars().take(max - 1).collect();
                truncated.push('…');
                truncated
            }
            _ => text,
        }
    }

    fn collection_limit(&self) -> usize {
        self.maximum_collection_count.unwrap_or(usize::MAX)
    }

    fn convert_mapping(
        &self,
        mapping: Mapping<'_>,
        destructuring: Destructuring,
        limiter: &DepthLimiter<'_>,
    ) -> PropertyValue {
        let limit = self.collection_limit();

        if !is_valid_dictionary_key(mapping.key_type(), mapping.key_is_enum()) {
            let pairs = mapping.into_entries().take(limit).map(|(key, value)| {
                PropertyValue::from(SequenceValue::new([
                    limiter.create_property_value(Some(key), destructuring),
                    limiter.create_property_value(Some(value), destructuring),
                ]))
            });
            return SequenceValue::new(pairs).into();
        }

        let entries = mapping.into_entries().take(limit).map(|(key, value)| {
            // The key type was checked above, so a scalar policy always matches
            let key = self
                .convert_to_scalar_with(key, limiter)
                .unwrap_or_else(|| ScalarValue::new(Scalar::String(key.to_log_string())));
            (key, limiter.create_property_value(Some(value), destructuring))
        });
        DictionaryValue::new(entries).into()
    }

    fn convert_structure(
        &self,
        value: &dyn LogValue,
        members: Vec<Member<'_>>,
        limiter: &DepthLimiter<'_>,
    ) -> PropertyValue {
        let mut properties = Vec::with_capacity(members.len());

        for member in &members {
            if member.is_indexer() {
                self_log!(
                    "The property accessor {}.{} is a non-default indexer and was skipped",
                    value.type_name(),
                    member.name()
                );
                continue;
            }
            if !TemplateProperty::is_valid_name(member.name()) {
                self_log!("A member of {} has no name and was skipped", value.type_name());
                continue;
            }

            let converted = match panic::catch_unwind(AssertUnwindSafe(|| member.read())) {
                Ok(Ok(member_value)) => limiter
                    .create_property_value(Some(member_value.as_value()), Destructuring::Destructure),
                Ok(Err(err)) => accessor_failure(value, member, &err.to_string()),
                Err(payload) => accessor_failure(value, member, &panic_message(payload.as_ref())),
            };
            properties.push(TemplateProperty::new_unchecked(member.name(), converted));
        }

        StructureValue::new(structure_type_tag(value.type_name()), properties).into()
    }
}

impl PropertyValueFactory for PropertyValueConverter {
    fn create_property_value(
        &self,
        value: Option<&dyn LogValue>,
        destructuring: Destructuring,
    ) -> PropertyValue {
        self.create_property_value_at(value, destructuring, 1)
    }

    fn convert_to_scalar(&self, value: &dyn LogValue) -> Option<ScalarValue> {
        let limiter = DepthLimiter::new(self, 1, self.maximum_destructuring_depth);
        self.convert_to_scalar_with(value, &limiter)
    }
}

impl std::fmt::Debug for PropertyValueConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyValueConverter")
            .field("maximum_destructuring_depth", &self.maximum_destructuring_depth)
            .field("maximum_string_length", &self.maximum_string_length)
            .field("maximum_collection_count", &self.maximum_collection_count)
            .field("scalar_policies", &self.scalar_policies.len())
            .field("destructuring_policies", &self.destructuring_policies.len())
            .finish()
    }
}

fn as_text(value: &dyn Any) -> Option<String> {
    if let Some(s) = value.downcast_ref::<String>() {
        return Some(s.clone());
    }
    value.downcast_ref::<&'static str>().map(|s| (*s).to_string())
}

fn accessor_failure(owner: &dyn LogValue, member: &Member<'_>, message: &str) -> PropertyValue {
    self_log!(
        "The property accessor {}.{} threw an exception: {}",
        owner.type_name(),
        member.name(),
        message
    );
    ScalarValue::new(Scalar::String(format!(
        "The property accessor threw an exception: {}",
        message
    )))
    .into()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Type names that are empty, do not start with a letter, or belong to
/// compiler-generated types (closures) carry no tag
fn structure_type_tag(type_name: &str) -> Option<String> {
    let first = type_name.chars().next()?;
    if !first.is_alphabetic() || type_name.contains('{') {
        return None;
    }
    Some(type_name.to_string())
}

/// Builder for `PropertyValueConverter`
///
/// Built-in scalar policies are always tried first; scalar policies added
/// here run after them. Destructuring policies added here run before the
/// built-in ones, in the order added.
pub struct ConverterBuilder {
    config: ConverterConfig,
    scalar_types: Vec<ScalarType>,
    scalar_policies: Vec<Box<dyn ScalarConversionPolicy>>,
    destructuring_policies: Vec<Box<dyn DestructuringPolicy>>,
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self {
            config: ConverterConfig::default(),
            scalar_types: Vec::new(),
            scalar_policies: Vec::new(),
            destructuring_policies: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn maximum_destructuring_depth(mut self, depth: i32) -> Self {
        self.config.maximum_destructuring_depth = depth;
        self
    }

    #[must_use]
    pub fn maximum_string_length(mut self, length: usize) -> Self {
        self.config.maximum_string_length = Some(length);
        self
    }

    #[must_use]
    pub fn maximum_collection_count(mut self, count: usize) -> Self {
        self.config.maximum_collection_count = Some(count);
        self
    }

    /// Treat `T` as a scalar
    #[must_use]
    pub fn scalar_type<T>(mut self) -> Self
    where
        T: super::scalar::OpaqueValue + Clone,
    {
        self.scalar_types.push(ScalarType::of::<T>());
        self
    }

    #[must_use]
    pub fn scalar_types(mut self, types: impl IntoIterator<Item = ScalarType>) -> Self {
        self.scalar_types.extend(types);
        self
    }

    #[must_use]
    pub fn scalar_policy(mut self, policy: impl ScalarConversionPolicy + 'static) -> Self {
        self.scalar_policies.push(Box::new(policy));
        self
    }

    #[must_use]
    pub fn destructuring_policy(mut self, policy: impl DestructuringPolicy + 'static) -> Self {
        self.destructuring_policies.push(Box::new(policy));
        self
    }

    #[must_use]
    pub fn destructuring_policy_boxed(mut self, policy: Box<dyn DestructuringPolicy>) -> Self {
        self.destructuring_policies.push(policy);
        self
    }

    /// Validate the configuration and assemble the policy chains
    pub fn build(self) -> Result<PropertyValueConverter> {
        self.config.validate()?;

        let mut scalar_policies: Vec<Box<dyn ScalarConversionPolicy>> = vec![
            Box::new(BuiltInScalarConversionPolicy::new(self.scalar_types)),
            Box::new(NullableScalarConversionPolicy),
            Box::new(EnumScalarConversionPolicy),
            Box::new(ByteSequenceScalarConversionPolicy),
        ];
        scalar_policies.extend(self.scalar_policies);

        let mut destructuring_policies = self.destructuring_policies;
        destructuring_policies.push(Box::new(CallableDestructuringPolicy));
        destructuring_policies.push(Box::new(TypeDescriptorDestructuringPolicy));

        Ok(PropertyValueConverter {
            // validate() rejected negative depths
            maximum_destructuring_depth: self.config.maximum_destructuring_depth as usize,
            maximum_string_length: self.config.maximum_string_length,
            maximum_collection_count: self.config.maximum_collection_count,
            scalar_policies,
            destructuring_policies,
        })
    }
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Anonymous, CaptureError, EnumConstant, Member, MemberValue};
    use std::collections::{BTreeMap, HashMap};

    fn converter() -> PropertyValueConverter {
        PropertyValueConverter::builder().build().unwrap()
    }

    fn scalar(value: Scalar) -> PropertyValue {
        ScalarValue::new(value).into()
    }

    fn text(value: &str) -> PropertyValue {
        scalar(Scalar::String(value.to_string()))
    }

    #[derive(Debug)]
    struct Pair {
        a: i32,
        b: &'static str,
    }

    impl LogValue for Pair {
        fn members(&self) -> Option<Vec<Member<'_>>> {
            Some(vec![Member::field("A", &self.a), Member::field("B", &self.b)])
        }
    }

    #[test]
    fn test_negative_depth_fails() {
        let err = PropertyValueConverter::new(-1, vec![], vec![]).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_absent_is_null_in_every_mode() {
        let converter = converter();
        for mode in [
            Destructuring::Default,
            Destructuring::Destructure,
            Destructuring::Stringify,
        ] {
            assert_eq!(
                converter.create_property_value(None, mode),
                scalar(Scalar::Null)
            );
        }
    }

    #[test]
    fn test_stringify_bypasses_policies() {
        let converter = converter();
        assert_eq!(converter.convert(&42, Destructuring::Stringify), text("42"));
        assert_eq!(
            converter.convert(&vec![1, 2], Destructuring::Stringify),
            text("[1, 2]")
        );
    }

    #[test]
    fn test_built_in_scalars_kept_verbatim() {
        let converter = converter();
        assert_eq!(converter.convert(&7u64, Destructuring::Default), scalar(Scalar::U64(7)));
        assert_eq!(converter.convert(&'x', Destructuring::Default), scalar(Scalar::Char('x')));
        assert_eq!(converter.convert(&"hi", Destructuring::Default), text("hi"));
        assert_eq!(converter.convert(&(), Destructuring::Default), scalar(Scalar::Null));
    }

    #[test]
    fn test_smart_pointers_are_transparent() {
        let converter = converter();
        let shared = std::sync::Arc::new(Box::new(3i16));
        assert_eq!(converter.convert(&shared, Destructuring::Default), scalar(Scalar::I16(3)));
    }

    #[test]
    fn test_default_mode_does_not_destructure() {
        let value = converter().convert(&Pair { a: 1, b: "x" }, Destructuring::Default);
        assert_eq!(value, text("Pair { a: 1, b: \"x\" }"));
    }

    #[test]
    fn test_destructure_structure() {
        let converter = PropertyValueConverter::new(1, vec![], vec![]).unwrap();
        let value = converter.convert(&Pair { a: 1, b: "x" }, Destructuring::Destructure);
        let structure = value.as_structure().unwrap();
        assert_eq!(structure.type_tag(), Some("Pair"));
        assert_eq!(structure.get("A"), Some(&scalar(Scalar::I32(1))));
        assert_eq!(structure.get("B"), Some(&text("x")));
        assert_eq!(value.to_string(), "Pair { A: 1, B: \"x\" }");
    }

    #[test]
    fn test_anonymous_structure_has_no_tag() {
        let anon = Anonymous::new().with("Id", 3);
        let value = converter().convert(&anon, Destructuring::Destructure);
        assert_eq!(value.as_structure().unwrap().type_tag(), None);
        assert_eq!(value.to_string(), "{ Id: 3 }");
    }

    #[test]
    fn test_structure_type_tag_rules() {
        assert_eq!(structure_type_tag("Order"), Some("Order".to_string()));
        assert_eq!(structure_type_tag(""), None);
        assert_eq!(structure_type_tag("_Hidden"), None);
        assert_eq!(structure_type_tag("{{closure}}"), None);
        assert_eq!(structure_type_tag("(i32, i32)"), None);
    }

    #[test]
    fn test_sequence_conversion() {
        let value = converter().convert(&vec![1, 2, 3], Destructuring::Destructure);
        assert_eq!(
            value,
            PropertyValue::from(SequenceValue::new([
                scalar(Scalar::I32(1)),
                scalar(Scalar::I32(2)),
                scalar(Scalar::I32(3)),
            ]))
        );
        assert_eq!(value.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_dictionary_conversion() {
        let mut map = BTreeMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        let value = converter().convert(&map, Destructuring::Destructure);
        let dictionary = value.as_dictionary().unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(value.to_string(), "[(1: \"a\"), (2: \"b\")]");
    }

    #[test]
    fn test_non_scalar_keys_become_pairs() {
        let mut map = HashMap::new();
        map.insert(vec![1u16], true);
        let value = converter().convert(&map, Destructuring::Default);
        assert!(value.as_dictionary().is_none());
        assert_eq!(value.to_string(), "[[[1], true]]");

        // byte vectors are scalars but still not dictionary keys
        let mut map = HashMap::new();
        map.insert(vec![1u8], true);
        let value = converter().convert(&map, Destructuring::Default);
        assert!(value.as_dictionary().is_none());
        assert_eq!(value.to_string(), "[[\"01\", true]]");
    }

    #[test]
    fn test_byte_vectors_are_hex_scalars() {
        let converter = converter();
        for mode in [Destructuring::Default, Destructuring::Destructure] {
            assert_eq!(
                converter.convert(&vec![0xdeu8, 0xad], mode),
                PropertyValue::from(ScalarValue::new(Scalar::String("DEAD".to_string())))
            );
        }
        assert_eq!(converter.convert(&[0x0au8; 2], Destructuring::Default).to_string(), "\"0A0A\"");
        assert_eq!(converter.convert(&vec![1u32, 2], Destructuring::Default).to_string(), "[1, 2]");
    }

    #[test]
    fn test_optional_text_form_is_transparent() {
        let converter = converter();
        assert_eq!(converter.convert(&Some(5), Destructuring::Default).to_string(), "5");
        assert_eq!(
            converter.convert(&Some(5), Destructuring::Stringify),
            PropertyValue::from(ScalarValue::new(Scalar::String("5".to_string())))
        );
        assert_eq!(Some(Some("x")).to_log_string(), "x");
        assert_eq!(None::<i32>.to_log_string(), "null");
        assert_eq!(Some(5u8).type_name(), "u8");
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Level {
        Low = 1,
        High = 2,
    }

    impl LogValue for Level {
        fn as_enum_constant(&self) -> Option<EnumConstant> {
            let name = match self {
                Level::Low => "Low",
                Level::High => "High",
            };
            Some(EnumConstant::new("Level", name, *self as i64))
        }

        fn is_enum_type() -> bool
        where
            Self: Sized,
        {
            true
        }
    }

    #[test]
    fn test_enum_keys_form_dictionary() {
        let mut map = BTreeMap::new();
        map.insert(Level::Low, 10);
        map.insert(Level::High, 20);
        let value = converter().convert(&map, Destructuring::Default);
        assert!(value.as_dictionary().is_some());
        assert_eq!(value.to_string(), "[(Low: 10), (High: 20)]");
    }

    #[test]
    fn test_optional_wrapping_composite() {
        let value = converter().convert(&Some(vec![1, 2]), Destructuring::Default);
        assert_eq!(value.to_string(), "[1, 2]");
        let absent: Option<Vec<i32>> = None;
        assert_eq!(converter().convert(&absent, Destructuring::Default), scalar(Scalar::Null));
    }

    #[test]
    fn test_truncation() {
        let converter = PropertyValueConverter::builder()
            .maximum_string_length(5)
            .build()
            .unwrap();
        assert_eq!(
            converter.convert(&"abcdefgh".to_string(), Destructuring::Destructure),
            text("abcd…")
        );
        // strings are only cut while destructuring or stringifying
        assert_eq!(
            converter.convert(&"abcdefgh", Destructuring::Default),
            text("abcdefgh")
        );
        assert_eq!(converter.convert(&1234567, Destructuring::Stringify), text("1234…"));
    }

    #[test]
    fn test_collection_count_limit() {
        let converter = PropertyValueConverter::builder()
            .maximum_collection_count(2)
            .build()
            .unwrap();
        let value = converter.convert(&vec![1, 2, 3, 4], Destructuring::Default);
        assert_eq!(value.to_string(), "[1, 2]");
    }

    #[derive(Debug)]
    struct Fragile {
        ok: u8,
    }

    impl LogValue for Fragile {
        fn members(&self) -> Option<Vec<Member<'_>>> {
            Some(vec![
                Member::field("Ok", &self.ok),
                Member::getter("Err", || Err(CaptureError::member_access("Err", "not loaded"))),
                Member::getter("Panics", || panic!("boom")),
                Member::indexer("Item"),
                Member::getter("Computed", || Ok(MemberValue::owned(self.ok * 2))),
            ])
        }
    }

    #[test]
    fn test_accessor_failures_are_contained() {
        let value = converter().convert(&Fragile { ok: 4 }, Destructuring::Destructure);
        let structure = value.as_structure().unwrap();
        let names: Vec<&str> = structure.properties().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ok", "Err", "Panics", "Computed"]);

        assert_eq!(structure.get("Ok"), Some(&scalar(Scalar::U8(4))));
        assert_eq!(
            structure.get("Err"),
            Some(&text(
                "The property accessor threw an exception: Accessor for member 'Err' failed: not loaded"
            ))
        );
        assert_eq!(
            structure.get("Panics"),
            Some(&text("The property accessor threw an exception: boom"))
        );
        assert_eq!(structure.get("Computed"), Some(&scalar(Scalar::U8(8))));
    }

    #[test]
    fn test_converter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PropertyValueConverter>();
        assert_send_sync::<PropertyValue>();
    }
}
