//! Values that can be captured as log properties
//!
//! `LogValue` is the opt-in introspection surface the converter works
//! against. Every capability is optional and defaults to "not supported";
//! a type implements only the ones that describe it. Implementations for
//! common std, chrono, uuid, bytes and indexmap types are provided here.

use super::error::{CaptureError, Result};
use super::scalar::EnumConstant;
use indexmap::{IndexMap, IndexSet};
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

/// Bridge from a value to `&dyn Any` for type identity checks
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value that can be passed to a structured logging call
///
/// The only required piece is `Debug`, which supplies the default textual
/// form. Everything else opts the type into a richer representation.
pub trait LogValue: AsAny + fmt::Debug + 'static {
    /// Short type name, used as the type tag of destructured structures
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Default textual form, used when a value is stringified
    fn to_log_string(&self) -> String {
        format!("{:?}", self)
    }

    /// Transparent wrappers (smart pointers) expose their content here
    fn deref_value(&self) -> Option<&dyn LogValue> {
        None
    }

    /// Optionally-absent wrappers: `Some(None)` is absent, `Some(Some(v))` present
    fn as_optional(&self) -> Option<Option<&dyn LogValue>> {
        None
    }

    fn as_enum_constant(&self) -> Option<EnumConstant> {
        None
    }

    fn as_bytes(&self) -> Option<&[u8]> {
        None
    }

    /// Signature of a function-like value
    fn as_callable(&self) -> Option<&'static str> {
        None
    }

    /// Name of a type or member descriptor
    fn as_type_descriptor(&self) -> Option<&str> {
        None
    }

    /// Elements of an enumerable value, in enumeration order
    fn as_sequence(&self) -> Option<Box<dyn Iterator<Item = &dyn LogValue> + '_>> {
        None
    }

    /// Entries of a key/value mapping
    fn as_mapping(&self) -> Option<Mapping<'_>> {
        None
    }

    /// Readable members, in declaration order
    fn members(&self) -> Option<Vec<Member<'_>>> {
        None
    }

    /// Whether the type is an enumerated-constant type, consulted statically
    /// when deciding if a mapping's key type can key a dictionary
    fn is_enum_type() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Strip the module path and generic arguments from a type name
pub fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Entries of a mapping together with its static key type
pub struct Mapping<'a> {
    key_type: TypeId,
    key_type_name: &'static str,
    key_is_enum: bool,
    entries: Box<dyn Iterator<Item = (&'a dyn LogValue, &'a dyn LogValue)> + 'a>,
}

impl<'a> Mapping<'a> {
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: LogValue,
        V: LogValue,
        I: Iterator<Item = (&'a K, &'a V)> + 'a,
    {
        Self {
            key_type: TypeId::of::<K>(),
            key_type_name: std::any::type_name::<K>(),
            key_is_enum: K::is_enum_type(),
            entries: Box::new(entries.map(|(k, v)| (k as &dyn LogValue, v as &dyn LogValue))),
        }
    }

    pub fn key_type(&self) -> TypeId {
        self.key_type
    }

    pub fn key_type_name(&self) -> &'static str {
        self.key_type_name
    }

    pub fn key_is_enum(&self) -> bool {
        self.key_is_enum
    }

    pub fn into_entries(
        self,
    ) -> Box<dyn Iterator<Item = (&'a dyn LogValue, &'a dyn LogValue)> + 'a> {
        self.entries
    }
}

impl fmt::Debug for Mapping<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("key_type", &self.key_type_name)
            .field("key_is_enum", &self.key_is_enum)
            .finish_non_exhaustive()
    }
}

/// A member's value, borrowed from the owner or computed on read
pub enum MemberValue<'a> {
    Borrowed(&'a dyn LogValue),
    Owned(Box<dyn LogValue>),
}

impl<'a> MemberValue<'a> {
    pub fn owned<T: LogValue>(value: T) -> Self {
        MemberValue::Owned(Box::new(value))
    }

    pub fn as_value(&self) -> &dyn LogValue {
        match self {
            MemberValue::Borrowed(v) => *v,
            MemberValue::Owned(v) => &**v,
        }
    }
}

type Getter<'a> = Box<dyn Fn() -> Result<MemberValue<'a>> + 'a>;

enum MemberSource<'a> {
    Field(&'a dyn LogValue),
    Getter(Getter<'a>),
    Indexer,
}

/// A readable member of a destructurable value
pub struct Member<'a> {
    name: Cow<'static, str>,
    source: MemberSource<'a>,
}

impl<'a> Member<'a> {
    /// A stored field, read without side effects
    pub fn field(name: impl Into<Cow<'static, str>>, value: &'a dyn LogValue) -> Self {
        Self {
            name: name.into(),
            source: MemberSource::Field(value),
        }
    }

    /// A computed member whose getter may fail
    pub fn getter<F>(name: impl Into<Cow<'static, str>>, getter: F) -> Self
    where
        F: Fn() -> Result<MemberValue<'a>> + 'a,
    {
        Self {
            name: name.into(),
            source: MemberSource::Getter(Box::new(getter)),
        }
    }

    /// A member that needs arguments to read; never captured
    pub fn indexer(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            source: MemberSource::Indexer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_indexer(&self) -> bool {
        matches!(self.source, MemberSource::Indexer)
    }

    /// Invoke the member's accessor
    pub fn read(&self) -> Result<MemberValue<'a>> {
        match &self.source {
            MemberSource::Field(value) => Ok(MemberValue::Borrowed(*value)),
            MemberSource::Getter(getter) => getter(),
            MemberSource::Indexer => Err(CaptureError::member_access(
                self.name.to_string(),
                "indexed members cannot be read without arguments",
            )),
        }
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            MemberSource::Field(_) => "field",
            MemberSource::Getter(_) => "getter",
            MemberSource::Indexer => "indexer",
        };
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// Descriptor of a Rust type, captured by name rather than destructured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: &'static str,
    id: TypeId,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }
}

impl LogValue for TypeInfo {
    fn to_log_string(&self) -> String {
        self.name.to_string()
    }

    fn as_type_descriptor(&self) -> Option<&str> {
        Some(self.name)
    }
}

/// Descriptor of a member of some type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    declaring_type: &'static str,
    name: &'static str,
    qualified: String,
}

impl MemberInfo {
    pub fn new(declaring_type: &'static str, name: &'static str) -> Self {
        Self {
            declaring_type,
            name,
            qualified: format!("{}.{}", declaring_type, name),
        }
    }

    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl LogValue for MemberInfo {
    fn to_log_string(&self) -> String {
        self.qualified.clone()
    }

    fn as_type_descriptor(&self) -> Option<&str> {
        Some(&self.qualified)
    }
}

/// Wraps a closure so it can be logged as a callable value
pub struct Callback<F>(pub F);

impl<F> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback<{}>", std::any::type_name::<F>())
    }
}

impl<F: 'static> LogValue for Callback<F> {
    fn as_callable(&self) -> Option<&'static str> {
        Some(std::any::type_name::<F>())
    }
}

/// An ad-hoc object with named values and no type tag
///
/// # Example
///
/// ```
/// use rust_log_capture::Anonymous;
///
/// let order = Anonymous::new().with("Id", 42).with("Sku", "A-100");
/// ```
#[derive(Debug, Default)]
pub struct Anonymous {
    fields: Vec<(&'static str, Box<dyn LogValue>)>,
}

impl Anonymous {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<T: LogValue>(mut self, name: &'static str, value: T) -> Self {
        self.fields.push((name, Box::new(value)));
        self
    }
}

impl LogValue for Anonymous {
    fn type_name(&self) -> &'static str {
        ""
    }

    fn members(&self) -> Option<Vec<Member<'_>>> {
        Some(
            self.fields
                .iter()
                .map(|(name, value)| Member::field(*name, &**value))
                .collect(),
        )
    }
}

// Well-known scalars: their default form is Display rather than Debug.
macro_rules! display_log_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LogValue for $ty {
                fn to_log_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_log_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str, Cow<'static, str>,
    chrono::NaiveDateTime, chrono::NaiveDate, chrono::NaiveTime, chrono::TimeDelta,
    uuid::Uuid, std::net::IpAddr, std::net::SocketAddr,
);

impl LogValue for () {
    fn to_log_string(&self) -> String {
        "null".to_string()
    }
}

impl LogValue for chrono::DateTime<chrono::Utc> {
    fn to_log_string(&self) -> String {
        self.to_rfc3339()
    }
}

impl LogValue for chrono::DateTime<chrono::FixedOffset> {
    fn to_log_string(&self) -> String {
        self.to_rfc3339()
    }
}

impl LogValue for std::time::Duration {}

impl LogValue for std::path::PathBuf {
    fn to_log_string(&self) -> String {
        self.display().to_string()
    }
}

impl LogValue for bytes::Bytes {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(&self[..])
    }
}

impl LogValue for &'static [u8] {
    fn as_bytes(&self) -> Option<&[u8]> {
        Some(*self)
    }
}

impl<T: LogValue> LogValue for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(value) => value.type_name(),
            None => short_type_name(std::any::type_name::<T>()),
        }
    }

    fn to_log_string(&self) -> String {
        match self {
            Some(value) => value.to_log_string(),
            None => "null".to_string(),
        }
    }

    fn as_optional(&self) -> Option<Option<&dyn LogValue>> {
        Some(self.as_ref().map(|v| v as &dyn LogValue))
    }
}

macro_rules! transparent_log_value {
    ($($wrapper:ident),*) => {
        $(
            impl<T: LogValue> LogValue for $wrapper<T> {
                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn to_log_string(&self) -> String {
                    (**self).to_log_string()
                }

                fn deref_value(&self) -> Option<&dyn LogValue> {
                    Some(&**self)
                }
            }
        )*
    };
}

transparent_log_value!(Box, Arc, Rc);

macro_rules! sequence_log_value {
    ($($ty:ident<T $(, $extra:ident)*>),*) => {
        $(
            impl<T: LogValue $(, $extra: 'static)*> LogValue for $ty<T $(, $extra)*> {
                fn as_sequence(&self) -> Option<Box<dyn Iterator<Item = &dyn LogValue> + '_>> {
                    Some(Box::new(self.iter().map(|v| v as &dyn LogValue)))
                }
            }
        )*
    };
}

sequence_log_value!(Vec<T>, VecDeque<T>, BTreeSet<T>, HashSet<T, S>, IndexSet<T, S>);

impl<T: LogValue, const N: usize> LogValue for [T; N] {
    fn as_bytes(&self) -> Option<&[u8]> {
        self.as_any().downcast_ref::<[u8; N]>().map(|bytes| &bytes[..])
    }

    fn as_sequence(&self) -> Option<Box<dyn Iterator<Item = &dyn LogValue> + '_>> {
        Some(Box::new(self.iter().map(|v| v as &dyn LogValue)))
    }
}

macro_rules! tuple_log_value {
    ($(($($name:ident : $idx:tt),+)),*) => {
        $(
            impl<$($name: LogValue),+> LogValue for ($($name,)+) {
                fn as_sequence(&self) -> Option<Box<dyn Iterator<Item = &dyn LogValue> + '_>> {
                    let elements: Vec<&dyn LogValue> = vec![$(&self.$idx),+];
                    Some(Box::new(elements.into_iter()))
                }
            }
        )*
    };
}

tuple_log_value!((A: 0, B: 1), (A: 0, B: 1, C: 2), (A: 0, B: 1, C: 2, D: 3));

impl<K: LogValue, V: LogValue, S: BuildHasher + 'static> LogValue for HashMap<K, V, S> {
    fn as_mapping(&self) -> Option<Mapping<'_>> {
        Some(Mapping::new(self.iter()))
    }
}

impl<K: LogValue, V: LogValue, S: BuildHasher + 'static> LogValue for IndexMap<K, V, S> {
    fn as_mapping(&self) -> Option<Mapping<'_>> {
        Some(Mapping::new(self.iter()))
    }
}

impl<K: LogValue, V: LogValue> LogValue for BTreeMap<K, V> {
    fn as_mapping(&self) -> Option<Mapping<'_>> {
        Some(Mapping::new(self.iter()))
    }
}

macro_rules! fn_pointer_log_value {
    ($(($($arg:ident),*)),*) => {
        $(
            impl<R: 'static $(, $arg: 'static)*> LogValue for fn($($arg),*) -> R {
                fn as_callable(&self) -> Option<&'static str> {
                    Some(std::any::type_name::<Self>())
                }
            }
        )*
    };
}

fn_pointer_log_value!((), (A), (A, B), (A, B, C));
