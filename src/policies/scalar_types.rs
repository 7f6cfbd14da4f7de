//! Type identities recognized as scalars
//!
//! The built-in table is built once per process and never mutated; it is
//! both the scalar whitelist and the set of types allowed to key a
//! dictionary.

use crate::core::scalar::{OpaqueScalar, OpaqueValue, Scalar};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;
use uuid::Uuid;

/// Builds a scalar from a value known to be of the registered type
pub type ScalarConstructor = fn(&dyn Any) -> Option<Scalar>;

/// A type recognized as a scalar
#[derive(Clone, Copy)]
pub struct ScalarType {
    type_id: TypeId,
    type_name: &'static str,
    construct: ScalarConstructor,
}

impl ScalarType {
    /// Register `T` to be captured verbatim as an opaque scalar
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_capture::ScalarType;
    ///
    /// #[derive(Debug, Clone, PartialEq, Hash)]
    /// struct OrderId(u64);
    ///
    /// impl std::fmt::Display for OrderId {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(f, "order-{}", self.0)
    ///     }
    /// }
    ///
    /// let scalar_type = ScalarType::of::<OrderId>();
    /// ```
    pub fn of<T: OpaqueValue + Clone>() -> Self {
        Self::with_constructor::<T>(construct_opaque::<T>)
    }

    /// Register `T` with a custom constructor
    pub fn with_constructor<T: Any>(construct: ScalarConstructor) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            construct,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Build the scalar, `None` if `value` is not of this type
    pub fn construct(&self, value: &dyn Any) -> Option<Scalar> {
        (self.construct)(value)
    }
}

impl std::fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("type_name", &self.type_name)
            .finish()
    }
}

fn construct_opaque<T: OpaqueValue + Clone>(value: &dyn Any) -> Option<Scalar> {
    value
        .downcast_ref::<T>()
        .map(|v| Scalar::Opaque(OpaqueScalar::new(v.clone())))
}

macro_rules! copy_scalar {
    ($ty:ty => $variant:ident) => {
        ScalarType::with_constructor::<$ty>(|v| v.downcast_ref::<$ty>().map(|x| Scalar::$variant(*x)))
    };
}

static BUILT_IN: LazyLock<HashMap<TypeId, ScalarType>> = LazyLock::new(|| {
    let types = [
        ScalarType::with_constructor::<()>(|v| v.downcast_ref::<()>().map(|_| Scalar::Null)),
        copy_scalar!(bool => Bool),
        copy_scalar!(char => Char),
        copy_scalar!(i8 => I8),
        copy_scalar!(i16 => I16),
        copy_scalar!(i32 => I32),
        copy_scalar!(i64 => I64),
        copy_scalar!(i128 => I128),
        copy_scalar!(isize => Isize),
        copy_scalar!(u8 => U8),
        copy_scalar!(u16 => U16),
        copy_scalar!(u32 => U32),
        copy_scalar!(u64 => U64),
        copy_scalar!(u128 => U128),
        copy_scalar!(usize => Usize),
        copy_scalar!(f32 => F32),
        copy_scalar!(f64 => F64),
        ScalarType::with_constructor::<String>(|v| {
            v.downcast_ref::<String>().map(|s| Scalar::String(s.clone()))
        }),
        ScalarType::with_constructor::<&'static str>(|v| {
            v.downcast_ref::<&'static str>()
                .map(|s| Scalar::String((*s).to_string()))
        }),
        ScalarType::with_constructor::<Cow<'static, str>>(|v| {
            v.downcast_ref::<Cow<'static, str>>()
                .map(|s| Scalar::String(s.to_string()))
        }),
        copy_scalar!(DateTime<Utc> => DateTime),
        copy_scalar!(DateTime<FixedOffset> => DateTimeOffset),
        copy_scalar!(NaiveDateTime => LocalDateTime),
        copy_scalar!(NaiveDate => Date),
        copy_scalar!(NaiveTime => Time),
        copy_scalar!(Duration => Duration),
        copy_scalar!(TimeDelta => TimeDelta),
        copy_scalar!(Uuid => Uuid),
        copy_scalar!(IpAddr => IpAddr),
        copy_scalar!(SocketAddr => SocketAddr),
        ScalarType::with_constructor::<PathBuf>(|v| {
            v.downcast_ref::<PathBuf>().map(|p| Scalar::Path(p.clone()))
        }),
    ];
    types.into_iter().map(|t| (t.type_id, t)).collect()
});

/// Look up a built-in scalar type
pub fn built_in(type_id: TypeId) -> Option<&'static ScalarType> {
    BUILT_IN.get(&type_id)
}

pub fn is_built_in_scalar(type_id: TypeId) -> bool {
    BUILT_IN.contains_key(&type_id)
}

/// Mappings keyed by a built-in scalar or an enumerated-constant type
/// become dictionaries; all others become sequences of pairs
pub fn is_valid_dictionary_key(key_type: TypeId, key_is_enum: bool) -> bool {
    key_is_enum || is_built_in_scalar(key_type)
}
