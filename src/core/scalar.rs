//! Atomic values wrapped by `ScalarValue`

use super::format_provider::{self, FormatProvider, IntegerParts};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use std::any::{Any, TypeId};
use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// A named constant of an enumerated type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumConstant {
    type_name: &'static str,
    name: &'static str,
    value: i64,
}

impl EnumConstant {
    pub const fn new(type_name: &'static str, name: &'static str, value: i64) -> Self {
        Self {
            type_name,
            name,
            value,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A value of a caller-registered scalar type
///
/// Implemented for every `Debug + Display + PartialEq + Hash` type, so any
/// such type can be registered through `ScalarType::of`.
pub trait OpaqueValue: Any + fmt::Debug + fmt::Display + Send + Sync {
    fn eq_opaque(&self, other: &dyn OpaqueValue) -> bool;
    fn hash_opaque(&self, state: &mut dyn Hasher);
    fn opaque_any(&self) -> &dyn Any;
}

impl<T> OpaqueValue for T
where
    T: Any + fmt::Debug + fmt::Display + PartialEq + Hash + Send + Sync,
{
    fn eq_opaque(&self, other: &dyn OpaqueValue) -> bool {
        other
            .opaque_any()
            .downcast_ref::<T>()
            .is_some_and(|other| other == self)
    }

    fn hash_opaque(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn opaque_any(&self) -> &dyn Any {
        self
    }
}

/// Shared handle to an opaque scalar
#[derive(Clone)]
pub struct OpaqueScalar(Arc<dyn OpaqueValue>);

impl OpaqueScalar {
    pub fn new<T: OpaqueValue>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the wrapped value as its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.opaque_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for OpaqueScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for OpaqueScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl PartialEq for OpaqueScalar {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_opaque(&*other.0)
    }
}

impl Eq for OpaqueScalar {}

impl Hash for OpaqueScalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash_opaque(state);
    }
}

/// The closed set of atomic values a scalar can hold
///
/// Floats compare and hash by bit pattern so scalars can key a dictionary.
#[derive(Debug, Clone)]
pub enum Scalar {
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
    DateTime(DateTime<Utc>),
    DateTimeOffset(DateTime<FixedOffset>),
    LocalDateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    Duration(Duration),
    TimeDelta(TimeDelta),
    Uuid(Uuid),
    IpAddr(IpAddr),
    SocketAddr(SocketAddr),
    Path(PathBuf),
    Enum(EnumConstant),
    Opaque(OpaqueScalar),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Borrow the text of a string scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    fn integer_parts(&self) -> Option<IntegerParts> {
        let parts = match *self {
            Scalar::I8(v) => IntegerParts::signed(v.into(), 8),
            Scalar::I16(v) => IntegerParts::signed(v.into(), 16),
            Scalar::I32(v) => IntegerParts::signed(v.into(), 32),
            Scalar::I64(v) => IntegerParts::signed(v.into(), 64),
            Scalar::I128(v) => IntegerParts::signed(v, 128),
            Scalar::Isize(v) => IntegerParts::signed(v as i128, isize::BITS),
            Scalar::U8(v) => IntegerParts::unsigned(v.into()),
            Scalar::U16(v) => IntegerParts::unsigned(v.into()),
            Scalar::U32(v) => IntegerParts::unsigned(v.into()),
            Scalar::U64(v) => IntegerParts::unsigned(v.into()),
            Scalar::U128(v) => IntegerParts::unsigned(v),
            Scalar::Usize(v) => IntegerParts::unsigned(v as u128),
            _ => return None,
        };
        Some(parts)
    }

    /// Render with a format string and provider
    ///
    /// Strings are quoted unless the format is `l`; other types use the format
    /// when they understand it and their default form otherwise.
    pub fn render(
        &self,
        out: &mut dyn fmt::Write,
        format: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        if let Some(format) = format {
            if let Some(result) = self.render_formatted(out, format, provider) {
                return result;
            }
        }
        self.render_default(out, provider)
    }

    fn render_formatted(
        &self,
        out: &mut dyn fmt::Write,
        format: &str,
        provider: Option<&dyn FormatProvider>,
    ) -> Option<fmt::Result> {
        if let Some(parts) = self.integer_parts() {
            return format_provider::format_integer(out, parts, format, provider);
        }

        match self {
            Scalar::String(s) if format == "l" => Some(out.write_str(s)),
            Scalar::F32(v) => format_provider::format_float(out, f64::from(*v), format, provider),
            Scalar::F64(v) => format_provider::format_float(out, *v, format, provider),
            Scalar::DateTime(v) => write_strftime(out, |buf| write!(buf, "{}", v.format(format))),
            Scalar::DateTimeOffset(v) => {
                write_strftime(out, |buf| write!(buf, "{}", v.format(format)))
            }
            Scalar::LocalDateTime(v) => {
                write_strftime(out, |buf| write!(buf, "{}", v.format(format)))
            }
            Scalar::Date(v) => write_strftime(out, |buf| write!(buf, "{}", v.format(format))),
            Scalar::Time(v) => write_strftime(out, |buf| write!(buf, "{}", v.format(format))),
            Scalar::Enum(v) => match format {
                "D" | "d" => Some(write!(out, "{}", v.value)),
                "X" | "x" => Some(write!(out, "{:08X}", v.value as u32)),
                "G" | "g" => Some(out.write_str(v.name)),
                _ => None,
            },
            _ => None,
        }
    }

    fn render_default(
        &self,
        out: &mut dyn fmt::Write,
        provider: Option<&dyn FormatProvider>,
    ) -> fmt::Result {
        match self {
            Scalar::Null => out.write_str("null"),
            Scalar::String(s) => {
                out.write_char('"')?;
                out.write_str(&s.replace('"', "\\\""))?;
                out.write_char('"')
            }
            Scalar::F32(v) => format_provider::write_float_default(out, v.to_string(), provider),
            Scalar::F64(v) => format_provider::write_float_default(out, v.to_string(), provider),
            other => write!(out, "{}", other),
        }
    }
}

/// chrono reports unusable patterns as a formatting error, which callers
/// treat as "format not understood"
fn write_strftime(
    out: &mut dyn fmt::Write,
    write: impl FnOnce(&mut String) -> fmt::Result,
) -> Option<fmt::Result> {
    let mut buffer = String::new();
    write(&mut buffer).ok()?;
    Some(out.write_str(&buffer))
}

/// Default textual form, without quoting
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Char(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::I128(v) => write!(f, "{}", v),
            Scalar::Isize(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::U128(v) => write!(f, "{}", v),
            Scalar::Usize(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{}", v),
            Scalar::F64(v) => write!(f, "{}", v),
            Scalar::String(v) => f.write_str(v),
            Scalar::DateTime(v) => f.write_str(&v.to_rfc3339()),
            Scalar::DateTimeOffset(v) => f.write_str(&v.to_rfc3339()),
            Scalar::LocalDateTime(v) => write!(f, "{}", v),
            Scalar::Date(v) => write!(f, "{}", v),
            Scalar::Time(v) => write!(f, "{}", v),
            Scalar::Duration(v) => write!(f, "{:?}", v),
            Scalar::TimeDelta(v) => write!(f, "{}", v),
            Scalar::Uuid(v) => write!(f, "{}", v),
            Scalar::IpAddr(v) => write!(f, "{}", v),
            Scalar::SocketAddr(v) => write!(f, "{}", v),
            Scalar::Path(v) => write!(f, "{}", v.display()),
            Scalar::Enum(v) => write!(f, "{}", v),
            Scalar::Opaque(v) => write!(f, "{}", v),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        use Scalar::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Char(a), Char(b)) => a == b,
            (I8(a), I8(b)) => a == b,
            (I16(a), I16(b)) => a == b,
            (I32(a), I32(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (I128(a), I128(b)) => a == b,
            (Isize(a), Isize(b)) => a == b,
            (U8(a), U8(b)) => a == b,
            (U16(a), U16(b)) => a == b,
            (U32(a), U32(b)) => a == b,
            (U64(a), U64(b)) => a == b,
            (U128(a), U128(b)) => a == b,
            (Usize(a), Usize(b)) => a == b,
            (F32(a), F32(b)) => a.to_bits() == b.to_bits(),
            (F64(a), F64(b)) => a.to_bits() == b.to_bits(),
            (String(a), String(b)) => a == b,
            (DateTime(a), DateTime(b)) => a == b,
            (DateTimeOffset(a), DateTimeOffset(b)) => a == b,
            (LocalDateTime(a), LocalDateTime(b)) => a == b,
            (Date(a), Date(b)) => a == b,
            (Time(a), Time(b)) => a == b,
            (Duration(a), Duration(b)) => a == b,
            (TimeDelta(a), TimeDelta(b)) => a == b,
            (Uuid(a), Uuid(b)) => a == b,
            (IpAddr(a), IpAddr(b)) => a == b,
            (SocketAddr(a), SocketAddr(b)) => a == b,
            (Path(a), Path(b)) => a == b,
            (Enum(a), Enum(b)) => a == b,
            (Opaque(a), Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Scalar::Null => {}
            Scalar::Bool(v) => v.hash(state),
            Scalar::Char(v) => v.hash(state),
            Scalar::I8(v) => v.hash(state),
            Scalar::I16(v) => v.hash(state),
            Scalar::I32(v) => v.hash(state),
            Scalar::I64(v) => v.hash(state),
            Scalar::I128(v) => v.hash(state),
            Scalar::Isize(v) => v.hash(state),
            Scalar::U8(v) => v.hash(state),
            Scalar::U16(v) => v.hash(state),
            Scalar::U32(v) => v.hash(state),
            Scalar::U64(v) => v.hash(state),
            Scalar::U128(v) => v.hash(state),
            Scalar::Usize(v) => v.hash(state),
            Scalar::F32(v) => v.to_bits().hash(state),
            Scalar::F64(v) => v.to_bits().hash(state),
            Scalar::String(v) => v.hash(state),
            Scalar::DateTime(v) => v.hash(state),
            Scalar::DateTimeOffset(v) => v.hash(state),
            Scalar::LocalDateTime(v) => v.hash(state),
            Scalar::Date(v) => v.hash(state),
            Scalar::Time(v) => v.hash(state),
            Scalar::Duration(v) => v.hash(state),
            Scalar::TimeDelta(v) => v.hash(state),
            Scalar::Uuid(v) => v.hash(state),
            Scalar::IpAddr(v) => v.hash(state),
            Scalar::SocketAddr(v) => v.hash(state),
            Scalar::Path(v) => v.hash(state),
            Scalar::Enum(v) => v.hash(state),
            Scalar::Opaque(v) => v.hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format_provider::NumberFormat;
    use chrono::TimeZone;

    fn render(scalar: &Scalar, format: Option<&str>) -> String {
        let mut out = String::new();
        scalar.render(&mut out, format, None).unwrap();
        out
    }

    #[test]
    fn test_default_rendering() {
        assert_eq!(render(&Scalar::Null, None), "null");
        assert_eq!(render(&Scalar::I32(42), None), "42");
        assert_eq!(render(&Scalar::Bool(true), None), "true");
        assert_eq!(render(&Scalar::String("a\"b".into()), None), "\"a\\\"b\"");
        assert_eq!(render(&Scalar::F64(1.5), None), "1.5");
    }

    #[test]
    fn test_literal_string_format() {
        assert_eq!(render(&Scalar::String("plain".into()), Some("l")), "plain");
    }

    #[test]
    fn test_formatted_numbers() {
        assert_eq!(render(&Scalar::I64(7), Some("D3")), "007");
        assert_eq!(render(&Scalar::U8(255), Some("X")), "FF");
        assert_eq!(render(&Scalar::I8(-1), Some("X")), "FF");
        assert_eq!(render(&Scalar::F64(2.0), Some("F1")), "2.0");
        // unknown formats fall back to the default form
        assert_eq!(render(&Scalar::I32(5), Some("%%")), "5");
    }

    #[test]
    fn test_provider_applies_to_default_floats() {
        let mut out = String::new();
        Scalar::F64(0.25)
            .render(&mut out, None, Some(&NumberFormat::new(',', '.')))
            .unwrap();
        assert_eq!(out, "0,25");
    }

    #[test]
    fn test_date_formats() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
        assert_eq!(render(&Scalar::DateTime(dt), Some("%Y/%m/%d")), "2024/03/09");
        assert_eq!(render(&Scalar::DateTime(dt), None), "2024-03-09T14:30:00+00:00");

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        // %z needs an offset a plain date does not have
        assert_eq!(render(&Scalar::Date(date), Some("%z")), "2024-03-09");
    }

    #[test]
    fn test_enum_rendering() {
        let level = Scalar::Enum(EnumConstant::new("Level", "Warning", 3));
        assert_eq!(render(&level, None), "Warning");
        assert_eq!(render(&level, Some("D")), "3");
        assert_eq!(render(&level, Some("X")), "00000003");
    }

    #[test]
    fn test_float_equality_is_bitwise() {
        assert_eq!(Scalar::F64(f64::NAN), Scalar::F64(f64::NAN));
        assert_ne!(Scalar::F64(0.0), Scalar::F64(-0.0));
        assert_ne!(Scalar::I32(1), Scalar::I64(1));
    }

    #[derive(Debug, Clone, PartialEq, Hash)]
    struct Money(i64);

    impl fmt::Display for Money {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "${}", self.0)
        }
    }

    #[test]
    fn test_opaque_scalar() {
        let a = Scalar::Opaque(OpaqueScalar::new(Money(5)));
        let b = Scalar::Opaque(OpaqueScalar::new(Money(5)));
        let c = Scalar::Opaque(OpaqueScalar::new(Money(6)));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(render(&a, None), "$5");

        if let Scalar::Opaque(opaque) = &a {
            assert_eq!(opaque.downcast_ref::<Money>(), Some(&Money(5)));
        }
    }
}
