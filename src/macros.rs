//! Macros for implementing `LogValue` on user types.
//!
//! Implementing `LogValue` by hand gives full control over every
//! capability; these macros cover the common cases.
//!
//! # Examples
//!
//! ```
//! use rust_log_capture::prelude::*;
//! use rust_log_capture::{log_enum, log_struct};
//!
//! #[derive(Debug)]
//! struct Order {
//!     id: u64,
//!     sku: String,
//! }
//! log_struct!(Order { id, sku });
//!
//! #[derive(Debug, Clone, Copy)]
//! enum Status {
//!     Open,
//!     Closed,
//! }
//! log_enum!(Status { Open, Closed });
//!
//! let converter = PropertyValueConverter::builder().build().unwrap();
//! let order = Order { id: 7, sku: "A-1".to_string() };
//! let value = converter.convert(&order, Destructuring::Destructure);
//! assert_eq!(value.to_string(), "Order { id: 7, sku: \"A-1\" }");
//!
//! let status = converter.convert(&Status::Closed, Destructuring::Default);
//! assert_eq!(status.to_string(), "Closed");
//! ```

/// Implement `LogValue` with only the default textual form (`Debug`).
///
/// # Examples
///
/// ```
/// use rust_log_capture::log_value;
///
/// #[derive(Debug)]
/// struct Handle(u32);
/// log_value!(Handle);
/// ```
#[macro_export]
macro_rules! log_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::LogValue for $ty {}
        )+
    };
}

/// Implement `LogValue` using `Display` as the default textual form.
///
/// # Examples
///
/// ```
/// use rust_log_capture::log_value_display;
/// use std::fmt;
///
/// #[derive(Debug)]
/// struct Version(u8, u8);
///
/// impl fmt::Display for Version {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}.{}", self.0, self.1)
///     }
/// }
///
/// log_value_display!(Version);
/// ```
#[macro_export]
macro_rules! log_value_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::LogValue for $ty {
                fn to_log_string(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

/// Implement `LogValue` for a struct, exposing the listed fields as members.
///
/// Fields must themselves implement `LogValue`. A field can be renamed with
/// `field => "Name"`.
///
/// # Examples
///
/// ```
/// use rust_log_capture::log_struct;
///
/// #[derive(Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
/// log_struct!(Point { x => "X", y => "Y" });
/// ```
#[macro_export]
macro_rules! log_struct {
    (@name $field:ident, $name:literal) => {
        $name
    };
    (@name $field:ident) => {
        ::std::stringify!($field)
    };
    ($ty:ty { $($field:ident $(=> $name:literal)?),* $(,)? }) => {
        impl $crate::LogValue for $ty {
            fn members(&self) -> ::std::option::Option<::std::vec::Vec<$crate::Member<'_>>> {
                ::std::option::Option::Some(::std::vec![
                    $(
                        $crate::Member::field(
                            $crate::log_struct!(@name $field $(, $name)?),
                            &self.$field,
                        )
                    ),*
                ])
            }
        }
    };
}

/// Implement `LogValue` for a fieldless enum, capturing variants as
/// enumerated constants.
///
/// The enum must be `Copy` so its discriminant can be read.
///
/// # Examples
///
/// ```
/// use rust_log_capture::log_enum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Priority {
///     Low = 1,
///     High = 10,
/// }
/// log_enum!(Priority { Low, High });
/// ```
#[macro_export]
macro_rules! log_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::LogValue for $ty {
            fn as_enum_constant(&self) -> ::std::option::Option<$crate::EnumConstant> {
                let name = match self {
                    $($ty::$variant => ::std::stringify!($variant),)+
                };
                ::std::option::Option::Some($crate::EnumConstant::new(
                    ::std::stringify!($ty),
                    name,
                    *self as i64,
                ))
            }

            fn is_enum_type() -> bool
            where
                Self: Sized,
            {
                true
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Destructuring, LogValue, PropertyValueConverter};
    use std::collections::BTreeMap;

    #[derive(Debug)]
    struct Token(u32);
    log_value!(Token);

    #[derive(Debug)]
    struct Celsius(f64);

    impl std::fmt::Display for Celsius {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}°C", self.0)
        }
    }
    log_value_display!(Celsius);

    #[derive(Debug)]
    struct Reading {
        sensor: &'static str,
        value: f64,
    }
    log_struct!(Reading { sensor => "Sensor", value });

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Unit {
        Meters = 3,
        Feet = 7,
    }
    log_enum!(Unit { Meters, Feet });

    fn converter() -> PropertyValueConverter {
        PropertyValueConverter::builder().build().unwrap()
    }

    #[test]
    fn test_log_value_uses_debug() {
        let value = converter().convert(&Token(9), Destructuring::Default);
        assert_eq!(value.to_string(), "\"Token(9)\"");
    }

    #[test]
    fn test_log_value_display() {
        assert_eq!(Celsius(21.5).to_log_string(), "21.5°C");
    }

    #[test]
    fn test_log_struct_members() {
        let reading = Reading {
            sensor: "t1",
            value: 2.5,
        };
        let value = converter().convert(&reading, Destructuring::Destructure);
        assert_eq!(value.to_string(), "Reading { Sensor: \"t1\", value: 2.5 }");
    }

    #[test]
    fn test_log_enum() {
        let constant = Unit::Feet.as_enum_constant().unwrap();
        assert_eq!(constant.name(), "Feet");
        assert_eq!(constant.value(), 7);
        assert!(<Unit as LogValue>::is_enum_type());

        let mut map = BTreeMap::new();
        map.insert(Unit::Meters, 1);
        let value = converter().convert(&map, Destructuring::Default);
        assert!(value.as_dictionary().is_some());
        assert_eq!(value.to_string_with(None, None), "[(Meters: 1)]");
        assert_eq!(Unit::Meters.as_enum_constant().unwrap().value(), 3);
    }
}
