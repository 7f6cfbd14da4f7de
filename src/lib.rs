//! # Rust Log Capture
//!
//! Converts the arguments of structured logging calls into property values
//! that a message template can render or serialize.
//!
//! ## Features
//!
//! - **Scalars kept verbatim**: numbers, strings, times, identifiers and
//!   addresses are captured as-is
//! - **Collections walked**: sequences and mappings become sequence and
//!   dictionary values
//! - **Destructuring**: values exposing members become structures with a
//!   type tag
//! - **Bounded**: nesting depth, string length and collection size limits
//!   keep capture cost predictable, even for cyclic graphs
//! - **Extensible**: custom scalar types and destructuring policies
//! - **Thread Safe**: one converter can serve every logging thread
//!
//! ## Example
//!
//! ```
//! use rust_log_capture::prelude::*;
//!
//! let converter = PropertyValueConverter::builder()
//!     .maximum_destructuring_depth(3)
//!     .build()
//!     .unwrap();
//!
//! let property = converter.create_property("Items", &vec![1, 2, 3], false).unwrap();
//! assert_eq!(property.to_string(), "Items: [1, 2, 3]");
//! ```

pub mod core;
pub mod formatting;
pub mod macros;
pub mod policies;

pub mod prelude {
    pub use crate::core::{
        Anonymous, CaptureError, CapturedProperties, ConverterBuilder, ConverterConfig,
        Destructuring, DictionaryValue, EnumConstant, LogValue, Member, MemberValue,
        PropertyValue, PropertyValueConverter, Result, Scalar, ScalarValue, SequenceValue,
        StructureValue, TemplateProperty,
    };
    pub use crate::policies::{DestructuringPolicy, PropertyValueFactory, ScalarType};
}

pub use crate::core::self_log;
pub use crate::core::{
    Anonymous, AsAny, Callback, CaptureError, CapturedProperties, ConverterBuilder,
    ConverterConfig, Destructuring, DictionaryValue, EnumConstant, FormatProvider,
    InvariantFormat, LogValue, Mapping, Member, MemberInfo, MemberValue, NumberFormat,
    OpaqueScalar, PropertyCaptureBuilder, PropertyValue, PropertyValueConverter, Result, Scalar,
    ScalarValue, SequenceValue, StructureValue, TemplateProperty, TypeInfo,
    DEFAULT_MAXIMUM_DESTRUCTURING_DEPTH,
};
pub use crate::policies::{
    DestructuringPolicy, PropertyValueFactory, ScalarConversionPolicy, ScalarType,
};
