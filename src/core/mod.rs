//! Core capture types and the conversion engine

pub mod captured;
pub mod config;
pub mod converter;
pub mod depth_limiter;
pub mod error;
pub mod format_provider;
pub mod log_value;
pub mod property_value;
pub mod scalar;
pub mod self_log;

pub use captured::{CapturedProperties, PropertyCaptureBuilder};
pub use config::{ConverterConfig, DEFAULT_MAXIMUM_DESTRUCTURING_DEPTH};
pub use converter::{ConverterBuilder, Destructuring, PropertyValueConverter};
pub use depth_limiter::DepthLimiter;
pub use error::{CaptureError, Result};
pub use format_provider::{FormatProvider, InvariantFormat, NumberFormat};
pub use log_value::{
    short_type_name, Anonymous, AsAny, Callback, LogValue, Mapping, Member, MemberInfo,
    MemberValue, TypeInfo,
};
pub use property_value::{
    DictionaryValue, PropertyValue, ScalarValue, SequenceValue, StructureValue, TemplateProperty,
};
pub use scalar::{EnumConstant, OpaqueScalar, OpaqueValue, Scalar};
