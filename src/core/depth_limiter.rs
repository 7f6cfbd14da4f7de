//! Recursion guard for nested conversions
//!
//! Depth is the only defense against deep or cyclic graphs: once the
//! current depth exceeds the configured maximum, nested values are
//! flattened to their default textual form instead of being converted.

use super::converter::{Destructuring, PropertyValueConverter};
use super::log_value::LogValue;
use super::property_value::{PropertyValue, ScalarValue};
use super::self_log::self_log;
use crate::policies::PropertyValueFactory;

/// Factory handed to policies and used for every nested conversion
pub struct DepthLimiter<'a> {
    converter: &'a PropertyValueConverter,
    current_depth: usize,
    maximum_depth: usize,
}

impl<'a> DepthLimiter<'a> {
    pub fn new(
        converter: &'a PropertyValueConverter,
        current_depth: usize,
        maximum_depth: usize,
    ) -> Self {
        Self {
            converter,
            current_depth,
            maximum_depth,
        }
    }

    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    pub fn maximum_depth(&self) -> usize {
        self.maximum_depth
    }
}

impl PropertyValueFactory for DepthLimiter<'_> {
    fn create_property_value(
        &self,
        value: Option<&dyn LogValue>,
        destructuring: Destructuring,
    ) -> PropertyValue {
        let Some(value) = value else {
            return ScalarValue::null().into();
        };

        if self.current_depth > self.maximum_depth {
            self_log!(
                "Maximum destructuring depth {} reached, flattening {}",
                self.maximum_depth,
                value.type_name()
            );
            return self.converter.stringify(value);
        }

        self.converter
            .create_property_value_at(Some(value), destructuring, self.current_depth + 1)
    }

    fn convert_to_scalar(&self, value: &dyn LogValue) -> Option<ScalarValue> {
        self.converter.convert_to_scalar_with(value, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Scalar;

    #[test]
    fn test_within_depth_delegates() {
        let converter = PropertyValueConverter::builder()
            .maximum_destructuring_depth(2)
            .build()
            .unwrap();
        let limiter = DepthLimiter::new(&converter, 1, 2);
        let values = vec![1, 2];
        let result = limiter.create_property_value(Some(&values), Destructuring::Destructure);
        assert!(result.as_sequence().is_some());
    }

    #[test]
    fn test_beyond_depth_flattens() {
        let converter = PropertyValueConverter::builder()
            .maximum_destructuring_depth(2)
            .build()
            .unwrap();
        let limiter = DepthLimiter::new(&converter, 3, 2);
        let values = vec![1, 2];
        let result = limiter.create_property_value(Some(&values), Destructuring::Destructure);
        assert_eq!(
            result,
            PropertyValue::from(ScalarValue::new(Scalar::String("[1, 2]".to_string())))
        );
    }

    #[test]
    fn test_absent_is_null_at_any_depth() {
        let converter = PropertyValueConverter::builder().build().unwrap();
        let limiter = DepthLimiter::new(&converter, 100, 1);
        assert_eq!(
            limiter.create_property_value(None, Destructuring::Stringify),
            PropertyValue::from(ScalarValue::null())
        );
    }
}
