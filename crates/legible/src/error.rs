//! Utility module with legible's errors.

#[cfg(feature = "pyffi")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "pyffi")]
use pyo3::PyErr;

use crate::Float;

/// An erroneous color format.
///
/// Every variant means the same thing to callers, namely that a string does
/// not describe a color with three 8-bit channels. The variants only record
/// why. The enumeration has unit variants only so that it maps onto a single
/// Python exception without losing anything worth keeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// An empty color format, or one consisting of the `#` only.
    Empty,

    /// A color format with the wrong number of characters. For example,
    /// `#12345` is missing a hexadecimal digit, whereas `#1234567` has one too
    /// many.
    UnexpectedLength,

    /// A color format with characters that are not hexadecimal digits. For
    /// example, `#ZZZZZZ` has the correct length but none of the digits.
    MalformedHex,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            Empty => f.write_str("color format should have 6 hexadecimal digits but is empty"),
            UnexpectedLength => f.write_str(
                "color format should have 6 hexadecimal digits after an optional `#` but has a different length",
            ),
            MalformedHex => {
                f.write_str("color format should contain only hexadecimal digits but does not")
            }
        }
    }
}

impl core::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An out-of-range error.
///
/// This error indicates a floating point parameter that does not fit into its
/// range. Currently, all such parameters are fractions with range `0..=1`:
///
///   * the luminance threshold for
///     [`TextColors::select_by_luminance`](crate::TextColors::select_by_luminance);
///   * the saturation and brightness bounds of
///     [`ColorLimit`](crate::limit::ColorLimit).
///
#[derive(Clone, Debug, PartialEq)]
pub struct OutOfRangeError {
    pub value: Float,
    pub expected: core::ops::RangeInclusive<Float>,
}

impl OutOfRangeError {
    /// Create a new out-of-range error.
    pub fn new(value: Float, expected: core::ops::RangeInclusive<Float>) -> Self {
        Self { value, expected }
    }

    /// Check that the value is a fraction, i.e., falls into `0..=1`.
    ///
    /// Not-a-number never is.
    pub(crate) fn check_fraction(value: Float) -> Result<Float, Self> {
        let expected = 0.0..=1.0;
        if expected.contains(&value) {
            Ok(value)
        } else {
            Err(Self::new(value, expected))
        }
    }
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl core::error::Error for OutOfRangeError {}

#[cfg(feature = "pyffi")]
impl From<OutOfRangeError> for PyErr {
    fn from(value: OutOfRangeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, OutOfRangeError};

    #[test]
    fn test_fraction() {
        assert_eq!(OutOfRangeError::check_fraction(0.0), Ok(0.0));
        assert_eq!(OutOfRangeError::check_fraction(1.0), Ok(1.0));

        let Err(error) = OutOfRangeError::check_fraction(1.5) else {
            panic!("1.5 should not be a fraction");
        };
        assert_eq!(error.to_string(), "1.5 does not fit into range 0..=1");
        assert!(
            OutOfRangeError::check_fraction(-0.25).is_err(),
            "negative fractions should be rejected"
        );
        assert!(
            OutOfRangeError::check_fraction(crate::Float::NAN).is_err(),
            "not-a-number should be rejected"
        );
    }

    #[test]
    fn test_messages() {
        assert!(
            ColorFormatError::MalformedHex
                .to_string()
                .contains("hexadecimal digits"),
            "message should explain the expected digits"
        );
    }
}
