//! Limiting a color's saturation and brightness.
//!
//! A [`ColorLimit`] converts a color to HSV, clamps saturation and value
//! (brightness) into configurable ranges, and converts the result back to RGB.
//! Hue is preserved, modulo rounding.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{hsv_to_rgb, rgb_to_hsv, round_to};
use crate::error::OutOfRangeError;
use crate::{Float, Rgb};

/// Ranges for saturation and brightness.
///
/// Both ranges are inclusive and default to `0..=1`, in which case
/// [`ColorLimit::apply`] leaves colors unchanged. Bounds must be fractions.
/// A start larger than the end is accepted and pins the coordinate to the
/// start.
///
/// # Examples
///
/// ```
/// # use legible::Rgb;
/// # use legible::error::OutOfRangeError;
/// # use legible::limit::ColorLimit;
/// # fn main() -> Result<(), OutOfRangeError> {
/// let limit = ColorLimit::new().with_brightness(0.0, 0.5)?;
/// assert_eq!(limit.apply(Rgb::new(0xff, 0x00, 0x00)), Rgb::new(0x80, 0x00, 0x00));
///
/// let limit = ColorLimit::new().with_saturation(0.0, 0.5)?;
/// assert_eq!(limit.apply(Rgb::new(0xff, 0x00, 0x00)), Rgb::new(0xff, 0x80, 0x80));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "legible"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorLimit {
    saturation: [Float; 2],
    brightness: [Float; 2],
}

impl ColorLimit {
    /// Create a new color limit with full saturation and brightness ranges.
    pub const fn new() -> Self {
        Self {
            saturation: [0.0, 1.0],
            brightness: [0.0, 1.0],
        }
    }
}

impl Default for ColorLimit {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorLimit {
    /// Create a new color limit with the given ranges. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (
        saturation_start = 0.0,
        saturation_end = 1.0,
        brightness_start = 0.0,
        brightness_end = 1.0
    ))]
    pub fn py_new(
        saturation_start: Float,
        saturation_end: Float,
        brightness_start: Float,
        brightness_end: Float,
    ) -> Result<Self, OutOfRangeError> {
        Self::new()
            .with_saturation(saturation_start, saturation_end)?
            .with_brightness(brightness_start, brightness_end)
    }

    /// Get the saturation range.
    pub const fn saturation(&self) -> (Float, Float) {
        (self.saturation[0], self.saturation[1])
    }

    /// Get the brightness range.
    pub const fn brightness(&self) -> (Float, Float) {
        (self.brightness[0], self.brightness[1])
    }

    /// Create a copy of this color limit with the given saturation range.
    pub fn with_saturation(&self, start: Float, end: Float) -> Result<Self, OutOfRangeError> {
        Ok(Self {
            saturation: [
                OutOfRangeError::check_fraction(start)?,
                OutOfRangeError::check_fraction(end)?,
            ],
            ..*self
        })
    }

    /// Create a copy of this color limit with the given brightness range.
    pub fn with_brightness(&self, start: Float, end: Float) -> Result<Self, OutOfRangeError> {
        Ok(Self {
            brightness: [
                OutOfRangeError::check_fraction(start)?,
                OutOfRangeError::check_fraction(end)?,
            ],
            ..*self
        })
    }

    /// Apply this color limit to the given color.
    ///
    /// This method converts the color to HSV, rounds the coordinates to six
    /// digits after the decimal, clamps saturation and value into their
    /// ranges, and converts back to the nearest 24-bit color. Since it rounds
    /// instead of truncating, a channel may come out one step higher than
    /// with `int(c * 255)`, e.g., `#ff0036` instead of `#ff0035` for full
    /// ranges.
    pub fn apply(&self, color: Rgb) -> Rgb {
        let [h, s, v] = rgb_to_hsv(&color.to_coordinates());
        let [h, s, v] = [round_to(h, 6), round_to(s, 6), round_to(v, 6)];

        let [s_start, s_end] = self.saturation;
        let [v_start, v_end] = self.brightness;
        let s_new = s.min(s_end).max(s_start);
        let v_new = v.min(v_end).max(v_start);

        let result = Rgb::from_coordinates(&hsv_to_rgb(&[h, s_new, v_new]));
        log::debug!(
            "limiting {} from hsv({:.4}, {:.4}, {:.4}) to hsv({:.4}, {:.4}, {:.4}) yields {}",
            color,
            h,
            s,
            v,
            h,
            s_new,
            v_new,
            result
        );
        result
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::ColorLimit;
    use crate::error::OutOfRangeError;
    use crate::Rgb;
    use rand::Rng;

    #[test]
    fn test_identity() {
        let limit = ColorLimit::default();
        for color in [
            Rgb::new(0xff, 0x00, 0x36),
            Rgb::new(0xff, 0x50, 0x00),
            Rgb::new(0x00, 0x65, 0xff),
            Rgb::new(0x3d, 0x7f, 0xff),
            Rgb::new(0x80, 0x80, 0x80),
            Rgb::BLACK,
            Rgb::WHITE,
        ] {
            assert_eq!(limit.apply(color), color, "full ranges change nothing");
        }

        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            assert_eq!(limit.apply(color), color, "full ranges change nothing");
        }
    }

    #[test]
    fn test_limits() -> Result<(), OutOfRangeError> {
        let red = Rgb::new(0xff, 0x00, 0x00);

        let limit = ColorLimit::new().with_brightness(0.0, 0.5)?;
        assert_eq!(limit.apply(red), Rgb::new(0x80, 0x00, 0x00));
        assert_eq!(limit.apply(Rgb::BLACK), Rgb::BLACK);

        let limit = ColorLimit::new().with_saturation(0.0, 0.5)?;
        assert_eq!(limit.apply(red), Rgb::new(0xff, 0x80, 0x80));

        // Raising saturation gives gray a (red) hue.
        let limit = ColorLimit::new().with_saturation(0.5, 1.0)?;
        assert_eq!(
            limit.apply(Rgb::new(0x80, 0x80, 0x80)),
            Rgb::new(0x80, 0x40, 0x40)
        );

        // An inverted range pins the coordinate to its start.
        let limit = ColorLimit::new().with_saturation(0.8, 0.2)?;
        assert_eq!(limit.apply(red), Rgb::new(0xff, 0x33, 0x33));

        let limit = ColorLimit::new()
            .with_saturation(0.25, 0.75)?
            .with_brightness(0.1, 0.9)?;
        assert_eq!(limit.saturation(), (0.25, 0.75));
        assert_eq!(limit.brightness(), (0.1, 0.9));
        Ok(())
    }

    #[test]
    fn test_bounds() {
        assert!(
            ColorLimit::new().with_brightness(0.0, 1.5).is_err(),
            "end above one"
        );
        assert!(
            ColorLimit::new().with_saturation(-0.1, 1.0).is_err(),
            "start below zero"
        );
    }
}
