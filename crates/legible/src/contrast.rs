//! Choosing readable text colors for a background.
//!
//! [`best_text_color`] picks black or white text, whichever has the larger
//! WCAG 2.0 contrast ratio with the background. [`TextColors`] chooses between
//! a custom light and dark text color instead, either by
//! [`WcagLevel`] or by a luminance threshold.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{prefers_white, to_contrast_ratio};
use crate::error::{ColorFormatError, OutOfRangeError};
use crate::{Float, Rgb};

/// Determine the more readable text color for the given background.
///
/// This function computes the background's [relative
/// luminance](crate::relative_luminance) `L` and compares the contrast ratio
/// with white text, `1.05 / (L + 0.05)`, to the contrast ratio with black
/// text, `(L + 0.05) / 0.05`. It returns white only if white has the strictly
/// larger contrast and black otherwise. The result always is either
/// [`Rgb::WHITE`] or [`Rgb::BLACK`].
///
/// ```
/// # use legible::{best_text_color, Rgb};
/// assert_eq!(best_text_color(Rgb::BLACK), Rgb::WHITE);
/// assert_eq!(best_text_color(Rgb::WHITE), Rgb::BLACK);
/// assert_eq!(best_text_color(Rgb::new(0x80, 0x80, 0x80)), Rgb::BLACK);
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #808080; color: #000000;">Aa</div>
/// </div>
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn best_text_color(background: Rgb) -> Rgb {
    if prefers_white(background.luminance()) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

/// Determine the more readable text color for the background in hexadecimal
/// notation.
///
/// This function parses `#RRGGBB` or `RRGGBB` before delegating to
/// [`best_text_color`]. A malformed background is an error; this function
/// never substitutes a default color.
///
/// ```
/// # use legible::{best_text_color_for, Rgb};
/// # use legible::error::ColorFormatError;
/// assert_eq!(best_text_color_for("#0065ff"), Ok(Rgb::WHITE));
/// assert_eq!(best_text_color_for("#12345"), Err(ColorFormatError::UnexpectedLength));
/// ```
pub fn best_text_color_for(background: &str) -> Result<Rgb, ColorFormatError> {
    background.parse().map(best_text_color)
}

/// Compute the contrast ratio between two relative luminances.
///
/// The ratio is `(lighter + 0.05) / (darker + 0.05)`. It does not matter in
/// which order the luminances are given.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    to_contrast_ratio(luminance1, luminance2)
}

// ====================================================================================================================

/// A WCAG conformance level for the contrast of normal-sized text.
#[cfg_attr(feature = "pyffi", pyclass(eq, eq_int, frozen, hash, module = "legible"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum WcagLevel {
    /// Level AA requires a contrast ratio of at least 4.5.
    #[default]
    AA,
    /// Level AAA requires a contrast ratio of at least 7.
    AAA,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl WcagLevel {
    /// Get the minimum contrast ratio for this level.
    pub const fn min_contrast(&self) -> Float {
        match *self {
            Self::AA => 4.5,
            Self::AAA => 7.0,
        }
    }
}

// ====================================================================================================================

/// A pair of light and dark text colors.
///
/// By default, the light color is white and the dark color is black. Both
/// selection methods always return one of the two colors.
///
/// # Examples
///
/// ```
/// # use legible::{Rgb, TextColors, WcagLevel};
/// let colors = TextColors::new(Rgb::new(0xdb, 0xb8, 0xbf), Rgb::new(0x4b, 0x3e, 0x41));
/// let orange = Rgb::new(0xff, 0x65, 0x00);
///
/// // Neither passes AAA, so the dark color is the fallback.
/// assert_eq!(colors.select_by_contrast(orange, WcagLevel::AAA), colors.dark());
///
/// // Orange is darker than 0.5 and hence gets the light color.
/// assert_eq!(colors.select_by_luminance(orange, 0.5), Ok(colors.light()));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "legible"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextColors {
    light: Rgb,
    dark: Rgb,
}

impl TextColors {
    /// Create a new pair of text colors.
    pub const fn new(light: Rgb, dark: Rgb) -> Self {
        Self { light, dark }
    }
}

impl Default for TextColors {
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl TextColors {
    /// Create a new pair of text colors, by default white and black. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (light = Rgb::WHITE, dark = Rgb::BLACK))]
    pub const fn py_new(light: Rgb, dark: Rgb) -> Self {
        Self::new(light, dark)
    }

    /// Get the light text color.
    pub const fn light(&self) -> Rgb {
        self.light
    }

    /// Get the dark text color.
    pub const fn dark(&self) -> Rgb {
        self.dark
    }

    /// Select the text color with sufficient contrast for the given level.
    ///
    /// If the light color's contrast ratio with the background meets the
    /// level's minimum, this method returns the light color. Otherwise, if the
    /// dark color's contrast ratio meets the minimum, it returns the dark
    /// color. If neither does, it still returns the dark color.
    pub fn select_by_contrast(&self, background: Rgb, level: WcagLevel) -> Rgb {
        let minimum = level.min_contrast();
        let light_contrast = self.light.contrast_with(&background);
        let dark_contrast = self.dark.contrast_with(&background);

        let (selected, kind) = if minimum <= light_contrast {
            (self.light, "light")
        } else if minimum <= dark_contrast {
            (self.dark, "dark")
        } else {
            (self.dark, "fallback dark")
        };

        log::debug!(
            "background {} has contrast {:.2} with light {} and {:.2} with dark {}, \
            selecting {} {} for {:?}",
            background,
            light_contrast,
            self.light,
            dark_contrast,
            self.dark,
            kind,
            selected,
            level
        );
        selected
    }

    /// Select the text color by the background's relative luminance.
    ///
    /// If the background's relative luminance is strictly larger than the
    /// threshold, this method returns the dark color and otherwise the light
    /// color. The threshold must range `0..=1`.
    pub fn select_by_luminance(
        &self,
        background: Rgb,
        threshold: Float,
    ) -> Result<Rgb, OutOfRangeError> {
        let threshold = OutOfRangeError::check_fraction(threshold)?;
        let luminance = background.luminance();

        let selected = if threshold < luminance {
            self.dark
        } else {
            self.light
        };

        log::debug!(
            "background {} has luminance {:.4} with threshold {}, selecting {}",
            background,
            luminance,
            threshold,
            selected
        );
        Ok(selected)
    }
}

// ====================================================================================================================
