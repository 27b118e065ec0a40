//! The color swatch shown for a color result.
//!
//! A swatch pairs a background color with a text color and a label. When the
//! result names its text color explicitly, the label shows both colors. When
//! it does not, the label is just the background color and the text color is
//! the more readable of black and white. Drawing the swatch is up to the
//! caller.

use crate::{best_text_color, Rgb};

/// A background color with an optional explicit text color.
///
/// # Examples
///
/// ```
/// # use legible::Rgb;
/// # use legible::swatch::Swatch;
/// let swatch = Swatch::new(Rgb::new(0x00, 0x65, 0xff));
/// assert_eq!(swatch.text_color(), Rgb::WHITE);
/// assert_eq!(swatch.to_string(), "#0065ff");
///
/// let swatch = Swatch::with_text(Rgb::new(0xff, 0x00, 0x36), Rgb::BLACK);
/// assert_eq!(swatch.to_string(), "BACKGROUND(#ff0036)\nTEXT(#000000)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Swatch {
    background: Rgb,
    text: Option<Rgb>,
}

impl Swatch {
    /// Create a new swatch with automatic text color.
    pub const fn new(background: Rgb) -> Self {
        Self {
            background,
            text: None,
        }
    }

    /// Create a new swatch with explicit text color.
    pub const fn with_text(background: Rgb, text: Rgb) -> Self {
        Self {
            background,
            text: Some(text),
        }
    }

    /// Get the background color.
    pub const fn background(&self) -> Rgb {
        self.background
    }

    /// Determine whether the text color is explicit.
    pub const fn has_explicit_text(&self) -> bool {
        self.text.is_some()
    }

    /// Get the text color.
    ///
    /// If the swatch has no explicit text color, this method falls back on
    /// [`best_text_color`].
    pub fn text_color(&self) -> Rgb {
        self.text.unwrap_or_else(|| best_text_color(self.background))
    }
}

impl From<Rgb> for Swatch {
    fn from(value: Rgb) -> Self {
        Self::new(value)
    }
}

impl core::fmt::Display for Swatch {
    /// Format the label.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.text {
            Some(text) => f.write_fmt(format_args!(
                "BACKGROUND({})\nTEXT({})",
                self.background, text
            )),
            None => f.write_fmt(format_args!("{}", self.background)),
        }
    }
}
