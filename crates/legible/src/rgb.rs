#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{from_24bit, parse_hex, to_24bit, to_contrast_ratio, to_luminance};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit RGB color.
///
/// # Examples
///
/// Rust code can create a new color with [`Rgb::new`], from an array of
/// coordinates, from a packed `0xRRGGBB` integer, or by parsing hexadecimal
/// notation with or without leading `#`.
///
/// ```
/// # use legible::Rgb;
/// # use legible::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let blue = Rgb::new(0xae, 0xe8, 0xfb);
/// assert_eq!(Rgb::from([0xae, 0xe8, 0xfb]), blue);
/// assert_eq!(Rgb::from_packed(0xaee8fb), blue);
/// assert_eq!("#AEE8FB".parse::<Rgb>()?, blue);
/// assert_eq!("aee8fb".parse::<Rgb>()?, blue);
/// # Ok(())
/// # }
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #aee8fb;"></div>
/// </div>
/// <br>
///
/// It can access the coordinates with [`Rgb as AsRef<[u8;
/// 3]>`](struct.Rgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-Rgb) or
/// with [`Rgb as
/// Index<usize>`](struct.Rgb.html#impl-Index%3Cusize%3E-for-Rgb).
///
/// ```
/// # use legible::Rgb;
/// let sea_foam = Rgb::new(0xb6, 0xeb, 0xd4);
/// assert_eq!(sea_foam.as_ref(), &[182_u8, 235, 212]);
/// assert_eq!(sea_foam[1], 235);
/// ```
///
/// Finally, it formats as lowercase hashed hexadecimal with `Display` and as
/// uppercase with `UpperHex`.
///
/// ```
/// # use legible::Rgb;
/// let sand = Rgb::new(0xee, 0xdc, 0xad);
/// assert_eq!(format!("{}", sand), "#eedcad");
/// assert_eq!(format!("{:X}", sand), "#EEDCAD");
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "legible"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb([0xff, 0xff, 0xff]);

    /// Pure black.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Create a new color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new color from the packed `0xRRGGBB` integer.
    ///
    /// The most significant byte is ignored.
    pub const fn from_packed(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self([r, g, b])
    }

    /// Create a new color from coordinates in `0..=1`, rounding to the nearest
    /// 8-bit value and clamping out-of-range coordinates.
    pub(crate) fn from_coordinates(coordinates: &[Float; 3]) -> Self {
        Self(to_24bit(coordinates))
    }

    /// Get the coordinates scaled to `0..=1`.
    pub(crate) fn to_coordinates(self) -> [Float; 3] {
        let [r, g, b] = self.0;
        from_24bit(r, g, b)
    }
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Rgb {
    /// Create a new color from its coordinates. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn py_new(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b)
    }

    /// Parse a color in hexadecimal notation. <i class=python-only>Python
    /// only!</i>
    ///
    /// This method offers the same functionality as [`Rgb as
    /// FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Create a new color from the packed `0xRRGGBB` integer. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "from_packed")]
    pub const fn py_from_packed(value: u32) -> Self {
        Self::from_packed(value)
    }

    /// Access this color's coordinates. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Pack this color into a `0xRRGGBB` integer.
    pub const fn to_packed(&self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0, r, g, b])
    }

    /// Compute this color's relative luminance.
    ///
    /// The result ranges from 0 for black to 1 for white.
    pub fn luminance(&self) -> Float {
        relative_luminance(self)
    }

    /// Compute the contrast ratio between this and the other color.
    ///
    /// The result ranges from 1 for colors with the same luminance to 21 for
    /// black and white. It is the same no matter which of the two colors is
    /// `self`.
    pub fn contrast_with(&self, other: &Rgb) -> Float {
        to_contrast_ratio(self.luminance(), other.luminance())
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Rgb({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

/// Compute the relative luminance of the given color.
///
/// This function gamma-expands the normalized sRGB coordinates, using the
/// WCAG 2.0 threshold of 0.03928 for the linear segment, and weighs them with
/// the ITU-R BT.709 coefficients 0.2126, 0.7152, and 0.0722.
///
/// ```
/// # use legible::{relative_luminance, Rgb};
/// assert_eq!(relative_luminance(&Rgb::BLACK), 0.0);
/// assert!((relative_luminance(&Rgb::WHITE) - 1.0).abs() < 1e-6);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn relative_luminance(color: &Rgb) -> Float {
    to_luminance(&color.to_coordinates())
}

impl core::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a color in hexadecimal notation, `#RRGGBB` or `RRGGBB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

impl From<Rgb> for u32 {
    fn from(value: Rgb) -> Self {
        value.to_packed()
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

impl core::fmt::UpperHex for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

// ====================================================================================================================
