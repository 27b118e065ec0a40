//! # Legible
//!
//! Legible picks readable text colors for arbitrary backgrounds.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enable the `pyffi` feature to also document the Python integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Legible's main abstractions are:
//!
//!   * [`Rgb`] implements **24-bit colors**. It parses hexadecimal notation
//!     with or without leading `#`, converts from and to packed integers, and
//!     computes [relative luminance](relative_luminance) as well as contrast
//!     ratios per WCAG 2.0.
//!   * [`best_text_color`] picks **black or white text**, whichever contrasts
//!     more with a given background. [`best_text_color_for`] does the same for
//!     a background in hexadecimal notation.
//!   * [`TextColors`] picks between a **custom light and dark text color**,
//!     either by [`WcagLevel`] or by a luminance threshold.
//!   * The [`limit`] module **clamps saturation and brightness** of colors,
//!     the [`palette`] module **selects colors from lists**, and the
//!     [`swatch`] module describes the **swatch** for displaying a color
//!     result.
//!
//! All functions are pure. They neither keep state nor perform I/O, and hence
//! are safe to call from any number of threads at the same time.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use legible::error::ColorFormatError;
//! # use legible::{best_text_color_for, Rgb, TextColors, WcagLevel};
//! # fn main() -> Result<(), ColorFormatError> {
//! // Black text on mid gray
//! assert_eq!(best_text_color_for("#808080")?, Rgb::BLACK);
//!
//! // White text on dark blue
//! let navy: Rgb = "#000040".parse()?;
//! assert_eq!(TextColors::default().select_by_contrast(navy, WcagLevel::AAA), Rgb::WHITE);
//!
//! // Malformed colors are errors
//! assert_eq!(best_text_color_for("#ZZZZZZ"), Err(ColorFormatError::MalformedHex));
//! # Ok(())
//! # }
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Legible supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls legible's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Python
//! are decorated with <i class=python-only>Python only!</i>.
//!
//!
//! ## 4. Logging
//!
//! Legible reports the inputs, intermediate values, and results of color
//! selection and limiting through the [log](https://docs.rs/log) facade at
//! debug level, and contrast computations at trace level. It never installs a
//! logger itself.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod contrast;
mod core;
pub mod error;
pub mod limit;
pub mod palette;
mod rgb;
pub mod swatch;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use contrast::{best_text_color, best_text_color_for, contrast_ratio, TextColors, WcagLevel};
pub use core::is_hashed_hex;
pub use rgb::{relative_luminance, Rgb};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn legible(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(best_text_color, m)?)?;
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(is_hashed_hex, m)?)?;
    m.add_function(wrap_pyfunction!(relative_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(palette::py_select_color, m)?)?;

    m.add_class::<limit::ColorLimit>()?;
    m.add_class::<Rgb>()?;
    m.add_class::<TextColors>()?;
    m.add_class::<WcagLevel>()?;

    Ok(())
}
