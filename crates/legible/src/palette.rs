//! Selecting one color from a list of colors.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::is_hashed_hex;
use crate::error::ColorFormatError;

/// Select the color at the given 1-based position from a separated list.
///
/// This function splits the colors at every occurrence of the separator, trims
/// white space around each entry, and picks the entry at the position, which
/// is clamped into `1..=count`. An empty separator treats the entire input as
/// a single entry. The selected entry must be a hashed hexadecimal color with
/// three or six digits, as determined by [`is_hashed_hex`], and is returned as
/// is.
///
/// # Examples
///
/// ```
/// # use legible::palette::select_color;
/// # use legible::error::ColorFormatError;
/// let colors = "#FF0036, #FF5000, #0065ff, #3D7FFF";
/// assert_eq!(select_color(colors, ",", 2), Ok("#FF5000"));
/// assert_eq!(select_color(colors, ",", 0), Ok("#FF0036"));
/// assert_eq!(select_color(colors, ",", 99), Ok("#3D7FFF"));
/// assert_eq!(select_color("#FF0036; teal", ";", 2), Err(ColorFormatError::MalformedHex));
/// ```
pub fn select_color<'a>(
    colors: &'a str,
    separator: &str,
    position: usize,
) -> Result<&'a str, ColorFormatError> {
    let entries: Vec<&str> = if separator.is_empty() {
        vec![colors.trim()]
    } else {
        colors.split(separator).map(str::trim).collect()
    };

    // Splitting always yields at least one entry.
    let index = position.clamp(1, entries.len()) - 1;
    let selected = entries[index];
    log::debug!(
        "selecting entry {} of {} from {:?}: {:?}",
        index + 1,
        entries.len(),
        colors,
        selected
    );

    if is_hashed_hex(selected) {
        Ok(selected)
    } else if selected.is_empty() {
        Err(ColorFormatError::Empty)
    } else {
        Err(ColorFormatError::MalformedHex)
    }
}

/// Select the color at the given 1-based position from a separated list. <i
/// class=python-only>Python only!</i>
///
/// This function offers the same functionality as [`select_color`] but
/// returns an owned string.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "select_color", signature = (colors, separator = ",", position = 1))]
pub fn py_select_color(
    colors: &str,
    separator: &str,
    position: usize,
) -> Result<String, ColorFormatError> {
    select_color(colors, separator, position).map(String::from)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::select_color;
    use crate::error::ColorFormatError;

    const COLORS: &str = "#FF0036, #FF5000, #0065ff, #3D7FFF";

    #[test]
    fn test_select_color() {
        assert_eq!(select_color(COLORS, ",", 1), Ok("#FF0036"));
        assert_eq!(select_color(COLORS, ",", 3), Ok("#0065ff"));
        assert_eq!(select_color(COLORS, ",", 4), Ok("#3D7FFF"));
        assert_eq!(select_color(COLORS, ",", 0), Ok("#FF0036"));
        assert_eq!(select_color(COLORS, ",", 4096), Ok("#3D7FFF"));

        assert_eq!(select_color("  #abc  ", ",", 1), Ok("#abc"));
        assert_eq!(select_color("#abc\n#def\n#123", "\n", 2), Ok("#def"));
        assert_eq!(select_color("#abc | #def", " | ", 2), Ok("#def"));
        assert_eq!(select_color(" #abcdef ", "", 3), Ok("#abcdef"));
    }

    #[test]
    fn test_invalid_entry() {
        assert_eq!(select_color("", ",", 1), Err(ColorFormatError::Empty));
        assert_eq!(select_color("#FF0036,,#0065ff", ",", 2), Err(ColorFormatError::Empty));
        assert_eq!(
            select_color("#FF0036,FF5000", ",", 2),
            Err(ColorFormatError::MalformedHex)
        );
        assert_eq!(
            select_color("#FF0036,#FF50", ",", 2),
            Err(ColorFormatError::MalformedHex)
        );

        // The wrong separator leaves one long entry.
        assert_eq!(select_color(COLORS, ";", 1), Err(ColorFormatError::MalformedHex));
    }
}
