use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format with or without leading `#`.
///
/// If successful, this function returns the three coordinates as unsigned
/// bytes. Unlike CSS, it does not accept the three-digit shorthand, and unlike
/// integer parsing, it does not accept signs. It also does not trim white
/// space.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() {
        return Err(ColorFormatError::Empty);
    } else if digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength);
    }

    fn parse_digit(byte: u8) -> Result<u8, ColorFormatError> {
        match byte {
            b'0'..=b'9' => Ok(byte - b'0'),
            b'a'..=b'f' => Ok(byte - b'a' + 10),
            b'A'..=b'F' => Ok(byte - b'A' + 10),
            _ => Err(ColorFormatError::MalformedHex),
        }
    }

    let mut coordinates = [0_u8; 3];
    for (coordinate, pair) in coordinates.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
        let [high, low] = *pair else {
            return Err(ColorFormatError::MalformedHex);
        };
        *coordinate = (parse_digit(high)? << 4) | parse_digit(low)?;
    }

    Ok(coordinates)
}

/// Determine whether the string is a hashed hexadecimal color with three or
/// six digits.
///
/// # Examples
///
/// ```
/// # use legible::is_hashed_hex;
/// assert!(is_hashed_hex("#0065ff"));
/// assert!(is_hashed_hex("#F0C"));
/// assert!(!is_hashed_hex("0065ff"));
/// assert!(!is_hashed_hex("#0065f"));
/// ```
#[cfg_attr(feature = "pyffi", pyo3::pyfunction)]
pub fn is_hashed_hex(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|digits| {
        matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{is_hashed_hex, parse_hex, ColorFormatError};

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("#A1B2C3")?, [0xa1_u8, 0xb2, 0xc3]);
        assert_eq!(parse_hex("a1b2c3")?, [0xa1_u8, 0xb2, 0xc3]);
        assert_eq!(parse_hex("#000000")?, [0_u8, 0, 0]);
        assert_eq!(parse_hex("#fFfFfF")?, [0xff_u8, 0xff, 0xff]);

        assert_eq!(parse_hex(""), Err(ColorFormatError::Empty));
        assert_eq!(parse_hex("#"), Err(ColorFormatError::Empty));
        assert_eq!(parse_hex("#12345"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#1234567"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#123"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("##123456"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex(" 123456"), Err(ColorFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#ZZZZZZ"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#+1+2+3"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hex("#12345g"), Err(ColorFormatError::MalformedHex));

        // Six bytes but only two characters
        assert_eq!(parse_hex("#💩00"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_is_hashed_hex() {
        assert!(is_hashed_hex("#FF0036"), "six digits");
        assert!(is_hashed_hex("#abc"), "three digits");
        assert!(!is_hashed_hex("FF0036"), "no hash");
        assert!(!is_hashed_hex("#FF00"), "four digits");
        assert!(!is_hashed_hex("#GG0036"), "not hexadecimal");
        assert!(!is_hashed_hex(""), "empty");
        assert!(!is_hashed_hex(" #FF0036"), "white space");
    }
}
