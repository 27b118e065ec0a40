use crate::Float;

/// Convert the 24-bit color to floating point coordinates in `0..=1`.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates range `0..=1`. Even if that is
/// not the case, the conversion rounds to the nearest integer and clamps to
/// `0x00..=0xff`. Not-a-number becomes zero.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    fn convert(c: Float) -> u8 {
        // The cast saturates and maps NaN to zero.
        (c * 255.0).round() as u8
    }

    let [r, g, b] = *coordinates;
    [convert(r), convert(g), convert(b)]
}

/// Round the value to the given number of digits after the decimal.
#[inline]
pub(crate) fn round_to(value: Float, digits: i32) -> Float {
    let factor = (10.0 as Float).powi(digits);
    (value * factor).round() / factor
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to HSV coordinates.
///
/// All coordinates range `0..=1`, including hue, which is a fraction of a full
/// turn and hence strictly smaller than one. Achromatic colors have zero hue
/// and saturation.
pub(crate) fn rgb_to_hsv(coordinates: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *coordinates;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;

    if min == max {
        return [0.0, 0.0, value];
    }

    let delta = max - min;
    let saturation = delta / max;

    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;

    let sextant = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(sextant / 6.0).rem_euclid(1.0), saturation, value]
}

/// Convert HSV coordinates to RGB coordinates.
///
/// This function is the inverse of [`rgb_to_hsv`]. Hue wraps around, i.e.,
/// a hue of one is the same as a hue of zero.
pub(crate) fn hsv_to_rgb(coordinates: &[Float; 3]) -> [Float; 3] {
    let [h, s, v] = *coordinates;
    if s == 0.0 {
        return [v, v, v];
    }

    let scaled = h * 6.0;
    let sextant = scaled.floor();
    let f = scaled - sextant;

    let p = v * (1.0 - s);
    let q = v * s.mul_add(-f, 1.0);
    let t = v * s.mul_add(f - 1.0, 1.0);

    match (sextant as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

// ====================================================================================================================
