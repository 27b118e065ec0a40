use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB
/// coordinates, per ITU-R BT.709.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The threshold below which gamma expansion is linear.
///
/// WCAG 2.0 uses 0.03928, which is what sRGB's draft used, not the 0.04045 of
/// the final standard. For 8-bit channels, the two never disagree.
const LINEAR_THRESHOLD: Float = 0.03928;

/// The flare added to both luminances before dividing them.
pub(crate) const CONTRAST_OFFSET: Float = 0.05;

/// Gamma-expand a normalized sRGB coordinate.
#[inline]
fn linearize(value: Float) -> Float {
    if value <= LINEAR_THRESHOLD {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance for the given sRGB coordinates.
///
/// The coordinates must range `0..=1`, which makes the result range `0..=1`
/// as well.
pub(crate) fn to_luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the contrast ratio between the two relative luminances.
///
/// The ratio is symmetric, i.e., the arguments are interchangeable, and
/// ranges from 1 for identical luminances to 21 for black and white.
#[inline]
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

/// Determine whether white text contrasts more with a background of the given
/// relative luminance than black text.
///
/// Only a strictly larger contrast favors white. Ties go to black.
#[inline]
pub(crate) fn prefers_white(luminance: Float) -> bool {
    let with_white = to_contrast_ratio(1.0, luminance);
    let with_black = to_contrast_ratio(luminance, 0.0);
    log::trace!(
        "luminance {:.4} has contrast {:.4} with white and {:.4} with black",
        luminance,
        with_white,
        with_black
    );

    with_white > with_black
}

#[cfg(test)]
mod test {
    use super::{linearize, prefers_white, to_contrast_ratio, to_luminance, CONTRAST_OFFSET};
    use crate::assert_close_enough;
    use crate::Float;

    #[test]
    fn test_linearize() {
        assert_eq!(linearize(0.0), 0.0);
        assert_close_enough!(linearize(1.0), 1.0);
        assert_close_enough!(linearize(0.03), 0.03 / 12.92);

        // Mid gray #808080
        let linear = linearize(128.0 / 255.0);
        assert!(
            (linear - 0.2158).abs() < 1e-4,
            "mid gray should expand to about 0.2158, not {}",
            linear
        );
    }

    #[test]
    fn test_luminance() {
        assert_eq!(to_luminance(&[0.0, 0.0, 0.0]), 0.0);
        assert_close_enough!(to_luminance(&[1.0, 1.0, 1.0]), 1.0);
        assert_close_enough!(to_luminance(&[1.0, 0.0, 0.0]), 0.2126);
        assert_close_enough!(to_luminance(&[0.0, 1.0, 0.0]), 0.7152);
        assert_close_enough!(to_luminance(&[0.0, 0.0, 1.0]), 0.0722);

        // Grays have the same luminance as their linear coordinates.
        let gray = 0.6;
        assert_close_enough!(to_luminance(&[gray, gray, gray]), linearize(gray));
    }

    #[test]
    fn test_contrast_ratio() {
        assert_close_enough!(to_contrast_ratio(1.0, 0.0), 21.0);
        assert_close_enough!(to_contrast_ratio(0.0, 1.0), 21.0);
        assert_close_enough!(to_contrast_ratio(0.4, 0.4), 1.0);
        assert_close_enough!(to_contrast_ratio(0.2, 0.7), to_contrast_ratio(0.7, 0.2));
    }

    #[test]
    fn test_prefers_white() {
        assert!(prefers_white(0.0), "black background wants white text");
        assert!(!prefers_white(1.0), "white background wants black text");
        assert!(prefers_white(0.17), "0.17 is below the crossover");
        assert!(!prefers_white(0.19), "0.19 is above the crossover");

        // Both contrasts are equal where (L + 0.05)² = 1.05 * 0.05. The
        // computed luminance is only approximately the crossover, so check
        // that its neighbors fall on either side.
        let crossover: Float = (1.05 as Float * CONTRAST_OFFSET).sqrt() - CONTRAST_OFFSET;
        assert!(prefers_white(crossover - 1e-4), "just below crossover");
        assert!(!prefers_white(crossover + 1e-4), "just above crossover");
    }

    #[cfg(feature = "f64")]
    #[test]
    fn test_tie_goes_to_black() {
        // Both contrasts come out bit-for-bit identical for these luminances.
        for luminance in [0.179128784747792, f64::from_bits(0.179128784747792_f64.to_bits() + 1)] {
            assert_eq!(
                to_contrast_ratio(1.0, luminance),
                to_contrast_ratio(luminance, 0.0),
                "contrasts for {} should tie",
                luminance
            );
            assert!(!prefers_white(luminance), "tie at {} should favor black", luminance);
        }
    }
}
