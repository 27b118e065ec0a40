mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{prefers_white, to_contrast_ratio, to_luminance};

// conversion
pub(crate) use conversion::{from_24bit, hsv_to_rgb, rgb_to_hsv, round_to, to_24bit};

// equality
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub use string::is_hashed_hex;
pub(crate) use string::parse_hex;
