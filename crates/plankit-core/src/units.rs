//! Conversion between model centimeters and screen pixels.
//!
//! The model is authored entirely in centimeters; pixels appear only when a
//! rendering layer asks for them. Keeping the conversion in one place means
//! the scale can never drift between subsystems.

use crate::constants::PX_PER_CM;

/// Converts a length in centimeters to screen pixels at zoom 1.0.
pub fn to_px(cm: f64) -> f64 {
    cm * PX_PER_CM
}

/// Converts a length in screen pixels at zoom 1.0 to centimeters.
pub fn to_cm(px: f64) -> f64 {
    px / PX_PER_CM
}

/// Rounds a pixel length to the nearest whole centimeter and converts it
/// back to pixels.
///
/// Useful for pointer input: the document only ever stores integral-looking
/// centimeter values for grid-aligned interactions.
pub fn snap_px_to_cm(px: f64) -> f64 {
    to_px(to_cm(px).round())
}
