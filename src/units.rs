//! Length conversions between semantic units and WordprocessingML units.
//!
//! Callers describe documents in points, inches and centimetres; the
//! writer converts to the integer units the format stores:
//!
//! - twips (twentieths of a point) for spacing, indents, margins and widths
//! - half-points for font sizes
//! - eighths of a point for border widths
//! - EMUs (English Metric Units) for DrawingML extents

/// Letter page width (8.5 in).
pub const LETTER_WIDTH_TWIPS: u32 = 12240;

/// Letter page height (11 in).
pub const LETTER_HEIGHT_TWIPS: u32 = 15840;

const TWIPS_PER_POINT: f64 = 20.0;
const TWIPS_PER_INCH: f64 = 1440.0;
const CM_PER_INCH: f64 = 2.54;
const EMU_PER_CM: f64 = 360_000.0;

fn round_unsigned(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value.round() as u32
    }
}

/// Convert points to twips.
pub fn points_to_twips(points: f32) -> u32 {
    round_unsigned(points as f64 * TWIPS_PER_POINT)
}

/// Convert points to half-points (`w:sz`).
pub fn points_to_half_points(points: f32) -> u32 {
    round_unsigned(points as f64 * 2.0)
}

/// Convert points to eighths of a point (border `w:sz`).
pub fn points_to_eighths(points: f32) -> u32 {
    round_unsigned(points as f64 * 8.0)
}

/// Convert inches to twips.
pub fn inches_to_twips(inches: f32) -> u32 {
    round_unsigned(inches as f64 * TWIPS_PER_INCH)
}

/// Convert centimetres to twips.
pub fn cm_to_twips(cm: f32) -> u32 {
    round_unsigned(cm as f64 / CM_PER_INCH * TWIPS_PER_INCH)
}

/// Convert centimetres to EMUs.
pub fn cm_to_emu(cm: f32) -> u32 {
    round_unsigned(cm as f64 * EMU_PER_CM)
}

/// Convert inches to centimetres.
pub fn inches_to_cm(inches: f32) -> f32 {
    (inches as f64 * CM_PER_INCH) as f32
}
