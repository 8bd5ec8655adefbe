//! Numeric formatting shared by the HIERARCHY and MOTION blocks.

/// Decimal places for offsets and frame values.
pub const VALUE_PRECISION: usize = 2;

/// Decimal places for the frame period.
pub const FRAME_TIME_PRECISION: usize = 4;

/// Indentation unit per nesting level.
pub const INDENT: char = '\t';

/// Extra digits inspected past the rounding position when looking for an
/// exact tie. Wider than the 17 significant digits an f64 can carry.
const TIE_DIGITS: usize = 24;

/// Format a number with fixed precision, replacing the sign of
/// non-negative values with a space so columns line up.
///
/// Exact ties round half away from zero (`0.125` -> `0.13`).
pub fn format_number(value: f64, precision: usize) -> String {
    // -0.0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    let value = round_tie_away(value, precision);
    if value >= 0.0 {
        format!(" {:.*}", precision, value)
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Format an offset component or frame value.
#[inline]
pub fn format_value(value: f64) -> String {
    format_number(value, VALUE_PRECISION)
}

/// Format the frame period.
#[inline]
pub fn format_frame_time(period: f64) -> String {
    format!("{:.*}", FRAME_TIME_PRECISION, round_tie_away(period, FRAME_TIME_PRECISION))
}

/// Move an exact decimal tie at `precision` to the value above it in
/// magnitude. Everything else is left to the formatter's exact rounding.
fn round_tie_away(value: f64, precision: usize) -> f64 {
    if !value.is_finite() || !is_exact_tie(value, precision) {
        return value;
    }
    // A tie times 10^p is k + 0.5, exactly representable
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// True when the exact decimal expansion of `value` ends in a single 5
/// right after `precision` places.
fn is_exact_tie(value: f64, precision: usize) -> bool {
    let digits = format!("{:.*}", precision + TIE_DIGITS, value.abs());
    let Some(dot) = digits.find('.') else {
        return false;
    };
    let tail = &digits[dot + 1 + precision..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}
