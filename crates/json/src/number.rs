//! Culture-invariant number formatting.
//!
//! Numbers are written with their shortest round-trip digits. Fixed notation
//! is used unless the integer part needs more than `max(digits, P)` digits or
//! the value drops below `1e-4`; then the invariant scientific form
//! `d.dddE+XX` is used, with at least two exponent digits.

use crate::Number;

/// Floating point width every number is normalized to before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Normalize to `f64`.
    #[default]
    Double,
    /// Narrow to `f32` first, matching generators that format every number as
    /// a single precision float.
    Single,
}

impl Precision {
    /// Digit count below which fixed notation is always kept.
    fn general_digits(self) -> usize {
        match self {
            Precision::Double => 15,
            Precision::Single => 7,
        }
    }
}

/// Appends the textual form of `number` to `out`.
pub fn format_number(out: &mut String, number: Number, precision: Precision) {
    let value = number.to_float();

    if value.is_nan() {
        out.push_str("NaN");
        return;
    }
    if value.is_infinite() {
        out.push_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        return;
    }

    // `{:e}` yields the shortest round-trip digits for the chosen width
    let scientific = match precision {
        Precision::Double => format!("{:e}", value),
        Precision::Single => format!("{:e}", value as f32),
    };
    write_general(out, &scientific, precision.general_digits());
}

/// Rewrites Rust's `{:e}` output (`-1.25e3`) into general notation.
fn write_general(out: &mut String, scientific: &str, general_digits: usize) {
    let (negative, unsigned) = match scientific.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, scientific),
    };
    let (mantissa, exponent) = unsigned.split_once('e').unwrap_or((unsigned, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if negative {
        out.push('-');
    }
    if digits == "0" {
        out.push('0');
        return;
    }

    // position of the decimal point relative to the first digit
    let scale = exponent + 1;
    let max_digits = digits.len().max(general_digits) as i32;

    if scale > max_digits || scale < -3 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('E');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.unsigned_abs()));
    } else if scale <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(scale.unsigned_abs() as usize));
        out.push_str(&digits);
    } else {
        let scale = scale as usize;
        if scale >= digits.len() {
            out.push_str(&digits);
            out.extend(std::iter::repeat('0').take(scale - digits.len()));
        } else {
            out.push_str(&digits[..scale]);
            out.push('.');
            out.push_str(&digits[scale..]);
        }
    }
}
