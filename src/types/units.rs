//! STX unit conversions.
//!
//! Amounts cross the API as `f64` and are converted by the fixed scale of
//! [`MICRO_STX_PER_STX`]. The integer helpers at the bottom of the file give an
//! exact path for user-supplied strings.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    error::{AppError, Result},
    stacks::{MICRO_STX_PER_STX, STX_SYMBOL},
};

const SCALE: f64 = MICRO_STX_PER_STX as f64;

/// From this magnitude up, fixed-point display switches to exponent form.
const FIXED_POINT_LIMIT: f64 = 1e21;

/// Convert micro-STX to STX.
pub fn micro_stx_to_stx(amount: f64) -> f64 {
    amount / SCALE
}

/// Convert STX to micro-STX, flooring toward negative infinity.
///
/// `-0.0000015` becomes `-2`, not `-1`.
pub fn stx_to_micro_stx(amount: f64) -> f64 {
    (amount * SCALE).floor()
}

/// Format a micro-STX amount as `"<stx to 2 places> STX"`.
pub fn format_stx(amount: f64) -> String {
    format!("{} {}", to_fixed(micro_stx_to_stx(amount), 2), STX_SYMBOL)
}

/// Render `value` with exactly `digits` fractional digits.
///
/// Rounds the exact binary value of `value`, with midpoints going away from
/// zero. A negative input keeps its `-` even when it rounds to zero.
/// Magnitudes of 1e21 and above are written as `<shortest mantissa>e+<exp>`.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let body = match Decimal::from_f64_retain(magnitude).filter(|_| magnitude < FIXED_POINT_LIMIT)
    {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            rounded.to_string()
        }
        None => format!("{:e}", magnitude).replacen('e', "e+", 1),
    };

    format!("{}{}", sign, body)
}

/// Format an integer amount with decimals to a human-readable string.
pub fn format_units(value: u128, decimals: u8) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    let len = value_str.len();
    if len <= decimals {
        let zeros = decimals - len;
        let decimal_part = value_str.trim_end_matches('0');
        format!("0.{}{}", "0".repeat(zeros), decimal_part)
    } else {
        let (integer, decimal) = value_str.split_at(len - decimals);
        let decimal = decimal.trim_end_matches('0');
        if decimal.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, decimal)
        }
    }
}

/// Parse a human-readable amount string to an integer amount with decimals.
///
/// Fraction digits beyond `decimals` are truncated.
pub fn parse_units(amount: &str, decimals: u8) -> Result<u128> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err(AppError::Parse("Amount cannot be empty".to_string()));
    }

    if amount.starts_with('-') {
        return Err(AppError::Parse("Amount cannot be negative".to_string()));
    }

    let (integer, fraction) = match amount.split_once('.') {
        Some((_, rest)) if rest.contains('.') => {
            return Err(AppError::Parse(format!("Invalid amount format: {}", amount)));
        }
        Some((integer, fraction)) => (integer, fraction),
        None => (amount, ""),
    };

    if integer.is_empty() && fraction.is_empty() {
        return Err(AppError::Parse(format!("Invalid amount format: {}", amount)));
    }
    if !integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(AppError::Parse(format!("Invalid amount: {}", amount)));
    }

    let decimals = decimals as usize;
    let mut fraction = fraction.to_string();
    if fraction.len() > decimals {
        fraction.truncate(decimals);
    } else {
        fraction.push_str(&"0".repeat(decimals - fraction.len()));
    }

    // Digits are validated above, so any remaining failure is overflow.
    let overflow = || AppError::NumericOverflow(format!("Amount too large: {}", amount));

    let multiplier = 10u128.checked_pow(decimals as u32).ok_or_else(overflow)?;
    let integer_value =
        if integer.is_empty() { 0 } else { integer.parse::<u128>().map_err(|_| overflow())? };
    let fraction_value =
        if fraction.is_empty() { 0 } else { fraction.parse::<u128>().map_err(|_| overflow())? };

    integer_value
        .checked_mul(multiplier)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or_else(overflow)
}
