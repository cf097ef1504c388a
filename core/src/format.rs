//! Display formatting helpers shared by the normalizers and the UI bindings.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Shown when neither city nor state is known.
pub const LOCATION_PLACEHOLDER: &str = "Location not specified";

/// Shown when a record carries no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available";

const CURRENCY_GLYPHS: [char; 3] = ['$', '₦', '€'];

/// Format a raw price for display.
///
/// Strings that already carry a currency glyph (`$`, `₦`, `€`) pass through.
/// Numeric strings become `"$<amount>"` with two decimals, halves rounded away
/// from zero and the sign after the glyph (`"-5"` → `"$-5.00"`). Anything else
/// passes through unchanged.
pub fn format_currency(price: &str) -> String {
    if price.contains(CURRENCY_GLYPHS) {
        return price.to_string();
    }

    let Some(literal) = numeric_prefix(price) else {
        return price.to_string();
    };

    match parse_decimal(literal) {
        Some((negative, magnitude)) => {
            let rounded = magnitude.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            // Negative zero prints unsigned, any other negative keeps its sign.
            let sign = if negative && !magnitude.is_zero() { "-" } else { "" };
            format!("${sign}{:.2}", rounded)
        }
        None => match literal.parse::<f64>() {
            Ok(value) if value == 0.0 => "$0.00".to_string(),
            Ok(value) => format!("${:.2}", value),
            Err(_) => price.to_string(),
        },
    }
}

/// Format a numeric string as en-US dollars, e.g. `"1234.5"` → `"$1,234.50"`.
///
/// Negative amounts, negative zero included, render as `-$x`. Returns the
/// input unchanged when it does not start with a number.
pub fn format_price(price: &str) -> String {
    let Some(literal) = numeric_prefix(price) else {
        return price.to_string();
    };

    match parse_decimal(literal) {
        Some((negative, magnitude)) => format_usd(negative, magnitude),
        None => match literal.parse::<f64>() {
            Ok(value) if value.is_sign_negative() => format!("-${:.2}", value.abs()),
            Ok(value) => format!("${:.2}", value),
            Err(_) => price.to_string(),
        },
    }
}

/// Render a city/state pair, falling back to [`LOCATION_PLACEHOLDER`].
pub fn format_location(city: Option<&str>, state: Option<&str>) -> String {
    let city = city.filter(|c| !c.is_empty());
    let state = state.filter(|s| !s.is_empty());

    match (city, state) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.to_string(),
        (None, Some(state)) => state.to_string(),
        (None, None) => LOCATION_PLACEHOLDER.to_string(),
    }
}

/// Parse the leading number of a string, ignoring trailing garbage
/// (`"12.5kg"` → `12.5`). Returns `None` when no digits lead the string.
pub fn parse_float(input: &str) -> Option<f64> {
    numeric_prefix(input).and_then(|literal| literal.parse().ok())
}

/// Longest prefix (after leading whitespace) that reads as a decimal literal
/// with optional sign, fraction and exponent.
fn numeric_prefix(input: &str) -> Option<&str> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let skip_digits = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_end = skip_digits(end);
    let mut digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = skip_digits(end + 1);
        let frac_digits = frac_end - (end + 1);
        if frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = skip_digits(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Split a literal into its sign and exact magnitude.
fn parse_decimal(literal: &str) -> Option<(bool, Decimal)> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let unsigned = if unsigned.starts_with('.') {
        format!("0{unsigned}")
    } else {
        unsigned.to_string()
    };

    let amount = if unsigned.contains(['e', 'E']) {
        Decimal::from_scientific(&unsigned).ok()?
    } else {
        Decimal::from_str(&unsigned).ok()?
    };

    Some((negative, amount))
}

fn format_usd(negative: bool, magnitude: Decimal) -> String {
    let rounded = magnitude.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let fixed = format!("{:.2}", rounded);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
