//! Text formatting for forecast cells

use crate::daily::DayBoundary;

/// Header date, e.g. `Mon, Jan 6`
pub const DAY_DATE_FORMAT: &str = "%a, %b %-d";

/// Round to the nearest integer, halves towards positive infinity.
///
/// `-0.4` and `-0.5` both round to `0`, never `-0`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Print a number the way a browser would: `70`, `3.6`, `NaN`, `Infinity`,
/// and exponent form such as `1e+21` or `1e-7` outside `[1e-6, 1e21)`.
pub fn number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// `15.5` -> `16°`
pub fn temperature(value: f64) -> String {
    format!("{}°", number(round_half_up(value)))
}

pub fn humidity(value: f64) -> String {
    format!("{}%", number(value))
}

pub fn wind(value: f64) -> String {
    format!("{} m/s", number(value))
}

pub fn day_date(dt: i64, boundary: DayBoundary) -> String {
    boundary
        .format(dt, DAY_DATE_FORMAT)
        .unwrap_or_else(|| "Invalid Date".to_string())
}

/// Upper-case the first letter of every word: `light rain` -> `Light Rain`.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
