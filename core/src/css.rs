//! Numeric CSS value parsing for the marquee custom properties.
//!
//! Values follow `parseFloat` rules: the leading number is taken and any unit
//! suffix is ignored, except for durations where `ms` and `s` are honored.

use crate::host::GeometryProvider;

pub const GAP_PROPERTY: &str = "--om-marquee-gap";
pub const DURATION_PROPERTY: &str = "--om-marquee-animation-duration";
pub const REVERSE_PROPERTY: &str = "--om-marquee-reverse";
pub const PAUSE_PROPERTY: &str = "--om-marquee-pause";

pub const DEFAULT_GAP_PX: f64 = 0.0;
pub const DEFAULT_DURATION_MS: f64 = 20_000.0;

/// Splits the leading decimal number off `value`, returning it with the rest.
pub fn split_leading_number(value: &str) -> Option<(f64, &str)> {
    let text = value.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    let number = text[..end].parse::<f64>().ok()?;
    Some((number, &text[end..]))
}

pub fn parse_leading_number(value: &str) -> Option<f64> {
    split_leading_number(value).map(|(number, _)| number)
}

/// Parses a length such as `20px` into its numeric part.
pub fn parse_gap_px(value: &str) -> Option<f64> {
    parse_leading_number(value).filter(|gap| gap.is_finite())
}

/// Parses a CSS time into milliseconds. Unitless values are seconds.
///
/// Zero, negative and non-finite durations are rejected so callers fall back
/// to the default.
pub fn parse_duration_ms(value: &str) -> Option<f64> {
    let (number, rest) = split_leading_number(value)?;
    let unit = rest.trim();
    let ms = if unit.eq_ignore_ascii_case("ms") {
        number
    } else {
        number * 1000.0
    };
    (ms.is_finite() && ms > 0.0).then_some(ms)
}

/// Parses an `animation-delay` value as written back by the controller.
/// Unlike durations, zero and negative values are valid.
pub fn parse_delay_ms(value: &str) -> Option<f64> {
    let (number, rest) = split_leading_number(value)?;
    let unit = rest.trim();
    let ms = if unit.eq_ignore_ascii_case("ms") {
        number
    } else if unit.eq_ignore_ascii_case("s") {
        number * 1000.0
    } else {
        return None;
    };
    ms.is_finite().then_some(ms)
}

pub fn read_gap<G: GeometryProvider + ?Sized>(geometry: &G) -> f64 {
    geometry
        .custom_property(GAP_PROPERTY)
        .as_deref()
        .and_then(parse_gap_px)
        .unwrap_or(DEFAULT_GAP_PX)
}

pub fn read_duration_ms<G: GeometryProvider + ?Sized>(geometry: &G) -> f64 {
    geometry
        .custom_property(DURATION_PROPERTY)
        .as_deref()
        .and_then(parse_duration_ms)
        .unwrap_or(DEFAULT_DURATION_MS)
}
