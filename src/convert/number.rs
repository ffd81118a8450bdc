//! Number handling that has to agree digit for digit with the files the
//! DragonBones toolchain writes.

use crate::shared_types::ColorTransform;

/// Rounds to `digits` decimals, resolving exact ties away from zero, and
/// returns the nearest double to the resulting decimal.
pub fn round_to_fixed(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let magnitude = value.abs();
    // An exact tie at the first dropped digit is an odd multiple of 2^-(digits + 1)
    let halves = magnitude * 2f64.powi(digits + 1);
    let rounded = if halves.fract() == 0.0 && halves % 2.0 == 1.0 {
        let scale = 10f64.powi(digits);
        (magnitude * scale).ceil() / scale
    } else {
        format!("{:.*}", digits as usize, magnitude)
            .parse::<f64>()
            .unwrap_or(magnitude)
    };
    if value.is_sign_negative() { -rounded } else { rounded }
}

/// Nearest integer, halves rounded towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value < 0.0 && value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Percentage color multipliers packed as upper case `RRGGBBAA`.
pub fn color_to_hex(color: &ColorTransform) -> String {
    let channel = |percent: f64| round_half_up(percent * 2.55).max(0.0).min(255.0) as u8;
    format!(
        "{:02X}{:02X}{:02X}{:02X}",
        channel(color.red_multiplier),
        channel(color.green_multiplier),
        channel(color.blue_multiplier),
        channel(color.alpha_multiplier)
    )
}

/// Shortest decimal text for a number, without a trailing `.0` and with
/// negative zero written as `0`.
pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
