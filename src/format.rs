//! Number rendering shared by the engine's fun facts and the presentation layers.
//!
//! Grouping is always comma-based, whatever locale the text is rendered in.

use rust_decimal::{Decimal, RoundingStrategy};

/// Floors `n` and renders it with thousands separators: `1234567.9 → "1,234,567"`.
pub fn format_grouped(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let floored = n.floor();
    let digits = format!("{:.0}", floored.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if floored < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Renders `n` with a magnitude suffix: `2_500_000_000 → "2.5B"`, `42 → "42"`.
pub fn format_compact(n: f64) -> String {
    if n >= 1_000_000_000.0 {
        format!("{}B", to_fixed(n / 1_000_000_000.0, 1))
    } else if n >= 1_000_000.0 {
        format!("{}M", to_fixed(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed(n / 1_000.0, 1))
    } else {
        to_fixed(n, 0)
    }
}

/// Fixed-decimal rendering of the exact binary value of `n`.
///
/// Only true midpoints round away from zero: `0.25 → "0.3"`, but
/// `1.15 → "1.1"` because the nearest `f64` is 1.1499999999999999….
pub fn to_fixed(n: f64, decimals: usize) -> String {
    let Some(exact) = Decimal::from_f64_retain(n) else {
        // NaN, infinities and magnitudes past the Decimal range
        return format!("{n:.decimals$}");
    };

    let dp = u32::try_from(decimals).unwrap_or(u32::MAX);
    let mut rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // avoid "-0" / "-0.0"
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{rounded:.decimals$}")
}
