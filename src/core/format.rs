//! Value formatting shared by axis labels, tooltips and pie overlays.

/// Formats a value with at most two decimals and no trailing zeros.
#[must_use]
pub fn format_plain(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() >= 1e15 {
        // `value * 100.0` overflows near f64::MAX.
        return format!("{value:e}");
    }
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

const COMPACT_UNITS: [(f64, &str); 4] = [
    (1e3, "K"),
    (1e6, "M"),
    (1e9, "B"),
    (1e12, "T"),
];

/// Formats a value with a `K`/`M`/`B`/`T` suffix once it reaches a thousand.
///
/// The suffix is picked after rounding, so `999_950` reads `1M`, not `1000K`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let plain_magnitude = ((value * 100.0).round() / 100.0).abs();
    let Some(mut index) = COMPACT_UNITS
        .iter()
        .rposition(|(unit, _)| plain_magnitude >= *unit)
    else {
        return format_plain(value);
    };

    let mut rounded = round_tenths(value / COMPACT_UNITS[index].0);
    while rounded.abs() >= 1_000.0 && index + 1 < COMPACT_UNITS.len() {
        index += 1;
        rounded = round_tenths(value / COMPACT_UNITS[index].0);
    }
    if rounded.abs() >= 1_000.0 {
        return format!("{value:.1e}");
    }

    let text = format!("{rounded:.1}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}{}", COMPACT_UNITS[index].1)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a proportion in `0..=1` as a percentage with at most one decimal.
#[must_use]
pub fn format_percent(proportion: f64) -> String {
    let percent = (proportion * 1000.0).round() / 10.0;
    let text = format!("{percent:.1}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}%")
}
