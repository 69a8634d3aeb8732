/// Rounds to the nearest integer, ties away from zero (`2.5 -> 3`, `-2.5 -> -3`).
///
/// This is the quantization rule for every matrix entry. It matches C's
/// `round` and differs from banker's rounding at exact halves.
#[inline]
pub fn round_half_away(value: f64) -> f64 {
    value.round()
}

/// Formats a cost or distance with two decimals, as every report does.
pub fn fmt_cost(value: f64) -> String {
    format!("{value:.2}")
}

/// 1-based display id for a 0-based city index.
#[inline]
pub fn display_id(idx: usize) -> usize {
    idx + 1
}
