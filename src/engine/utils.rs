use std::ops::RangeInclusive;

use num_traits::Float;

pub mod id_registry;

/// Start of the audible band, in Hz.
pub const BAND_START_HZ: f64 = 20.0;
/// End of the audible band, in Hz.
pub const BAND_END_HZ: f64 = 20_000.0;

/// Linearly maps `value` from the `from` range onto the `to` range.
///
/// Exact at the endpoints; values outside `from` extrapolate instead of clamping.
pub fn map_range<F: Float>(value: F, from: RangeInclusive<F>, to: RangeInclusive<F>) -> F {
    let (from_start, from_end) = from.into_inner();
    let (to_start, to_end) = to.into_inner();

    let position = (value - from_start) / (from_end - from_start);
    to_start + position * (to_end - to_start)
}

/// Replaces degenerate values so downstream arithmetic stays finite.
///
/// NaN and negative infinity become the start of `domain`, positive infinity its end.
/// Finite values pass through untouched, even outside the domain.
pub fn sanitize<F: Float>(value: F, domain: RangeInclusive<F>) -> F {
    let (start, end) = domain.into_inner();

    if value.is_nan() {
        start
    } else if value == F::infinity() {
        end
    } else if value == F::neg_infinity() {
        start
    } else {
        value
    }
}

/// Position of a frequency within the audible band, on a logarithmic axis.
///
/// 20 Hz maps to 0.0 and 20 kHz to 1.0, both exactly. Frequencies outside the band
/// extrapolate past those values, except that anything at or below zero is floored
/// to the band start before the logarithm.
pub fn log_band_position(freq: f64) -> f64 {
    let sane = sanitize(freq, BAND_START_HZ..=BAND_END_HZ);
    let guarded = if sane > 0.0 { sane } else { BAND_START_HZ };

    (guarded / BAND_START_HZ).log2() / (BAND_END_HZ / BAND_START_HZ).log2()
}
