use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::color::{frequency_color, Color};
use super::instrument::{domain, Instrument};
use crate::engine::utils::{log_band_position, map_range, sanitize};

/// Half-width of the stage along the pan axis.
pub const STAGE_HALF_WIDTH: f64 = 5.0;
/// Height of the frequency axis.
pub const FREQ_AXIS_HEIGHT: f64 = 6.0;
/// Half-depth of the stage along the reverb axis.
pub const STAGE_HALF_DEPTH: f64 = 4.0;
/// Mesh scale at the bottom and the top of the volume fader.
pub const SCALE_RANGE: RangeInclusive<f64> = 0.2..=1.0;
/// Horizontal stretch at zero and at full stereo width.
pub const WIDTH_SCALE_RANGE: RangeInclusive<f64> = 1.0..=2.5;

/// Where and how an instrument appears on the stage.
///
/// - `x` runs left to right with pan, `-5` to `5`.
/// - `y` runs bottom to top with log-frequency, `0` to `6`.
/// - `z` runs front to back with reverb, `-4` (dry, up front) to `4` (wet, far back).
/// - `scale` grows with volume, `0.2` to `1.0`.
/// - `width_scale` stretches the mesh horizontally with stereo width, `1.0` to `2.5`.
///
/// Out-of-domain parameters extrapolate past these bounds rather than clamp.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SceneAttributes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    pub width_scale: f64,
    pub color: Color,
}

/// Maps an instrument's parameters to its place and look on the stage.
///
/// Pure and total: degenerate values fall back to a domain bound, the
/// logarithm is floored at the low end of the band, and every output is finite
/// for every input.
pub fn map_to_scene(instrument: &Instrument) -> SceneAttributes {
    let pan = sanitize(instrument.pan, domain::PAN);
    let stereo = sanitize(instrument.stereo, domain::STEREO_WIDTH);
    let reverb = sanitize(instrument.reverb, domain::REVERB_MS);
    let volume = sanitize(instrument.volume, domain::VOLUME_DB);

    SceneAttributes {
        x: map_range(pan, domain::PAN, -STAGE_HALF_WIDTH..=STAGE_HALF_WIDTH),
        y: log_band_position(instrument.freq) * FREQ_AXIS_HEIGHT,
        z: map_range(reverb, domain::REVERB_MS, -STAGE_HALF_DEPTH..=STAGE_HALF_DEPTH),
        scale: map_range(volume, domain::VOLUME_DB, SCALE_RANGE),
        width_scale: map_range(stereo, domain::STEREO_WIDTH, WIDTH_SCALE_RANGE),
        color: frequency_color(instrument.freq),
    }
}
