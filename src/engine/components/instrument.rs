use std::fmt::{self, Display};
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::engine::utils::sanitize;

/// Parameter domains as presented by the editing UI.
///
/// The rack stores whatever it is given; these are the ranges sliders should
/// clamp to, and the ranges [`Instrument::clamp_to_domain`] enforces.
pub mod domain {
    use std::ops::RangeInclusive;

    pub const FREQ_HZ: RangeInclusive<f64> = 20.0..=20_000.0;
    pub const PAN: RangeInclusive<f64> = -100.0..=100.0;
    pub const STEREO_WIDTH: RangeInclusive<f64> = 0.0..=100.0;
    pub const REVERB_MS: RangeInclusive<f64> = 0.0..=500.0;
    pub const VOLUME_DB: RangeInclusive<f64> = -30.0..=0.0;
}

/// Stable identifier of an instrument.
///
/// Unique across the rack; once an id has been handed out it is never reused
/// within the same session, even after its instrument is removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(String);
impl InstrumentId {
    pub fn new(id: impl Into<String>) -> Self {
        InstrumentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<&str> for InstrumentId {
    fn from(id: &str) -> Self {
        InstrumentId(id.to_string())
    }
}
impl From<String> for InstrumentId {
    fn from(id: String) -> Self {
        InstrumentId(id)
    }
}

/// Render archetype of an instrument in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Sphere,
    SmallSphere,
    Cone,
    Cylinder,
    Torus,
    Box,
    Capsule,
}
impl Default for Shape {
    fn default() -> Self {
        Shape::Box
    }
}

/// A single instrument's mix parameters.
///
/// Contains all info about the instrument that is relevant to placing it in the
/// scene and auditing the mix. Plain data: the rack owns the collection, the
/// mapping and analysis functions only ever read snapshots of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Instrument {
    pub id: InstrumentId,
    pub name: String,
    pub shape: Shape,
    /// Characteristic frequency in Hz.
    pub freq: f64,
    /// Stereo position: -100 full left, 0 center, 100 full right.
    pub pan: f64,
    /// Stereo width in percent.
    pub stereo: f64,
    /// Reverb decay in milliseconds.
    pub reverb: f64,
    /// Level in dB, 0 at the top of the fader.
    pub volume: f64,
    pub active: bool,
}
impl Instrument {
    /// New instrument with the defaults the editor gives a freshly added element.
    pub fn custom(id: InstrumentId, name: impl Into<String>) -> Self {
        Instrument {
            id,
            name: name.into(),
            shape: Shape::default(),
            freq: 1000.0,
            pan: 0.0,
            stereo: 30.0,
            reverb: 80.0,
            volume: -8.0,
            active: true,
        }
    }

    /// Clamp every numeric parameter into its domain.
    ///
    /// Meant for the editing layer, after applying raw input. The mapping and
    /// analysis functions also tolerate out-of-domain values on their own.
    pub fn clamp_to_domain(&mut self) {
        self.freq = clamp_to(self.freq, domain::FREQ_HZ);
        self.pan = clamp_to(self.pan, domain::PAN);
        self.stereo = clamp_to(self.stereo, domain::STEREO_WIDTH);
        self.reverb = clamp_to(self.reverb, domain::REVERB_MS);
        self.volume = clamp_to(self.volume, domain::VOLUME_DB);
    }
}

fn clamp_to(value: f64, range: RangeInclusive<f64>) -> f64 {
    let value = sanitize(value, range.clone());
    value.clamp(*range.start(), *range.end())
}
