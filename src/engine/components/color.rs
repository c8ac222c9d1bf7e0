use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::engine::utils::log_band_position;

/// Color of the lowest frequencies (orange).
pub const LOW_COLOR: Color = Color::new(0xFF, 0x6B, 0x00);
/// Color of the mids (violet), where the two ramp segments meet.
pub const MID_COLOR: Color = Color::new(0xB8, 0x00, 0xFF);
/// Color of the highest frequencies (cyan).
pub const HIGH_COLOR: Color = Color::new(0x00, 0xF0, 0xFF);

/// Band position where the ramp switches from the low to the high segment.
pub const RAMP_BREAK: f64 = 0.35;

/// RGB color of an instrument in the scene.
///
/// Displays and serializes as a `#rrggbb` hex string, which is what hosts feed
/// straight into their material colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Linear interpolation from `self` to `to`, channel by channel.
    ///
    /// `t` is unclamped; channels round to the nearest integer and saturate.
    pub fn lerp(self, to: Color, t: f64) -> Color {
        fn channel(a: u8, b: u8, t: f64) -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round() as u8
        }

        Color::new(
            channel(self.r, to.r, t),
            channel(self.g, to.g, t),
            channel(self.b, to.b, t),
        )
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }

        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| err())?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| err())?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| err())?;

        Ok(Color::new(r, g, b))
    }
}
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}
impl Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not a valid #rrggbb color: {:?}", self.input)
    }
}
impl Error for ParseColorError {}

/// Color of a frequency: orange lows through violet mids to cyan highs.
///
/// The position within the audible band (see [`log_band_position`]) is clamped
/// to the band, then run through two linear segments meeting at [`RAMP_BREAK`].
pub fn frequency_color(freq: f64) -> Color {
    let t = log_band_position(freq).clamp(0.0, 1.0);

    if t < RAMP_BREAK {
        LOW_COLOR.lerp(MID_COLOR, t / RAMP_BREAK)
    } else {
        MID_COLOR.lerp(HIGH_COLOR, (t - RAMP_BREAK) / (1.0 - RAMP_BREAK))
    }
}
