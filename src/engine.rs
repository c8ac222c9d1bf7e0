mod components;
mod utils;

pub use components::analysis::{analyze, Finding, FindingKind};
pub use components::color::{frequency_color, Color, ParseColorError};
pub use components::instrument::{domain, Instrument, InstrumentId, Shape};
pub use components::presets::factory_instruments;
pub use components::rack::{DuplicateIdError, Rack, RackState, UnknownInstrumentError};
pub use components::scene::{map_to_scene, SceneAttributes};
