pub mod access;
mod engine;

pub use engine::{
    analyze, domain, factory_instruments, frequency_color, map_to_scene, Color, DuplicateIdError,
    Finding, FindingKind, Instrument, InstrumentId, ParseColorError, Rack, RackState,
    SceneAttributes, Shape, UnknownInstrumentError,
};
