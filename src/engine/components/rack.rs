use std::error::Error;
use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use super::analysis::{analyze, Finding};
use super::instrument::{Instrument, InstrumentId};
use super::presets::factory_instruments;
use super::scene::{map_to_scene, SceneAttributes};
use crate::engine::utils::id_registry::IdRegistry;

/// Prefix of generated ids for elements added by hand.
const CUSTOM_ID_PREFIX: &str = "custom";

/// The ordered collection of instruments a mix is made of.
///
/// The host UI owns a `Rack` and mutates it as the user works; the scene and
/// the findings are derived from snapshots of it on demand. Insertion order is
/// preserved, and every derived output follows it.
pub struct Rack {
    instruments: Vec<Instrument>,
    ids: IdRegistry<InstrumentId>,
}
impl Rack {
    /// Create a rack with no instruments.
    pub fn new() -> Self {
        Rack {
            instruments: Vec::new(),
            ids: IdRegistry::new(),
        }
    }

    /// Create a rack holding the factory set, everything switched off.
    pub fn with_factory_instruments() -> Self {
        let mut rack = Rack::new();
        for instrument in factory_instruments() {
            rack.add(instrument)
                .expect("Duplicate id in factory set");
        }
        rack
    }

    /// Reconstruct a rack from a state snapshot.
    pub fn from_state(state: &RackState) -> Result<Self, DuplicateIdError> {
        let mut rack = Rack::new();
        for instrument in &state.instruments {
            rack.add(instrument.clone())?;
        }
        Ok(rack)
    }

    /// Add an instrument at the end of the rack.
    ///
    /// Fails if its id was ever used in this rack before, including ids of
    /// instruments that have since been removed.
    pub fn add(&mut self, instrument: Instrument) -> Result<(), DuplicateIdError> {
        self.ids
            .reserve(instrument.id.clone())
            .map_err(|_| DuplicateIdError {
                id: instrument.id.clone(),
            })?;

        debug!("Added instrument: {}", instrument.id);
        self.instruments.push(instrument);
        Ok(())
    }

    /// Add a fresh element with the editor defaults and a generated id.
    pub fn add_custom(&mut self, name: impl Into<String>) -> InstrumentId {
        let id = self
            .ids
            .generate(|n| InstrumentId::new(format!("{}-{}", CUSTOM_ID_PREFIX, n)));

        debug!("Added custom instrument: {}", id);
        self.instruments.push(Instrument::custom(id.clone(), name));
        id
    }

    /// Remove an instrument, returning it.
    ///
    /// Its id stays retired: adding another instrument under the same id keeps
    /// failing for the rest of the session.
    pub fn remove(&mut self, id: &InstrumentId) -> Result<Instrument, UnknownInstrumentError> {
        let index = self
            .instruments
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| UnknownInstrumentError { id: id.clone() })?;

        debug!("Removed instrument: {}", id);
        Ok(self.instruments.remove(index))
    }

    pub fn instrument(&self, id: &InstrumentId) -> Result<&Instrument, UnknownInstrumentError> {
        self.instruments
            .iter()
            .find(|i| &i.id == id)
            .ok_or_else(|| UnknownInstrumentError { id: id.clone() })
    }
    pub fn instrument_mut(
        &mut self,
        id: &InstrumentId,
    ) -> Result<&mut Instrument, UnknownInstrumentError> {
        self.instruments
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| UnknownInstrumentError { id: id.clone() })
    }

    /// Flip an instrument in or out of the mix. Returns the new value.
    pub fn toggle(&mut self, id: &InstrumentId) -> Result<bool, UnknownInstrumentError> {
        let instrument = self.instrument_mut(id)?;
        instrument.active = !instrument.active;
        Ok(instrument.active)
    }

    /// All instruments in insertion order.
    pub fn instruments(&self) -> impl Iterator<Item = &Instrument> + '_ {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Amount of instruments currently in the mix.
    pub fn active_count(&self) -> usize {
        self.instruments.iter().filter(|i| i.active).count()
    }

    /// The stage: scene attributes for every active instrument, in rack order.
    pub fn scene(&self) -> impl Iterator<Item = (&Instrument, SceneAttributes)> + '_ {
        self.instruments
            .iter()
            .filter(|i| i.active)
            .map(|i| (i, map_to_scene(i)))
    }

    /// Runs the mix checks over the current snapshot.
    pub fn recommendations(&self) -> Vec<Finding> {
        analyze(self.instruments.iter())
    }

    /// Takes a snapshot of the current state of the rack.
    pub fn state(&self) -> RackState {
        RackState {
            instruments: self.instruments.clone(),
        }
    }
}

/// Contains all info about the rack's state,
/// that is relevant to reconstructing it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RackState {
    pub instruments: Vec<Instrument>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownInstrumentError {
    pub id: InstrumentId,
}
impl Display for UnknownInstrumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = &self.id;
        write!(f, "No instrument with id, {id:?}, on rack")
    }
}
impl Error for UnknownInstrumentError {}

#[derive(Debug, PartialEq, Eq)]
pub struct DuplicateIdError {
    pub id: InstrumentId,
}
impl Display for DuplicateIdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = &self.id;
        write!(f, "Instrument id has already been used: {id:?}")
    }
}
impl Error for DuplicateIdError {}
