use mixspace::{Instrument, InstrumentId};

pub fn instrument(id: &str, name: &str, freq: f64) -> Instrument {
    let mut instrument = Instrument::custom(InstrumentId::from(id), name);
    instrument.freq = freq;
    instrument
}
