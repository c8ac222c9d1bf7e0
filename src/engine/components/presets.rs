use super::instrument::{Instrument, InstrumentId, Shape};

/// The factory set of instruments a fresh session starts from.
///
/// Covers the usual suspects of a pop/electronic mix, bottom to top of the
/// band. Everything starts inactive; the host toggles elements in as the user
/// builds their mix.
pub fn factory_instruments() -> Vec<Instrument> {
    FACTORY_SET
        .iter()
        .map(
            |&(id, name, shape, freq, pan, stereo, reverb, volume)| Instrument {
                id: InstrumentId::from(id),
                name: name.to_string(),
                shape,
                freq,
                pan,
                stereo,
                reverb,
                volume,
                active: false,
            },
        )
        .collect()
}

type PresetRow = (&'static str, &'static str, Shape, f64, f64, f64, f64, f64);

#[rustfmt::skip]
const FACTORY_SET: [PresetRow; 13] = [
    // id           name          shape               freq     pan  stereo reverb volume
    ("kick",      "Kick",       Shape::Sphere,       60.0,    0.0,  10.0,  20.0,  -3.0),
    ("bass",      "Bass",       Shape::Sphere,       80.0,    0.0,   5.0,  15.0,  -4.0),
    ("sub",       "Sub Bass",   Shape::Sphere,       40.0,    0.0,   0.0,   5.0,  -5.0),
    ("lead",      "Lead",       Shape::Cone,       3000.0,   10.0,  40.0,  80.0,  -6.0),
    ("pad",       "Pad",        Shape::Torus,       800.0,   -5.0,  90.0, 250.0, -10.0),
    ("vocal",     "Vocal",      Shape::Cone,       2500.0,    0.0,  20.0,  60.0,  -2.0),
    ("backvocal", "Back Vocal", Shape::Cone,       2200.0,  -30.0,  60.0, 150.0, -10.0),
    ("synth",     "Synth",      Shape::Torus,      1500.0,   20.0,  70.0, 100.0,  -8.0),
    ("keys",      "Keys",       Shape::Box,        1000.0,  -25.0,  50.0,  90.0,  -9.0),
    ("piano",     "Piano",      Shape::Box,         900.0,   15.0,  55.0, 110.0,  -8.0),
    ("guitar",    "Guitar",     Shape::Capsule,    1200.0,  -35.0,  45.0,  70.0,  -7.0),
    ("snare",     "Snare",      Shape::Cylinder,    200.0,    0.0,  15.0,  50.0,  -4.0),
    ("hat",       "Hi-Hat",     Shape::SmallSphere, 8000.0,  20.0,  30.0,  30.0,  -9.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::components::instrument::domain;

    #[test]
    fn thirteen_instruments_all_inactive() {
        let instruments = factory_instruments();

        assert_eq!(instruments.len(), 13);
        assert!(instruments.iter().all(|i| !i.active));
    }

    #[test]
    fn ids_are_unique() {
        let instruments = factory_instruments();

        for (index, a) in instruments.iter().enumerate() {
            for b in &instruments[index + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn parameters_sit_inside_their_domains() {
        for instrument in factory_instruments() {
            let mut clamped = instrument.clone();
            clamped.clamp_to_domain();
            assert_eq!(clamped, instrument, "{} out of domain", instrument.id);
        }
    }

    #[test]
    fn the_band_is_covered_bottom_to_top() {
        let instruments = factory_instruments();

        let lowest = instruments.iter().map(|i| i.freq).fold(f64::MAX, f64::min);
        let highest = instruments.iter().map(|i| i.freq).fold(f64::MIN, f64::max);

        assert!(lowest < 100.0);
        assert!(highest > 5_000.0);
        assert!(domain::FREQ_HZ.contains(&lowest));
        assert!(domain::FREQ_HZ.contains(&highest));
    }

    #[test]
    fn stock_parameters_are_pinned() {
        let instruments = factory_instruments();
        let rows: Vec<(&str, Shape, f64, f64, f64, f64, f64)> = instruments
            .iter()
            .map(|i| (i.id.as_str(), i.shape, i.freq, i.pan, i.stereo, i.reverb, i.volume))
            .collect();

        #[rustfmt::skip]
        let expected = [
            ("kick",       Shape::Sphere,       60.0,   0.0, 10.0,  20.0,  -3.0),
            ("bass",       Shape::Sphere,       80.0,   0.0,  5.0,  15.0,  -4.0),
            ("sub",        Shape::Sphere,       40.0,   0.0,  0.0,   5.0,  -5.0),
            ("lead",       Shape::Cone,       3000.0,  10.0, 40.0,  80.0,  -6.0),
            ("pad",        Shape::Torus,       800.0,  -5.0, 90.0, 250.0, -10.0),
            ("vocal",      Shape::Cone,       2500.0,   0.0, 20.0,  60.0,  -2.0),
            ("backvocal",  Shape::Cone,       2200.0, -30.0, 60.0, 150.0, -10.0),
            ("synth",      Shape::Torus,      1500.0,  20.0, 70.0, 100.0,  -8.0),
            ("keys",       Shape::Box,        1000.0, -25.0, 50.0,  90.0,  -9.0),
            ("piano",      Shape::Box,         900.0,  15.0, 55.0, 110.0,  -8.0),
            ("guitar",     Shape::Capsule,    1200.0, -35.0, 45.0,  70.0,  -7.0),
            ("snare",      Shape::Cylinder,    200.0,   0.0, 15.0,  50.0,  -4.0),
            ("hat",        Shape::SmallSphere, 8000.0, 20.0, 30.0,  30.0,  -9.0),
        ];
        assert_eq!(rows, expected);
    }
}
