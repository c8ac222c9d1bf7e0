mod utils;

use mixspace::{analyze, Finding, FindingKind, Instrument, InstrumentId, Rack};
use utils::instrument;

fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
    findings.iter().map(|f| f.kind).collect()
}

#[test]
fn clashing_pair_is_flagged() {
    let a = instrument("a", "Rhodes", 1000.0);
    let b = instrument("b", "Guitar", 1100.0);

    let findings = analyze([&a, &b]);

    assert_eq!(kinds(&findings), vec![FindingKind::Warning]);
    assert!(findings[0].text.contains("Rhodes and Guitar overlap"));
}

#[test]
fn separated_pair_passes() {
    let mut a = instrument("a", "Rhodes", 1000.0);
    let mut b = instrument("b", "Guitar", 1100.0);
    a.pan = -30.0;
    b.pan = 30.0;

    let findings = analyze([&a, &b]);

    assert_eq!(kinds(&findings), vec![FindingKind::Good]);
}

#[test]
fn wide_sub_is_sent_back_to_mono() {
    let mut sub = instrument("sub", "Sub Bass", 40.0);
    sub.stereo = 80.0;

    let findings = analyze([&sub]);

    assert_eq!(kinds(&findings), vec![FindingKind::Warning]);
    assert_eq!(
        findings[0].text,
        "Sub Bass (40 Hz) has 80% stereo width. Low frequencies should stay mono to keep the low end solid."
    );
}

#[test]
fn panned_bass_is_centered() {
    let mut bass = instrument("bass", "Bass", 80.0);
    bass.pan = -40.0;

    let findings = analyze([&bass]);

    assert_eq!(kinds(&findings), vec![FindingKind::Warning]);
    assert_eq!(
        findings[0].text,
        "Bass is panned to -40. Bass belongs in the center."
    );
}

#[test]
fn dry_lead_is_offered_air() {
    let mut lead = instrument("lead", "Lead Synth", 3000.0);
    lead.reverb = 10.0;

    let findings = analyze([&lead]);

    assert_eq!(kinds(&findings), vec![FindingKind::Tip]);
    assert_eq!(
        findings[0].text,
        "Lead Synth is almost dry (10 ms). A short reverb of 40-80 ms adds presence without pushing it back."
    );
}

#[test]
fn quiet_lead_vocal_is_raised() {
    let mut vocal = instrument("vocal", "Vocal", 2500.0);
    vocal.volume = -12.0;

    let findings = analyze([&vocal]);

    assert_eq!(kinds(&findings), vec![FindingKind::Tip]);
    assert_eq!(
        findings[0].text,
        "Vocal sits at -12 dB, which is low for a lead vocal. Aim for -3 to -6 dB so it carries the mix."
    );
}

#[test]
fn backing_vocal_is_left_alone() {
    let mut back = instrument("backvocal", "Back Vocal", 2200.0);
    back.volume = -14.0;

    let findings = analyze([&back]);

    assert_eq!(kinds(&findings), vec![FindingKind::Good]);
}

#[test]
fn crowded_center_is_opened_up() {
    let instruments: Vec<Instrument> = [
        ("a", "Kick", 60.0),
        ("b", "Snare", 250.0),
        ("c", "Keys", 900.0),
        ("d", "Vocal", 2500.0),
        ("e", "Hat", 8000.0),
    ]
    .into_iter()
    .map(|(id, name, freq)| instrument(id, name, freq))
    .collect();

    let findings = analyze(&instruments);

    assert_eq!(kinds(&findings), vec![FindingKind::Warning]);
    assert_eq!(
        findings[0].text,
        "5 elements sit in the center. Open the mix up by spreading some of them left and right."
    );
}

#[test]
fn flat_mix_is_pushed_back() {
    let rows: [(&str, &str, f64, f64, f64); 5] = [
        ("a", "Kick", 100.0, 0.0, 10.0),
        ("b", "Guitar", 400.0, -40.0, 20.0),
        ("c", "Keys", 1000.0, 15.0, 30.0),
        ("d", "Synth", 3000.0, -15.0, 200.0),
        ("e", "Bells", 9000.0, 40.0, 40.0),
    ];
    let instruments: Vec<Instrument> = rows
        .into_iter()
        .map(|(id, name, freq, pan, reverb)| {
            let mut element = instrument(id, name, freq);
            element.pan = pan;
            element.reverb = reverb;
            element
        })
        .collect();

    let findings = analyze(&instruments);

    assert_eq!(kinds(&findings), vec![FindingKind::Tip]);
    assert_eq!(
        findings[0].text,
        "Almost everything sits right up front. Push secondary elements back with a little more reverb to create depth."
    );
}

#[test]
fn findings_arrive_in_check_order() {
    let a = instrument("a", "Organ", 1000.0);
    let b = instrument("b", "Piano", 1050.0);
    let mut bass = instrument("c", "Bass", 80.0);
    bass.pan = 30.0;
    let mut vocal = instrument("d", "Vocal", 2500.0);
    vocal.volume = -12.0;

    let findings = analyze([&a, &b, &bass, &vocal]);

    assert_eq!(
        kinds(&findings),
        vec![FindingKind::Warning, FindingKind::Warning, FindingKind::Tip]
    );
    assert!(findings[0].text.contains("overlap"));
    assert!(findings[1].text.contains("panned"));
    assert!(findings[2].text.contains("lead vocal"));
}

#[test]
fn inactive_instruments_say_nothing() {
    let rack = Rack::with_factory_instruments();

    assert_eq!(rack.recommendations(), vec![]);
}

#[test]
fn analysis_is_repeatable() {
    let mut rack = Rack::with_factory_instruments();
    for id in ["kick", "bass", "pad", "vocal", "hat"] {
        rack.toggle(&InstrumentId::from(id)).unwrap();
    }

    assert_eq!(rack.recommendations(), rack.recommendations());
}
