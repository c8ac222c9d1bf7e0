use serde::{Deserialize, Serialize};

use super::instrument::Instrument;

/// Frequency ratio under which two elements are considered to share a band.
const MASKING_RATIO: f64 = 1.3;
/// Pan distance under which two elements sit in the same stereo spot.
const MASKING_PAN_DISTANCE: f64 = 20.0;
/// Everything below this frequency is treated as bass.
const BASS_CEILING_HZ: f64 = 200.0;
/// Widest a bass element should get before the low end starts to smear.
const BASS_STEREO_LIMIT: f64 = 30.0;
/// Furthest off-center a bass element should sit.
const BASS_PAN_LIMIT: f64 = 15.0;
/// Above this frequency a vocal or lead lives in its presence range.
const PRESENCE_FLOOR_HZ: f64 = 1500.0;
/// Under this much reverb a presence element reads as bone dry.
const PRESENCE_REVERB_FLOOR_MS: f64 = 30.0;
/// A lead vocal under this level gets buried.
const LEAD_VOCAL_QUIET_DB: f64 = -8.0;
/// Pan distance from center within which an element counts as centered.
const CENTER_PAN_DISTANCE: f64 = 10.0;
/// More centered elements than this crowd the middle of the image.
const CENTER_CROWD_LIMIT: usize = 4;
/// Under this much reverb an element sits right up front.
const FRONT_REVERB_CEILING_MS: f64 = 50.0;
/// Share of up-front elements above which the mix reads as flat.
const FRONT_HEAVY_SHARE: f64 = 0.7;
/// Depth only becomes a topic once the mix has more elements than this.
const FRONT_HEAVY_MIN_COUNT: usize = 3;

/// Severity of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Warning,
    Tip,
    Good,
}

/// A single result of the mix checks: a severity and a ready-to-display sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub text: String,
}
impl Finding {
    fn warning(text: String) -> Self {
        Finding {
            kind: FindingKind::Warning,
            text,
        }
    }

    fn tip(text: String) -> Self {
        Finding {
            kind: FindingKind::Tip,
            text,
        }
    }

    fn good(text: String) -> Self {
        Finding {
            kind: FindingKind::Good,
            text,
        }
    }
}

/// Runs the fixed battery of mix checks over a snapshot of the instruments.
///
/// Only active instruments are considered. Findings come out in check order,
/// and in input order within each check, so the same snapshot always produces
/// the same list. If every check passes and at least one instrument is active,
/// a single [`FindingKind::Good`] finding is returned; an empty or fully
/// inactive snapshot produces an empty list.
pub fn analyze<'a>(instruments: impl IntoIterator<Item = &'a Instrument>) -> Vec<Finding> {
    let active: Vec<&Instrument> = instruments.into_iter().filter(|i| i.active).collect();

    let mut findings = Vec::new();
    check_masking(&active, &mut findings);
    check_bass_placement(&active, &mut findings);
    check_presence_reverb(&active, &mut findings);
    check_lead_vocal_level(&active, &mut findings);
    check_center_crowding(&active, &mut findings);
    check_depth_spread(&active, &mut findings);

    if findings.is_empty() && !active.is_empty() {
        findings.push(Finding::good(
            "The placement looks balanced. Every element has its own space.".to_string(),
        ));
    }

    findings
}

/// Two elements close in both frequency and pan mask each other.
fn check_masking(active: &[&Instrument], findings: &mut Vec<Finding>) {
    for (index, a) in active.iter().enumerate() {
        for b in &active[index + 1..] {
            let ratio = a.freq.max(b.freq) / a.freq.min(b.freq);
            let pan_distance = (a.pan - b.pan).abs();

            if ratio < MASKING_RATIO && pan_distance < MASKING_PAN_DISTANCE {
                findings.push(Finding::warning(format!(
                    "{} and {} overlap around {} Hz and {} Hz in the same stereo spot. \
                     Masking risk: spread them apart or carve out space with EQ.",
                    a.name, b.name, a.freq, b.freq
                )));
            }
        }
    }
}

/// Bass belongs in the center of the stereo field, in mono.
fn check_bass_placement(active: &[&Instrument], findings: &mut Vec<Finding>) {
    for instrument in active {
        if instrument.freq >= BASS_CEILING_HZ {
            continue;
        }

        if instrument.stereo > BASS_STEREO_LIMIT {
            findings.push(Finding::warning(format!(
                "{} ({} Hz) has {}% stereo width. Low frequencies should stay mono \
                 to keep the low end solid.",
                instrument.name, instrument.freq, instrument.stereo
            )));
        }
        if instrument.pan.abs() > BASS_PAN_LIMIT {
            findings.push(Finding::warning(format!(
                "{} is panned to {}. Bass belongs in the center.",
                instrument.name, instrument.pan
            )));
        }
    }
}

/// A dry vocal or lead in its presence range deserves a little air.
fn check_presence_reverb(active: &[&Instrument], findings: &mut Vec<Finding>) {
    for instrument in active {
        let named_lead = name_contains(instrument, "vocal") || name_contains(instrument, "lead");

        if named_lead
            && instrument.freq > PRESENCE_FLOOR_HZ
            && instrument.reverb < PRESENCE_REVERB_FLOOR_MS
        {
            findings.push(Finding::tip(format!(
                "{} is almost dry ({} ms). A short reverb of 40-80 ms adds presence \
                 without pushing it back.",
                instrument.name, instrument.reverb
            )));
        }
    }
}

/// The lead vocal should sit on top of the mix.
fn check_lead_vocal_level(active: &[&Instrument], findings: &mut Vec<Finding>) {
    for instrument in active {
        let lead_vocal =
            name_contains(instrument, "vocal") && !name_contains(instrument, "back");

        if lead_vocal && instrument.volume < LEAD_VOCAL_QUIET_DB {
            findings.push(Finding::tip(format!(
                "{} sits at {} dB, which is low for a lead vocal. Aim for -3 to -6 dB \
                 so it carries the mix.",
                instrument.name, instrument.volume
            )));
        }
    }
}

/// Too many elements stacked in the center flatten the stereo image.
fn check_center_crowding(active: &[&Instrument], findings: &mut Vec<Finding>) {
    let centered = active
        .iter()
        .filter(|i| i.pan.abs() < CENTER_PAN_DISTANCE)
        .count();

    if centered > CENTER_CROWD_LIMIT {
        findings.push(Finding::warning(format!(
            "{} elements sit in the center. Open the mix up by spreading some of \
             them left and right.",
            centered
        )));
    }
}

/// A mix with everything up front has no depth.
fn check_depth_spread(active: &[&Instrument], findings: &mut Vec<Finding>) {
    let up_front = active
        .iter()
        .filter(|i| i.reverb < FRONT_REVERB_CEILING_MS)
        .count();

    let front_heavy = up_front as f64 > active.len() as f64 * FRONT_HEAVY_SHARE;
    if front_heavy && active.len() > FRONT_HEAVY_MIN_COUNT {
        findings.push(Finding::tip(
            "Almost everything sits right up front. Push secondary elements back \
             with a little more reverb to create depth."
                .to_string(),
        ));
    }
}

fn name_contains(instrument: &Instrument, needle: &str) -> bool {
    instrument.name.to_lowercase().contains(needle)
}
