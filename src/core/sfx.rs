use super::constants::{
    COMPLETION_NOTES_HZ, COMPLETION_NOTE_GAP_SEC, COMPLETION_NOTE_SEC, ENVELOPE_ATTACK_SEC,
    ENVELOPE_FLOOR, ENVELOPE_MIN_DECAY_RATIO, ENVELOPE_PEAK_RATIO, NAV_NOTES_HZ, NAV_NOTE_GAP_SEC,
    NAV_NOTE_SEC, TAP_NOTES_HZ, TAP_NOTE_SEC,
};
use super::pick::NoRepeatPicker;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// Gain envelope: 0 at onset, linear ramp to `peak` over `attack_sec`,
/// then exponential decay to `floor` at the tone's duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub peak: f32,
    pub attack_sec: f64,
    pub floor: f32,
}

impl Envelope {
    pub fn for_volume(volume: f32) -> Self {
        let peak = volume.clamp(0.0, 1.0) * ENVELOPE_PEAK_RATIO;
        Self {
            peak,
            attack_sec: ENVELOPE_ATTACK_SEC,
            // exponential ramps cannot cross zero; quiet tones still decay below the peak
            floor: if peak > ENVELOPE_FLOOR {
                ENVELOPE_FLOOR
            } else {
                peak * ENVELOPE_MIN_DECAY_RATIO
            },
        }
    }
}

/// One synthesized note, scheduled `offset_sec` after the request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub duration_sec: f64,
    pub offset_sec: f64,
    pub envelope: Envelope,
}

/// Destination for synthesized tones (a WebAudio context in the browser).
pub trait ToneOutput {
    fn play_tone(&mut self, tone: &Tone);
}

pub type OutputFactory<O> = Box<dyn FnMut() -> anyhow::Result<O>>;

/// Short UI sound effects with a lazily opened output.
pub struct SfxEngine<O: ToneOutput> {
    output: Option<O>,
    open_output: OutputFactory<O>,
    tap_picker: NoRepeatPicker,
    rng: StdRng,
}

impl<O: ToneOutput> SfxEngine<O> {
    pub fn new(open_output: OutputFactory<O>, seed: u64) -> Self {
        Self {
            output: None,
            open_output,
            tap_picker: NoRepeatPicker::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.output.is_some()
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    pub fn last_tap_note(&self) -> Option<usize> {
        self.tap_picker.last()
    }

    /// Ascending two-note chirp for slide changes.
    pub fn play_navigation(&mut self, enabled: bool, volume: f32) -> bool {
        let envelope = Envelope::for_volume(volume);
        self.play_sequence(
            enabled,
            volume,
            NAV_NOTES_HZ.iter().enumerate().map(|(i, &hz)| Tone {
                frequency_hz: hz,
                waveform: Waveform::Sine,
                duration_sec: NAV_NOTE_SEC,
                offset_sec: i as f64 * NAV_NOTE_GAP_SEC,
                envelope,
            }),
        )
    }

    /// Short pluck on a random pentatonic note, never the same note twice in a row.
    pub fn play_tap(&mut self, enabled: bool, volume: f32) -> bool {
        if !Self::audible(enabled, volume) || !self.ensure_output() {
            return false;
        }
        let Some(i) = self.tap_picker.next(&mut self.rng, TAP_NOTES_HZ.len()) else {
            return false;
        };
        let tone = Tone {
            frequency_hz: TAP_NOTES_HZ[i],
            waveform: Waveform::Triangle,
            duration_sec: TAP_NOTE_SEC,
            offset_sec: 0.0,
            envelope: Envelope::for_volume(volume),
        };
        if let Some(out) = self.output.as_mut() {
            out.play_tone(&tone);
        }
        true
    }

    /// Rising arpeggio for the heart game finale.
    pub fn play_completion(&mut self, enabled: bool, volume: f32) -> bool {
        let envelope = Envelope::for_volume(volume);
        self.play_sequence(
            enabled,
            volume,
            COMPLETION_NOTES_HZ.iter().enumerate().map(|(i, &hz)| Tone {
                frequency_hz: hz,
                waveform: Waveform::Triangle,
                duration_sec: COMPLETION_NOTE_SEC,
                offset_sec: i as f64 * COMPLETION_NOTE_GAP_SEC,
                envelope,
            }),
        )
    }

    // The gate is checked once; later tones in the sequence are scheduled up front.
    fn play_sequence(&mut self, enabled: bool, volume: f32, tones: impl Iterator<Item = Tone>) -> bool {
        if !Self::audible(enabled, volume) || !self.ensure_output() {
            return false;
        }
        if let Some(out) = self.output.as_mut() {
            for tone in tones {
                out.play_tone(&tone);
            }
        }
        true
    }

    #[inline]
    fn audible(enabled: bool, volume: f32) -> bool {
        enabled && volume > 0.0
    }

    fn ensure_output(&mut self) -> bool {
        if self.output.is_none() {
            match (self.open_output)() {
                Ok(out) => {
                    log::info!("[sfx] audio output ready");
                    self.output = Some(out);
                }
                Err(e) => {
                    log::warn!("[sfx] audio unavailable, staying silent: {:?}", e);
                }
            }
        }
        self.output.is_some()
    }
}
