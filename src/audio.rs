use crate::core::{AudioSettings, PlaybackGate, Tone, ToneOutput, Waveform};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// WebAudio-backed tone output. Created lazily by the SFX engine on the first
/// audible request, i.e. inside a user gesture.
pub struct WebToneOutput {
    audio_ctx: web::AudioContext,
}

impl WebToneOutput {
    pub fn open() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { audio_ctx })
    }
}

impl ToneOutput for WebToneOutput {
    fn play_tone(&mut self, tone: &Tone) {
        if self.audio_ctx.state() == web::AudioContextState::Suspended {
            _ = self.audio_ctx.resume();
        }
        if let Err(e) = trigger_tone(&self.audio_ctx, tone) {
            log::warn!("[sfx] tone {:.1}Hz failed: {:?}", tone.frequency_hz, e);
        }
    }
}

// Fire a one-shot oscillator through its own envelope gain straight to the destination
fn trigger_tone(audio_ctx: &web::AudioContext, tone: &Tone) -> Result<(), JsValue> {
    let src = web::OscillatorNode::new(audio_ctx)?;
    match tone.waveform {
        Waveform::Sine => src.set_type(web::OscillatorType::Sine),
        Waveform::Triangle => src.set_type(web::OscillatorType::Triangle),
    }
    src.frequency().set_value(tone.frequency_hz);

    let g = web::GainNode::new(audio_ctx)?;
    let env = tone.envelope;
    let t0 = audio_ctx.current_time() + tone.offset_sec;
    g.gain().set_value_at_time(0.0, t0)?;
    g.gain()
        .linear_ramp_to_value_at_time(env.peak, t0 + env.attack_sec)?;
    g.gain()
        .exponential_ramp_to_value_at_time(env.floor, t0 + tone.duration_sec)?;

    src.connect_with_audio_node(&g)?;
    g.connect_with_audio_node(&audio_ctx.destination())?;
    src.start_with_when(t0)?;
    src.stop_with_when(t0 + tone.duration_sec)?;
    Ok(())
}

/// Looping background track with autoplay-retry bookkeeping.
#[derive(Clone)]
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
    gate: Rc<RefCell<PlaybackGate>>,
}

impl BackgroundMusic {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let element =
            web::HtmlAudioElement::new_with_src(url).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_loop(true);
        Ok(Self {
            element,
            gate: Rc::new(RefCell::new(PlaybackGate::default())),
        })
    }

    pub fn apply(&self, settings: AudioSettings) {
        self.element.set_volume(settings.volume as f64);
        if settings.music_enabled {
            if self.element.paused() {
                self.play();
            }
        } else {
            _ = self.element.pause();
            self.gate.borrow_mut().on_disabled();
        }
    }

    /// Called from any click/touch: retries a previously blocked start.
    pub fn retry_on_gesture(&self, music_enabled: bool) {
        if self.gate.borrow().should_retry(music_enabled) {
            self.play();
        }
    }

    fn play(&self) {
        let gate = self.gate.clone();
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                let started = JsFuture::from(promise).await.is_ok();
                gate.borrow_mut().on_play_result(started);
            }),
            Err(e) => {
                log::warn!("[music] play() threw: {:?}", e);
                gate.borrow_mut().on_play_result(false);
            }
        }
    }
}
