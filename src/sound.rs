//! Synthesized sound cues: one short oscillator blip per game event, gated on
//! the player's sound settings.

use web_sys::{AudioContext, OscillatorType};

use crate::input::Pickup;
use crate::settings::SoundSettings;
use crate::util::cwarn;

/// Gain reached at the top of the attack ramp at full master volume.
pub const PEAK_GAIN: f32 = 0.3;
const ATTACK_S: f64 = 0.01;
const RELEASE_GAIN: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Coin,
    Diamond,
    Jump,
    Crash,
    PowerUp,
    Button,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl Wave {
    fn oscillator_type(self) -> OscillatorType {
        match self {
            Wave::Sine => OscillatorType::Sine,
            Wave::Triangle => OscillatorType::Triangle,
            Wave::Square => OscillatorType::Square,
            Wave::Sawtooth => OscillatorType::Sawtooth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub seconds: f64,
    pub wave: Wave,
}

impl SoundCue {
    pub fn tone(self) -> Tone {
        let (frequency, seconds, wave) = match self {
            SoundCue::Coin => (800.0, 0.1, Wave::Sine),
            SoundCue::Diamond => (1200.0, 0.15, Wave::Triangle),
            SoundCue::Jump => (400.0, 0.1, Wave::Square),
            SoundCue::Crash => (150.0, 0.3, Wave::Sawtooth),
            SoundCue::PowerUp => (600.0, 0.2, Wave::Sine),
            SoundCue::Button => (500.0, 0.05, Wave::Triangle),
        };
        Tone { frequency, seconds, wave }
    }
}

pub fn cue_for(pickup: Pickup) -> SoundCue {
    match pickup {
        Pickup::Coin { .. } => SoundCue::Coin,
        Pickup::Diamond { .. } => SoundCue::Diamond,
        Pickup::Obstacle => SoundCue::Crash,
        Pickup::PowerUp => SoundCue::PowerUp,
    }
}

/// Peak gain for a cue, or `None` when nothing should be heard.
pub fn peak_gain(settings: SoundSettings) -> Option<f32> {
    let gain = settings.clamp().effective_gain() * PEAK_GAIN;
    (gain > 0.0).then_some(gain)
}

/// Owns the page's audio context, created on first use. Browsers only allow
/// that after a user gesture, so a failed creation is retried on the next cue.
#[derive(Default)]
pub struct SoundBoard {
    ctx: Option<AudioContext>,
}

impl SoundBoard {
    pub fn play(&mut self, cue: SoundCue, settings: SoundSettings) {
        let Some(peak) = peak_gain(settings) else {
            return;
        };
        if self.ctx.is_none() {
            self.ctx = AudioContext::new().ok();
        }
        let Some(ctx) = &self.ctx else {
            cwarn("sound: audio context unavailable");
            return;
        };
        if blip(ctx, cue.tone(), peak).is_err() {
            cwarn(&format!("sound: {cue:?} cue failed"));
        }
    }
}

fn blip(ctx: &AudioContext, tone: Tone, peak: f32) -> Result<(), wasm_bindgen::JsValue> {
    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let t0 = ctx.current_time();
    osc.set_type(tone.wave.oscillator_type());
    osc.frequency().set_value_at_time(tone.frequency, t0)?;
    let level = gain.gain();
    level.set_value_at_time(0.0, t0)?;
    level.linear_ramp_to_value_at_time(peak, t0 + ATTACK_S)?;
    level.exponential_ramp_to_value_at_time(RELEASE_GAIN.min(peak), t0 + tone.seconds)?;

    osc.start_with_when(t0)?;
    osc.stop_with_when(t0 + tone.seconds)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_or_silent_settings_play_nothing() {
        assert_eq!(peak_gain(SoundSettings { enabled: false, master_volume: 1.0 }), None);
        assert_eq!(peak_gain(SoundSettings { enabled: true, master_volume: 0.0 }), None);
    }

    #[test]
    fn gain_scales_with_master_volume() {
        let full = peak_gain(SoundSettings { enabled: true, master_volume: 1.0 }).unwrap();
        assert!((full - PEAK_GAIN).abs() < 1e-6);
        let half = peak_gain(SoundSettings { enabled: true, master_volume: 0.5 }).unwrap();
        assert!((half - PEAK_GAIN / 2.0).abs() < 1e-6);
        let loud = peak_gain(SoundSettings { enabled: true, master_volume: 3.0 }).unwrap();
        assert!((loud - PEAK_GAIN).abs() < 1e-6);
    }

    #[test]
    fn pickups_have_distinct_cues() {
        assert_eq!(cue_for(Pickup::Coin { value: None }), SoundCue::Coin);
        assert_eq!(cue_for(Pickup::Diamond { value: Some(3) }), SoundCue::Diamond);
        assert_eq!(cue_for(Pickup::Obstacle), SoundCue::Crash);
        assert_eq!(SoundCue::Crash.tone().wave, Wave::Sawtooth);
        assert!(SoundCue::Crash.tone().seconds > SoundCue::Coin.tone().seconds);
    }
}
