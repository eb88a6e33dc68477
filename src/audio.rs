//! Audio system
//!
//! The simulation only names sound effects. Playback belongs to whatever
//! [`AudioSink`] the host plugs in; [`AudioManager`] sits in between and
//! applies volume and mute settings.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Bird flaps
    Flap,
    /// Bird hits a pipe, the ground, or flies off the top
    Die,
    /// Bird cleared a pipe pair
    Score,
    /// Pause toggled either way
    Pause,
}

impl SoundEffect {
    /// Sample file the host is expected to load for this effect
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Flap => "wing.wav",
            SoundEffect::Die => "die.wav",
            SoundEffect::Score => "point.wav",
            SoundEffect::Pause => "magic.wav",
        }
    }

    /// Relative loudness of each effect
    fn gain(&self) -> f32 {
        match self {
            SoundEffect::Flap => 0.6,
            SoundEffect::Die => 1.0,
            SoundEffect::Score => 0.8,
            SoundEffect::Pause => 0.5,
        }
    }
}

/// Fire-and-forget playback backend
pub trait AudioSink {
    /// Start playing `effect` at `volume` (0.0 - 1.0); must not block
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink for headless runs: logs instead of playing
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("♪ {} at {:.2}", effect.asset_name(), volume);
    }
}

/// Records everything it is asked to play
#[derive(Debug, Default)]
pub struct RecordingAudioSink {
    pub played: Vec<(SoundEffect, f32)>,
}

impl AudioSink for RecordingAudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        self.played.push((effect, volume));
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volume and mute preferences from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.gain();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_scaling() {
        let mut audio = AudioManager::new(RecordingAudioSink::default());
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::Die);
        let (effect, vol) = audio.sink().played[0];
        assert_eq!(effect, SoundEffect::Die);
        assert!((vol - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(RecordingAudioSink::default());
        audio.set_muted(true);
        audio.play(SoundEffect::Flap);
        assert!(audio.sink().played.is_empty());
    }

    #[test]
    fn test_volume_clamped() {
        let mut audio = AudioManager::new(RecordingAudioSink::default());
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        audio.play(SoundEffect::Score);
        assert!(audio.sink().played.is_empty());
    }

    #[test]
    fn test_apply_settings() {
        let settings = Settings {
            master_volume: 1.0,
            sfx_volume: 1.0,
            ..Settings::default()
        };
        let mut audio = AudioManager::new(RecordingAudioSink::default());
        audio.apply_settings(&settings);
        audio.play(SoundEffect::Pause);
        assert!((audio.sink().played[0].1 - 0.5).abs() < 1e-6);
    }
}
