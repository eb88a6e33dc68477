//! Frame orchestrator
//!
//! Owns the simulation state together with the collaborators it needs
//! (high score store, audio) and carries out the intents each tick returns.

use crate::audio::{AudioManager, AudioSink};
use crate::highscores::HighScoreStore;
use crate::platform::{InputEvent, clamp_frame_dt};
use crate::renderer::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// What the host loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Game instance holding all state
pub struct Game<S: HighScoreStore, A: AudioSink> {
    state: GameState,
    store: S,
    audio: AudioManager<A>,
    /// Longest step a single frame may simulate; `None` runs the raw dt
    max_frame_dt: Option<f32>,
}

impl<S: HighScoreStore, A: AudioSink> Game<S, A> {
    /// Start a session, reading the stored high score once
    pub fn new(seed: u64, store: S, audio: AudioManager<A>) -> Self {
        let high_score = store.load();
        log::info!("Session seed {}, high score {}", seed, high_score);
        Self {
            state: GameState::new(seed, high_score),
            store,
            audio,
            max_frame_dt: Settings::default().max_frame_dt,
        }
    }

    /// Take the frame cap and audio levels from user settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.audio.apply_settings(settings);
        self.set_max_frame_dt(settings.max_frame_dt);
    }

    pub fn set_max_frame_dt(&mut self, max_dt: Option<f32>) {
        self.max_frame_dt = max_dt;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    /// Run one frame: input, simulation, then side effects. `dt` is the raw
    /// wall-clock step; stalls are capped before the tick sees them.
    pub fn frame(&mut self, events: &[InputEvent], dt: f32) -> FrameOutcome {
        if events.contains(&InputEvent::Quit) {
            log::info!("Quit requested");
            return FrameOutcome::Quit;
        }

        let before = self.state.phase;
        let input = TickInput::from_events(events);
        let dt = clamp_frame_dt(dt, self.max_frame_dt);
        for event in tick(&mut self.state, &input, dt) {
            self.apply(event);
        }

        if before != self.state.phase {
            log::debug!("Phase {:?} -> {:?}", before, self.state.phase);
        }

        FrameOutcome::Continue
    }

    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::PlaySound(effect) => self.audio.play(effect),
            GameEvent::PersistHighScore(score) => {
                if let Err(e) = self.store.save(score) {
                    log::error!("Failed to save high score {}: {}", score, e);
                }
                // Never let a failed or stale store lower what this session has seen
                self.state.high_score = self.store.load().max(self.state.high_score);
            }
        }
    }

    /// Snapshot for the renderer
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        renderer::scene(&self.state)
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudioSink, SoundEffect};
    use crate::consts::*;
    use crate::highscores::MemoryHighScore;
    use crate::platform::{InputSource, ScriptedInput};

    const DT: f32 = 1.0 / 60.0;

    fn game(store: MemoryHighScore) -> Game<MemoryHighScore, RecordingAudioSink> {
        Game::new(7, store, AudioManager::new(RecordingAudioSink::default()))
    }

    fn played(game: &Game<MemoryHighScore, RecordingAudioSink>) -> Vec<SoundEffect> {
        game.audio().sink().played.iter().map(|(e, _)| *e).collect()
    }

    /// Drop the bird straight onto the ground
    fn crash(game: &mut Game<MemoryHighScore, RecordingAudioSink>) {
        game.frame(&[InputEvent::Confirm], DT);
        while !game.is_over() {
            game.frame(&[], DT);
        }
    }

    #[test]
    fn test_loads_high_score_at_start() {
        let game = game(MemoryHighScore {
            score: Some(9),
            ..Default::default()
        });
        assert_eq!(game.state().high_score, 9);
    }

    #[test]
    fn test_quit() {
        let mut game = game(MemoryHighScore::default());
        assert_eq!(game.frame(&[], DT), FrameOutcome::Continue);
        assert_eq!(
            game.frame(&[InputEvent::Confirm, InputEvent::Quit], DT),
            FrameOutcome::Quit
        );
        assert_eq!(game.state().phase, GamePhase::Idle);
    }

    #[test]
    fn test_sounds_dispatched() {
        let mut game = game(MemoryHighScore::default());
        crash(&mut game);
        let sounds = played(&game);
        assert_eq!(sounds.first(), Some(&SoundEffect::Flap));
        assert_eq!(sounds.last(), Some(&SoundEffect::Die));
    }

    #[test]
    fn test_new_best_is_persisted() {
        let mut game = game(MemoryHighScore {
            score: Some(2),
            ..Default::default()
        });
        crash(&mut game);
        game.state.score = 5;
        game.frame(&[InputEvent::Confirm], DT);

        assert_eq!(game.store().score, Some(5));
        assert_eq!(game.state().high_score, 5);
        assert_eq!(game.state().phase, GamePhase::Idle);
    }

    #[test]
    fn test_lower_score_not_persisted() {
        let mut game = game(MemoryHighScore {
            score: Some(20),
            ..Default::default()
        });
        crash(&mut game);
        game.state.score = 5;
        game.frame(&[InputEvent::Confirm], DT);
        assert_eq!(game.store().score, Some(20));
        assert_eq!(game.state().high_score, 20);
    }

    #[test]
    fn test_failed_save_keeps_session_best() {
        let mut game = game(MemoryHighScore {
            score: Some(1),
            fail_saves: true,
        });
        crash(&mut game);
        game.state.score = 4;
        game.frame(&[InputEvent::Confirm], DT);
        assert_eq!(game.store().score, Some(1));
        assert_eq!(game.state().high_score, 4);

        // Gameplay carries on
        game.frame(&[InputEvent::Confirm], DT);
        assert_eq!(game.state().phase, GamePhase::Playing);
    }

    #[test]
    fn test_draw_commands_follow_state() {
        let mut game = game(MemoryHighScore::default());
        game.frame(&[InputEvent::Confirm], DT);
        let cmds = game.draw_commands();
        let bird = cmds.last().unwrap();
        assert_eq!(bird.rotation, FLAP_ANGLE);
    }

    #[test]
    fn test_stalled_frame_is_capped() {
        let mut game = game(MemoryHighScore::default());
        game.frame(&[InputEvent::Confirm], 5.0);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().round_time, 0.1);

        game.set_max_frame_dt(None);
        game.frame(&[], 5.0);
        assert!((game.state().round_time - 5.1).abs() < 1e-4);
    }

    #[test]
    fn test_settings_set_frame_cap() {
        let mut game = game(MemoryHighScore::default());
        game.apply_settings(&Settings {
            max_frame_dt: Some(0.05),
            muted: true,
            ..Default::default()
        });
        game.frame(&[InputEvent::Confirm], 1.0);
        assert_eq!(game.state().round_time, 0.05);
        assert!(played(&game).is_empty());
    }

    #[test]
    fn test_scripted_session() {
        let mut game = game(MemoryHighScore::default());
        let mut input = ScriptedInput::new([
            vec![InputEvent::Confirm],
            vec![],
            vec![InputEvent::PauseToggle],
            vec![InputEvent::Confirm],
        ]);

        let mut frames = 0;
        loop {
            let events = input.poll(game.state());
            if game.frame(&events, DT) == FrameOutcome::Quit {
                break;
            }
            frames += 1;
        }

        assert_eq!(frames, 4);
        // Confirm while paused does nothing
        assert_eq!(game.state().phase, GamePhase::Paused);
        assert_eq!(played(&game), vec![SoundEffect::Flap, SoundEffect::Pause]);
    }
}
