//! Per-frame simulation tick
//!
//! The mode controller: reads this frame's input, advances whatever the
//! current phase allows, and returns the intents the frame produced.

use super::collision;
use super::physics;
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::SoundEffect;
use crate::platform::InputEvent;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap while idle or playing, reset after game over
    pub confirm: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Collapse a frame's worth of polled events; quit is handled by the caller
    pub fn from_events(events: &[InputEvent]) -> Self {
        let mut input = Self::default();
        for event in events {
            match event {
                InputEvent::Confirm => input.confirm = true,
                InputEvent::PauseToggle => input.pause = !input.pause,
                InputEvent::Quit => {}
            }
        }
        input
    }
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Idle => {
            if input.confirm {
                log::info!("Round started");
                state.phase = GamePhase::Playing;
                state.round_time = 0.0;
                flap(state, &mut events);
            } else {
                // Hover in place while the world keeps scrolling underneath
                physics::scroll_ground(&mut state.ground, dt);
                state.visual.update_wings(dt);
                return events;
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                events.push(GameEvent::PlaySound(SoundEffect::Pause));
                return events;
            }
            if input.confirm {
                flap(state, &mut events);
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::PlaySound(SoundEffect::Pause));
            }
            return events;
        }
        GamePhase::GameOver => {
            if input.confirm {
                reset_round(state, &mut events);
            }
            return events;
        }
    }

    physics::step(state, dt);

    if let Some(pair) = state.spawner.update(dt) {
        state.obstacles.push(pair);
    }

    collision::resolve(state, &mut events);

    // A crash this frame freezes the tilt where it is
    if state.phase == GamePhase::Playing {
        let engaged = state.gravity_engaged();
        state.visual.update_tilt(dt, engaged);
        state.visual.update_wings(dt);
    }

    events
}

fn flap(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.player.flap();
    state.visual.flap();
    events.push(GameEvent::PlaySound(SoundEffect::Flap));
}

/// Close out a finished round and return to idle
pub fn reset_round(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.score > state.high_score {
        log::info!("New high score: {} (was {})", state.score, state.high_score);
        events.push(GameEvent::PersistHighScore(state.score));
        state.high_score = state.score;
    }

    state.phase = GamePhase::Idle;
    state.score = 0;
    state.round_time = 0.0;
    state.player.reset();
    state.visual.reset();
    state.spawner.reset();
    state.obstacles.clear();
}
