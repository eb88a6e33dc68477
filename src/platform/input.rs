//! Input events
//!
//! Devices are polled once per frame and reduced to three discrete events.

use std::collections::VecDeque;

use crate::consts::*;
use crate::sim::{GamePhase, GameState};

/// Discrete per-frame input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PauseToggle,
    /// Flap while idle or playing, reset after game over
    Confirm,
}

/// Something polled once per frame for input
pub trait InputSource {
    /// Events since the last poll. `state` is only there for scripted and
    /// computer-controlled sources; device-backed sources ignore it.
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Replays a fixed list of frames, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Frames to linger on the game over screen before restarting
const RESTART_DELAY_FRAMES: u32 = 90;

/// Computer player for headless runs and demos
///
/// Aims for the middle of the next gap and flaps whenever it sinks too far
/// below it. Quits after the requested number of rounds.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rounds: u32,
    max_rounds: u32,
    game_over_frames: u32,
}

impl Autopilot {
    pub fn new(max_rounds: u32) -> Self {
        Self {
            rounds: 0,
            max_rounds,
            game_over_frames: 0,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    /// Top-left y the bird should hold to sit centred in the next gap
    fn target_y(state: &GameState) -> f32 {
        state
            .obstacles
            .iter()
            .find(|p| p.x + p.top.w > state.player.bounds.x)
            .map(|p| p.top.bottom() + (GAP_SIZE - state.player.bounds.h) / 2.0)
            .unwrap_or(PLAYER_START_Y)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        match state.phase {
            GamePhase::Idle => {
                if self.rounds >= self.max_rounds {
                    vec![InputEvent::Quit]
                } else {
                    vec![InputEvent::Confirm]
                }
            }
            GamePhase::Playing => {
                let sinking = state.player.velocity >= 0.0;
                if sinking && state.player.y > Self::target_y(state) + 8.0 {
                    vec![InputEvent::Confirm]
                } else {
                    Vec::new()
                }
            }
            GamePhase::Paused => vec![InputEvent::PauseToggle],
            GamePhase::GameOver => {
                self.game_over_frames += 1;
                if self.game_over_frames >= RESTART_DELAY_FRAMES {
                    self.game_over_frames = 0;
                    self.rounds += 1;
                    vec![InputEvent::Confirm]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
