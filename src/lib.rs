//! Pipe Dash - A side-scrolling pipe-dodging reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `game`: Frame orchestrator that applies simulation intents to collaborators
//! - `renderer`: Draw-command snapshot for an external renderer
//! - `audio`: Sound effect intents and the audio sink seam
//! - `platform`: Input events and frame timing
//! - `highscores`: High score persistence
//! - `settings`: JSON configuration

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::{FileHighScore, HighScoreStore, MemoryHighScore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical screen dimensions
    pub const SCREEN_WIDTH: f32 = 480.0;
    pub const SCREEN_HEIGHT: f32 = 272.0;

    /// Bird sprite (one frame of the 3-frame sheet)
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    pub const BIRD_FRAMES: u8 = 3;
    /// Bird never moves horizontally; the world scrolls past it
    pub const PLAYER_X: f32 = SCREEN_WIDTH / 2.0;
    pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT / 2.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 500.0;
    /// Upward velocity set by a flap (pixels/s)
    pub const FLAP_IMPULSE: f32 = 10_000.0 / 60.0;
    /// Seconds after round start before gravity engages
    pub const PRE_ROLL_DELAY: f32 = 1.0;

    /// Horizontal world scroll shared by pipes and ground (pixels/s)
    pub const SCROLL_SPEED: f32 = 75.0;

    /// Pipe sprite size
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Vertical opening between the top and bottom pipe
    pub const GAP_SIZE: f32 = 75.0;
    /// Seconds between pipe spawns
    pub const SPAWN_INTERVAL: f32 = 2.2;
    /// How far above the screen the top pipe may start (inclusive range)
    pub const MIN_TOP_OFFSET: i32 = 130;
    pub const MAX_TOP_OFFSET: i32 = 230;

    /// Ground tile sprite; the tile sits 20px lower than flush with the screen bottom
    pub const GROUND_TILE_WIDTH: f32 = 336.0;
    pub const GROUND_TILE_HEIGHT: f32 = 112.0;
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - GROUND_TILE_HEIGHT + 20.0;
    pub const GROUND_TILE_COUNT: usize = 3;

    /// Tilt animation (degrees, seconds)
    pub const FLAP_ANGLE: f32 = -20.0;
    pub const MAX_DIVE_ANGLE: f32 = 90.0;
    pub const DIVE_RATE: f32 = 120.0;
    pub const UPSWING_DURATION: f32 = 1.0;
    pub const DIVE_DELAY: f32 = 0.5;
    /// Wing frame advances every 10 frames at 60 Hz
    pub const WING_FRAME_DURATION: f32 = 10.0 / 60.0;
}

/// Split a non-negative number into its decimal digits, most significant first
pub fn decimal_digits(mut value: u32) -> Vec<u8> {
    let mut digits = Vec::new();
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digits() {
        assert_eq!(decimal_digits(0), vec![0]);
        assert_eq!(decimal_digits(7), vec![7]);
        assert_eq!(decimal_digits(42), vec![4, 2]);
        assert_eq!(decimal_digits(1005), vec![1, 0, 0, 5]);
    }
}
