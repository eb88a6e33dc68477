//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned [`GameState`].

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawner::ObstacleSpawner;
use super::visual::VisualState;
use crate::audio::SoundEffect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap, bird hovers
    Idle,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Round ended, waiting for confirm to reset
    GameOver,
}

/// Intents emitted by the simulation for the orchestrator to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlaySound(SoundEffect),
    /// A finished round beat the stored high score
    PersistHighScore(u32),
}

/// The bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position of the top edge (pixels)
    pub y: f32,
    /// Vertical velocity (pixels/s, positive is down)
    pub velocity: f32,
    pub bounds: Rect,
    /// Upward speed granted by a flap
    pub impulse: f32,
    /// Downward acceleration once the pre-roll has elapsed
    pub gravity: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: PLAYER_START_Y,
            velocity: 0.0,
            bounds: Rect::new(PLAYER_X, PLAYER_START_Y, BIRD_WIDTH, BIRD_HEIGHT),
            impulse: FLAP_IMPULSE,
            gravity: GRAVITY,
        }
    }
}

impl Player {
    /// Replace vertical velocity with the flap impulse
    pub fn flap(&mut self) {
        self.velocity = -self.impulse;
    }

    /// Move bounds to follow `y`
    pub fn sync_bounds(&mut self) {
        self.bounds.y = self.y;
    }

    /// Back to the hover position with no motion
    pub fn reset(&mut self) {
        self.y = PLAYER_START_Y;
        self.velocity = 0.0;
        self.bounds = Rect::new(PLAYER_X, PLAYER_START_Y, BIRD_WIDTH, BIRD_HEIGHT);
    }

    /// True once the bird has left the top of the screen entirely
    pub fn is_above_screen(&self) -> bool {
        self.y < -self.bounds.h
    }
}

/// A top/bottom pipe pair with a fixed gap between them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    /// Left edge shared by both pipes
    pub x: f32,
    pub top: Rect,
    pub bottom: Rect,
    /// The bird has moved past this pair (set at most once)
    pub passed: bool,
    pub marked_for_removal: bool,
}

impl ObstaclePair {
    /// Build a pair at `x` whose top pipe starts at `top_y`
    pub fn new(id: u32, x: f32, top_y: f32) -> Self {
        let top = Rect::new(x, top_y, PIPE_WIDTH, PIPE_HEIGHT);
        let bottom = Rect::new(x, top.bottom() + GAP_SIZE, PIPE_WIDTH, PIPE_HEIGHT);
        Self {
            id,
            x,
            top,
            bottom,
            passed: false,
            marked_for_removal: false,
        }
    }

    /// Slide both pipes horizontally
    pub fn scroll(&mut self, dx: f32) {
        self.x -= dx;
        self.top.x = self.x;
        self.bottom.x = self.x;
    }

    /// Vertical opening between the pipes
    pub fn gap(&self) -> f32 {
        self.bottom.y - self.top.bottom()
    }

    pub fn intersects(&self, bounds: &Rect) -> bool {
        self.top.intersects(bounds) || self.bottom.intersects(bounds)
    }

    /// Fully scrolled past the left edge of the screen
    pub fn is_offscreen(&self) -> bool {
        self.x < -self.top.w
    }
}

/// One segment of the endlessly scrolling ground strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTile {
    pub x: f32,
}

impl GroundTile {
    pub fn scroll(&mut self, dx: f32) {
        self.x -= dx;
    }

    /// Fully scrolled past the left edge, ready to wrap
    pub fn is_offscreen(&self) -> bool {
        self.x < -GROUND_TILE_WIDTH
    }
}

/// Initial ground layout: tiles laid end to end from the left edge
pub fn initial_ground() -> [GroundTile; GROUND_TILE_COUNT] {
    std::array::from_fn(|i| GroundTile {
        x: GROUND_TILE_WIDTH * i as f32,
    })
}

/// Static rectangle the bird dies on
pub fn ground_collision_bounds() -> Rect {
    Rect::new(0.0, GROUND_Y, SCREEN_WIDTH, GROUND_TILE_HEIGHT)
}

/// Complete game state (deterministic for a given seed and dt sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score known to this process
    pub high_score: u32,
    /// Seconds since the current round started (drives the pre-roll gate)
    pub round_time: f32,
    pub player: Player,
    /// Active pipe pairs, oldest first
    pub obstacles: Vec<ObstaclePair>,
    pub ground: [GroundTile; GROUND_TILE_COUNT],
    pub spawner: ObstacleSpawner,
    /// Presentation-only tilt and wing animation
    pub visual: VisualState,
}

impl GameState {
    /// Create a new game state with the given seed and previously stored high score
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            high_score,
            round_time: 0.0,
            player: Player::default(),
            obstacles: Vec::new(),
            ground: initial_ground(),
            spawner: ObstacleSpawner::new(seed),
            visual: VisualState::default(),
        }
    }

    /// Gravity only applies after the pre-roll delay
    pub fn gravity_engaged(&self) -> bool {
        self.round_time > PRE_ROLL_DELAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_gap_is_fixed() {
        let pair = ObstaclePair::new(1, SCREEN_WIDTH, -180.0);
        assert_eq!(pair.gap(), GAP_SIZE);
        assert_eq!(pair.bottom.y, -180.0 + PIPE_HEIGHT + GAP_SIZE);
    }

    #[test]
    fn test_pair_scroll_moves_both_pipes() {
        let mut pair = ObstaclePair::new(1, 100.0, -150.0);
        pair.scroll(30.0);
        assert_eq!(pair.x, 70.0);
        assert_eq!(pair.top.x, 70.0);
        assert_eq!(pair.bottom.x, 70.0);
        assert_eq!(pair.gap(), GAP_SIZE);
    }

    #[test]
    fn test_pair_offscreen_threshold() {
        let mut pair = ObstaclePair::new(1, 0.0, -150.0);
        pair.scroll(PIPE_WIDTH);
        assert!(!pair.is_offscreen());
        pair.scroll(0.5);
        assert!(pair.is_offscreen());
    }

    #[test]
    fn test_ground_tile_offscreen_threshold() {
        let mut tile = GroundTile { x: -GROUND_TILE_WIDTH + 1.0 };
        tile.scroll(1.0);
        assert_eq!(tile.x, -GROUND_TILE_WIDTH);
        assert!(!tile.is_offscreen());
        tile.scroll(0.5);
        assert!(tile.is_offscreen());
    }

    #[test]
    fn test_player_flap_and_reset() {
        let mut player = Player::default();
        player.flap();
        assert_eq!(player.velocity, -FLAP_IMPULSE);
        player.y = 10.0;
        player.sync_bounds();
        assert_eq!(player.bounds.y, 10.0);
        player.reset();
        assert_eq!(player.y, PLAYER_START_Y);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.bounds.x, PLAYER_X);
    }

    #[test]
    fn test_player_above_screen() {
        let mut player = Player::default();
        player.y = -BIRD_HEIGHT;
        assert!(!player.is_above_screen());
        player.y = -BIRD_HEIGHT - 0.1;
        assert!(player.is_above_screen());
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(7, 12);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.high_score, 12);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.ground[2].x, GROUND_TILE_WIDTH * 2.0);
        assert!(!state.gravity_engaged());
    }
}
