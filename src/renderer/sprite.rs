//! Draw commands for every visible entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::decimal_digits;
use crate::sim::{GamePhase, GameState};

/// Background sprite size
const BACKGROUND_SIZE: Vec2 = Vec2::new(288.0, 512.0);
/// "Tap to start" message shown after a crash
const MESSAGE_SIZE: Vec2 = Vec2::new(184.0, 267.0);
const MESSAGE_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0 - 75.0, 0.0);

/// Digit sprite size, also the horizontal advance between digits
pub const DIGIT_SIZE: Vec2 = Vec2::new(24.0, 36.0);
/// Where the last digit of the running score goes
pub const SCORE_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, 15.0);
/// Where the last digit of the high score goes
pub const HIGH_SCORE_POS: Vec2 = Vec2::new(180.0, 15.0);

/// Texture the host should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Ground,
    PipeTop,
    PipeBottom,
    /// 3-frame sheet, see [`DrawCommand::frame`]
    Bird,
    Message,
    Digit(u8),
}

impl SpriteId {
    /// Stable texture slot: fixed sprites first, then digits 0-9
    pub fn index(&self) -> u32 {
        match self {
            SpriteId::Background => 0,
            SpriteId::Ground => 1,
            SpriteId::PipeTop => 2,
            SpriteId::PipeBottom => 3,
            SpriteId::Bird => 4,
            SpriteId::Message => 5,
            SpriteId::Digit(d) => 6 + u32::from(*d),
        }
    }
}

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    /// Top-left corner in screen space
    pub position: Vec2,
    pub size: Vec2,
    /// Degrees clockwise about the quad centre
    pub rotation: f32,
    /// Sprite sheet frame (only the bird animates)
    pub frame: u8,
}

impl DrawCommand {
    pub fn new(sprite: SpriteId, position: Vec2, size: Vec2) -> Self {
        Self {
            sprite,
            position,
            size,
            rotation: 0.0,
            frame: 0,
        }
    }
}

/// Draw a single digit (values above 9 are clamped) at `position`
pub fn digit_command(digit: u8, position: Vec2) -> DrawCommand {
    DrawCommand::new(SpriteId::Digit(digit.min(9)), position, DIGIT_SIZE)
}

/// Draw a number whose last digit sits at `units_pos`, growing leftwards
pub fn number_commands(value: u32, units_pos: Vec2) -> Vec<DrawCommand> {
    let digits = decimal_digits(value);
    let count = digits.len();
    digits
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let shift = (count - 1 - i) as f32 * DIGIT_SIZE.x;
            digit_command(d, units_pos - Vec2::new(shift, 0.0))
        })
        .collect()
}

/// Build the full frame, back to front
pub fn scene(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(16 + state.obstacles.len() * 2);

    for i in 0..2 {
        let pos = Vec2::new(BACKGROUND_SIZE.x * i as f32, 0.0);
        commands.push(DrawCommand::new(SpriteId::Background, pos, BACKGROUND_SIZE));
    }

    for pair in state.obstacles.iter().filter(|p| !p.marked_for_removal) {
        commands.push(DrawCommand::new(SpriteId::PipeTop, pair.top.origin(), pair.top.size()));
        commands.push(DrawCommand::new(
            SpriteId::PipeBottom,
            pair.bottom.origin(),
            pair.bottom.size(),
        ));
    }

    commands.extend(number_commands(state.high_score, HIGH_SCORE_POS));
    commands.extend(number_commands(state.score, SCORE_POS));

    let ground_size = Vec2::new(GROUND_TILE_WIDTH, GROUND_TILE_HEIGHT);
    for tile in &state.ground {
        commands.push(DrawCommand::new(
            SpriteId::Ground,
            Vec2::new(tile.x, GROUND_Y),
            ground_size,
        ));
    }

    if state.phase == GamePhase::GameOver {
        commands.push(DrawCommand::new(SpriteId::Message, MESSAGE_POS, MESSAGE_SIZE));
    }

    let bird = &state.player.bounds;
    commands.push(DrawCommand {
        sprite: SpriteId::Bird,
        position: bird.origin(),
        size: bird.size(),
        rotation: state.visual.angle,
        frame: state.visual.frame,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ObstaclePair;

    #[test]
    fn test_digit_command() {
        let cmd = digit_command(7, Vec2::new(10.0, 20.0));
        assert_eq!(cmd.sprite, SpriteId::Digit(7));
        assert_eq!(cmd.position, Vec2::new(10.0, 20.0));
        assert_eq!(cmd.size, DIGIT_SIZE);
        assert_eq!(digit_command(12, Vec2::ZERO).sprite, SpriteId::Digit(9));
    }

    #[test]
    fn test_number_grows_leftward() {
        let cmds = number_commands(305, Vec2::new(100.0, 5.0));
        let sprites: Vec<SpriteId> = cmds.iter().map(|c| c.sprite).collect();
        assert_eq!(
            sprites,
            vec![SpriteId::Digit(3), SpriteId::Digit(0), SpriteId::Digit(5)]
        );
        assert_eq!(cmds[2].position.x, 100.0);
        assert_eq!(cmds[0].position.x, 100.0 - 2.0 * DIGIT_SIZE.x);
    }

    #[test]
    fn test_scene_bird_is_last_with_rotation() {
        let mut state = GameState::new(1, 0);
        state.visual.angle = 33.0;
        state.visual.frame = 2;
        let cmds = scene(&state);
        let bird = cmds.last().unwrap();
        assert_eq!(bird.sprite, SpriteId::Bird);
        assert_eq!(bird.rotation, 33.0);
        assert_eq!(bird.frame, 2);
        assert_eq!(bird.position, Vec2::new(PLAYER_X, PLAYER_START_Y));
    }

    #[test]
    fn test_scene_contents() {
        let mut state = GameState::new(1, 12);
        state.obstacles.push(ObstaclePair::new(1, 200.0, -150.0));
        let cmds = scene(&state);
        let count = |id: SpriteId| cmds.iter().filter(|c| c.sprite == id).count();
        assert_eq!(count(SpriteId::PipeTop), 1);
        assert_eq!(count(SpriteId::PipeBottom), 1);
        assert_eq!(count(SpriteId::Ground), GROUND_TILE_COUNT);
        assert_eq!(count(SpriteId::Message), 0);
        // High score 12 plus score 0
        assert_eq!(count(SpriteId::Digit(1)), 1);
        assert_eq!(count(SpriteId::Digit(2)), 1);
        assert_eq!(count(SpriteId::Digit(0)), 1);

        state.phase = GamePhase::GameOver;
        let cmds = scene(&state);
        assert!(cmds.iter().any(|c| c.sprite == SpriteId::Message));
    }

    #[test]
    fn test_sprite_indices_distinct() {
        let mut ids: Vec<u32> = [
            SpriteId::Background,
            SpriteId::Ground,
            SpriteId::PipeTop,
            SpriteId::PipeBottom,
            SpriteId::Bird,
            SpriteId::Message,
        ]
        .iter()
        .map(SpriteId::index)
        .chain((0..10).map(|d| SpriteId::Digit(d).index()))
        .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}
