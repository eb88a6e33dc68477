//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Same seed and dt sequence, same result
//! - Seeded RNG only
//! - Side effects are returned as [`GameEvent`] intents, never performed
//! - No rendering, audio or filesystem dependencies

pub mod collision;
pub mod physics;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod visual;

pub use collision::{Crash, detect_crash};
pub use rect::Rect;
pub use spawner::ObstacleSpawner;
pub use state::{GameEvent, GamePhase, GameState, GroundTile, ObstaclePair, Player};
pub use tick::{TickInput, reset_round, tick};
pub use visual::{RotationPhase, VisualState};
