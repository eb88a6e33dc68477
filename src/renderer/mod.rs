//! Rendering hand-off
//!
//! The game never draws. Each frame it produces a list of [`DrawCommand`]s
//! (sprite, position, size, rotation) in back-to-front order, which the host
//! renderer turns into texture blits or uploads as [`SpriteInstance`]s.

pub mod instance;
pub mod sprite;

pub use instance::{SpriteInstance, instance_bytes};
pub use sprite::{DrawCommand, SpriteId, digit_command, number_commands, scene};
