//! Platform abstraction layer
//!
//! Handles what the host provides to the simulation:
//! - Input events
//! - Frame timing (and the dt clamp policy)

pub mod input;
pub mod time;

pub use input::{Autopilot, InputEvent, InputSource, ScriptedInput};
pub use time::{FrameClock, clamp_frame_dt};
