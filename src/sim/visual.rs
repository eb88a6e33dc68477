//! Bird tilt and wing animation
//!
//! Presentation state only: nothing here feeds back into physics or scoring.
//! A flap snaps the bird nose-up instantly; the dive back to nose-down is
//! gradual and only starts once the bird has been falling for a moment.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which way the bird is tilting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationPhase {
    Neutral,
    /// Just flapped, held nose-up
    Upswing,
    /// Falling long enough to tip nose-down
    Downswing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// Rotation in degrees, negative is nose-up
    pub angle: f32,
    pub upswing: bool,
    /// Seconds of upswing left
    pub upswing_timer: f32,
    /// Seconds since the last flap (counted only after the pre-roll)
    pub downswing_timer: f32,
    /// Wing frame index into the sprite sheet
    pub frame: u8,
    frame_timer: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            upswing: false,
            upswing_timer: 0.0,
            downswing_timer: 0.0,
            frame: 0,
            frame_timer: 0.0,
        }
    }
}

impl VisualState {
    pub fn phase(&self) -> RotationPhase {
        if self.upswing {
            RotationPhase::Upswing
        } else if self.downswing_timer > DIVE_DELAY {
            RotationPhase::Downswing
        } else {
            RotationPhase::Neutral
        }
    }

    /// React to a flap: snap nose-up and restart both timers
    pub fn flap(&mut self) {
        self.upswing = true;
        self.angle = FLAP_ANGLE;
        self.upswing_timer = UPSWING_DURATION;
        self.downswing_timer = 0.0;
    }

    /// Advance tilt during active play
    pub fn update_tilt(&mut self, dt: f32, gravity_engaged: bool) {
        if !gravity_engaged {
            return;
        }

        self.downswing_timer += dt;

        if self.upswing {
            if self.upswing_timer > 0.0 {
                self.upswing_timer -= dt;
            }
            if self.upswing_timer <= 0.0 {
                self.upswing = false;
            }
        }

        if self.downswing_timer > DIVE_DELAY {
            self.angle = (self.angle + DIVE_RATE * dt).min(MAX_DIVE_ANGLE);
        }
    }

    /// Cycle the wing frame at a fixed rate
    pub fn update_wings(&mut self, dt: f32) {
        self.frame_timer += dt;
        while self.frame_timer >= WING_FRAME_DURATION {
            self.frame_timer -= WING_FRAME_DURATION;
            self.frame = (self.frame + 1) % BIRD_FRAMES;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
