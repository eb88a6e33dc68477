//! Frame timing
//!
//! The simulation integrates whatever dt it is handed. Stalls (a dragged
//! window, a scheduler hiccup) are capped here, before the tick, so a single
//! huge step cannot launch the bird or tunnel it through a pipe.

use std::time::Instant;

/// Apply the clamp policy to a raw frame duration
pub fn clamp_frame_dt(dt: f32, max_dt: Option<f32>) -> f32 {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    match max_dt {
        Some(max) => dt.min(max),
        None => dt,
    }
}

/// Wall-clock frame timer
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: Option<f32>,
}

impl FrameClock {
    pub fn new(max_dt: Option<f32>) -> Self {
        Self::starting_at(Instant::now(), max_dt)
    }

    pub fn starting_at(start: Instant, max_dt: Option<f32>) -> Self {
        Self { last: start, max_dt }
    }

    /// Seconds since the previous call, clamped
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let raw = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        clamp_frame_dt(raw, self.max_dt)
    }
}
