//! Timed procedural pipe generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use super::state::ObstaclePair;
use crate::consts::*;

// An empty offset range would make `random_range` panic.
const_assert!(MIN_TOP_OFFSET <= MAX_TOP_OFFSET);
const_assert!(MIN_TOP_OFFSET >= 0);

/// Emits a pipe pair at the right edge every [`SPAWN_INTERVAL`] seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    /// Seconds accumulated since the last spawn
    pub since_last_spawn: f32,
    rng: Pcg32,
    next_id: u32,
}

impl ObstacleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            since_last_spawn: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Advance the spawn clock, returning a new pair when the interval elapses
    pub fn update(&mut self, dt: f32) -> Option<ObstaclePair> {
        self.since_last_spawn += dt;
        if self.since_last_spawn >= SPAWN_INTERVAL {
            self.since_last_spawn = 0.0;
            Some(self.spawn())
        } else {
            None
        }
    }

    /// Build a pair at the right edge with a random vertical offset
    pub fn spawn(&mut self) -> ObstaclePair {
        let offset = self.rng.random_range(MIN_TOP_OFFSET..=MAX_TOP_OFFSET);
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("Spawning pipe pair {} with top offset {}", id, offset);
        ObstaclePair::new(id, SCREEN_WIDTH, -(offset as f32))
    }

    /// Restart the spawn clock (the RNG keeps its stream)
    pub fn reset(&mut self) {
        self.since_last_spawn = 0.0;
    }
}
