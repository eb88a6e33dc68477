//! Motion integration for the bird and the scrolling world

use super::state::{GameState, GroundTile, ObstaclePair, Player};
use crate::consts::{GROUND_TILE_WIDTH, SCROLL_SPEED};

/// Semi-implicit Euler step: velocity first, then position from the new velocity
pub fn integrate_player(player: &mut Player, dt: f32) {
    player.velocity += player.gravity * dt;
    player.y += player.velocity * dt;
    player.sync_bounds();
}

/// Scroll every pipe pair left by the world speed
pub fn scroll_obstacles(obstacles: &mut [ObstaclePair], dt: f32) {
    let dx = SCROLL_SPEED * dt;
    for pair in obstacles {
        pair.scroll(dx);
    }
}

/// Scroll the ground strip, moving tiles that leave the screen to just
/// past the rightmost one so the strip never opens a seam
pub fn scroll_ground(ground: &mut [GroundTile], dt: f32) {
    let dx = SCROLL_SPEED * dt;
    for tile in ground.iter_mut() {
        tile.scroll(dx);
    }
    for i in 0..ground.len() {
        if ground[i].is_offscreen() {
            let rightmost = ground.iter().map(|t| t.x).fold(f32::MIN, f32::max);
            ground[i].x = rightmost + GROUND_TILE_WIDTH;
        }
    }
}

/// Advance everything that moves during active play
pub fn step(state: &mut GameState, dt: f32) {
    state.round_time += dt;
    if state.gravity_engaged() {
        integrate_player(&mut state.player, dt);
    }
    scroll_obstacles(&mut state.obstacles, dt);
    scroll_ground(&mut state.ground, dt);
}
