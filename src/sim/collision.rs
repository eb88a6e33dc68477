//! Collision detection, pass scoring and despawning
//!
//! Runs once per active frame after integration. Order matters: every
//! collision is checked before any pass is scored, and pairs are only
//! despawned after both, so nothing escapes evaluation on the tick it leaves.

use super::state::{GameEvent, GamePhase, GameState, ObstaclePair, ground_collision_bounds};
use crate::audio::SoundEffect;

/// What ended the round, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Ground,
    Obstacle { id: u32 },
    Ceiling,
}

/// Find the first thing the bird has run into this frame
pub fn detect_crash(state: &GameState) -> Option<Crash> {
    let bounds = &state.player.bounds;

    if bounds.intersects(&ground_collision_bounds()) {
        return Some(Crash::Ground);
    }

    if let Some(pair) = state
        .obstacles
        .iter()
        .filter(|p| !p.marked_for_removal)
        .find(|p| p.intersects(bounds))
    {
        return Some(Crash::Obstacle { id: pair.id });
    }

    if state.player.is_above_screen() {
        return Some(Crash::Ceiling);
    }

    None
}

/// Mark pairs the bird has moved beyond, scoring those cleared through the gap
///
/// Returns the number of points awarded. `live` is false once the round has
/// ended this frame: pairs still flip to passed but award nothing.
pub fn resolve_passes(state: &mut GameState, live: bool) -> u32 {
    let bounds = state.player.bounds;
    let mut awarded = 0;

    for pair in state.obstacles.iter_mut().filter(|p| !p.passed) {
        if bounds.x > pair.x {
            pair.passed = true;
            if live && bounds.y >= pair.top.bottom() {
                awarded += 1;
            }
        }
    }

    awarded
}

/// Remove pairs that are fully off the left edge, returning how many went
pub fn despawn_offscreen(obstacles: &mut Vec<ObstaclePair>) -> usize {
    for pair in obstacles.iter_mut() {
        if pair.is_offscreen() {
            pair.marked_for_removal = true;
        }
    }
    let before = obstacles.len();
    obstacles.retain(|p| !p.marked_for_removal);
    before - obstacles.len()
}

/// Run the full resolver for one frame
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if let Some(crash) = detect_crash(state) {
        log::info!("Round over ({:?}) with score {}", crash, state.score);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::PlaySound(SoundEffect::Die));
    }

    let live = state.phase == GamePhase::Playing;
    let awarded = resolve_passes(state, live);
    for _ in 0..awarded {
        state.score += 1;
        events.push(GameEvent::PlaySound(SoundEffect::Score));
    }

    let removed = despawn_offscreen(&mut state.obstacles);
    if removed > 0 {
        log::debug!("Despawned {} pipe pair(s)", removed);
    }
}
