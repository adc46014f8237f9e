//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::sweep;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::settings::Settings;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (ignored unless grounded and playing)
    pub jump: bool,
    /// Start a new run (ignored unless game over)
    pub restart: bool,
    /// Demo mode - jump automatically over incoming obstacles
    pub autopilot: bool,
}

/// Advance the game state by one tick.
///
/// Order: restart handling, jump, physics, scroll and eviction, collisions,
/// scoring, season, animation. Nothing past restart handling runs while the
/// game is over.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
            log::info!("Restarted");
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    state.time_ticks += 1;

    let wants_jump = input.jump
        || (input.autopilot && autopilot_wants_jump(state, settings.autopilot_lookahead));
    if wants_jump && state.player.request_jump() {
        events.push(GameEvent::Jumped);
    }

    state.player.integrate(settings.gravity, settings.jump_impulse);
    state.entities.scroll(settings.scroll_speed);

    let result = sweep(&state.player.bounds(), &mut state.entities);

    if let Some(kind) = result.lethal {
        state.phase = GamePhase::GameOver;
        state
            .animation
            .update(state.phase, state.player.is_grounded(), settings.run_animation_ticks);
        log::info!(
            "Game over: hit {:?} after {} ticks, score {}",
            kind,
            state.time_ticks,
            state.score
        );
        events.push(GameEvent::GameOver {
            score: state.score,
            hit: kind,
        });
        return events;
    }

    if result.collected > 0 {
        state.score += result.collected * settings.flower_score;
        events.push(GameEvent::FlowersCollected {
            count: result.collected,
            score: state.score,
        });
    }

    if state.season.advance(state.score, settings.season_threshold) {
        log::info!("Season changed to {:?} at score {}", state.season, state.score);
        events.push(GameEvent::SeasonChanged(state.season));
    }

    state
        .animation
        .update(state.phase, state.player.is_grounded(), settings.run_animation_ticks);

    events
}

/// True when the nearest obstacle still ahead of the player is within
/// `lookahead` units of the player's front edge
fn autopilot_wants_jump(state: &GameState, lookahead: i32) -> bool {
    if !state.player.is_grounded() {
        return false;
    }
    let front = PLAYER_X + PLAYER_SIZE;
    state
        .entities
        .obstacles()
        .iter()
        .filter(|o| o.rect.right() > PLAYER_X)
        .map(|o| o.rect.x - front)
        .min()
        .is_some_and(|gap| gap <= lookahead)
}
