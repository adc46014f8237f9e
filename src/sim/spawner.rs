//! Periodic obstacle and flower spawning
//!
//! Two independent timers feed the entity store. The spawner owns the only
//! RNG in the simulation, so a seed fully determines a run for a given input
//! sequence.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Flower, GamePhase, GameState, Obstacle, ObstacleKind};
use super::time::IntervalTimer;
use crate::consts::GROUND_LEVEL;
use crate::point_distance;
use crate::settings::Settings;

pub struct Spawner {
    rng: Pcg32,
    obstacle_timer: IntervalTimer,
    flower_timer: IntervalTimer,
}

impl Spawner {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            obstacle_timer: IntervalTimer::new(settings.obstacle_interval_ms),
            flower_timer: IntervalTimer::new(settings.flower_interval_ms),
        }
    }

    /// Advance both timers by `dt_ms` and spawn whatever came due.
    /// Timers are frozen while the game is over.
    pub fn advance(&mut self, state: &mut GameState, settings: &Settings, dt_ms: u32) {
        if state.phase == GamePhase::GameOver {
            return;
        }
        for _ in 0..self.obstacle_timer.advance(dt_ms) {
            self.spawn_obstacle(state, settings);
        }
        for _ in 0..self.flower_timer.advance(dt_ms) {
            self.spawn_flower(state, settings);
        }
    }

    /// Restart both timers from zero (the RNG stream carries on)
    pub fn reset(&mut self) {
        self.obstacle_timer.reset();
        self.flower_timer.reset();
    }

    /// Append a rock or tree at the spawn line
    pub fn spawn_obstacle(&mut self, state: &mut GameState, settings: &Settings) -> ObstacleKind {
        let kind = if self.rng.random_bool(0.5) {
            ObstacleKind::Rock
        } else {
            ObstacleKind::Tree
        };
        let id = state.next_entity_id();
        let obstacle = Obstacle::new(id, kind, settings.obstacle_spawn_x);
        if let Some(dropped) = state.entities.push_obstacle(obstacle) {
            log::debug!("Obstacle store full, dropped #{}", dropped.id);
        }
        log::debug!("Spawned {:?} #{} at x={}", kind, id, obstacle.rect.x);
        kind
    }

    /// Append a flower far enough from every obstacle.
    ///
    /// Tries up to `flower_max_attempts` random positions and skips this
    /// spawn if none is clear. Returns the flower's id when one was placed.
    pub fn spawn_flower(&mut self, state: &mut GameState, settings: &Settings) -> Option<u32> {
        for _ in 0..settings.flower_max_attempts {
            let x = settings.flower_spawn_x
                + self.rng.random_range(0..settings.flower_spawn_spread);
            let candidate = IVec2::new(x, GROUND_LEVEL);
            let clear = state.entities.obstacles().iter().all(|o| {
                point_distance(candidate, o.rect.origin()) >= settings.flower_min_distance
            });
            if !clear {
                continue;
            }

            let id = state.next_entity_id();
            if let Some(dropped) = state.entities.push_flower(Flower::new(id, x, GROUND_LEVEL)) {
                log::debug!("Flower store full, dropped #{}", dropped.id);
            }
            log::debug!("Spawned flower #{} at x={}", id, x);
            return Some(id);
        }

        log::debug!(
            "No clear flower position after {} attempts, skipping spawn",
            settings.flower_max_attempts
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn setup(settings: &Settings) -> (Spawner, GameState) {
        (Spawner::new(settings), GameState::new(settings))
    }

    #[test]
    fn test_spawns_on_interval() {
        let settings = Settings::default();
        let (mut spawner, mut state) = setup(&settings);

        for _ in 0..74 {
            spawner.advance(&mut state, &settings, settings.tick_ms);
        }
        assert!(state.entities.is_empty());

        spawner.advance(&mut state, &settings, settings.tick_ms);
        assert_eq!(state.entities.obstacles().len(), 1);
        assert_eq!(state.entities.obstacles()[0].rect.x, 800);
    }

    #[test]
    fn test_no_spawns_while_game_over() {
        let settings = Settings::default();
        let (mut spawner, mut state) = setup(&settings);
        state.phase = GamePhase::GameOver;
        spawner.advance(&mut state, &settings, 10_000);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_obstacle_capacity_holds() {
        let settings = Settings::default();
        let (mut spawner, mut state) = setup(&settings);
        for _ in 0..25 {
            spawner.spawn_obstacle(&mut state, &settings);
        }
        assert_eq!(state.entities.obstacles().len(), settings.max_obstacles);
        // Oldest went first: the survivors are the last ten spawned
        assert_eq!(state.entities.obstacles()[0].id, 16);
    }

    #[test]
    fn test_both_kinds_appear() {
        let settings = Settings::default();
        let (mut spawner, mut state) = setup(&settings);
        let kinds: Vec<ObstacleKind> = (0..64)
            .map(|_| spawner.spawn_obstacle(&mut state, &settings))
            .collect();
        assert!(kinds.contains(&ObstacleKind::Rock));
        assert!(kinds.contains(&ObstacleKind::Tree));
    }

    #[test]
    fn test_flowers_keep_their_distance() {
        let settings = Settings::default();
        let (mut spawner, mut state) = setup(&settings);
        for _ in 0..50 {
            spawner.spawn_obstacle(&mut state, &settings);
            if let Some(id) = spawner.spawn_flower(&mut state, &settings) {
                let flower = state
                    .entities
                    .flowers()
                    .iter()
                    .find(|f| f.id == id)
                    .unwrap();
                for obstacle in state.entities.obstacles() {
                    let d = point_distance(flower.rect.origin(), obstacle.rect.origin());
                    assert!(d >= settings.flower_min_distance);
                }
                assert!(flower.rect.x >= 900 && flower.rect.x < 1200);
            }
            assert!(state.entities.flowers().len() <= settings.max_flowers);
        }
    }

    #[test]
    fn test_flower_spawn_skipped_when_crowded() {
        // No candidate in [900, 1200) is 1000 units from an obstacle at 800
        let settings = Settings {
            flower_min_distance: 1000.0,
            ..Default::default()
        };
        let (mut spawner, mut state) = setup(&settings);
        spawner.spawn_obstacle(&mut state, &settings);
        assert_eq!(spawner.spawn_flower(&mut state, &settings), None);
        assert!(state.entities.flowers().is_empty());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let settings = Settings::default();
        let (mut a, mut state_a) = setup(&settings);
        let (mut b, mut state_b) = setup(&settings);
        for _ in 0..20 {
            assert_eq!(
                a.spawn_obstacle(&mut state_a, &settings),
                b.spawn_obstacle(&mut state_b, &settings)
            );
        }
        a.spawn_flower(&mut state_a, &settings);
        b.spawn_flower(&mut state_b, &settings);
        assert_eq!(state_a.entities.flowers(), state_b.entities.flowers());
        assert_eq!(state_a.entities.flowers()[0].rect.y, GROUND_LEVEL);
    }
}
