//! Game driver
//!
//! Owns the state, the spawner and the fixed timestep. The host feeds it
//! elapsed wall-clock time and input events, and asks it for frames.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::input::{InputEvent, InputQueue};
use crate::renderer::{AssetProvider, FrameData};
use crate::settings::Settings;
use crate::sim::{
    FixedTimestep, GameEvent, GamePhase, GameState, Season, Spawner, TickInput, tick,
};

/// Outcome of a run, for logs and the demo binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u32,
    pub season: Season,
    pub phase: GamePhase,
    pub ticks: u64,
    pub runs: u32,
}

pub struct Game {
    settings: Settings,
    state: GameState,
    spawner: Spawner,
    timestep: FixedTimestep,
    input: InputQueue,
    autopilot: bool,
    /// Runs started, including the first
    runs: u32,
}

impl Game {
    /// Validate the settings and start the first run
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::info!(
            "New game: seed={:#x}, tick={}ms, spawn every {}/{}ms",
            settings.seed,
            settings.tick_ms,
            settings.obstacle_interval_ms,
            settings.flower_interval_ms
        );
        Ok(Self {
            state: GameState::new(&settings),
            spawner: Spawner::new(&settings),
            timestep: FixedTimestep::new(settings.tick_ms, settings.max_substeps),
            input: InputQueue::new(),
            autopilot: false,
            runs: 1,
            settings,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Queue an input event for the next tick
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance by wall-clock time. Returns the events of every tick run.
    pub fn advance(&mut self, elapsed_ms: u32) -> Vec<GameEvent> {
        let steps = self.timestep.accumulate(elapsed_ms);
        let mut events = Vec::new();
        for _ in 0..steps {
            events.extend(self.step());
        }
        events
    }

    /// Run exactly one tick, then let due spawner triggers fire
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut input = TickInput {
            autopilot: self.autopilot,
            ..Default::default()
        };
        for event in self.input.drain() {
            match event {
                InputEvent::Jump => input.jump = true,
                InputEvent::Restart => input.restart = true,
            }
        }

        let events = tick(&mut self.state, &input, &self.settings);
        if events.contains(&GameEvent::Restarted) {
            self.spawner.reset();
            self.runs += 1;
        }

        self.spawner
            .advance(&mut self.state, &self.settings, self.timestep.step_ms());
        events
    }

    /// Render data for the current state
    pub fn frame<A: AssetProvider>(&self, assets: &A) -> FrameData {
        FrameData::build(&self.state, &self.settings, assets)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.state.score,
            season: self.state.season,
            phase: self.state.phase,
            ticks: self.state.time_ticks,
            runs: self.runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MAX_COORDINATE;
    use crate::sim::{Obstacle, ObstacleKind};

    fn game() -> Game {
        Game::new(Settings::default()).unwrap()
    }

    /// Park a rock on the player so the next tick ends the run
    fn force_game_over(game: &mut Game) {
        let id = game.state.next_entity_id();
        game.state
            .entities
            .push_obstacle(Obstacle::new(id, ObstacleKind::Rock, 70));
        game.step();
        assert_eq!(game.state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_rejects_bad_settings() {
        let settings = Settings {
            max_obstacles: 0,
            ..Default::default()
        };
        assert!(Game::new(settings).is_err());

        let settings = Settings {
            tick_ms: 1_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            Game::new(settings),
            Err(SettingsError::TimestepOverflow { .. })
        ));
    }

    #[test]
    fn test_extreme_accepted_settings_run() {
        let settings = Settings {
            obstacle_interval_ms: 20,
            flower_interval_ms: 20,
            obstacle_spawn_x: MAX_COORDINATE,
            flower_spawn_x: MAX_COORDINATE,
            flower_spawn_spread: MAX_COORDINATE,
            scroll_speed: MAX_COORDINATE,
            jump_impulse: i32::MIN,
            gravity: i32::MAX,
            ..Default::default()
        };
        let mut game = Game::new(settings).unwrap();
        game.set_autopilot(true);
        for _ in 0..500 {
            game.step();
            assert!(game.state().player.y <= crate::consts::GROUND_LEVEL);
        }
        game.advance(u32::MAX);
        assert!(game.state().entities.obstacles().len() <= 10);
        assert!(game.state().entities.flowers().len() <= 5);
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let mut game = game();
        game.advance(10);
        assert_eq!(game.state().time_ticks, 0);
        game.advance(50);
        assert_eq!(game.state().time_ticks, 3);
    }

    #[test]
    fn test_first_spawns_after_interval() {
        let mut game = game();
        for _ in 0..74 {
            game.step();
        }
        assert!(game.state().entities.is_empty());
        game.step();
        assert_eq!(game.state().entities.obstacles().len(), 1);
    }

    #[test]
    fn test_jump_input_is_one_shot() {
        let mut game = game();
        game.push_input(InputEvent::Jump);
        let events = game.step();
        assert_eq!(events, vec![GameEvent::Jumped]);
        assert_eq!(game.state().player.vel_y, -15);
        assert!(game.step().is_empty());
    }

    #[test]
    fn test_spawners_pause_during_game_over() {
        let mut game = game();
        force_game_over(&mut game);
        let count = game.state().entities.len();
        for _ in 0..500 {
            game.step();
        }
        assert_eq!(game.state().entities.len(), count);
    }

    #[test]
    fn test_restart_resets_run_and_spawn_timers() {
        let mut game = game();
        for _ in 0..40 {
            game.step();
        }
        force_game_over(&mut game);

        game.push_input(InputEvent::Restart);
        let events = game.step();
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert!(game.state().entities.is_empty());
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().season, Season::Summer);
        assert_eq!(game.summary().runs, 2);

        // Timers restarted with the run: the restart tick counted as the first 20 ms
        for _ in 0..73 {
            game.step();
        }
        assert!(game.state().entities.is_empty());
        game.step();
        assert_eq!(game.state().entities.obstacles().len(), 1);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut game = game();
        game.set_autopilot(true);
        for _ in 0..5_000 {
            game.step();
            let entities = &game.state().entities;
            assert!(entities.obstacles().len() <= 10);
            assert!(entities.flowers().len() <= 5);
            if game.state().phase == GamePhase::GameOver {
                game.push_input(InputEvent::Restart);
            }
        }
    }

    #[test]
    fn test_autopilot_survives() {
        let mut game = game();
        game.set_autopilot(true);
        for _ in 0..3_000 {
            game.step();
        }
        let summary = game.summary();
        assert_eq!(summary.phase, GamePhase::Playing);
        assert_eq!(summary.runs, 1);
        assert_eq!(summary.ticks, 3_000);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = game();
        let mut b = game();
        a.set_autopilot(true);
        b.set_autopilot(true);
        for _ in 0..2_000 {
            a.step();
            b.step();
        }
        assert_eq!(a.summary(), b.summary());
        assert_eq!(a.state().entities.flowers(), b.state().entities.flowers());
    }

    #[test]
    fn test_frame_reflects_state() {
        let mut game = game();
        for _ in 0..80 {
            game.step();
        }
        let frame = game.frame(&crate::renderer::AssetManifest::default());
        assert_eq!(frame.phase, GamePhase::Playing);
        // Player plus the first obstacle, and a flower if one found room
        assert!(frame.instances.len() >= 2);
    }
}
