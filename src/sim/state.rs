//! Game state and core simulation types
//!
//! Everything the renderer reads between ticks lives here.

use serde::{Deserialize, Serialize};

use super::animation::PlayerAnimation;
use super::collision::Rect;
use super::season::Season;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart input
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    FlowersCollected { count: u32, score: u32 },
    SeasonChanged(Season),
    GameOver { score: u32, hit: ObstacleKind },
    Restarted,
}

/// The player character. Horizontal position is fixed at [`PLAYER_X`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Top edge of the player box (grows downward)
    pub y: i32,
    pub vel_y: i32,
    /// Jump accepted while grounded, applied on the next integration
    pub jump_requested: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: GROUND_LEVEL,
            vel_y: 0,
            jump_requested: false,
        }
    }
}

impl Player {
    pub fn is_grounded(&self) -> bool {
        self.y == GROUND_LEVEL
    }

    /// Request a jump. Ignored (returns false) while airborne.
    pub fn request_jump(&mut self) -> bool {
        if self.is_grounded() {
            self.jump_requested = true;
        }
        self.jump_requested
    }

    /// Apply one tick of jump impulse or gravity, then land on the ground
    pub fn integrate(&mut self, gravity: i32, jump_impulse: i32) {
        if self.jump_requested && self.is_grounded() {
            self.vel_y = jump_impulse;
        } else {
            self.vel_y = self.vel_y.saturating_add(gravity);
        }
        self.jump_requested = false;

        self.y = self.y.saturating_add(self.vel_y);
        if self.y >= GROUND_LEVEL {
            self.y = GROUND_LEVEL;
            self.vel_y = 0;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(PLAYER_X, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Tree,
}

impl ObstacleKind {
    /// Collision box for this kind spawned at `x`
    pub fn spawn_rect(self, x: i32) -> Rect {
        match self {
            ObstacleKind::Rock => Rect::new(
                x,
                GROUND_LEVEL + ROCK_Y_OFFSET,
                ROCK_WIDTH,
                ROCK_HEIGHT,
            ),
            ObstacleKind::Tree => Rect::new(
                x,
                GROUND_LEVEL + TREE_Y_OFFSET,
                TREE_WIDTH,
                TREE_HEIGHT,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, x: i32) -> Self {
        Self {
            id,
            kind,
            rect: kind.spawn_rect(x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flower {
    pub id: u32,
    pub rect: Rect,
}

impl Flower {
    pub fn new(id: u32, x: i32, y: i32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, FLOWER_SIZE, FLOWER_SIZE),
        }
    }
}

/// Bounded obstacle and flower lists, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore {
    obstacles: Vec<Obstacle>,
    flowers: Vec<Flower>,
    max_obstacles: usize,
    max_flowers: usize,
}

impl EntityStore {
    pub fn new(max_obstacles: usize, max_flowers: usize) -> Self {
        Self {
            obstacles: Vec::with_capacity(max_obstacles + 1),
            flowers: Vec::with_capacity(max_flowers + 1),
            max_obstacles,
            max_flowers,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    /// Append an obstacle, returning the oldest one if capacity overflowed
    pub fn push_obstacle(&mut self, obstacle: Obstacle) -> Option<Obstacle> {
        self.obstacles.push(obstacle);
        if self.obstacles.len() > self.max_obstacles {
            Some(self.obstacles.remove(0))
        } else {
            None
        }
    }

    /// Append a flower, returning the oldest one if capacity overflowed
    pub fn push_flower(&mut self, flower: Flower) -> Option<Flower> {
        self.flowers.push(flower);
        if self.flowers.len() > self.max_flowers {
            Some(self.flowers.remove(0))
        } else {
            None
        }
    }

    /// Move everything left and drop entities whose right edge reached the
    /// left boundary. Returns how many were evicted.
    pub fn scroll(&mut self, speed: i32) -> usize {
        let before = self.len();
        for obstacle in &mut self.obstacles {
            obstacle.rect.x -= speed;
        }
        for flower in &mut self.flowers {
            flower.rect.x -= speed;
        }
        self.obstacles.retain(|o| o.rect.right() > LEFT_BOUNDARY);
        self.flowers.retain(|f| f.rect.right() > LEFT_BOUNDARY);
        before - self.len()
    }

    /// Keep only the flowers matching the predicate
    pub fn retain_flowers(&mut self, keep: impl FnMut(&Flower) -> bool) {
        self.flowers.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.obstacles.len() + self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty() && self.flowers.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.flowers.clear();
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    pub phase: GamePhase,
    pub season: Season,
    pub player: Player,
    pub entities: EntityStore,
    pub animation: PlayerAnimation,
    /// Ticks simulated since the run started
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            score: 0,
            phase: GamePhase::Playing,
            season: Season::Summer,
            player: Player::default(),
            entities: EntityStore::new(settings.max_obstacles, settings.max_flowers),
            animation: PlayerAnimation::default(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put the run back to its initial state (entity IDs keep counting)
    pub fn restart(&mut self) {
        self.entities.clear();
        self.score = 0;
        self.season = Season::Summer;
        self.player = Player::default();
        self.animation = PlayerAnimation::default();
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }
}
