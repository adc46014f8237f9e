//! Player sprite frame selection
//!
//! The simulation only tracks which symbolic frame to show; slicing the
//! sprite sheet is the asset provider's job.

use serde::{Deserialize, Serialize};

use super::season::AssetKey;
use super::state::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerFrame {
    Jump,
    Run1,
    Run2,
    Dead,
}

impl PlayerFrame {
    pub fn asset_key(self) -> AssetKey {
        match self {
            PlayerFrame::Jump => AssetKey::PlayerJump,
            PlayerFrame::Run1 => AssetKey::PlayerRun1,
            PlayerFrame::Run2 => AssetKey::PlayerRun2,
            PlayerFrame::Dead => AssetKey::PlayerDead,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAnimation {
    pub frame: PlayerFrame,
    /// Run frame shown while grounded
    run_frame: PlayerFrame,
    /// Grounded ticks since the last run frame swap
    counter: u32,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            frame: PlayerFrame::Run1,
            run_frame: PlayerFrame::Run1,
            counter: 0,
        }
    }
}

impl PlayerAnimation {
    /// Pick the frame for this tick
    pub fn update(&mut self, phase: GamePhase, grounded: bool, run_ticks: u32) {
        if phase == GamePhase::GameOver {
            self.frame = PlayerFrame::Dead;
            return;
        }
        if !grounded {
            self.frame = PlayerFrame::Jump;
            return;
        }

        self.counter += 1;
        if self.counter >= run_ticks {
            self.run_frame = match self.run_frame {
                PlayerFrame::Run1 => PlayerFrame::Run2,
                _ => PlayerFrame::Run1,
            };
            self.counter = 0;
        }
        self.frame = self.run_frame;
    }
}
