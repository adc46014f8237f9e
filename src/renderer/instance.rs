//! Per-frame render data

use bytemuck::{Pod, Zeroable};

use super::traits::AssetProvider;
use crate::consts::{GROUND_TOP, PLAYER_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::settings::Settings;
use crate::sim::{AssetKey, GamePhase, GameState, Palette, Rect, Season};

/// Player art is drawn larger than its collision box
pub const PLAYER_SPRITE_WIDTH: i32 = 70;
pub const PLAYER_SPRITE_HEIGHT: i32 = 53;
/// Flower art is drawn larger than its collision box
pub const FLOWER_SPRITE_SIZE: i32 = 30;

/// One textured quad in screen space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// `AssetKey` discriminant
    pub asset: u32,
}

impl SpriteInstance {
    pub fn new(key: AssetKey, rect: Rect) -> Self {
        Self {
            position: [rect.x as f32, rect.y as f32],
            size: [rect.w as f32, rect.h as f32],
            asset: key as u32,
        }
    }

    pub fn asset_key(&self) -> Option<AssetKey> {
        AssetKey::ALL.get(self.asset as usize).copied()
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameData {
    pub palette: Palette,
    /// Sky color, normalized for a render pass clear
    pub clear_color: [f32; 4],
    /// Band below the sky filled with `ground_color`
    pub ground_band: Rect,
    pub ground_color: [f32; 4],
    /// Draw order: player, obstacles, flowers
    pub instances: Vec<SpriteInstance>,
    pub score: u32,
    pub phase: GamePhase,
    pub season: Season,
}

impl FrameData {
    /// Build the frame for the current state.
    ///
    /// Entities whose image the provider cannot resolve are skipped.
    /// Procedural keys (summer rocks and trees) are always emitted.
    pub fn build<A: AssetProvider>(state: &GameState, settings: &Settings, assets: &A) -> Self {
        let entity_count = state.entities.obstacles().len() + state.entities.flowers().len();
        let mut instances = Vec::with_capacity(1 + entity_count);
        let mut push = |key: AssetKey, rect: Rect| {
            if key.is_procedural() || assets.contains(key) {
                instances.push(SpriteInstance::new(key, rect));
            } else {
                log::trace!("No image for {}, skipping", key.as_str());
            }
        };

        push(
            state.animation.frame.asset_key(),
            Rect::new(PLAYER_X, state.player.y, PLAYER_SPRITE_WIDTH, PLAYER_SPRITE_HEIGHT),
        );
        for obstacle in state.entities.obstacles() {
            let (key, rect) = state.season.obstacle_art(obstacle);
            push(key, rect);
        }
        let flower_key = state.season.flower_asset();
        for flower in state.entities.flowers() {
            let r = flower.rect;
            push(flower_key, Rect::new(r.x, r.y, FLOWER_SPRITE_SIZE, FLOWER_SPRITE_SIZE));
        }

        let palette = Palette::for_score(
            state.score,
            settings.palette_min_score,
            settings.palette_max_score,
        );
        Self {
            palette,
            clear_color: palette.sky.to_f32(),
            ground_band: Rect::new(0, GROUND_TOP, SCREEN_WIDTH, SCREEN_HEIGHT - GROUND_TOP),
            ground_color: palette.ground.to_f32(),
            instances,
            score: state.score,
            phase: state.phase,
            season: state.season,
        }
    }

    /// Raw instance bytes for a GPU vertex buffer upload
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_LEVEL;
    use crate::renderer::AssetManifest;
    use crate::sim::{Flower, Obstacle, ObstacleKind};

    fn populated_state(settings: &Settings) -> GameState {
        let mut state = GameState::new(settings);
        let id = state.next_entity_id();
        state.entities.push_obstacle(Obstacle::new(id, ObstacleKind::Rock, 400));
        let id = state.next_entity_id();
        state.entities.push_obstacle(Obstacle::new(id, ObstacleKind::Tree, 600));
        let id = state.next_entity_id();
        state.entities.push_flower(Flower::new(id, 500, GROUND_LEVEL));
        state
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 20);
        let instance = SpriteInstance::new(AssetKey::FallTree, Rect::new(1, 2, 3, 4));
        assert_eq!(instance.asset_key(), Some(AssetKey::FallTree));
        assert_eq!(instance.position, [1.0, 2.0]);
    }

    #[test]
    fn test_summer_frame() {
        let settings = Settings::default();
        let state = populated_state(&settings);
        let frame = FrameData::build(&state, &settings, &AssetManifest::default());

        let keys: Vec<AssetKey> = frame
            .instances
            .iter()
            .filter_map(|i| i.asset_key())
            .collect();
        assert_eq!(
            keys,
            vec![
                AssetKey::PlayerRun1,
                AssetKey::Rock,
                AssetKey::Tree,
                AssetKey::Flower
            ]
        );
        assert_eq!(frame.instance_bytes().len(), 4 * 20);
        assert_eq!(frame.palette, Palette::for_score(0, 50, 100));
        assert_eq!(frame.clear_color, [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(frame.ground_color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(frame.ground_band, Rect::new(0, 300, 800, 100));
    }

    #[test]
    fn test_fall_frame_uses_fall_art() {
        let settings = Settings::default();
        let mut state = populated_state(&settings);
        state.season = Season::Fall;
        state.score = 120;
        let frame = FrameData::build(&state, &settings, &AssetManifest::default());

        let keys: Vec<AssetKey> = frame
            .instances
            .iter()
            .filter_map(|i| i.asset_key())
            .collect();
        assert_eq!(
            keys,
            vec![
                AssetKey::PlayerRun1,
                AssetKey::FallRock,
                AssetKey::FallTree,
                AssetKey::FallFlower
            ]
        );
        assert_eq!(frame.season, Season::Fall);
        assert_eq!(frame.clear_color[0], 204.0 / 255.0);
    }

    #[test]
    fn test_missing_assets_are_skipped() {
        let settings = Settings::default();
        let state = populated_state(&settings);
        let empty = AssetManifest::empty();
        let frame = FrameData::build(&state, &settings, &empty);

        // Only the procedural summer obstacles survive
        let keys: Vec<AssetKey> = frame
            .instances
            .iter()
            .filter_map(|i| i.asset_key())
            .collect();
        assert_eq!(keys, vec![AssetKey::Rock, AssetKey::Tree]);
    }
}
