//! Asset manifest
//!
//! Maps each [`AssetKey`] to an image file, and optionally to a region of a
//! sprite sheet. Loaded from JSON; decoding the images is the host's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::traits::AssetProvider;
use crate::sim::AssetKey;

/// Where to find one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteEntry {
    /// Path relative to the manifest root
    pub path: String,
    /// Sub-image `[x, y, width, height]` within a sprite sheet
    #[serde(default)]
    pub region: Option<[u32; 4]>,
}

impl SpriteEntry {
    fn file(path: &str) -> Self {
        Self {
            path: path.to_string(),
            region: None,
        }
    }

    fn sheet(path: &str, region: [u32; 4]) -> Self {
        Self {
            path: path.to_string(),
            region: Some(region),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Directory the sprite paths are relative to
    #[serde(default)]
    pub root: String,
    #[serde(default)]
    pub sprites: HashMap<AssetKey, SpriteEntry>,
}

impl Default for AssetManifest {
    /// The stock art set: a hedgehog sprite sheet plus seasonal flower,
    /// rock and tree images
    fn default() -> Self {
        const SHEET: &str = "hedgehog.png";
        let sprites = HashMap::from([
            (AssetKey::PlayerJump, SpriteEntry::sheet(SHEET, [24, 121, 100, 65])),
            (AssetKey::PlayerRun1, SpriteEntry::sheet(SHEET, [149, 121, 100, 65])),
            (AssetKey::PlayerRun2, SpriteEntry::sheet(SHEET, [275, 121, 100, 65])),
            (AssetKey::PlayerDead, SpriteEntry::sheet(SHEET, [24, 217, 100, 65])),
            (AssetKey::Flower, SpriteEntry::file("flower.png")),
            (AssetKey::FallFlower, SpriteEntry::file("fall_flower.png")),
            (AssetKey::FallRock, SpriteEntry::file("fall_rock.png")),
            (AssetKey::FallTree, SpriteEntry::file("fall_tree.png")),
        ]);
        Self {
            root: "pics".to_string(),
            sprites,
        }
    }
}

impl AssetManifest {
    /// A manifest with no images at all
    pub fn empty() -> Self {
        Self {
            root: String::new(),
            sprites: HashMap::new(),
        }
    }

    /// Parse a manifest from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Keys the renderer will need an image for but this manifest lacks
    pub fn missing(&self) -> Vec<AssetKey> {
        AssetKey::ALL
            .into_iter()
            .filter(|key| !key.is_procedural() && !self.sprites.contains_key(key))
            .collect()
    }
}

impl AssetProvider for AssetManifest {
    type Image = SpriteEntry;

    fn image(&self, key: AssetKey) -> Option<&SpriteEntry> {
        self.sprites.get(&key)
    }
}
