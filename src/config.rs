use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three scene flavors, expressed as configuration instead of separate
/// scripts: a purely decorative scene, the timed pop game, and the game
/// with a live tuning panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Static,
    Game,
    Tuner,
}

impl Variant {
    /// Picking, popping and the countdown run only in interactive variants.
    pub fn interactive(&self) -> bool {
        !matches!(self, Variant::Static)
    }

    pub fn debug_controls(&self) -> bool {
        matches!(self, Variant::Tuner)
    }
}

/// Everything the scene builder, camera and game need to differ between
/// variants. Loadable from JSON; CLI flags override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub variant: Variant,
    pub bubble_count: usize,
    pub bubble_radius: f32,
    /// Bubble rise speed in units per second
    pub rise_speed: f32,
    pub session_seconds: u32,
    pub year: u32,
    pub fov_degrees: f32,
    pub parallax_scale: f32,
    pub min_camera_distance: f32,
    pub max_camera_distance: f32,
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Game,
            bubble_count: 50,
            bubble_radius: 0.1,
            rise_speed: 0.06,
            session_seconds: 60,
            year: 2023,
            fov_degrees: 75.0,
            parallax_scale: 0.3,
            min_camera_distance: 1.0,
            max_camera_distance: 15.0,
            // #262837
            fog_color: [0.149, 0.157, 0.216],
            fog_near: 15.0,
            fog_far: 40.0,
        }
    }
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}
