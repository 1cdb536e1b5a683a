mod bubbles;
mod glassware;

pub use bubbles::{Bubble, BubblePool, SpawnVolume};
pub use glassware::{glass_cylinders, table, year_text};

use rand::Rng;

use crate::config::SceneConfig;
use crate::types::{BoxData, CylinderData};

/// Linear fog fading distant geometry into the #262837 haze
#[derive(Debug, Clone, Copy)]
pub struct Fog {
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

/// The assembled scene: static glassware and table, festive text, and the
/// live bubble pool. One builder covers every variant; the differences
/// (interaction, tuning panel, camera limits) live in `SceneConfig`.
#[derive(Debug, Clone)]
pub struct Scene {
    pub bubbles: BubblePool,
    pub boxes: Vec<BoxData>,
    pub cylinders: Vec<CylinderData>,
    pub fog: Fog,
}

impl Scene {
    pub fn build(config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let mut bubbles = BubblePool::new(
            config.bubble_count,
            config.bubble_radius,
            SpawnVolume::glass(),
            rng,
        );
        bubbles.set_rise_speed(config.rise_speed);

        let mut boxes = vec![table()];
        boxes.extend(year_text(config.year));

        Self {
            bubbles,
            boxes,
            cylinders: glass_cylinders(),
            fog: Fog {
                color: config.fog_color,
                near: config.fog_near,
                far: config.fog_far,
            },
        }
    }

    /// Per-frame scene mutation: bubble drift
    pub fn animate(&mut self, delta: f32) {
        self.bubbles.drift(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_default_scene() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Scene::build(&SceneConfig::default(), &mut rng);

        assert_eq!(scene.bubbles.len(), 50);
        assert_eq!(scene.cylinders.len(), 3);
        // Table plus at least one segment per digit
        assert!(scene.boxes.len() > 4);
        assert_eq!(scene.fog.near, 15.0);
        assert_eq!(scene.fog.far, 40.0);
    }

    #[test]
    fn test_animate_moves_bubbles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut scene = Scene::build(&SceneConfig::default(), &mut rng);
        let before = scene.bubbles.get(0).unwrap().position;
        scene.animate(0.5);
        assert!(scene.bubbles.get(0).unwrap().position.y > before.y);
    }
}
