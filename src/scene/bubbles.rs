use glam::Vec3;
use rand::Rng;

/// Axis-aligned volume bubbles spawn into
#[derive(Debug, Clone, Copy)]
pub struct SpawnVolume {
    pub min: Vec3,
    pub max: Vec3,
}

impl SpawnVolume {
    /// Volume used by the champagne scene: a column inside the glass bowl.
    pub fn glass() -> Self {
        Self {
            min: Vec3::new(-0.75, -1.5, -0.75),
            max: Vec3::new(0.75, 0.0, 0.75),
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
            rng.gen_range(self.min.z..=self.max.z),
        )
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// One pickable bubble. Visibility is the only field the game mutates;
/// an invisible bubble is "popped" and excluded from picking.
#[derive(Debug, Clone, Copy)]
pub struct Bubble {
    pub id: u32,
    pub position: Vec3,
    pub radius: f32,
    pub visible: bool,
}

/// Fixed-size pool of bubbles.
///
/// Popping hides a bubble; the game immediately respawns it at a fresh
/// random position, so the number of live targets stays constant.
#[derive(Debug, Clone)]
pub struct BubblePool {
    bubbles: Vec<Bubble>,
    spawn: SpawnVolume,
    rise_speed: f32,
    wrap_top: f32,
    wrap_bottom: f32,
}

impl BubblePool {
    pub fn new(count: usize, radius: f32, spawn: SpawnVolume, rng: &mut impl Rng) -> Self {
        let bubbles = (0..count)
            .map(|i| Bubble {
                id: i as u32,
                position: spawn.sample(rng),
                radius,
                visible: true,
            })
            .collect();

        Self {
            bubbles,
            spawn,
            rise_speed: 0.06,
            wrap_top: 1.5,
            wrap_bottom: -1.5,
        }
    }

    /// Pool with fixed positions, for scripted scenes and tests
    pub fn from_positions(positions: Vec<Vec3>, radius: f32) -> Self {
        let bubbles = positions
            .into_iter()
            .enumerate()
            .map(|(i, position)| Bubble {
                id: i as u32,
                position,
                radius,
                visible: true,
            })
            .collect();

        Self {
            bubbles,
            spawn: SpawnVolume::glass(),
            rise_speed: 0.06,
            wrap_top: 1.5,
            wrap_bottom: -1.5,
        }
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter().filter(|b| b.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    pub fn get(&self, id: u32) -> Option<&Bubble> {
        self.bubbles.get(id as usize)
    }

    pub fn set_rise_speed(&mut self, units_per_second: f32) {
        self.rise_speed = units_per_second;
    }

    pub fn rise_speed(&self) -> f32 {
        self.rise_speed
    }

    /// Hide a bubble. Returns false when it was already popped, so a stale
    /// pick from the previous frame cannot score twice.
    pub fn pop(&mut self, id: u32) -> bool {
        match self.bubbles.get_mut(id as usize) {
            Some(b) if b.visible => {
                b.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Bring a popped bubble back at a fresh random spawn position.
    pub fn respawn(&mut self, id: u32, rng: &mut impl Rng) {
        let position = self.spawn.sample(rng);
        if let Some(b) = self.bubbles.get_mut(id as usize) {
            b.position = position;
            b.visible = true;
        }
    }

    /// Per-frame drift: bubbles rise and wrap back below the glass.
    pub fn drift(&mut self, delta: f32) {
        for b in &mut self.bubbles {
            b.position.y += self.rise_speed * delta;
            if b.position.y > self.wrap_top {
                b.position.y = self.wrap_bottom;
            }
        }
    }

    /// New session: everything visible, fresh positions.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        for i in 0..self.bubbles.len() {
            self.respawn(i as u32, rng);
        }
    }
}
