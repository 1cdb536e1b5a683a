use crate::camera::Camera;
use crate::input::PointerState;
use crate::math::intersect_sphere;
use crate::scene::BubblePool;

/// A confirmed ray hit: which bubble and how far along the ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: u32,
    pub distance: f32,
}

/// Result of one per-frame pick. Recomputed every frame, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PickResult {
    pub hit: Option<Hit>,
}

impl PickResult {
    pub fn hit_id(&self) -> Option<u32> {
        self.hit.map(|h| h.id)
    }
}

/// Picking contract: cast a ray through the pointer and find the nearest
/// visible bubble. Behind a trait so a spatial index can replace the linear
/// scan without touching callers.
pub trait Picker {
    fn pick(&self, pointer: PointerState, camera: &Camera, bubbles: &BubblePool) -> PickResult;
}

/// Brute-force picker: O(visible bubbles) per call. Plenty for pools of a
/// few hundred.
#[derive(Debug, Default)]
pub struct LinearPicker;

impl Picker for LinearPicker {
    fn pick(&self, pointer: PointerState, camera: &Camera, bubbles: &BubblePool) -> PickResult {
        let ray = camera.unproject(pointer);

        let mut nearest: Option<Hit> = None;
        for bubble in bubbles.visible() {
            if let Some(distance) = intersect_sphere(&ray, bubble.position, bubble.radius) {
                let closer = nearest.map_or(true, |h| distance < h.distance);
                if closer {
                    nearest = Some(Hit {
                        id: bubble.id,
                        distance,
                    });
                }
            }
        }

        PickResult { hit: nearest }
    }
}

/// Hover transition, used for cursor affordance only (never scoring)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(u32),
    Leave(u32),
}

/// Compares this frame's hit identity against the previous frame's.
///
/// empty -> hit(A) yields Enter(A); hit(A) -> empty yields Leave(A);
/// hit(A) -> hit(B) yields Leave(A) then Enter(B), never a silent swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverTracker {
    current: Option<u32>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovering(&self) -> bool {
        self.current.is_some()
    }

    pub fn update(&mut self, pick: &PickResult) -> Vec<HoverEvent> {
        let next = pick.hit_id();
        let mut events = Vec::new();

        if next != self.current {
            if let Some(prev) = self.current {
                events.push(HoverEvent::Leave(prev));
            }
            if let Some(id) = next {
                events.push(HoverEvent::Enter(id));
            }
            self.current = next;
        }

        events
    }
}
