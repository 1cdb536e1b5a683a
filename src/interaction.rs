use crate::camera::Camera;
use crate::input::{PointerTracker, Viewport};
use crate::picking::{HoverEvent, HoverTracker, LinearPicker, PickResult, Picker};
use crate::scene::BubblePool;

/// Per-frame interaction loop state: pointer, picker and hover tracking.
///
/// The pick is recomputed once per frame; trigger events arriving between
/// frames are applied against the most recently completed frame's pick
/// (staleness of at most one frame interval).
pub struct Interaction {
    pub pointer: PointerTracker,
    picker: Box<dyn Picker>,
    hover: HoverTracker,
    last_pick: PickResult,
}

impl Interaction {
    pub fn new() -> Self {
        Self::with_picker(Box::new(LinearPicker))
    }

    pub fn with_picker(picker: Box<dyn Picker>) -> Self {
        Self {
            pointer: PointerTracker::new(),
            picker,
            hover: HoverTracker::new(),
            last_pick: PickResult::default(),
        }
    }

    /// Recompute the current hit and hover transitions. Called once per
    /// rendered frame.
    pub fn frame_pick(&mut self, camera: &Camera, bubbles: &BubblePool) -> Vec<HoverEvent> {
        self.last_pick = self.picker.pick(self.pointer.state(), camera, bubbles);
        self.hover.update(&self.last_pick)
    }

    /// Pick from the most recently completed frame, consumed by triggers.
    pub fn last_pick(&self) -> PickResult {
        self.last_pick
    }

    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32, viewport: Viewport) {
        self.pointer.on_pointer_move(x, y, viewport);
    }

    pub fn on_touch_move(&mut self, touch: Option<(f32, f32)>, viewport: Viewport) {
        self.pointer.on_touch_move(touch, viewport);
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}
