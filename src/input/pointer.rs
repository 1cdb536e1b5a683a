use glam::Vec2;

/// Window surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        // Minimized windows report 0x0; clamp so normalization stays finite.
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Latest pointer position in normalized device coordinates.
///
/// x grows rightward, y grows upward, both clamped to [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub normalized: Vec2,
}

/// Tracks the single shared pointer position.
///
/// Every raw move event overwrites the state; readers (the per-frame pick)
/// always see the most recent value.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    state: PointerState,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Mouse move: map raw pixel coordinates into clamped NDC.
    pub fn on_pointer_move(&mut self, raw_x: f32, raw_y: f32, viewport: Viewport) {
        let nx = (raw_x / viewport.width as f32 * 2.0 - 1.0).clamp(-1.0, 1.0);
        let ny = (-raw_y / viewport.height as f32 * 2.0 + 1.0).clamp(-1.0, 1.0);
        self.state.normalized = Vec2::new(nx, ny);
    }

    /// Touch move: first active touch point drives the pointer, no touch
    /// point leaves the state unchanged.
    pub fn on_touch_move(&mut self, touch: Option<(f32, f32)>, viewport: Viewport) {
        if let Some((x, y)) = touch {
            self.on_pointer_move(x, y, viewport);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    #[test]
    fn test_center_maps_to_origin() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(400.0, 300.0, VIEWPORT);
        assert_eq!(tracker.state().normalized, Vec2::ZERO);
    }

    #[test]
    fn test_corners() {
        let mut tracker = PointerTracker::new();

        tracker.on_pointer_move(0.0, 0.0, VIEWPORT);
        assert_eq!(tracker.state().normalized, Vec2::new(-1.0, 1.0));

        tracker.on_pointer_move(800.0, 600.0, VIEWPORT);
        assert_eq!(tracker.state().normalized, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_out_of_bounds_clamped() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(-50.0, 1200.0, VIEWPORT);
        assert_eq!(tracker.state().normalized, Vec2::new(-1.0, -1.0));

        tracker.on_pointer_move(9000.0, -9000.0, VIEWPORT);
        assert_eq!(tracker.state().normalized, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_touch_without_point_is_noop() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(200.0, 150.0, VIEWPORT);
        let before = tracker.state();

        tracker.on_touch_move(None, VIEWPORT);
        assert_eq!(tracker.state(), before);
    }

    #[test]
    fn test_touch_point_overwrites() {
        let mut tracker = PointerTracker::new();
        tracker.on_touch_move(Some((400.0, 300.0)), VIEWPORT);
        assert_eq!(tracker.state().normalized, Vec2::ZERO);
    }

    #[test]
    fn test_zero_viewport_stays_finite() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(10.0, 10.0, Viewport::new(0, 0));
        let n = tracker.state().normalized;
        assert!(n.x.is_finite() && n.y.is_finite());
    }
}
