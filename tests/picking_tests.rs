use glam::{Vec2, Vec3};

use bubble_pop::input::PointerState;
use bubble_pop::picking::{LinearPicker, Picker};
use bubble_pop::scene::BubblePool;
use bubble_pop::Camera;

// Camera sits at (0, 0, 15) looking down -z, matching the scene defaults
fn camera() -> Camera {
    Camera::new(75.0, 1.0, 1.0, 15.0)
}

fn pointer(x: f32, y: f32) -> PointerState {
    PointerState {
        normalized: Vec2::new(x, y),
    }
}

#[test]
fn test_center_pointer_hits_bubble_on_axis() {
    let pool = BubblePool::from_positions(vec![Vec3::ZERO], 0.2);
    let picker = LinearPicker;

    let result = picker.pick(pointer(0.0, 0.0), &camera(), &pool);

    let hit = result.hit.expect("bubble on the view axis should be hit");
    assert_eq!(hit.id, 0);
    assert!((hit.distance - 14.8).abs() < 0.01, "distance {}", hit.distance);
}

#[test]
fn test_pointer_far_off_axis_misses() {
    let pool = BubblePool::from_positions(vec![Vec3::ZERO], 0.2);
    let picker = LinearPicker;

    let result = picker.pick(pointer(1.0, 1.0), &camera(), &pool);
    assert!(result.hit.is_none());
}

#[test]
fn test_nearest_of_overlapping_candidates_wins() {
    // Both bubbles sit on the view axis; the one at z=5 is closer to the
    // camera at z=15 than the one at the origin.
    let pool = BubblePool::from_positions(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)], 0.2);
    let picker = LinearPicker;

    let result = picker.pick(pointer(0.0, 0.0), &camera(), &pool);
    assert_eq!(result.hit.expect("should hit").id, 1);
}

#[test]
fn test_invisible_bubbles_never_picked() {
    let mut pool = BubblePool::from_positions(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)], 0.2);
    let picker = LinearPicker;

    // Pop the near one; the pick must fall through to the far one
    assert!(pool.pop(1));
    let result = picker.pick(pointer(0.0, 0.0), &camera(), &pool);
    assert_eq!(result.hit.expect("should hit").id, 0);

    // Pop both and nothing is pickable
    assert!(pool.pop(0));
    let result = picker.pick(pointer(0.0, 0.0), &camera(), &pool);
    assert!(result.hit.is_none());
}

#[test]
fn test_pick_is_idempotent_within_a_frame() {
    let pool = BubblePool::from_positions(
        vec![
            Vec3::new(0.1, 0.0, 0.0),
            Vec3::new(-0.3, 0.2, 1.0),
            Vec3::new(0.0, -0.1, 2.0),
        ],
        0.3,
    );
    let picker = LinearPicker;
    let p = pointer(0.02, -0.01);

    let first = picker.pick(p, &camera(), &pool);
    let second = picker.pick(p, &camera(), &pool);
    assert_eq!(first, second);
}

#[test]
fn test_empty_pool_yields_empty_result() {
    let pool = BubblePool::from_positions(vec![], 0.1);
    let picker = LinearPicker;

    let result = picker.pick(pointer(0.0, 0.0), &camera(), &pool);
    assert!(result.hit.is_none());
}
