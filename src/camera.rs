use glam::{Vec2, Vec3};

use crate::input::{PointerState, Viewport};
use crate::math::Ray;
use crate::types::CameraUniform;

/// Perspective camera looking at the scene origin.
///
/// The pointer nudges the camera sideways (parallax) and the scroll wheel
/// dollies along the view axis within the configured distance limits.
#[derive(Debug, Clone)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub parallax_scale: f32,
    parallax: Vec2,
}

impl Camera {
    pub fn new(fov_y_degrees: f32, aspect: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: max_distance,
            min_distance,
            max_distance,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near: 0.1,
            far: 100.0,
            parallax_scale: 0.3,
            parallax: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.parallax.x * self.parallax_scale,
            self.parallax.y * self.parallax_scale,
            self.distance,
        )
    }

    /// Per-frame pointer parallax: the camera slides with the pointer.
    pub fn apply_parallax(&mut self, pointer: PointerState) {
        self.parallax = pointer.normalized;
    }

    /// Dolly along the view axis, clamped to [min_distance, max_distance].
    pub fn zoom(&mut self, amount: f32) {
        self.distance = (self.distance - amount).clamp(self.min_distance, self.max_distance);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Unproject a normalized pointer position into a world-space ray
    /// through the near plane.
    pub fn unproject(&self, pointer: PointerState) -> Ray {
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect;
        let ndc = pointer.normalized;

        let dir = self.forward() + self.right() * ndc.x * half_w + self.up() * ndc.y * half_h;
        Ray::new(self.position(), dir)
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            position: self.position().to_array(),
            tan_half_fov: (self.fov_y * 0.5).tan(),
            forward: self.forward().to_array(),
            aspect: self.aspect,
            right: self.right().to_array(),
            _pad1: 0.0,
            up: self.up().to_array(),
            _pad2: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn test_camera() -> Camera {
        Camera::new(75.0, 800.0 / 600.0, 1.0, 15.0)
    }

    #[test]
    fn test_starts_at_max_distance() {
        let camera = test_camera();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 15.0));
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = test_camera();
        let ray = camera.unproject(PointerState::default());
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_right_edge_ray_leans_right() {
        let camera = test_camera();
        let ray = camera.unproject(PointerState {
            normalized: Vec2::new(1.0, 0.0),
        });
        assert!(ray.dir.x > 0.0);
        assert!(ray.dir.z < 0.0);
        assert!(ray.dir.y.abs() < 1e-5);
    }

    #[test]
    fn test_zoom_clamped_to_limits() {
        let mut camera = test_camera();
        camera.zoom(100.0);
        assert_eq!(camera.distance, 1.0);
        camera.zoom(-100.0);
        assert_eq!(camera.distance, 15.0);
    }

    #[test]
    fn test_parallax_shifts_position() {
        let mut camera = test_camera();
        camera.apply_parallax(PointerState {
            normalized: Vec2::new(1.0, -1.0),
        });
        let p = camera.position();
        assert!((p.x - 0.3).abs() < 1e-6);
        assert!((p.y + 0.3).abs() < 1e-6);
        assert_eq!(p.z, 15.0);
    }

    #[test]
    fn test_viewport_updates_aspect() {
        let mut camera = test_camera();
        camera.set_viewport(crate::input::Viewport::new(1000, 500));
        assert_eq!(camera.aspect, 2.0);
    }
}
