use glam::{Mat4, Vec2, Vec3, Vec4};

use super::picking::Ray;
use crate::state::settings::CameraSettings;

/// Orbiting perspective camera, mirroring the page's camera and orbit controls
#[derive(Debug, Clone)]
pub struct Camera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport width / height
    pub aspect: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        let mut camera = Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: settings.near,
            target: Vec3::ZERO,
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            aspect: 1.0,
        };
        camera.set_view(Vec3::from(settings.eye), Vec3::from(settings.target));
        camera
    }

    /// Place the camera at `eye` looking at `target`, as the page's orbit
    /// controls report it
    pub fn set_view(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.distance = offset.length().max(self.near);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
        self.yaw = offset.x.atan2(offset.z);
        self.target = target;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(self.near, self.far * 0.5);
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * sy,
                self.distance * sp,
                self.distance * cp * cy,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Cast a ray through normalized device coordinates (-1..1, y up)
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let vp_inv = self.view_projection().inverse();

        let near_world = vp_inv * Vec4::new(ndc.x, ndc.y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer position in pixels to normalized device coordinates
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye_position() {
        let cam = Camera::new();
        let eye = cam.eye_position();
        assert!((eye - Vec3::new(0.0, 5.0, 10.0)).length() < 1e-4);
        assert!((cam.fov - 60f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let cam = Camera::new();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye_position()).normalize();
        assert!(ray.direction.dot(expected) > 0.9999);
    }

    #[test]
    fn test_pointer_to_ndc() {
        assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(1.0, 1.0, 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_zoom_and_rotate_clamped() {
        let mut cam = Camera::new();
        cam.zoom(2.0);
        assert_eq!(cam.distance, cam.near);
        cam.rotate(0.0, 10_000.0);
        assert_eq!(cam.pitch, 1.5);
    }

    #[test]
    fn test_set_view_round_trips_eye() {
        let mut cam = Camera::new();
        let eye = Vec3::new(-4.0, 2.0, 3.0);
        let target = Vec3::new(1.0, 0.5, -1.0);
        cam.set_view(eye, target);

        assert!((cam.eye_position() - eye).length() < 1e-4);
        assert_eq!(cam.target, target);
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert!(ray.direction.dot((target - eye).normalize()) > 0.9999);
    }

    #[test]
    fn test_set_aspect_ignores_zero() {
        let mut cam = Camera::new();
        cam.set_aspect(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_aspect(0.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
