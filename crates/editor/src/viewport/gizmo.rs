use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::picking::Ray;

/// Which axis a gizmo handle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GizmoAxis {
    X,
    Y,
    Z,
}

impl GizmoAxis {
    pub fn direction(&self) -> Vec3 {
        match self {
            GizmoAxis::X => Vec3::X,
            GizmoAxis::Y => Vec3::Y,
            GizmoAxis::Z => Vec3::Z,
        }
    }
}

/// State of the translation gizmo
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GizmoState {
    /// Shown only while a user object is selected
    pub visible: bool,
    /// Follows the selected object's position
    pub position: [f64; 3],
    /// Currently dragged axis
    pub active_axis: Option<GizmoAxis>,
    /// Whether a gizmo drag is in progress
    pub dragging: bool,
}

impl GizmoState {
    pub fn show_at(&mut self, position: [f64; 3]) {
        self.visible = true;
        self.position = position;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.end_drag();
    }

    pub fn begin_drag(&mut self, axis: GizmoAxis) {
        self.active_axis = Some(axis);
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.active_axis = None;
        self.dragging = false;
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            self.position[0] as f32,
            self.position[1] as f32,
            self.position[2] as f32,
        )
    }
}

/// Translation of `amount` world units along `axis`
pub fn axis_translation(axis: GizmoAxis, amount: f64) -> [f64; 3] {
    match axis {
        GizmoAxis::X => [amount, 0.0, 0.0],
        GizmoAxis::Y => [0.0, amount, 0.0],
        GizmoAxis::Z => [0.0, 0.0, amount],
    }
}

/// Test if a ray hits one of the gizmo axes.
/// Returns the axis if the ray passes within `threshold` distance of an axis line.
pub fn gizmo_hit_test(ray: &Ray, center: Vec3, axis_length: f32, threshold: f32) -> Option<GizmoAxis> {
    let mut best: Option<(GizmoAxis, f32)> = None;

    for axis in [GizmoAxis::X, GizmoAxis::Y, GizmoAxis::Z] {
        let line_end = center + axis.direction() * axis_length;
        let dist = ray_line_distance(ray, center, line_end);

        if dist < threshold && best.as_ref().is_none_or(|(_, d)| dist < *d) {
            best = Some((axis, dist));
        }
    }

    best.map(|(axis, _)| axis)
}

/// Minimum distance between a ray and a line segment.
fn ray_line_distance(ray: &Ray, line_start: Vec3, line_end: Vec3) -> f32 {
    let u = ray.direction;
    let v = line_end - line_start;
    let w = ray.origin - line_start;

    let a = u.dot(u);
    let b = u.dot(v);
    let c = v.dot(v);
    let d = u.dot(w);
    let e = v.dot(w);

    let denom = a * c - b * b;

    let (sc, tc) = if denom < 1e-7 {
        // Nearly parallel
        (0.0, if b > c { d / b } else { e / c })
    } else {
        ((b * e - c * d) / denom, (a * e - b * d) / denom)
    };

    // Segment parameter in [0,1], ray parameter non-negative
    let tc = tc.clamp(0.0, 1.0);
    let sc = sc.max(0.0);

    let closest_ray = ray.origin + u * sc;
    let closest_line = line_start + v * tc;

    (closest_ray - closest_line).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_x_axis() {
        // Straight down onto the middle of the X stalk
        let ray = Ray {
            origin: Vec3::new(1.0, 10.0, 0.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
        };
        assert_eq!(gizmo_hit_test(&ray, Vec3::ZERO, 2.0, 0.15), Some(GizmoAxis::X));
    }

    #[test]
    fn test_hit_z_axis_offset_center() {
        let center = Vec3::new(5.0, 0.0, 0.0);
        let ray = Ray {
            origin: Vec3::new(5.0, 10.0, 1.5),
            direction: Vec3::new(0.0, -1.0, 0.0),
        };
        assert_eq!(gizmo_hit_test(&ray, center, 2.0, 0.15), Some(GizmoAxis::Z));
    }

    #[test]
    fn test_miss() {
        let ray = Ray {
            origin: Vec3::new(3.0, 10.0, 3.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
        };
        assert_eq!(gizmo_hit_test(&ray, Vec3::ZERO, 2.0, 0.15), None);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut g = GizmoState::default();
        g.show_at([1.0, 2.0, 3.0]);
        assert!(g.visible);
        assert_eq!(g.center(), Vec3::new(1.0, 2.0, 3.0));

        g.begin_drag(GizmoAxis::Y);
        assert!(g.dragging);
        assert_eq!(g.active_axis, Some(GizmoAxis::Y));

        g.hide();
        assert!(!g.visible);
        assert!(!g.dragging);
        assert_eq!(g.active_axis, None);
    }

    #[test]
    fn test_axis_translation() {
        assert_eq!(axis_translation(GizmoAxis::Y, -2.5), [0.0, -2.5, 0.0]);
    }
}
