use glam::Vec3;
use shared::{ObjectId, PrimitiveKind, SceneObject};

/// Half thickness given to flat primitives so they can still be hit
const FLAT_HALF_DEPTH: f32 = 0.01;

/// A ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Half extents of a primitive built with its default geometry arguments.
/// Flat kinds lie in the XY plane and get a thin depth.
pub fn primitive_half_extents(kind: PrimitiveKind) -> Vec3 {
    let half = match kind {
        PrimitiveKind::Box | PrimitiveKind::Plane => Vec3::splat(0.5),
        PrimitiveKind::Circle | PrimitiveKind::Ring => Vec3::ONE,
        PrimitiveKind::Cone | PrimitiveKind::Cylinder => Vec3::new(1.0, 0.5, 1.0),
        PrimitiveKind::Dodecahedron
        | PrimitiveKind::Icosahedron
        | PrimitiveKind::Octahedron
        | PrimitiveKind::Tetrahedron
        | PrimitiveKind::Sphere => Vec3::ONE,
        PrimitiveKind::Torus => Vec3::new(1.4, 1.4, 0.4),
        PrimitiveKind::TorusKnot => Vec3::new(1.6, 1.6, 0.9),
    };

    if kind.is_flat() {
        Vec3::new(half.x, half.y, FLAT_HALF_DEPTH)
    } else {
        half
    }
}

/// World-space bounds of a user object. Helpers are not pickable.
///
/// Rotated objects get a cube enclosing the bounding sphere of the box.
pub fn object_bounds(object: &SceneObject) -> Option<Aabb> {
    let kind = object.kind.primitive()?;
    let t = &object.transform;

    let scale = Vec3::new(t.scale[0] as f32, t.scale[1] as f32, t.scale[2] as f32).abs();
    let mut half = primitive_half_extents(kind) * scale;
    if t.rotation.iter().any(|r| *r != 0.0) {
        half = Vec3::splat(half.length());
    }

    let center = Vec3::new(
        t.position[0] as f32,
        t.position[1] as f32,
        t.position[2] as f32,
    );
    Some(Aabb::from_center_half_extents(center, half))
}

/// Ray-AABB intersection using the slab method.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let inv_dir = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t1 = (aabb.min.x - ray.origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray.origin.x) * inv_dir.x;
    let t3 = (aabb.min.y - ray.origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray.origin.y) * inv_dir.y;
    let t5 = (aabb.min.z - ray.origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray.origin.z) * inv_dir.z;

    let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
    let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

    if tmax < 0.0 || tmin > tmax {
        return None;
    }

    Some(if tmin < 0.0 { tmax } else { tmin })
}

/// Pick the nearest candidate whose AABB is intersected by the ray.
/// On equal distance the earlier candidate wins.
pub fn pick_nearest<'a, I>(ray: &Ray, candidates: I) -> Option<&'a ObjectId>
where
    I: IntoIterator<Item = (&'a ObjectId, Aabb)>,
{
    let mut best: Option<(&ObjectId, f32)> = None;

    for (id, aabb) in candidates {
        if let Some(dist) = ray_aabb(ray, &aabb) {
            if best.as_ref().is_none_or(|(_, d)| dist < *d) {
                best = Some((id, dist));
            }
        }
    }

    best.map(|(id, _)| id)
}

/// Topmost user object under the ray
pub fn hit_test(objects: &[SceneObject], ray: &Ray) -> Option<ObjectId> {
    let candidates = objects
        .iter()
        .filter_map(|object| object_bounds(object).map(|aabb| (&object.id, aabb)));
    pick_nearest(ray, candidates).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::*;
    use shared::ObjectKind;

    fn ray_down_z(x: f32, y: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, y, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    #[test]
    fn test_ray_aabb_hit_and_miss() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5));
        assert!((ray_aabb(&ray_down_z(0.0, 0.0), &aabb).unwrap() - 9.5).abs() < 1e-5);
        assert!(ray_aabb(&ray_down_z(2.0, 0.0), &aabb).is_none());
        assert_eq!(aabb.center(), Vec3::ZERO);
    }

    #[test]
    fn test_object_bounds_scaled_and_translated() {
        let mut box_obj = primitive_object("b", PrimitiveKind::Box);
        box_obj.transform.position = [1.0, 2.0, 3.0];
        box_obj.transform.scale = [2.0, -2.0, 2.0];

        let aabb = object_bounds(&box_obj).unwrap();
        assert_eq!(aabb.min, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rotated_bounds_enclose_box() {
        let mut box_obj = primitive_object("b", PrimitiveKind::Box);
        box_obj.transform.rotation = [0.0, 0.785, 0.0];
        let aabb = object_bounds(&box_obj).unwrap();
        assert!(aabb.max.x > 0.8);
    }

    #[test]
    fn test_flat_primitives_are_thin() {
        for kind in PrimitiveKind::ALL {
            let half = primitive_half_extents(kind);
            assert_eq!(half.z == FLAT_HALF_DEPTH, kind.is_flat(), "{kind}");
        }
        assert_eq!(
            primitive_half_extents(PrimitiveKind::Plane),
            Vec3::new(0.5, 0.5, FLAT_HALF_DEPTH)
        );
    }

    #[test]
    fn test_helpers_not_pickable() {
        assert!(object_bounds(&helper_object("g", ObjectKind::Gizmo)).is_none());
    }

    #[test]
    fn test_hit_test_nearest_wins() {
        let mut far = primitive_object("far", PrimitiveKind::Sphere);
        far.transform.position = [0.0, 0.0, -5.0];
        let near = primitive_object("near", PrimitiveKind::Box);
        let objects = vec![far, near, helper_object("light", ObjectKind::AmbientLight)];

        assert_eq!(hit_test(&objects, &ray_down_z(0.0, 0.0)).as_deref(), Some("near"));
        assert_eq!(hit_test(&objects, &ray_down_z(0.8, 0.0)).as_deref(), Some("far"));
        assert_eq!(hit_test(&objects, &ray_down_z(5.0, 5.0)), None);
    }
}
