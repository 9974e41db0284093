//! Transform edits

use shared::Transform;

use super::SceneState;

impl SceneState {
    /// Replace a user object's transform
    pub fn set_transform(&mut self, id: &str, transform: Transform) -> bool {
        match self.get_mut(id).filter(|o| o.is_user_created()) {
            Some(object) => {
                object.transform = transform;
                self.version += 1;
                true
            }
            None => false,
        }
    }

    /// Apply a translation delta; returns the new position
    pub fn translate(&mut self, id: &str, delta: [f64; 3]) -> Option<[f64; 3]> {
        let object = self.get_mut(id).filter(|o| o.is_user_created())?;

        for (p, d) in object.transform.position.iter_mut().zip(delta) {
            *p += d;
        }
        let position = object.transform.position;

        self.version += 1;
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PrimitiveKind;

    #[test]
    fn test_set_transform() {
        let mut scene = SceneState::default();
        let id = scene.add_primitive(PrimitiveKind::Sphere);
        let t = Transform {
            position: [1.0, 0.0, 0.0],
            rotation: [0.0, 1.0, 0.0],
            scale: [1.0, 1.0, 3.0],
        };
        assert!(scene.set_transform(&id, t));
        assert_eq!(scene.get(&id).unwrap().transform, t);
    }

    #[test]
    fn test_helpers_not_transformable() {
        let mut scene = SceneState::default();
        let gizmo = scene.gizmo_id().clone();
        assert!(!scene.set_transform(&gizmo, Transform::new()));
        assert!(scene.translate(&gizmo, [1.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_translate_accumulates() {
        let mut scene = SceneState::default();
        let id = scene.add_primitive(PrimitiveKind::Box);
        scene.translate(&id, [1.0, 0.0, 0.0]);
        let pos = scene.translate(&id, [0.5, -1.0, 0.0]).unwrap();
        assert_eq!(pos, [1.5, -1.0, 0.0]);
    }
}
