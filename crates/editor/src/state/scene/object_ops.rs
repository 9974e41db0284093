//! Object add/remove/duplicate/rename

use shared::{ObjectId, ObjectKind, PrimitiveKind, SceneObject, Transform};

use super::SceneState;
use crate::naming::default_name;

impl SceneState {
    /// Add a primitive at the origin with its default name
    pub fn add_primitive(&mut self, kind: PrimitiveKind) -> ObjectId {
        let id = uuid::Uuid::new_v4().to_string();

        self.objects.push(SceneObject {
            id: id.clone(),
            name: default_name(kind),
            kind: ObjectKind::Primitive(kind),
            transform: Transform::new(),
        });

        self.version += 1;
        id
    }

    /// Remove a user object. Helpers stay attached.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self
            .objects
            .iter()
            .position(|o| o.id == id && o.is_user_created())
        else {
            return false;
        };

        self.objects.remove(index);
        self.version += 1;
        true
    }

    /// Clone a user object under a new ID, moved back to the origin.
    /// The name is kept as-is.
    pub fn duplicate(&mut self, id: &str) -> Option<ObjectId> {
        let source = self.get(id).filter(|o| o.is_user_created())?;

        let mut copy = source.clone();
        copy.id = uuid::Uuid::new_v4().to_string();
        copy.transform.position = [0.0, 0.0, 0.0];

        let new_id = copy.id.clone();
        self.objects.push(copy);
        self.version += 1;
        Some(new_id)
    }

    /// Rename an object. The name is stored verbatim.
    pub fn rename(&mut self, id: &str, name: String) -> bool {
        match self.get_mut(id).filter(|o| o.is_user_created()) {
            Some(object) => {
                object.name = name;
                self.version += 1;
                true
            }
            None => false,
        }
    }
}
