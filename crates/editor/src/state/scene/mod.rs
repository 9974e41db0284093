//! Scene state management
//!
//! Ordered scene objects (editor helpers included), the ignore set built from
//! the helpers, and a version counter bumped on every mutation.

mod display;
mod object_ops;
mod transform_ops;

pub use display::{object_display_name, short_id};

use shared::{ObjectId, ObjectKind, SceneObject, Transform};

use crate::codegen::IgnoreSet;

/// Scene objects in insertion order
#[derive(Debug, Clone)]
pub struct SceneState {
    pub(crate) objects: Vec<SceneObject>,
    ignored: IgnoreSet,
    /// Grid helper while it is detached from the scene
    detached_grid: Option<SceneObject>,
    grid_id: ObjectId,
    gizmo_id: ObjectId,
    pub(crate) version: u64,
}

fn helper(kind: ObjectKind, name: &str) -> SceneObject {
    SceneObject {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        kind,
        transform: Transform::new(),
    }
}

impl SceneState {
    /// Scene with the editor helpers: directional light, ambient light, grid, gizmo
    pub fn new(show_grid: bool) -> Self {
        let helpers = vec![
            helper(ObjectKind::DirectionalLight, "directionalLight"),
            helper(ObjectKind::AmbientLight, "ambientLight"),
            helper(ObjectKind::Grid, "grid"),
            helper(ObjectKind::Gizmo, "gizmo"),
        ];

        let ignored: IgnoreSet = helpers.iter().map(|h| h.id.clone()).collect();
        let grid_id = helpers[2].id.clone();
        let gizmo_id = helpers[3].id.clone();

        let mut scene = Self {
            objects: helpers,
            ignored,
            detached_grid: None,
            grid_id,
            gizmo_id,
            version: 0,
        };
        if !show_grid {
            scene.set_grid_visible(false);
        }
        scene.version = 0;
        scene
    }

    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// All attached objects in scene order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Ids excluded from the listing
    pub fn ignored(&self) -> &IgnoreSet {
        &self.ignored
    }

    /// User-created objects in scene order
    pub fn user_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| o.is_user_created())
    }

    pub fn user_object_count(&self) -> usize {
        self.user_objects().count()
    }

    /// Get an attached object by ID
    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn gizmo_id(&self) -> &ObjectId {
        &self.gizmo_id
    }

    pub fn grid_id(&self) -> &ObjectId {
        &self.grid_id
    }

    pub fn grid_visible(&self) -> bool {
        self.detached_grid.is_none()
    }

    /// Detach or re-attach the grid. A re-attached grid goes to the end.
    pub fn set_grid_visible(&mut self, visible: bool) {
        if visible == self.grid_visible() {
            return;
        }

        if visible {
            if let Some(grid) = self.detached_grid.take() {
                self.objects.push(grid);
            }
        } else if let Some(index) = self.objects.iter().position(|o| o.id == self.grid_id) {
            self.detached_grid = Some(self.objects.remove(index));
        }
        self.version += 1;
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(true)
    }
}
