pub mod panel;
pub mod scene;
pub mod selection;
pub mod settings;

use glam::{Vec2, Vec3};
use shared::{DisplayToggles, ObjectId, PrimitiveKind, SceneObject};
use thiserror::Error;

use crate::codegen::{self, OutputSurface};
use crate::highlight::CodeView;
use crate::transform_fields::{self, TransformFieldError, FIELD_COUNT};
use crate::viewport::camera::Camera;
use crate::viewport::gizmo::{axis_translation, gizmo_hit_test, GizmoAxis, GizmoState};
use crate::viewport::picking;

pub use panel::{CodePanelState, PointerState};
pub use scene::{object_display_name, short_id, SceneState};
pub use selection::SelectionState;
pub use settings::EditorSettings;

/// Rejected grid color input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridColorError {
    #[error("Grid color must not be empty")]
    Empty,
}

/// One editor session: scene, selection, toggles and the code view.
///
/// Every transition that changes what the listing shows re-renders it into
/// `surface` before returning.
pub struct EditorSession<S: OutputSurface = CodeView> {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub toggles: DisplayToggles,
    pub gizmo: GizmoState,
    pub camera: Camera,
    /// Orbit navigation is suspended while the gizmo is being dragged
    pub orbit_enabled: bool,
    pub panel: CodePanelState,
    pub pointer: PointerState,
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// Grid line color as the page's color input reports it
    pub grid_color: String,
    settings: EditorSettings,
    surface: S,
}

impl Default for EditorSession<CodeView> {
    fn default() -> Self {
        Self::new(EditorSettings::default(), CodeView::new())
    }
}

impl<S: OutputSurface> EditorSession<S> {
    /// Start a session and render the initial listing
    pub fn new(settings: EditorSettings, surface: S) -> Self {
        let viewport = Vec2::from(settings.viewport);
        let mut camera = Camera::from_settings(&settings.camera);
        camera.set_aspect(viewport.x, viewport.y);

        let mut session = Self {
            scene: SceneState::new(settings.show_grid),
            selection: SelectionState::default(),
            toggles: settings.toggles(),
            gizmo: GizmoState::default(),
            camera,
            orbit_enabled: true,
            panel: CodePanelState::new(settings.panel.width, settings.panel.margin),
            pointer: PointerState::default(),
            viewport,
            grid_color: settings.grid_color.clone(),
            settings,
            surface,
        };

        tracing::info!(
            imports = session.toggles.include_imports,
            boilerplate = session.toggles.include_boilerplate,
            "editor session started"
        );
        session.regenerate();
        session
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current listing text
    pub fn listing(&self) -> &str {
        self.surface.text()
    }

    /// Re-render the listing from the current scene
    pub fn regenerate(&mut self) {
        codegen::regenerate(
            &mut self.surface,
            self.scene.objects(),
            self.scene.ignored(),
            self.toggles,
        );
    }

    // ── Selection ─────────────────────────────────────────────

    /// Currently selected object
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selection.primary().and_then(|id| self.scene.get(id))
    }

    /// Select a user object and move the gizmo onto it
    pub fn select(&mut self, id: &str) -> bool {
        let Some(position) = self
            .scene
            .get(id)
            .filter(|o| o.is_user_created())
            .map(|o| o.transform.position)
        else {
            return false;
        };

        self.selection.select(id.to_string());
        self.gizmo.show_at(position);
        tracing::debug!(id, "selected");
        true
    }

    pub fn deselect(&mut self) {
        self.selection.clear();
        self.gizmo.hide();
    }

    /// Transform field values of the selected object
    pub fn transform_fields(&self) -> Option<[f64; FIELD_COUNT]> {
        self.selected_object()
            .map(|o| transform_fields::read_fields(&o.transform))
    }

    // ── Scene edits ───────────────────────────────────────────

    pub fn add_shape(&mut self, kind: PrimitiveKind) -> ObjectId {
        let id = self.scene.add_primitive(kind);
        tracing::debug!(%kind, %id, "shape added");
        self.regenerate();
        id
    }

    /// Delete the selected object. No-op without a selection.
    pub fn delete_selected(&mut self) -> Option<ObjectId> {
        let id = self.selection.primary()?.clone();
        let removed = self.scene.remove(&id);

        self.deselect();
        if !removed {
            return None;
        }

        tracing::debug!(%id, "object deleted");
        self.regenerate();
        Some(id)
    }

    /// Duplicate the selected object at the origin. The selection stays on
    /// the source object.
    pub fn duplicate_selected(&mut self) -> Option<ObjectId> {
        let id = self.selection.primary()?.clone();
        let copy = self.scene.duplicate(&id)?;
        tracing::debug!(source = %id, %copy, "object duplicated");
        self.regenerate();
        Some(copy)
    }

    /// Apply the nine transform field values to the selected object
    pub fn apply_transform(&mut self, values: &[f64; FIELD_COUNT]) -> bool {
        let Some(mut transform) = self.selected_object().map(|o| o.transform) else {
            return false;
        };
        let Some(id) = self.selection.primary().cloned() else {
            return false;
        };

        transform_fields::write_fields(&mut transform, values);
        if !self.scene.set_transform(&id, transform) {
            return false;
        }

        self.gizmo.show_at(transform.position);
        self.regenerate();
        true
    }

    /// Parse raw input text and apply it. Nothing changes on a parse error.
    pub fn apply_transform_text<T: AsRef<str>>(
        &mut self,
        inputs: &[T],
    ) -> Result<bool, TransformFieldError> {
        let values = transform_fields::parse_fields(inputs).inspect_err(|e| {
            tracing::warn!("rejected transform input: {e}");
        })?;
        Ok(self.apply_transform(&values))
    }

    /// Rename the selected object
    pub fn rename_selected(&mut self, name: String) -> bool {
        let Some(id) = self.selection.primary().cloned() else {
            return false;
        };
        if !self.scene.rename(&id, name) {
            return false;
        }
        self.regenerate();
        true
    }

    // ── Toggles ───────────────────────────────────────────────

    /// Flip the import block; returns the new value
    pub fn toggle_imports(&mut self) -> bool {
        self.toggles.include_imports = !self.toggles.include_imports;
        self.regenerate();
        self.toggles.include_imports
    }

    /// Flip the boilerplate block; returns the new value
    pub fn toggle_boilerplate(&mut self) -> bool {
        self.toggles.include_boilerplate = !self.toggles.include_boilerplate;
        self.regenerate();
        self.toggles.include_boilerplate
    }

    /// Show or hide the grid; returns the new visibility
    pub fn toggle_grid(&mut self) -> bool {
        let visible = !self.scene.grid_visible();
        self.scene.set_grid_visible(visible);
        visible
    }

    /// Recolor the grid. The listing never includes the grid, so it is not
    /// regenerated.
    pub fn set_grid_color(&mut self, color: &str) -> Result<(), GridColorError> {
        let color = color.trim();
        if color.is_empty() {
            tracing::warn!("rejected empty grid color");
            return Err(GridColorError::Empty);
        }
        self.grid_color = color.to_string();
        tracing::debug!(color, "grid recolored");
        Ok(())
    }

    pub fn imports_button_label(&self) -> &'static str {
        if self.toggles.include_imports {
            "Hide Imports"
        } else {
            "Show Imports"
        }
    }

    pub fn boilerplate_button_label(&self) -> &'static str {
        if self.toggles.include_boilerplate {
            "Hide Boilerplate"
        } else {
            "Show Boilerplate"
        }
    }

    pub fn grid_button_label(&self) -> &'static str {
        if self.scene.grid_visible() {
            "Hide Grid"
        } else {
            "Show Grid"
        }
    }

    // ── Pointer & viewport ────────────────────────────────────

    /// Mirror the page camera after its orbit controls moved it
    pub fn set_camera(&mut self, eye: [f32; 3], target: [f32; 3]) {
        self.camera.set_view(Vec3::from(eye), Vec3::from(target));
    }

    /// Orbit by pointer deltas in degrees. Ignored while a gizmo drag holds
    /// the controls.
    pub fn orbit(&mut self, dx: f32, dy: f32) -> bool {
        if !self.orbit_enabled {
            return false;
        }
        self.camera.rotate(dx, dy);
        true
    }

    /// Dolly towards (positive) or away from (negative) the target
    pub fn zoom(&mut self, delta: f32) -> bool {
        if !self.orbit_enabled {
            return false;
        }
        self.camera.zoom(delta);
        true
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.camera.set_aspect(width, height);
    }

    /// Track the pointer; resizes the code panel while its bar is held
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.update(x, y, self.viewport);
        self.panel.drag_to(x, self.viewport.x);
    }

    /// Gizmo axis under the pointer, if the gizmo is shown
    fn gizmo_axis_under_pointer(&self) -> Option<GizmoAxis> {
        if !self.gizmo.visible {
            return None;
        }
        let ray = self.camera.ray_from_ndc(self.pointer.ndc);
        gizmo_hit_test(
            &ray,
            self.gizmo.center(),
            self.settings.gizmo.axis_length,
            self.settings.gizmo.hit_threshold,
        )
    }

    /// Pressing on the gizmo starts an axis drag and suspends orbiting
    pub fn pointer_down(&mut self) -> Option<GizmoAxis> {
        let axis = self.gizmo_axis_under_pointer()?;
        self.gizmo.begin_drag(axis);
        self.orbit_enabled = false;
        Some(axis)
    }

    pub fn pointer_up(&mut self) {
        self.orbit_enabled = true;
        self.gizmo.end_drag();
        self.panel.stop_drag();
    }

    /// Pick the object under the pointer. Hitting the gizmo keeps the current
    /// selection; hitting nothing (or only helpers) deselects.
    pub fn click(&mut self) -> Option<ObjectId> {
        if self.gizmo_axis_under_pointer().is_some() {
            return self.selection.primary().cloned();
        }

        let ray = self.camera.ray_from_ndc(self.pointer.ndc);
        match picking::hit_test(self.scene.objects(), &ray) {
            Some(id) => {
                self.select(&id);
                Some(id)
            }
            None => {
                self.deselect();
                None
            }
        }
    }

    pub fn start_panel_drag(&mut self) {
        self.panel.start_drag();
    }

    /// Move the selected object along a gizmo axis
    pub fn gizmo_drag(&mut self, axis: GizmoAxis, amount: f64) -> bool {
        let Some(id) = self.selection.primary().cloned() else {
            return false;
        };
        let Some(position) = self.scene.translate(&id, axis_translation(axis, amount)) else {
            return false;
        };

        self.gizmo.show_at(position);
        self.regenerate();
        true
    }
}
