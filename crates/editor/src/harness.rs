//! Headless test harness for programmatic editor sessions.
//!
//! Drives an `EditorSession` backed by an in-memory `CodeView`, the same way
//! the page drives it through DOM events.

use shared::{ObjectId, PrimitiveKind, SceneObject};

use crate::command::{execute_json, execute_json_batch, CommandResponse};
use crate::highlight::CodeView;
use crate::state::{EditorSession, EditorSettings};

/// Headless test harness: owns a session and its code view
pub struct TestHarness {
    pub session: EditorSession<CodeView>,
}

impl TestHarness {
    /// Create a harness with default settings.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            session: EditorSession::new(settings, CodeView::new()),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a primitive and return its ID
    pub fn add(&mut self, kind: PrimitiveKind) -> ObjectId {
        self.session.add_shape(kind)
    }

    /// Add a primitive, select it and move it to `pos`
    pub fn add_at(&mut self, kind: PrimitiveKind, pos: [f64; 3]) -> ObjectId {
        let id = self.add(kind);
        self.select(&id);
        self.set_transform([pos[0], pos[1], pos[2], 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        id
    }

    /// Select an object by ID
    pub fn select(&mut self, id: &str) -> bool {
        self.session.select(id)
    }

    pub fn clear_selection(&mut self) {
        self.session.deselect();
    }

    /// Write all nine transform fields of the selection
    pub fn set_transform(&mut self, values: [f64; 9]) -> bool {
        self.session.apply_transform(&values)
    }

    pub fn rename(&mut self, name: &str) -> bool {
        self.session.rename_selected(name.to_string())
    }

    pub fn delete_selected(&mut self) -> Option<ObjectId> {
        self.session.delete_selected()
    }

    /// Move the pointer to pixel coordinates and click
    pub fn click_at(&mut self, x: f32, y: f32) -> Option<ObjectId> {
        self.session.pointer_move(x, y);
        self.session.click()
    }

    /// Click the middle of the viewport
    pub fn click_center(&mut self) -> Option<ObjectId> {
        let center = self.session.viewport * 0.5;
        self.click_at(center.x, center.y)
    }

    // ── Commands ──────────────────────────────────────────────

    pub fn run(&mut self, json: &str) -> Result<CommandResponse, String> {
        execute_json(&mut self.session, json)
    }

    pub fn run_batch(&mut self, json: &str) -> Result<Vec<CommandResponse>, String> {
        execute_json_batch(&mut self.session, json)
    }

    // ── Inspection ────────────────────────────────────────────

    /// Plain listing text
    pub fn listing(&self) -> &str {
        self.session.listing()
    }

    /// Highlighted listing markup
    pub fn markup(&self) -> &str {
        self.session.surface().markup()
    }

    /// Number of user objects in the scene
    pub fn object_count(&self) -> usize {
        self.session.scene.user_object_count()
    }

    /// Number of object blocks in the listing
    pub fn block_count(&self) -> usize {
        self.listing().matches("scene.add(").count()
            - usize::from(self.session.toggles.include_boilerplate)
    }

    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.session.scene.get(id)
    }

    pub fn selected(&self) -> Option<&ObjectId> {
        self.session.selection.primary()
    }

    /// User objects as pretty JSON
    pub fn export_objects_json(&self) -> String {
        let objects: Vec<&SceneObject> = self.session.scene.user_objects().collect();
        serde_json::to_string_pretty(&objects).unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
