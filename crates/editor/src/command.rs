//! JSON command protocol for the UI binding layer.
//!
//! One command per user action. The page (or the headless driver) sends
//! commands; each one runs to completion against the session.

use serde::{Deserialize, Serialize};
use shared::PrimitiveKind;

use crate::codegen::OutputSurface;
use crate::state::{object_display_name, EditorSession};
use crate::transform_fields::{self, FIELD_COUNT};
use crate::viewport::gizmo::GizmoAxis;

/// A user action the editor can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a primitive at the origin
    AddShape { kind: PrimitiveKind },
    /// Delete the selected object
    DeleteSelected,
    /// Duplicate the selected object at the origin
    DuplicateSelected,
    /// Set all nine transform fields of the selected object
    SetTransform { values: [f64; FIELD_COUNT] },
    /// Same as `SetTransform`, with raw input text
    SetTransformText { values: Vec<String> },
    /// Rename the selected object
    Rename { name: String },
    ToggleImports,
    ToggleBoilerplate,
    ToggleGrid,
    /// Recolor the grid (CSS color string)
    SetGridColor { color: String },
    /// Select an object by ID
    Select { id: String },
    /// Clear selection
    Deselect,
    /// Pointer moved to pixel coordinates
    PointerMove { x: f32, y: f32 },
    PointerDown,
    PointerUp,
    /// Pick whatever is under the pointer
    Click,
    /// Code panel drag bar pressed
    StartPanelDrag,
    /// Move the selected object along a gizmo axis
    GizmoDrag { axis: GizmoAxis, amount: f64 },
    /// Viewport resized
    Resize { width: f32, height: f32 },
    /// Page camera moved by its orbit controls
    SetCamera { eye: [f32; 3], target: [f32; 3] },
    /// Orbit the camera by pointer deltas in degrees
    Orbit { dx: f32, dy: f32 },
    /// Dolly the camera towards its target
    Zoom { delta: f32 },
    /// List user objects, selection and toggles
    Inspect,
    /// Current listing text
    Listing,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn changed(changed: bool) -> Self {
        Self::ok_with_data(serde_json::json!({ "changed": changed }))
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn inspect<S: OutputSurface>(session: &EditorSession<S>) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = session
        .scene
        .user_objects()
        .map(|object| {
            serde_json::json!({
                "id": object.id,
                "name": object.name,
                "display_name": object_display_name(object),
                "type": object.kind.type_label(),
                "transform": transform_fields::read_fields(&object.transform),
            })
        })
        .collect();

    serde_json::json!({
        "object_count": objects.len(),
        "objects": objects,
        "selected": session.selection.primary(),
        "include_imports": session.toggles.include_imports,
        "include_boilerplate": session.toggles.include_boilerplate,
        "grid_visible": session.scene.grid_visible(),
        "grid_color": session.grid_color,
        "camera_eye": session.camera.eye_position().to_array(),
        "version": session.scene.version(),
    })
}

/// Execute a single command on the session.
pub fn execute_command<S: OutputSurface>(
    session: &mut EditorSession<S>,
    cmd: EditorCommand,
) -> CommandResponse {
    tracing::debug!(?cmd, "executing command");

    match cmd {
        EditorCommand::AddShape { kind } => {
            let id = session.add_shape(kind);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::DeleteSelected => {
            let removed = session.delete_selected();
            CommandResponse::ok_with_data(serde_json::json!({
                "changed": removed.is_some(),
                "removed": removed,
            }))
        }

        EditorCommand::DuplicateSelected => {
            let copy = session.duplicate_selected();
            CommandResponse::ok_with_data(serde_json::json!({
                "changed": copy.is_some(),
                "id": copy,
            }))
        }

        EditorCommand::SetTransform { values } => {
            CommandResponse::changed(session.apply_transform(&values))
        }

        EditorCommand::SetTransformText { values } => match session.apply_transform_text(&values) {
            Ok(changed) => CommandResponse::changed(changed),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::Rename { name } => CommandResponse::changed(session.rename_selected(name)),

        EditorCommand::ToggleImports => {
            let on = session.toggle_imports();
            CommandResponse::ok_with_data(serde_json::json!({
                "include_imports": on,
                "label": session.imports_button_label(),
            }))
        }

        EditorCommand::ToggleBoilerplate => {
            let on = session.toggle_boilerplate();
            CommandResponse::ok_with_data(serde_json::json!({
                "include_boilerplate": on,
                "label": session.boilerplate_button_label(),
            }))
        }

        EditorCommand::ToggleGrid => {
            let visible = session.toggle_grid();
            CommandResponse::ok_with_data(serde_json::json!({
                "grid_visible": visible,
                "label": session.grid_button_label(),
            }))
        }

        EditorCommand::SetGridColor { color } => match session.set_grid_color(&color) {
            Ok(()) => {
                CommandResponse::ok_with_data(serde_json::json!({ "grid_color": session.grid_color }))
            }
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::Select { id } => {
            if session.select(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
            } else {
                CommandResponse::err(format!("No user object with id '{id}'"))
            }
        }

        EditorCommand::Deselect => {
            session.deselect();
            CommandResponse::ok()
        }

        EditorCommand::PointerMove { x, y } => {
            session.pointer_move(x, y);
            CommandResponse::ok()
        }

        EditorCommand::PointerDown => {
            let axis = session.pointer_down();
            CommandResponse::ok_with_data(serde_json::json!({
                "gizmo_axis": axis,
                "orbit_enabled": session.orbit_enabled,
            }))
        }

        EditorCommand::PointerUp => {
            session.pointer_up();
            CommandResponse::ok()
        }

        EditorCommand::Click => {
            let selected = session.click();
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selected }))
        }

        EditorCommand::StartPanelDrag => {
            session.start_panel_drag();
            CommandResponse::ok()
        }

        EditorCommand::GizmoDrag { axis, amount } => {
            CommandResponse::changed(session.gizmo_drag(axis, amount))
        }

        EditorCommand::Resize { width, height } => {
            session.resize(width, height);
            CommandResponse::ok()
        }

        EditorCommand::SetCamera { eye, target } => {
            session.set_camera(eye, target);
            CommandResponse::ok()
        }

        EditorCommand::Orbit { dx, dy } => CommandResponse::changed(session.orbit(dx, dy)),

        EditorCommand::Zoom { delta } => CommandResponse::changed(session.zoom(delta)),

        EditorCommand::Inspect => CommandResponse::ok_with_data(inspect(session)),

        EditorCommand::Listing => {
            CommandResponse::ok_with_data(serde_json::json!({ "listing": session.listing() }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json<S: OutputSurface>(
    session: &mut EditorSession<S>,
    json: &str,
) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch<S: OutputSurface>(
    session: &mut EditorSession<S>,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
