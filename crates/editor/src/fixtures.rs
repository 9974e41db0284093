//! Factory functions for creating test data.
//!
//! Provides helpers to construct `SceneObject`s, ignore sets and command
//! batches used in tests and by the headless driver.

use shared::*;

use crate::codegen::IgnoreSet;
use crate::naming::default_name;

// ── Object factories ────────────────────────────────────────────

/// User primitive at the origin, named the way the editor names new shapes.
pub fn primitive_object(id: &str, kind: PrimitiveKind) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        name: default_name(kind),
        kind: ObjectKind::Primitive(kind),
        transform: Transform::new(),
    }
}

/// User primitive at a specific position.
pub fn object_at(id: &str, kind: PrimitiveKind, pos: [f64; 3]) -> SceneObject {
    let mut object = primitive_object(id, kind);
    object.transform.position = pos;
    object
}

/// User primitive with an explicit name.
pub fn named_object(id: &str, name: &str, kind: PrimitiveKind) -> SceneObject {
    SceneObject {
        name: name.to_string(),
        ..primitive_object(id, kind)
    }
}

/// Editor-owned helper object (light, grid or gizmo).
pub fn helper_object(id: &str, kind: ObjectKind) -> SceneObject {
    SceneObject {
        id: id.to_string(),
        name: kind.type_label().to_lowercase(),
        kind,
        transform: Transform::new(),
    }
}

/// The helpers a fresh editor scene starts with.
pub fn default_helpers() -> Vec<SceneObject> {
    vec![
        helper_object("directional", ObjectKind::DirectionalLight),
        helper_object("ambient", ObjectKind::AmbientLight),
        helper_object("grid", ObjectKind::Grid),
        helper_object("gizmo", ObjectKind::Gizmo),
    ]
}

/// Helpers followed by the given user objects, in order.
pub fn scene_with_helpers(user_objects: Vec<SceneObject>) -> Vec<SceneObject> {
    let mut objects = default_helpers();
    objects.extend(user_objects);
    objects
}

// ── Convenience helpers ─────────────────────────────────────────

/// Ignore set from string IDs.
pub fn ignore_set(ids: &[&str]) -> IgnoreSet {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Listing toggles with both optional blocks off.
pub fn objects_only() -> DisplayToggles {
    DisplayToggles {
        include_imports: false,
        include_boilerplate: false,
    }
}

/// JSON command array adding the given primitives.
pub fn add_shapes_json(kinds: &[PrimitiveKind]) -> String {
    let cmds: Vec<serde_json::Value> = kinds
        .iter()
        .map(|kind| serde_json::json!({ "command": "add_shape", "kind": kind }))
        .collect();
    serde_json::Value::Array(cmds).to_string()
}
