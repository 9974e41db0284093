// Library crate: exposes the editor core for the headless driver, the wasm
// bindings and integration tests. Presentation stays in the host page.

pub mod codegen;
pub mod command;
pub mod fixtures;
pub mod harness;
pub mod highlight;
pub mod naming;
pub mod state;
pub mod transform_fields;

/// Camera, picking and gizmo math. Drawing is done by the page's renderer.
pub mod viewport {
    pub mod camera;
    pub mod gizmo;
    pub mod picking;
}
