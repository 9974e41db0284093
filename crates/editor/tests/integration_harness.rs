//! Integration tests for TestHarness.
//!
//! Tests the headless harness API for programmatic editor sessions.

use shapecode_editor_lib::codegen::IMPORTS_BLOCK;
use shapecode_editor_lib::harness::TestHarness;
use shapecode_editor_lib::state::EditorSettings;
use shared::PrimitiveKind;

#[test]
fn test_harness_add_select_edit_cycle() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Box);
    assert_eq!(h.block_count(), 1);

    assert!(h.select(&id));
    assert!(h.session.gizmo.visible);
    assert!(h.set_transform([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0, 2.0]));
    assert!(h.rename("crate"));

    let listing = h.listing();
    assert!(listing.contains("const crate = new THREE.Mesh(crateGeometry, crateMaterial);"));
    assert!(listing.contains("crate.position.set(0, 1, 0);"));
    assert!(listing.contains("crate.scale.set(2, 2, 2);"));
    assert_eq!(h.session.transform_fields().unwrap()[1], 1.0);
}

#[test]
fn test_harness_helpers_not_selectable() {
    let mut h = TestHarness::new();
    let grid = h.session.scene.grid_id().clone();
    let gizmo = h.session.scene.gizmo_id().clone();

    assert!(!h.select(&grid));
    assert!(!h.select(&gizmo));
    assert!(h.selected().is_none());
    assert!(!h.session.gizmo.visible);
}

#[test]
fn test_harness_delete_clears_selection() {
    let mut h = TestHarness::new();
    let keep = h.add(PrimitiveKind::Sphere);
    let gone = h.add(PrimitiveKind::Cone);

    h.select(&gone);
    assert_eq!(h.delete_selected(), Some(gone.clone()));
    assert!(h.object(&gone).is_none());
    assert!(h.object(&keep).is_some());
    assert!(h.selected().is_none());
    assert_eq!(h.delete_selected(), None);
    assert_eq!(h.block_count(), 1);
}

#[test]
fn test_harness_click_nearest_object() {
    let mut h = TestHarness::new();
    let back = h.add_at(PrimitiveKind::Box, [0.0, 0.0, -3.0]);
    let front = h.add(PrimitiveKind::Box);
    h.clear_selection();

    assert_eq!(h.click_center(), Some(front));
    h.clear_selection();

    h.select(&back);
    h.set_transform([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    h.clear_selection();
    // Both at the origin now: earlier object wins the tie
    assert_eq!(h.click_center(), Some(back));
}

#[test]
fn test_harness_click_empty_space_deselects() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Box);
    h.select(&id);

    assert_eq!(h.click_at(2.0, 2.0), None);
    assert!(h.selected().is_none());
    assert!(!h.session.gizmo.visible);
}

#[test]
fn test_harness_gizmo_press_suspends_orbit() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Box);
    h.select(&id);

    // Ray from the default eye through the midpoint of the Y stalk
    let point = glam::Vec3::new(0.0, 1.0, 0.0);
    let clip = h.session.camera.view_projection().project_point3(point);
    let x = (clip.x + 1.0) * 0.5 * h.session.viewport.x;
    let y = (1.0 - clip.y) * 0.5 * h.session.viewport.y;

    h.session.pointer_move(x, y);
    assert_eq!(
        h.session.pointer_down(),
        Some(shapecode_editor_lib::viewport::gizmo::GizmoAxis::Y)
    );
    assert!(!h.session.orbit_enabled);
    assert!(h.session.gizmo.dragging);

    // Clicking the gizmo keeps the selection
    assert_eq!(h.session.click(), Some(id.clone()));

    h.session.pointer_up();
    assert!(h.session.orbit_enabled);
    assert!(!h.session.gizmo.dragging);
    assert_eq!(h.selected(), Some(&id));
}

#[test]
fn test_harness_custom_settings() {
    let settings =
        EditorSettings::from_json(r#"{"show_imports": true, "show_grid": false}"#).unwrap();
    let h = TestHarness::with_settings(settings);

    assert!(h.listing().starts_with(IMPORTS_BLOCK));
    assert!(!h.session.scene.grid_visible());
    assert_eq!(h.session.grid_button_label(), "Show Grid");
}

#[test]
fn test_harness_markup_regenerated_each_time() {
    let mut h = TestHarness::new();
    let id = h.add(PrimitiveKind::Torus);
    let before = h.markup().to_string();

    h.select(&id);
    h.rename("donut");
    assert_ne!(h.markup(), before);
    assert!(h.markup().contains("donut"));
    assert!(!h.markup().contains("torusGeometry"));
}
