//! Editor settings
//!
//! Settings are built from defaults or from JSON handed over by the page.
//! They only live for the current session.

use serde::{Deserialize, Serialize};
use shared::DisplayToggles;

/// Camera settings (matches the page's perspective camera)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position
    pub eye: [f32; 3],
    /// Orbit target
    pub target: [f32; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 1.0,
            far: 10000.0,
            eye: [0.0, 5.0, 10.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Transform gizmo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoSettings {
    /// Length of each axis stalk
    pub axis_length: f32,
    /// Max ray distance from an axis that still counts as a hit
    pub hit_threshold: f32,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self {
            axis_length: 2.0,
            hit_threshold: 0.15,
        }
    }
}

/// Code panel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Initial panel width in pixels
    pub width: f32,
    /// Gap kept between the panel and the right window edge while resizing
    pub margin: f32,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            width: 480.0,
            margin: 30.0,
        }
    }
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Show the import block initially
    pub show_imports: bool,
    /// Show the boilerplate block initially
    pub show_boilerplate: bool,
    /// Show the grid initially
    pub show_grid: bool,
    /// Initial grid line color (any CSS color)
    pub grid_color: String,
    /// Initial viewport size in pixels
    pub viewport: [f32; 2],
    pub camera: CameraSettings,
    pub gizmo: GizmoSettings,
    pub panel: PanelSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_imports: false,
            show_boilerplate: true,
            show_grid: true,
            grid_color: "white".to_string(),
            viewport: [1280.0, 720.0],
            camera: CameraSettings::default(),
            gizmo: GizmoSettings::default(),
            panel: PanelSettings::default(),
        }
    }
}

impl EditorSettings {
    /// Parse settings; missing keys fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Initial display toggles
    pub fn toggles(&self) -> DisplayToggles {
        DisplayToggles {
            include_imports: self.show_imports,
            include_boilerplate: self.show_boilerplate,
        }
    }
}
