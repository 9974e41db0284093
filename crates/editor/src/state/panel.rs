//! Code panel and pointer state

use glam::Vec2;

use crate::viewport::camera::pointer_to_ndc;

/// Resizable code panel docked to the right window edge
#[derive(Debug, Clone, PartialEq)]
pub struct CodePanelState {
    /// Set while the drag bar is held
    pub dragging: bool,
    /// Panel width in pixels
    pub width: f32,
    margin: f32,
}

impl CodePanelState {
    pub fn new(width: f32, margin: f32) -> Self {
        Self {
            dragging: false,
            width,
            margin,
        }
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }

    /// Resize to follow the pointer. Returns true if the width changed.
    pub fn drag_to(&mut self, pointer_x: f32, viewport_width: f32) -> bool {
        if !self.dragging {
            return false;
        }
        self.width = viewport_width - pointer_x - self.margin;
        true
    }
}

/// Last known pointer position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Pixels from the top-left corner
    pub position: Vec2,
    /// Normalized device coordinates
    pub ndc: Vec2,
}

impl PointerState {
    pub fn update(&mut self, x: f32, y: f32, viewport: Vec2) {
        self.position = Vec2::new(x, y);
        self.ndc = pointer_to_ndc(x, y, viewport.x, viewport.y);
    }
}
