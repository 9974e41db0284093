use serde::Serialize;
use wasm_bindgen::prelude::*;

use shapecode_editor_lib::codegen::OutputSurface;
use shapecode_editor_lib::command::execute_json;
use shapecode_editor_lib::highlight::{Highlighter, JsHighlighter};
use shapecode_editor_lib::state::{object_display_name, EditorSession, EditorSettings};
use shapecode_editor_lib::transform_fields::{format_fields, FIELD_LABELS};
use shared::PrimitiveKind;

#[wasm_bindgen]
extern "C" {
    /// highlight.js, loaded by the page as a global
    #[wasm_bindgen(js_namespace = hljs, js_name = highlightElement, catch)]
    fn hljs_highlight_element(element: &web_sys::Element) -> Result<(), JsValue>;
}

/// Initialize WASM module with panic hook and logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("shapecode editor initialized");
}

/// Code panel element on the page.
///
/// Prefers the page's highlight.js; falls back to the built-in highlighter
/// when `hljs` is missing or throws.
struct DomCodeView {
    element: web_sys::Element,
    text: String,
}

impl DomCodeView {
    fn find(element_id: &str) -> Result<Self, JsError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .ok_or_else(|| JsError::new(&format!("Element '#{element_id}' not found")))?;

        Ok(Self {
            element,
            text: String::new(),
        })
    }
}

impl OutputSurface for DomCodeView {
    fn replace_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.element.set_text_content(Some(text));
        // highlight.js skips elements it has already marked
        if let Err(e) = self.element.remove_attribute("data-highlighted") {
            tracing::warn!("Failed to reset highlight marker: {e:?}");
        }
    }

    fn highlight(&mut self) {
        if let Err(e) = hljs_highlight_element(&self.element) {
            tracing::debug!("hljs unavailable, using built-in highlighter: {e:?}");
            self.element
                .set_inner_html(&JsHighlighter.highlight(&self.text));
        }
    }

    fn text(&self) -> &str {
        &self.text
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

/// Editor session bound to a code panel element
#[wasm_bindgen]
pub struct EditorHandle {
    session: EditorSession<DomCodeView>,
}

#[wasm_bindgen]
impl EditorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(code_element_id: &str) -> Result<EditorHandle, JsError> {
        Self::build(code_element_id, EditorSettings::default())
    }

    /// Start a session with settings JSON (missing keys take defaults)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(
        code_element_id: &str,
        settings_json: &str,
    ) -> Result<EditorHandle, JsError> {
        let settings = EditorSettings::from_json(settings_json)
            .map_err(|e| JsError::new(&format!("Invalid settings JSON: {e}")))?;
        Self::build(code_element_id, settings)
    }

    fn build(code_element_id: &str, settings: EditorSettings) -> Result<EditorHandle, JsError> {
        let view = DomCodeView::find(code_element_id)?;
        Ok(Self {
            session: EditorSession::new(settings, view),
        })
    }

    /// Execute one JSON command; returns `{ success, error?, data? }`
    pub fn execute(&mut self, command_json: &str) -> Result<JsValue, JsError> {
        let response =
            execute_json(&mut self.session, command_json).map_err(|e| JsError::new(&e))?;
        to_js(&response)
    }

    /// Current listing text
    pub fn listing(&self) -> String {
        self.session.listing().to_string()
    }

    /// Labels for the add-shape dropdown
    #[wasm_bindgen(js_name = primitiveLabels)]
    pub fn primitive_labels(&self) -> js_sys::Array {
        PrimitiveKind::ALL
            .iter()
            .map(|kind| JsValue::from_str(kind.label()))
            .collect()
    }

    /// Labels of the nine transform inputs
    #[wasm_bindgen(js_name = transformFieldLabels)]
    pub fn transform_field_labels(&self) -> js_sys::Array {
        FIELD_LABELS.iter().map(|l| JsValue::from_str(l)).collect()
    }

    /// Transform inputs of the selected object, or `null`
    #[wasm_bindgen(js_name = transformFields)]
    pub fn transform_fields(&self) -> Result<JsValue, JsError> {
        let fields = self
            .session
            .selected_object()
            .map(|o| format_fields(&o.transform));
        to_js(&fields)
    }

    /// Type label of the selected object
    #[wasm_bindgen(js_name = selectedType)]
    pub fn selected_type(&self) -> Option<String> {
        self.session
            .selected_object()
            .map(|o| o.kind.type_label().to_string())
    }

    /// Name of the selected object
    #[wasm_bindgen(js_name = selectedName)]
    pub fn selected_name(&self) -> Option<String> {
        self.session.selected_object().map(|o| o.name.clone())
    }

    /// `name (shortid)` entries for the object list, in scene order
    #[wasm_bindgen(js_name = objectLabels)]
    pub fn object_labels(&self) -> Result<JsValue, JsError> {
        let labels: Vec<(String, String)> = self
            .session
            .scene
            .user_objects()
            .map(|o| (o.id.clone(), object_display_name(o)))
            .collect();
        to_js(&labels)
    }

    /// Whether orbit navigation should follow the pointer
    #[wasm_bindgen(js_name = orbitEnabled)]
    pub fn orbit_enabled(&self) -> bool {
        self.session.orbit_enabled
    }

    /// Grid line color for the page's grid material
    #[wasm_bindgen(js_name = gridColor)]
    pub fn grid_color(&self) -> String {
        self.session.grid_color.clone()
    }

    /// Mirror the page camera; call from the orbit controls' `change` event
    #[wasm_bindgen(js_name = syncCamera)]
    pub fn sync_camera(&mut self, eye: &[f32], target: &[f32]) -> Result<(), JsError> {
        let (Ok(eye), Ok(target)) = (<[f32; 3]>::try_from(eye), <[f32; 3]>::try_from(target))
        else {
            return Err(JsError::new("Camera eye and target need three coordinates each"));
        };
        self.session.set_camera(eye, target);
        Ok(())
    }

    /// Current code panel width in pixels
    #[wasm_bindgen(js_name = panelWidth)]
    pub fn panel_width(&self) -> f32 {
        self.session.panel.width
    }
}
