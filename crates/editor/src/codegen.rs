//! three.js listing generation.
//!
//! The listing is a pure function of the ordered scene objects, the ignore set
//! and the display toggles. Every call rebuilds the whole text.

use std::collections::HashSet;

use shared::{DisplayToggles, ObjectId, PrimitiveKind, SceneObject};

/// Material color used for every exported mesh
pub const MATERIAL_COLOR: &str = "0x00ff00";

/// Emitted first when imports are enabled
pub const IMPORTS_BLOCK: &str = "import * as THREE from \"https://cdn.skypack.dev/three\";\n";

/// Scene, camera, renderer and light setup, emitted when boilerplate is enabled
pub const BOILERPLATE_BLOCK: &str = "\
// Root of the scene graph
const scene = new THREE.Scene();

// Perspective camera matching the editor viewport
const camera = new THREE.PerspectiveCamera(60, window.innerWidth / window.innerHeight, 1, 10000);

// WebGL renderer drawing into a full-window canvas
const renderer = new THREE.WebGLRenderer({ antialias: true });
renderer.setSize(window.innerWidth, window.innerHeight);
// Background color
renderer.setClearColor(new THREE.Color(\"black\"), 1);

// Attach the canvas to the page
document.body.appendChild(renderer.domElement);

// Lighting
const light = new THREE.AmbientLight(0xffffff);
scene.add(light);
";

/// Identifiers of editor-internal objects that never appear in the listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    ids: HashSet<ObjectId>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ObjectId) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ObjectId> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = ObjectId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Display target for the generated listing.
///
/// `replace_text` drops whatever the surface showed before, including any
/// highlighting markup, so `highlight` has to run again after every call.
pub trait OutputSurface {
    /// Replace the whole content with plain text
    fn replace_text(&mut self, text: &str);
    /// Apply syntax highlighting to the current text
    fn highlight(&mut self);
    /// Current plain text
    fn text(&self) -> &str;
}

/// Format a number the way JavaScript's `Number#toString` prints it.
///
/// Shortest round-trip digits; exponent form (`1e+21`, `1.5e-7`) outside
/// `1e-6 <= |value| < 1e21`.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if !(1e-6..1e21).contains(&value.abs()) {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

fn vector_args(v: &[f64; 3]) -> String {
    format!("{}, {}, {}", js_number(v[0]), js_number(v[1]), js_number(v[2]))
}

/// Construction code for a single object
fn object_block(object: &SceneObject, kind: PrimitiveKind) -> String {
    let name = &object.name;
    let t = &object.transform;

    format!(
        "const {name}Geometry = new THREE.{ctor}({args});\n\
         const {name}Material = new THREE.MeshBasicMaterial({{ color: {MATERIAL_COLOR} }});\n\
         const {name} = new THREE.Mesh({name}Geometry, {name}Material);\n\
         {name}.position.set({position});\n\
         {name}.rotation.set({rotation});\n\
         {name}.scale.set({scale});\n\
         scene.add({name});\n",
        ctor = kind.geometry_constructor(),
        args = kind.default_arguments(),
        position = vector_args(&t.position),
        rotation = vector_args(&t.rotation),
        scale = vector_args(&t.scale),
    )
}

/// Objects that end up in the listing, in scene order
pub fn exported_objects<'a>(
    objects: &'a [SceneObject],
    ignore: &'a IgnoreSet,
) -> impl Iterator<Item = (&'a SceneObject, PrimitiveKind)> + 'a {
    objects
        .iter()
        .filter(move |object| !ignore.contains(&object.id))
        .filter_map(|object| object.kind.primitive().map(|kind| (object, kind)))
}

/// Render the full listing.
///
/// Blocks (imports, boilerplate, one per exported object) each end with a
/// newline and are separated by one blank line.
pub fn render_listing(
    objects: &[SceneObject],
    ignore: &IgnoreSet,
    toggles: DisplayToggles,
) -> String {
    let mut blocks: Vec<String> = Vec::new();

    if toggles.include_imports {
        blocks.push(IMPORTS_BLOCK.to_string());
    }
    if toggles.include_boilerplate {
        blocks.push(BOILERPLATE_BLOCK.to_string());
    }
    for (object, kind) in exported_objects(objects, ignore) {
        blocks.push(object_block(object, kind));
    }

    blocks.join("\n")
}

/// Re-render the listing into `surface` and highlight it.
pub fn regenerate<S: OutputSurface + ?Sized>(
    surface: &mut S,
    objects: &[SceneObject],
    ignore: &IgnoreSet,
    toggles: DisplayToggles,
) {
    let listing = render_listing(objects, ignore, toggles);
    tracing::trace!(bytes = listing.len(), "listing regenerated");
    surface.replace_text(&listing);
    surface.highlight();
}
