use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Уникальный идентификатор объекта в сцене
pub type ObjectId = String;

/// Трансформация объекта
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    /// Углы Эйлера в радианах
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Тип примитива, который пользователь может добавить в сцену
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Box,
    Circle,
    Cone,
    Cylinder,
    Dodecahedron,
    Icosahedron,
    Octahedron,
    Plane,
    Ring,
    Sphere,
    Tetrahedron,
    Torus,
    TorusKnot,
}

impl PrimitiveKind {
    /// Все примитивы в порядке выпадающего списка
    pub const ALL: [PrimitiveKind; 13] = [
        PrimitiveKind::Box,
        PrimitiveKind::Circle,
        PrimitiveKind::Cone,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Dodecahedron,
        PrimitiveKind::Icosahedron,
        PrimitiveKind::Octahedron,
        PrimitiveKind::Plane,
        PrimitiveKind::Ring,
        PrimitiveKind::Sphere,
        PrimitiveKind::Tetrahedron,
        PrimitiveKind::Torus,
        PrimitiveKind::TorusKnot,
    ];

    /// Подпись в интерфейсе (и исходное имя для вывода имени объекта)
    pub fn label(&self) -> &'static str {
        match self {
            PrimitiveKind::Box => "Box",
            PrimitiveKind::Circle => "Circle",
            PrimitiveKind::Cone => "Cone",
            PrimitiveKind::Cylinder => "Cylinder",
            PrimitiveKind::Dodecahedron => "Dodecahedron",
            PrimitiveKind::Icosahedron => "Icosahedron",
            PrimitiveKind::Octahedron => "Octahedron",
            PrimitiveKind::Plane => "Plane",
            PrimitiveKind::Ring => "Ring",
            PrimitiveKind::Sphere => "Sphere",
            PrimitiveKind::Tetrahedron => "Tetrahedron",
            PrimitiveKind::Torus => "Torus",
            PrimitiveKind::TorusKnot => "TorusKnot",
        }
    }

    /// Имя конструктора геометрии в three.js
    pub fn geometry_constructor(&self) -> &'static str {
        match self {
            PrimitiveKind::Box => "BoxGeometry",
            PrimitiveKind::Circle => "CircleGeometry",
            PrimitiveKind::Cone => "ConeGeometry",
            PrimitiveKind::Cylinder => "CylinderGeometry",
            PrimitiveKind::Dodecahedron => "DodecahedronGeometry",
            PrimitiveKind::Icosahedron => "IcosahedronGeometry",
            PrimitiveKind::Octahedron => "OctahedronGeometry",
            PrimitiveKind::Plane => "PlaneGeometry",
            PrimitiveKind::Ring => "RingGeometry",
            PrimitiveKind::Sphere => "SphereGeometry",
            PrimitiveKind::Tetrahedron => "TetrahedronGeometry",
            PrimitiveKind::Torus => "TorusGeometry",
            PrimitiveKind::TorusKnot => "TorusKnotGeometry",
        }
    }

    /// Аргументы конструктора геометрии по умолчанию (пустая строка, если аргументов нет)
    pub fn default_arguments(&self) -> &'static str {
        match self {
            PrimitiveKind::Torus => "1, 0.4, 8, 32, Math.PI * 2",
            _ => "",
        }
    }

    /// Плоские примитивы (не имеют толщины)
    pub fn is_flat(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Circle | PrimitiveKind::Plane | PrimitiveKind::Ring
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ошибка разбора названия примитива
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePrimitiveError(pub String);

impl fmt::Display for ParsePrimitiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown primitive '{}'", self.0)
    }
}

impl std::error::Error for ParsePrimitiveError {}

impl FromStr for PrimitiveKind {
    type Err = ParsePrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| ParsePrimitiveError(s.to_string()))
    }
}

/// Вид объекта сцены: пользовательский примитив или служебный объект редактора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "primitive", rename_all = "snake_case")]
pub enum ObjectKind {
    /// Примитив, добавленный пользователем
    Primitive(PrimitiveKind),
    AmbientLight,
    DirectionalLight,
    Grid,
    /// Гизмо перемещения
    Gizmo,
}

impl ObjectKind {
    /// Примитив, если объект пользовательский
    pub fn primitive(&self) -> Option<PrimitiveKind> {
        match self {
            ObjectKind::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Тип объекта для панели свойств
    pub fn type_label(&self) -> &'static str {
        match self {
            ObjectKind::Primitive(kind) => kind.label(),
            ObjectKind::AmbientLight => "AmbientLight",
            ObjectKind::DirectionalLight => "DirectionalLight",
            ObjectKind::Grid => "Grid",
            ObjectKind::Gizmo => "Gizmo",
        }
    }
}

/// Объект сцены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Уникальный идентификатор
    pub id: ObjectId,
    /// Имя объекта (идентификатор переменной в сгенерированном коде)
    pub name: String,
    pub kind: ObjectKind,
    #[serde(default)]
    pub transform: Transform,
}

impl SceneObject {
    /// Создан пользователем (а не редактором)
    pub fn is_user_created(&self) -> bool {
        matches!(self.kind, ObjectKind::Primitive(_))
    }

    /// Служебный объект редактора (свет, сетка, гизмо)
    pub fn is_helper(&self) -> bool {
        !self.is_user_created()
    }
}

/// Переключатели отображения в панели кода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayToggles {
    /// Показывать блок импортов
    pub include_imports: bool,
    /// Показывать шаблонный код сцены/камеры/рендерера
    pub include_boilerplate: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            include_imports: false,
            include_boilerplate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_identity() {
        let t = Transform::new();
        assert_eq!(t.position, [0.0; 3]);
        assert_eq!(t.rotation, [0.0; 3]);
        assert_eq!(t.scale, [1.0; 3]);
        assert_eq!(Transform::default(), t);
    }

    #[test]
    fn test_primitive_label_roundtrip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.label().parse::<PrimitiveKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_primitive_unknown_label() {
        let err = "Tube".parse::<PrimitiveKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown primitive 'Tube'");
    }

    #[test]
    fn test_geometry_constructor_matches_label() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(
                kind.geometry_constructor(),
                format!("{}Geometry", kind.label())
            );
        }
    }

    #[test]
    fn test_only_torus_has_default_arguments() {
        for kind in PrimitiveKind::ALL {
            let has_args = !kind.default_arguments().is_empty();
            assert_eq!(has_args, kind == PrimitiveKind::Torus);
        }
    }

    #[test]
    fn test_helper_marker() {
        let cube = SceneObject {
            id: "a".into(),
            name: "box".into(),
            kind: ObjectKind::Primitive(PrimitiveKind::Box),
            transform: Transform::new(),
        };
        assert!(cube.is_user_created());

        let grid = SceneObject {
            kind: ObjectKind::Grid,
            ..cube.clone()
        };
        assert!(grid.is_helper());
        assert_eq!(grid.kind.primitive(), None);
    }

    #[test]
    fn test_scene_object_serde() {
        let json = r#"{"id": "x", "name": "torus", "kind": {"type": "primitive", "primitive": "Torus"}}"#;
        let obj: SceneObject = serde_json::from_str(json).unwrap();
        assert_eq!(obj.kind, ObjectKind::Primitive(PrimitiveKind::Torus));
        assert_eq!(obj.transform, Transform::new());

        let helper: ObjectKind = serde_json::from_str(r#"{"type": "gizmo"}"#).unwrap();
        assert_eq!(helper, ObjectKind::Gizmo);
    }

    #[test]
    fn test_display_toggles_default() {
        let t = DisplayToggles::default();
        assert!(!t.include_imports);
        assert!(t.include_boilerplate);
    }
}
