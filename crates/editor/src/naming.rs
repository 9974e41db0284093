//! Default object names.
//!
//! Names double as variable identifiers in the exported listing, so they are
//! lowercased, stripped of whitespace and never start with a digit.

use shared::PrimitiveKind;

/// Derive an identifier-like name from a primitive label.
pub fn derive_name(label: &str) -> String {
    let mut name: String = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }

    name
}

/// Default name for a newly added primitive
pub fn default_name(kind: PrimitiveKind) -> String {
    derive_name(kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_name_lowercases() {
        assert_eq!(derive_name("TorusKnot"), "torusknot");
        assert_eq!(derive_name("Box"), "box");
    }

    #[test]
    fn test_derive_name_digit_prefix() {
        assert_eq!(derive_name("3dThing"), "_3dthing");
        assert_eq!(derive_name("_3d"), "_3d");
    }

    #[test]
    fn test_derive_name_strips_whitespace() {
        assert_eq!(derive_name("My Shape"), "myshape");
        assert_eq!(derive_name(" 2 Tall\tBoxes "), "_2tallboxes");
    }

    #[test]
    fn test_derive_name_empty() {
        assert_eq!(derive_name(""), "");
    }

    #[test]
    fn test_default_names_for_all_primitives() {
        let names: Vec<String> = PrimitiveKind::ALL.iter().map(|k| default_name(*k)).collect();
        assert_eq!(names[0], "box");
        assert_eq!(names[12], "torusknot");
        assert!(names
            .iter()
            .all(|n| n.chars().all(|c| c.is_ascii_lowercase())));
    }
}
