//! The nine numeric transform inputs of the properties panel.
//!
//! Field order: position x/y/z, rotation x/y/z (radians), scale x/y/z.

use shared::Transform;
use thiserror::Error;

use crate::codegen::js_number;

/// Number of transform inputs
pub const FIELD_COUNT: usize = 9;

/// Input labels, in field order
pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    "position.x",
    "position.y",
    "position.z",
    "rotation.x",
    "rotation.y",
    "rotation.z",
    "scale.x",
    "scale.y",
    "scale.z",
];

/// Errors from parsing user-typed transform values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformFieldError {
    #[error("Expected {expected} transform fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("Invalid number '{value}' in transform field {index}")]
    InvalidNumber { index: usize, value: String },
}

/// Read a transform into field order
pub fn read_fields(transform: &Transform) -> [f64; FIELD_COUNT] {
    let [px, py, pz] = transform.position;
    let [rx, ry, rz] = transform.rotation;
    let [sx, sy, sz] = transform.scale;
    [px, py, pz, rx, ry, rz, sx, sy, sz]
}

/// Write field values back into a transform
pub fn write_fields(transform: &mut Transform, values: &[f64; FIELD_COUNT]) {
    transform.position = [values[0], values[1], values[2]];
    transform.rotation = [values[3], values[4], values[5]];
    transform.scale = [values[6], values[7], values[8]];
}

/// Values as the inputs display them
pub fn format_fields(transform: &Transform) -> [String; FIELD_COUNT] {
    read_fields(transform).map(js_number)
}

/// Parse raw input strings. Every field must hold a number.
pub fn parse_fields<S: AsRef<str>>(inputs: &[S]) -> Result<[f64; FIELD_COUNT], TransformFieldError> {
    if inputs.len() != FIELD_COUNT {
        return Err(TransformFieldError::FieldCount {
            expected: FIELD_COUNT,
            actual: inputs.len(),
        });
    }

    let mut values = [0.0; FIELD_COUNT];
    for (index, (slot, raw)) in values.iter_mut().zip(inputs).enumerate() {
        let raw = raw.as_ref();
        *slot = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| TransformFieldError::InvalidNumber {
                index,
                value: raw.to_string(),
            })?;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fields_order() {
        let t = Transform {
            position: [1.0, 2.0, 3.0],
            rotation: [0.1, 0.2, 0.3],
            scale: [4.0, 5.0, 6.0],
        };
        assert_eq!(
            read_fields(&t),
            [1.0, 2.0, 3.0, 0.1, 0.2, 0.3, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_write_then_read() {
        let mut t = Transform::new();
        let values = [1.5, -2.0, 0.0, 0.0, 3.14159, 0.0, 1.0, 1.0, 2.0];
        write_fields(&mut t, &values);
        assert_eq!(t.position, [1.5, -2.0, 0.0]);
        assert_eq!(t.rotation, [0.0, 3.14159, 0.0]);
        assert_eq!(t.scale, [1.0, 1.0, 2.0]);
        assert_eq!(read_fields(&t), values);
    }

    #[test]
    fn test_format_fields() {
        let mut t = Transform::new();
        t.position = [0.5, -3.0, 0.0];
        let fields = format_fields(&t);
        assert_eq!(fields[0], "0.5");
        assert_eq!(fields[1], "-3");
        assert_eq!(fields[8], "1");
    }

    #[test]
    fn test_parse_fields_trims() {
        let inputs = [" 1", "2 ", "3", "0", "0", "0", "1", "1", "1"];
        let values = parse_fields(&inputs).unwrap();
        assert_eq!(values[..3], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_fields_invalid_number() {
        let inputs = ["1", "2", "abc", "0", "0", "0", "1", "1", "1"];
        let err = parse_fields(&inputs).unwrap_err();
        assert_eq!(
            err,
            TransformFieldError::InvalidNumber {
                index: 2,
                value: "abc".into()
            }
        );
        assert_eq!(FIELD_LABELS[2], "position.z");
    }

    #[test]
    fn test_parse_fields_empty_is_invalid() {
        let inputs = ["", "0", "0", "0", "0", "0", "1", "1", "1"];
        assert!(matches!(
            parse_fields(&inputs),
            Err(TransformFieldError::InvalidNumber { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_fields_count() {
        let err = parse_fields(&["1", "2"]).unwrap_err();
        assert_eq!(err.to_string(), "Expected 9 transform fields, got 2");
    }
}
