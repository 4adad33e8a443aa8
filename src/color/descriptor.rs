//! Caller-supplied color descriptors
//!
//! A [`ColorDescriptor`] is any one of the accepted input shapes. Descriptors
//! deserialize from JSON by shape, in the same order the normalizer checks
//! them: number, string, array, object. Deserialization and
//! [`normalize_value`](super::normalize_value) share one classifier, so a
//! JSON value means the same thing in a config file and at runtime.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::CanonicalColor;
use crate::{ColorError, Result};

/// Color description prior to normalization
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorDescriptor {
    /// Single intensity applied to red, green and blue
    Grayscale(f64),
    /// `#` followed by hex digits (read singly below six digits, in pairs
    /// from six on) or `rgb(...)`/`rgba(...)`
    Text(String),
    /// Positional red, green, blue, alpha
    Channels(Vec<f64>),
    /// Named channels, each optional
    Components(ComponentObject),
}

/// Record with independently optional channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl ComponentObject {
    /// Object with red, green and blue set
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            alpha: None,
        }
    }

    /// Object with all four channels set
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            alpha: Some(alpha),
            ..Self::rgb(red, green, blue)
        }
    }

    /// Channels in positional order
    pub fn to_options(self) -> [Option<f64>; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<f64> for ColorDescriptor {
    fn from(value: f64) -> Self {
        Self::Grayscale(value)
    }
}

impl From<u8> for ColorDescriptor {
    fn from(value: u8) -> Self {
        Self::Grayscale(f64::from(value))
    }
}

impl From<&str> for ColorDescriptor {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ColorDescriptor {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<f64>> for ColorDescriptor {
    fn from(value: Vec<f64>) -> Self {
        Self::Channels(value)
    }
}

impl From<&[f64]> for ColorDescriptor {
    fn from(value: &[f64]) -> Self {
        Self::Channels(value.to_vec())
    }
}

impl From<ComponentObject> for ColorDescriptor {
    fn from(value: ComponentObject) -> Self {
        Self::Components(value)
    }
}

impl From<CanonicalColor> for ColorDescriptor {
    fn from(color: CanonicalColor) -> Self {
        Self::Channels(color.to_array().iter().map(|&c| f64::from(c)).collect())
    }
}

impl<'de> Deserialize<'de> for ColorDescriptor {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(&value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<Value> for ColorDescriptor {
    type Error = ColorError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

impl TryFrom<&Value> for ColorDescriptor {
    type Error = ColorError;

    /// Classify an untyped value by shape.
    ///
    /// Object fields that are missing or not numbers are left absent.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Grayscale)
                .ok_or(ColorError::UnrecognizedShape { shape: "number" }),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<_>>>()
                .map(Self::Channels)
                .ok_or(ColorError::UnrecognizedShape {
                    shape: "array with non-numeric entries",
                }),
            Value::Object(fields) => {
                let field = |name: &str| fields.get(name).and_then(Value::as_f64);
                Ok(Self::Components(ComponentObject {
                    red: field("red"),
                    green: field("green"),
                    blue: field("blue"),
                    alpha: field("alpha"),
                }))
            }
            Value::Bool(_) => Err(ColorError::UnrecognizedShape { shape: "boolean" }),
            Value::Null => Err(ColorError::UnrecognizedShape { shape: "null" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_by_shape() {
        let parsed: Vec<ColorDescriptor> =
            serde_json::from_str(r##"[12, "#fff", [1, 2, 3], {"red": 10}]"##).unwrap();

        assert_eq!(parsed[0], ColorDescriptor::Grayscale(12.0));
        assert_eq!(parsed[1], ColorDescriptor::Text("#fff".to_string()));
        assert_eq!(parsed[2], ColorDescriptor::Channels(vec![1.0, 2.0, 3.0]));
        assert_eq!(
            parsed[3],
            ColorDescriptor::Components(ComponentObject {
                red: Some(10.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_boolean() {
        assert!(serde_json::from_str::<ColorDescriptor>("true").is_err());
    }

    #[test]
    fn test_deserialize_array_never_falls_back_to_object() {
        let err = serde_json::from_str::<ColorDescriptor>("[1, null, 3]").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn test_deserialize_object_skips_non_numeric_fields() {
        let parsed: ColorDescriptor = serde_json::from_str(r#"{"red": "x", "green": 5}"#).unwrap();
        assert_eq!(
            parsed,
            ColorDescriptor::Components(ComponentObject {
                green: Some(5.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_deserialize_matches_value_classifier() {
        for value in [
            json!(3),
            json!("rgb(1,2,3)"),
            json!([1, 2]),
            json!({"alpha": 9, "blue": null}),
        ] {
            let typed: ColorDescriptor = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(typed, ColorDescriptor::try_from(value).unwrap());
        }
    }

    #[test]
    fn test_from_canonical_is_array() {
        let descriptor = ColorDescriptor::from(CanonicalColor::new(1, 2, 3, 4));
        assert_eq!(descriptor, ColorDescriptor::Channels(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(
            ColorDescriptor::try_from(&json!(7)).unwrap(),
            ColorDescriptor::Grayscale(7.0)
        );
        assert_eq!(
            ColorDescriptor::try_from(&json!({"green": 5, "blue": "x"})).unwrap(),
            ColorDescriptor::Components(ComponentObject {
                green: Some(5.0),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_try_from_value_rejects_other_shapes() {
        for value in [json!(true), json!(null), json!([1, "2"])] {
            let err = ColorDescriptor::try_from(&value).unwrap_err();
            assert!(matches!(err, ColorError::UnrecognizedShape { .. }));
        }
    }

    #[test]
    fn test_component_constructors() {
        assert_eq!(
            ComponentObject::rgba(1.0, 2.0, 3.0, 4.0).to_options(),
            [Some(1.0), Some(2.0), Some(3.0), Some(4.0)]
        );
        assert_eq!(ComponentObject::rgb(1.0, 2.0, 3.0).alpha, None);
    }
}
