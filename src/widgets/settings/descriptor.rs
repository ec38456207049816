//! Data model for the remote render-graph description document.
//!
//! The SDK exposes every tunable render-graph parameter as a flat list of
//! descriptors; each one carries a value kind tag, current/default values
//! and a category path used to build the settings tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of value kinds a descriptor can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Color,
    String,
}

impl InputKind {
    /// Number of scalar components for the vector-ish kinds.
    pub fn component_count(self) -> usize {
        match self {
            InputKind::Vec2 => 2,
            InputKind::Vec3 => 3,
            InputKind::Vec4 | InputKind::Color => 4,
            _ => 1,
        }
    }
}

/// One tunable setting as described by the remote document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub native_type: String,
    pub value: Value,
    pub default: Value,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Root-to-leaf path through the category hierarchy; empty means the
    /// descriptor belongs directly to the root.
    #[serde(default)]
    pub categories: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_parses_from_remote_document() {
        let document = json!([
            {
                "type": "float",
                "nativeType": "float",
                "value": 0.4,
                "default": 0.5,
                "name": "Density",
                "description": "Fog density",
                "categories": ["Environment", "Fog"]
            },
            {
                "type": "bool",
                "nativeType": "bool",
                "value": true,
                "default": true,
                "name": "Fog",
                "categories": ["Environment", "Fog"]
            }
        ]);

        let descriptors: Vec<InputDescriptor> =
            serde_json::from_value(document).expect("document should parse");
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].kind, InputKind::Float);
        assert_eq!(descriptors[0].categories, ["Environment", "Fog"]);
        assert_eq!(descriptors[1].kind, InputKind::Bool);
        // Description is optional in the document.
        assert!(descriptors[1].description.is_empty());
    }

    #[test]
    fn test_component_counts() {
        assert_eq!(InputKind::Float.component_count(), 1);
        assert_eq!(InputKind::Vec3.component_count(), 3);
        assert_eq!(InputKind::Color.component_count(), 4);
    }
}
