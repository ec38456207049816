//! Boundary to the external rendering SDK.
//!
//! The scene graph, streaming transport and entity replication all live in
//! the external SDK; this crate only needs two narrow capabilities from it:
//! a mutable entity orientation the sun widget writes into, and a fetch of
//! the flat render-graph description the settings panel is built from.

use crate::widgets::settings::InputDescriptor;
use thiserror::Error;

/// Errors crossing the SDK boundary. The widgets themselves never retry;
/// callers log and leave the affected panel empty.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to fetch asset description for '{asset_id}': {reason}")]
    Fetch { asset_id: String, reason: String },

    #[error("malformed asset description: {0}")]
    MalformedDescription(#[from] serde_json::Error),

    #[error("entity '{0}' not found in the scene")]
    MissingEntity(String),
}

/// An addressable scene object with a mutable Euler orientation, degrees,
/// `[pitch, yaw, roll]`. Writes are fire-and-forget; the SDK owns delivery.
pub trait SceneEntity {
    fn orientation(&self) -> [f32; 3];
    fn set_orientation(&mut self, euler: [f32; 3]);
}

/// Source of render-graph descriptions: a flat descriptor list keyed by an
/// asset id and an access token.
pub trait AssetDescriptionSource {
    fn asset_description(
        &self,
        asset_id: &str,
        token: &str,
    ) -> Result<Vec<InputDescriptor>, SceneError>;
}

/// In-process entity used by the demo application and tests.
#[derive(Debug, Clone, Default)]
pub struct LocalEntity {
    orientation: [f32; 3],
}

impl LocalEntity {
    pub fn with_orientation(euler: [f32; 3]) -> Self {
        Self { orientation: euler }
    }
}

impl SceneEntity for LocalEntity {
    fn orientation(&self) -> [f32; 3] {
        self.orientation
    }

    fn set_orientation(&mut self, euler: [f32; 3]) {
        self.orientation = euler;
    }
}

/// Description source backed by an in-memory JSON document, for the demo and
/// tests. A real deployment implements [`AssetDescriptionSource`] on top of
/// the SDK's transport instead.
pub struct EmbeddedDescriptionSource {
    document: &'static str,
}

impl EmbeddedDescriptionSource {
    pub fn new(document: &'static str) -> Self {
        Self { document }
    }
}

impl AssetDescriptionSource for EmbeddedDescriptionSource {
    fn asset_description(
        &self,
        _asset_id: &str,
        _token: &str,
    ) -> Result<Vec<InputDescriptor>, SceneError> {
        Ok(serde_json::from_str(self.document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_entity_round_trips_orientation() {
        let mut entity = LocalEntity::default();
        entity.set_orientation([-45.0, 90.0, 0.0]);
        assert_eq!(entity.orientation(), [-45.0, 90.0, 0.0]);
    }

    #[test]
    fn test_embedded_source_rejects_malformed_documents() {
        let source = EmbeddedDescriptionSource::new("not json");
        let result = source.asset_description("graph", "token");
        assert!(matches!(result, Err(SceneError::MalformedDescription(_))));
    }
}
