//! Skylight widget library
//!
//! UI widgets for remote-rendered 3D scenes: a sun-position picker that
//! drives a directional light's orientation, and a render-graph settings
//! panel built from a remotely-described parameter list. The scene itself
//! (streaming, entities, rendering) belongs to the external SDK; this crate
//! only talks to it through the traits in [`scene`].

pub mod constants;
pub mod scene;
pub mod widgets;

// Re-export commonly used types
pub use scene::{AssetDescriptionSource, LocalEntity, SceneEntity, SceneError};
pub use widgets::settings::{compute_categories, Category, InputDescriptor, InputKind, RenderGraphSettings};
pub use widgets::sun_position::{euler_to_sun_position, sun_position_to_euler, SunPositionPicker};
