//! Reusable widgets for driving a remote-rendered scene.

pub mod settings;
pub mod sun_position;
