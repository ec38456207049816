//! Render-graph settings: descriptor model, category grouping and the
//! editable panel.

pub mod categories;
pub mod descriptor;
pub mod panel;

pub use categories::{compute_categories, Category};
pub use descriptor::{InputDescriptor, InputKind};
pub use panel::RenderGraphSettings;
