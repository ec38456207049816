//! Sun-position picker: a disc widget mapping pointer position to a
//! directional light's orientation.

pub mod angles;
pub mod drag;
pub mod widget;

pub use angles::{euler_to_sun_position, sun_position_to_euler};
pub use drag::{DragPhase, SunDragController};
pub use widget::SunPositionPicker;
