//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Sun-position widget sizing
pub mod sun {
    /// Default widget diameter in pixels
    pub const DEFAULT_DIAMETER: f32 = 160.0;

    /// Radius of the draggable handle
    pub const HANDLE_RADIUS: f32 = 7.0;

    /// Extra hit-test slack around the handle
    pub const HANDLE_HIT_SLACK: f32 = 4.0;

    /// Length of the cardinal ticks on the horizon ring
    pub const TICK_LENGTH: f32 = 6.0;
}

/// Settings panel sizing
pub mod panel {
    /// Default settings panel size
    pub const DEFAULT_SETTINGS_SIZE: [f32; 2] = [380.0, 500.0];

    /// Minimum settings panel size
    pub const MIN_SETTINGS_SIZE: [f32; 2] = [300.0, 200.0];
}
