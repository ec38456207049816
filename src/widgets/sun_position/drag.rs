//! Pointer-drag state machine for the sun-position widget.
//!
//! Positions are in pixels, relative to the widget center. While a drag is
//! active every pointer move writes the converted orientation straight into
//! the scene entity; delivery is fire-and-forget, the external SDK owns it.

use glam::Vec2;

use super::angles::sun_position_to_euler;
use crate::scene::SceneEntity;

/// Current phase of the pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Tracks a pointer drag over the sun disc and pushes orientation updates
/// into the target entity.
#[derive(Debug, Clone)]
pub struct SunDragController {
    phase: DragPhase,
    /// Widget radius in pixels; pointer positions are clamped to this.
    radius: f32,
}

impl SunDragController {
    pub fn new(radius: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            radius,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Clamp a raw pointer position to the widget disc: positions past the
    /// rim are projected back onto it along the same angle, positions inside
    /// keep their true distance as the elevation value.
    fn clamp_to_disc(&self, position: Vec2) -> Vec2 {
        let distance = position.length();
        if distance > self.radius && distance > 0.0 {
            position * (self.radius / distance)
        } else {
            position
        }
    }

    fn write_orientation(&self, position: Vec2, target: &mut dyn SceneEntity) {
        let clamped = self.clamp_to_disc(position);
        let normalized = clamped / self.radius;
        target.set_orientation(sun_position_to_euler(normalized));
    }

    /// Pointer pressed over the handle; begins a drag. The entity is only
    /// written once the pointer actually moves (or on release).
    pub fn pointer_down(&mut self) {
        self.phase = DragPhase::Dragging;
    }

    /// Pointer moved. Updates the entity on every move while dragging;
    /// ignored while idle. The pointer leaving the widget does NOT end the
    /// drag, so moves keep flowing until an explicit pointer-up.
    pub fn pointer_move(&mut self, position: Vec2, target: &mut dyn SceneEntity) {
        if self.phase == DragPhase::Dragging {
            self.write_orientation(position, target);
        }
    }

    /// Pointer released. Recomputes the orientation once more from the
    /// up-event coordinates so the resting value matches them exactly, then
    /// returns to idle.
    pub fn pointer_up(&mut self, position: Vec2, target: &mut dyn SceneEntity) {
        if self.phase == DragPhase::Dragging {
            self.write_orientation(position, target);
            self.phase = DragPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every orientation write so per-move behavior is observable.
    #[derive(Default)]
    struct RecordingEntity {
        orientation: [f32; 3],
        writes: Vec<[f32; 3]>,
    }

    impl SceneEntity for RecordingEntity {
        fn orientation(&self) -> [f32; 3] {
            self.orientation
        }

        fn set_orientation(&mut self, euler: [f32; 3]) {
            self.orientation = euler;
            self.writes.push(euler);
        }
    }

    #[test]
    fn test_moves_while_idle_are_ignored() {
        let mut controller = SunDragController::new(100.0);
        let mut entity = RecordingEntity::default();

        controller.pointer_move(Vec2::new(10.0, 10.0), &mut entity);
        assert!(entity.writes.is_empty());
        assert_eq!(controller.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_every_move_writes_orientation() {
        let mut controller = SunDragController::new(100.0);
        let mut entity = RecordingEntity::default();

        controller.pointer_down();
        controller.pointer_move(Vec2::ZERO, &mut entity);
        controller.pointer_move(Vec2::new(25.0, 0.0), &mut entity);
        controller.pointer_move(Vec2::new(50.0, 0.0), &mut entity);
        controller.pointer_up(Vec2::new(50.0, 0.0), &mut entity);

        // Three moves + final recompute on up.
        assert_eq!(entity.writes.len(), 4);
        assert_eq!(entity.writes[0], [-90.0, 0.0, 0.0]);
        assert!((entity.writes[2][0] + 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_positions_past_the_rim_are_clamped() {
        let mut controller = SunDragController::new(100.0);
        let mut entity = RecordingEntity::default();

        controller.pointer_down();
        controller.pointer_move(Vec2::new(300.0, 0.0), &mut entity);

        // Clamped to the rim: horizon pitch, not below it.
        let last = *entity.writes.last().unwrap();
        assert!(last[0].abs() < 1e-3, "pitch was {}", last[0]);
        assert!((last[1] - 90.0).abs() < 1e-3, "yaw was {}", last[1]);
    }

    #[test]
    fn test_drag_survives_leaving_the_widget() {
        let mut controller = SunDragController::new(100.0);
        let mut entity = RecordingEntity::default();

        controller.pointer_down();
        // Way outside the widget rect; no leave event exists, the drag holds.
        controller.pointer_move(Vec2::new(1000.0, -2000.0), &mut entity);
        assert!(controller.is_dragging());

        controller.pointer_up(Vec2::new(1000.0, -2000.0), &mut entity);
        assert_eq!(controller.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_up_recomputes_from_up_coordinates() {
        let mut controller = SunDragController::new(100.0);
        let mut entity = RecordingEntity::default();

        controller.pointer_down();
        controller.pointer_move(Vec2::new(50.0, 0.0), &mut entity);
        controller.pointer_up(Vec2::new(0.0, 50.0), &mut entity);

        let last = *entity.writes.last().unwrap();
        assert!((last[0] + 45.0).abs() < 1e-3);
        assert!(last[1].abs() < 1e-3, "yaw was {}", last[1]);
    }

    #[test]
    fn test_up_while_idle_is_a_no_op() {
        let mut controller = SunDragController::new(100.0);
        let mut entity = RecordingEntity::default();

        controller.pointer_up(Vec2::new(10.0, 0.0), &mut entity);
        assert!(entity.writes.is_empty());
    }
}
