//! egui rendering for the sun-position picker.
//!
//! The widget reads raw pointer events instead of hover-gated responses so
//! an active drag keeps tracking the cursor after it leaves the widget rect;
//! only an actual button release ends it.

use egui::{Color32, Pos2, Response, Sense, Stroke, Ui};
use glam::Vec2;

use super::angles::euler_to_sun_position;
use super::drag::SunDragController;
use crate::constants::sun;
use crate::scene::SceneEntity;

/// Disc-shaped picker mapping pointer position to the sun's orientation.
/// The center is the zenith, the rim is the horizon.
pub struct SunPositionPicker {
    controller: SunDragController,
    diameter: f32,
}

impl Default for SunPositionPicker {
    fn default() -> Self {
        Self::new(sun::DEFAULT_DIAMETER)
    }
}

impl SunPositionPicker {
    pub fn new(diameter: f32) -> Self {
        let radius = diameter / 2.0 - sun::HANDLE_RADIUS;
        Self {
            controller: SunDragController::new(radius),
            diameter,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Render the disc and handle and feed pointer events to the drag
    /// controller, writing orientation updates into `entity`.
    pub fn show(&mut self, ui: &mut Ui, entity: &mut dyn SceneEntity) -> Response {
        let desired = egui::Vec2::splat(self.diameter);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

        let center = rect.center();
        let radius = self.diameter / 2.0 - sun::HANDLE_RADIUS;
        self.controller.set_radius(radius);

        let handle_center = self.handle_screen_position(center, radius, entity.orientation());

        let (pressed, released, press_origin, latest) = ui.input(|i| {
            (
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
            )
        });

        if pressed && !self.controller.is_dragging() {
            if let Some(origin) = press_origin {
                let hit_radius = sun::HANDLE_RADIUS + sun::HANDLE_HIT_SLACK;
                if origin.distance(handle_center) <= hit_radius {
                    self.controller.pointer_down();
                }
            }
        }

        if self.controller.is_dragging() {
            if let Some(pointer) = latest {
                let local = to_widget_space(pointer, center);
                if released {
                    // Final recompute from the release coordinates.
                    self.controller.pointer_up(local, entity);
                } else {
                    self.controller.pointer_move(local, entity);
                }
            }
        }

        // The drag may have moved the sun; recompute before painting.
        let handle_center = self.handle_screen_position(center, radius, entity.orientation());
        self.paint(ui, center, radius, handle_center);

        response
    }

    fn handle_screen_position(&self, center: Pos2, radius: f32, euler: [f32; 3]) -> Pos2 {
        let position = euler_to_sun_position(euler) * radius;
        // Widget space is y-up, screen space is y-down.
        Pos2::new(center.x + position.x, center.y - position.y)
    }

    fn paint(&self, ui: &Ui, center: Pos2, radius: f32, handle_center: Pos2) {
        let painter = ui.painter();
        let ring = Color32::from_rgb(90, 95, 110);

        painter.circle_filled(center, radius, Color32::from_rgb(35, 38, 48));
        painter.circle_stroke(center, radius, Stroke::new(1.5, ring));

        // Cardinal ticks on the horizon ring.
        for (dx, dy) in [(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)] {
            let outer = Pos2::new(center.x + dx * radius, center.y + dy * radius);
            let inner = Pos2::new(
                center.x + dx * (radius - sun::TICK_LENGTH),
                center.y + dy * (radius - sun::TICK_LENGTH),
            );
            painter.line_segment([inner, outer], Stroke::new(1.0, ring));
        }

        // Zenith marker.
        painter.circle_filled(center, 2.0, ring);

        let handle_fill = if self.controller.is_dragging() {
            Color32::from_rgb(255, 210, 80)
        } else {
            Color32::from_rgb(230, 180, 50)
        };
        painter.circle_filled(handle_center, sun::HANDLE_RADIUS, handle_fill);
        painter.circle_stroke(
            handle_center,
            sun::HANDLE_RADIUS,
            Stroke::new(1.0, Color32::from_rgb(40, 30, 5)),
        );
    }
}

/// Screen position to widget-center-relative, y-up coordinates.
fn to_widget_space(position: Pos2, center: Pos2) -> Vec2 {
    Vec2::new(position.x - center.x, center.y - position.y)
}
