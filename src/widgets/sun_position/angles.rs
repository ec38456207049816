//! Conversions between a normalized 2D sun-widget position and an Euler
//! orientation in degrees.
//!
//! The widget plane is centered on the zenith: distance 0 from the center is
//! straight overhead (pitch -90), distance 1 is the horizon (pitch 0). Yaw 0
//! points toward screen-up, compass style.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Convert a normalized widget position into `[pitch, yaw, roll]` degrees.
///
/// Pitch maps affinely from the distance to the widget center:
/// `(1 - distance) * -90`. This is a deliberate UX mapping, not a spherical
/// projection. No clamping is performed; positions outside the unit disc
/// yield positive (below-horizon) pitches, and callers are expected to
/// pre-clamp when that matters. Roll is always 0.
pub fn sun_position_to_euler(position: Vec2) -> [f32; 3] {
    let distance = position.length();

    let yaw = if distance == 0.0 {
        // Zenith: yaw is undefined there, pick 0.
        0.0
    } else {
        let normalized = position / distance;
        normalized.x.atan2(normalized.y).to_degrees()
    };

    let pitch = (1.0 - distance) * -90.0;

    [pitch, yaw, 0.0]
}

/// Inverse of [`sun_position_to_euler`]: place an orientation back on the
/// widget plane. Only pitch and yaw are read; the third component is ignored.
pub fn euler_to_sun_position(euler: [f32; 3]) -> Vec2 {
    let yaw_rad = euler[1].to_radians();
    let distance = euler[0] / 90.0 + 1.0;

    // The quarter-turn offset aligns yaw 0 with screen-up.
    Vec2::new(
        -(yaw_rad + FRAC_PI_2).cos() * distance,
        (yaw_rad + FRAC_PI_2).sin() * distance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    #[test]
    fn test_center_is_zenith() {
        let euler = sun_position_to_euler(Vec2::ZERO);
        assert_eq!(euler, [-90.0, 0.0, 0.0]);
    }

    #[test]
    fn test_positive_x_axis_is_horizon_east() {
        let euler = sun_position_to_euler(Vec2::new(1.0, 0.0));
        assert!(euler[0].abs() < TOLERANCE, "pitch was {}", euler[0]);
        assert!((euler[1] - 90.0).abs() < TOLERANCE, "yaw was {}", euler[1]);
        assert_eq!(euler[2], 0.0);
    }

    #[test]
    fn test_yaw_on_y_axis_ignores_magnitude() {
        for magnitude in [0.1, 0.5, 1.0] {
            let up = sun_position_to_euler(Vec2::new(0.0, magnitude));
            assert!(up[1].abs() < TOLERANCE, "yaw was {}", up[1]);

            let down = sun_position_to_euler(Vec2::new(0.0, -magnitude));
            assert!((down[1].abs() - 180.0).abs() < TOLERANCE, "yaw was {}", down[1]);
        }
    }

    #[test]
    fn test_pitch_scales_linearly_with_distance() {
        let half = sun_position_to_euler(Vec2::new(0.5, 0.0));
        assert!((half[0] + 45.0).abs() < TOLERANCE, "pitch was {}", half[0]);

        // Outside the disc the pitch goes below the horizon; no clamping.
        let outside = sun_position_to_euler(Vec2::new(1.5, 0.0));
        assert!((outside[0] - 45.0).abs() < TOLERANCE, "pitch was {}", outside[0]);
    }

    #[test]
    fn test_round_trip_interior_points() {
        for pitch in [-80.0, -45.0, -10.0, 0.0, 30.0, 80.0] {
            for yaw in [-170.0, -90.0, -15.0, 0.0, 45.0, 120.0, 179.0] {
                let position = euler_to_sun_position([pitch, yaw, 0.0]);
                let euler = sun_position_to_euler(position);
                assert!(
                    (euler[0] - pitch).abs() < TOLERANCE,
                    "pitch {} -> {}",
                    pitch,
                    euler[0]
                );
                assert!(
                    (euler[1] - yaw).abs() < TOLERANCE,
                    "yaw {} -> {}",
                    yaw,
                    euler[1]
                );
            }
        }
    }

    #[test]
    fn test_zenith_maps_back_to_center() {
        let position = euler_to_sun_position([-90.0, 123.0, 0.0]);
        assert!(position.length() < TOLERANCE);
    }
}
