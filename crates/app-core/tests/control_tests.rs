// Tests for the pure stick-to-velocity mapping and the shared hue palette.

use app_core::{hue_to_rgb, stick_velocity, STICK_TRAVEL_RADIUS};
use glam::Vec2;

#[test]
fn centered_stick_maps_to_rest() {
    assert_eq!(stick_velocity(Vec2::ZERO, 40.0, 2.0), Vec2::ZERO);
}

#[test]
fn stick_scales_linearly_inside_the_travel_radius() {
    let v = stick_velocity(Vec2::new(20.0, 0.0), 40.0, 2.0);
    assert!((v.x - 1.0).abs() < 1e-6);
    assert_eq!(v.y, 0.0);

    let v = stick_velocity(Vec2::new(0.0, -10.0), 40.0, 2.0);
    assert!((v.y + 0.5).abs() < 1e-6);
}

#[test]
fn stick_clamps_to_the_max_speed_beyond_full_travel() {
    let v = stick_velocity(Vec2::new(400.0, 0.0), 40.0, 2.0);
    assert!((v.x - 2.0).abs() < 1e-5);

    // property: magnitude never exceeds the speed, whatever the offset
    for i in 0..100 {
        let angle = i as f32 * 0.37;
        let offset = Vec2::from_angle(angle) * (i as f32 * 3.0);
        let v = stick_velocity(offset, STICK_TRAVEL_RADIUS, 2.0);
        assert!(
            v.length() <= 2.0 + 1e-4,
            "offset {offset:?} produced overspeed {v:?}"
        );
    }
}

#[test]
fn disabled_axis_maps_to_rest() {
    assert_eq!(stick_velocity(Vec2::new(40.0, 0.0), 40.0, 0.0), Vec2::ZERO);
    assert_eq!(stick_velocity(Vec2::new(40.0, 0.0), 0.0, 2.0), Vec2::ZERO);
    assert_eq!(stick_velocity(Vec2::new(40.0, 0.0), 40.0, -1.0), Vec2::ZERO);
}

#[test]
fn stick_preserves_direction() {
    for i in 1..24 {
        let angle = i as f32 * 0.26;
        let offset = Vec2::from_angle(angle) * 100.0;
        let v = stick_velocity(offset, 40.0, 2.0);
        let cos = offset.normalize().dot(v.normalize());
        assert!(cos > 0.9999, "direction drifted at angle {angle}");
    }
}

#[test]
fn hue_to_rgb_hits_the_primaries() {
    let red = hue_to_rgb(0.0);
    assert!(red[0] > red[1] && red[0] > red[2]);
    let green = hue_to_rgb(120.0);
    assert!(green[1] > green[0] && green[1] > green[2]);
    let blue = hue_to_rgb(240.0);
    assert!(blue[2] > blue[0] && blue[2] > blue[1]);
}

#[test]
fn hue_to_rgb_stays_in_unit_range_and_wraps() {
    for i in 0..720 {
        let rgb = hue_to_rgb(i as f32);
        for c in rgb {
            assert!((0.0..=1.0).contains(&c), "hue {i} escaped unit range: {rgb:?}");
        }
    }
    assert_eq!(hue_to_rgb(0.0), hue_to_rgb(360.0));
    assert_eq!(hue_to_rgb(90.0), hue_to_rgb(450.0));
}
