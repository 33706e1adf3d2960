//! Pure input mapping shared by the frontends.

use glam::Vec2;

use crate::constants::{RING_LIGHTNESS, RING_SATURATION};

/// Map a raw stick offset to a velocity.
///
/// The offset is clamped to `travel_radius` before scaling, so the resulting
/// magnitude never exceeds `max_speed`. A disabled axis (zero radius or zero
/// speed) always maps to rest.
#[inline]
pub fn stick_velocity(offset: Vec2, travel_radius: f32, max_speed: f32) -> Vec2 {
    if travel_radius <= 0.0 || max_speed <= 0.0 {
        return Vec2::ZERO;
    }
    let len = offset.length();
    if len <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let clamped = if len > travel_radius {
        offset * (travel_radius / len)
    } else {
        offset
    };
    clamped * (max_speed / travel_radius)
}

/// Convert a hue on the ring palette to rgb for renderers that cannot speak
/// `hsl()` strings. Saturation and lightness are fixed to the shared palette.
pub fn hue_to_rgb(hue_deg: f32) -> [f32; 3] {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * RING_LIGHTNESS - 1.0).abs()) * RING_SATURATION;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = RING_LIGHTNESS - c / 2.0;
    [r + m, g + m, b + m]
}
