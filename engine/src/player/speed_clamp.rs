//! Horizontal speed cap, applied after both the ground and the air model.

use glam::Vec3;

/// Rescale `horizontal` to exactly `max_speed` if it is faster, keeping direction.
///
/// Returns the clamped vector and whether the cap engaged.
pub fn clamp_horizontal(horizontal: Vec3, max_speed: f32) -> (Vec3, bool) {
    let speed = horizontal.length();
    if speed > max_speed {
        (horizontal / speed * max_speed, true)
    } else {
        (horizontal, false)
    }
}
