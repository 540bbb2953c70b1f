//! Distance sampling and the alpha falloff curves for dot and ring markers.
//!
//! Distances are measured from the pixel center (`+0.5`) to the grid center
//! `floor(size / 2)`. Each curve yields a value in `[0, 255]`.
//!
//! The dot fades linearly over a 2-unit band normalised by `/2`; the ring
//! bands peak at each radius and fall to zero one unit either side.

use crate::DVec2;

/// Distance from the center of pixel `(x, y)` to the center of a `size`-wide grid.
#[inline]
pub fn sample_distance(x: u32, y: u32, size: u32) -> f64 {
    let center = f64::from(size / 2);
    let offset = DVec2::new(
        f64::from(x) - center + 0.5,
        f64::from(y) - center + 0.5,
    );
    offset.length()
}

/// Scale a unit coverage to 8 bits: round half away from zero, then clamp.
#[inline]
pub fn to_alpha(coverage: f64) -> u8 {
    (255.0 * coverage).round().clamp(0.0, 255.0) as u8
}

/// Three-zone falloff for a filled disk of `radius`.
pub fn dot_alpha(dist: f64, radius: f64) -> u8 {
    if dist < radius - 1.0 {
        255
    } else if dist < radius + 1.0 {
        to_alpha(1.0 - (dist - radius + 1.0) / 2.0)
    } else {
        0
    }
}

/// Five-zone falloff for an annulus. The outer band is tested first,
/// then the inner band, then the solid body.
pub fn ring_alpha(dist: f64, inner_radius: f64, outer_radius: f64) -> u8 {
    if within_band(dist, outer_radius) {
        if dist <= outer_radius {
            to_alpha(1.0 - (outer_radius - dist))
        } else {
            to_alpha(1.0 - (dist - outer_radius))
        }
    } else if within_band(dist, inner_radius) {
        if dist >= inner_radius {
            to_alpha(1.0 - (dist - inner_radius))
        } else {
            to_alpha(1.0 - (inner_radius - dist))
        }
    } else if dist > inner_radius && dist < outer_radius {
        255
    } else {
        0
    }
}

#[inline]
fn within_band(dist: f64, radius: f64) -> bool {
    dist >= radius - 1.0 && dist <= radius + 1.0
}
