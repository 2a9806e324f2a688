//! Shoelace area of an implicitly closed vertex ring.

use nalgebra::Vector2;

/// Signed shoelace sum over the ring (index `n` wraps to 0); positive for
/// counter-clockwise vertex order. Rings with fewer than 3 vertices have
/// zero area by definition, not by error.
pub fn signed_area(ring: &[Vector2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..ring.len() {
        let p = ring[i];
        let q = ring[(i + 1) % ring.len()];
        acc += p.x * q.y - p.y * q.x;
    }
    acc / 2.0
}

/// Absolute enclosed area; orientation-independent. Duplicate consecutive
/// vertices and collinear runs contribute nothing to the sum.
#[inline]
pub fn polygon_area(ring: &[Vector2<f64>]) -> f64 {
    signed_area(ring).abs()
}
