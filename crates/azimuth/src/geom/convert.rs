//! Azimuth/distance observation to planar offset, and its inverse.

use nalgebra::Vector2;
use thiserror::Error;

use super::types::GeomCfg;

/// Coordinate magnitude above which results round to 3 decimals instead of
/// 6 (survey-grid coordinates vs. small local frames).
const COARSE_ROUNDING_ABOVE: f64 = 1000.0;

/// Validation failures signaled by [`azimuth_to_point`].
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("distance must be non-negative, got {0}")]
    NegativeDistance(f64),
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

/// Round a computed point to the interchange precision: 3 decimals once
/// either coordinate magnitude exceeds 1000, otherwise 6. The rule is
/// pairwise so both columns of a row carry the same precision.
pub fn round_point(p: Vector2<f64>) -> Vector2<f64> {
    let decimals = if p.x.abs() > COARSE_ROUNDING_ABOVE || p.y.abs() > COARSE_ROUNDING_ABOVE {
        3
    } else {
        6
    };
    let scale = 10f64.powi(decimals);
    Vector2::new((p.x * scale).round() / scale, (p.y * scale).round() / scale)
}

/// Convert one observation into the point it lands on.
///
/// The azimuth is measured clockwise from +Y and normalized by Euclidean
/// modulo 360 here; range validation of the raw value is the caller's gate
/// (see `traverse::TraverseProcessor`). Legs shorter than `cfg.eps_len`
/// return `origin` unchanged.
pub fn azimuth_to_point_with(
    azimuth_deg: f64,
    distance: f64,
    origin: Vector2<f64>,
    cfg: GeomCfg,
) -> Result<Vector2<f64>, ConvertError> {
    if !azimuth_deg.is_finite() {
        return Err(ConvertError::NonFinite("azimuth"));
    }
    if !distance.is_finite() {
        return Err(ConvertError::NonFinite("distance"));
    }
    if distance < 0.0 {
        return Err(ConvertError::NegativeDistance(distance));
    }
    if distance < cfg.eps_len {
        return Ok(origin);
    }
    let rad = azimuth_deg.rem_euclid(360.0).to_radians();
    let offset = Vector2::new(rad.sin(), rad.cos()) * distance;
    Ok(round_point(origin + offset))
}

/// [`azimuth_to_point_with`] under the default tolerances.
#[inline]
pub fn azimuth_to_point(
    azimuth_deg: f64,
    distance: f64,
    origin: Vector2<f64>,
) -> Result<Vector2<f64>, ConvertError> {
    azimuth_to_point_with(azimuth_deg, distance, origin, GeomCfg::default())
}

/// Inverse observation: azimuth (degrees in [0, 360)) and distance of the
/// leg from `a` to `b`. A zero-length leg reports azimuth 0.
pub fn leg_between(a: Vector2<f64>, b: Vector2<f64>) -> (f64, f64) {
    let d = b - a;
    let distance = d.norm();
    if distance == 0.0 {
        return (0.0, 0.0);
    }
    let azimuth = d.x.atan2(d.y).to_degrees().rem_euclid(360.0);
    (azimuth, distance)
}
