//! Planar geometry for azimuth/distance observations.
//!
//! Purpose
//! - `azimuth_to_point`: one observation (azimuth clockwise from north,
//!   non-negative distance) becomes an offset from a reference point.
//! - `polygon_area` / `signed_area`: shoelace area of an implicitly closed
//!   vertex ring.
//! - `rand`: deterministic closed-loop sampler for benches and round-trip
//!   property tests.
//!
//! Conventions
//! - Azimuth 0° points along +Y ("north"), 90° along +X. The converter
//!   normalizes by Euclidean modulo 360 as defense in depth; the traverse
//!   layer rejects raw values outside [0, 360] before calling in here.
//! - Computed points are rounded to the interchange precision (see
//!   `round_point`); intermediate math stays at full f64.

pub mod rand;

mod area;
mod convert;
mod types;

pub use area::{polygon_area, signed_area};
pub use convert::{azimuth_to_point, azimuth_to_point_with, leg_between, round_point, ConvertError};
pub use types::GeomCfg;

#[cfg(test)]
mod tests;
