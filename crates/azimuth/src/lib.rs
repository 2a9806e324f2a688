//! Traverse engine: azimuth/distance observations to planar coordinates.
//!
//! Purpose
//! - Normalize free-form angle notation (DMS in several delimiter styles,
//!   bare decimals, comma or period separators) into decimal degrees.
//! - Convert a single azimuth/distance observation into an offset from a
//!   reference point (clockwise-from-north convention).
//! - Chain observations into a traverse: each accepted leg's point becomes
//!   the next leg's reference, rejected rows are recorded and skipped, and
//!   the finished ring gets a shoelace area and a closure diagnostic.
//!
//! The crate is a pure computation library: no I/O, no global state, and
//! identical inputs produce identical outcomes. Front ends (the `cli`
//! crate, export tooling) consume [`api`] and render the result table
//! themselves.
//!
//! Code cross-refs: `angle::parse_angle`, `geom::azimuth_to_point`,
//! `geom::polygon_area`, `traverse::TraverseProcessor`.

pub mod angle;
pub mod api;
pub mod geom;
pub mod traverse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Planar points are nalgebra vectors throughout; keep the short alias
// callers and tests use.
pub use geom::GeomCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::*;
    pub use nalgebra::Vector2 as Vec2;
}
