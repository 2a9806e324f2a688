//! Curated flat API surface for front ends.
//!
//! Dashboard-style callers consume four operations: parse an angle,
//! convert one observation, measure a ring, run a traverse. Prefer these
//! re-exports over deep module paths; the module layout may shift without
//! this surface moving.

pub use crate::angle::{dms_to_degrees, parse_angle};
pub use crate::geom::rand::{draw_closed_loop, legs_of_loop, LoopCfg, ReplayToken, VertexCount};
pub use crate::geom::{
    azimuth_to_point, azimuth_to_point_with, leg_between, polygon_area, round_point, signed_area,
    ConvertError, GeomCfg,
};
pub use crate::traverse::{
    run_traverse, run_traverse_with, Closure, RawAzimuth, RowError, RowErrorKind, TraverseOutcome,
    TraverseProcessor, TraverseResult, TraverseRow,
};
