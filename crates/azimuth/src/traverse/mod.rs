//! Traverse orchestration: chain observations into a polygon.
//!
//! Purpose
//! - Drive raw (azimuth, distance) rows through the angle parser and the
//!   converter in row order, propagating the running reference point.
//! - Isolate per-row failures: a rejected row is recorded with its index
//!   and skipped without advancing the reference, so good rows always make
//!   it into the result (partial success is the norm).
//! - On finish, hand the ring `[start] + accepted points` to the shoelace
//!   area and derive the closure diagnostic.
//!
//! Sequencing is semantically serial: each accepted leg's point is the
//! next leg's reference, so rows are never reordered or recomputed against
//! the start point. Independent runs share no state.

mod run;
mod types;

pub use run::{run_traverse, run_traverse_with, TraverseProcessor};
pub use types::{
    Closure, RawAzimuth, RowError, RowErrorKind, TraverseOutcome, TraverseResult, TraverseRow,
};
