//! Row, result, and diagnostic types for a traverse run.

use nalgebra::Vector2;
use thiserror::Error;

use crate::geom::ConvertError;

/// Azimuth as it arrives from tabular input: free-form text, or a value
/// that is already numeric and bypasses the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum RawAzimuth {
    Text(String),
    Degrees(f64),
}

impl RawAzimuth {
    /// Original form, for the result table and error messages.
    pub fn display(&self) -> String {
        match self {
            RawAzimuth::Text(t) => t.clone(),
            RawAzimuth::Degrees(v) => v.to_string(),
        }
    }
}

impl From<&str> for RawAzimuth {
    fn from(t: &str) -> Self {
        RawAzimuth::Text(t.to_string())
    }
}

impl From<String> for RawAzimuth {
    fn from(t: String) -> Self {
        RawAzimuth::Text(t)
    }
}

impl From<f64> for RawAzimuth {
    fn from(v: f64) -> Self {
        RawAzimuth::Degrees(v)
    }
}

/// One leg of a traverse as supplied by the caller. Both fields are
/// required; ingest layers must reject rows with missing cells before
/// they get here.
#[derive(Clone, Debug)]
pub struct TraverseRow {
    pub azimuth: RawAzimuth,
    pub distance: f64,
}

impl TraverseRow {
    pub fn new(azimuth: impl Into<RawAzimuth>, distance: f64) -> Self {
        Self {
            azimuth: azimuth.into(),
            distance,
        }
    }
}

/// One accepted leg: the inputs, the reference it started from, and the
/// point it produced.
#[derive(Clone, Debug)]
pub struct TraverseResult {
    /// Index of the originating input row.
    pub row: usize,
    pub azimuth_raw: String,
    pub azimuth_deg: f64,
    pub distance: f64,
    /// Reference point used for this leg (the previous accepted point).
    pub reference: Vector2<f64>,
    pub point: Vector2<f64>,
}

/// Why a row was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RowErrorKind {
    #[error("invalid azimuth format: {text:?}")]
    AzimuthFormat { text: String },
    #[error("azimuth {value} out of range [0, 360]")]
    AzimuthRange { value: f64 },
    #[error("distance is not a finite number")]
    Distance,
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// A rejected row, keyed by its input index. Rejections never abort the
/// run; they ride along with the successful results.
#[derive(Clone, Debug, PartialEq)]
pub struct RowError {
    pub row: usize,
    pub kind: RowErrorKind,
}

impl RowError {
    /// Human-readable message for logs and the UI error list.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Closure diagnostic of a finished traverse: how far the final point
/// landed from the start.
#[derive(Clone, Copy, Debug)]
pub struct Closure {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    /// Absolute per-axis errors.
    pub dx: f64,
    pub dy: f64,
    /// Euclidean gap between start and end.
    pub distance: f64,
    /// Strictly below the configured tolerance?
    pub closes: bool,
}

/// Everything one run produces. `area` and `closure` are present iff at
/// least one row was accepted; with no accepted rows no ring exists.
#[derive(Clone, Debug)]
pub struct TraverseOutcome {
    pub results: Vec<TraverseResult>,
    pub errors: Vec<RowError>,
    pub area: Option<f64>,
    pub closure: Option<Closure>,
}
