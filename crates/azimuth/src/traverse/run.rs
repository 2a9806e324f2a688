//! The per-row state machine and run drivers.

use nalgebra::Vector2;

use crate::angle::parse_angle;
use crate::geom::{azimuth_to_point_with, polygon_area, GeomCfg};

use super::types::{
    Closure, RawAzimuth, RowError, RowErrorKind, TraverseOutcome, TraverseResult, TraverseRow,
};

/// Sequential traverse state: the running reference cursor plus the
/// accumulating result and error lists.
///
/// Each accepted row advances the cursor to its computed point; rejected
/// rows leave it where it was. The processor owns the cursor for exactly
/// one run and is consumed by [`finish`](Self::finish), so nothing can
/// leak between runs.
#[derive(Clone, Debug)]
pub struct TraverseProcessor {
    cfg: GeomCfg,
    start: Vector2<f64>,
    reference: Vector2<f64>,
    next_row: usize,
    results: Vec<TraverseResult>,
    errors: Vec<RowError>,
}

impl TraverseProcessor {
    pub fn new(start: Vector2<f64>) -> Self {
        Self::with_cfg(start, GeomCfg::default())
    }

    pub fn with_cfg(start: Vector2<f64>, cfg: GeomCfg) -> Self {
        Self {
            cfg,
            start,
            reference: start,
            next_row: 0,
            results: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Reference the next pushed row will start from.
    #[inline]
    pub fn reference(&self) -> Vector2<f64> {
        self.reference
    }

    /// Process one row. Row indices count every pushed row, accepted or not.
    pub fn push(&mut self, row: &TraverseRow) {
        let index = self.next_row;
        self.next_row += 1;
        if let Err(kind) = self.try_accept(index, row) {
            self.errors.push(RowError { row: index, kind });
        }
    }

    fn try_accept(&mut self, index: usize, row: &TraverseRow) -> Result<(), RowErrorKind> {
        let azimuth = match &row.azimuth {
            RawAzimuth::Text(t) => {
                parse_angle(t).ok_or_else(|| RowErrorKind::AzimuthFormat { text: t.clone() })?
            }
            RawAzimuth::Degrees(v) => *v,
        };
        if !row.distance.is_finite() {
            return Err(RowErrorKind::Distance);
        }
        // Raw-range gate, inclusive [0, 360], before the converter's own
        // modulo normalization ever sees the value. A NaN azimuth from a
        // numeric cell fails this comparison too.
        if !(0.0..=360.0).contains(&azimuth) {
            return Err(RowErrorKind::AzimuthRange { value: azimuth });
        }
        let point = azimuth_to_point_with(azimuth, row.distance, self.reference, self.cfg)?;
        self.results.push(TraverseResult {
            row: index,
            azimuth_raw: row.azimuth.display(),
            azimuth_deg: azimuth,
            distance: row.distance,
            reference: self.reference,
            point,
        });
        self.reference = point;
        Ok(())
    }

    /// Close out the run: ring area and closure diagnostic, if any row was
    /// accepted.
    pub fn finish(self) -> TraverseOutcome {
        let (area, closure) = match self.results.last() {
            None => (None, None),
            Some(last) => {
                let mut ring = Vec::with_capacity(self.results.len() + 1);
                ring.push(self.start);
                ring.extend(self.results.iter().map(|r| r.point));
                let end = last.point;
                let gap = self.start - end;
                let distance = gap.norm();
                let closure = Closure {
                    start: self.start,
                    end,
                    dx: gap.x.abs(),
                    dy: gap.y.abs(),
                    distance,
                    closes: distance < self.cfg.closure_tol,
                };
                (Some(polygon_area(&ring)), Some(closure))
            }
        };
        TraverseOutcome {
            results: self.results,
            errors: self.errors,
            area,
            closure,
        }
    }
}

/// Run a whole row sequence in order under the default tolerances.
pub fn run_traverse(rows: &[TraverseRow], start: Vector2<f64>) -> TraverseOutcome {
    run_traverse_with(rows, start, GeomCfg::default())
}

/// Run a whole row sequence in order.
pub fn run_traverse_with(
    rows: &[TraverseRow],
    start: Vector2<f64>,
    cfg: GeomCfg,
) -> TraverseOutcome {
    let mut processor = TraverseProcessor::with_cfg(start, cfg);
    for row in rows {
        processor.push(row);
    }
    processor.finish()
}
