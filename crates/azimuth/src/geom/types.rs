//! Tolerances shared by the converter and the traverse run.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Legs shorter than this are treated as zero length: the converter
    /// returns the reference unchanged instead of sin/cos noise.
    pub eps_len: f64,
    /// A traverse closes iff the start/end gap is strictly below this.
    pub closure_tol: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-10,
            closure_tol: 1e-2,
        }
    }
}
