//! Random closed loops (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sampler of simple closed polygons for benches and
//!   round-trip property tests: draw a loop, derive its azimuth/distance
//!   legs, and re-traversing the legs must land back on the loop.
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) with bounded angular and radial
//!   jitter around a configurable center. The angular jitter stays below
//!   half the base spacing, so vertices come back in CCW order and the
//!   loop is simple by construction.
//! - Vertices are snapped to the interchange rounding grid so a traverse
//!   over `legs_of_loop` reproduces them exactly.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::convert::{leg_between, round_point};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Loop sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct LoopCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude); radii are `base_radius * (1 + u)`
    /// with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Loop center (e.g. a survey grid reference like (1000, 1000)).
    pub center: Vector2<f64>,
}

impl Default for LoopCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 50.0,
            center: Vector2::new(0.0, 0.0),
        }
    }
}

/// Replay token making draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one simple closed loop as a CCW vertex ring around `cfg.center`.
pub fn draw_closed_loop(cfg: LoopCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            round_point(cfg.center + Vector2::new(th.cos() * r, th.sin() * r))
        })
        .collect()
}

/// Azimuth/distance legs walking the ring from vertex 0 all the way back
/// to vertex 0. The closing leg is included, so a traverse over the result
/// ends where it started.
pub fn legs_of_loop(ring: &[Vector2<f64>]) -> Vec<(f64, f64)> {
    (0..ring.len())
        .map(|i| leg_between(ring[i], ring[(i + 1) % ring.len()]))
        .collect()
}
