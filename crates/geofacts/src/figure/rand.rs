//! Random fully connected polygons (radial jitter + replay tokens).
//!
//! Model
//! - `n` equally spaced angles on [0, 2π) with bounded angular and radial
//!   jitter; every pair of vertices is connected, so diagonals cross and the
//!   preprocessor has implicit points to find.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::FigureInput;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PolygonCfg {
    pub vertices: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub radius: f64,
}

impl Default for PolygonCfg {
    fn default() -> Self {
        Self {
            vertices: 6,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            radius: 10.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
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

/// Draw a jittered polygon with all `n(n-1)/2` connections. Vertices are named
/// `P0`, `P1`, ... in angular order.
pub fn draw_connected_polygon(cfg: PolygonCfg, tok: ReplayToken) -> FigureInput {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertices.max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let delta = std::f64::consts::TAU / (n as f64);

    let mut fig = FigureInput::new(format!(
        "connected polygon n={n} seed={} index={}",
        tok.seed, tok.index
    ));
    for k in 0..n {
        let theta = (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let r = cfg.radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
        fig = fig.point(format!("P{k}"), r * theta.cos(), r * theta.sin());
    }
    for i in 0..n {
        for j in (i + 1)..n {
            fig = fig.connect(format!("P{i}"), format!("P{j}"));
        }
    }
    fig
}
