//! Tolerance for all approximate comparisons (internal).
//!
//! Policy
//! - One fixed constant. Coordinates, lengths, slopes and determinants are all
//!   compared against it; nothing else in the crate carries its own epsilon.

/// Absolute tolerance used by [`approx_eq`](super::approx_eq) and the hash quantization.
pub const EPS: f64 = 1e-4;
