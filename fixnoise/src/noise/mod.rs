//! Fixed-point simplex noise in one, two and three dimensions.
//!
//! This module provides the noise primitives:
//!
//! - [`noise1`] - 1D simplex noise
//! - [`noise2`] - 2D simplex noise on a triangular lattice
//! - [`noise3`] - 3D simplex noise on a tetrahedral lattice
//!
//! No floating point is used anywhere, yet the output tracks the classic
//! floating-point simplex noise. Inputs are Q19.12 and outputs Q0.15.
//!
//! # Notation
//!
//! Every fixed-point step carries a line comment with the number of
//! fractional bits of its result. `// .12` means the value converts to a real
//! number as `n / (1 << 12)`.
//!
//! # Overflow
//!
//! Only a sample of inputs has been checked for `noise2` and `noise3`, so some
//! inputs may still land outside `i16` before the final narrowing. Every
//! intermediate wraps like the fixed-width integers it is modeled on. No input
//! panics, and out-of-range inputs produce wrapped (meaningless but
//! deterministic) values instead of errors.

mod gradient;
mod permutation;
mod simplex1;
mod simplex2;
mod simplex3;

pub use gradient::{grad1, grad2, grad3};
pub use permutation::{PERM, perm};
pub use simplex1::noise1;
pub use simplex2::noise2;
pub use simplex3::{SimplexOrder, noise3};

/// Square of a .32 value with the low 16 bits dropped first: `.16 * .16 = .32`.
#[inline]
const fn square_32(v: i64) -> i64 {
    let h = v >> 16; // .16
    h.wrapping_mul(h)
}

/// Raise a positive .16 falloff base to the 4th power and halve it to .15.
#[inline]
const fn falloff_pow4(t: i32) -> i32 {
    let t = t.wrapping_mul(t) >> 16; // .16
    let t = t.wrapping_mul(t) >> 16; // .16
    t >> 1 // .15
}
