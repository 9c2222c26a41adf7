//! 1D simplex noise.

use super::gradient::grad1;
use super::permutation::perm;

/// Offset added to the raw sum before rescaling (.15, about +0.076).
const BIAS: i32 = 2503;
/// Divisor of the final rescale `(n << 14) / SCALE_DIVISOR`.
const SCALE_DIVISOR: i32 = 40225;

/// Radial falloff `(1 - x²)⁴` for a .12 residual, as .15.
///
/// The residual is within `(-1, 1)`, so the base never goes negative and no
/// gating is needed.
#[inline]
const fn falloff(x: i32) -> i32 {
    let t = 0x8000 - ((x * x) >> 9); // .15
    let t = (t * t) >> 15; // .15
    (t * t) >> 15 // .15
}

/// 1D simplex noise.
///
/// `x` is a Q19.12 fixed-point value. The result covers the full range of an
/// `i16`, i.e. it is a Q0.15 value. Every `i32` input is accepted.
#[must_use]
pub const fn noise1(x: i32) -> i16 {
    let i0 = x >> 12;
    let i1 = i0.wrapping_add(1);
    let x0 = x & 0xFFF; // .12
    let x1 = x0 - 0x1000; // .12

    let n0 = (falloff(x0) * grad1(perm(i0), x0)) >> 12; // .15 * .12 = .15
    let n1 = (falloff(x1) * grad1(perm(i1), x1)) >> 12; // .15

    let n = n0 + n1 + BIAS; // .15
    let n = (n << 14) / SCALE_DIVISOR; // .15: stretch to fill [-1, 1]
    n as i16
}
