//! Gradient-dot-residual helpers for 1D to 3D.
//!
//! The hash byte picks one of a small set of gradient directions through bit
//! tests, and the result is that gradient dotted with the residual offset.
//! Gradients are longer than unit length, which the evaluators compensate for
//! in their final rescale.
//!
//! All arithmetic wraps like 32-bit two's-complement integers.

/// Pick `a` when `cond` holds, `b` otherwise.
#[inline]
const fn select(cond: bool, a: i32, b: i32) -> i32 {
    if cond { a } else { b }
}

/// 1D gradient: magnitude `1..=8` from bits 0-2, sign from bit 3.
///
/// `x` is the residual in any fixed-point format; the result has the same
/// number of fractional bits (integer * .N = .N).
#[inline]
#[must_use]
pub const fn grad1(hash: u8, x: i32) -> i32 {
    let h = hash & 15;
    let magnitude = 1 + (h & 7) as i32;
    let grad = select(h & 8 != 0, -magnitude, magnitude);
    grad.wrapping_mul(x)
}

/// 2D gradient: one of 8 directions `(±1, ±2)` or `(±2, ±1)` from bits 0-2.
#[inline]
#[must_use]
pub const fn grad2(hash: u8, x: i32, y: i32) -> i32 {
    let h = hash & 7;
    let u = select(h < 4, x, y);
    let v = select(h < 4, y, x);
    let v2 = v.wrapping_mul(2);
    select(h & 1 != 0, u.wrapping_neg(), u).wrapping_add(select(h & 2 != 0, v2.wrapping_neg(), v2))
}

/// 3D gradient: one of 12 cube-edge directions from bits 0-3.
///
/// Hash values 12..=15 repeat four of the twelve directions so the low four
/// bits can be used directly.
#[inline]
#[must_use]
pub const fn grad3(hash: u8, x: i32, y: i32, z: i32) -> i32 {
    let h = hash & 15;
    let u = select(h < 8, x, y);
    let v = select(h < 4, y, select(h == 12 || h == 14, x, z));
    select(h & 1 != 0, u.wrapping_neg(), u).wrapping_add(select(h & 2 != 0, v.wrapping_neg(), v))
}
