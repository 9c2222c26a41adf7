//! 2D simplex noise.

use super::gradient::grad2;
use super::permutation::{perm, perm_i32};
use super::{falloff_pow4, square_32};

/// Skew factor `(sqrt(3) - 1) / 2` (.32).
const F2: i64 = 1_572_067_135;
/// Unskew factor `(3 - sqrt(3)) / 6` (.32).
const G2: i64 = 907_633_384;
/// Squared kernel radius 0.5 (.32).
const RADIUS_SQ: i64 = 1 << 31;
/// Divisor of the final rescale `(n << 6) / SCALE_DIVISOR`.
const SCALE_DIVISOR: i32 = 46360;

/// Which half of the skewed unit square a point lies in.
///
/// The middle corner of the triangle is one step along the leading axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Triangle {
    /// `x0 > y0`: `(0,0) -> (1,0) -> (1,1)`.
    Lower,
    /// `x0 <= y0`: `(0,0) -> (0,1) -> (1,1)`.
    Upper,
}

impl Triangle {
    const fn select(x0: i64, y0: i64) -> Self {
        if x0 > y0 { Self::Lower } else { Self::Upper }
    }

    /// Lattice offsets `(i1, j1)` of the middle corner.
    const fn middle(self) -> (i32, i32) {
        match self {
            Self::Lower => (1, 0),
            Self::Upper => (0, 1),
        }
    }
}

/// Contribution of one triangle corner.
///
/// `x`, `y` are the .32 offsets of the sample from the corner. Returns a .30
/// value, or exactly zero when the corner lies outside the kernel radius.
#[inline]
pub(crate) const fn corner2(x: i64, y: i64, hash: u8) -> i32 {
    let t = (RADIUS_SQ.wrapping_sub(square_32(x)).wrapping_sub(square_32(y)) >> 16) as i32; // .16
    if t <= 0 {
        return 0;
    }
    // .15 * .15 = .30
    falloff_pow4(t).wrapping_mul(grad2(hash, (x >> 17) as i32, (y >> 17) as i32))
}

/// 2D simplex noise.
///
/// `x` and `y` are Q19.12 fixed-point values. The result covers the full range
/// of an `i16`, i.e. it is a Q0.15 value.
#[must_use]
pub fn noise2(x: i32, y: i32) -> i16 {
    // Skew the input space to find the containing cell.
    let s = ((i64::from(x) + i64::from(y)).wrapping_mul(F2) >> 32) as i32; // (.12 + .12) * .32 = .12
    let i = (x >> 1).wrapping_add(s >> 1) >> 11; // .0
    let j = (y >> 1).wrapping_add(s >> 1) >> 11; // .0

    // Unskew the cell origin back to (x, y) space and take the residual.
    let t = (i64::from(i) + i64::from(j)) * G2; // .32
    let x0 = (i64::from(x) << 20) - ((i64::from(i) << 32) - t); // .32
    let y0 = (i64::from(y) << 20) - ((i64::from(j) << 32) - t); // .32

    let (i1, j1) = Triangle::select(x0, y0).middle();

    // A step of (1,0) in (i,j) is a step of (1-G2, -G2) in (x,y).
    let x1 = x0 - (i64::from(i1) << 32) + G2; // .32
    let y1 = y0 - (i64::from(j1) << 32) + G2; // .32
    let x2 = x0 - (1 << 32) + 2 * G2; // .32
    let y2 = y0 - (1 << 32) + 2 * G2; // .32

    let n0 = corner2(x0, y0, perm(i + perm_i32(j)));
    let n1 = corner2(x1, y1, perm(i + i1 + perm_i32(j + j1)));
    let n2 = corner2(x2, y2, perm(i + 1 + perm_i32(j + 1)));

    let n = n0.wrapping_add(n1).wrapping_add(n2); // .30
    ((n << 6) / SCALE_DIVISOR) as i16 // stretch to fill an i16
}
