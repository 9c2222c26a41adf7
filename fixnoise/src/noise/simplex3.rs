//! 3D simplex noise.
//!
//! The skewed unit cube splits into six tetrahedra, one per ordering of the
//! residual's three axes. The ordering is chosen through [`SimplexOrder`],
//! which reproduces the classic six-way comparison cascade (including its
//! tie-breaks) from a table indexed by three comparison bits.

use super::gradient::grad3;
use super::permutation::{perm, perm_i32};
use super::{falloff_pow4, square_32};

/// Skew factor 1/3 (.32).
const F3: i64 = 1_431_655_764;
/// Unskew factor 1/6 (.32).
const G3: i64 = 715_827_884;
/// Squared kernel radius 0.6 (.32).
const RADIUS_SQ: i64 = 2_576_980_378;
/// Divisor of the final rescale `(n << 6) / SCALE_DIVISOR`.
const SCALE_DIVISOR: i32 = 64120;

/// Axis ordering of a point inside the skewed unit cube, largest first.
///
/// Names read as the order in which the path from the cell origin to the
/// opposite corner steps along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplexOrder {
    /// `x0 >= y0 >= z0`
    Xyz,
    /// `x0 >= z0 > y0`
    Xzy,
    /// `z0 > x0 >= y0`
    Zxy,
    /// `z0 > y0 > x0`
    Zyx,
    /// `y0 >= z0 > x0`
    Yzx,
    /// `y0 > x0 >= z0`
    Yxz,
}

impl SimplexOrder {
    /// Orderings indexed by `(x0 >= y0) << 2 | (y0 >= z0) << 1 | (x0 >= z0)`.
    ///
    /// Indices `0b001` and `0b110` are contradictory for exact comparisons;
    /// they still map to what the nested cascade would pick.
    const TABLE: [Self; 8] = [
        Self::Zyx, // !xy !yz !xz
        Self::Zyx, // !xy !yz  xz
        Self::Yzx, // !xy  yz !xz
        Self::Yxz, // !xy  yz  xz
        Self::Zxy, //  xy !yz !xz
        Self::Xzy, //  xy !yz  xz
        Self::Xyz, //  xy  yz !xz
        Self::Xyz, //  xy  yz  xz
    ];

    /// Classify a residual offset from the cell origin.
    #[must_use]
    pub fn select(x0: i64, y0: i64, z0: i64) -> Self {
        let index = (usize::from(x0 >= y0) << 2) | (usize::from(y0 >= z0) << 1) | usize::from(x0 >= z0);
        Self::TABLE[index]
    }

    /// Lattice offsets of the second and third corners.
    #[must_use]
    pub const fn corners(self) -> ([i32; 3], [i32; 3]) {
        match self {
            Self::Xyz => ([1, 0, 0], [1, 1, 0]),
            Self::Xzy => ([1, 0, 0], [1, 0, 1]),
            Self::Zxy => ([0, 0, 1], [1, 0, 1]),
            Self::Zyx => ([0, 0, 1], [0, 1, 1]),
            Self::Yzx => ([0, 1, 0], [0, 1, 1]),
            Self::Yxz => ([0, 1, 0], [1, 1, 0]),
        }
    }
}

/// Contribution of one tetrahedron corner.
///
/// Offsets are .32; the result is .30, or exactly zero outside the kernel
/// radius.
#[inline]
pub(crate) const fn corner3(x: i64, y: i64, z: i64, hash: u8) -> i32 {
    let d = square_32(x).wrapping_add(square_32(y)).wrapping_add(square_32(z)); // .32
    let t = (RADIUS_SQ.wrapping_sub(d) >> 16) as i32; // .16
    if t <= 0 {
        return 0;
    }
    // .15 * .15 = .30
    falloff_pow4(t).wrapping_mul(grad3(
        hash,
        (x >> 17) as i32,
        (y >> 17) as i32,
        (z >> 17) as i32,
    ))
}

/// Hash a lattice point into a gradient selector.
#[inline]
const fn hash3(i: i32, j: i32, k: i32) -> u8 {
    perm(i + perm_i32(j + perm_i32(k)))
}

/// 3D simplex noise.
///
/// `x`, `y` and `z` are Q19.12 fixed-point values. The result covers the full
/// range of an `i16`, i.e. it is a Q0.15 value.
#[must_use]
pub fn noise3(x: i32, y: i32, z: i32) -> i16 {
    // Skew the input space to find the containing cell.
    let sum = i64::from(x) + i64::from(y) + i64::from(z);
    let s = (sum.wrapping_mul(F3) >> 32) as i32; // .12 * .32 = .12
    let i = (x >> 1).wrapping_add(s >> 1) >> 11; // .0
    let j = (y >> 1).wrapping_add(s >> 1) >> 11; // .0
    let k = (z >> 1).wrapping_add(s >> 1) >> 11; // .0

    // Unskew the cell origin and take the residual.
    let t = (i64::from(i) + i64::from(j) + i64::from(k)) * G3; // .32
    let x0 = (i64::from(x) << 20) - ((i64::from(i) << 32) - t); // .32
    let y0 = (i64::from(y) << 20) - ((i64::from(j) << 32) - t); // .32
    let z0 = (i64::from(z) << 20) - ((i64::from(k) << 32) - t); // .32

    let ([i1, j1, k1], [i2, j2, k2]) = SimplexOrder::select(x0, y0, z0).corners();

    // A step of (1,0,0) in (i,j,k) is a step of (1-G3, -G3, -G3) in (x,y,z).
    let x1 = x0 - (i64::from(i1) << 32) + G3; // .32
    let y1 = y0 - (i64::from(j1) << 32) + G3; // .32
    let z1 = z0 - (i64::from(k1) << 32) + G3; // .32
    let x2 = x0 - (i64::from(i2) << 32) + 2 * G3; // .32
    let y2 = y0 - (i64::from(j2) << 32) + 2 * G3; // .32
    let z2 = z0 - (i64::from(k2) << 32) + 2 * G3; // .32
    let x3 = x0 - (1 << 32) + 3 * G3; // .32
    let y3 = y0 - (1 << 32) + 3 * G3; // .32
    let z3 = z0 - (1 << 32) + 3 * G3; // .32

    let n0 = corner3(x0, y0, z0, hash3(i, j, k));
    let n1 = corner3(x1, y1, z1, hash3(i + i1, j + j1, k + k1));
    let n2 = corner3(x2, y2, z2, hash3(i + i2, j + j2, k + k2));
    let n3 = corner3(x3, y3, z3, hash3(i + 1, j + 1, k + 1));

    let n = n0.wrapping_add(n1).wrapping_add(n2).wrapping_add(n3); // .30
    ((n << 6) / SCALE_DIVISOR) as i16 // stretch to stay just inside [-1, 1]
}
