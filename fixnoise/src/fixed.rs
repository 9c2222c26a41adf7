//! Fixed-point formats used at the noise API boundary.
//!
//! Coordinates go in as Q19.12 (`i32`, 12 fractional bits) and samples come
//! out as Q0.15 (`i16`, a signed fraction of `1 << 15`). These helpers build
//! coordinates from integers without silent overflow and map samples onto the
//! unsigned scales LED drivers want.

use crate::error::Error;

/// Fractional bits of an input coordinate.
pub const COORD_FRAC_BITS: u32 = 12;
/// The coordinate value `1.0`.
pub const COORD_ONE: i32 = 1 << COORD_FRAC_BITS;
/// Fractional bits of a noise sample.
pub const SAMPLE_FRAC_BITS: u32 = 15;
/// Coordinate magnitude (inclusive) up to which no evaluator intermediate wraps.
///
/// This is `±262144.0` in real units.
pub const SAFE_COORD_LIMIT: i32 = 1 << 30;

/// Convert a whole number to a Q19.12 coordinate.
pub fn coord_from_int(value: i32) -> Result<i32, Error> {
    value
        .checked_mul(COORD_ONE)
        .ok_or(Error::CoordinateOverflow {
            value: i64::from(value) << COORD_FRAC_BITS,
        })
}

/// Convert `numerator / denominator` to a Q19.12 coordinate, truncating
/// toward zero.
pub fn coord_from_ratio(numerator: i32, denominator: i32) -> Result<i32, Error> {
    if denominator == 0 {
        return Err(Error::ZeroDenominator);
    }
    let value = (i64::from(numerator) << COORD_FRAC_BITS) / i64::from(denominator);
    i32::try_from(value).map_err(|_| Error::CoordinateOverflow { value })
}

/// Whether `coord` lies inside the documented safe domain.
#[inline]
#[must_use]
pub const fn is_safe_coord(coord: i32) -> bool {
    coord.unsigned_abs() <= SAFE_COORD_LIMIT as u32
}

/// Map a Q0.15 sample onto `0..=255`, `-1.0` to 0 and just under `1.0` to 255.
#[inline]
#[must_use]
pub fn sample_to_u8(sample: i16) -> u8 {
    ((i32::from(sample) + 0x8000) >> 8) as u8
}

/// Map a Q0.15 sample linearly onto `0..=max`.
#[inline]
#[must_use]
pub fn sample_to_unit_range(sample: i16, max: u16) -> u16 {
    let offset = (i32::from(sample) + 0x8000) as u32; // 0..=0xFFFF
    (offset * u32::from(max) / 0xFFFF) as u16
}
