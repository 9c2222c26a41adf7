//! Fixed-point simplex noise for devices without a floating-point unit.
//!
//! `fixnoise` evaluates 1D, 2D and 3D simplex noise entirely in integer
//! arithmetic. Coordinates are Q19.12 `i32` values and results are Q0.15
//! `i16` values covering the whole `i16` range, so a caller such as an LED
//! animation loop converts its pixel position to fixed point, calls one of
//! [`noise1`], [`noise2`] or [`noise3`] per pixel and frame, and scales the
//! signed result to whatever brightness or hue unit it drives.
//!
//! Output is bit-for-bit reproducible across platforms: the permutation table
//! and every scaling constant are fixed, and no step depends on hardware
//! floating-point behavior.
//!
//! ## Example
//!
//! ```
//! use fixnoise::{COORD_ONE, noise2, sample_to_u8};
//!
//! // Pixel (3, 5) on a grid with 1/8 unit spacing.
//! let x = 3 * COORD_ONE / 8;
//! let y = 5 * COORD_ONE / 8;
//! let level = sample_to_u8(noise2(x, y));
//! # let _ = level;
//! ```
//!
//! The evaluators are pure and allocation-free and never panic. Inputs past
//! [`SAFE_COORD_LIMIT`] wrap silently inside the fixed-point intermediates.
//!
//! Attribution: the algorithm is Stefan Gustavson's simplex noise in the
//! fixed-point form by Ayke van Laethem, placed in the public domain.

pub mod error;
pub mod field;
pub mod fixed;
pub mod noise;

pub use error::Error;
pub use field::FieldMapping;
pub use fixed::{
    COORD_FRAC_BITS, COORD_ONE, SAFE_COORD_LIMIT, SAMPLE_FRAC_BITS, coord_from_int,
    coord_from_ratio, is_safe_coord, sample_to_u8, sample_to_unit_range,
};
pub use noise::{noise1, noise2, noise3};
