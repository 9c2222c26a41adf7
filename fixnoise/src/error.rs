//! Errors for the checked helpers around the noise evaluators.
//!
//! The evaluators themselves are total and never produce these.

use thiserror::Error;

/// An error raised while building coordinates or loading a field mapping.
#[derive(Error, Debug)]
pub enum Error {
    /// A converted coordinate does not fit the Q19.12 range of an `i32`.
    #[error("Coordinate {value} does not fit Q19.12")]
    CoordinateOverflow {
        /// The out-of-range value, already shifted to Q19.12.
        value: i64,
    },
    /// A ratio conversion was given a zero denominator.
    #[error("Ratio denominator is zero")]
    ZeroDenominator,
    /// A field mapping would address coordinates past the safe domain.
    #[error("{axis} coordinate {value} is outside the safe domain of ±{limit}")]
    OutsideSafeDomain {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// The furthest coordinate the mapping reaches on that axis.
        value: i64,
        /// The magnitude limit it was checked against.
        limit: i64,
    },
    /// The field mapping text could not be parsed.
    #[error("Invalid field mapping: {0}")]
    Config(#[from] serde_json::Error),
}
