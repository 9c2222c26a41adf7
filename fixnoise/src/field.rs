//! Mapping from pixel and frame indices to noise coordinates.
//!
//! Rendering loops address a noise field by integer pixel column, row and
//! frame number. A [`FieldMapping`] turns those indices into Q19.12
//! coordinates with an origin and a per-axis step, and can be loaded from JSON
//! so the look of an animation is tuned without recompiling:
//!
//! ```
//! use fixnoise::FieldMapping;
//!
//! let mapping = FieldMapping::from_json(r#"{ "step": [512, 512, 32] }"#).unwrap();
//! mapping.validate(60, 8, 10_000).unwrap();
//! let brightness = fixnoise::sample_to_u8(mapping.sample3(12, 3, 400));
//! # let _ = brightness;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fixed::SAFE_COORD_LIMIT;
use crate::noise::{noise1, noise2, noise3};

/// Linear map from `(column, row, frame)` to Q19.12 `(x, y, z)`.
///
/// Missing keys fall back to [`FieldMapping::default`]; unknown keys are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldMapping {
    /// Coordinate of column 0, row 0 at frame 0 (Q19.12).
    pub origin: [i32; 3],
    /// Advance per column, per row and per frame (Q19.12).
    pub step: [i32; 3],
}

impl Default for FieldMapping {
    /// 1/16 unit per pixel and 1/64 unit per frame, starting at the origin.
    fn default() -> Self {
        Self {
            origin: [0; 3],
            step: [256, 256, 64],
        }
    }
}

const AXES: [char; 3] = ['x', 'y', 'z'];

impl FieldMapping {
    /// Parse a mapping from JSON text.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let mapping: Self = serde_json::from_str(text)?;
        tracing::debug!(origin = ?mapping.origin, step = ?mapping.step, "Loaded field mapping");
        Ok(mapping)
    }

    /// Coordinates of a pixel at a frame. Arithmetic wraps like the evaluators.
    #[must_use]
    pub const fn coords(&self, column: u32, row: u32, frame: u32) -> (i32, i32, i32) {
        (
            Self::axis(self.origin[0], self.step[0], column),
            Self::axis(self.origin[1], self.step[1], row),
            Self::axis(self.origin[2], self.step[2], frame),
        )
    }

    #[inline]
    const fn axis(origin: i32, step: i32, index: u32) -> i32 {
        origin.wrapping_add(step.wrapping_mul(index as i32))
    }

    /// 1D noise along the column axis.
    #[must_use]
    pub fn sample1(&self, column: u32) -> i16 {
        noise1(Self::axis(self.origin[0], self.step[0], column))
    }

    /// 2D noise over columns and rows.
    #[must_use]
    pub fn sample2(&self, column: u32, row: u32) -> i16 {
        let (x, y, _) = self.coords(column, row, 0);
        noise2(x, y)
    }

    /// 3D noise over columns, rows and frames.
    #[must_use]
    pub fn sample3(&self, column: u32, row: u32, frame: u32) -> i16 {
        let (x, y, z) = self.coords(column, row, frame);
        noise3(x, y, z)
    }

    /// Check that every coordinate addressed by `columns x rows x frames`
    /// stays within [`SAFE_COORD_LIMIT`].
    ///
    /// An extent of zero on an axis only checks that axis' origin.
    pub fn validate(&self, columns: u32, rows: u32, frames: u32) -> Result<(), Error> {
        let limit = i64::from(SAFE_COORD_LIMIT);
        let extents = [columns, rows, frames];

        for (((axis, origin), step), extent) in AXES
            .into_iter()
            .zip(self.origin)
            .zip(self.step)
            .zip(extents)
        {
            let origin = i64::from(origin);
            let last = origin + i64::from(step) * i64::from(extent.saturating_sub(1));

            for value in [origin, last] {
                if value.abs() > limit {
                    tracing::warn!(
                        %axis,
                        value,
                        limit,
                        "Field mapping leaves the safe noise domain"
                    );
                    return Err(Error::OutsideSafeDomain { axis, value, limit });
                }
            }
        }

        Ok(())
    }
}
