//! Per-axis fit ratios and the whole-item total derived from them.

use crate::dimension::{Axis, DimTuple, Dimension};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Container extent divided by item extent, per axis.
///
/// A zero item extent yields `±inf` or `NaN` per IEEE-754; those values are
/// kept as-is and only dropped when the total is computed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitRatio {
    /// Width ratio.
    pub width: f64,
    /// Height ratio.
    pub height: f64,
    /// Depth ratio.
    pub depth: f64,
}

impl FitRatio {
    /// Creates a ratio from explicit per-axis values.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns the ratio along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// Returns the positional triple.
    pub fn to_tuple(&self) -> DimTuple {
        [self.width, self.height, self.depth]
    }

    /// Returns true if every axis is finite.
    pub fn is_finite(&self) -> bool {
        self.to_tuple().iter().all(|r| r.is_finite())
    }

    /// Returns the whole-item total. See [`total_fit`].
    pub fn total(&self) -> i64 {
        total_fit(self)
    }
}

/// Divides the container by the item, axis by axis.
pub fn fit_ratio(container: &Dimension, item: &Dimension) -> FitRatio {
    let v = container.to_vector().component_div(&item.to_vector());
    FitRatio::new(v.x, v.y, v.z)
}

/// Number of whole items that fit: the product of the floored finite ratios.
///
/// Non-finite ratios are skipped and the product starts at 1, so a ratio with
/// no finite axis at all yields 1. Large products saturate at `i64::MAX`.
pub fn total_fit(ratio: &FitRatio) -> i64 {
    let product = ratio
        .to_tuple()
        .into_iter()
        .filter(|r| r.is_finite())
        .map(f64::floor)
        .fold(1.0_f64, |acc, r| acc * r);

    // Float-to-int `as` saturates and maps -0.0 to 0.
    product as i64
}
