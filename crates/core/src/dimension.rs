//! Cuboid extents.

use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positional `[x, y, z]` form of a [`Dimension`] (width, height, depth).
pub type DimTuple = [f64; 3];

/// One of the three cuboid axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// X extent.
    Width,
    /// Y extent.
    Height,
    /// Z extent.
    Depth,
}

impl Axis {
    /// All axes in positional order.
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    /// Returns the positional index (0 = x, 1 = y, 2 = z).
    pub fn index(self) -> usize {
        match self {
            Self::Width => 0,
            Self::Height => 1,
            Self::Depth => 2,
        }
    }

    /// Returns the lowercase field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Depth => "depth",
        }
    }
}

/// Extents of a cuboid.
///
/// Fields are plain `f64`s. Nothing here rejects zero, negative or NaN
/// values; call [`Dimension::validate`] when a caller wants that policy.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
    /// Extent along z.
    pub depth: f64,
}

impl Dimension {
    /// Creates a new dimension from width, height and depth.
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Default container extents (120 x 60 x 40).
    pub const fn default_container() -> Self {
        Self::new(120.0, 60.0, 40.0)
    }

    /// Default item extents (20 x 50 x 30).
    pub const fn default_item() -> Self {
        Self::new(20.0, 50.0, 30.0)
    }

    /// Returns the extent along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// Returns a copy with the extent along `axis` replaced.
    pub fn with(mut self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::Width => self.width = value,
            Axis::Height => self.height = value,
            Axis::Depth => self.depth = value,
        }
        self
    }

    /// Returns the volume (width * height * depth).
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Returns the positional triple.
    pub fn to_tuple(&self) -> DimTuple {
        [self.width, self.height, self.depth]
    }

    /// Returns the extents as a vector (x = width, y = height, z = depth).
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Checks that every extent is finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for axis in Axis::ALL {
            let value = self.get(axis);
            if !value.is_finite() {
                return Err(Error::InvalidDimension(format!(
                    "{} must be finite, got {}",
                    axis.name(),
                    value
                )));
            }
            if value <= 0.0 {
                return Err(Error::InvalidDimension(format!(
                    "{} must be positive, got {}",
                    axis.name(),
                    value
                )));
            }
        }
        Ok(())
    }
}

impl From<DimTuple> for Dimension {
    fn from([width, height, depth]: DimTuple) -> Self {
        Self::new(width, height, depth)
    }
}

impl From<Dimension> for DimTuple {
    fn from(dim: Dimension) -> Self {
        dim.to_tuple()
    }
}

impl From<Vector3<f64>> for Dimension {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Dimension> for Vector3<f64> {
    fn from(dim: Dimension) -> Self {
        dim.to_vector()
    }
}
