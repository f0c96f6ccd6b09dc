//! Capabilities a point type provides to the algorithms of this crate.
//!
//! The algorithms never look at a concrete coordinate system. They only use the capability set
//! defined here:
//! * [`Point`]: indexable coordinates, known dimension, zero construction
//! * [`Distance`]: a metric supplied by the coordinate domain (euclidean, great circle, ...)
//! * [`Interpolate`]: movement along the shortest path between two points of the domain

use num_traits::{Float, ToPrimitive};

/// A fixed-dimension tuple of floating point coordinates.
pub trait Point: Clone {
    /// Numeric type of the coordinates.
    type Num: Float;

    /// Number of coordinates of every point of this type.
    const DIMENSIONS: usize;

    /// Returns coordinate with the given index.
    ///
    /// # Panics
    ///
    /// Implementations panic if `index >= Self::DIMENSIONS`.
    fn coord(&self, index: usize) -> Self::Num;

    /// Sets coordinate with the given index.
    ///
    /// # Panics
    ///
    /// Implementations panic if `index >= Self::DIMENSIONS`.
    fn set_coord(&mut self, index: usize, value: Self::Num);

    /// Point with all coordinates set to 0.
    fn zero() -> Self;

    /// Iterates over coordinates of the point.
    fn coords(&self) -> impl Iterator<Item = Self::Num> + '_ {
        (0..Self::DIMENSIONS).map(move |index| self.coord(index))
    }
}

/// Metric of the coordinate domain of a point type.
///
/// Implementations must be non-negative and symmetric.
pub trait Distance: Point {
    /// Distance between two points in the units of the domain.
    fn distance(&self, other: &Self) -> Self::Num;
}

/// Movement between two points along the shortest path of the coordinate domain.
pub trait Interpolate: Sized {
    /// Returns the point at fraction `t` of the way from `self` to `other`. `t` is not restricted to
    /// `[0, 1]`: values outside of it continue the path beyond the ends.
    fn extrapolate(&self, other: &Self, t: f64) -> Self;

    /// Same as [`Interpolate::extrapolate`], but `t` is clamped to `[0, 1]`.
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        self.extrapolate(other, t.clamp(0.0, 1.0))
    }
}

/// Converts a primitive number into a coordinate type. Values that cannot be represented become NaN.
pub fn num_cast<N: Float, T: ToPrimitive>(value: T) -> N {
    N::from(value).unwrap_or_else(N::nan)
}
