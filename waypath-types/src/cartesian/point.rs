use std::ops::{Index, IndexMut};

use approx::AbsDiffEq;
use nalgebra::Scalar;
use num_traits::{Float, Zero};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::point::{num_cast, Distance, Interpolate, Point};

/// A point in `D`-dimensional cartesian coordinate space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CartesianPoint<Num = f64, const D: usize = 2> {
    coords: [Num; D],
}

/// A point in 2-dimensional cartesian coordinate space.
pub type Point2<Num = f64> = CartesianPoint<Num, 2>;

/// A point in 3-dimensional cartesian coordinate space.
pub type Point3<Num = f64> = CartesianPoint<Num, 3>;

impl<Num, const D: usize> CartesianPoint<Num, D> {
    /// Creates a new point from an array of coordinates.
    pub const fn from_coords(coords: [Num; D]) -> Self {
        Self { coords }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn to_array(&self) -> [Num; D]
    where
        Num: Copy,
    {
        self.coords
    }
}

impl<Num: Copy> CartesianPoint<Num, 2> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { coords: [x, y] }
    }

    /// X coordinate.
    pub fn x(&self) -> Num {
        self.coords[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.coords[1]
    }
}

impl<Num: Copy> CartesianPoint<Num, 3> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { coords: [x, y, z] }
    }

    /// X coordinate.
    pub fn x(&self) -> Num {
        self.coords[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> Num {
        self.coords[1]
    }

    /// Z coordinate.
    pub fn z(&self) -> Num {
        self.coords[2]
    }
}

impl<Num: Zero + Copy, const D: usize> Default for CartesianPoint<Num, D> {
    fn default() -> Self {
        Self {
            coords: [Num::zero(); D],
        }
    }
}

impl<Num, const D: usize> Index<usize> for CartesianPoint<Num, D> {
    type Output = Num;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl<Num, const D: usize> IndexMut<usize> for CartesianPoint<Num, D> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coords[index]
    }
}

impl<Num: Float, const D: usize> Point for CartesianPoint<Num, D> {
    type Num = Num;
    const DIMENSIONS: usize = D;

    fn coord(&self, index: usize) -> Num {
        self.coords[index]
    }

    fn set_coord(&mut self, index: usize, value: Num) {
        self.coords[index] = value;
    }

    fn zero() -> Self {
        Self::default()
    }
}

impl<Num: Float, const D: usize> Distance for CartesianPoint<Num, D> {
    fn distance(&self, other: &Self) -> Num {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(Num::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
            .sqrt()
    }
}

impl<Num: Float, const D: usize> Interpolate for CartesianPoint<Num, D> {
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        let t: Num = num_cast(t);
        Self {
            coords: std::array::from_fn(|i| {
                self.coords[i] + (other.coords[i] - self.coords[i]) * t
            }),
        }
    }
}

impl<Num, const D: usize> AbsDiffEq for CartesianPoint<Num, D>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<Num: Scalar, const D: usize> From<nalgebra::Point<Num, D>> for CartesianPoint<Num, D> {
    fn from(point: nalgebra::Point<Num, D>) -> Self {
        Self {
            coords: std::array::from_fn(|i| point[i].clone()),
        }
    }
}

impl<Num: Scalar, const D: usize> From<CartesianPoint<Num, D>> for nalgebra::Point<Num, D> {
    fn from(point: CartesianPoint<Num, D>) -> Self {
        nalgebra::Point::from(point.coords)
    }
}

// Arrays of generic length have no serde implementations, so coordinates go through a sequence.
impl<Num: Serialize, const D: usize> Serialize for CartesianPoint<Num, D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coords.iter())
    }
}

impl<'de, Num: Deserialize<'de>, const D: usize> Deserialize<'de> for CartesianPoint<Num, D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let coords = Vec::<Num>::deserialize(deserializer)?;
        let len = coords.len();
        let coords: [Num; D] = coords
            .try_into()
            .map_err(|_| De::Error::invalid_length(len, &"a coordinate for every dimension"))?;
        Ok(Self { coords })
    }
}
