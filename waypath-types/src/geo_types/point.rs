use geo_types::{point, CoordFloat};
use num_traits::Zero;

use crate::point::{num_cast, Distance, Interpolate, Point};

impl<T: CoordFloat> Point for geo_types::Point<T> {
    type Num = T;
    const DIMENSIONS: usize = 2;

    fn coord(&self, index: usize) -> T {
        match index {
            0 => self.0.x,
            1 => self.0.y,
            _ => panic!("geo_types point has 2 coordinates, got index {index}"),
        }
    }

    fn set_coord(&mut self, index: usize, value: T) {
        match index {
            0 => self.0.x = value,
            1 => self.0.y = value,
            _ => panic!("geo_types point has 2 coordinates, got index {index}"),
        }
    }

    fn zero() -> Self {
        point!(x: T::zero(), y: T::zero())
    }
}

impl<T: CoordFloat> Distance for geo_types::Point<T> {
    fn distance(&self, other: &Self) -> T {
        (self.0.x - other.0.x).hypot(self.0.y - other.0.y)
    }
}

impl<T: CoordFloat> Interpolate for geo_types::Point<T> {
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        let t: T = num_cast(t);
        point!(
            x: self.0.x + (other.0.x - self.0.x) * t,
            y: self.0.y + (other.0.y - self.0.y) * t,
        )
    }
}
