use std::ops::{Index, IndexMut};

use approx::AbsDiffEq;
use nalgebra::Vector3;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::geo::Sphere;
use crate::point::{num_cast, Distance, Interpolate, Point};

/// A point given by its longitude and latitude.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great circle distance between two points on the given sphere, in the units of the sphere radius.
    fn great_circle_distance(
        &self,
        other: &impl GeoPoint<Num = Self::Num>,
        sphere: &Sphere,
    ) -> Self::Num {
        let one: Self::Num = num_cast(1.0);
        let two = one + one;
        let d_lat = other.lat_rad() - self.lat_rad();
        let d_lon = other.lon_rad() - self.lon_rad();
        let a = (d_lat / two).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / two).sin().powi(2);

        let radius: Self::Num = num_cast(sphere.radius());
        two * radius * a.sqrt().min(one).asin()
    }

    /// Initial bearing (forward azimuth) from this point to `other`, in degrees in `[0, 360)`.
    fn bearing(&self, other: &impl GeoPoint<Num = Self::Num>) -> Self::Num {
        let d_lon = other.lon_rad() - self.lon_rad();
        let y = d_lon.sin() * other.lat_rad().cos();
        let x = self.lat_rad().cos() * other.lat_rad().sin()
            - self.lat_rad().sin() * other.lat_rad().cos() * d_lon.cos();

        let full_turn: Self::Num = num_cast(360.0);
        (y.atan2(x).to_degrees() + full_turn) % full_turn
    }
}

/// Geo point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the surface of the Earth.
///
/// As a [`Point`], coordinate `0` is the longitude and coordinate `1` is the latitude. Distances are great
/// circle distances on [`Sphere::EARTH`] in kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lon: f64,
    lat: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }
}

impl GeoPoint2d {
    fn to_unit_vector(self) -> Vector3<f64> {
        let (lat, lon) = (self.lat_rad(), self.lon_rad());
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    fn from_unit_vector(v: Vector3<f64>) -> Self {
        Self {
            lon: v.y.atan2(v.x).to_degrees(),
            lat: v.z.atan2(v.x.hypot(v.y)).to_degrees(),
        }
    }
}

impl Index<usize> for GeoPoint2d {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.lon,
            1 => &self.lat,
            _ => panic!("geo point has 2 coordinates, got index {index}"),
        }
    }
}

impl IndexMut<usize> for GeoPoint2d {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.lon,
            1 => &mut self.lat,
            _ => panic!("geo point has 2 coordinates, got index {index}"),
        }
    }
}

impl Point for GeoPoint2d {
    type Num = f64;
    const DIMENSIONS: usize = 2;

    fn coord(&self, index: usize) -> f64 {
        self[index]
    }

    fn set_coord(&mut self, index: usize, value: f64) {
        self[index] = value;
    }

    fn zero() -> Self {
        Self::default()
    }
}

impl Distance for GeoPoint2d {
    fn distance(&self, other: &Self) -> f64 {
        self.great_circle_distance(other, &Sphere::EARTH)
    }
}

impl Interpolate for GeoPoint2d {
    /// Moves along the great circle through both points.
    ///
    /// Coincident and antipodal points have no unique great circle, for them the coordinates are interpolated
    /// linearly.
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        let a = self.to_unit_vector();
        let b = other.to_unit_vector();
        let angle = a.cross(&b).norm().atan2(a.dot(&b));
        let sin_angle = angle.sin();

        if sin_angle.abs() < 1e-12 {
            return Self {
                lon: self.lon + (other.lon - self.lon) * t,
                lat: self.lat + (other.lat - self.lat) * t,
            };
        }

        let v = a * (((1.0 - t) * angle).sin() / sin_angle) + b * ((t * angle).sin() / sin_angle);
        Self::from_unit_vector(v)
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use waypath_types::geo::GeoPoint;
/// use waypath_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// assert_eq!(point.lon(), 52.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <::waypath_types::geo::GeoPoint2d as ::waypath_types::geo::NewGeoPoint<f64>>::latlon(
            $lat, $lon,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn coordinates_order() {
        let p = GeoPoint2d::lonlat(10.0, 20.0);
        assert_eq!(p.lon(), 10.0);
        assert_eq!(p.lat(), 20.0);
        assert_eq!(p.coord(0), 10.0);
        assert_eq!(p[1], 20.0);
    }

    #[test]
    fn great_circle_distance() {
        let origin = GeoPoint2d::lonlat(0.0, 0.0);

        let one_degree = origin.distance(&GeoPoint2d::lonlat(1.0, 0.0));
        assert_abs_diff_eq!(one_degree, 2.0 * PI * 6371.0 / 360.0, epsilon = 1e-9);

        let pole = origin.distance(&GeoPoint2d::lonlat(0.0, 90.0));
        assert_abs_diff_eq!(pole, PI / 2.0 * 6371.0, epsilon = 1e-9);

        let unit = Sphere::new(1.0);
        let antipode = origin.great_circle_distance(&GeoPoint2d::lonlat(180.0, 0.0), &unit);
        assert_abs_diff_eq!(antipode, PI, epsilon = 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint2d::lonlat(-73.98, 40.75);
        let b = GeoPoint2d::lonlat(2.35, 48.86);
        assert_abs_diff_eq!(a.distance(&b), b.distance(&a), epsilon = 1e-9);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn bearing() {
        let origin = GeoPoint2d::lonlat(0.0, 0.0);
        assert_abs_diff_eq!(origin.bearing(&GeoPoint2d::lonlat(0.0, 10.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing(&GeoPoint2d::lonlat(10.0, 0.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing(&GeoPoint2d::lonlat(0.0, -10.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.bearing(&GeoPoint2d::lonlat(-10.0, 0.0)), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn spherical_interpolation() {
        let a = GeoPoint2d::lonlat(0.0, 0.0);
        let b = GeoPoint2d::lonlat(90.0, 0.0);
        assert_abs_diff_eq!(a.interpolate(&b, 0.5), GeoPoint2d::lonlat(45.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(a.interpolate(&b, 0.0), a, epsilon = 1e-9);
        assert_abs_diff_eq!(a.interpolate(&b, 1.0), b, epsilon = 1e-9);

        let c = GeoPoint2d::lonlat(0.0, 80.0);
        let mid = a.interpolate(&c, 0.5);
        assert_abs_diff_eq!(mid, GeoPoint2d::lonlat(0.0, 40.0), epsilon = 1e-9);
        assert_abs_diff_eq!(a.distance(&mid), mid.distance(&c), epsilon = 1e-6);
    }

    #[test]
    fn spherical_extrapolation() {
        let a = GeoPoint2d::lonlat(0.0, 0.0);
        let b = GeoPoint2d::lonlat(10.0, 0.0);
        assert_abs_diff_eq!(
            a.extrapolate(&b, 2.0),
            GeoPoint2d::lonlat(20.0, 0.0),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            a.extrapolate(&b, -1.0),
            GeoPoint2d::lonlat(-10.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn coincident_points_interpolate_linearly() {
        let a = GeoPoint2d::lonlat(5.0, 5.0);
        assert_eq!(a.interpolate(&a, 0.3), a);
    }
}
