//! Points in geographic coordinates (longitude and latitude) on the surface of a sphere (see [`GeoPoint`]).

mod point;
mod sphere;

pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use sphere::Sphere;
