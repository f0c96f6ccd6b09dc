//! Point types and point algorithms for moving-object data.
//!
//! Algorithms of this crate are generic over the [`Point`] capability set. A coordinate domain plugs in by
//! implementing [`Point`], [`Distance`] and [`Interpolate`] for its point type:
//! * [`cartesian::CartesianPoint`] - euclidean space of any dimension
//! * [`geo::GeoPoint2d`] - longitude and latitude on a sphere
//! * `geo_types::Point` (with the `geo-types` feature) - 2d euclidean points
//!
//! [`arithmetic`] provides vector algebra over any point, and [`algorithms`] reduces point sets to their
//! [geometric mean](algorithms::geometric_mean) or [geometric median](algorithms::geometric_median).

pub mod algorithms;
pub mod arithmetic;
pub mod cartesian;
pub mod error;
pub mod geo;
pub mod point;
pub mod property;
pub mod time;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use error::WaypathTypesError;
pub use point::{Distance, Interpolate, Point};
pub use property::{PropertyMap, PropertyValue};
