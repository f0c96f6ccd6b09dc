//! Points in cartesian coordinate space of any dimension.

mod point;

pub use point::{CartesianPoint, Point2, Point3};
