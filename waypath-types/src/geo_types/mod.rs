//! Point capability for [`geo_types`] points, treated as 2d cartesian points.

mod point;
