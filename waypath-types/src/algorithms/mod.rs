//! Aggregations of point sets into a single representative point.

mod mean;
mod median;

pub use mean::{geometric_mean, weighted_sum};
pub use median::{geometric_median, geometric_median_with_options, MedianOptions};
