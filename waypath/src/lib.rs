//! Trajectories of moving objects.
//!
//! A [`Trajectory`] owns an ordered sequence of [`TrajectoryPoint`]s and keeps the cumulative length, length
//! fraction and time fraction of every point up to date as the sequence changes. Any point type implementing
//! the [`waypath_types`] capability traits can be used, so the same trajectory works with cartesian points as
//! well as with longitude/latitude on a sphere.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use waypath::{Trajectory, TrajectoryPoint};
//! use waypath_types::cartesian::Point2;
//!
//! let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
//! let mut trajectory = Trajectory::new();
//! trajectory.push(TrajectoryPoint::new("car", start, Point2::new(0.0, 0.0)));
//! trajectory.push(TrajectoryPoint::new("car", start + chrono::Duration::seconds(10), Point2::new(3.0, 4.0)));
//!
//! assert_eq!(trajectory.length(), 5.0);
//! assert_eq!(trajectory[1].current_length_fraction(), 1.0);
//! ```

pub mod error;
pub mod trajectory;
pub mod trajectory_point;

pub use error::TrajectoryError;
pub use trajectory::Trajectory;
pub use trajectory_point::{TrajectoryPoint, UNSET_LENGTH};
