//! Point of a trajectory: a domain point with an object id, a timestamp, properties and derived metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use waypath_types::time::interpolate_timestamp;
use waypath_types::{Distance, Interpolate, Point, PropertyMap};

/// Sentinel value of [`TrajectoryPoint::current_length`] for points that are not part of a trajectory yet.
pub const UNSET_LENGTH: f64 = -1.0;

/// A point of a moving object's trajectory.
///
/// Besides the position (`P`), the object identifier, the timestamp and the properties, the point carries
/// three metrics derived from its position in the owning [`Trajectory`](crate::Trajectory):
/// * `current_length` - length of the path from the first point of the trajectory up to this one
/// * `current_length_fraction` - `current_length` divided by the length of the whole trajectory
/// * `current_time_fraction` - elapsed time divided by the duration of the whole trajectory
///
/// These are maintained by the trajectory. A freshly created point has `current_length` set to
/// [`UNSET_LENGTH`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint<P> {
    point: P,
    object_id: String,
    timestamp: DateTime<Utc>,
    properties: PropertyMap,
    current_length: f64,
    current_length_fraction: f64,
    current_time_fraction: f64,
}

impl<P> TrajectoryPoint<P> {
    /// Creates a new point without properties.
    pub fn new(object_id: impl Into<String>, timestamp: DateTime<Utc>, point: P) -> Self {
        Self {
            point,
            object_id: object_id.into(),
            timestamp,
            properties: PropertyMap::new(),
            current_length: UNSET_LENGTH,
            current_length_fraction: 0.0,
            current_time_fraction: 0.0,
        }
    }

    /// Replaces the properties of the point.
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }

    /// Position of the point.
    pub fn point(&self) -> &P {
        &self.point
    }

    /// Mutable position of the point.
    pub fn point_mut(&mut self) -> &mut P {
        &mut self.point
    }

    /// Identifier of the moving object.
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// Sets identifier of the moving object.
    pub fn set_object_id(&mut self, object_id: impl Into<String>) {
        self.object_id = object_id.into();
    }

    /// Time the object was at this point.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Sets the time the object was at this point.
    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp;
    }

    /// Properties of the point.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Mutable properties of the point.
    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    /// Length of the trajectory from its first point to this one, or [`UNSET_LENGTH`].
    pub fn current_length(&self) -> f64 {
        self.current_length
    }

    /// Overrides the length from the start of the trajectory.
    pub fn set_current_length(&mut self, length: f64) {
        self.current_length = length;
    }

    /// Fraction of the whole trajectory length covered up to this point.
    pub fn current_length_fraction(&self) -> f64 {
        self.current_length_fraction
    }

    /// Overrides the fraction of the trajectory length.
    pub fn set_current_length_fraction(&mut self, fraction: f64) {
        self.current_length_fraction = fraction;
    }

    /// Fraction of the whole trajectory duration elapsed up to this point.
    pub fn current_time_fraction(&self) -> f64 {
        self.current_time_fraction
    }

    /// Overrides the fraction of the trajectory duration.
    pub fn set_current_time_fraction(&mut self, fraction: f64) {
        self.current_time_fraction = fraction;
    }
}

impl<P: Point> Point for TrajectoryPoint<P> {
    type Num = P::Num;
    const DIMENSIONS: usize = P::DIMENSIONS;

    fn coord(&self, index: usize) -> P::Num {
        self.point.coord(index)
    }

    fn set_coord(&mut self, index: usize, value: P::Num) {
        self.point.set_coord(index, value);
    }

    fn zero() -> Self {
        Self::new(String::new(), DateTime::<Utc>::default(), P::zero())
    }
}

impl<P: Distance> Distance for TrajectoryPoint<P> {
    fn distance(&self, other: &Self) -> P::Num {
        self.point.distance(&other.point)
    }
}

impl<P: Interpolate> Interpolate for TrajectoryPoint<P> {
    /// Interpolates position, timestamp, properties and derived metrics. The object id is taken from `self`.
    fn extrapolate(&self, other: &Self, t: f64) -> Self {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        Self {
            point: self.point.extrapolate(&other.point, t),
            object_id: self.object_id.clone(),
            timestamp: interpolate_timestamp(self.timestamp, other.timestamp, t),
            properties: self.properties.interpolate(&other.properties, t),
            current_length: lerp(self.current_length, other.current_length),
            current_length_fraction: lerp(
                self.current_length_fraction,
                other.current_length_fraction,
            ),
            current_time_fraction: lerp(self.current_time_fraction, other.current_time_fraction),
        }
    }
}
