//! Ordered sequence of trajectory points with incrementally maintained derived metrics.

use std::ops::{Bound, Index, IndexMut, RangeBounds};

use chrono::{DateTime, Duration, Utc};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use waypath_types::time::time_fraction;
use waypath_types::{Distance, Interpolate, PropertyMap};

use crate::error::TrajectoryError;
use crate::trajectory_point::TrajectoryPoint;

/// Trajectory of a moving object: an owned, ordered sequence of [`TrajectoryPoint`]s with its own properties.
///
/// Every structural change (push, insert, remove, resize, assign) recomputes the derived metrics of the
/// points starting from the earliest affected index, so that for points `p_0..p_n`:
/// * `current_length(p_0) == 0`
/// * `current_length(p_i) == current_length(p_i-1) + distance(p_i-1, p_i)`
///
/// and the length and time fractions are normalized over the whole trajectory.
///
/// Mutable access to individual points ([`IndexMut`], [`Trajectory::at_mut`], [`Trajectory::iter_mut`] etc.)
/// does not recompute anything, since the trajectory cannot know what was changed. Instead it remembers the
/// earliest point that could have been changed: [`Trajectory::is_length_valid`] returns `false` until
/// [`Trajectory::compute_current_length`] is called for that index or an earlier one.
///
/// The trajectory is not synchronized. Concurrent readers are fine once it is not being modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory<P> {
    points: Vec<TrajectoryPoint<P>>,
    properties: PropertyMap,
    #[serde(skip)]
    stale_from: Option<usize>,
}

impl<P> Default for Trajectory<P> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            properties: PropertyMap::new(),
            stale_from: None,
        }
    }
}

impl<P> Trajectory<P> {
    /// Creates an empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at the given index, or [`TrajectoryError::IndexOutOfRange`].
    pub fn at(&self, index: usize) -> Result<&TrajectoryPoint<P>, TrajectoryError> {
        self.points
            .get(index)
            .ok_or(TrajectoryError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Mutable point at the given index, or [`TrajectoryError::IndexOutOfRange`].
    ///
    /// Marks derived metrics from `index` on as possibly stale.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut TrajectoryPoint<P>, TrajectoryError> {
        let len = self.len();
        if index >= len {
            return Err(TrajectoryError::IndexOutOfRange { index, len });
        }

        self.mark_stale(index);
        Ok(&mut self.points[index])
    }

    /// First point.
    pub fn first(&self) -> Option<&TrajectoryPoint<P>> {
        self.points.first()
    }

    /// Last point.
    pub fn last(&self) -> Option<&TrajectoryPoint<P>> {
        self.points.last()
    }

    /// Mutable first point. Marks all derived metrics as possibly stale.
    pub fn first_mut(&mut self) -> Option<&mut TrajectoryPoint<P>> {
        if !self.is_empty() {
            self.mark_stale(0);
        }
        self.points.first_mut()
    }

    /// Mutable last point. Marks derived metrics of the last point as possibly stale.
    pub fn last_mut(&mut self) -> Option<&mut TrajectoryPoint<P>> {
        if let Some(index) = self.len().checked_sub(1) {
            self.mark_stale(index);
        }
        self.points.last_mut()
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint<P>> {
        self.points.iter()
    }

    /// Iterates over mutable points. Marks all derived metrics as possibly stale.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TrajectoryPoint<P>> {
        if !self.is_empty() {
            self.mark_stale(0);
        }
        self.points.iter_mut()
    }

    /// Points of the trajectory.
    pub fn as_slice(&self) -> &[TrajectoryPoint<P>] {
        &self.points
    }

    /// Properties of the trajectory itself.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Mutable properties of the trajectory itself.
    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    /// Object id of the first point, which is considered the id of the whole trajectory.
    pub fn object_id(&self) -> Option<&str> {
        self.first().map(TrajectoryPoint::object_id)
    }

    /// Timestamp of the first point.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.first().map(TrajectoryPoint::timestamp)
    }

    /// Timestamp of the last point.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.last().map(TrajectoryPoint::timestamp)
    }

    /// Time between the first and the last point. Zero for empty trajectories.
    pub fn duration(&self) -> Duration {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => end.signed_duration_since(start),
            _ => Duration::zero(),
        }
    }

    /// Length of the whole trajectory. Zero for empty trajectories.
    pub fn length(&self) -> f64 {
        self.last().map_or(0.0, |point| point.current_length().max(0.0))
    }

    /// Whether derived metrics of all points are known to be up to date.
    pub fn is_length_valid(&self) -> bool {
        self.stale_from.is_none()
    }

    /// Removes all points. Trajectory properties are kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.stale_from = None;
    }

    fn mark_stale(&mut self, index: usize) {
        self.stale_from = Some(self.stale_from.map_or(index, |stale| stale.min(index)));
    }

    fn check_insert_index(&self, index: usize) -> Result<(), TrajectoryError> {
        if index > self.len() {
            return Err(TrajectoryError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(())
    }
}

impl<P: Distance> Trajectory<P> {
    /// Creates a trajectory from a sequence of points and computes their derived metrics.
    pub fn from_points(points: impl IntoIterator<Item = TrajectoryPoint<P>>) -> Self {
        let mut trajectory = Self::new();
        trajectory.assign(points);
        trajectory
    }

    /// Appends a point to the end.
    pub fn push(&mut self, point: TrajectoryPoint<P>) {
        self.points.push(point);
        self.compute_current_length(self.len() - 1);
    }

    /// Inserts a point at `index`, shifting all points after it. `index` may be equal to the length.
    pub fn insert(
        &mut self,
        index: usize,
        point: TrajectoryPoint<P>,
    ) -> Result<(), TrajectoryError> {
        self.check_insert_index(index)?;
        self.points.insert(index, point);
        self.compute_current_length(index);
        Ok(())
    }

    /// Inserts `count` copies of the point at `index`.
    pub fn insert_n(
        &mut self,
        index: usize,
        count: usize,
        point: TrajectoryPoint<P>,
    ) -> Result<(), TrajectoryError> {
        self.insert_many(index, std::iter::repeat(point).take(count))
    }

    /// Inserts all the given points at `index`, keeping their order.
    pub fn insert_many(
        &mut self,
        index: usize,
        points: impl IntoIterator<Item = TrajectoryPoint<P>>,
    ) -> Result<(), TrajectoryError> {
        self.check_insert_index(index)?;
        self.points.splice(index..index, points);
        self.compute_current_length(index);
        Ok(())
    }

    /// Removes and returns the point at `index`.
    pub fn remove(&mut self, index: usize) -> Result<TrajectoryPoint<P>, TrajectoryError> {
        if index >= self.len() {
            return Err(TrajectoryError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        let removed = self.points.remove(index);
        self.compute_current_length(index);
        Ok(removed)
    }

    /// Removes and returns the points in the range.
    pub fn remove_range(
        &mut self,
        range: impl RangeBounds<usize>,
    ) -> Result<Vec<TrajectoryPoint<P>>, TrajectoryError> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        };
        if start > end || end > len {
            return Err(TrajectoryError::InvalidRange { start, end, len });
        }

        let removed = self.points.drain(start..end).collect();
        self.compute_current_length(start);
        Ok(removed)
    }

    /// Changes the number of points to `new_len`, appending copies of `value` or dropping points from the end.
    pub fn resize(&mut self, new_len: usize, value: TrajectoryPoint<P>) {
        let old_len = self.len();
        self.points.resize(new_len, value);
        self.compute_current_length(old_len);
    }

    /// Replaces all points of the trajectory.
    pub fn assign(&mut self, points: impl IntoIterator<Item = TrajectoryPoint<P>>) {
        self.points = points.into_iter().collect();
        self.stale_from = None;
        self.compute_current_length(0);
    }

    /// Recomputes `current_length` of every point starting from `start`, then the length and time fractions of
    /// all points. Lengths are not touched if `start` is past the last point.
    ///
    /// Points before `start` are expected to have valid lengths.
    pub fn compute_current_length(&mut self, start: usize) {
        let len = self.len();
        if start < len {
            log::trace!("Recomputing trajectory length for points {start}..{len}");

            for index in start..len {
                let length = match index {
                    0 => 0.0,
                    _ => {
                        let previous = &self.points[index - 1];
                        let step = previous.distance(&self.points[index]);
                        previous.current_length() + step.to_f64().unwrap_or(f64::NAN)
                    }
                };
                self.points[index].set_current_length(length);
            }
        }

        // Fractions depend on the totals
        self.compute_current_length_fraction();
        self.compute_current_time_fraction();

        if self
            .stale_from
            .is_some_and(|stale| stale >= start || stale >= len)
        {
            self.stale_from = None;
        }
    }

    fn compute_current_length_fraction(&mut self) {
        let total = self.length();
        for point in &mut self.points {
            let fraction = if total > 0.0 {
                point.current_length() / total
            } else {
                0.0
            };
            point.set_current_length_fraction(fraction);
        }
    }

    fn compute_current_time_fraction(&mut self) {
        let (Some(start), Some(end)) = (self.start_time(), self.end_time()) else {
            return;
        };

        for point in &mut self.points {
            point.set_current_time_fraction(time_fraction(start, end, point.timestamp()));
        }
    }
}

impl<P: Distance + Interpolate> Trajectory<P> {
    /// Position of the object at the given time, interpolated between the neighbouring points.
    ///
    /// Times before the start or after the end of the trajectory give the first or the last point. Points are
    /// expected to be ordered by time.
    pub fn point_at_time(&self, time: DateTime<Utc>) -> Option<TrajectoryPoint<P>> {
        let first = self.first()?;
        let last = self.last()?;
        if time <= first.timestamp() {
            return Some(first.clone());
        }
        if time >= last.timestamp() {
            return Some(last.clone());
        }

        let next_index = self.points.partition_point(|point| point.timestamp() <= time);
        let previous = &self.points[next_index - 1];
        let next = &self.points[next_index];
        if previous.timestamp() == time {
            return Some(previous.clone());
        }

        let fraction = time_fraction(previous.timestamp(), next.timestamp(), time);
        Some(previous.interpolate(next, fraction))
    }

    /// Position of the object after covering the given fraction of the trajectory length.
    ///
    /// Fractions outside of `[0, 1]` give the first or the last point. Derived metrics are expected to be up to
    /// date.
    pub fn point_at_length_fraction(&self, fraction: f64) -> Option<TrajectoryPoint<P>> {
        let first = self.first()?;
        let last = self.last()?;
        if fraction <= 0.0 {
            return Some(first.clone());
        }
        if fraction >= 1.0 {
            return Some(last.clone());
        }

        let target = fraction * self.length();
        let next_index = self
            .points
            .partition_point(|point| point.current_length() <= target);
        if next_index >= self.len() {
            return Some(last.clone());
        }

        let previous = &self.points[next_index - 1];
        let next = &self.points[next_index];
        let segment = next.current_length() - previous.current_length();
        if segment <= 0.0 {
            return Some(previous.clone());
        }

        Some(previous.interpolate(next, (target - previous.current_length()) / segment))
    }
}

impl<P: Distance> FromIterator<TrajectoryPoint<P>> for Trajectory<P> {
    fn from_iter<T: IntoIterator<Item = TrajectoryPoint<P>>>(iter: T) -> Self {
        Self::from_points(iter)
    }
}

/// Unchecked access: panics if the index is out of range. Use [`Trajectory::at`] for checked access.
impl<P> Index<usize> for Trajectory<P> {
    type Output = TrajectoryPoint<P>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

/// Unchecked mutable access: panics if the index is out of range. Marks derived metrics from `index` on as
/// possibly stale.
impl<P> IndexMut<usize> for Trajectory<P> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index < self.len() {
            self.mark_stale(index);
        }
        &mut self.points[index]
    }
}

impl<'a, P> IntoIterator for &'a Trajectory<P> {
    type Item = &'a TrajectoryPoint<P>;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P> IntoIterator for Trajectory<P> {
    type Item = TrajectoryPoint<P>;
    type IntoIter = std::vec::IntoIter<TrajectoryPoint<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<P: PartialEq> PartialEq for Trajectory<P> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.properties == other.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use waypath_types::cartesian::Point2;
    use waypath_types::geo::{GeoPoint2d, NewGeoPoint};
    use waypath_types::Point;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap() + Duration::seconds(seconds)
    }

    fn point(seconds: i64, x: f64, y: f64) -> TrajectoryPoint<Point2> {
        TrajectoryPoint::new("bus-12", at(seconds), Point2::new(x, y))
    }

    /// 0 -> 3 -> 3 -> 7 in length, every 10 seconds.
    fn sample() -> Trajectory<Point2> {
        Trajectory::from_points([
            point(0, 0.0, 0.0),
            point(10, 3.0, 0.0),
            point(20, 3.0, 0.0),
            point(30, 3.0, 4.0),
        ])
    }

    fn assert_length_invariant<P: Distance>(trajectory: &Trajectory<P>) {
        assert!(trajectory.is_length_valid());
        if let Some(first) = trajectory.first() {
            assert_eq!(first.current_length(), 0.0);
        }
        for pair in trajectory.as_slice().windows(2) {
            let step = pair[0].distance(&pair[1]).to_f64().unwrap_or(f64::NAN);
            assert_abs_diff_eq!(
                pair[1].current_length() - pair[0].current_length(),
                step,
                epsilon = 1e-9
            );
        }
    }

    fn lengths<P>(trajectory: &Trajectory<P>) -> Vec<f64> {
        trajectory.iter().map(|p| p.current_length()).collect()
    }

    #[test]
    fn push_maintains_length() {
        let mut trajectory = Trajectory::new();
        assert_eq!(trajectory.length(), 0.0);

        trajectory.push(point(0, 1.0, 1.0));
        assert_eq!(trajectory[0].current_length(), 0.0);

        trajectory.push(point(5, 4.0, 5.0));
        trajectory.push(point(8, 4.0, 6.0));
        trajectory.push(point(9, 4.0, 6.0));

        assert_eq!(lengths(&trajectory), vec![0.0, 5.0, 6.0, 6.0]);
        assert_eq!(trajectory.length(), 6.0);
        assert_length_invariant(&trajectory);
    }

    #[test]
    fn fractions() {
        let trajectory = sample();

        let length_fractions: Vec<_> = trajectory
            .iter()
            .map(|p| p.current_length_fraction())
            .collect();
        assert_eq!(length_fractions, vec![0.0, 3.0 / 7.0, 3.0 / 7.0, 1.0]);

        let time_fractions: Vec<_> = trajectory
            .iter()
            .map(|p| p.current_time_fraction())
            .collect();
        assert_eq!(time_fractions, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn degenerate_fractions_are_zero() {
        let trajectory = Trajectory::from_points([point(0, 1.0, 1.0), point(0, 1.0, 1.0)]);
        for p in &trajectory {
            assert_eq!(p.current_length_fraction(), 0.0);
            assert_eq!(p.current_time_fraction(), 0.0);
        }
    }

    #[test]
    fn trajectory_level_queries() {
        let mut trajectory = sample();
        trajectory.properties_mut().set("route", "12A");

        assert_eq!(trajectory.len(), 4);
        assert_eq!(trajectory.object_id(), Some("bus-12"));
        assert_eq!(trajectory.start_time(), Some(at(0)));
        assert_eq!(trajectory.end_time(), Some(at(30)));
        assert_eq!(trajectory.duration(), Duration::seconds(30));
        assert_eq!(trajectory.length(), 7.0);
        assert_eq!(trajectory.properties().text("route"), Some("12A"));

        let empty = Trajectory::<Point2>::new();
        assert!(empty.is_empty());
        assert_eq!(empty.object_id(), None);
        assert_eq!(empty.duration(), Duration::zero());
    }

    #[test]
    fn insert_recomputes_from_insertion_point() {
        let mut trajectory = sample();
        trajectory
            .insert(1, point(5, 0.0, 4.0))
            .expect("valid index");

        assert_eq!(lengths(&trajectory), vec![0.0, 4.0, 9.0, 9.0, 13.0]);
        assert_length_invariant(&trajectory);

        trajectory.insert(5, point(40, 3.0, 5.0)).expect("end index");
        assert_eq!(trajectory.length(), 14.0);

        assert_matches!(
            trajectory.insert(7, point(50, 0.0, 0.0)),
            Err(TrajectoryError::IndexOutOfRange { index: 7, len: 6 })
        );
    }

    #[test]
    fn insert_fill_and_range() {
        let mut trajectory = sample();
        trajectory
            .insert_n(0, 2, point(-10, -1.0, 0.0))
            .expect("valid index");
        assert_eq!(trajectory.len(), 6);
        assert_eq!(lengths(&trajectory), vec![0.0, 0.0, 1.0, 4.0, 4.0, 8.0]);

        trajectory
            .insert_many(3, [point(1, 0.0, 1.0), point(2, 0.0, 2.0)])
            .expect("valid index");
        assert_eq!(trajectory.len(), 8);
        assert_eq!(trajectory[3].point(), &Point2::new(0.0, 1.0));
        assert_eq!(trajectory[4].point(), &Point2::new(0.0, 2.0));
        assert_length_invariant(&trajectory);

        assert_matches!(
            trajectory.insert_many(9, []),
            Err(TrajectoryError::IndexOutOfRange { index: 9, len: 8 })
        );
    }

    #[test]
    fn remove_recomputes_successors() {
        let mut trajectory = sample();
        let removed = trajectory.remove(1).expect("valid index");
        assert_eq!(removed.point(), &Point2::new(3.0, 0.0));

        assert_eq!(lengths(&trajectory), vec![0.0, 3.0, 7.0]);
        assert_eq!(trajectory.at(2).map(|p| p.current_length()), Ok(7.0));
        assert_length_invariant(&trajectory);

        trajectory.remove(0).expect("valid index");
        assert_eq!(lengths(&trajectory), vec![0.0, 4.0]);
        assert_eq!(trajectory[0].current_time_fraction(), 0.0);
        assert_eq!(trajectory[0].current_length_fraction(), 0.0);

        assert_matches!(
            trajectory.remove(2),
            Err(TrajectoryError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn remove_range() {
        let mut trajectory = sample();
        let removed = trajectory.remove_range(1..3).expect("valid range");
        assert_eq!(removed.len(), 2);
        assert_eq!(lengths(&trajectory), vec![0.0, 5.0]);
        assert_length_invariant(&trajectory);

        assert_matches!(
            trajectory.remove_range(1..=2),
            Err(TrajectoryError::InvalidRange {
                start: 1,
                end: 3,
                len: 2
            })
        );

        let removed = trajectory.remove_range(..).expect("valid range");
        assert_eq!(removed.len(), 2);
        assert!(trajectory.is_empty());
    }

    #[test]
    fn resize() {
        let mut trajectory = sample();
        trajectory.resize(6, point(40, 0.0, 4.0));
        assert_eq!(lengths(&trajectory), vec![0.0, 3.0, 3.0, 7.0, 10.0, 10.0]);
        assert_eq!(trajectory[3].current_length_fraction(), 0.7);

        trajectory.resize(2, point(0, 0.0, 0.0));
        assert_eq!(lengths(&trajectory), vec![0.0, 3.0]);
        assert_eq!(trajectory[1].current_length_fraction(), 1.0);
        assert_eq!(trajectory[1].current_time_fraction(), 1.0);
        assert_length_invariant(&trajectory);
    }

    #[test]
    fn assign_replaces_points() {
        let mut trajectory = sample();
        trajectory.assign([point(0, 1.0, 0.0), point(1, 1.0, 2.0)]);
        assert_eq!(lengths(&trajectory), vec![0.0, 2.0]);
        assert_length_invariant(&trajectory);

        trajectory.clear();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.length(), 0.0);
    }

    #[test]
    fn checked_access() {
        let mut trajectory = sample();
        assert_eq!(trajectory.at(3).map(|p| p.timestamp()), Ok(at(30)));
        assert_matches!(
            trajectory.at(4),
            Err(TrajectoryError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_matches!(
            trajectory.at_mut(10),
            Err(TrajectoryError::IndexOutOfRange { index: 10, len: 4 })
        );
        assert!(trajectory.is_length_valid());
    }

    #[test]
    #[should_panic]
    fn unchecked_access_panics_out_of_range() {
        let trajectory = sample();
        let _ = &trajectory[4];
    }

    #[test]
    fn direct_mutation_marks_lengths_stale() {
        let mut trajectory = sample();
        trajectory[1].point_mut().set_coord(1, 4.0);

        // Stale until recomputed
        assert!(!trajectory.is_length_valid());
        assert_eq!(trajectory[1].current_length(), 3.0);

        trajectory.compute_current_length(2);
        assert!(!trajectory.is_length_valid());

        trajectory.compute_current_length(1);
        assert!(trajectory.is_length_valid());
        assert_eq!(lengths(&trajectory), vec![0.0, 5.0, 9.0, 13.0]);
        assert_length_invariant(&trajectory);
    }

    #[test]
    fn stale_marker_survives_later_mutations() {
        let mut trajectory = sample();
        trajectory
            .at_mut(2)
            .expect("valid index")
            .point_mut()
            .set_coord(0, 0.0);

        trajectory.push(point(40, 3.0, 8.0));
        assert!(!trajectory.is_length_valid());

        trajectory.insert(1, point(5, 1.0, 0.0)).expect("valid index");
        assert!(trajectory.is_length_valid());
        assert_length_invariant(&trajectory);

        for p in trajectory.iter_mut() {
            p.set_timestamp(p.timestamp() + Duration::seconds(1));
        }
        assert!(!trajectory.is_length_valid());
        trajectory.compute_current_length(0);
        assert!(trajectory.is_length_valid());
    }

    #[test]
    fn recomputing_lengths_refreshes_fractions() {
        let mut trajectory = sample();
        trajectory.last_mut().expect("not empty").point_mut().set_coord(1, 5.0);
        trajectory[0].set_timestamp(at(-10));
        assert!(!trajectory.is_length_valid());

        trajectory.compute_current_length(0);
        assert!(trajectory.is_length_valid());

        let length_fractions: Vec<_> = trajectory
            .iter()
            .map(|p| p.current_length_fraction())
            .collect();
        assert_eq!(length_fractions, vec![0.0, 0.375, 0.375, 1.0]);

        let time_fractions: Vec<_> = trajectory
            .iter()
            .map(|p| p.current_time_fraction())
            .collect();
        assert_eq!(time_fractions, vec![0.0, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn compute_past_end_is_noop() {
        let mut trajectory = sample();
        let before = lengths(&trajectory);
        trajectory.compute_current_length(10);
        assert_eq!(lengths(&trajectory), before);
    }

    #[test]
    fn geographic_trajectory() {
        let start = GeoPoint2d::lonlat(0.0, 0.0);
        let mut trajectory = Trajectory::new();
        trajectory.push(TrajectoryPoint::new("ship", at(0), start));
        trajectory.push(TrajectoryPoint::new("ship", at(60), GeoPoint2d::lonlat(1.0, 0.0)));
        trajectory.push(TrajectoryPoint::new("ship", at(120), GeoPoint2d::lonlat(1.0, 1.0)));

        let degree = 2.0 * std::f64::consts::PI * 6371.0 / 360.0;
        assert_abs_diff_eq!(trajectory[1].current_length(), degree, epsilon = 1e-9);
        assert_abs_diff_eq!(trajectory.length(), 2.0 * degree, epsilon = 1e-6);
        assert_length_invariant(&trajectory);
    }

    #[test]
    fn point_at_time() {
        let trajectory = sample();

        let p = trajectory.point_at_time(at(5)).expect("not empty");
        assert_eq!(p.point(), &Point2::new(1.5, 0.0));
        assert_eq!(p.timestamp(), at(5));
        assert_eq!(p.current_length(), 1.5);

        let p = trajectory.point_at_time(at(20)).expect("not empty");
        assert_eq!(p, trajectory[2]);

        assert_eq!(trajectory.point_at_time(at(-5)).as_ref(), trajectory.first());
        assert_eq!(trajectory.point_at_time(at(100)).as_ref(), trajectory.last());
        assert!(Trajectory::<Point2>::new().point_at_time(at(0)).is_none());
    }

    #[test]
    fn point_at_length_fraction() {
        let trajectory = sample();

        let p = trajectory.point_at_length_fraction(0.5).expect("not empty");
        assert_abs_diff_eq!(*p.point(), Point2::new(3.0, 0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(p.current_length(), 3.5, epsilon = 1e-12);

        let p = trajectory.point_at_length_fraction(3.0 / 14.0).expect("not empty");
        assert_abs_diff_eq!(*p.point(), Point2::new(1.5, 0.0), epsilon = 1e-12);

        assert_eq!(trajectory.point_at_length_fraction(-1.0).as_ref(), trajectory.first());
        assert_eq!(trajectory.point_at_length_fraction(2.0).as_ref(), trajectory.last());
    }

    #[test]
    fn clone_is_deep() {
        let original = sample();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.remove(0).expect("valid index");
        copy.properties_mut().set("copied", 1i64);
        assert_ne!(copy, original);
        assert_eq!(original.len(), 4);
        assert!(original.properties().is_empty());
    }
}
