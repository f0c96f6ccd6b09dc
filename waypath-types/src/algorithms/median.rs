use num_traits::{Float, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::algorithms::mean::{geometric_mean, weighted_sum};
use crate::arithmetic::{add, multiply_scalar, norm, subtract};
use crate::error::WaypathTypesError;
use crate::point::{num_cast, Distance, Point};

/// Lower bound of the median tolerance in units of machine epsilon times the largest coordinate magnitude.
const ROUNDING_STEPS: f64 = 4.0;

/// Parameters of the geometric median iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedianOptions {
    /// Convergence tolerance relative to the largest coordinate span of the input points. The iteration
    /// stops once the estimate moves by no more than `relative_tolerance * span`.
    ///
    /// The tolerance is never smaller than a few units of floating point rounding at the magnitude of the
    /// coordinates, so tight clouds far from the origin still converge.
    pub relative_tolerance: f64,
    /// Maximum number of iterations before giving up with [`WaypathTypesError::DidNotConverge`].
    pub max_iterations: usize,
}

impl Default for MedianOptions {
    fn default() -> Self {
        Self {
            relative_tolerance: 1e-9,
            max_iterations: 1000,
        }
    }
}

/// Geometric (L1) median of the points with default [`MedianOptions`].
///
/// See [`geometric_median_with_options`].
pub fn geometric_median<'a, P, I>(points: I) -> Result<P, WaypathTypesError>
where
    P: Distance + 'a,
    I: IntoIterator<Item = &'a P>,
    I::IntoIter: Clone,
{
    geometric_median_with_options(points, &MedianOptions::default())
}

/// Geometric (L1) median of the points: the point minimizing the sum of distances to all of them, using the
/// metric of the point type.
///
/// Computed with Weiszfeld's iteration starting from the geometric mean. When the estimate lands exactly on
/// some of the input points, the step is corrected as proposed by Vardi and Zhang, so the iteration does not
/// get stuck there.
///
/// The points are traversed several times, so the iterator must be cloneable. An empty sequence returns the
/// zero point. If the estimate still moves by more than the tolerance after
/// [`MedianOptions::max_iterations`] iterations, [`WaypathTypesError::DidNotConverge`] is returned.
///
/// ```
/// use waypath_types::algorithms::geometric_median;
/// use waypath_types::cartesian::Point2;
///
/// let points = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)];
/// let median: Point2 = geometric_median(&points).unwrap();
/// assert!((median.x() - 0.2113).abs() < 1e-4);
/// ```
pub fn geometric_median_with_options<'a, P, I>(
    points: I,
    options: &MedianOptions,
) -> Result<P, WaypathTypesError>
where
    P: Distance + 'a,
    I: IntoIterator<Item = &'a P>,
    I::IntoIter: Clone,
{
    let points = points.into_iter();
    let num_points = points.clone().count();
    if num_points == 0 {
        return Ok(P::zero());
    }

    let zero = P::Num::zero();
    let one: P::Num = num_cast(1.0);
    let zero_limit: P::Num = num_cast(options.relative_tolerance);
    let rounding_limit = P::Num::epsilon() * num_cast::<P::Num, _>(ROUNDING_STEPS);
    let tolerance = (zero_limit * max_coordinate_span(points.clone()))
        .max(rounding_limit * max_coordinate_magnitude(points.clone()));

    let mut estimate = geometric_mean(points.clone());
    let mut weights = Vec::with_capacity(num_points);
    let mut last_step = P::Num::infinity();

    for iteration in 1..=options.max_iterations {
        weights.clear();
        let mut zero_count = 0usize;
        for point in points.clone() {
            // 0/0 == 0: a point under the estimate does not pull it anywhere
            let distance = estimate.distance(point);
            if distance == zero {
                zero_count += 1;
                weights.push(zero);
            } else {
                weights.push(one / distance);
            }
        }

        if zero_count == num_points {
            log::debug!(
                "All points coincide with the median estimate after {iteration} iterations"
            );
            return Ok(estimate);
        }

        let inverse_distance_sum = weights.iter().fold(zero, |acc, &weight| acc + weight);
        for weight in weights.iter_mut() {
            *weight = *weight / inverse_distance_sum;
        }

        let trial = weighted_sum(points.clone(), weights.iter().copied())?;
        let next = if zero_count == 0 {
            trial
        } else {
            let motion = multiply_scalar(&subtract(&trial, &estimate), inverse_distance_sum);
            let motion_norm = norm(&motion);
            let residual_inverse = if motion_norm > zero {
                num_cast::<P::Num, _>(zero_count) / motion_norm
            } else {
                zero
            };

            add(
                &multiply_scalar(&trial, (one - residual_inverse).max(zero)),
                &multiply_scalar(&estimate, residual_inverse.min(one)),
            )
        };

        last_step = estimate.distance(&next);
        estimate = next;
        log::trace!(
            "Median iteration {iteration}: step {}, {zero_count} coincident points",
            last_step.to_f64().unwrap_or(f64::NAN)
        );

        if last_step <= tolerance {
            log::debug!("Median of {num_points} points converged after {iteration} iterations");
            return Ok(estimate);
        }
    }

    let last_step = last_step.to_f64().unwrap_or(f64::NAN);
    log::warn!(
        "Median of {num_points} points did not converge in {} iterations, last step {last_step}",
        options.max_iterations
    );

    Err(WaypathTypesError::DidNotConverge {
        iterations: options.max_iterations,
        last_step,
    })
}

/// Largest absolute value of a coordinate among all points.
fn max_coordinate_magnitude<'a, P: Point + 'a>(points: impl Iterator<Item = &'a P>) -> P::Num {
    points
        .flat_map(|point| (0..P::DIMENSIONS).map(move |dimension| point.coord(dimension).abs()))
        .fold(P::Num::zero(), |acc, value| acc.max(value))
}

/// Largest difference between the minimum and maximum value of a coordinate among all dimensions.
fn max_coordinate_span<'a, P: Point + 'a>(points: impl Iterator<Item = &'a P> + Clone) -> P::Num {
    (0..P::DIMENSIONS)
        .map(|dimension| {
            let (min, max) = points.clone().fold(
                (P::Num::infinity(), P::Num::neg_infinity()),
                |(min, max), point| {
                    let value = point.coord(dimension);
                    (min.min(value), max.max(value))
                },
            );
            max - min
        })
        .fold(P::Num::zero(), |acc, span| acc.max(span))
}
