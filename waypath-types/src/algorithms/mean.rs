use crate::arithmetic::{add_in_place, divide_scalar_in_place, multiply_scalar};
use crate::error::WaypathTypesError;
use crate::point::{num_cast, Point};

/// Componentwise average of the points.
///
/// An empty sequence has no mean; for it the zero point is returned.
pub fn geometric_mean<'a, P, I>(points: I) -> P
where
    P: Point + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let mut sum = P::zero();
    let mut count = 0usize;
    for point in points {
        add_in_place(&mut sum, point);
        count += 1;
    }

    if count > 0 {
        divide_scalar_in_place(&mut sum, num_cast(count));
    }

    sum
}

/// Sum of the points multiplied by their weights.
///
/// The result is not divided by the sum of the weights, normalize them beforehand to get a weighted average.
/// Empty sequences sum up to the zero point. Sequences of different lengths are rejected with
/// [`WaypathTypesError::LengthMismatch`].
pub fn weighted_sum<'a, P, I, W>(points: I, weights: W) -> Result<P, WaypathTypesError>
where
    P: Point + 'a,
    I: IntoIterator<Item = &'a P>,
    W: IntoIterator<Item = P::Num>,
{
    let mut points = points.into_iter();
    let mut weights = weights.into_iter();
    let mut sum = P::zero();
    let mut count = 0usize;

    loop {
        match (points.next(), weights.next()) {
            (Some(point), Some(weight)) => {
                add_in_place(&mut sum, &multiply_scalar(point, weight));
                count += 1;
            }
            (None, None) => return Ok(sum),
            (point, weight) => {
                return Err(WaypathTypesError::LengthMismatch {
                    points: count + usize::from(point.is_some()) + points.count(),
                    weights: count + usize::from(weight.is_some()) + weights.count(),
                });
            }
        }
    }
}
