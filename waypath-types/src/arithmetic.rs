//! Vector algebra on any [`Point`].
//!
//! All functions are pure except the `*_in_place` variants, which mutate their first argument and
//! return it back. Division by zero is not checked: it produces IEEE NaN/infinite coordinates.

use crate::point::Point;
use num_traits::{Float, Zero};

/// Point with all coordinates set to 0.
pub fn zero<P: Point>() -> P {
    P::zero()
}

fn combine_in_place<'a, P: Point>(
    left: &'a mut P,
    right: &P,
    op: impl Fn(P::Num, P::Num) -> P::Num,
) -> &'a mut P {
    for i in 0..P::DIMENSIONS {
        left.set_coord(i, op(left.coord(i), right.coord(i)));
    }
    left
}

fn map_in_place<P: Point>(point: &mut P, op: impl Fn(P::Num) -> P::Num) -> &mut P {
    for i in 0..P::DIMENSIONS {
        point.set_coord(i, op(point.coord(i)));
    }
    point
}

/// Adds `right` to `left` componentwise.
pub fn add_in_place<'a, P: Point>(left: &'a mut P, right: &P) -> &'a mut P {
    combine_in_place(left, right, |a, b| a + b)
}

/// Componentwise sum.
pub fn add<P: Point>(left: &P, right: &P) -> P {
    let mut result = left.clone();
    add_in_place(&mut result, right);
    result
}

/// Subtracts `right` from `left` componentwise.
pub fn subtract_in_place<'a, P: Point>(left: &'a mut P, right: &P) -> &'a mut P {
    combine_in_place(left, right, |a, b| a - b)
}

/// Componentwise difference.
pub fn subtract<P: Point>(left: &P, right: &P) -> P {
    let mut result = left.clone();
    subtract_in_place(&mut result, right);
    result
}

/// Multiplies `left` by `right` componentwise.
pub fn multiply_in_place<'a, P: Point>(left: &'a mut P, right: &P) -> &'a mut P {
    combine_in_place(left, right, |a, b| a * b)
}

/// Componentwise product.
pub fn multiply<P: Point>(left: &P, right: &P) -> P {
    let mut result = left.clone();
    multiply_in_place(&mut result, right);
    result
}

/// Multiplies every coordinate of `point` by `scalar`.
pub fn multiply_scalar_in_place<P: Point>(point: &mut P, scalar: P::Num) -> &mut P {
    map_in_place(point, |a| a * scalar)
}

/// Point with every coordinate multiplied by `scalar`.
pub fn multiply_scalar<P: Point>(point: &P, scalar: P::Num) -> P {
    let mut result = point.clone();
    multiply_scalar_in_place(&mut result, scalar);
    result
}

/// Divides every coordinate of `point` by `scalar`.
pub fn divide_scalar_in_place<P: Point>(point: &mut P, scalar: P::Num) -> &mut P {
    map_in_place(point, |a| a / scalar)
}

/// Point with every coordinate divided by `scalar`.
pub fn divide_scalar<P: Point>(point: &P, scalar: P::Num) -> P {
    let mut result = point.clone();
    divide_scalar_in_place(&mut result, scalar);
    result
}

/// Sum of componentwise products.
pub fn dot<P: Point>(left: &P, right: &P) -> P::Num {
    (0..P::DIMENSIONS).fold(P::Num::zero(), |acc, i| {
        acc + left.coord(i) * right.coord(i)
    })
}

/// Squared euclidean length of the point treated as a vector.
pub fn norm_squared<P: Point>(point: &P) -> P::Num {
    dot(point, point)
}

/// Euclidean length of the point treated as a vector.
pub fn norm<P: Point>(point: &P) -> P::Num {
    norm_squared(point).sqrt()
}

/// Point divided by its own norm. Zero points produce NaN coordinates.
pub fn normalize<P: Point>(point: &P) -> P {
    divide_scalar(point, norm(point))
}
