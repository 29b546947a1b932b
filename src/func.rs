//! Free-function forms of the [`Vector`] operations.
//!
//! Every function here forwards to the corresponding [`Vector`] method, so both forms always agree.
//! They're convenient when the operands are symmetric, eg. `dot(&a, &b)` instead of `a.dot(&b)`.

use std::io;

use crate::{Result, Vector};

/// Returns the element-wise sum of `a` and `b`.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`][crate::VectorError::DimensionMismatch] if the vectors
/// have different dimensions.
///
/// # Examples
///
/// ```
/// # use mathlib::*;
/// let sum = add(&Vector::from([1.0, 2.0]), &Vector::from([3.0, 4.0]))?;
/// assert_eq!(sum, [4.0, 6.0]);
///
/// let err = add(&Vector::from([1.0, 2.0]), &Vector::from([1.0, 2.0, 3.0])).unwrap_err();
/// assert_eq!(err, VectorError::DimensionMismatch { left: 2, right: 3 });
/// # Ok::<(), VectorError>(())
/// ```
pub fn add(a: &Vector, b: &Vector) -> Result<Vector> {
    a.added(b)
}

/// Returns the element-wise difference of `a` and `b`.
pub fn subtract(a: &Vector, b: &Vector) -> Result<Vector> {
    a.subtracted(b)
}

/// Returns the element-wise product of `a` and `b`.
pub fn multiply(a: &Vector, b: &Vector) -> Result<Vector> {
    a.multiplied(b)
}

/// Returns the element-wise quotient of `a` and `b`.
pub fn divide(a: &Vector, b: &Vector) -> Result<Vector> {
    a.divided(b)
}

pub fn scalar_multiply(v: &Vector, scalar: f32) -> Vector {
    let mut out = v.clone();
    out.multiply_by_scalar(scalar);
    out
}

pub fn scalar_divide(v: &Vector, scalar: f32) -> Vector {
    let mut out = v.clone();
    out.divide_by_scalar(scalar);
    out
}

pub fn scalar_add(v: &Vector, scalar: f32) -> Vector {
    let mut out = v.clone();
    out.add_scalar(scalar);
    out
}

pub fn scalar_subtract(v: &Vector, scalar: f32) -> Vector {
    let mut out = v.clone();
    out.subtract_scalar(scalar);
    out
}

/// Computes the dot product of `a` and `b`, or `0.0` if their dimensions differ.
pub fn dot(a: &Vector, b: &Vector) -> f32 {
    a.dot(b)
}

/// Computes the cross product of two 3-dimensional vectors.
pub fn cross(a: &Vector, b: &Vector) -> Result<Vector> {
    a.cross(b)
}

/// Returns whether `a` and `b` have the same dimension and a dot product of exactly zero.
pub fn orthogonal(a: &Vector, b: &Vector) -> bool {
    a.is_orthogonal_to(b)
}

pub fn squared_magnitude(v: &Vector) -> f32 {
    v.squared_magnitude()
}

pub fn magnitude(v: &Vector) -> f32 {
    v.magnitude()
}

pub fn normalized(v: &Vector) -> Vector {
    v.normalized()
}

/// Returns whether `a` and `b` are exactly equal, element by element.
pub fn compare(a: &Vector, b: &Vector) -> Result<bool> {
    a.compare_with(b)
}

/// Writes `v` to `out` as `{ e0, e1, ... }`, followed by a newline.
pub fn print<W>(v: &Vector, out: &mut W) -> io::Result<()>
where
    W: io::Write + ?Sized,
{
    v.print_to(out)
}
