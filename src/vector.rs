use std::{fmt, io, slice, vec};

use crate::error::{Result, VectorError};

mod ops;
mod uninit;

pub use uninit::UninitVector;

/// A heap-allocated vector of `f32` elements whose dimension is chosen at runtime.
///
/// # Construction
///
/// - [`Vector::from_values`] copies the given elements, and the [`From`] impls for arrays, slices
///   and [`Vec`]s do the same (the [`Vec`] impl reuses the allocation).
/// - [`Vector::uniform`] copies the given value into each element; [`Vector::zeros`] is the
///   all-zero shorthand.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be collected from iterators of `f32`.
/// - [`Vector::uninit`] allocates storage without initializing it, see [`UninitVector`].
/// - [`Vector::default`] (or [`Vector::empty`]) is the 0-dimensional vector. It doesn't allocate,
///   and is only dimension-compatible with other empty vectors.
///
/// # Checked and unchecked operations
///
/// Operations that need both operands to have the same dimension come in two flavors:
///
/// - Methods like [`Vector::add_vector`] or [`Vector::cross`] return a [`VectorError`] when the
///   dimensions don't fit, and leave the receiver untouched.
/// - The [`std::ops`] operators (`&a + &b`, `a *= &b`, ...) panic instead.
///
/// Floating-point edge cases are never errors: dividing by zero or normalizing a zero vector
/// results in infinities or NaNs, just like with plain `f32`s.
///
/// # Formatting
///
/// The [`Display`][fmt::Display] impl (and [`Vector::print`]) renders vectors as `{ 1, 2.5, -3 }`.
/// Elements are printed with `f32`'s [`Display`][fmt::Display] impl, so integral values have no
/// trailing `.0`, and format flags like a precision are applied to each element.
#[derive(Clone, Default, PartialEq)]
pub struct Vector(Vec<f32>);

impl Vector {
    /// Creates the empty, 0-dimensional vector without allocating.
    #[inline]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Creates a vector holding a copy of `values`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let v = Vector::from_values(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.dimension(), 3);
    /// assert_eq!(v[1], 2.0);
    /// ```
    pub fn from_values(values: &[f32]) -> Self {
        Self(values.to_vec())
    }

    /// Creates a vector of the given dimension with each element set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// assert_eq!(Vector::uniform(3, 0.5), [0.5, 0.5, 0.5]);
    /// ```
    pub fn uniform(dimension: usize, value: f32) -> Self {
        Self(vec![value; dimension])
    }

    /// Creates a vector of the given dimension filled with zeroes.
    pub fn zeros(dimension: usize) -> Self {
        Self::uniform(dimension, 0.0)
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let v = Vector::from_fn(4, |i| i as f32 * 10.0);
    /// assert_eq!(v, [0.0, 10.0, 20.0, 30.0]);
    /// ```
    pub fn from_fn<F>(dimension: usize, cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        (0..dimension).map(cb).collect()
    }

    /// Allocates storage for `dimension` elements without initializing it.
    ///
    /// This is a low-level escape hatch for filling large vectors without writing every element
    /// twice. Most code should use [`Vector::from_fn`] or [`Vector::uniform`] instead.
    pub fn uninit(dimension: usize) -> UninitVector {
        UninitVector::new(dimension)
    }

    /// Returns the number of elements in this vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    /// Returns whether this is the 0-dimensional vector.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, f32> {
        self.0.iter_mut()
    }

    /// Consumes the vector, returning its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.0
    }

    /// Applies a closure to each element, returning the modified vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let v = Vector::from([1.0, 2.0, 3.0]).map(|e| e * 10.0);
    /// assert_eq!(v, [10.0, 20.0, 30.0]);
    /// ```
    pub fn map<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        self.0.iter_mut().for_each(|elem| *elem = f(*elem));
        self
    }

    /// Combines each element of `self` with the corresponding element of `other`.
    ///
    /// Nothing is modified unless both vectors have the same dimension.
    fn zip_assign<F>(&mut self, op: &'static str, other: &Vector, mut f: F) -> Result<()>
    where
        F: FnMut(&mut f32, f32),
    {
        VectorError::check_dimensions(op, self.dimension(), other.dimension())?;
        self.0
            .iter_mut()
            .zip(&other.0)
            .for_each(|(lhs, &rhs)| f(lhs, rhs));
        Ok(())
    }

    /// Adds `other` to `self`, element by element.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions. `self`
    /// is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let mut v = Vector::from([1.0, 2.0]);
    /// v.add_vector(&Vector::from([3.0, 4.0]))?;
    /// assert_eq!(v, [4.0, 6.0]);
    ///
    /// assert!(v.add_vector(&Vector::from([1.0, 2.0, 3.0])).is_err());
    /// assert_eq!(v, [4.0, 6.0]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn add_vector(&mut self, other: &Vector) -> Result<()> {
        self.zip_assign("add", other, |lhs, rhs| *lhs += rhs)
    }

    /// Subtracts `other` from `self`, element by element.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn subtract_vector(&mut self, other: &Vector) -> Result<()> {
        self.zip_assign("subtract", other, |lhs, rhs| *lhs -= rhs)
    }

    /// Multiplies each element of `self` with the corresponding element of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn multiply_with_vector(&mut self, other: &Vector) -> Result<()> {
        self.zip_assign("multiply", other, |lhs, rhs| *lhs *= rhs)
    }

    /// Divides each element of `self` by the corresponding element of `other`.
    ///
    /// Division by zero is not an error and yields infinities or NaNs.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn divide_by_vector(&mut self, other: &Vector) -> Result<()> {
        self.zip_assign("divide", other, |lhs, rhs| *lhs /= rhs)
    }

    /// Returns the element-wise sum of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn added(&self, other: &Vector) -> Result<Vector> {
        let mut out = self.clone();
        out.add_vector(other)?;
        Ok(out)
    }

    /// Returns the element-wise difference of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn subtracted(&self, other: &Vector) -> Result<Vector> {
        let mut out = self.clone();
        out.subtract_vector(other)?;
        Ok(out)
    }

    /// Returns the element-wise product of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn multiplied(&self, other: &Vector) -> Result<Vector> {
        let mut out = self.clone();
        out.multiply_with_vector(other)?;
        Ok(out)
    }

    /// Returns the element-wise quotient of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions.
    pub fn divided(&self, other: &Vector) -> Result<Vector> {
        let mut out = self.clone();
        out.divide_by_vector(other)?;
        Ok(out)
    }

    pub fn multiply_by_scalar(&mut self, scalar: f32) {
        self.0.iter_mut().for_each(|elem| *elem *= scalar);
    }

    pub fn divide_by_scalar(&mut self, scalar: f32) {
        self.0.iter_mut().for_each(|elem| *elem /= scalar);
    }

    pub fn add_scalar(&mut self, scalar: f32) {
        self.0.iter_mut().for_each(|elem| *elem += scalar);
    }

    pub fn subtract_scalar(&mut self, scalar: f32) {
        self.0.iter_mut().for_each(|elem| *elem -= scalar);
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Unlike the other binary operations, vectors of different dimension are not rejected: their
    /// dot product is `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let a = Vector::from([1.0, 3.0, -5.0]);
    /// let b = Vector::from([4.0, -2.0, -1.0]);
    /// assert_eq!(a.dot(&b), 3.0);
    /// assert_eq!(a.dot(&Vector::from([1.0])), 0.0);
    /// ```
    pub fn dot(&self, other: &Vector) -> f32 {
        if self.dimension() != other.dimension() {
            log::debug!(
                "dot: dimensions {} and {} differ, result is 0",
                self.dimension(),
                other.dimension(),
            );
            return 0.0;
        }

        self.0
            .iter()
            .zip(&other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the operands inverts its direction.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions, and
    /// [`VectorError::NotThreeDimensional`] if they aren't 3-dimensional.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let x = Vector::from([1.0, 0.0, 0.0]);
    /// let y = Vector::from([0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y)?, [0.0, 0.0, 1.0]);
    /// assert_eq!(y.cross(&x)?, [0.0, 0.0, -1.0]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        VectorError::check_dimensions("cross", self.dimension(), other.dimension())?;
        let (&[a1, a2, a3], &[b1, b2, b3]) = (self.as_slice(), other.as_slice()) else {
            log::debug!("cross: rejecting operands of dimension {}", self.dimension());
            return Err(VectorError::NotThreeDimensional {
                dimension: self.dimension(),
            });
        };

        #[rustfmt::skip]
        let cross = Vector::from([
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ]);
        Ok(cross)
    }

    /// Returns whether `self` and `other` are perpendicular, ie. whether their dot product is
    /// exactly zero.
    ///
    /// Vectors of different dimension are never orthogonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let x = Vector::from([1.0, 0.0]);
    /// assert!(x.is_orthogonal_to(&Vector::from([0.0, 1.0])));
    /// assert!(!x.is_orthogonal_to(&Vector::from([1.0, 1.0])));
    /// assert!(!x.is_orthogonal_to(&Vector::from([0.0, 1.0, 0.0])));
    /// ```
    pub fn is_orthogonal_to(&self, other: &Vector) -> bool {
        self.dimension() == other.dimension() && self.dot(other) == 0.0
    }

    /// Returns the sum of the squared elements, ie. the squared magnitude.
    pub fn squared_magnitude(&self) -> f32 {
        self.0.iter().map(|elem| elem * elem).sum()
    }

    /// Returns the magnitude (Euclidean length) of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// assert_eq!(Vector::from([3.0, 4.0]).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    /// Returns a copy of this vector divided by its magnitude.
    ///
    /// The result has unit length and points in the same direction as `self`. If `self` has a
    /// magnitude of zero, every element of the result is NaN.
    pub fn normalized(&self) -> Vector {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::trace!("normalizing a zero-magnitude vector of dimension {}", self.dimension());
        }
        self.clone().map(|elem| elem / magnitude)
    }

    /// Divides this vector by its magnitude, in place.
    ///
    /// See [`Vector::normalized`].
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns whether every element of `self` is exactly equal to the corresponding element of
    /// `other`.
    ///
    /// No tolerance is applied. NaN elements are never equal.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DimensionMismatch`] if the vectors have different dimensions. The
    /// [`PartialEq`] impl can be used instead to treat that case as "not equal".
    pub fn compare_with(&self, other: &Vector) -> Result<bool> {
        VectorError::check_dimensions("compare", self.dimension(), other.dimension())?;
        Ok(self.0 == other.0)
    }

    /// Writes this vector to `out`, followed by a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mathlib::*;
    /// let mut out = Vec::new();
    /// Vector::from([1.0, 2.0, 3.0]).print_to(&mut out)?;
    /// assert_eq!(out, b"{ 1, 2, 3 }\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn print_to<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write + ?Sized,
    {
        writeln!(out, "{self}")
    }

    /// Writes this vector to standard output, followed by a newline.
    pub fn print(&self) -> io::Result<()> {
        self.print_to(&mut io::stdout().lock())
    }
}

impl From<Vec<f32>> for Vector {
    #[inline]
    fn from(value: Vec<f32>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value.to_vec())
    }
}

impl From<&[f32]> for Vector {
    #[inline]
    fn from(value: &[f32]) -> Self {
        Self::from_values(value)
    }
}

impl From<Vector> for Vec<f32> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.0
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f32;
    type IntoIter = vec::IntoIter<f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut Vector {
    type Item = &'a mut f32;
    type IntoIter = slice::IterMut<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl AsRef<[f32]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl AsMut<[f32]> for Vector {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("Vector");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(" }")
    }
}
