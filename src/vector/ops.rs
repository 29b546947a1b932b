//! Implementations of `std::ops`.
//!
//! Element-wise operators between two vectors panic when the dimensions differ. The checked methods
//! on [`Vector`] report a [`VectorError`][crate::VectorError] instead.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl Index<usize> for Vector {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector {
    fn eq(&self, other: &[f32; N]) -> bool {
        self.0 == other
    }
}

impl PartialEq<[f32]> for Vector {
    fn eq(&self, other: &[f32]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[f32]> for Vector {
    fn eq(&self, other: &&[f32]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Vector> for [f32] {
    fn eq(&self, other: &Vector) -> bool {
        *self == *other.0
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(|elem| -elem)
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! elementwise_ops {
    ($(
        $doc:literal
        $op:ident::$method:ident, $assign_op:ident::$assign_method:ident => $checked:ident;
    )+) => {
        $(
            #[doc = $doc]
            ///
            /// # Panics
            ///
            #[doc = concat!("Panics if the operands have different dimensions. Use [`Vector::", stringify!($checked), "`] to handle that case instead.")]
            impl $assign_op<&Vector> for Vector {
                #[track_caller]
                fn $assign_method(&mut self, rhs: &Vector) {
                    if let Err(e) = self.$checked(rhs) {
                        panic!("{e}");
                    }
                }
            }

            #[doc = $doc]
            impl $assign_op<Vector> for Vector {
                #[track_caller]
                fn $assign_method(&mut self, rhs: Vector) {
                    <Vector as $assign_op<&Vector>>::$assign_method(self, &rhs);
                }
            }

            #[doc = $doc]
            impl $op<&Vector> for Vector {
                type Output = Vector;

                #[track_caller]
                fn $method(mut self, rhs: &Vector) -> Self::Output {
                    <Vector as $assign_op<&Vector>>::$assign_method(&mut self, rhs);
                    self
                }
            }

            #[doc = $doc]
            impl $op<Vector> for Vector {
                type Output = Vector;

                #[track_caller]
                fn $method(mut self, rhs: Vector) -> Self::Output {
                    <Vector as $assign_op<&Vector>>::$assign_method(&mut self, &rhs);
                    self
                }
            }

            #[doc = $doc]
            impl $op<&Vector> for &Vector {
                type Output = Vector;

                #[track_caller]
                fn $method(self, rhs: &Vector) -> Self::Output {
                    <Vector as $op<&Vector>>::$method(self.clone(), rhs)
                }
            }
        )+
    };
}

elementwise_ops! {
    "Element-wise addition."
    Add::add, AddAssign::add_assign => add_vector;
    "Element-wise subtraction."
    Sub::sub, SubAssign::sub_assign => subtract_vector;
    "Element-wise multiplication."
    Mul::mul, MulAssign::mul_assign => multiply_with_vector;
    "Element-wise division."
    Div::div, DivAssign::div_assign => divide_by_vector;
}

// NB: like element-wise multiplication, scalar addition and subtraction are supported for
// convenience, so `v + 1.0` adds 1 to every element.

macro_rules! scalar_ops {
    ($(
        $doc:literal
        $op:ident::$method:ident, $assign_op:ident::$assign_method:ident => $inplace:ident;
    )+) => {
        $(
            #[doc = $doc]
            impl $assign_op<f32> for Vector {
                fn $assign_method(&mut self, rhs: f32) {
                    self.$inplace(rhs);
                }
            }

            #[doc = $doc]
            impl $op<f32> for Vector {
                type Output = Vector;

                fn $method(mut self, rhs: f32) -> Self::Output {
                    self.$inplace(rhs);
                    self
                }
            }

            #[doc = $doc]
            impl $op<f32> for &Vector {
                type Output = Vector;

                fn $method(self, rhs: f32) -> Self::Output {
                    <Vector as $op<f32>>::$method(self.clone(), rhs)
                }
            }
        )+
    };
}

scalar_ops! {
    "Vector-Scalar addition."
    Add::add, AddAssign::add_assign => add_scalar;
    "Vector-Scalar subtraction."
    Sub::sub, SubAssign::sub_assign => subtract_scalar;
    "Vector-Scalar multiplication (scaling)."
    Mul::mul, MulAssign::mul_assign => multiply_by_scalar;
    "Vector-Scalar division (scaling)."
    Div::div, DivAssign::div_assign => divide_by_scalar;
}

/// Vectors of different dimension are never approximately equal.
#[cfg(feature = "approx")]
impl AbsDiffEq for Vector {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| f32::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| f32::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl UlpsEq for Vector {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.dimension() == other.dimension()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| f32::ulps_eq(a, b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Vector, VectorError};

    #[test]
    fn index() {
        let mut v = Vector::from([1.0, 2.0]);
        v[1] = 5.0;
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 5.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = Vector::from([1.0, 2.0]);
        let _ = v[2];
    }

    #[test]
    fn eq() {
        let v = Vector::from([1.0, 2.0]);
        assert_eq!(v, [1.0, 2.0]);
        assert_eq!(v, *[1.0, 2.0].as_slice());
        assert_eq!(v, [1.0, 2.0].as_slice());
        assert_eq!(*[1.0, 2.0].as_slice(), v);
        assert_ne!(v, [1.0, 2.0, 0.0]);
        assert_ne!(v, Vector::from([1.0, 2.0, 0.0]));
    }

    #[test]
    fn elementwise() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([3.0, 4.0]);
        assert_eq!(&a + &b, [4.0, 6.0]);
        assert_eq!(&a - &b, [-2.0, -2.0]);
        assert_eq!(&a * &b, [3.0, 8.0]);
        assert_eq!(&b / &a, [3.0, 2.0]);
        assert_eq!(a.clone() + b.clone(), [4.0, 6.0]);
        assert_eq!(a.clone() - &b, [-2.0, -2.0]);

        let mut c = a.clone();
        c += &b;
        c *= b.clone();
        c -= &a;
        c /= Vector::uniform(2, 2.0);
        assert_eq!(c, [5.5, 11.0]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: 2 vs 3")]
    fn elementwise_mismatch_panics() {
        let _ = &Vector::zeros(2) + &Vector::zeros(3);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch: 0 vs 1")]
    fn assign_mismatch_panics() {
        let mut v = Vector::empty();
        v /= Vector::zeros(1);
    }

    #[test]
    fn scalar() {
        let v = Vector::from([1.0, -2.0]);
        assert_eq!(&v * 3.0, [3.0, -6.0]);
        assert_eq!(&v / 2.0, [0.5, -1.0]);
        assert_eq!(&v + 1.0, [2.0, -1.0]);
        assert_eq!(&v - 1.0, [0.0, -3.0]);
        assert_eq!(-&v, [-1.0, 2.0]);
        assert_eq!(-v.clone(), [-1.0, 2.0]);

        let mut w = v;
        w *= 2.0;
        w += 1.0;
        w -= 0.5;
        w /= 0.5;
        assert_eq!(w, [5.0, -7.0]);
    }

    #[test]
    fn operators_match_checked_methods() -> Result<(), VectorError> {
        let a = Vector::from([1.5, -2.0, 8.0]);
        let b = Vector::from([0.5, 4.0, -2.0]);
        assert_eq!(&a + &b, a.added(&b)?);
        assert_eq!(&a - &b, a.subtracted(&b)?);
        assert_eq!(&a * &b, a.multiplied(&b)?);
        assert_eq!(&a / &b, a.divided(&b)?);
        Ok(())
    }

    #[cfg(feature = "approx")]
    #[test]
    fn approx_eq() {
        use approx::{assert_abs_diff_eq, assert_relative_eq, assert_ulps_eq, AbsDiffEq};

        let a = Vector::from([0.1 + 0.2, 1.0]);
        let b = Vector::from([0.3, 1.0]);
        assert_abs_diff_eq!(a, b);
        assert_relative_eq!(a, b);
        assert_ulps_eq!(a, b);

        assert!(!a.abs_diff_eq(&Vector::from([0.3]), 1.0));
        assert!(!a.abs_diff_eq(&Vector::from([0.4, 1.0]), 0.01));
        assert!(a.abs_diff_eq(&Vector::from([0.4, 1.0]), 0.2));
    }
}
