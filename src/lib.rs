//! Variable-dimension `f32` vectors.
//!
//! This crate provides a single type, [`Vector`]: an owned, heap-allocated sequence of `f32`
//! elements whose dimension is picked at runtime. It supports element-wise arithmetic, scalar
//! operations, dot and cross products, magnitude and normalization, which is enough for simple
//! graphics and simulation code that doesn't need a full numerics stack.
//!
//! Every operation is available as a method on [`Vector`]. The same operations are also exported
//! as free functions (eg. [`dot`], [`cross`], [`add`]), which forward to the methods.
//!
//! # Errors
//!
//! Operations that combine two vectors element by element require them to have the same dimension,
//! and the cross product requires 3-dimensional operands. Violating these preconditions is reported
//! as a [`VectorError`]; the operators in [`std::ops`] panic instead. There are two exceptions:
//! [`Vector::dot`] returns `0.0` for vectors of different dimension, and
//! [`Vector::is_orthogonal_to`] returns `false`.
//!
//! Numeric edge cases are not errors. Dividing by zero or normalizing a zero vector produces
//! infinities and NaNs according to IEEE-754.
//!
//! # Logging
//!
//! Rejected operations are logged at `debug` level via the [`log`] crate.
//!
//! # Features
//!
//! - `approx` (enabled by default): implements the comparison traits of the [approx] crate for
//!   [`Vector`], to compare vectors with a tolerance instead of exactly.
//!
//! [approx]: https://docs.rs/approx
//!
//! # Examples
//!
//! ```
//! use mathlib::Vector;
//!
//! let a = Vector::from([1.0, 2.0]);
//! let b = Vector::from([3.0, 4.0]);
//! assert_eq!(a.added(&b)?, [4.0, 6.0]);
//! assert_eq!(b.magnitude(), 5.0);
//! assert_eq!(b.to_string(), "{ 3, 4 }");
//! # Ok::<(), mathlib::VectorError>(())
//! ```

mod error;
mod func;
mod vector;

pub use error::*;
pub use func::*;
pub use vector::*;
