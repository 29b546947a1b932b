use std::{
    fmt,
    mem::{self, MaybeUninit},
};

use super::Vector;

/// Storage for a [`Vector`] whose elements have not been initialized yet.
///
/// Returned by [`Vector::uninit`]. Reading an element before it has been written is undefined
/// behavior, which is why the only way to read the contents is through [`Vector`]:
///
/// - [`UninitVector::init_with`] and [`UninitVector::fill`] write every element and are safe.
/// - [`UninitVector::assume_init`] is `unsafe` and requires the caller to have written every
///   element via [`UninitVector::as_mut_slice`].
///
/// # Examples
///
/// ```
/// # use mathlib::*;
/// let mut v = Vector::uninit(3);
/// for (i, elem) in v.as_mut_slice().iter_mut().enumerate() {
///     elem.write(i as f32 * 2.0);
/// }
/// // SAFETY: every element was written above.
/// let v = unsafe { v.assume_init() };
/// assert_eq!(v, [0.0, 2.0, 4.0]);
/// ```
pub struct UninitVector(Vec<MaybeUninit<f32>>);

impl UninitVector {
    pub(super) fn new(dimension: usize) -> Self {
        let mut elems = Vec::with_capacity(dimension);
        elems.resize_with(dimension, MaybeUninit::uninit);
        Self(elems)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [MaybeUninit<f32>] {
        &mut self.0
    }

    /// Initializes each element by invoking `cb` with its index.
    pub fn init_with<F>(mut self, mut cb: F) -> Vector
    where
        F: FnMut(usize) -> f32,
    {
        for (i, elem) in self.0.iter_mut().enumerate() {
            elem.write(cb(i));
        }

        // SAFETY: the loop above wrote every element.
        unsafe { self.assume_init() }
    }

    /// Initializes every element with `value`.
    pub fn fill(self, value: f32) -> Vector {
        self.init_with(|_| value)
    }

    /// Converts this into a [`Vector`], assuming that all elements have been written.
    ///
    /// # Safety
    ///
    /// Every element must have been initialized through [`UninitVector::as_mut_slice`].
    pub unsafe fn assume_init(self) -> Vector {
        log::trace!("assuming {} vector elements are initialized", self.dimension());

        let mut elems = mem::ManuallyDrop::new(self.0);
        let (ptr, len, cap) = (elems.as_mut_ptr(), elems.len(), elems.capacity());
        // SAFETY: `MaybeUninit<f32>` has the same layout as `f32`, the allocation is taken over from
        // a `Vec` that won't be dropped, and the caller guarantees that the contents are initialized.
        let elems = unsafe { Vec::from_raw_parts(ptr.cast::<f32>(), len, cap) };
        Vector::from(elems)
    }
}

impl fmt::Debug for UninitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UninitVector")
            .field("dimension", &self.dimension())
            .finish_non_exhaustive()
    }
}
