//! Heap arrays.

use core::convert::TryFrom;
use core::iter::FromIterator;
use core::ops;
use core::ptr::NonNull;

use pointee::{Pointee, SliceLen, SliceLenError};

use crate::errors::IndexError;
use crate::unique::UniquePtr;

impl<T> UniquePtr<[T]> {
    /// Takes ownership of a `Vec`'s elements.
    ///
    /// Spare capacity is discarded, so the block is exactly `vec.len()` long.
    #[inline]
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_box(vec.into_boxed_slice())
    }

    /// Allocates a block of `len` default values.
    pub fn new_default(len: usize) -> Self
        where T: Default
    {
        (0 .. len).map(|_| T::default()).collect()
    }

    /// Takes ownership of a block from its first element and length.
    ///
    /// A null `thin` creates a null `UniquePtr`, whatever `len` is. Fails without taking ownership
    /// if `len` elements of `T` can't fit in `isize::MAX` bytes.
    ///
    /// # Safety
    ///
    /// A non-null `thin` must be the start of a `Box<[T]>` of exactly `len` elements, and is subject
    /// to the same ownership requirements as `from_raw()`.
    #[inline]
    pub unsafe fn from_raw_parts(thin: *mut T, len: usize) -> Result<Self, SliceLenError> {
        if thin.is_null() {
            Ok(Self::null())
        } else {
            let len = SliceLen::try_from(len)?;
            let fat = <[T]>::make_fat_ptr_mut(thin as *mut (), len);
            Ok(Self::from_raw(fat))
        }
    }

    /// Number of elements in the owned block; zero if null.
    #[inline(always)]
    pub fn len(&self) -> usize {
        NonNull::new(self.get())
            .map(|raw| <[T]>::metadata(raw).get())
            .unwrap_or(0)
    }

    /// Returns a thin pointer to the first element, or null.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.get() as *mut T
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Fails if `self` is null or `index` is out of bounds.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T, IndexError> {
        let slice = self.as_ref().ok_or(IndexError::Null { index })?;
        let len = slice.len();
        slice.get(index).ok_or(IndexError::OutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Fails if `self` is null or `index` is out of bounds.
    #[inline]
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let slice = self.as_mut().ok_or(IndexError::Null { index })?;
        let len = slice.len();
        slice.get_mut(index).ok_or(IndexError::OutOfBounds { index, len })
    }

    /// Returns a reference to the element at `index`, without any checks.
    ///
    /// # Safety
    ///
    /// `self` must not be null, and `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        &*(self.get() as *mut T).add(index)
    }

    /// Returns a mutable reference to the element at `index`, without any checks.
    ///
    /// # Safety
    ///
    /// `self` must not be null, and `index` must be less than `self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        &mut *self.as_mut_ptr().add(index)
    }
}

impl<T> ops::Index<usize> for UniquePtr<[T]> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `self` is null or `index` is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.try_get(index) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> ops::IndexMut<usize> for UniquePtr<[T]> {
    /// # Panics
    ///
    /// Panics if `self` is null or `index` is out of bounds.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.try_get_mut(index) {
            Ok(r) => r,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> From<Vec<T>> for UniquePtr<[T]> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T> FromIterator<T> for UniquePtr<[T]> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_box(iter.into_iter().collect())
    }
}
