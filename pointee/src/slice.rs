use super::*;

use core::cmp;
use core::convert::TryFrom;
use core::fmt;
use core::hash;
use core::marker::PhantomData;
use core::mem;
use core::ptr;

use thiserror::Error;

/// The length of a slice.
#[repr(transparent)]
pub struct SliceLen<T> {
    marker: PhantomData<*const T>,
    len: usize,
}

impl<T> SliceLen<T> {
    /// Creates a new `SliceLen<T>`.
    ///
    /// Returns `None` if a `[T]` of that length would be larger than `isize::MAX` bytes.
    #[inline(always)]
    pub fn new(len: usize) -> Option<Self> {
        mem::size_of::<T>().checked_mul(len)
            .and_then(|len_bytes| {
                if len_bytes <= (isize::max_value() as usize) {
                    Some(unsafe { SliceLen::new_unchecked(len) })
                } else {
                    None
                }
            })
    }

    /// Creates a new `SliceLen<T>` without checking that the length is valid.
    ///
    /// # Safety
    ///
    /// `len * size_of::<T>()` must not exceed `isize::MAX`.
    #[inline(always)]
    pub const unsafe fn new_unchecked(len: usize) -> Self {
        Self { marker: PhantomData, len }
    }

    /// Gets the underlying length.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.len
    }
}

impl<T> fmt::Debug for SliceLen<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        self.len.fmt(f)
    }
}

impl<T> Clone for SliceLen<T> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}
impl<T> Copy for SliceLen<T> {}

impl<T> cmp::PartialEq for SliceLen<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
    }
}
impl<T> cmp::Eq for SliceLen<T> {}

impl<T> cmp::PartialOrd for SliceLen<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<T> cmp::Ord for SliceLen<T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.len.cmp(&other.len)
    }
}

impl<T> hash::Hash for SliceLen<T> {
    #[inline(always)]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state)
    }
}

impl<T> From<SliceLen<T>> for usize {
    #[inline(always)]
    fn from(len: SliceLen<T>) -> usize {
        len.len
    }
}

unsafe impl<T> Sync for SliceLen<T> {}
unsafe impl<T> Send for SliceLen<T> {}

/// Error when a slice length is too large for a given type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("slice of {len} elements overflows isize::MAX bytes")]
pub struct SliceLenError {
    pub len: usize,
}

impl<T> TryFrom<usize> for SliceLen<T> {
    type Error = SliceLenError;

    #[inline]
    fn try_from(len: usize) -> Result<Self, Self::Error> {
        Self::new(len).ok_or(SliceLenError { len })
    }
}

unsafe impl<T> Pointee for [T] {
    type Metadata = SliceLen<T>;

    const NULL_METADATA: SliceLen<T> = unsafe { SliceLen::new_unchecked(0) };

    #[inline(always)]
    fn metadata(ptr: NonNull<Self>) -> Self::Metadata {
        unsafe {
            SliceLen::new_unchecked(ptr.len())
        }
    }

    #[inline(always)]
    fn make_fat_ptr_mut(thin: *mut (), len: Self::Metadata) -> *mut [T] {
        ptr::slice_from_raw_parts_mut(thin as *mut T, len.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_len_new() {
        assert_eq!(SliceLen::<u8>::new(10).map(SliceLen::get), Some(10));
        assert_eq!(SliceLen::<u8>::new(isize::max_value() as usize).map(SliceLen::get),
                   Some(isize::max_value() as usize));
        assert!(SliceLen::<u8>::new(isize::max_value() as usize + 1).is_none());
        assert!(SliceLen::<u64>::new(usize::max_value()).is_none());

        // zero-sized types never overflow
        assert_eq!(SliceLen::<()>::new(usize::max_value()).map(SliceLen::get),
                   Some(usize::max_value()));
    }

    #[test]
    fn slice_len_try_from() {
        assert_eq!(SliceLen::<u32>::try_from(3).map(usize::from), Ok(3));
        assert_eq!(SliceLen::<u32>::try_from(usize::max_value()),
                   Err(SliceLenError { len: usize::max_value() }));
        assert_eq!(SliceLenError { len: 7 }.to_string(),
                   "slice of 7 elements overflows isize::MAX bytes");
    }

    #[test]
    fn slice_metadata() {
        let mut v = [1u8, 2, 3];
        let len = <[u8] as Pointee>::metadata(NonNull::from(&mut v[..]));
        assert_eq!(len.get(), 3);
    }

    #[test]
    fn slice_null() {
        let p = <[u16] as Pointee>::null_mut();
        assert!(p.is_null());
        assert_eq!(<[u16] as Pointee>::NULL_METADATA.get(), 0);
    }

    #[test]
    fn slice_fat_ptr_roundtrip() {
        let mut v = [1u8, 2, 3, 4];
        let thin = v.as_mut_ptr() as *mut ();
        let len = SliceLen::new(4).unwrap();

        let fat = <[u8] as Pointee>::make_fat_ptr_mut(thin, len);
        let r: &[u8] = unsafe { &*fat };
        assert_eq!(r, &[1, 2, 3, 4]);
    }
}
