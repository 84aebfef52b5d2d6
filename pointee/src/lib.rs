//! Targets of pointers.
//!
//! A `*mut T` to a sized `T` is a single address. A `*mut [T]` also carries the element count,
//! and that count is what a heap block has to be freed with. `Pointee` abstracts over the two so
//! that owning pointers can be written once for both.

use core::fmt;
use core::hash::Hash;
use core::ptr::{self, NonNull};

mod slice;
pub use self::slice::*;

/// A target of a pointer.
///
/// # Safety
///
/// Other code can assume `Pointee` is implemented correctly: `make_fat_ptr_mut()` must round-trip
/// the address and metadata of any pointer it is given, and `NULL_METADATA` must be valid metadata
/// for a null pointer.
pub unsafe trait Pointee {
    /// Fat pointer metadata.
    type Metadata : Sized + Copy + fmt::Debug + Eq + Ord + Hash + Send + Sync;

    /// Metadata carried by the null pointer.
    const NULL_METADATA: Self::Metadata;

    /// Gets the metadata of a non-null pointer.
    fn metadata(ptr: NonNull<Self>) -> Self::Metadata;

    /// Makes a mutable fat pointer from a thin pointer.
    fn make_fat_ptr_mut(thin: *mut (), metadata: Self::Metadata) -> *mut Self;

    /// The mutable null pointer.
    #[inline(always)]
    fn null_mut() -> *mut Self {
        Self::make_fat_ptr_mut(ptr::null_mut(), Self::NULL_METADATA)
    }
}

unsafe impl<T> Pointee for T {
    type Metadata = ();

    const NULL_METADATA: () = ();

    #[inline(always)]
    fn metadata(_: NonNull<T>) -> Self::Metadata {}

    #[inline(always)]
    fn make_fat_ptr_mut(thin: *mut (), _: Self::Metadata) -> *mut Self {
        thin as *mut Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sized_metadata() {
        let mut x = 42u32;
        let _: () = Pointee::metadata(NonNull::from(&mut x));
    }

    #[test]
    fn sized_null() {
        assert!(<u32 as Pointee>::null_mut().is_null());
        assert!(<() as Pointee>::null_mut().is_null());
    }

    #[test]
    fn sized_fat_ptr_roundtrip() {
        let mut x = 42u32;
        let thin = &mut x as *mut u32 as *mut ();

        let p: *mut u32 = u32::make_fat_ptr_mut(thin, ());
        assert_eq!(p, &mut x as *mut u32);
    }
}
