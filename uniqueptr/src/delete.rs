//! Deallocation paths.

use core::ptr::NonNull;

use pointee::Pointee;

/// How a heap allocation of `Self` is released.
///
/// A single value and an array are allocated differently and must be released by the matching
/// path. The path is selected by the pointee type: `T` always uses the scalar path, `[T]` always
/// uses the array path, so an owning pointer can't mix them up.
///
/// # Safety
///
/// `delete()` must release exactly the allocation `ptr` refers to, dropping the value(s) in it.
pub unsafe trait Delete : Pointee {
    /// Name of the deallocation path, for diagnostics.
    const PATH: &'static str;

    /// Drops the pointee and frees its allocation.
    ///
    /// # Safety
    ///
    /// `ptr` must have come from a `Box<Self>`, not be freed yet, and not be used afterwards.
    unsafe fn delete(ptr: NonNull<Self>);
}

unsafe impl<T> Delete for T {
    const PATH: &'static str = "scalar";

    #[inline]
    unsafe fn delete(ptr: NonNull<T>) {
        drop(Box::<T>::from_raw(ptr.as_ptr()))
    }
}

unsafe impl<T> Delete for [T] {
    const PATH: &'static str = "array";

    #[inline]
    unsafe fn delete(ptr: NonNull<[T]>) {
        drop(Box::<[T]>::from_raw(ptr.as_ptr()))
    }
}
