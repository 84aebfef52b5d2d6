//! The owning pointer core, shared by the scalar and array variants.

use core::cmp;
use core::fmt;
use core::hash;
use core::marker::PhantomData;
use core::mem;
use core::ops;
use core::ptr::NonNull;

use crate::delete::Delete;
use crate::errors::NullPtrError;

/// An owning pointer with exclusive ownership of a heap-allocated `T`, or nothing.
///
/// `UniquePtr<T>` owns a single value; `UniquePtr<[T]>` owns a contiguous block of values. Either
/// way the allocation is released exactly once, when the `UniquePtr` that owns it is dropped or
/// reset.
///
/// Ownership can be moved but never duplicated. There is no `Clone`:
///
/// ```compile_fail
/// # use uniqueptr::UniquePtr;
/// fn duplicate<T: Clone>(x: &T) -> T { x.clone() }
///
/// let a = UniquePtr::new(3u8);
/// let b = duplicate(&a);
/// ```
///
/// and a by-value move leaves the source unusable:
///
/// ```compile_fail
/// # use uniqueptr::UniquePtr;
/// let a = UniquePtr::new(3u8);
/// let b = a;
/// assert!(a.is_some());
/// ```
///
/// Use [`take()`](UniquePtr::take) or [`move_from()`](UniquePtr::move_from) to move out of a place
/// that stays alive; the source is left null.
///
/// Comparisons are *identity* comparisons: two `UniquePtr`s are equal iff they hold the same
/// address, regardless of what the pointees contain. Two null pointers are equal.
///
/// ```
/// # use uniqueptr::UniquePtr;
/// let a = UniquePtr::new(1u8);
/// let b = UniquePtr::new(1u8);
/// assert!(a != b);
/// assert!(*a == *b);
/// assert!(UniquePtr::<u8>::null() == UniquePtr::<u8>::null());
/// ```
pub struct UniquePtr<T: ?Sized + Delete> {
    marker: PhantomData<Box<T>>,
    raw: Option<NonNull<T>>,
}

unsafe impl<T: ?Sized + Delete> Send for UniquePtr<T>
where T: Send
{}

unsafe impl<T: ?Sized + Delete> Sync for UniquePtr<T>
where T: Sync
{}

impl<T: ?Sized + Delete> UniquePtr<T> {
    /// Creates a null `UniquePtr` that owns nothing.
    #[inline(always)]
    pub const fn null() -> Self {
        Self {
            marker: PhantomData,
            raw: None,
        }
    }

    /// Takes ownership of a raw pointer.
    ///
    /// A null `raw` creates a null `UniquePtr`.
    ///
    /// # Safety
    ///
    /// A non-null `raw` must have come from `Box<T>` (`Box::into_raw()`, or a `Vec<T>` turned into
    /// `Box<[T]>` for arrays), and must not be used, freed, or owned by anything else afterwards.
    #[inline(always)]
    pub unsafe fn from_raw(raw: *mut T) -> Self {
        Self {
            marker: PhantomData,
            raw: NonNull::new(raw),
        }
    }

    /// Takes ownership of a `Box`.
    #[inline]
    pub fn from_box(boxed: Box<T>) -> Self {
        Self {
            marker: PhantomData,
            raw: Some(NonNull::from(Box::leak(boxed))),
        }
    }

    /// Returns the raw pointer without giving up ownership.
    ///
    /// The null pointer is returned if nothing is owned.
    #[inline(always)]
    pub fn get(&self) -> *mut T {
        match self.raw {
            Some(raw) => raw.as_ptr(),
            None => T::null_mut(),
        }
    }

    /// Returns the raw pointer as a `*const T`.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.get()
    }

    /// Returns `true` if nothing is owned.
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Returns `true` if a resource is owned.
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.raw.is_some()
    }

    /// Gives up ownership, returning the raw pointer.
    ///
    /// `self` is left null. Freeing the returned pointer, if it isn't null, is now the caller's
    /// responsibility; `UniquePtr::from_raw()` can take it back.
    #[inline]
    #[must_use = "the released pointer will leak if it isn't freed"]
    pub fn release(&mut self) -> *mut T {
        match self.raw.take() {
            Some(raw) => raw.as_ptr(),
            None => T::null_mut(),
        }
    }

    /// Replaces the owned resource with `raw`, freeing the old one.
    ///
    /// A null `raw` leaves `self` null. The new pointer is adopted before the old resource is
    /// freed, so `self` is consistent even if the old value's destructor panics.
    ///
    /// # Safety
    ///
    /// Same as `from_raw()`. In particular `raw` must not be the pointer `self` already owns.
    #[inline]
    pub unsafe fn reset(&mut self, raw: *mut T) {
        self.replace_raw(NonNull::new(raw))
    }

    /// Replaces the owned resource with a `Box`, freeing the old one.
    #[inline]
    pub fn reset_with(&mut self, boxed: Box<T>) {
        self.replace_raw(Some(NonNull::from(Box::leak(boxed))))
    }

    /// Frees the owned resource, if any, leaving `self` null.
    #[inline]
    pub fn reset_null(&mut self) {
        self.replace_raw(None)
    }

    fn replace_raw(&mut self, new: Option<NonNull<T>>) {
        if let Some(old) = mem::replace(&mut self.raw, new) {
            log::trace!("reset: freeing {:p} via {} path", old, T::PATH);
            unsafe { T::delete(old) }
        }
    }

    /// Exchanges the resources owned by `self` and `other`.
    ///
    /// Only the ownership records are swapped; the pointees don't move.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.raw, &mut other.raw)
    }

    /// Moves the owned resource out, leaving `self` null.
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            marker: PhantomData,
            raw: self.raw.take(),
        }
    }

    /// Moves `src`'s resource into `self`, leaving `src` null.
    ///
    /// Whatever `self` owned before is freed.
    #[inline]
    pub fn move_from(&mut self, src: &mut Self) {
        let raw = src.raw.take();
        self.replace_raw(raw)
    }

    /// Borrows the pointee, or `None` if null.
    #[inline(always)]
    pub fn as_ref(&self) -> Option<&T> {
        self.raw.map(|raw| unsafe { &*raw.as_ptr() })
    }

    /// Mutably borrows the pointee, or `None` if null.
    #[inline(always)]
    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.raw.map(|raw| unsafe { &mut *raw.as_ptr() })
    }

    /// Borrows the pointee without checking for null.
    ///
    /// # Safety
    ///
    /// `self` must not be null.
    #[inline(always)]
    pub unsafe fn as_ref_unchecked(&self) -> &T {
        debug_assert!(self.is_some());
        &*self.get()
    }

    /// Mutably borrows the pointee without checking for null.
    ///
    /// # Safety
    ///
    /// `self` must not be null.
    #[inline(always)]
    pub unsafe fn as_mut_unchecked(&mut self) -> &mut T {
        debug_assert!(self.is_some());
        &mut *self.get()
    }

    /// Converts into a `Box`, or `None` if null.
    #[inline]
    pub fn into_box(self) -> Option<Box<T>> {
        let mut this = mem::ManuallyDrop::new(self);
        this.raw.take()
            .map(|raw| unsafe { Box::from_raw(raw.as_ptr()) })
    }

    /// Converts into a `Box`, failing if null.
    #[inline]
    pub fn try_into_box(self) -> Result<Box<T>, NullPtrError> {
        self.into_box().ok_or(NullPtrError)
    }

    /// Gets the thin address, used for identity comparisons and formatting.
    #[inline(always)]
    fn addr(&self) -> *const () {
        self.as_ptr().cast::<()>()
    }
}

impl<T> UniquePtr<T> {
    /// Moves `value` into a new heap allocation owned by the returned `UniquePtr`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_box(Box::new(value))
    }

    /// Moves the value out, freeing the allocation without dropping the value.
    ///
    /// Returns `None` if null.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.into_box().map(|boxed| *boxed)
    }
}

impl<T: ?Sized + Delete> Drop for UniquePtr<T> {
    #[inline]
    fn drop(&mut self) {
        if let Some(raw) = self.raw.take() {
            log::trace!("drop: freeing {:p} via {} path", raw, T::PATH);
            unsafe { T::delete(raw) }
        }
    }
}

impl<T: ?Sized + Delete> Default for UniquePtr<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized + Delete> From<Box<T>> for UniquePtr<T> {
    #[inline]
    fn from(boxed: Box<T>) -> Self {
        Self::from_box(boxed)
    }
}

impl<T: ?Sized + Delete> From<Option<Box<T>>> for UniquePtr<T> {
    #[inline]
    fn from(boxed: Option<Box<T>>) -> Self {
        boxed.map(Self::from_box).unwrap_or_default()
    }
}

impl<T: ?Sized + Delete> ops::Deref for UniquePtr<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if `self` is null.
    #[inline]
    fn deref(&self) -> &T {
        match self.as_ref() {
            Some(r) => r,
            None => panic!("dereferenced a null UniquePtr<{}>", core::any::type_name::<T>()),
        }
    }
}

impl<T: ?Sized + Delete> ops::DerefMut for UniquePtr<T> {
    /// # Panics
    ///
    /// Panics if `self` is null.
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self.as_mut() {
            Some(r) => r,
            None => panic!("dereferenced a null UniquePtr<{}>", core::any::type_name::<T>()),
        }
    }
}

impl<T: ?Sized + Delete> cmp::PartialEq for UniquePtr<T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}
impl<T: ?Sized + Delete> cmp::Eq for UniquePtr<T> {}

impl<T: ?Sized + Delete> cmp::PartialOrd for UniquePtr<T> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: ?Sized + Delete> cmp::Ord for UniquePtr<T> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.addr().cmp(&other.addr())
    }
}

impl<T: ?Sized + Delete> hash::Hash for UniquePtr<T> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.addr().hash(state)
    }
}

impl<T: ?Sized + Delete> fmt::Pointer for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Pointer::fmt(&self.addr(), f)
    }
}

impl<T: ?Sized + Delete> fmt::Display for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Pointer::fmt(&self.addr(), f)
    }
}

impl<T: ?Sized + Delete> fmt::Debug for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("UniquePtr")
            .field(&self.addr())
            .finish()
    }
}
