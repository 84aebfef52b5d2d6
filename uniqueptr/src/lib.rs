//! Exclusive-ownership owning pointers.
//!
//! A [`UniquePtr<T>`] owns one heap-allocated `T`, and a `UniquePtr<[T]>` owns one heap-allocated
//! block of `T`s. Either may also be null. The owned resource is released exactly once: when the
//! pointer is dropped, reset, or assigned over. Ownership can be handed back to the caller with
//! [`UniquePtr::release()`] and taken again with [`UniquePtr::from_raw()`].
//!
//! ```
//! use uniqueptr::UniquePtr;
//!
//! let mut a = UniquePtr::new(3);
//! let b = a.take();
//! assert!(a.is_null());
//! assert_eq!(*b, 3);
//!
//! let block: UniquePtr<[i32]> = vec![1, 2, 3, 4, 5].into();
//! assert_eq!(block[4], 5);
//! ```
//!
//! Whether a value is freed as a single value or as an array is decided by the pointee type, see
//! [`Delete`].

use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

mod delete;
pub use self::delete::Delete;

mod unique;
pub use self::unique::UniquePtr;

mod array;

mod errors;
pub use self::errors::{IndexError, NullPtrError};
pub use pointee::SliceLenError;

assert_eq_size!(UniquePtr<u8>, *mut u8);
assert_eq_size!(UniquePtr<[u8]>, *mut [u8]);

assert_not_impl_any!(UniquePtr<u8>: Clone, Copy);
assert_not_impl_any!(UniquePtr<[u8]>: Clone, Copy);
assert_not_impl_any!(UniquePtr<std::rc::Rc<u8>>: Send, Sync);
assert_impl_all!(UniquePtr<u8>: Send, Sync, Default);
