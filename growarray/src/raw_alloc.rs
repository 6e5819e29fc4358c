#![warn(missing_docs)]

//! Where an [`Array`](crate::Array) gets its storage from.
//!
//! By default storage comes from the global allocator ([`Global`]). With the `bumpalo` crate
//! feature enabled, a `&bumpalo::Bump` arena may be used instead:
//!
//! ```
//! # #[cfg(feature = "bumpalo")] {
//! use growarray::prelude::*;
//!
//! let arena = bumpalo::Bump::new();
//! let mut a = Array::with_capacity_in(2, &arena);
//! a.insert(1);
//! a.insert(2);
//! a.insert(3); // grows within the arena
//! assert_eq!(&a[..], &[1, 2, 3]);
//! drop(a); // drops the elements
//! drop(arena); // reclaims the storage
//! # }
//! ```

use core::alloc::Layout;
use core::ptr::NonNull;

/// A source of raw, uninitialized storage.
///
/// # Safety
///
/// Implementors must guarantee that a pointer returned by
/// [`allocate(layout)`][`RawAlloc::allocate`] is valid for reads and writes of
/// `layout.size()` bytes, aligned to `layout.align()`, and stays valid until it is passed to
/// [`deallocate`][`RawAlloc::deallocate`] on the same allocator (or a clone of it).
pub unsafe trait RawAlloc {
    /// Obtains storage for `layout`, or `None` if the memory is not available.
    ///
    /// Callers never pass a zero-sized layout.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Releases storage previously returned by [`allocate`][`RawAlloc::allocate`].
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by `self.allocate(layout)` with this exact `layout`, and
    /// must not have been released already.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The global memory allocator.
///
/// # Examples
///
/// ```
/// use growarray::prelude::*;
/// let a: Array<u8, Global> = Array::with_capacity_in(4, Global);
/// assert_eq!(a.capacity(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(layout.size() != 0);
        // Safety: layout has nonzero size.
        NonNull::new(unsafe { alloc::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        alloc::alloc::dealloc(ptr.as_ptr(), layout)
    }
}

/// Storage is carved out of the arena. Releasing is a no-op; the arena reclaims everything
/// when it is dropped.
#[cfg(feature = "bumpalo")]
unsafe impl RawAlloc for &bumpalo::Bump {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        self.try_alloc_layout(layout).ok()
    }

    #[inline]
    unsafe fn deallocate(&self, _ptr: NonNull<u8>, _layout: Layout) {}
}
