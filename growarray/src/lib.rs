#![doc = crate::doc_macro::make_svgbobdoc!(
//! # `growarray`
//! A growable contiguous array with explicit storage management.
//!
//! 1. [Summary](#summary)
//! 1. [Memory layout](#memory-layout)
//! 1. [Examples](#examples)
//! 1. [Cursors](#cursors)
//! 1. [Errors](#errors)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! [`Array<T>`][crate::array::Array] stores its elements in one exclusively-owned block of
//! storage, tracking how many slots are allocated (the capacity) separately from how many
//! hold live elements (the length). Inserting into a full array replaces the block with one
//! of capacity `floor(capacity * 1.6) + 1` and moves the elements across; the block never
//! shrinks on its own. Elements can be inserted and removed at any position, with the tail
//! shifted to keep the elements contiguous and in order.
//!
//! # Memory layout
//!
//! An `Array` holding `1, 2, 3` with capacity 5:
//!
//! ```svgbob
//! "Array"
//! +-----+-----+-----+
//! | ptr | "3" | "5" |
//! +-----+-----+-----+
//!   |    len   cap
//!   |
//!   |  "storage"
//!   |  +-----+-----+-----+----------+----------+
//!   '->| "1" | "2" | "3" | "uninit" | "uninit" |
//!      +-----+-----+-----+----------+----------+
//! ```
//!
//! # Examples
//!
//! ```
//! use growarray::prelude::*;
//!
//! let mut a = Array::with_capacity(2);
//! for v in [1, 2, 3] {
//!     a.insert(v);
//! }
//! assert_eq!(a.capacity(), 4);
//! a.insert_at(1, 99);
//! assert_eq!(a, [1, 99, 2, 3]);
//! a.remove(0);
//! assert_eq!(a, [99, 2, 3]);
//!
//! // Cloning copies deeply:
//! let mut b = a.clone();
//! b[0] = 0;
//! assert_eq!(a[0], 99);
//!
//! // Taking moves out and leaves an empty array without storage:
//! let c = b.take();
//! assert_eq!((b.len(), b.capacity()), (0, 0));
//! assert_eq!(c, [0, 2, 3]);
//! ```
//!
)]
//! # Cursors
//!
//! Besides the usual iterators, an array hands out [cursors][crate::cursor]: a position plus
//! a direction, read with `get()` and moved with `advance()` after checking `has_next()`.
//! Mutable cursors can also `set()` the current element.
//!
//! # Errors
//!
//! Out-of-range indices are caller bugs and panic, consistently across indexing, `set`,
//! `insert_at`, `remove` and cursor access. Running out of memory diverges in the plain
//! methods; each of them has a `try_` counterpart returning [`AllocError`] that leaves the
//! array unchanged.
//!
//! Growth is logged at `trace` level, and allocation failures at `debug` level, through the
//! [`log`](https://docs.rs/log) facade.
//!
//! # Feature flags
//!
//! * `bumpalo`. Lets an array draw its storage from a `bumpalo::Bump` arena, see
//!   [`raw_alloc`][crate::raw_alloc]. Adds a dependency on `bumpalo`.
//! * `doc`. Renders the diagrams in this documentation as SVG. Adds a dependency on
//!   `svgbobdoc`.
//!

#![no_std]
extern crate alloc;

#[cfg(any(doc, test))]
extern crate std;

pub mod array;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod prelude;
pub mod raw_alloc;

mod doc_macro;

pub use array::{Array, DEFAULT_CAPACITY};
pub use cursor::{Cursor, CursorMut, Direction};
pub use error::AllocError;
pub use raw_alloc::{Global, RawAlloc};

/// Creates an [`Array`] holding the given elements, in order.
///
/// # Examples
///
/// ```
/// use growarray::array;
/// let a = array![1, 2, 3];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[2], 3);
/// let empty: growarray::Array<u8> = array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! array {
    () => (
        $crate::Array::new()
    );
    ($($x:expr),+ $(,)?) => ({
        let mut array = $crate::Array::new();
        $(
            array.insert($x);
        )+
        array
    });
}
