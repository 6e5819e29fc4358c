#![warn(missing_docs)]

//! Errors reported by the fallible (`try_`) storage operations of [`Array`](crate::Array).
//!
//! Out-of-range indices are not errors: they are caller bugs, and panic.
//!
//! # Examples
//!
//! ```
//! use growarray::prelude::*;
//!
//! let err = Array::<u64>::try_with_capacity(usize::MAX).unwrap_err();
//! assert_eq!(err, AllocError::CapacityOverflow);
//! ```

use core::alloc::Layout;
use thiserror::Error;

/// An allocation failed, or could not even be requested.
///
/// Whenever an operation returns this, the array it was called on is left exactly as it was
/// before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The requested number of elements does not fit in a [`Layout`], i.e. its size in bytes
    /// would exceed `isize::MAX`, or the capacity computation overflowed `usize`.
    #[error("requested capacity exceeds the maximum allocation size")]
    CapacityOverflow,

    /// The allocator returned no memory for this layout.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// The layout that was requested.
        layout: Layout,
    },
}
