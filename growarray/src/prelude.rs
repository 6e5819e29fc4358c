//! Single module with all `growarray` exports
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use growarray::prelude::*;
//! ```
//!
//! Import all, named:
//!
//! ```
//! use growarray::prelude as g;
//! let a: g::Array<u8> = g::Array::new();
//! ```

pub use crate::array;
pub use crate::array::{
    Array, DEFAULT_CAPACITY, GROWTH_FACTOR_DENOMINATOR, GROWTH_FACTOR_NUMERATOR,
};
pub use crate::cursor::{Cursor, CursorMut, Direction};
pub use crate::error::AllocError;
pub use crate::iter::{IntoIter, Iter, IterMut};
pub use crate::raw_alloc::{Global, RawAlloc};
