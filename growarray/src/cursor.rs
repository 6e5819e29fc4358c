#![warn(missing_docs)]

//! Cursors: a position in an [`Array`](crate::Array) plus a direction of travel.
//!
//! A cursor always sits on a valid element of a non-empty array; there is no past-the-end
//! position. Traversal reads the current element first, then checks
//! [`has_next`](Cursor::has_next) before calling [`advance`](Cursor::advance):
//!
//! ```
//! use growarray::prelude::*;
//!
//! let a = array![1, 2, 3, 4, 5];
//! let mut c = a.reverse_cursor();
//! let mut seen = vec![*c.get()];
//! while c.has_next() {
//!     c.advance();
//!     seen.push(*c.get());
//! }
//! assert_eq!(seen, [5, 4, 3, 2, 1]);
//! ```
//!
//! A cursor borrows the array, so the array cannot be changed structurally (inserted into,
//! removed from, reallocated, dropped) while the cursor is in use:
//!
//! ```compile_fail
//! use growarray::prelude::*;
//!
//! let mut a = array![1, 2, 3];
//! let c = a.cursor();
//! a.insert(4);
//! assert_eq!(*c.get(), 1);
//! ```
//!
//! Nor can a cursor outlive its array:
//!
//! ```compile_fail
//! use growarray::prelude::*;
//!
//! let c = {
//!     let a = array![1, 2, 3];
//!     a.cursor()
//! };
//! assert_eq!(*c.get(), 1);
//! ```

use core::fmt;
use core::mem;

/// Which way a cursor moves on [`advance`](Cursor::advance).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From index 0 towards `len - 1`.
    Forward,
    /// From index `len - 1` towards 0.
    Reverse,
}

#[inline(never)]
#[cold]
fn empty_cursor() -> ! {
    panic!("cursor over an empty Array has no current element")
}

/// Index plus direction. Shared by both cursor kinds.
#[derive(Clone, Copy, Debug)]
struct Position {
    index: usize,
    direction: Direction,
}

impl Position {
    #[inline]
    fn start(len: usize, direction: Direction) -> Self {
        let index = match direction {
            Direction::Forward => 0,
            Direction::Reverse => len.saturating_sub(1),
        };
        Position { index, direction }
    }

    #[inline]
    fn has_next(&self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        match self.direction {
            Direction::Forward => self.index < len - 1,
            Direction::Reverse => self.index > 0,
        }
    }

    #[inline]
    fn advance(&mut self, len: usize) {
        if self.has_next(len) {
            match self.direction {
                Direction::Forward => self.index += 1,
                Direction::Reverse => self.index -= 1,
            }
        }
    }
}

/// A read-only cursor. Created by [`Array::cursor`](crate::Array::cursor) and
/// [`Array::reverse_cursor`](crate::Array::reverse_cursor).
pub struct Cursor<'a, T> {
    elems: &'a [T],
    pos: Position,
}

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn new(elems: &'a [T], direction: Direction) -> Self {
        Cursor {
            elems,
            pos: Position::start(elems.len(), direction),
        }
    }

    /// Whether [`advance`](Cursor::advance) would move. Always false on an empty array.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let a: Array<u8> = Array::new();
    /// assert!(!a.cursor().has_next());
    /// assert!(!a.reverse_cursor().has_next());
    /// ```
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos.has_next(self.elems.len())
    }

    /// Moves one element in the cursor's direction. Does nothing when
    /// [`has_next`](Cursor::has_next) is false.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let a = array!['a', 'b'];
    /// let mut c = a.cursor();
    /// c.advance();
    /// c.advance(); // already on the last element: no-op
    /// assert_eq!(*c.get(), 'b');
    /// assert_eq!(c.index(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        self.pos.advance(self.elems.len())
    }

    /// The current element.
    ///
    /// Panics if the array is empty.
    ///
    /// ```should_panic
    /// use growarray::prelude::*;
    /// let a: Array<u8> = Array::new();
    /// a.cursor().get();
    /// ```
    #[inline]
    pub fn get(&self) -> &'a T {
        match self.elems.get(self.pos.index) {
            Some(elem) => elem,
            None => empty_cursor(),
        }
    }

    /// Index of the current element.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// The direction this cursor moves in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.pos.direction
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.pos.index)
            .field("direction", &self.pos.direction)
            .field("current", &self.elems.get(self.pos.index))
            .finish()
    }
}

/// A cursor that can also overwrite the current element. Created by
/// [`Array::cursor_mut`](crate::Array::cursor_mut) and
/// [`Array::reverse_cursor_mut`](crate::Array::reverse_cursor_mut).
///
/// # Examples
///
/// Doubling every element in place:
///
/// ```
/// use growarray::prelude::*;
/// let mut a = array![1, 2, 3];
/// let mut c = a.cursor_mut();
/// loop {
///     let doubled = *c.get() * 2;
///     c.set(doubled);
///     if !c.has_next() {
///         break;
///     }
///     c.advance();
/// }
/// assert_eq!(a, [2, 4, 6]);
/// ```
pub struct CursorMut<'a, T> {
    elems: &'a mut [T],
    pos: Position,
}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn new(elems: &'a mut [T], direction: Direction) -> Self {
        let pos = Position::start(elems.len(), direction);
        CursorMut { elems, pos }
    }

    /// See [`Cursor::has_next`].
    #[inline]
    pub fn has_next(&self) -> bool {
        self.pos.has_next(self.elems.len())
    }

    /// See [`Cursor::advance`].
    #[inline]
    pub fn advance(&mut self) {
        self.pos.advance(self.elems.len())
    }

    /// The current element. Panics if the array is empty.
    #[inline]
    pub fn get(&self) -> &T {
        match self.elems.get(self.pos.index) {
            Some(elem) => elem,
            None => empty_cursor(),
        }
    }

    /// The current element, mutably. Panics if the array is empty.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        match self.elems.get_mut(self.pos.index) {
            Some(elem) => elem,
            None => empty_cursor(),
        }
    }

    /// Overwrites the current element, returning the old value. Panics if the array is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = array!["x", "y"];
    /// let mut c = a.reverse_cursor_mut();
    /// assert_eq!(c.set("z"), "y");
    /// assert_eq!(a, ["x", "z"]);
    /// ```
    #[inline]
    pub fn set(&mut self, value: T) -> T {
        mem::replace(self.get_mut(), value)
    }

    /// Index of the current element.
    #[inline]
    pub fn index(&self) -> usize {
        self.pos.index
    }

    /// The direction this cursor moves in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.pos.direction
    }

    /// A read-only cursor at the same position, borrowing from this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            elems: &*self.elems,
            pos: self.pos,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_cursor(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;
    use crate::Array;
    use alloc::vec::Vec;

    fn walk<T: Copy>(mut c: Cursor<'_, T>) -> Vec<T> {
        let mut out = Vec::new();
        out.push(*c.get());
        while c.has_next() {
            c.advance();
            out.push(*c.get());
        }
        out
    }

    #[test]
    fn forward_and_reverse() {
        let a = array![1, 2, 3, 4, 5];
        assert_eq!(walk(a.cursor()), [1, 2, 3, 4, 5]);
        assert_eq!(walk(a.reverse_cursor()), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn single_element() {
        let a = array![7];
        for c in [a.cursor(), a.reverse_cursor()] {
            assert!(!c.has_next());
            assert_eq!(*c.get(), 7);
        }
    }

    #[test]
    fn empty_array_cursors() {
        let a: Array<i32> = Array::new();
        let mut c = a.reverse_cursor();
        assert_eq!(c.index(), 0);
        assert!(!c.has_next());
        c.advance();
        assert_eq!(c.index(), 0);
    }

    #[test]
    #[should_panic(expected = "cursor over an empty Array has no current element")]
    fn empty_array_set_panics() {
        let mut a: Array<i32> = Array::new();
        a.cursor_mut().set(1);
    }

    #[test]
    fn reverse_mut_cursor_writes() {
        let mut a = array![1, 2, 3];
        let mut c = a.reverse_cursor_mut();
        assert_eq!(c.direction(), Direction::Reverse);
        let mut next = 10;
        loop {
            *c.get_mut() += next;
            next += 10;
            if !c.has_next() {
                break;
            }
            c.advance();
        }
        assert_eq!(c.as_cursor().index(), 0);
        assert_eq!(a, [31, 22, 13]);
    }
}
