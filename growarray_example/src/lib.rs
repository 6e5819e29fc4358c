//! Small programs built on [`growarray::Array`].
//!
//! * [`SortedArray`] keeps its elements ordered using positional insert and remove.
//! * [`join`] and [`join_reversed`] walk an array with cursors.
//! * [`collect_in`] fills an array whose storage lives in a `bumpalo` arena.

use bumpalo::Bump;
use growarray::prelude::*;
use log::debug;
use std::fmt::{Display, Write};

/// An [`Array`] kept in ascending order.
#[derive(Clone, Debug, Default)]
pub struct SortedArray<T> {
    elems: Array<T>,
}

impl<T: Ord> SortedArray<T> {
    /// An empty sorted array.
    pub fn new() -> Self {
        SortedArray {
            elems: Array::new(),
        }
    }

    /// Inserts `value` after any elements equal to it. Returns the index it landed at.
    ///
    /// ```
    /// use growarray_example::SortedArray;
    /// let mut s = SortedArray::new();
    /// s.insert(3);
    /// s.insert(1);
    /// assert_eq!(s.insert(2), 1);
    /// assert_eq!(s.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        let index = self.elems.partition_point(|e| *e <= value);
        self.elems.insert_at(index, value)
    }

    /// Removes one element equal to `value`, if there is one.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        match self.elems.binary_search(value) {
            Ok(index) => Some(self.elems.remove(index)),
            Err(_) => None,
        }
    }

    /// Whether an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.elems.binary_search(value).is_ok()
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.elems.is_empty() {
            None
        } else {
            Some(self.elems.remove(0))
        }
    }

    /// The elements, smallest first.
    pub fn as_slice(&self) -> &[T] {
        self.elems.as_slice()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
}

impl<T: Ord> FromIterator<T> for SortedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sorted = SortedArray::new();
        for value in iter {
            sorted.insert(value);
        }
        sorted
    }
}

impl<T> IntoIterator for SortedArray<T> {
    type Item = T;
    type IntoIter = growarray::iter::IntoIter<T, Global>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

fn join_from<T: Display>(mut cursor: Cursor<'_, T>, sep: &str, out: &mut String) {
    // Formatting into a String cannot fail.
    let _ = write!(out, "{}", cursor.get());
    while cursor.has_next() {
        cursor.advance();
        out.push_str(sep);
        let _ = write!(out, "{}", cursor.get());
    }
}

/// Formats the elements front to back, separated by `sep`.
///
/// ```
/// use growarray::array;
/// assert_eq!(growarray_example::join(&array![1, 2, 3], ", "), "1, 2, 3");
/// ```
pub fn join<T: Display, A: RawAlloc>(elems: &Array<T, A>, sep: &str) -> String {
    let mut out = String::new();
    if !elems.is_empty() {
        join_from(elems.cursor(), sep, &mut out);
    }
    out
}

/// Formats the elements back to front, separated by `sep`.
pub fn join_reversed<T: Display, A: RawAlloc>(elems: &Array<T, A>, sep: &str) -> String {
    let mut out = String::new();
    if !elems.is_empty() {
        join_from(elems.reverse_cursor(), sep, &mut out);
    }
    out
}

/// Applies `f` to every element in place, walking from the back.
pub fn update_reversed<T, A: RawAlloc>(elems: &mut Array<T, A>, mut f: impl FnMut(&mut T)) {
    if elems.is_empty() {
        return;
    }
    let mut cursor = elems.reverse_cursor_mut();
    loop {
        f(cursor.get_mut());
        if !cursor.has_next() {
            break;
        }
        cursor.advance();
    }
}

/// Collects `values` into an array whose storage is carved out of `arena`.
///
/// The array starts small so that growth happens inside the arena too.
///
/// ```
/// let arena = bumpalo::Bump::new();
/// let a = growarray_example::collect_in(0..20u32, &arena);
/// assert_eq!(a.len(), 20);
/// assert!(arena.allocated_bytes() >= 20 * 4);
/// ```
pub fn collect_in<T>(values: impl IntoIterator<Item = T>, arena: &Bump) -> Array<T, &Bump> {
    let mut array = Array::with_capacity_in(1, arena);
    for value in values {
        array.insert(value);
    }
    debug!(
        "collected {} elements into an arena array of capacity {}",
        array.len(),
        array.capacity()
    );
    array
}

#[cfg(test)]
mod tests {
    use super::*;
    use growarray::array;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn sorted_array_keeps_order() {
        init_logging();
        let mut s: SortedArray<i32> = [5, 1, 4, 1, 3].into_iter().collect();
        assert_eq!(s.as_slice(), &[1, 1, 3, 4, 5]);
        assert_eq!(s.remove(&4), Some(4));
        assert_eq!(s.remove(&4), None);
        assert!(s.contains(&3));
        assert_eq!(s.pop_first(), Some(1));
        assert_eq!(s.len(), 3);
        let rest: Vec<i32> = s.into_iter().collect();
        assert_eq!(rest, [1, 3, 5]);
    }

    #[test]
    fn sorted_array_grows_past_default_capacity() {
        init_logging();
        let s: SortedArray<u32> = (0..100).rev().collect();
        assert_eq!(s.len(), 100);
        assert!(s.as_slice().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn joins() {
        let a = array!["x", "y", "z"];
        assert_eq!(join(&a, "-"), "x-y-z");
        assert_eq!(join_reversed(&a, "-"), "z-y-x");
        let empty: Array<u8> = Array::new();
        assert_eq!(join(&empty, ","), "");
        assert_eq!(join_reversed(&empty, ","), "");
        assert_eq!(join(&array![7], ","), "7");
    }

    #[test]
    fn update_from_back() {
        let mut a = array![1, 2, 3];
        let mut order = Vec::new();
        update_reversed(&mut a, |v| {
            order.push(*v);
            *v *= 10;
        });
        assert_eq!(order, [3, 2, 1]);
        assert_eq!(a, [10, 20, 30]);
        let mut empty: Array<i32> = Array::with_capacity(0);
        update_reversed(&mut empty, |_| unreachable!());
    }

    #[test]
    fn arena_array() {
        init_logging();
        let arena = Bump::new();
        let mut a = collect_in((0..10).map(|i| i.to_string()), &arena);
        // 1 -> 2 -> 4 -> 7 -> 12
        assert_eq!(a.capacity(), 12);
        a.insert_at(0, String::from("start"));
        assert_eq!(a[0], "start");
        assert_eq!(a[10], "9");
        let b = a.clone();
        a.clear();
        assert_eq!(join(&b, " ").split(' ').count(), 11);
    }
}
