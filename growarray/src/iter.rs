//! Standard iterators over an [`Array`].
//!
//! # Examples
//!
//! ```
//! use growarray::prelude::*;
//!
//! let mut a = array![1, 2, 3];
//! for v in &mut a {
//!     *v *= 10;
//! }
//! assert_eq!(a.iter().rev().copied().collect::<Vec<_>>(), [30, 20, 10]);
//! let owned: Vec<i32> = a.into_iter().collect();
//! assert_eq!(owned, [10, 20, 30]);
//! ```

use crate::array::{release_storage, Array};
use crate::raw_alloc::RawAlloc;
use core::iter::FusedIterator;
use core::ptr::{self, NonNull};
use core::slice;

/// Iterates over references.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(elems: &'a [T]) -> Self {
        Iter {
            inner: elems.iter(),
        }
    }

    /// The elements not yet visited.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterates over mutable references.
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(elems: &'a mut [T]) -> Self {
        IterMut {
            inner: elems.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Iterates over owned elements, taking ownership of the array's storage.
///
/// Elements not consumed are dropped, and the storage released, when this is dropped.
pub struct IntoIter<T, A: RawAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    // Live elements are [head, tail).
    head: usize,
    tail: usize,
}

// Safety: IntoIter owns its remaining elements, as the Array did.
unsafe impl<T: Send, A: RawAlloc + Send> Send for IntoIter<T, A> {}
// Safety: as above.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for IntoIter<T, A> {}

impl<T, A: RawAlloc> IntoIter<T, A> {
    /// The elements not yet consumed.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: [head, tail) are live.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().add(self.head), self.tail - self.head) }
    }
}

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.head == self.tail {
            None
        } else {
            let index = self.head;
            self.head += 1;
            // Safety: index was in [head, tail), and is now outside it, so it is read once.
            Some(unsafe { ptr::read(self.ptr.as_ptr().add(index)) })
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tail - self.head;
        (len, Some(len))
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            None
        } else {
            self.tail -= 1;
            // Safety: as in next().
            Some(unsafe { ptr::read(self.ptr.as_ptr().add(self.tail)) })
        }
    }
}

impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> {
    #[inline]
    fn len(&self) -> usize {
        self.tail - self.head
    }
}

impl<T, A: RawAlloc> FusedIterator for IntoIter<T, A> {}

impl<T, A: RawAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
            // Safety: head <= tail <= cap.
            unsafe { self.ptr.as_ptr().add(self.head) },
            self.tail - self.head,
        );
        self.head = self.tail;
        // Safety: the remaining elements are live and no longer reachable; the storage came
        // from the array this iterator was made from.
        unsafe {
            ptr::drop_in_place(remaining);
            release_storage(&self.alloc, self.ptr, self.cap);
        }
    }
}

impl<T, A: RawAlloc> IntoIterator for Array<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> IntoIter<T, A> {
        let (ptr, len, cap, alloc) = self.into_raw_parts();
        IntoIter {
            ptr,
            cap,
            alloc,
            head: 0,
            tail: len,
        }
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a Array<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a mut Array<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::array;
    use alloc::rc::Rc;
    use alloc::vec::Vec;

    #[test]
    fn into_iter_drops_unconsumed() {
        let marker = Rc::new(());
        let a = array![marker.clone(), marker.clone(), marker.clone(), marker.clone()];
        assert_eq!(Rc::strong_count(&marker), 5);
        let mut it = a.into_iter();
        drop(it.next());
        drop(it.next_back());
        assert_eq!(it.len(), 2);
        assert_eq!(Rc::strong_count(&marker), 3);
        drop(it);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn both_ends() {
        let a = array![1, 2, 3, 4];
        let mut it = a.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.as_slice(), &[2, 3]);
        let rest: Vec<i32> = a.into_iter().rev().collect();
        assert_eq!(rest, [4, 3, 2, 1]);
    }
}
