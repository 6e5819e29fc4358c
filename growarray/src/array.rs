#![warn(missing_docs)]

//! The growable array.
//!
//! # Examples
//!
//! ```
//! use growarray::prelude::*;
//!
//! let mut a = Array::with_capacity(2);
//! a.insert(1);
//! a.insert(2);
//! a.insert(3); // grows
//! assert_eq!(a, [1, 2, 3]);
//! a.insert_at(1, 99);
//! assert_eq!(a, [1, 99, 2, 3]);
//! a.remove(0);
//! assert_eq!(a, [99, 2, 3]);
//! ```

use crate::cursor::{Cursor, CursorMut, Direction};
use crate::error::AllocError;
use crate::iter::{Iter, IterMut};
use crate::raw_alloc::{Global, RawAlloc};
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::ptr::{self, NonNull};
use core::slice::{self, SliceIndex};
use log::{debug, trace};

/// Capacity of an array made by [`Array::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Numerator of the growth factor (8 / 5 = 1.6).
pub const GROWTH_FACTOR_NUMERATOR: usize = 8;

/// Denominator of the growth factor (8 / 5 = 1.6).
pub const GROWTH_FACTOR_DENOMINATOR: usize = 5;

/// A contiguous, growable array of `T`, with storage drawn from `A`.
///
/// Slots `[0, len)` of the storage hold live elements; slots `[len, capacity)` are
/// uninitialized. When an insertion finds the array full, the storage is replaced by one
/// of capacity `floor(capacity * 1.6) + 1` and the elements are moved across. Storage never
/// shrinks on its own.
///
/// Out-of-range indices are caller bugs and panic, in every accessor. Allocation failure
/// diverges in the plain methods and is returned as [`AllocError`] by the `try_` methods, with
/// the array left untouched.
///
/// # Examples
///
/// ```
/// use growarray::prelude::*;
///
/// let mut a: Array<String> = Array::new();
/// assert_eq!(a.capacity(), 8);
/// let hello = String::from("hello");
/// a.insert_cloned(&hello); // copies
/// a.insert(hello); // moves
/// a[1].push_str(", world");
/// assert_eq!(a, ["hello", "hello, world"]);
/// ```
pub struct Array<T, A: RawAlloc = Global> {
    // Dangling when no storage is owned: capacity 0, or T zero-sized.
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// Safety: Array<T> owns its elements like Vec<T> does.
unsafe impl<T: Send, A: RawAlloc + Send> Send for Array<T, A> {}
// Safety: as above; shared access only hands out &T.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for Array<T, A> {}

#[inline(never)]
#[cold]
fn capacity_overflow() -> ! {
    panic!("Array capacity overflow")
}

#[inline(never)]
#[cold]
pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!(
        "index out of bounds: the len is {} but the index is {}",
        len, index
    )
}

#[inline(never)]
#[cold]
fn insertion_index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!(
        "insertion index (is {}) should be <= len (is {})",
        index, len
    )
}

#[inline(never)]
#[cold]
fn allocation_failed(err: AllocError) -> ! {
    match err {
        AllocError::CapacityOverflow => capacity_overflow(),
        AllocError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
    }
}

/// Capacity after one growth step: `floor(cap * 8 / 5) + 1`, without intermediate overflow.
#[inline]
pub(crate) fn grown_capacity(cap: usize) -> Option<usize> {
    const EXTRA: usize = GROWTH_FACTOR_NUMERATOR - GROWTH_FACTOR_DENOMINATOR;
    let extra = (cap / GROWTH_FACTOR_DENOMINATOR) * EXTRA
        + (cap % GROWTH_FACTOR_DENOMINATOR) * EXTRA / GROWTH_FACTOR_DENOMINATOR;
    cap.checked_add(extra)?.checked_add(1)
}

fn allocate_storage<T, A: RawAlloc>(alloc: &A, cap: usize) -> Result<NonNull<T>, AllocError> {
    let layout = Layout::array::<T>(cap).map_err(|_| AllocError::CapacityOverflow)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    match alloc.allocate(layout) {
        Some(p) => Ok(p.cast()),
        None => {
            debug!("allocation of {} slots ({} bytes) failed", cap, layout.size());
            Err(AllocError::AllocFailed { layout })
        }
    }
}

/// Releases storage obtained from `allocate_storage(alloc, cap)`. Does not drop elements.
///
/// Safety: `ptr` and `cap` must describe storage obtained from `alloc` and not yet released.
pub(crate) unsafe fn release_storage<T, A: RawAlloc>(alloc: &A, ptr: NonNull<T>, cap: usize) {
    if cap == 0 {
        return;
    }
    if let Ok(layout) = Layout::array::<T>(cap) {
        if layout.size() != 0 {
            alloc.deallocate(ptr.cast(), layout);
        }
    }
}

impl<T> Array<T, Global> {
    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let a = Array::<u32>::new();
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 8);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A capacity of zero allocates nothing; storage is obtained on the first insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = Array::with_capacity(0);
    /// assert_eq!(a.capacity(), 0);
    /// a.insert('x');
    /// assert_eq!(a.capacity(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Fallible version of [`Array::with_capacity`].
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// assert!(Array::<u8>::try_with_capacity(16).is_ok());
    /// assert_eq!(
    ///     Array::<u64>::try_with_capacity(usize::MAX).unwrap_err(),
    ///     AllocError::CapacityOverflow);
    /// ```
    #[inline]
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::try_with_capacity_in(capacity, Global)
    }

    /// Creates an empty array that owns no storage. This is the state [`Array::take`] leaves
    /// behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// const EMPTY: Array<u8> = Array::unallocated();
    /// assert_eq!(EMPTY.capacity(), 0);
    /// ```
    #[inline]
    pub const fn unallocated() -> Self {
        Self::unallocated_in(Global)
    }
}

impl<T, A: RawAlloc> Array<T, A> {
    /// Like [`Array::new`], drawing storage from `alloc`.
    #[inline]
    pub fn new_in(alloc: A) -> Self {
        Self::with_capacity_in(DEFAULT_CAPACITY, alloc)
    }

    /// Like [`Array::with_capacity`], drawing storage from `alloc`.
    #[inline]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self::try_with_capacity_in(capacity, alloc).unwrap_or_else(|err| allocation_failed(err))
    }

    /// Like [`Array::try_with_capacity`], drawing storage from `alloc`.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let ptr = if capacity == 0 {
            NonNull::dangling()
        } else {
            allocate_storage::<T, A>(&alloc, capacity)?
        };
        Ok(Array {
            ptr,
            len: 0,
            cap: capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    /// Like [`Array::unallocated`], for an arbitrary allocator.
    #[inline]
    pub const fn unallocated_in(alloc: A) -> Self {
        Array {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots in the current storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The allocator this array draws storage from.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The live elements, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: [0, len) are live, and ptr is aligned and non-null even when dangling.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The live elements, as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: as in as_slice; &mut self gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// The element at `index`, or `None` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let a = array![10, 20];
    /// assert_eq!(a.get(1), Some(&20));
    /// assert_eq!(a.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable version of [`Array::get`].
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = array!['a', 'b'];
    /// assert_eq!(a.set(0, 'z'), 'a');
    /// assert_eq!(a, ['z', 'b']);
    /// ```
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> T {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => mem::replace(slot, value),
            None => index_out_of_bounds(index, len),
        }
    }

    /// Appends `value`, returning the index it was placed at.
    ///
    /// Grows the storage first if the array is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = Array::with_capacity(1);
    /// assert_eq!(a.insert("x"), 0);
    /// assert_eq!(a.insert("y"), 1);
    /// assert_eq!(a.capacity(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> usize {
        if self.len == self.cap {
            self.grow();
        }
        // Safety: len < cap.
        unsafe { self.write_at_end(value) }
    }

    /// Fallible version of [`Array::insert`]. On failure the array is unchanged and `value` is
    /// dropped.
    #[inline]
    pub fn try_insert(&mut self, value: T) -> Result<usize, AllocError> {
        if self.len == self.cap {
            self.try_grow()?;
        }
        // Safety: len < cap.
        Ok(unsafe { self.write_at_end(value) })
    }

    /// Inserts `value` at `index`, shifting the elements at `[index, len)` one slot to the
    /// right. Returns `index`.
    ///
    /// Panics if `index > len`. Inserting at `len` appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = array![1, 3];
    /// assert_eq!(a.insert_at(1, 2), 1);
    /// a.insert_at(0, 0);
    /// a.insert_at(4, 4);
    /// assert_eq!(a, [0, 1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn insert_at(&mut self, index: usize, value: T) -> usize {
        if index > self.len {
            insertion_index_out_of_bounds(index, self.len);
        }
        if self.len == self.cap {
            self.grow();
        }
        // Safety: index <= len < cap.
        unsafe { self.shift_in(index, value) }
    }

    /// Fallible version of [`Array::insert_at`]. On allocation failure the array is unchanged
    /// and `value` is dropped. An out-of-range `index` still panics.
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<usize, AllocError> {
        if index > self.len {
            insertion_index_out_of_bounds(index, self.len);
        }
        if self.len == self.cap {
            self.try_grow()?;
        }
        // Safety: index <= len < cap.
        Ok(unsafe { self.shift_in(index, value) })
    }

    /// Removes the element at `index`, shifting the elements after it one slot to the left.
    /// The removed element is returned; dropping it destroys it.
    ///
    /// Panics if `index >= len`, which includes every call on an empty array.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = array![0, 1, 2, 3, 4];
    /// assert_eq!(a.remove(2), 2);
    /// assert_eq!(a, [0, 1, 3, 4]);
    /// ```
    ///
    /// ```should_panic
    /// use growarray::prelude::*;
    /// let mut a: Array<u8> = Array::new();
    /// a.remove(0);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            index_out_of_bounds(index, len);
        }
        // Safety: index < len, so the slot is live; after reading it we treat it as vacant
        // and close the gap with the live tail (index, len).
        unsafe {
            let p = self.ptr.as_ptr().add(index);
            let removed = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            removed
        }
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // Safety: the slot at the old len - 1 was live and is now outside [0, len).
            unsafe { Some(ptr::read(self.ptr.as_ptr().add(self.len))) }
        }
    }

    /// Drops every element, keeping the storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = array![String::from("a"), String::from("b")];
    /// let cap = a.capacity();
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), cap);
    /// ```
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        // Length goes first, so a panicking destructor cannot lead to a double drop.
        self.len = 0;
        // Safety: the elements were live and are no longer reachable through self.
        unsafe { ptr::drop_in_place(elems) }
    }

    /// Grows the storage, by repeated growth steps, until at least `additional` more elements
    /// fit without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a: Array<u8> = Array::with_capacity(2);
    /// a.reserve(5);
    /// // 2 -> 4 -> 7
    /// assert_eq!(a.capacity(), 7);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            allocation_failed(err)
        }
    }

    /// Fallible version of [`Array::reserve`].
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow)?;
        if required <= self.cap {
            return Ok(());
        }
        let mut new_cap = self.cap;
        while new_cap < required {
            new_cap = grown_capacity(new_cap).ok_or(AllocError::CapacityOverflow)?;
        }
        self.try_relocate(new_cap)
    }

    /// A read-only cursor starting at the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let a = array![1, 2, 3];
    /// let mut c = a.cursor();
    /// let mut seen = vec![*c.get()];
    /// while c.has_next() {
    ///     c.advance();
    ///     seen.push(*c.get());
    /// }
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), Direction::Forward)
    }

    /// A read-only cursor starting at the last element and walking towards the first.
    #[inline]
    pub fn reverse_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), Direction::Reverse)
    }

    /// A mutable cursor starting at the first element.
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), Direction::Forward)
    }

    /// A mutable cursor starting at the last element and walking towards the first.
    #[inline]
    pub fn reverse_cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), Direction::Reverse)
    }

    /// Iterate over references.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Iterate over mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Splits the array into its raw parts without dropping anything: storage pointer, length,
    /// capacity, allocator. The caller takes over the obligations of `Drop`.
    pub(crate) fn into_raw_parts(self) -> (NonNull<T>, usize, usize, A) {
        let me = ManuallyDrop::new(self);
        // Safety: `me` is never used or dropped again, so the allocator is moved out once.
        let alloc = unsafe { ptr::read(&me.alloc) };
        (me.ptr, me.len, me.cap, alloc)
    }

    /// Safety: requires `len < cap`.
    #[inline]
    unsafe fn write_at_end(&mut self, value: T) -> usize {
        debug_assert!(self.len < self.cap);
        let index = self.len;
        ptr::write(self.ptr.as_ptr().add(index), value);
        self.len = index + 1;
        index
    }

    /// Safety: requires `index <= len < cap`.
    #[inline]
    unsafe fn shift_in(&mut self, index: usize, value: T) -> usize {
        debug_assert!(index <= self.len && self.len < self.cap);
        let p = self.ptr.as_ptr().add(index);
        // [index, len) moves to [index + 1, len + 1); overlapping, so memmove.
        ptr::copy(p, p.add(1), self.len - index);
        ptr::write(p, value);
        self.len += 1;
        index
    }

    #[inline(never)]
    #[cold]
    fn grow(&mut self) {
        if let Err(err) = self.try_grow() {
            allocation_failed(err)
        }
    }

    fn try_grow(&mut self) -> Result<(), AllocError> {
        let new_cap = grown_capacity(self.cap).ok_or(AllocError::CapacityOverflow)?;
        self.try_relocate(new_cap)
    }

    /// Moves the elements into fresh storage of `new_cap` slots, releasing the old storage.
    /// If the new storage cannot be obtained, nothing is touched.
    fn try_relocate(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.len);
        let new_ptr = allocate_storage::<T, A>(&self.alloc, new_cap)?;
        trace!(
            "relocating {} elements: capacity {} -> {}",
            self.len,
            self.cap,
            new_cap
        );
        // Safety: the new storage has room for len elements and does not overlap the old.
        // Moving is a bitwise copy, after which the old slots count as vacant.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            release_storage(&self.alloc, self.ptr, self.cap);
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }
}

impl<T: Clone, A: RawAlloc> Array<T, A> {
    /// Appends a clone of `value`, leaving the caller's value usable. Returns the index it was
    /// placed at.
    #[inline]
    pub fn insert_cloned(&mut self, value: &T) -> usize {
        self.insert(value.clone())
    }

    /// Inserts a clone of `value` at `index`, like [`Array::insert_at`].
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let s = String::from("b");
    /// let mut a = array![String::from("a"), String::from("c")];
    /// a.insert_at_cloned(1, &s);
    /// assert_eq!(a, ["a", "b", "c"]);
    /// assert_eq!(s, "b");
    /// ```
    #[inline]
    pub fn insert_at_cloned(&mut self, index: usize, value: &T) -> usize {
        self.insert_at(index, value.clone())
    }
}

impl<T, A: RawAlloc + Clone> Array<T, A> {
    /// Moves the contents out into a new array, leaving `self` empty with no storage
    /// (length 0, capacity 0). `self` stays safe to reuse or drop.
    ///
    /// # Examples
    ///
    /// ```
    /// use growarray::prelude::*;
    /// let mut a = array![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 0);
    /// a.insert(4);
    /// assert_eq!(a, [4]);
    /// ```
    pub fn take(&mut self) -> Self {
        let empty = Array::unallocated_in(self.alloc.clone());
        mem::replace(self, empty)
    }
}

impl<T, A: RawAlloc> Drop for Array<T, A> {
    fn drop(&mut self) {
        // Safety: [0, len) are live and dropped exactly once here; the storage came from
        // self.alloc with capacity cap.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            release_storage(&self.alloc, self.ptr, self.cap);
        }
    }
}

/// Cloning allocates storage of the same capacity and clones the elements in order.
///
/// # Examples
///
/// ```
/// use growarray::prelude::*;
/// let mut a = array![1, 2, 3];
/// let b = a.clone();
/// a[0] = 100;
/// assert_eq!(b, [1, 2, 3]);
/// assert_eq!(b.capacity(), a.capacity());
/// ```
impl<T: Clone, A: RawAlloc + Clone> Clone for Array<T, A> {
    fn clone(&self) -> Self {
        // If a clone() panics, dropping `copy` drops the clones made so far and releases
        // its storage.
        let mut copy = Array::with_capacity_in(self.cap, self.alloc.clone());
        for value in self.iter() {
            // Safety: copy.cap == self.cap >= self.len.
            unsafe {
                copy.write_at_end(value.clone());
            }
        }
        copy
    }
}

impl<T> Default for Array<T, Global> {
    /// Same as [`Array::new`].
    #[inline]
    fn default() -> Self {
        Array::new()
    }
}

impl<T, A: RawAlloc> Deref for Array<T, A> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> DerefMut for Array<T, A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for Array<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: RawAlloc> AsMut<[T]> for Array<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing panics when out of range.
///
/// ```should_panic
/// use growarray::prelude::*;
/// let a = array![1, 2, 3];
/// let _ = a[3];
/// ```
impl<T, A: RawAlloc, I: SliceIndex<[T]>> Index<I> for Array<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, A: RawAlloc, I: SliceIndex<[T]>> IndexMut<I> for Array<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for Array<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Equality compares elements only; capacity and allocator are ignored.
impl<T: PartialEq<U>, U, A: RawAlloc, B: RawAlloc> PartialEq<Array<U, B>> for Array<T, A> {
    #[inline]
    fn eq(&self, other: &Array<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, A: RawAlloc> Eq for Array<T, A> {}

impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<[U]> for Array<T, A> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: RawAlloc> PartialEq<&[U]> for Array<T, A> {
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: RawAlloc, const N: usize> PartialEq<[U; N]> for Array<T, A> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: Hash, A: RawAlloc> Hash for Array<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: RawAlloc> Extend<T> for Array<T, A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Copy + 'a, A: RawAlloc> Extend<&'a T> for Array<T, A> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().copied())
    }
}

/// Collecting starts from [`Array::new`] and grows as needed.
///
/// # Examples
///
/// ```
/// use growarray::prelude::*;
/// let a: Array<u32> = (0..100).collect();
/// assert_eq!(a.len(), 100);
/// assert!(a.iter().enumerate().all(|(i, &v)| v == i as u32));
/// ```
impl<T> FromIterator<T> for Array<T, Global> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Array::new();
        array.extend(iter);
        array
    }
}

/// The array gets exactly the vector's length as its capacity.
impl<T> From<Vec<T>> for Array<T, Global> {
    fn from(vec: Vec<T>) -> Self {
        let mut array = Array::with_capacity(vec.len());
        array.extend(vec);
        array
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, Global> {
    fn from(values: [T; N]) -> Self {
        let mut array = Array::with_capacity(N);
        array.extend(values);
        array
    }
}
