use growarray::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn filled(cap: usize, values: &[i32]) -> Array<i32> {
    let mut a = Array::with_capacity(cap);
    for &v in values {
        a.insert(v);
    }
    a
}

fn walk<T: Copy>(mut c: Cursor<'_, T>) -> Vec<T> {
    let mut out = vec![*c.get()];
    while c.has_next() {
        c.advance();
        out.push(*c.get());
    }
    out
}

/// Adds one to a shared counter when dropped.
#[derive(Clone)]
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn hundred_inserts_from_capacity_two() {
    let mut a = Array::with_capacity(2);
    for i in 0..100usize {
        assert_eq!(a.insert(i), i);
    }
    assert_eq!(a.len(), 100);
    assert!(a.iter().enumerate().all(|(i, &v)| v == i));
    assert!(a.capacity() >= 100);
}

#[test]
fn capacity_two_scenario() {
    let mut a = filled(2, &[1, 2, 3]);
    assert_eq!(a, [1, 2, 3]);
    a.insert_at(1, 99);
    assert_eq!(a, [1, 99, 2, 3]);
    a.remove(0);
    assert_eq!(a, [99, 2, 3]);
}

#[test]
fn cursors_over_one_to_five() {
    let a = filled(DEFAULT_CAPACITY, &[1, 2, 3, 4, 5]);
    assert_eq!(walk(a.cursor()), [1, 2, 3, 4, 5]);
    assert_eq!(walk(a.reverse_cursor()), [5, 4, 3, 2, 1]);

    let empty: Array<i32> = Array::new();
    assert!(!empty.cursor().has_next());
    assert!(!empty.reverse_cursor().has_next());
}

proptest! {
    #[test]
    fn appends_keep_order(cap in 0usize..20, values in prop::collection::vec(any::<i32>(), 0..200)) {
        let a = filled(cap, &values);
        prop_assert_eq!(a.len(), values.len());
        prop_assert!(a.capacity() >= a.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(a[i], *v);
        }
    }

    #[test]
    fn insert_at_shifts_right(
        cap in 0usize..10,
        values in prop::collection::vec(any::<i32>(), 0..50),
        k in any::<prop::sample::Index>(),
        x in any::<i32>(),
    ) {
        let k = k.index(values.len() + 1);
        let mut a = filled(cap, &values);
        prop_assert_eq!(a.insert_at(k, x), k);
        prop_assert_eq!(a.len(), values.len() + 1);
        prop_assert_eq!(&a[..k], &values[..k]);
        prop_assert_eq!(a[k], x);
        prop_assert_eq!(&a[k + 1..], &values[k..]);
    }

    #[test]
    fn remove_shifts_left(
        values in prop::collection::vec(any::<i32>(), 1..50),
        k in any::<prop::sample::Index>(),
    ) {
        let k = k.index(values.len());
        let mut a = filled(DEFAULT_CAPACITY, &values);
        let cap = a.capacity();
        prop_assert_eq!(a.remove(k), values[k]);
        prop_assert_eq!(a.len(), values.len() - 1);
        prop_assert_eq!(&a[..k], &values[..k]);
        prop_assert_eq!(&a[k..], &values[k + 1..]);
        prop_assert_eq!(a.capacity(), cap);
    }

    #[test]
    fn clones_are_independent(
        values in prop::collection::vec(any::<i32>(), 1..50),
        k in any::<prop::sample::Index>(),
    ) {
        let k = k.index(values.len());
        let mut a = filled(4, &values);
        let mut b = a.clone();
        b.set(k, b[k].wrapping_add(1));
        prop_assert_eq!(&a[..], &values[..]);
        a.insert(0);
        prop_assert_eq!(b.len(), values.len());
        prop_assert_eq!(b[k], values[k].wrapping_add(1));
    }

    #[test]
    fn take_empties_source(cap in 0usize..10, values in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut a = filled(cap, &values);
        let b = a.take();
        prop_assert_eq!(a.len(), 0);
        prop_assert_eq!(a.capacity(), 0);
        prop_assert_eq!(&b[..], &values[..]);
    }

    #[test]
    fn cursors_visit_every_element(values in prop::collection::vec(any::<i32>(), 1..50)) {
        let a = filled(1, &values);
        prop_assert_eq!(walk(a.cursor()), values.clone());
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(walk(a.reverse_cursor()), reversed);
    }

    #[test]
    fn every_element_dropped_once(
        n in 0usize..40,
        removes in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
        consume in 0usize..40,
    ) {
        let drops = Rc::new(Cell::new(0));
        let mut a = Array::with_capacity(1);
        for _ in 0..n {
            a.insert(DropCounter(drops.clone()));
        }
        let mut removed = 0;
        for r in &removes {
            if a.is_empty() {
                break;
            }
            let k = r.index(a.len());
            drop(a.remove(k));
            removed += 1;
        }
        prop_assert_eq!(drops.get(), removed);

        let b = a.take();
        let c = b.clone();
        let mut it = c.into_iter();
        for _ in 0..consume {
            if it.next().is_none() {
                break;
            }
        }
        drop(it);
        prop_assert_eq!(drops.get(), removed + (n - removed));
        drop(b);
        drop(a);
        prop_assert_eq!(drops.get(), removed + 2 * (n - removed));
    }
}
