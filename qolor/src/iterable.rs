//!
//! The Iterable Facade
//!
//! `Iterable<C>` owns one cursor, which carries its own end bound. The
//! composition methods consume the iterable and return a new one over a
//! richer cursor type; nothing runs until a terminal method walks the
//! chain:
//!
//! ```
//! let total: i32 = qolor::range(1, 1000)
//!     .r#where(|x| x % 3 == 0 || x % 5 == 0)
//!     .sum();
//! assert_eq!(total, 233168);
//! ```
//!
//! Composition: `select`, `r#where`, `take_while`, `take`, `skip_while`,
//! `skip`, `join`, `join_with`, `synchronized`.
//!
//! Terminal: `first`, `last`, `aggregate`, `sum`, `to_vector`, `update`,
//! `contains`, `contains_by`, `count`, `is_empty`, and iteration through
//! `IntoIterator`.
//!

use std::ops::Add;

use crate::cursor::{
    ConcatFn, JoinCursor, SelectCursor, TupleCat, WhereCursor, WhileCursor, concat,
};
use crate::sync::Synchronized;
use crate::traits::{Capabilities, CountDown, Cursor, ForwardCursor, WritableCursor};

#[derive(Debug, Clone)]
pub struct Iterable<C> {
    cursor: C,
}

impl<C: Cursor> Iterable<C> {
    pub fn new(cursor: C) -> Self {
        Iterable { cursor }
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }

    pub fn capabilities() -> Capabilities {
        Capabilities::of::<C>()
    }

    /// Lazily maps every element through `f`.
    pub fn select<F, U>(self, f: F) -> Iterable<SelectCursor<C, F, U>>
    where
        F: FnMut(&C::Item) -> U,
    {
        Iterable::new(SelectCursor::new(self.cursor, f))
    }

    /// Lazily keeps the elements satisfying `p`.
    #[doc(alias = "filter")]
    pub fn r#where<P>(self, p: P) -> Iterable<WhereCursor<C, P>>
    where
        P: FnMut(&C::Item) -> bool,
    {
        Iterable::new(WhereCursor::new(self.cursor, p))
    }

    /// Ends the sequence at the first element that fails `p`.
    pub fn take_while<P>(self, p: P) -> Iterable<WhileCursor<C, P>>
    where
        P: FnMut(&C::Item) -> bool,
    {
        Iterable::new(WhileCursor::new(self.cursor, p))
    }

    pub fn take(self, n: usize) -> Iterable<WhileCursor<C, CountDown>> {
        Iterable::new(WhileCursor::new(self.cursor, CountDown::new(n)))
    }

    /// Eagerly drops the leading elements that satisfy `p`.
    pub fn skip_while<P>(mut self, mut p: P) -> Self
    where
        P: FnMut(&C::Item) -> bool,
    {
        loop {
            match self.cursor.current() {
                Some(value) if p(value) => {}
                _ => break,
            }
            self.cursor.advance();
        }
        self
    }

    /// Eagerly drops up to `n` leading elements, in constant time when the
    /// cursor supports random access.
    pub fn skip(mut self, n: usize) -> Self {
        self.cursor.advance_by(n);
        self
    }

    /// Nested-loop join yielding the concatenation of each matching pair
    /// of tuples.
    #[allow(clippy::type_complexity)]
    pub fn join<R, P>(
        self,
        other: Iterable<R>,
        p: P,
    ) -> Iterable<
        JoinCursor<
            C,
            R,
            P,
            ConcatFn<C::Item, R::Item>,
            <C::Item as TupleCat<R::Item>>::Output,
        >,
    >
    where
        R: ForwardCursor,
        P: FnMut(&C::Item, &R::Item) -> bool,
        C::Item: TupleCat<R::Item> + Clone,
        R::Item: Clone,
    {
        let combine: ConcatFn<C::Item, R::Item> = concat::<C::Item, R::Item>;
        Iterable::new(JoinCursor::new(self.cursor, other.cursor, p, combine))
    }

    /// Nested-loop join with a custom combiner for matching pairs.
    pub fn join_with<R, P, F, O>(
        self,
        other: Iterable<R>,
        p: P,
        combine: F,
    ) -> Iterable<JoinCursor<C, R, P, F, O>>
    where
        R: ForwardCursor,
        P: FnMut(&C::Item, &R::Item) -> bool,
        F: FnMut(&C::Item, &R::Item) -> O,
    {
        Iterable::new(JoinCursor::new(self.cursor, other.cursor, p, combine))
    }

    /// Shares this iterable's cursor behind a mutex; clones of the result
    /// consume the same sequence.
    pub fn synchronized(self) -> Iterable<Synchronized<C>>
    where
        C::Item: Clone,
    {
        Iterable::new(Synchronized::new(self.cursor))
    }

    pub fn is_empty(&mut self) -> bool {
        self.cursor.is_exhausted()
    }

    pub fn first(mut self) -> Option<C::Item>
    where
        C::Item: Clone,
    {
        self.cursor.take_current()
    }

    pub fn last(mut self) -> Option<C::Item>
    where
        C::Item: Clone,
    {
        if self.cursor.seek_last() {
            return self.cursor.take_current();
        }
        let mut last = None;
        while let Some(value) = self.cursor.take_current() {
            last = Some(value);
            self.cursor.advance();
        }
        last
    }

    /// Left fold seeded with the first element. An empty sequence yields
    /// `Default::default()`; a single element is returned without calling
    /// `f`.
    pub fn aggregate<F>(mut self, mut f: F) -> C::Item
    where
        C::Item: Clone + Default,
        F: FnMut(C::Item, C::Item) -> C::Item,
    {
        let Some(mut acc) = self.cursor.take_current() else {
            return C::Item::default();
        };
        self.cursor.advance();
        while let Some(value) = self.cursor.take_current() {
            acc = f(acc, value);
            self.cursor.advance();
        }
        acc
    }

    pub fn sum(self) -> C::Item
    where
        C::Item: Clone + Default + Add<Output = C::Item>,
    {
        self.aggregate(|a, b| a + b)
    }

    pub fn to_vector(self) -> Vec<C::Item>
    where
        C::Item: Clone,
    {
        self.into_iter().collect()
    }

    pub fn count(mut self) -> usize {
        let mut n = 0;
        while !self.cursor.is_exhausted() {
            self.cursor.advance();
            n += 1;
        }
        n
    }

    /// Copies elements into `out` until either side runs out, returning the
    /// number written.
    pub fn update<W>(mut self, mut out: W) -> usize
    where
        W: WritableCursor<Item = C::Item>,
        C::Item: Clone,
    {
        let mut written = 0;
        while !out.is_exhausted() {
            let Some(value) = self.cursor.take_current() else {
                break;
            };
            if let Some(slot) = out.current_mut() {
                *slot = value;
            }
            out.advance();
            self.cursor.advance();
            written += 1;
        }
        written
    }

    pub fn contains(self, value: &C::Item) -> bool
    where
        C::Item: PartialEq,
    {
        self.contains_by(value, |a, b| a == b)
    }

    /// Membership test with a caller-supplied equivalence.
    pub fn contains_by<F>(mut self, value: &C::Item, mut eq: F) -> bool
    where
        F: FnMut(&C::Item, &C::Item) -> bool,
    {
        loop {
            match self.cursor.current() {
                None => return false,
                Some(candidate) if eq(candidate, value) => return true,
                Some(_) => {}
            }
            self.cursor.advance();
        }
    }
}

/// Iterator over an `Iterable`, yielding owned copies of each element.
pub struct IntoIter<C> {
    cursor: C,
}

impl<C> Iterator for IntoIter<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let value = self.cursor.take_current()?;
        self.cursor.advance();
        Some(value)
    }
}

impl<C> IntoIterator for Iterable<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;
    type IntoIter = IntoIter<C>;

    fn into_iter(self) -> IntoIter<C> {
        IntoIter { cursor: self.cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{SliceCursor, SliceMutCursor};
    use crate::traits::Category;
    use crate::{from, from_fn, from_iter, range, range_with};
    use std::cell::Cell;

    #[test]
    fn test_select_preserves_order_and_length() {
        let data = [3, 1, 2];
        let out = from(&data).select(|x| x * 2).to_vector();
        assert_eq!(out, vec![6, 2, 4]);
    }

    #[test]
    fn test_where_subsequence() {
        let data = [5, 8, 1, 4, 7];
        let out = from(&data).r#where(|x| *x > 4).to_vector();
        assert_eq!(out, vec![5, 8, 7]);
    }

    #[test]
    fn test_take_while_prefix() {
        let data = [2, 4, 5, 6, 8];
        let out = from(&data).take_while(|x| x % 2 == 0).to_vector();
        assert_eq!(out, vec![2, 4]);
    }

    #[test]
    fn test_take_and_skip() {
        let data = [1, 2, 3, 4, 5];
        assert_eq!(from(&data).take(2).to_vector(), vec![1, 2]);
        assert_eq!(from(&data).take(10).to_vector(), vec![1, 2, 3, 4, 5]);
        assert_eq!(from(&data).skip(3).to_vector(), vec![4, 5]);
        assert!(from(&data).skip(9).to_vector().is_empty());
        assert_eq!(from(&data).skip_while(|x| *x < 3).to_vector(), vec![3, 4, 5]);
        assert_eq!(from(&data).skip(1).take(3).to_vector(), vec![2, 3, 4]);
    }

    #[test]
    fn test_first_and_last() {
        let data = [7, 8, 9];
        assert_eq!(from(&data).first(), Some(7));
        assert_eq!(from(&data).last(), Some(9));
        assert_eq!(from(&data).r#where(|x| x % 2 == 0).last(), Some(8));
        let empty: [i32; 0] = [];
        assert_eq!(from(&empty).first(), None);
        assert_eq!(from(&empty).last(), None);
    }

    #[test]
    fn test_last_uses_random_access() {
        let calls = Cell::new(0);
        let data = [1, 2, 3, 4];
        let last = from(&data)
            .select(|x| {
                calls.set(calls.get() + 1);
                x * 10
            })
            .last();
        assert_eq!(last, Some(40));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_aggregate_seeds_with_first() {
        let data = [2, 3, 4];
        assert_eq!(from(&data).aggregate(|a, b| a * b), 24);

        let calls = Cell::new(0);
        let single = [5];
        let result = from(&single).aggregate(|a, b| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(result, 5);
        assert_eq!(calls.get(), 0);

        let empty: [i32; 0] = [];
        assert_eq!(from(&empty).aggregate(|a, b| a + b), 0);
        let words = from_iter(Vec::<String>::new()).aggregate(|a, b| a + &b);
        assert_eq!(words, String::new());
    }

    #[test]
    fn test_join_example() {
        let left = [(1, "a"), (2, "b")];
        let right = [(1, "x"), (2, "y")];
        let out = from(&left).join(from(&right), |l, r| l.0 == r.0).to_vector();
        assert_eq!(out, vec![(1, "a", 1, "x"), (2, "b", 2, "y")]);
    }

    #[test]
    fn test_join_with_combiner() {
        let orders = [(1, 30), (2, 10), (1, 5)];
        let names = [(1, "ann"), (2, "bob")];
        let out = from(&orders)
            .join_with(from(&names), |o, n| o.0 == n.0, |o, n| format!("{}:{}", n.1, o.1))
            .to_vector();
        assert_eq!(out, vec!["ann:30", "bob:10", "ann:5"]);
    }

    #[test]
    fn test_update_into_writable() {
        let source = [1, 2, 3];
        let mut target = [0; 5];
        let written = from(&source).update(SliceMutCursor::new(&mut target));
        assert_eq!(written, 3);
        assert_eq!(target, [1, 2, 3, 0, 0]);

        let mut short = [0; 2];
        assert_eq!(from(&source).update(SliceMutCursor::new(&mut short)), 2);
        assert_eq!(short, [1, 2]);
    }

    #[test]
    fn test_contains() {
        let data = [1, 2, 3];
        assert!(from(&data).contains(&2));
        assert!(!from(&data).contains(&4));
        let words = ["Apple", "pear"];
        assert!(from(&words).contains_by(&"PEAR", |a, b| a.eq_ignore_ascii_case(b)));
    }

    #[test]
    fn test_count_and_is_empty() {
        assert_eq!(range(0, 10).r#where(|x| x % 2 == 1).count(), 5);
        let mut nothing = range(0, 10).r#where(|x| *x > 100);
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_composition_is_lazy() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let pipeline = from(&data)
            .select(|x| {
                calls.set(calls.get() + 1);
                x + 1
            })
            .r#where(|x| x % 2 == 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(pipeline.to_vector(), vec![2, 4]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_for_loop() {
        let mut seen = Vec::new();
        for v in range_with(10, 0, -5, true) {
            seen.push(v);
        }
        assert_eq!(seen, vec![10, 5, 0]);
    }

    #[test]
    fn test_capabilities_follow_adaptors() {
        type Slice<'a> = SliceCursor<'a, i32>;
        assert_eq!(Iterable::<Slice<'_>>::capabilities().category, Category::RandomAccess);
        let filtered = Capabilities::of::<WhereCursor<Slice<'_>, fn(&i32) -> bool>>();
        assert_eq!(filtered.category, Category::Forward);
        assert!(filtered.resettable);
        assert!(!filtered.bidirectional);
    }

    #[test]
    fn test_generator_pipeline() {
        let mut n = 0;
        let squares = from_fn(
            move || {
                n += 1;
                n * n
            },
            |sq| *sq < 50,
        )
        .to_vector();
        assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49]);
    }
}
