//!
//! Synchronized Cursor
//!
//! `Synchronized<C>` shares one logical cursor between any number of
//! handles, possibly on different threads. Each primitive (`is_exhausted`,
//! `current`, `advance`, `advance_by`, `pop`) holds the mutex for its whole
//! duration; sequences of primitives are not atomic, so pipelines built on
//! top of a handle interleave with other consumers. `pop` is the primitive
//! for consuming from several threads.
//!
//! Lock discipline: every shared cursor gets a sequence number when it is
//! created. An operation that needs two cursors (equality) locks them in
//! ascending sequence order, and locks only once when both handles share
//! the same cursor.
//!

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{Category, Cursor};

static NEXT_ORDER: AtomicU64 = AtomicU64::new(0);

struct Shared<C> {
    order: u64,
    cursor: Mutex<C>,
}

pub struct Synchronized<C: Cursor> {
    shared: Arc<Shared<C>>,
    buf: Option<C::Item>,
}

impl<C: Cursor> Synchronized<C> {
    pub fn new(cursor: C) -> Self {
        let order = NEXT_ORDER.fetch_add(1, Ordering::Relaxed);
        Synchronized {
            shared: Arc::new(Shared { order, cursor: Mutex::new(cursor) }),
            buf: None,
        }
    }

    /// Sequence number used for lock ordering.
    pub fn order(&self) -> u64 {
        self.shared.order
    }

    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Takes the current element and advances, under one lock.
    pub fn pop(&self) -> Option<C::Item>
    where
        C::Item: Clone,
    {
        let mut cursor = self.lock();
        let value = cursor.take_current()?;
        cursor.advance();
        Some(value)
    }

    // A panic inside a user callable leaves the cursor between two
    // primitives, which is still a valid state.
    fn lock(&self) -> MutexGuard<'_, C> {
        self.shared.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Cursor> Clone for Synchronized<C> {
    fn clone(&self) -> Self {
        Synchronized { shared: Arc::clone(&self.shared), buf: None }
    }
}

impl<C> Cursor for Synchronized<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.lock().is_exhausted()
    }

    /// Copies the shared cursor's current element into this handle.
    fn current(&mut self) -> Option<&C::Item> {
        let value = self.lock().take_current();
        self.buf = value;
        self.buf.as_ref()
    }

    fn advance(&mut self) {
        self.buf = None;
        self.lock().advance();
    }

    fn take_current(&mut self) -> Option<C::Item> {
        self.lock().take_current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.buf = None;
        self.lock().advance_by(n)
    }
}

impl<C> PartialEq for Synchronized<C>
where
    C: Cursor + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.shares_with(other) {
            return true;
        }
        let (low, high) = if self.order() < other.order() { (self, other) } else { (other, self) };
        let low = low.lock();
        let high = high.lock();
        *low == *high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::SliceCursor;
    use crate::range::RangeCursor;
    use std::thread;

    #[test]
    fn test_handles_share_position() {
        let data = [1, 2, 3];
        let mut a = Synchronized::new(SliceCursor::new(&data));
        let mut b = a.clone();
        assert_eq!(a.current(), Some(&1));
        b.advance();
        assert_eq!(a.current(), Some(&2));
        assert_eq!(a.pop(), Some(2));
        assert_eq!(b.current(), Some(&3));
        assert!(a.shares_with(&b));
        assert!(a == b);
    }

    #[test]
    fn test_equality_across_cursors() {
        let data = [1, 2, 3];
        let a = Synchronized::new(SliceCursor::new(&data));
        let mut b = Synchronized::new(SliceCursor::new(&data));
        assert!(a.order() < b.order());
        assert!(a == b);
        assert!(b == a);
        b.advance();
        assert!(a != b);
    }

    #[test]
    fn test_concurrent_pop() {
        let source = Synchronized::new(RangeCursor::new(0u64, 1000, 1, false));
        let total = AtomicU64::new(0);
        let count = AtomicU64::new(0);
        thread::scope(|s| {
            for _ in 0..4 {
                let handle = source.clone();
                let (total, count) = (&total, &count);
                s.spawn(move || {
                    while let Some(v) = handle.pop() {
                        total.fetch_add(v, Ordering::Relaxed);
                        count.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });
        assert_eq!(count.load(Ordering::Relaxed), 1000);
        assert_eq!(total.load(Ordering::Relaxed), 499_500);
    }
}
