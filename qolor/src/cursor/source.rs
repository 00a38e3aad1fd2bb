///
/// Source Cursors
///
/// Cursors that read from existing storage rather than wrapping another
/// cursor: borrowed slices (read-only and writable) and arbitrary Rust
/// iterators.
///

use std::ptr;

use crate::traits::{Category, Cursor, ForwardCursor, WritableCursor};

/// Random-access cursor over a borrowed slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Elements left between the current position and the end.
    pub fn remaining(&self) -> &'a [T] {
        &self.slice[self.pos..]
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        SliceCursor { slice: self.slice, pos: self.pos }
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    type Item = T;

    const CATEGORY: Category = Category::RandomAccess;

    fn is_exhausted(&mut self) -> bool {
        self.pos >= self.slice.len()
    }

    fn current(&mut self) -> Option<&T> {
        self.slice.get(self.pos)
    }

    fn advance(&mut self) {
        if self.pos < self.slice.len() {
            self.pos += 1;
        }
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let step = n.min(self.slice.len() - self.pos);
        self.pos += step;
        step
    }

    fn seek_last(&mut self) -> bool {
        if self.pos < self.slice.len() {
            self.pos = self.slice.len() - 1;
        }
        true
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

/// Writable cursor over a mutable slice.
///
/// Single pass, since the exclusive borrow cannot be duplicated.
#[derive(Debug)]
pub struct SliceMutCursor<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceMutCursor<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        SliceMutCursor { slice, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Cursor for SliceMutCursor<'_, T> {
    type Item = T;

    const CATEGORY: Category = Category::Input;
    const WRITABLE: bool = true;

    fn is_exhausted(&mut self) -> bool {
        self.pos >= self.slice.len()
    }

    fn current(&mut self) -> Option<&T> {
        self.slice.get(self.pos)
    }

    fn advance(&mut self) {
        if self.pos < self.slice.len() {
            self.pos += 1;
        }
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let step = n.min(self.slice.len() - self.pos);
        self.pos += step;
        step
    }
}

impl<T> WritableCursor for SliceMutCursor<'_, T> {
    fn current_mut(&mut self) -> Option<&mut T> {
        self.slice.get_mut(self.pos)
    }
}

/// Input cursor over any Rust iterator.
///
/// The head element is pulled on first observation and buffered, so
/// repeated `current` calls do not advance the iterator.
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
    primed: bool,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        IterCursor { iter, head: None, primed: false }
    }

    fn prime(&mut self) {
        if !self.primed {
            self.primed = true;
            self.head = self.iter.next();
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.prime();
        self.head.is_none()
    }

    fn current(&mut self) -> Option<&I::Item> {
        self.prime();
        self.head.as_ref()
    }

    fn advance(&mut self) {
        self.prime();
        if self.head.is_some() {
            self.head = self.iter.next();
        }
    }

    fn take_current(&mut self) -> Option<I::Item>
    where
        I::Item: Clone,
    {
        self.prime();
        self.head.clone()
    }
}
