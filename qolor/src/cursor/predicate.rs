///
/// Predicate Adaptors
///
/// `WhereCursor` filters, `WhileCursor` truncates. Both start un-ignited:
/// construction evaluates nothing, and the first observation (`current`,
/// `is_exhausted` or `advance`) runs the predicate for the starting
/// position. After that the predicate runs exactly once per position.
///

use crate::traits::{Category, Cursor, ForwardCursor, Predicate};

/// Yields only the elements of the inner cursor that satisfy `P`.
#[derive(Debug, Clone)]
pub struct WhereCursor<C, P> {
    inner: C,
    pred: P,
    ignited: bool,
}

impl<C, P> WhereCursor<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    pub fn new(inner: C, pred: P) -> Self {
        WhereCursor { inner, pred, ignited: false }
    }

    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    fn ignite(&mut self) {
        if !self.ignited {
            self.ignited = true;
            self.skip_rejected();
        }
    }

    fn skip_rejected(&mut self) {
        loop {
            let keep = match self.inner.current() {
                None => true,
                Some(value) => self.pred.test(value),
            };
            if keep {
                break;
            }
            self.inner.advance();
        }
    }
}

impl<C, P> Cursor for WhereCursor<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY.capped(Category::Forward);

    fn is_exhausted(&mut self) -> bool {
        self.ignite();
        self.inner.is_exhausted()
    }

    fn current(&mut self) -> Option<&C::Item> {
        self.ignite();
        self.inner.current()
    }

    fn advance(&mut self) {
        self.ignite();
        if self.inner.is_exhausted() {
            return;
        }
        self.inner.advance();
        self.skip_rejected();
    }
}

impl<C, P> ForwardCursor for WhereCursor<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item> + Clone,
{
}

/// Yields the longest prefix of the inner cursor that satisfies `P`.
///
/// The first rejected element ends the sequence for good; later elements
/// are never inspected.
#[derive(Debug, Clone)]
pub struct WhileCursor<C, P> {
    inner: C,
    pred: P,
    ignited: bool,
    done: bool,
}

impl<C, P> WhileCursor<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    pub fn new(inner: C, pred: P) -> Self {
        WhileCursor { inner, pred, ignited: false, done: false }
    }

    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    fn ignite(&mut self) {
        if !self.ignited {
            self.ignited = true;
            self.check();
        }
    }

    fn check(&mut self) {
        self.done = match self.inner.current() {
            None => true,
            Some(value) => !self.pred.test(value),
        };
    }
}

impl<C, P> Cursor for WhileCursor<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    const CATEGORY: Category = C::CATEGORY.capped(Category::Forward);

    fn is_exhausted(&mut self) -> bool {
        self.ignite();
        self.done
    }

    fn current(&mut self) -> Option<&C::Item> {
        self.ignite();
        if self.done {
            return None;
        }
        self.inner.current()
    }

    fn advance(&mut self) {
        self.ignite();
        if self.done {
            return;
        }
        self.inner.advance();
        self.check();
    }
}

impl<C, P> ForwardCursor for WhileCursor<C, P>
where
    C: ForwardCursor,
    P: Predicate<C::Item> + Clone,
{
}
