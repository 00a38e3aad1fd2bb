use crate::traits::{Category, Cursor, ForwardCursor};

/// Applies a transform to each element of the inner cursor.
///
/// The transformed value is produced on the first observation of a position
/// and kept until the cursor moves, so repeated `current` calls run the
/// transform once. Exhaustion checks and jumps never run it.
#[derive(Debug, Clone)]
pub struct SelectCursor<C, F, U> {
    inner: C,
    f: F,
    buf: Option<U>,
}

impl<C, F, U> SelectCursor<C, F, U> {
    pub fn new(inner: C, f: F) -> Self {
        SelectCursor { inner, f, buf: None }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, F, U> Cursor for SelectCursor<C, F, U>
where
    C: Cursor,
    F: FnMut(&C::Item) -> U,
{
    type Item = U;

    const CATEGORY: Category = C::CATEGORY;

    fn is_exhausted(&mut self) -> bool {
        self.inner.is_exhausted()
    }

    fn current(&mut self) -> Option<&U> {
        if self.buf.is_none() {
            let value = self.inner.current()?;
            self.buf = Some((self.f)(value));
        }
        self.buf.as_ref()
    }

    fn advance(&mut self) {
        self.buf = None;
        self.inner.advance();
    }

    fn take_current(&mut self) -> Option<U>
    where
        U: Clone,
    {
        match self.buf.take() {
            Some(value) => Some(value),
            None => {
                let value = self.inner.current()?;
                Some((self.f)(value))
            }
        }
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.buf = None;
        self.inner.advance_by(n)
    }

    fn seek_last(&mut self) -> bool {
        let moved = self.inner.seek_last();
        if moved {
            self.buf = None;
        }
        moved
    }
}

impl<C, F, U> ForwardCursor for SelectCursor<C, F, U>
where
    C: ForwardCursor,
    F: FnMut(&C::Item) -> U + Clone,
    U: Clone,
{
}
