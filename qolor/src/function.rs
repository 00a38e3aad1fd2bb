///
/// Generator Cursors
///
/// `FnCursor` turns a zero-argument producer plus a continuation condition
/// into a sequence: each position is one call of the producer, and the
/// sequence lasts while the condition accepts the produced value.
/// `VoidFnCursor` is the side-effect form, where the producer returns
/// nothing and the condition takes no argument.
///
/// Neither callable runs before the cursor is first observed, and each
/// runs once per position.
///

use crate::traits::{Category, Cursor};

pub struct FnCursor<G, P, T> {
    produce: G,
    cond: P,
    buf: Option<T>,
    live: bool,
    ignited: bool,
}

impl<G, P, T> FnCursor<G, P, T>
where
    G: FnMut() -> T,
    P: FnMut(&T) -> bool,
{
    pub fn new(produce: G, cond: P) -> Self {
        FnCursor { produce, cond, buf: None, live: false, ignited: false }
    }

    fn ignite(&mut self) {
        if !self.ignited {
            self.ignited = true;
            self.pull();
        }
    }

    fn pull(&mut self) {
        let value = (self.produce)();
        self.live = (self.cond)(&value);
        self.buf = Some(value);
    }
}

impl<G, P, T> Cursor for FnCursor<G, P, T>
where
    G: FnMut() -> T,
    P: FnMut(&T) -> bool,
{
    type Item = T;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.ignite();
        !self.live
    }

    fn current(&mut self) -> Option<&T> {
        self.ignite();
        if self.live { self.buf.as_ref() } else { None }
    }

    fn advance(&mut self) {
        self.ignite();
        if self.live {
            self.pull();
        }
    }
}

pub struct VoidFnCursor<G, P> {
    action: G,
    cond: P,
    live: bool,
    ignited: bool,
}

impl<G, P> VoidFnCursor<G, P>
where
    G: FnMut(),
    P: FnMut() -> bool,
{
    pub fn new(action: G, cond: P) -> Self {
        VoidFnCursor { action, cond, live: false, ignited: false }
    }

    fn ignite(&mut self) {
        if !self.ignited {
            self.ignited = true;
            self.pull();
        }
    }

    fn pull(&mut self) {
        (self.action)();
        self.live = (self.cond)();
    }
}

impl<G, P> Cursor for VoidFnCursor<G, P>
where
    G: FnMut(),
    P: FnMut() -> bool,
{
    type Item = ();

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.ignite();
        !self.live
    }

    fn current(&mut self) -> Option<&()> {
        self.ignite();
        if self.live { Some(&()) } else { None }
    }

    fn advance(&mut self) {
        self.ignite();
        if self.live {
            self.pull();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_counter_generator() {
        let mut next = 0;
        let mut cursor = FnCursor::new(
            move || {
                next += 1;
                next
            },
            |n: &i32| *n <= 3,
        );
        let mut seen = Vec::new();
        while let Some(n) = cursor.take_current() {
            seen.push(n);
            cursor.advance();
        }
        assert_eq!(seen, vec![1, 2, 3]);
        cursor.advance();
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_generator_ignites_once() {
        let produced = Cell::new(0);
        let checked = Cell::new(0);
        let mut cursor = FnCursor::new(
            || {
                produced.set(produced.get() + 1);
                42
            },
            |_: &i32| {
                checked.set(checked.get() + 1);
                true
            },
        );
        assert_eq!(produced.get(), 0);
        assert_eq!(cursor.current(), Some(&42));
        assert_eq!(cursor.current(), Some(&42));
        assert!(!cursor.is_exhausted());
        assert_eq!((produced.get(), checked.get()), (1, 1));
        cursor.advance();
        assert_eq!((produced.get(), checked.get()), (2, 2));
    }

    #[test]
    fn test_void_generator() {
        let ticks = Cell::new(0);
        let mut cursor = VoidFnCursor::new(|| ticks.set(ticks.get() + 1), || ticks.get() < 4);
        let mut steps = 0;
        while !cursor.is_exhausted() {
            assert_eq!(cursor.current(), Some(&()));
            steps += 1;
            cursor.advance();
        }
        assert_eq!(steps, 3);
        assert_eq!(ticks.get(), 4);
    }
}
