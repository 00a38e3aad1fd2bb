///
/// Cursor Protocol and Capability Traits
///
/// A cursor is a single position in a sequence that also knows where the
/// sequence ends. Every lazy adaptor in the crate is a cursor wrapping one
/// or two inner cursors, and the `Iterable` facade owns exactly one.
///
/// Capabilities are resolved at compile time:
/// - `Cursor::CATEGORY` classifies traversal (input, forward, bidirectional,
///   random access). Adaptors derive theirs from the cursors they wrap.
/// - `ForwardCursor` marks cursors that can be cloned to remember a position
///   and re-read from it. The right side of a join requires it.
/// - `WritableCursor` exposes a mutable slot at the current position.
///
/// A type that does not implement the required trait is rejected by the
/// compiler; there is no runtime capability check anywhere in the crate.
///

use std::any::type_name;
use std::fmt;
use std::mem::size_of;

/// Traversal category of a cursor, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Single pass; positions cannot be revisited.
    Input,
    /// Multi pass; a cloned cursor re-reads the same elements.
    Forward,
    /// Forward, and the last element can be reached without a full walk.
    Bidirectional,
    /// Constant-time jumps in both directions.
    RandomAccess,
}

impl Category {
    pub const fn is_resettable(self) -> bool {
        !matches!(self, Category::Input)
    }

    pub const fn is_bidirectional(self) -> bool {
        matches!(self, Category::Bidirectional | Category::RandomAccess)
    }

    pub const fn is_random_access(self) -> bool {
        matches!(self, Category::RandomAccess)
    }

    /// The weaker of `self` and `limit`.
    pub const fn capped(self, limit: Category) -> Category {
        if (self as u8) < (limit as u8) { self } else { limit }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Input => "input",
            Category::Forward => "forward",
            Category::Bidirectional => "bidirectional",
            Category::RandomAccess => "random_access",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The iterator protocol shared by every source and adaptor.
///
/// `current` and `is_exhausted` take `&mut self` because predicate-based
/// adaptors defer their first evaluation until the position is observed.
/// Calling either of them repeatedly without `advance` must not re-run user
/// callables.
pub trait Cursor {
    type Item;

    const CATEGORY: Category;
    const WRITABLE: bool = false;

    fn is_exhausted(&mut self) -> bool;

    /// The element at the current position, `None` once exhausted.
    fn current(&mut self) -> Option<&Self::Item>;

    /// Moves one position forward. Advancing an exhausted cursor is a no-op.
    fn advance(&mut self);

    /// Owned copy of the current element.
    fn take_current(&mut self) -> Option<Self::Item>
    where
        Self::Item: Clone,
    {
        self.current().cloned()
    }

    /// Moves up to `n` positions forward and returns how many were taken.
    fn advance_by(&mut self, n: usize) -> usize {
        let mut moved = 0;
        while moved < n && !self.is_exhausted() {
            self.advance();
            moved += 1;
        }
        moved
    }

    /// Repositions onto the last element without walking the sequence.
    ///
    /// Returns `false` when the cursor cannot do so, in which case it has
    /// not moved. An empty cursor that supports seeking returns `true` and
    /// stays exhausted.
    fn seek_last(&mut self) -> bool {
        false
    }
}

/// Drives a cursor the caller keeps, so its state (an error, a position)
/// can be inspected once a pipeline over it has finished.
impl<C: Cursor> Cursor for &mut C {
    type Item = C::Item;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        (**self).is_exhausted()
    }

    fn current(&mut self) -> Option<&C::Item> {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn take_current(&mut self) -> Option<C::Item>
    where
        C::Item: Clone,
    {
        (**self).take_current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        (**self).advance_by(n)
    }
}

/// A cursor whose clones re-read the same elements.
pub trait ForwardCursor: Cursor + Clone {}

/// A cursor with a mutable slot at its current position.
pub trait WritableCursor: Cursor {
    fn current_mut(&mut self) -> Option<&mut Self::Item>;
}

/// Compile-time capability record of a cursor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub category: Category,
    pub writable: bool,
    pub bidirectional: bool,
    pub resettable: bool,
    pub item: &'static str,
    pub item_size: usize,
}

impl Capabilities {
    pub fn of<C: Cursor>() -> Self {
        Capabilities {
            category: C::CATEGORY,
            writable: C::WRITABLE,
            bidirectional: C::CATEGORY.is_bidirectional(),
            resettable: C::CATEGORY.is_resettable(),
            item: type_name::<C::Item>(),
            item_size: size_of::<C::Item>(),
        }
    }
}

/// A boolean test over elements, implemented by every `FnMut(&T) -> bool`.
pub trait Predicate<T: ?Sized> {
    fn test(&mut self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    fn test(&mut self, value: &T) -> bool {
        self(value)
    }
}

/// Admits the first `n` elements it is asked about, then rejects the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountDown {
    remaining: usize,
}

impl CountDown {
    pub fn new(n: usize) -> Self {
        CountDown { remaining: n }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T: ?Sized> Predicate<T> for CountDown {
    fn test(&mut self, _value: &T) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
