///
/// Entry points that build an `Iterable` from existing data, a callable,
/// or a numeric range. Driver crates add their own (`from_csv`, query
/// cursors).
///

use crate::cursor::{IterCursor, SliceCursor, SliceMutCursor, StepCursor};
use crate::function::{FnCursor, VoidFnCursor};
use crate::iterable::Iterable;
use crate::range::{RangeCursor, RangeNum};
use crate::traits::Cursor;

pub fn from<T>(slice: &[T]) -> Iterable<SliceCursor<'_, T>> {
    Iterable::new(SliceCursor::new(slice))
}

/// The elements of `slice` in `begin..end`, clamped to the slice. An
/// inverted pair yields an empty iterable.
pub fn from_bounds<T>(slice: &[T], begin: usize, end: usize) -> Iterable<SliceCursor<'_, T>> {
    let end = end.min(slice.len());
    let begin = begin.min(end);
    Iterable::new(SliceCursor::new(&slice[begin..end]))
}

pub fn from_mut<T>(slice: &mut [T]) -> Iterable<SliceMutCursor<'_, T>> {
    Iterable::new(SliceMutCursor::new(slice))
}

pub fn from_iter<I: IntoIterator>(iter: I) -> Iterable<IterCursor<I::IntoIter>> {
    Iterable::new(IterCursor::new(iter.into_iter()))
}

pub fn from_cursor<C: Cursor>(cursor: C) -> Iterable<C> {
    Iterable::new(cursor)
}

/// Calls `produce` once per element while `cond` accepts the result.
pub fn from_fn<G, P, T>(produce: G, cond: P) -> Iterable<FnCursor<G, P, T>>
where
    G: FnMut() -> T,
    P: FnMut(&T) -> bool,
{
    Iterable::new(FnCursor::new(produce, cond))
}

/// Calls `action` once per element while `cond` holds.
pub fn from_fn_void<G, P>(action: G, cond: P) -> Iterable<VoidFnCursor<G, P>>
where
    G: FnMut(),
    P: FnMut() -> bool,
{
    Iterable::new(VoidFnCursor::new(action, cond))
}

/// Starts at `init`; each advance mutates it through `step`, which
/// returns whether the sequence continues.
pub fn from_step<T, S>(init: T, step: S) -> Iterable<StepCursor<T, S>>
where
    S: FnMut(&mut T) -> bool,
{
    Iterable::new(StepCursor::new(init, step))
}

/// `from, from + 1, ...` up to but excluding `to`.
pub fn range<N: RangeNum>(from: N, to: N) -> Iterable<RangeCursor<N>> {
    Iterable::new(RangeCursor::new(from, to, N::ONE, false))
}

pub fn range_with<N: RangeNum>(from: N, to: N, step: N, inclusive: bool) -> Iterable<RangeCursor<N>> {
    Iterable::new(RangeCursor::new(from, to, step, inclusive))
}
