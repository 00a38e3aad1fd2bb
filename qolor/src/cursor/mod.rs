//!
//! Cursor implementations.
//!
//! Sources read existing storage; adaptors wrap other cursors and evaluate
//! their callables lazily, one position at a time.
//!

mod join;
mod predicate;
mod select;
mod source;
mod step;

pub use join::{ConcatFn, JoinCursor, TupleCat, concat};
pub use predicate::{WhereCursor, WhileCursor};
pub use select::SelectCursor;
pub use source::{IterCursor, SliceCursor, SliceMutCursor};
pub use step::StepCursor;
