//!
//! qolor - Lazy Query Pipelines
//!
//! Composable, lazily evaluated sequence operations over cursors:
//!
//! ## Sources
//! - `from(&[T])`, `from_bounds`, `from_mut` - slices
//! - `from_iter(iter)` - any Rust iterator, single pass
//! - `from_fn(produce, cond)`, `from_fn_void(action, cond)` - generators
//! - `from_step(init, step)` - in-place step functions
//! - `range(from, to)`, `range_with(from, to, step, inclusive)` - numeric ranges
//!
//! ## Composition (lazy)
//! - `select`, `r#where`, `take_while`, `take`, `join`, `join_with`
//! - `skip`, `skip_while` (eager on the begin position only)
//!
//! ## Terminal
//! - `first`, `last`, `aggregate`, `sum`, `to_vector`, `update`,
//!   `contains`, `count`, `is_empty`, `for` loops
//!
//! ## Capabilities
//! Cursor capabilities are checked by the compiler: `ForwardCursor` for
//! re-readable cursors (required on the right side of a join),
//! `WritableCursor` for update targets, and `Cursor::CATEGORY` for the
//! constant-time `skip` and `last` paths.
//!
//! ## Concurrency
//! `Synchronized<C>` shares one cursor between threads behind a mutex.
//!

pub mod cursor;
pub mod debug;
pub mod factory;
pub mod function;
pub mod functional;
pub mod iterable;
pub mod range;
pub mod sync;
pub mod traits;

pub use cursor::{
    IterCursor, JoinCursor, SelectCursor, SliceCursor, SliceMutCursor, StepCursor, TupleCat,
    WhereCursor, WhileCursor,
};
pub use factory::{
    from, from_bounds, from_cursor, from_fn, from_fn_void, from_iter, from_mut, from_step, range,
    range_with,
};
pub use function::{FnCursor, VoidFnCursor};
pub use functional::{Functional, FunctionalTraits};
pub use iterable::Iterable;
pub use range::{RangeCursor, RangeEq, RangeNum};
pub use sync::Synchronized;
pub use traits::{Capabilities, Category, CountDown, Cursor, ForwardCursor, Predicate, WritableCursor};
