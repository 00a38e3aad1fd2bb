///
/// Numeric Ranges
///
/// `RangeCursor` walks the arithmetic progression `from, from + step, ...`
/// up to a precomputed end bound. The bound is always a grid point:
///
/// - exclusive ranges stop before the first grid point at or past `to`,
/// - inclusive ranges also yield that grid point,
/// - a zero step, or a step pointing away from `to`, yields nothing.
///
/// `advance` adds one step to the running position and `advance_by(n)`
/// adds `n` steps at once. Termination compares the position with the end
/// bound through `RangeEq`: exact equality for integers, and a half-step
/// tolerance for floats so that rounding drift never adds or drops the
/// final element. A float range with a NaN or infinite `from`, `to` or
/// `step` is empty.
///
/// Integer positions are tracked in `i128`, so ranges that touch the edge
/// of their type (`0u8..=255`) terminate correctly.
///

use std::fmt;

use tracing::trace;

use crate::traits::{Category, Cursor, ForwardCursor};

/// Relative tolerance used when deciding whether `to` sits on the grid.
const GRID_TOLERANCE: f64 = 1e-9;

pub trait RangeNum: Copy + PartialOrd + fmt::Debug + 'static {
    /// Representation used for positions and bounds.
    type Wide: Copy + PartialEq + fmt::Debug;

    const ONE: Self;

    fn widen(self) -> Self::Wide;

    fn narrow(wide: Self::Wide) -> Self;

    /// `base + step * n`.
    fn offset(base: Self::Wide, step: Self::Wide, n: usize) -> Self::Wide;

    /// Number of grid points at or after `from` and strictly before `to`.
    /// `None` when `step` is zero or points away from `to`.
    fn span(from: Self::Wide, to: Self::Wide, step: Self::Wide) -> Option<usize>;

    /// Number of steps between two grid points.
    fn distance(from: Self::Wide, to: Self::Wide, step: Self::Wide) -> usize;

    fn epsilon(step: Self::Wide) -> Self::Wide;

    fn near(a: Self::Wide, b: Self::Wide, epsilon: Self::Wide) -> bool;
}

macro_rules! range_int {
    ($($t:ty),* $(,)?) => {$(
        impl RangeNum for $t {
            type Wide = i128;

            const ONE: Self = 1;

            fn widen(self) -> i128 {
                self as i128
            }

            fn narrow(wide: i128) -> Self {
                wide as $t
            }

            fn offset(base: i128, step: i128, n: usize) -> i128 {
                base.wrapping_add(step.wrapping_mul(n as i128))
            }

            fn span(from: i128, to: i128, step: i128) -> Option<usize> {
                if step == 0 {
                    return None;
                }
                let diff = to - from;
                if diff == 0 {
                    return Some(0);
                }
                if (diff > 0) != (step > 0) {
                    return None;
                }
                let count = diff.unsigned_abs().div_ceil(step.unsigned_abs());
                Some(usize::try_from(count).unwrap_or(usize::MAX))
            }

            fn distance(from: i128, to: i128, step: i128) -> usize {
                if step == 0 {
                    return 0;
                }
                usize::try_from((to - from) / step).unwrap_or(0)
            }

            fn epsilon(_step: i128) -> i128 {
                0
            }

            fn near(a: i128, b: i128, _epsilon: i128) -> bool {
                a == b
            }
        }
    )*};
}

range_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! range_float {
    ($($t:ty),* $(,)?) => {$(
        impl RangeNum for $t {
            type Wide = f64;

            const ONE: Self = 1.0;

            fn widen(self) -> f64 {
                self as f64
            }

            fn narrow(wide: f64) -> Self {
                wide as $t
            }

            fn offset(base: f64, step: f64, n: usize) -> f64 {
                base + step * n as f64
            }

            fn span(from: f64, to: f64, step: f64) -> Option<usize> {
                if step == 0.0 || !step.is_finite() || !from.is_finite() || !to.is_finite() {
                    return None;
                }
                let q = (to - from) / step;
                if q == 0.0 {
                    return Some(0);
                }
                if q < 0.0 {
                    return None;
                }
                let nearest = q.round();
                let count = if (q - nearest).abs() <= GRID_TOLERANCE * nearest.max(1.0) {
                    nearest
                } else {
                    q.ceil()
                };
                Some(count as usize)
            }

            fn distance(from: f64, to: f64, step: f64) -> usize {
                if step == 0.0 {
                    return 0;
                }
                ((to - from) / step).round().max(0.0) as usize
            }

            fn epsilon(step: f64) -> f64 {
                step.abs() / 2.0
            }

            fn near(a: f64, b: f64, epsilon: f64) -> bool {
                a == b || a.is_nan() || b.is_nan() || (a - b).abs() <= epsilon
            }
        }
    )*};
}

range_float!(f32, f64);

/// End-of-range comparer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeEq<N: RangeNum> {
    epsilon: N::Wide,
}

impl<N: RangeNum> RangeEq<N> {
    pub fn for_step(step: N) -> Self {
        RangeEq { epsilon: N::epsilon(step.widen()) }
    }

    pub fn equal(&self, a: N::Wide, b: N::Wide) -> bool {
        N::near(a, b, self.epsilon)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeCursor<N: RangeNum> {
    value: N,
    pos: N::Wide,
    step: N::Wide,
    end: N::Wide,
    eq: RangeEq<N>,
}

impl<N: RangeNum> RangeCursor<N> {
    pub fn new(from: N, to: N, step: N, inclusive: bool) -> Self {
        let (start, stride) = (from.widen(), step.widen());
        let end = match N::span(start, to.widen(), stride) {
            Some(count) => {
                let count = if inclusive { count.saturating_add(1) } else { count };
                N::offset(start, stride, count)
            }
            None => start,
        };
        trace!(?from, ?to, ?step, inclusive, "range");
        RangeCursor { value: from, pos: start, step: stride, end, eq: RangeEq::for_step(step) }
    }

    /// Elements left, counting the current one.
    pub fn len(&self) -> usize {
        if self.eq.equal(self.pos, self.end) {
            return 0;
        }
        N::distance(self.pos, self.end, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn jump(&mut self, n: usize) {
        self.pos = N::offset(self.pos, self.step, n);
        self.value = N::narrow(self.pos);
    }
}

impl<N: RangeNum> Cursor for RangeCursor<N> {
    type Item = N;

    const CATEGORY: Category = Category::RandomAccess;

    fn is_exhausted(&mut self) -> bool {
        self.eq.equal(self.pos, self.end)
    }

    fn current(&mut self) -> Option<&N> {
        if self.is_exhausted() { None } else { Some(&self.value) }
    }

    fn advance(&mut self) {
        if !self.is_exhausted() {
            self.jump(1);
        }
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let taken = n.min(self.len());
        if taken > 0 {
            self.jump(taken);
        }
        taken
    }

    fn seek_last(&mut self) -> bool {
        let remaining = self.len();
        if remaining > 1 {
            self.jump(remaining - 1);
        }
        true
    }
}

impl<N: RangeNum> ForwardCursor for RangeCursor<N> {}
