///
/// Nested-Loop Join
///
/// `JoinCursor` walks every pair of (left, right) elements in left-major
/// order and stops on the pairs that satisfy the join predicate. The right
/// cursor must be a `ForwardCursor`: a pristine clone of it is kept and
/// restored each time the left side moves on.
///
/// Pair values are produced by a combiner. `TupleCat` provides the default
/// combiner used by `Iterable::join`, which concatenates tuple elements.
///

use tracing::trace;

use crate::traits::{Category, Cursor, ForwardCursor};

#[derive(Debug, Clone)]
pub struct JoinCursor<L, R, P, F, O> {
    left: L,
    start: R,
    right: R,
    pred: P,
    combine: F,
    buf: Option<O>,
    ignited: bool,
}

impl<L, R, P, F, O> JoinCursor<L, R, P, F, O>
where
    L: Cursor,
    R: ForwardCursor,
    P: FnMut(&L::Item, &R::Item) -> bool,
    F: FnMut(&L::Item, &R::Item) -> O,
{
    pub fn new(left: L, right: R, pred: P, combine: F) -> Self {
        JoinCursor {
            left,
            start: right.clone(),
            right,
            pred,
            combine,
            buf: None,
            ignited: false,
        }
    }

    fn ignite(&mut self) {
        if !self.ignited {
            self.ignited = true;
            self.seek();
        }
    }

    /// Moves to the next satisfying pair at or after the current one.
    fn seek(&mut self) {
        loop {
            if self.left.is_exhausted() {
                return;
            }
            if self.right.is_exhausted() {
                self.left.advance();
                self.right = self.start.clone();
                trace!("join: right side reset");
                continue;
            }
            let hit = match (self.left.current(), self.right.current()) {
                (Some(l), Some(r)) => (self.pred)(l, r),
                _ => false,
            };
            if hit {
                return;
            }
            self.right.advance();
        }
    }
}

impl<L, R, P, F, O> Cursor for JoinCursor<L, R, P, F, O>
where
    L: Cursor,
    R: ForwardCursor,
    P: FnMut(&L::Item, &R::Item) -> bool,
    F: FnMut(&L::Item, &R::Item) -> O,
{
    type Item = O;

    const CATEGORY: Category = L::CATEGORY.capped(Category::Forward);

    fn is_exhausted(&mut self) -> bool {
        self.ignite();
        self.left.is_exhausted()
    }

    fn current(&mut self) -> Option<&O> {
        self.ignite();
        if self.buf.is_none() {
            let (Some(l), Some(r)) = (self.left.current(), self.right.current()) else {
                return None;
            };
            self.buf = Some((self.combine)(l, r));
        }
        self.buf.as_ref()
    }

    fn advance(&mut self) {
        self.ignite();
        if self.left.is_exhausted() {
            return;
        }
        self.buf = None;
        self.right.advance();
        self.seek();
    }
}

impl<L, R, P, F, O> ForwardCursor for JoinCursor<L, R, P, F, O>
where
    L: ForwardCursor,
    R: ForwardCursor,
    P: FnMut(&L::Item, &R::Item) -> bool + Clone,
    F: FnMut(&L::Item, &R::Item) -> O + Clone,
    O: Clone,
{
}

/// Tuple concatenation: `(a, b).cat((c,))` is `(a, b, c)`.
pub trait TupleCat<Rhs> {
    type Output;

    fn cat(self, rhs: Rhs) -> Self::Output;
}

macro_rules! tuple_cat {
    (($($a:ident),+) + ($($b:ident),+)) => {
        impl<$($a,)+ $($b,)+> TupleCat<($($b,)+)> for ($($a,)+) {
            type Output = ($($a,)+ $($b,)+);

            #[allow(non_snake_case)]
            fn cat(self, rhs: ($($b,)+)) -> Self::Output {
                let ($($a,)+) = self;
                let ($($b,)+) = rhs;
                ($($a,)+ $($b,)+)
            }
        }
    };
}

tuple_cat!((A0) + (B0));
tuple_cat!((A0) + (B0, B1));
tuple_cat!((A0) + (B0, B1, B2));
tuple_cat!((A0) + (B0, B1, B2, B3));
tuple_cat!((A0, A1) + (B0));
tuple_cat!((A0, A1) + (B0, B1));
tuple_cat!((A0, A1) + (B0, B1, B2));
tuple_cat!((A0, A1) + (B0, B1, B2, B3));
tuple_cat!((A0, A1, A2) + (B0));
tuple_cat!((A0, A1, A2) + (B0, B1));
tuple_cat!((A0, A1, A2) + (B0, B1, B2));
tuple_cat!((A0, A1, A2) + (B0, B1, B2, B3));
tuple_cat!((A0, A1, A2, A3) + (B0));
tuple_cat!((A0, A1, A2, A3) + (B0, B1));
tuple_cat!((A0, A1, A2, A3) + (B0, B1, B2));
tuple_cat!((A0, A1, A2, A3) + (B0, B1, B2, B3));

/// Default join combiner: clones both sides and concatenates them.
pub type ConcatFn<A, B> = fn(&A, &B) -> <A as TupleCat<B>>::Output;

pub fn concat<A, B>(a: &A, b: &B) -> A::Output
where
    A: TupleCat<B> + Clone,
    B: Clone,
{
    a.clone().cat(b.clone())
}
