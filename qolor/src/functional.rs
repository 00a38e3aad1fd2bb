//!
//! Callable introspection.
//!
//! `Functional<Args>` is implemented for every `FnMut` closure, function
//! item and function pointer of arity 0 to 3. `Args` is the tuple of
//! argument types, so one closure type resolves to exactly one arity.
//!

use std::any::type_name;

pub trait Functional<Args> {
    type Output;

    const ARITY: usize;
}

impl<F, R> Functional<()> for F
where
    F: FnMut() -> R,
{
    type Output = R;

    const ARITY: usize = 0;
}

impl<F, A, R> Functional<(A,)> for F
where
    F: FnMut(A) -> R,
{
    type Output = R;

    const ARITY: usize = 1;
}

impl<F, A, B, R> Functional<(A, B)> for F
where
    F: FnMut(A, B) -> R,
{
    type Output = R;

    const ARITY: usize = 2;
}

impl<F, A, B, C, R> Functional<(A, B, C)> for F
where
    F: FnMut(A, B, C) -> R,
{
    type Output = R;

    const ARITY: usize = 3;
}

/// Summary of a callable type, as printed by the debug reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionalTraits {
    pub arity: usize,
    pub arguments: &'static str,
    pub output: &'static str,
}

pub fn describe<F, Args>(_f: &F) -> FunctionalTraits
where
    F: Functional<Args>,
{
    FunctionalTraits {
        arity: F::ARITY,
        arguments: type_name::<Args>(),
        output: type_name::<F::Output>(),
    }
}
