use crate::traits::{Category, Cursor};

/// Input cursor driven by an in-place step function.
///
/// The buffer holds the current element. Each advance hands it to `step`,
/// which updates it and returns whether the sequence continues. When the
/// sequence ends the optional finish hook sees the buffer once.
pub struct StepCursor<T, S, E = fn(&mut T)> {
    buf: T,
    step: S,
    finish: Option<E>,
    live: bool,
    pending: bool,
}

impl<T, S> StepCursor<T, S>
where
    S: FnMut(&mut T) -> bool,
{
    /// The cursor starts on `init` itself.
    pub fn new(init: T, step: S) -> Self {
        StepCursor { buf: init, step, finish: None, live: true, pending: false }
    }

    /// The cursor starts on the result of the first step, which runs on
    /// first observation.
    pub fn primed(init: T, step: S) -> Self {
        StepCursor { buf: init, step, finish: None, live: true, pending: true }
    }
}

impl<T, S, E> StepCursor<T, S, E>
where
    S: FnMut(&mut T) -> bool,
    E: FnMut(&mut T),
{
    pub fn with_finish<E2>(self, finish: E2) -> StepCursor<T, S, E2>
    where
        E2: FnMut(&mut T),
    {
        StepCursor {
            buf: self.buf,
            step: self.step,
            finish: Some(finish),
            live: self.live,
            pending: self.pending,
        }
    }

    fn settle(&mut self) {
        if self.pending {
            self.pending = false;
            self.step_once();
        }
    }

    fn step_once(&mut self) {
        if self.live && !(self.step)(&mut self.buf) {
            self.live = false;
            if let Some(mut finish) = self.finish.take() {
                finish(&mut self.buf);
            }
        }
    }
}

impl<T, S, E> Cursor for StepCursor<T, S, E>
where
    S: FnMut(&mut T) -> bool,
    E: FnMut(&mut T),
{
    type Item = T;

    const CATEGORY: Category = Category::Input;

    fn is_exhausted(&mut self) -> bool {
        self.settle();
        !self.live
    }

    fn current(&mut self) -> Option<&T> {
        self.settle();
        if self.live { Some(&self.buf) } else { None }
    }

    fn advance(&mut self) {
        self.settle();
        self.step_once();
    }
}
