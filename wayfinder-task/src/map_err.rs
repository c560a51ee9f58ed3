use std::{fmt, marker::PhantomData};

use crate::Task;

/// Task for the [`map_err`](crate::TaskExt::map_err) combinator, changing the type of a task's
/// error.
#[derive(Clone)]
pub struct MapErr<A, F> {
    task: A,
    f: F,
}

impl<A, F> MapErr<A, F> {
    pub(crate) fn new(task: A, f: F) -> Self {
        Self { task, f }
    }
}

impl<A, F, E> Task for MapErr<A, F>
where
    A: Task,
    F: Fn(A::Error) -> E,
{
    type Output = A::Output;
    type Error = E;

    fn run(&self) -> Result<A::Output, E> {
        self.task.run().map_err(&self.f)
    }
}

impl<A: fmt::Debug, F> fmt::Debug for MapErr<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr").field("task", &self.task).finish()
    }
}

/// Task for the [`err_into`](crate::TaskExt::err_into) combinator.
pub struct ErrInto<A, E> {
    task: A,
    _err: PhantomData<fn() -> E>,
}

impl<A, E> ErrInto<A, E> {
    pub(crate) fn new(task: A) -> Self {
        Self {
            task,
            _err: PhantomData,
        }
    }
}

impl<A, E> Task for ErrInto<A, E>
where
    A: Task,
    E: From<A::Error>,
{
    type Output = A::Output;
    type Error = E;

    fn run(&self) -> Result<A::Output, E> {
        Ok(self.task.run()?)
    }
}

impl<A: Clone, E> Clone for ErrInto<A, E> {
    fn clone(&self) -> Self {
        ErrInto::new(self.task.clone())
    }
}

impl<A: fmt::Debug, E> fmt::Debug for ErrInto<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrInto").field("task", &self.task).finish()
    }
}
