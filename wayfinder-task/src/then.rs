use std::fmt;

use crate::Task;

/// Task for the [`then`](crate::TaskExt::then) combinator, chaining a computation onto the end of
/// another task regardless of its result.
#[derive(Clone)]
pub struct Then<A, F> {
    task: A,
    f: F,
}

impl<A, F> Then<A, F> {
    pub(crate) fn new(task: A, f: F) -> Self {
        Self { task, f }
    }
}

impl<A, F, B> Task for Then<A, F>
where
    A: Task,
    F: Fn(Result<A::Output, A::Error>) -> B,
    B: Task,
{
    type Output = B::Output;
    type Error = B::Error;

    fn run(&self) -> Result<B::Output, B::Error> {
        (self.f)(self.task.run()).run()
    }
}

impl<A: fmt::Debug, F> fmt::Debug for Then<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Then").field("task", &self.task).finish()
    }
}
