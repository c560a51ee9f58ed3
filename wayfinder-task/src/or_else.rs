use std::fmt;

use crate::Task;

/// Task for the [`or_else`](crate::TaskExt::or_else) combinator, recovering from a failed task
/// with another one.
#[derive(Clone)]
pub struct OrElse<A, F> {
    task: A,
    f: F,
}

impl<A, F> OrElse<A, F> {
    pub(crate) fn new(task: A, f: F) -> Self {
        Self { task, f }
    }
}

impl<A, F, B> Task for OrElse<A, F>
where
    A: Task,
    F: Fn(A::Error) -> B,
    B: Task<Output = A::Output>,
{
    type Output = A::Output;
    type Error = B::Error;

    fn run(&self) -> Result<A::Output, B::Error> {
        match self.task.run() {
            Ok(res) => Ok(res),
            Err(err) => (self.f)(err).run(),
        }
    }
}

impl<A: fmt::Debug, F> fmt::Debug for OrElse<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrElse").field("task", &self.task).finish()
    }
}
