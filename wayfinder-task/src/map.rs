use std::fmt;

use crate::Task;

/// Task for the [`map`](crate::TaskExt::map) combinator, changing the type of a task's output.
///
/// This is created by the `TaskExt::map` method.
#[derive(Clone)]
pub struct Map<A, F> {
    task: A,
    f: F,
}

impl<A, F> Map<A, F> {
    pub(crate) fn new(task: A, f: F) -> Self {
        Self { task, f }
    }
}

impl<A, F, R> Task for Map<A, F>
where
    A: Task,
    F: Fn(A::Output) -> R,
{
    type Output = R;
    type Error = A::Error;

    fn run(&self) -> Result<R, A::Error> {
        self.task.run().map(&self.f)
    }
}

impl<A: fmt::Debug, F> fmt::Debug for Map<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("task", &self.task).finish()
    }
}
