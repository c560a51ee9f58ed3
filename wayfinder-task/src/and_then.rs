use std::fmt;

use crate::Task;

/// Task for the [`and_then`](crate::TaskExt::and_then) combinator, chaining a computation onto
/// the end of another task which completes successfully.
///
/// Each run executes the first task, passes its output to the closure to build the second task,
/// and runs that. Neither the closure nor the second task are touched when the first task fails.
#[derive(Clone)]
pub struct AndThen<A, F> {
    task: A,
    f: F,
}

impl<A, F> AndThen<A, F> {
    pub(crate) fn new(task: A, f: F) -> Self {
        Self { task, f }
    }
}

impl<A, F, B> Task for AndThen<A, F>
where
    A: Task,
    F: Fn(A::Output) -> B,
    B: Task<Error = A::Error>,
{
    type Output = B::Output;
    type Error = A::Error;

    fn run(&self) -> Result<B::Output, A::Error> {
        let res = self.task.run()?;
        (self.f)(res).run()
    }
}

impl<A: fmt::Debug, F> fmt::Debug for AndThen<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen").field("task", &self.task).finish()
    }
}
