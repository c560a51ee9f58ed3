use std::fmt;

use crate::Task;

/// Creates a task that runs every task of `tasks` in order and collects their outputs.
///
/// The first failure ends the run; later tasks are not run.
///
/// # Examples
/// ```
/// use wayfinder_task::{ready, sequence, Task, TaskExt as _};
///
/// let task = sequence((1..=3).map(|n| ready::<_, ()>(n).map(|n| n * n)));
/// assert_eq!(task.run(), Ok(vec![1, 4, 9]));
/// ```
pub fn sequence<I>(tasks: I) -> Sequence<I::Item>
where
    I: IntoIterator,
    I::Item: Task,
{
    Sequence {
        tasks: tasks.into_iter().collect(),
    }
}

/// Task for the [`sequence`] constructor.
#[derive(Clone)]
pub struct Sequence<T> {
    tasks: Vec<T>,
}

impl<T: Task> Task for Sequence<T> {
    type Output = Vec<T::Output>;
    type Error = T::Error;

    fn run(&self) -> Result<Vec<T::Output>, T::Error> {
        self.tasks.iter().map(Task::run).collect()
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.tasks.len())
            .finish()
    }
}
