use std::{borrow::Cow, fmt};

use tracing::{debug, trace, trace_span};

use crate::Task;

/// Task for the [`instrument`](crate::TaskExt::instrument) combinator.
///
/// Every run enters a `task` span carrying the given name and records whether the run completed
/// or failed.
#[derive(Clone)]
pub struct Instrument<A> {
    task: A,
    name: Cow<'static, str>,
}

impl<A> Instrument<A> {
    pub(crate) fn new(task: A, name: Cow<'static, str>) -> Self {
        Self { task, name }
    }

    /// Returns the name recorded on this task's span.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<A> Task for Instrument<A>
where
    A: Task,
    A::Error: fmt::Debug,
{
    type Output = A::Output;
    type Error = A::Error;

    fn run(&self) -> Result<A::Output, A::Error> {
        let span = trace_span!("task", name = %self.name);
        let _guard = span.enter();

        trace!("running");
        let res = self.task.run();

        match &res {
            Ok(_) => trace!("completed"),
            Err(err) => debug!("failed: {:?}", err),
        }

        res
    }
}

impl<A: fmt::Debug> fmt::Debug for Instrument<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instrument")
            .field("name", &self.name)
            .field("task", &self.task)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{fail, ready, Task as _, TaskExt as _};

    #[test]
    fn passes_results_through() {
        let task = ready::<_, ()>(5).instrument("five");
        assert_eq!(task.name(), "five");
        assert_eq!(task.run(), Ok(5));

        let task = fail::<(), _>("bad").instrument(String::from("failing"));
        assert_eq!(task.run(), Err("bad"));
    }
}
