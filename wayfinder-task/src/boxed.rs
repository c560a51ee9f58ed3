use crate::Task;

/// A type-erased task.
///
/// Produced by [`TaskExt::boxed`](crate::TaskExt::boxed). Boxed tasks are `Send + Sync`, so they
/// can be built on one thread and run on another.
pub type BoxTask<T, E> = Box<dyn Task<Output = T, Error = E> + Send + Sync>;

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::{ready, TaskExt as _};

    assert_impl_all!(BoxTask<String, ()>: Send, Sync);

    #[test]
    fn boxed_tasks_share_a_type() {
        let tasks: Vec<BoxTask<u32, ()>> = vec![
            ready(1).boxed(),
            ready(2).map(|n| n * 10).boxed(),
            ready(3).and_then(|n| ready(n + 1)).boxed(),
        ];

        let outputs = tasks.iter().map(|t| t.run()).collect::<Result<Vec<_>, _>>();
        assert_eq!(outputs, Ok(vec![1, 20, 4]));
    }
}
