use std::{convert::Infallible, fmt, marker::PhantomData};

use crate::Task;

/// Creates a task from a fallible closure.
///
/// This is the basic thunk: the closure is stored, not called, and is invoked once per
/// [`run`](Task::run).
///
/// # Examples
/// ```
/// use wayfinder_task::{fn_task, Task};
///
/// let task = fn_task(|| "42".parse::<u32>());
/// assert_eq!(task.run(), Ok(42));
/// ```
pub fn fn_task<F, T, E>(f: F) -> FnTask<F>
where
    F: Fn() -> Result<T, E>,
{
    FnTask { f }
}

/// Creates an infallible task from a closure.
///
/// # Examples
/// ```
/// use wayfinder_task::{lazy, Task};
///
/// let task = lazy(|| 2 + 2);
/// assert_eq!(task.run().unwrap(), 4);
/// ```
pub fn lazy<F, T>(f: F) -> Lazy<F>
where
    F: Fn() -> T,
{
    Lazy { f }
}

/// Creates a task that succeeds with a clone of `value` every time it runs.
///
/// # Examples
/// ```
/// use wayfinder_task::{ready, Task};
///
/// let task = ready::<_, ()>("done");
/// assert_eq!(task.run(), Ok("done"));
/// assert_eq!(task.run(), Ok("done"));
/// ```
pub fn ready<T: Clone, E>(value: T) -> Ready<T, E> {
    Ready {
        value,
        _err: PhantomData,
    }
}

/// Creates a task that fails with a clone of `error` every time it runs.
pub fn fail<T, E: Clone>(error: E) -> Fail<T, E> {
    Fail {
        error,
        _out: PhantomData,
    }
}

/// Creates a task that replays a cloneable result on every run.
pub fn from_result<T: Clone, E: Clone>(result: Result<T, E>) -> FromResult<T, E> {
    FromResult { result }
}

/// Task for the [`fn_task`] constructor.
#[derive(Clone)]
pub struct FnTask<F> {
    f: F,
}

impl<F, T, E> Task for FnTask<F>
where
    F: Fn() -> Result<T, E>,
{
    type Output = T;
    type Error = E;

    fn run(&self) -> Result<T, E> {
        (self.f)()
    }
}

impl<F> fmt::Debug for FnTask<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTask").finish_non_exhaustive()
    }
}

/// Task for the [`lazy`] constructor.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F, T> Task for Lazy<F>
where
    F: Fn() -> T,
{
    type Output = T;
    type Error = Infallible;

    fn run(&self) -> Result<T, Infallible> {
        Ok((self.f)())
    }
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy").finish_non_exhaustive()
    }
}

/// Task for the [`ready`] constructor.
pub struct Ready<T, E> {
    value: T,
    _err: PhantomData<fn() -> E>,
}

impl<T: Clone, E> Task for Ready<T, E> {
    type Output = T;
    type Error = E;

    fn run(&self) -> Result<T, E> {
        Ok(self.value.clone())
    }
}

impl<T: Clone, E> Clone for Ready<T, E> {
    fn clone(&self) -> Self {
        ready(self.value.clone())
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Ready<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ready").field(&self.value).finish()
    }
}

/// Task for the [`fail`] constructor.
pub struct Fail<T, E> {
    error: E,
    _out: PhantomData<fn() -> T>,
}

impl<T, E: Clone> Task for Fail<T, E> {
    type Output = T;
    type Error = E;

    fn run(&self) -> Result<T, E> {
        Err(self.error.clone())
    }
}

impl<T, E: fmt::Debug> fmt::Debug for Fail<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fail").field(&self.error).finish()
    }
}

/// Task for the [`from_result`] constructor.
#[derive(Debug, Clone)]
pub struct FromResult<T, E> {
    result: Result<T, E>,
}

impl<T: Clone, E: Clone> Task for FromResult<T, E> {
    type Output = T;
    type Error = E;

    fn run(&self) -> Result<T, E> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn construction_runs_nothing() {
        let calls = AtomicUsize::new(0);

        let task = fn_task(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ()>(())
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        task.run().unwrap();
        task.run().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn ready_and_fail() {
        let ok = ready::<_, &str>(vec![1, 2]);
        assert_eq!(ok.run(), Ok(vec![1, 2]));
        assert_eq!(ok.clone().run(), Ok(vec![1, 2]));

        let err = fail::<u8, _>("boom");
        assert_eq!(err.run(), Err("boom"));
        assert_eq!(err.run(), Err("boom"));
    }

    #[test]
    fn replays_result() {
        let task = from_result::<u8, String>(Err("bad".to_owned()));
        assert_eq!(task.run(), Err("bad".to_owned()));

        let task = from_result::<u8, String>(Ok(3));
        assert_eq!(task.run(), Ok(3));
    }
}
