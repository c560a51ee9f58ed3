use std::borrow::Cow;

use crate::{
    and_then::AndThen,
    boxed::BoxTask,
    instrument::Instrument,
    map::Map,
    map_err::{ErrInto, MapErr},
    or_else::OrElse,
    then::Then,
    zip::Zip,
    Task,
};

/// An extension trait for [`Task`]s that provides a variety of convenient adapters.
///
/// Every adapter consumes the receiving task and returns a new one. Nothing runs until the
/// resulting task is [run](Task::run).
pub trait TaskExt: Task {
    /// Map this task's output to a different type, returning a new task of the resulting type.
    ///
    /// This function is similar to `Option::map` or `Iterator::map`.
    fn map<F, R>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> R,
    {
        Map::new(self, f)
    }

    /// Map this task's error to a different error, returning a new task.
    ///
    /// This function is similar to `Result::map_err`. It is useful for making sure that tasks
    /// composed together have the same error type.
    fn map_err<F, E>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E,
    {
        MapErr::new(self, f)
    }

    /// Convert this task's error to any error implementing `From` for it.
    fn err_into<E>(self) -> ErrInto<Self, E>
    where
        Self: Sized,
        E: From<Self::Error>,
    {
        ErrInto::new(self)
    }

    /// Chain on a task that is built from this task's output once this task succeeds.
    ///
    /// The second task is not constructed, let alone run, if this one fails.
    fn and_then<F, B>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B,
        B: Task<Error = Self::Error>,
    {
        AndThen::new(self, f)
    }

    /// Chain on a task that is built from this task's result, whether it succeeded or not.
    fn then<F, B>(self, f: F) -> Then<Self, F>
    where
        Self: Sized,
        F: Fn(Result<Self::Output, Self::Error>) -> B,
        B: Task,
    {
        Then::new(self, f)
    }

    /// Recover from this task's error with another task.
    fn or_else<F, B>(self, f: F) -> OrElse<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> B,
        B: Task<Output = Self::Output>,
    {
        OrElse::new(self, f)
    }

    /// Run this task and then `other`, pairing their outputs.
    ///
    /// `other` does not run if this task fails.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Task<Error = Self::Error>,
    {
        Zip::new(self, other)
    }

    /// Enter a tracing span named after `name` each time this task runs.
    fn instrument(self, name: impl Into<Cow<'static, str>>) -> Instrument<Self>
    where
        Self: Sized,
    {
        Instrument::new(self, name.into())
    }

    /// Erase this task's type.
    fn boxed(self) -> BoxTask<Self::Output, Self::Error>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Task + ?Sized> TaskExt for T {}
