//! Deferred computations.
//!
//! A [`Task`] is a description of work. Building one, or composing several into a larger one,
//! performs no work at all; the work happens only when [`Task::run`] is called, synchronously on
//! the caller's thread. Results are never cached: running the same task twice performs the work
//! twice.
//!
//! ```
//! use std::sync::{
//!     atomic::{AtomicUsize, Ordering},
//!     Arc,
//! };
//!
//! use wayfinder_task::{fn_task, ready, Task, TaskExt as _};
//!
//! let counter = Arc::new(AtomicUsize::new(0));
//!
//! let task = {
//!     let counter = Arc::clone(&counter);
//!     fn_task(move || Ok::<_, ()>(counter.fetch_add(1, Ordering::SeqCst) + 1))
//! }
//! .and_then(|n| ready(n * 10))
//! .map(|n| format!("value: {n}"));
//!
//! // nothing has run yet
//! assert_eq!(counter.load(Ordering::SeqCst), 0);
//!
//! assert_eq!(task.run().unwrap(), "value: 10");
//! assert_eq!(task.run().unwrap(), "value: 20");
//! assert_eq!(counter.load(Ordering::SeqCst), 2);
//! ```

#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(future_incompatible, missing_docs)]

use std::{rc::Rc, sync::Arc};

mod and_then;
mod boxed;
mod ext;
mod fn_task;
mod instrument;
mod map;
mod map_err;
mod or_else;
mod sequence;
mod then;
mod zip;

pub use self::{
    and_then::AndThen,
    boxed::BoxTask,
    ext::TaskExt,
    fn_task::{fail, fn_task, from_result, lazy, ready, Fail, FnTask, FromResult, Lazy, Ready},
    instrument::Instrument,
    map::Map,
    map_err::{ErrInto, MapErr},
    or_else::OrElse,
    sequence::{sequence, Sequence},
    then::Then,
    zip::Zip,
};

/// A deferred unit of work.
///
/// Implementors describe work without performing it. [`run`](Self::run) performs the work and
/// returns its result. It takes `&self` so a task can be run any number of times; each call
/// re-executes the whole chain from scratch.
pub trait Task {
    /// Value produced when the work succeeds.
    type Output;

    /// Error produced when the work fails.
    type Error;

    /// Performs the work described by this task.
    fn run(&self) -> Result<Self::Output, Self::Error>;
}

impl<T: Task + ?Sized> Task for &T {
    type Output = T::Output;
    type Error = T::Error;

    fn run(&self) -> Result<Self::Output, Self::Error> {
        (**self).run()
    }
}

impl<T: Task + ?Sized> Task for Box<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn run(&self) -> Result<Self::Output, Self::Error> {
        (**self).run()
    }
}

impl<T: Task + ?Sized> Task for Rc<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn run(&self) -> Result<Self::Output, Self::Error> {
        (**self).run()
    }
}

impl<T: Task + ?Sized> Task for Arc<T> {
    type Output = T::Output;
    type Error = T::Error;

    fn run(&self) -> Result<Self::Output, Self::Error> {
        (**self).run()
    }
}
