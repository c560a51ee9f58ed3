use wayfinder_task::{BoxTask, Task, TaskExt as _};

use crate::{Error, Matched, Request, Response};

/// The interface for route handlers.
///
/// # What Is A Route Handler
///
/// A handler is a function that receives the [`Matched`] request and returns a [`Task`] that,
/// once run, produces something convertible into a [`Response`]. The handler itself is called
/// while routing; the task it returns is only run when the caller asks for the response.
///
/// A handler should therefore only describe work. Doing the work in the function body, rather
/// than in the returned task, runs it at routing time instead of at run time.
///
/// # Requirements
///
/// 1. It is a `Fn(Matched) -> T` that is `Send + Sync + 'static`;
/// 1. `T` is a [`Task`] that is itself `Send + Sync + 'static`;
/// 1. the task's output converts into a [`Response`] and its error into an [`Error`].
///
/// ```
/// use wayfinder::{web, Handler, Matched, Response};
///
/// fn hello(_: Matched) -> impl wayfinder::Task<Output = &'static str, Error = wayfinder::Error> {
///     web::ready("hello")
/// }
///
/// fn assert_handler(_: impl Handler) {}
/// assert_handler(hello);
/// ```
pub trait Handler: Send + Sync + 'static {
    /// Builds the handler's task for a matched request.
    fn call(&self, matched: Matched) -> BoxTask<Response, Error>;
}

impl<F, T> Handler for F
where
    F: Fn(Matched) -> T + Send + Sync + 'static,
    T: Task + Send + Sync + 'static,
    T::Output: Into<Response>,
    T::Error: Into<Error>,
{
    fn call(&self, matched: Matched) -> BoxTask<Response, Error> {
        (self)(matched)
            .map(Into::<Response>::into)
            .map_err(Into::<Error>::into)
            .boxed()
    }
}

/// The interface for the handler used when no route matches.
///
/// Like [`Handler`], but it receives the unmatched [`Request`] since there are no captures.
pub trait DefaultHandler: Send + Sync + 'static {
    /// Builds the fallback task for an unmatched request.
    fn call(&self, req: Request) -> BoxTask<Response, Error>;
}

impl<F, T> DefaultHandler for F
where
    F: Fn(Request) -> T + Send + Sync + 'static,
    T: Task + Send + Sync + 'static,
    T::Output: Into<Response>,
    T::Error: Into<Error>,
{
    fn call(&self, req: Request) -> BoxTask<Response, Error> {
        (self)(req)
            .map(Into::<Response>::into)
            .map_err(Into::<Error>::into)
            .boxed()
    }
}
