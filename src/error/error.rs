use std::{error::Error as StdError, fmt};

use crate::{error::ResponseError, Response};

/// General purpose router error.
///
/// Carries any [`ResponseError`] through handler tasks in a convenient way. It can be created by
/// converting errors with `into()`.
///
/// Whenever it is created from an error type a response can be produced from it, so a handler
/// failure always has a well-defined response.
pub struct Error {
    cause: Box<dyn ResponseError + Send + Sync>,
}

impl Error {
    /// Returns the reference to the underlying `ResponseError`.
    pub fn as_response_error(&self) -> &(dyn ResponseError + Send + Sync) {
        self.cause.as_ref()
    }

    /// Similar to `as_response_error` but downcasts.
    pub fn as_error<T: ResponseError + 'static>(&self) -> Option<&T> {
        <dyn ResponseError + Send + Sync>::downcast_ref(self.cause.as_ref())
    }

    /// Shortcut for creating a `Response`.
    pub fn error_response(&self) -> Response {
        self.cause.error_response()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &self.cause)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        None
    }
}

/// `Error` for any error that implements `ResponseError`
impl<T: ResponseError + Send + Sync + 'static> From<T> for Error {
    fn from(err: T) -> Error {
        Error {
            cause: Box::new(err),
        }
    }
}

impl From<Box<dyn ResponseError + Send + Sync>> for Error {
    fn from(cause: Box<dyn ResponseError + Send + Sync>) -> Self {
        Error { cause }
    }
}
