//! `ResponseError` trait and foreign impls.

use std::{convert::Infallible, error::Error as StdError, fmt};

use crate::{
    error::{downcast_dyn, downcast_get_type_id},
    http::{header, StatusCode},
    Response,
};

/// Errors that can generate responses.
pub trait ResponseError: fmt::Debug + fmt::Display {
    /// Returns appropriate status code for error.
    ///
    /// A 500 Internal Server Error is used by default. If [error_response](Self::error_response) is
    /// also implemented and does not call `self.status_code()`, then this will not be used.
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Creates full response for error.
    ///
    /// By default, the generated response uses a 500 Internal Server Error status code, a
    /// `Content-Type` of `text/plain`, and the body is set to `Self`'s `Display` impl.
    fn error_response(&self) -> Response {
        let mut res = Response::new(self.status_code());

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("text/plain; charset=utf-8"),
        );

        res.set_body(self.to_string())
    }

    downcast_get_type_id!();
}

downcast_dyn!(ResponseError);

impl ResponseError for Box<dyn StdError + Send + Sync + 'static> {}

impl ResponseError for Infallible {
    fn status_code(&self) -> StatusCode {
        match *self {}
    }

    fn error_response(&self) -> Response {
        match *self {}
    }
}

impl ResponseError for serde::de::value::Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl ResponseError for serde_json::Error {}

impl ResponseError for serde_urlencoded::ser::Error {}

impl ResponseError for std::str::Utf8Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl ResponseError for ::http::Error {}

impl ResponseError for ::http::uri::InvalidUri {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
