use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::{
    error::Error,
    http::{
        header::{self, HeaderMap, TryIntoHeaderPair},
        StatusCode,
    },
};

/// A response descriptor: status, headers and body.
///
/// Produced by running the task a handler returned.
#[derive(Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Constructs a response with the given status and an empty body.
    #[inline]
    pub fn new(status: StatusCode) -> Self {
        Response {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Constructs an empty `200 OK` response.
    #[inline]
    pub fn ok() -> Self {
        Response::new(StatusCode::OK)
    }

    /// Constructs an empty `404 Not Found` response.
    #[inline]
    pub fn not_found() -> Self {
        Response::new(StatusCode::NOT_FOUND)
    }

    /// Constructs a response builder with the given status.
    #[inline]
    pub fn build(status: StatusCode) -> ResponseBuilder {
        ResponseBuilder::new(status)
    }

    /// Returns the status code.
    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns a mutable reference to the status code.
    #[inline]
    pub fn status_mut(&mut self) -> &mut StatusCode {
        &mut self.status
    }

    /// Returns the response headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a mutable reference to the response headers.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Returns the response body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Replaces the body, returning the response.
    pub fn set_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the body as UTF-8 text, if it is valid UTF-8.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Splits the response into its parts.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Bytes) {
        (self.status, self.headers, self.body)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nResponse {}", self.status)?;
        writeln!(f, "  headers:")?;
        for (key, val) in self.headers.iter() {
            writeln!(f, "    {:?}: {:?}", key, val)?;
        }
        writeln!(f, "  body: {} bytes", self.body.len())
    }
}

impl Default for Response {
    fn default() -> Self {
        Response::ok()
    }
}

impl From<StatusCode> for Response {
    fn from(status: StatusCode) -> Self {
        Response::new(status)
    }
}

impl From<&'static str> for Response {
    fn from(val: &'static str) -> Self {
        Response::build(StatusCode::OK)
            .content_type(mime::TEXT_PLAIN_UTF_8)
            .body(val)
    }
}

impl From<String> for Response {
    fn from(val: String) -> Self {
        Response::build(StatusCode::OK)
            .content_type(mime::TEXT_PLAIN_UTF_8)
            .body(val)
    }
}

impl From<Bytes> for Response {
    fn from(val: Bytes) -> Self {
        Response::build(StatusCode::OK)
            .content_type(mime::APPLICATION_OCTET_STREAM)
            .body(val)
    }
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        err.error_response()
    }
}

/// Builder for a [`Response`].
///
/// Header errors are held until the body is set; a builder that saw an invalid header produces
/// the error response instead.
///
/// ```
/// use wayfinder::{http::StatusCode, Response};
///
/// let res = Response::build(StatusCode::CREATED)
///     .insert_header(("x-request-id", "42"))
///     .body("made it");
///
/// assert_eq!(res.status(), StatusCode::CREATED);
/// assert_eq!(res.headers().get("x-request-id").unwrap(), "42");
/// assert_eq!(res.body_str(), Some("made it"));
/// ```
pub struct ResponseBuilder {
    res: Option<Response>,
    err: Option<Error>,
}

impl ResponseBuilder {
    /// Creates a response builder with the given status.
    pub fn new(status: StatusCode) -> Self {
        ResponseBuilder {
            res: Some(Response::new(status)),
            err: None,
        }
    }

    /// Sets the status code.
    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        if let Some(res) = self.inner() {
            res.status = status;
        }
        self
    }

    /// Inserts a header, replacing any that were set with an equivalent field name.
    pub fn insert_header(&mut self, header: impl TryIntoHeaderPair) -> &mut Self {
        if self.err.is_some() {
            return self;
        }

        match header.try_into_pair() {
            Ok((key, value)) => {
                if let Some(res) = self.res.as_mut() {
                    res.headers.insert(key, value);
                }
            }
            Err(err) => self.err = Some(err.into()),
        };

        self
    }

    /// Sets the `Content-Type` header.
    pub fn content_type(&mut self, mime: mime::Mime) -> &mut Self {
        self.insert_header((header::CONTENT_TYPE, mime.as_ref()))
    }

    /// Sets the body and builds the response.
    ///
    /// Returns the error response if an earlier builder call failed.
    pub fn body(&mut self, body: impl Into<Bytes>) -> Response {
        match self.finish() {
            Ok(res) => res.set_body(body),
            Err(err) => err.error_response(),
        }
    }

    /// Serializes `value` as JSON and builds the response.
    ///
    /// Sets `Content-Type: application/json` unless a content type was already set. A
    /// serialization failure produces its error response.
    pub fn json(&mut self, value: impl Serialize) -> Response {
        match serde_json::to_vec(&value) {
            Ok(body) => {
                let has_content_type = self
                    .inner()
                    .map(|res| res.headers.contains_key(header::CONTENT_TYPE))
                    .unwrap_or(true);

                if !has_content_type {
                    self.content_type(mime::APPLICATION_JSON);
                }

                self.body(body)
            }
            Err(err) => Error::from(err).error_response(),
        }
    }

    /// Builds the response with an empty body.
    pub fn finish(&mut self) -> Result<Response, Error> {
        if let Some(err) = self.err.take() {
            return Err(err);
        }

        Ok(self.res.take().unwrap_or_default())
    }

    fn inner(&mut self) -> Option<&mut Response> {
        if self.err.is_some() {
            return None;
        }

        self.res.as_mut()
    }
}

impl fmt::Debug for ResponseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBuilder")
            .field("res", &self.res)
            .field("err", &self.err)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults() {
        let res = Response::not_found();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(res.body().is_empty());
        assert!(res.headers().is_empty());
    }

    #[test]
    fn from_text() {
        let res = Response::from("hello");
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(res.body_str(), Some("hello"));

        let res = Response::from(Bytes::from_static(b"\x00\x01"));
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/octet-stream"
        );
    }

    #[test]
    fn json_body() {
        let res = Response::build(StatusCode::OK).json(json!({ "id": 12 }));
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(res.body_str(), Some(r#"{"id":12}"#));

        let res = Response::build(StatusCode::OK)
            .content_type("application/vnd.api+json".parse().unwrap())
            .json(vec![1, 2]);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/vnd.api+json"
        );
    }

    #[test]
    fn invalid_header() {
        let res = Response::build(StatusCode::OK)
            .insert_header(("bad header", "x"))
            .body("never sent");

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_ne!(res.body_str(), Some("never sent"));
    }
}
