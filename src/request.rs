use std::fmt;

use bytes::Bytes;
use wayfinder_router::Routable;

use crate::http::{
    header::{HeaderMap, TryIntoHeaderPair},
    Method, Uri,
};

/// A request descriptor.
///
/// Only the method, path and query string take part in routing; headers and body are carried
/// through to the handler untouched.
#[derive(Clone)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    /// Constructs a request with no headers and an empty body.
    pub fn new(method: Method, uri: Uri) -> Self {
        Request {
            method,
            uri,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Constructs a `GET` request.
    pub fn get(uri: Uri) -> Self {
        Request::new(Method::GET, uri)
    }

    /// Constructs a `POST` request.
    pub fn post(uri: Uri) -> Self {
        Request::new(Method::POST, uri)
    }

    /// Replaces the body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Inserts a header, replacing any existing values for the same name.
    ///
    /// # Panics
    /// Panics if the name or value is not a valid header part.
    pub fn insert_header(mut self, header: impl TryIntoHeaderPair) -> Self {
        match header.try_into_pair() {
            Ok((key, value)) => {
                self.headers.insert(key, value);
            }
            Err(err) => panic!("invalid request header: {}", err),
        }

        self
    }

    /// Request method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Path component of the URI, still percent-encoded.
    #[inline]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Query string of the URI without the leading `?`; empty if there is none.
    #[inline]
    pub fn query_string(&self) -> &str {
        self.uri.query().unwrap_or_default()
    }

    /// Request headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable request headers.
    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Request body.
    #[inline]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Splits the request into its parts.
    pub fn into_parts(self) -> (Method, Uri, HeaderMap, Bytes) {
        (self.method, self.uri, self.headers, self.body)
    }
}

impl Routable for Request {
    fn method(&self) -> &Method {
        &self.method
    }

    fn path(&self) -> &str {
        self.uri.path()
    }

    fn query_string(&self) -> &str {
        Request::query_string(self)
    }
}

impl<B: Into<Bytes>> From<::http::Request<B>> for Request {
    fn from(req: ::http::Request<B>) -> Self {
        let (parts, body) = req.into_parts();

        Request {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body: body.into(),
        }
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nRequest {}:{}", self.method, self.uri)?;
        writeln!(f, "  headers:")?;
        for (key, val) in self.headers.iter() {
            writeln!(f, "    {:?}: {:?}", key, val)?;
        }
        writeln!(f, "  body: {} bytes", self.body.len())
    }
}
