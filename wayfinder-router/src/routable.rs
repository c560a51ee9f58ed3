use http::{Method, Uri};

/// Abstraction over request types the router can match.
///
/// Only the method, path and query string take part in matching.
pub trait Routable {
    /// Request method.
    fn method(&self) -> &Method;

    /// Request path, still percent-encoded.
    fn path(&self) -> &str;

    /// Raw query string without the leading `?`; empty if there is none.
    fn query_string(&self) -> &str;
}

impl<B> Routable for http::Request<B> {
    fn method(&self) -> &Method {
        http::Request::method(self)
    }

    fn path(&self) -> &str {
        self.uri().path()
    }

    fn query_string(&self) -> &str {
        self.uri().query().unwrap_or_default()
    }
}

impl<R: Routable + ?Sized> Routable for &R {
    fn method(&self) -> &Method {
        (**self).method()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn query_string(&self) -> &str {
        (**self).query_string()
    }
}

/// Borrowed method, path and query string.
///
/// # Examples
/// ```
/// use http::{Method, Uri};
/// use wayfinder_router::{Routable as _, RouteInput};
///
/// let uri = Uri::from_static("/search?q=rust");
/// let input = RouteInput::from_uri(&Method::GET, &uri);
///
/// assert_eq!(input.path(), "/search");
/// assert_eq!(input.query_string(), "q=rust");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteInput<'a> {
    method: &'a Method,
    path: &'a str,
    query: &'a str,
}

impl<'a> RouteInput<'a> {
    /// Constructs input from its parts.
    pub fn new(method: &'a Method, path: &'a str, query: &'a str) -> Self {
        RouteInput {
            method,
            path,
            query,
        }
    }

    /// Constructs input from a method and request URI.
    pub fn from_uri(method: &'a Method, uri: &'a Uri) -> Self {
        RouteInput::new(method, uri.path(), uri.query().unwrap_or_default())
    }
}

impl Routable for RouteInput<'_> {
    fn method(&self) -> &Method {
        self.method
    }

    fn path(&self) -> &str {
        self.path
    }

    fn query_string(&self) -> &str {
        self.query
    }
}
