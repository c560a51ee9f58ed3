//! Essentials helper functions for declaring routes and building handler tasks.
//!
//! # Route Patterns
//! - [`get`], [`post`], [`put`], [`patch`], [`delete`], [`head`], [`options`], [`trace`]:
//!   a single method and a path
//! - [`method`], [`methods`], [`any`]: an explicit method, a set of methods, or every method
//!
//! Paths are either pattern strings like `"/user/{id:int}"` or patterns built with the
//! [`root`](crate::root) DSL. Query matchers are appended with [`RoutePattern::query`].
//!
//! # Tasks
//! [`ready`], [`fail`], [`from_result`], [`lazy`], [`fn_task`] and [`sequence`] build the task a
//! handler returns.

pub use bytes::Bytes;
pub use wayfinder_task::{fail, fn_task, from_result, lazy, ready, sequence};

use crate::http::Method;
use wayfinder_router::{IntoPathPattern, MethodMatcher, RoutePattern};

macro_rules! method_route {
    ($method_fn:ident, $method_const:ident) => {
        #[doc = concat!(" Creates a route pattern matching `", stringify!($method_const), "` requests for `path`.")]
        ///
        /// # Examples
        /// ```
        /// use wayfinder::{web, int, root};
        ///
        #[doc = concat!(" let route = web::", stringify!($method_fn), "(root() / \"user\" / int(\"id\"));")]
        #[doc = concat!(" assert_eq!(route.to_string(), \"", stringify!($method_const), " /user/{id:int}\");")]
        /// ```
        pub fn $method_fn(path: impl IntoPathPattern) -> RoutePattern {
            method(Method::$method_const, path)
        }
    };
}

method_route!(get, GET);
method_route!(post, POST);
method_route!(put, PUT);
method_route!(patch, PATCH);
method_route!(delete, DELETE);
method_route!(head, HEAD);
method_route!(options, OPTIONS);
method_route!(trace, TRACE);

/// Creates a route pattern matching requests with the given method.
///
/// ```
/// use wayfinder::{http::Method, web};
///
/// let route = web::method(Method::from_bytes(b"PURGE").unwrap(), "/cache/{key}");
/// assert_eq!(route.to_string(), "PURGE /cache/{key}");
/// ```
pub fn method(method: Method, path: impl IntoPathPattern) -> RoutePattern {
    RoutePattern::new(method, path)
}

/// Creates a route pattern matching requests with any of the given methods.
///
/// ```
/// use wayfinder::{http::Method, web};
///
/// let route = web::methods([Method::PUT, Method::PATCH], "/user/{id}");
/// assert_eq!(route.to_string(), "PUT|PATCH /user/{id}");
/// ```
pub fn methods(methods: impl Into<Vec<Method>>, path: impl IntoPathPattern) -> RoutePattern {
    RoutePattern::new(MethodMatcher::AnyOf(methods.into()), path)
}

/// Creates a route pattern matching requests with any method.
///
/// The handler can read the actual method from [`Matched::method`](crate::Matched::method).
pub fn any(path: impl IntoPathPattern) -> RoutePattern {
    RoutePattern::any(path)
}
