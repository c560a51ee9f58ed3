//! Declarative request routing with typed path binders, query matchers and deferred handlers.
//!
//! A [`Router`] holds an ordered list of route patterns. Each pattern matches the request method,
//! the path segment by segment and, once the path matched, any number of query parameters. The
//! first pattern that matches wins; failing to match any of them is not an error and is answered
//! by the default handler (`404 Not Found` unless configured).
//!
//! Handlers do not produce responses directly. They return a [`Task`], a description of work that
//! only runs when asked to and runs again every time it is asked to.
//!
//! # Examples
//! ```
//! use wayfinder::{
//!     http::StatusCode, int, query, rest, root, test::TestRequest, web, Matched, Response, Router,
//! };
//!
//! let router = Router::build()
//!     .route(web::get(root() / "user" / int("id")), |m: Matched| {
//!         web::from_result(m.param::<i32>("id").map(|id| format!("user {id}")))
//!     })
//!     .route(
//!         web::get(root() / "search").query(query::optional::<u32>("page")),
//!         |m: Matched| {
//!             let page = m.query::<Option<u32>>("page").unwrap_or_default();
//!             web::lazy(move || format!("page {}", page.unwrap_or(1)))
//!         },
//!     )
//!     .route(web::any(root() / "static" / rest("path")), |m: Matched| {
//!         let method = m.method().clone();
//!         web::lazy(move || Response::build(StatusCode::OK).body(method.to_string()))
//!     })
//!     .finish();
//!
//! let res = router.respond(TestRequest::get().uri("/user/12").to_request());
//! assert_eq!(res.body_str(), Some("user 12"));
//!
//! let res = router.respond(TestRequest::get().uri("/user/abc").to_request());
//! assert_eq!(res.status(), 404);
//!
//! let res = router.respond(TestRequest::get().uri("/search?page=x").to_request());
//! assert_eq!(res.body_str(), Some("page 1"));
//!
//! let res = router.respond(TestRequest::delete().uri("/static/css/site.css").to_request());
//! assert_eq!(res.body_str(), Some("DELETE"));
//! ```
//!
//! # Crate Features
//! - `unicode` - full Unicode support in binder regexes and path normalization (enabled by
//!   default); without it the smaller `regex-lite` engine is used

#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(future_incompatible)]

mod config;
pub mod dev;
pub mod error;
mod handler;
pub mod http;
mod matched;
mod request;
mod response;
mod router;
pub mod web;

pub use wayfinder_router::{query, query_param};
pub use wayfinder_router::{
    bind, boolean, int, long, regex, rest, root, str, uint, FromValue, IntoPathPattern,
    PathPattern, RoutePattern, Value,
};
pub use wayfinder_task::{BoxTask, Task, TaskExt};

#[doc(inline)]
pub use crate::error::Result;
pub use crate::{
    config::{RouterConfig, TrailingSlash},
    error::{Error, ResponseError},
    handler::{DefaultHandler, Handler},
    matched::Matched,
    request::Request,
    response::{Response, ResponseBuilder},
    router::{Router, RouterBuilder},
};
