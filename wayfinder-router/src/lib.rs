//! Method, path and query matching with typed binders and an ordered first-match router.
//!
//! A [`RoutePattern`] combines a [`MethodMatcher`], a [`PathPattern`] and any number of
//! [query matchers](query::QueryMatcher). A [`Router`] tries its routes top to bottom and returns
//! the first that matches; failing to match is ordinary control flow, not an error.
//!
//! ```
//! use http::Method;
//! use wayfinder_router::{int, query, rest, root, RoutePattern, Router};
//!
//! let mut router = Router::<&str>::build();
//! router.route(RoutePattern::new(Method::GET, root() / "user" / int("id")), "user");
//! router.route(
//!     RoutePattern::new(Method::GET, root() / "search").query(query::optional::<u32>("page")),
//!     "search",
//! );
//! router.route(RoutePattern::any(root() / "static" / rest("path")), "static");
//! let router = router.finish();
//!
//! let req = http::Request::get("/user/12").body(()).unwrap();
//! let (value, caps, _) = router.recognize(&req).unwrap();
//! assert_eq!(*value, "user");
//! assert_eq!(caps.params.typed::<i32>("id"), Some(12));
//!
//! let req = http::Request::get("/user/abc").body(()).unwrap();
//! assert!(router.recognize(&req).is_none());
//!
//! let req = http::Request::get("/search?page=x").body(()).unwrap();
//! let (value, caps, _) = router.recognize(&req).unwrap();
//! assert_eq!(*value, "search");
//! assert_eq!(caps.query.get::<Option<u32>>("page"), Some(&None));
//! ```

#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(future_incompatible, missing_docs)]

mod de;
mod method;
mod path;
mod pattern;
pub mod query;
mod quoter;
mod regex;
mod routable;
mod route;
mod router;
mod segment;
mod value;

pub use self::method::MethodMatcher;
pub use self::path::{Params, ParamsIter};
pub use self::pattern::{
    rest, root, IntoPathPattern, PathPattern, PatternError, Rest, UrlGenerationError,
};
pub use self::routable::{Routable, RouteInput};
pub use self::route::{Captures, RoutePattern};
pub use self::router::{RouteId, Router, RouterBuilder};
pub use self::segment::{
    bind, boolean, int, long, regex, str, uint, Segment, SegmentExtractor, SegmentKind,
    SegmentRegex,
};
pub use self::value::{FromValue, Value};
