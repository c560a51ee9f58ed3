use std::{borrow::Cow, cell::OnceCell, fmt};

use http::Method;

use crate::{
    path::{split_segments, Segments},
    query::{QueryMatcher, QueryParams, QueryValues},
    IntoPathPattern, MethodMatcher, Params, PathPattern, Routable,
};

/// Everything a matched route captured from the request.
#[derive(Debug)]
pub struct Captures {
    /// The request method, whatever the method matcher was.
    pub method: Method,

    /// Values bound by the path pattern.
    pub params: Params,

    /// Values captured by query matchers.
    pub query: QueryValues,
}

/// A request split up for matching against many routes.
///
/// Segments are split once; the query string is parsed the first time a route with query
/// matchers gets past its path.
pub(crate) struct MatchInput<'a> {
    method: &'a Method,
    segments: Segments<'a>,
    query_string: &'a str,
    query: OnceCell<QueryParams>,
}

impl<'a> MatchInput<'a> {
    pub(crate) fn new<R: Routable + ?Sized>(req: &'a R, decode_segments: bool) -> Self {
        MatchInput {
            method: req.method(),
            segments: split_segments(req.path(), decode_segments),
            query_string: req.query_string(),
            query: OnceCell::new(),
        }
    }

    fn query(&self) -> &QueryParams {
        self.query
            .get_or_init(|| QueryParams::parse(self.query_string))
    }
}

/// Method matcher, path pattern and query matchers of one route.
///
/// Matching checks the method, then the path, then each query matcher in the order they were
/// added. Query matchers only run once the path matched.
///
/// # Examples
/// ```
/// use http::Method;
/// use wayfinder_router::{int, query, root, RouteInput, RoutePattern};
///
/// let route = RoutePattern::new(Method::GET, root() / "user" / int("id"))
///     .query(query::optional::<bool>("full"));
///
/// let caps = route
///     .try_match(&RouteInput::new(&Method::GET, "/user/12", "full=true"))
///     .unwrap();
///
/// assert_eq!(caps.params.typed::<i32>("id"), Some(12));
/// assert_eq!(caps.query.get::<Option<bool>>("full"), Some(&Some(true)));
///
/// assert!(route
///     .try_match(&RouteInput::new(&Method::POST, "/user/12", ""))
///     .is_none());
/// ```
pub struct RoutePattern {
    method: MethodMatcher,
    path: PathPattern,
    query: Vec<Box<dyn QueryMatcher>>,
}

impl RoutePattern {
    /// Constructs a route pattern without query matchers.
    pub fn new(method: impl Into<MethodMatcher>, path: impl IntoPathPattern) -> Self {
        RoutePattern {
            method: method.into(),
            path: path.into_path_pattern(),
            query: Vec::new(),
        }
    }

    /// Constructs a route pattern accepting every method.
    pub fn any(path: impl IntoPathPattern) -> Self {
        RoutePattern::new(MethodMatcher::Any, path)
    }

    /// Adds a query matcher, run after the path matched.
    pub fn query<M>(mut self, matcher: M) -> Self
    where
        M: QueryMatcher + 'static,
    {
        self.query.push(Box::new(matcher));
        self
    }

    /// Returns the method matcher.
    pub fn method(&self) -> &MethodMatcher {
        &self.method
    }

    /// Returns the path pattern.
    pub fn path(&self) -> &PathPattern {
        &self.path
    }

    /// Iterates over the keys of the query matchers.
    pub fn query_keys(&self) -> impl Iterator<Item = &str> {
        self.query.iter().map(|m| m.key())
    }

    /// Matches a request, percent-decoding path segments.
    pub fn try_match<R: Routable + ?Sized>(&self, req: &R) -> Option<Captures> {
        self.try_match_with(req, true)
    }

    /// Matches a request, percent-decoding path segments only if `decode_segments` is set.
    pub fn try_match_with<R: Routable + ?Sized>(
        &self,
        req: &R,
        decode_segments: bool,
    ) -> Option<Captures> {
        self.match_input(&MatchInput::new(req, decode_segments))
    }

    pub(crate) fn match_input(&self, input: &MatchInput<'_>) -> Option<Captures> {
        if !self.method.matches(input.method) {
            return None;
        }

        let params = self.path.capture_segments(&input.segments)?;

        let mut query = QueryValues::new();

        if !self.query.is_empty() {
            let qs = input.query();

            for matcher in &self.query {
                let value = matcher.try_match(qs)?;
                query.insert(Cow::Owned(matcher.key().to_owned()), value);
            }
        }

        Some(Captures {
            method: input.method.clone(),
            params,
            query,
        })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;

        for (idx, key) in self.query_keys().enumerate() {
            f.write_str(if idx == 0 { "?" } else { "&" })?;
            f.write_str(key)?;
        }

        Ok(())
    }
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePattern")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("query", &self.query_keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int, query, rest, root, RouteInput};

    fn input<'a>(method: &'a Method, path: &'a str, query: &'a str) -> RouteInput<'a> {
        RouteInput::new(method, path, query)
    }

    #[test]
    fn method_first() {
        let route = RoutePattern::new([Method::GET, Method::HEAD], "/a");

        assert!(route.try_match(&input(&Method::GET, "/a", "")).is_some());
        assert!(route.try_match(&input(&Method::HEAD, "/a", "")).is_some());
        assert!(route.try_match(&input(&Method::POST, "/a", "")).is_none());
    }

    #[test]
    fn wildcard_binds_method() {
        let route = RoutePattern::any(root() / rest("path"));
        let purge = Method::from_bytes(b"PURGE").unwrap();

        let caps = route.try_match(&input(&purge, "/x/y", "")).unwrap();
        assert_eq!(caps.method, purge);
    }

    #[test]
    fn required_query() {
        let route =
            RoutePattern::new(Method::GET, root() / "items").query(query::required::<u32>("b"));

        assert!(route.try_match(&input(&Method::GET, "/items", "a=1")).is_none());
        assert!(route.try_match(&input(&Method::GET, "/items", "b=x")).is_none());

        let caps = route
            .try_match(&input(&Method::GET, "/items", "a=1&b=2"))
            .unwrap();
        assert_eq!(caps.query.get::<u32>("b"), Some(&2));
    }

    #[test]
    fn optional_query() {
        let route =
            RoutePattern::new(Method::GET, root() / "items").query(query::optional::<u32>("b"));

        let caps = route.try_match(&input(&Method::GET, "/items", "a=1")).unwrap();
        assert_eq!(caps.query.get::<Option<u32>>("b"), Some(&None));
    }

    #[test]
    fn query_after_path() {
        let route = RoutePattern::new(Method::GET, root() / "user" / int("id"))
            .query(query::required::<u32>("page"))
            .query(query::flag("debug"));

        assert!(route.try_match(&input(&Method::GET, "/user/x", "page=1")).is_none());

        let caps = route
            .try_match(&input(&Method::GET, "/user/3", "page=1"))
            .unwrap();
        assert_eq!(caps.params.typed::<i32>("id"), Some(3));
        assert_eq!(caps.query.get::<bool>("debug"), Some(&false));
        assert_eq!(caps.query.len(), 2);
    }

    #[test]
    fn decoding_switch() {
        let route = RoutePattern::new(Method::GET, "/files/{name}");
        let req = input(&Method::GET, "/files/a%20b", "");

        let caps = route.try_match_with(&req, true).unwrap();
        assert_eq!(caps.params.get_str("name"), Some("a b"));

        let caps = route.try_match_with(&req, false).unwrap();
        assert_eq!(caps.params.get_str("name"), Some("a%20b"));
    }

    #[test]
    fn display() {
        let route = RoutePattern::new(Method::GET, root() / "user" / int("id"))
            .query(query::required::<u32>("page"))
            .query(query::flag("debug"));

        assert_eq!(route.to_string(), "GET /user/{id:int}?page&debug");
    }
}
