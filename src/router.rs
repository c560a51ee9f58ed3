use std::fmt;

use wayfinder_router::{
    Captures, IntoPathPattern, RouteId, RouteInput, RoutePattern, Router as PatternRouter,
};
use wayfinder_task::{lazy, BoxTask, Lazy, Task as _};

use crate::{
    config::{PathNormalizer, RouterConfig, TrailingSlash},
    handler::{DefaultHandler, Handler},
    Error, Matched, Request, Response,
};

/// Request router service.
///
/// Holds an ordered list of route patterns and their handlers, plus a default handler for
/// requests no route matches. Routing is a pure function of the request; the router holds no
/// mutable state and can be shared between threads.
///
/// ```
/// use wayfinder::{int, root, test::TestRequest, web, Matched, Router};
///
/// let router = Router::build()
///     .route(web::get(root() / "user" / int("id")), |m: Matched| {
///         let id = m.param::<i32>("id");
///         web::from_result(id.map(|id| format!("user {id}")))
///     })
///     .finish();
///
/// let res = router.respond(TestRequest::get().uri("/user/12").to_request());
/// assert_eq!(res.body_str(), Some("user 12"));
///
/// let res = router.respond(TestRequest::get().uri("/user/abc").to_request());
/// assert_eq!(res.status(), 404);
/// ```
pub struct Router {
    routes: PatternRouter<Box<dyn Handler>>,
    default: Box<dyn DefaultHandler>,
    normalizer: PathNormalizer,
    config: RouterConfig,
}

impl Router {
    /// Constructs a router builder with no routes and the built-in `404 Not Found` fallback.
    pub fn build() -> RouterBuilder {
        RouterBuilder {
            routes: Vec::new(),
            default: None,
            config: RouterConfig::default(),
        }
    }

    /// Router settings.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes were added.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over route patterns in matching order.
    pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
        self.routes.patterns()
    }

    /// Routes `req` and returns the task of the first matching route's handler, or of the default
    /// handler if no route matches.
    ///
    /// Matching happens now; the returned task has not been run.
    pub fn call(&self, req: Request) -> BoxTask<Response, Error> {
        match self.recognize(&req) {
            Some((handler, captures, id)) => {
                log::trace!("{} {} routed to #{}", req.method(), req.path(), id.0);
                handler.call(Matched::new(req, captures))
            }
            None => {
                log::debug!(
                    "no route matched {} {}; using default handler",
                    req.method(),
                    req.path()
                );
                self.default.call(req)
            }
        }
    }

    /// Routes `req` and runs the resulting task.
    pub fn handle(&self, req: Request) -> Result<Response, Error> {
        self.call(req).run()
    }

    /// Routes `req` and runs the resulting task, turning a failure into its error response.
    pub fn respond(&self, req: Request) -> Response {
        let method = req.method().clone();
        let path = req.path().to_owned();

        match self.handle(req) {
            Ok(res) => res,
            Err(err) => {
                log::error!("handler for {} {} failed: {}", method, path, err);
                err.error_response()
            }
        }
    }

    fn recognize(&self, req: &Request) -> Option<(&dyn Handler, Captures, RouteId)> {
        let path = self.normalizer.normalize(req.path());
        let input = RouteInput::new(req.method(), &path, req.query_string());

        self.routes
            .recognize(&input)
            .map(|(handler, captures, id)| (handler.as_ref(), captures, id))
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.patterns().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for a [`Router`].
pub struct RouterBuilder {
    routes: Vec<(RoutePattern, Box<dyn Handler>)>,
    default: Option<Box<dyn DefaultHandler>>,
    config: RouterConfig,
}

impl RouterBuilder {
    /// Adds a route to the end of the routing list.
    ///
    /// Routes are tried in the order they were added; the first that matches wins.
    pub fn route<H: Handler>(mut self, pattern: RoutePattern, handler: H) -> Self {
        self.routes.push((pattern, Box::new(handler)));
        self
    }

    /// Adds a route matching `path` with any method.
    pub fn any<H: Handler>(self, path: impl IntoPathPattern, handler: H) -> Self {
        self.route(RoutePattern::any(path), handler)
    }

    /// Sets the handler used when no route matches.
    ///
    /// Without one, unmatched requests get an empty `404 Not Found` response.
    pub fn default_handler<H: DefaultHandler>(mut self, handler: H) -> Self {
        self.default = Some(Box::new(handler));
        self
    }

    /// Replaces the router settings.
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how slashes in request paths are normalized before matching.
    pub fn trailing_slash(mut self, trailing_slash: TrailingSlash) -> Self {
        self.config = self.config.trailing_slash(trailing_slash);
        self
    }

    /// Finishes configuration and creates the router.
    pub fn finish(self) -> Router {
        let mut routes = PatternRouter::build();
        routes.decode_segments(self.config.get_decode_segments());

        for (pattern, handler) in self.routes {
            routes.route(pattern, handler);
        }

        let default: Box<dyn DefaultHandler> = match self.default {
            Some(default) => default,
            None => Box::new(not_found),
        };

        Router {
            routes: routes.finish(),
            default,
            normalizer: PathNormalizer::new(self.config.get_trailing_slash()),
            config: self.config,
        }
    }
}

fn not_found(_: Request) -> Lazy<fn() -> Response> {
    lazy(Response::not_found as fn() -> Response)
}
