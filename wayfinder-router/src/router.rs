use tracing::trace;

use crate::{
    route::{Captures, MatchInput},
    Routable, RoutePattern,
};

/// Position of a route in its router, in registration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RouteId(pub usize);

/// Ordered first-match router.
///
/// It matches a [routable request](Routable) against an ordered list of _routes_. Each is defined
/// by a single [`RoutePattern`] and contains two types of custom data:
/// 1. The route _value_, of the generic type `T`.
/// 1. Some _context_ data, of the generic type `U`, which is only provided to the check function in
///    [`recognize_fn`](Self::recognize_fn). This parameter defaults to `()` and can be omitted if
///    not required.
///
/// Routes are tried in the order they were added and the first one that matches wins. No match is
/// not an error; it is reported as `None`.
pub struct Router<T, U = ()> {
    routes: Vec<(RoutePattern, T, U)>,
    decode_segments: bool,
}

impl<T, U> Router<T, U> {
    /// Constructs new `RouterBuilder` with empty route list.
    pub fn build() -> RouterBuilder<T, U> {
        RouterBuilder {
            routes: Vec::new(),
            decode_segments: true,
        }
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
        self.routes.iter().map(|(pattern, _, _)| pattern)
    }

    /// Finds the first route that matches `req`.
    pub fn recognize<R>(&self, req: &R) -> Option<(&T, Captures, RouteId)>
    where
        R: Routable + ?Sized,
    {
        self.recognize_fn(req, |_, _| true)
    }

    /// Finds the first route that matches `req` and passes an additional predicate check using
    /// context data.
    ///
    /// Similar to [`recognize`](Self::recognize). However, before accepting the route as matched,
    /// the `check` closure is executed, passing the request and each route's context data. If the
    /// closure returns true the route's value and captures are returned; otherwise matching goes
    /// on with the next route.
    pub fn recognize_fn<R, F>(&self, req: &R, mut check: F) -> Option<(&T, Captures, RouteId)>
    where
        R: Routable + ?Sized,
        F: FnMut(&R, &U) -> bool,
    {
        let input = MatchInput::new(req, self.decode_segments);

        for (idx, (pattern, val, ctx)) in self.routes.iter().enumerate() {
            let Some(captures) = pattern.match_input(&input) else {
                continue;
            };

            if !check(req, ctx) {
                trace!("route {} matched {:?} but was rejected by check", pattern, req.path());
                continue;
            }

            trace!("route {} matched {:?}", pattern, req.path());
            return Some((val, captures, RouteId(idx)));
        }

        trace!("no route matched {} {:?}", req.method(), req.path());
        None
    }
}

/// Builder for an ordered [routing](Router) list.
pub struct RouterBuilder<T, U = ()> {
    routes: Vec<(RoutePattern, T, U)>,
    decode_segments: bool,
}

impl<T, U> RouterBuilder<T, U> {
    /// Adds a new route to the end of the routing list.
    ///
    /// Returns mutable references to elements of the new route.
    pub fn push(
        &mut self,
        pattern: RoutePattern,
        val: T,
        ctx: U,
    ) -> (&mut RoutePattern, &mut T, &mut U) {
        self.routes.push((pattern, val, ctx));

        let (pattern, val, ctx) = self
            .routes
            .last_mut()
            .expect("route list can not be empty after push");

        (pattern, val, ctx)
    }

    /// Sets whether path segments are percent-decoded before matching. Defaults to `true`.
    pub fn decode_segments(&mut self, decode: bool) -> &mut Self {
        self.decode_segments = decode;
        self
    }

    /// Finish configuration and create router instance.
    pub fn finish(self) -> Router<T, U> {
        Router {
            routes: self.routes,
            decode_segments: self.decode_segments,
        }
    }
}

/// Convenience methods provided when context data impls [`Default`]
impl<T, U> RouterBuilder<T, U>
where
    U: Default,
{
    /// Registers a route.
    pub fn route(&mut self, pattern: RoutePattern, val: T) -> (&mut RoutePattern, &mut T, &mut U) {
        self.push(pattern, val, U::default())
    }
}
