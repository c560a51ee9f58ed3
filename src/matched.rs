use std::any::{type_name, Any};

use serde::{de::DeserializeOwned, Deserialize};
use wayfinder_router::{query::QueryValues, Captures, FromValue, Params};

use crate::{
    error::ExtractError,
    http::{Method, Uri},
    Request,
};

/// A request together with what its route captured.
///
/// This is what a route handler receives. Path values come from the route's binders and query
/// values from its query matchers; both were checked while matching, so typed access only fails
/// when a handler asks for something its route does not capture.
#[derive(Debug)]
pub struct Matched {
    req: Request,
    captures: Captures,
}

impl Matched {
    pub(crate) fn new(req: Request, captures: Captures) -> Self {
        Matched { req, captures }
    }

    /// The matched request.
    #[inline]
    pub fn request(&self) -> &Request {
        &self.req
    }

    /// Request method. For a wildcard route this is how the handler learns the actual method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.captures.method
    }

    /// Request URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        self.req.uri()
    }

    /// Values bound by the path pattern.
    #[inline]
    pub fn params(&self) -> &Params {
        &self.captures.params
    }

    /// Values captured by the route's query matchers.
    #[inline]
    pub fn query_values(&self) -> &QueryValues {
        &self.captures.query
    }

    /// Returns a path value converted to `T`.
    ///
    /// ```
    /// use wayfinder::{int, root, test::TestRequest, web, Router, Matched};
    ///
    /// let router = Router::build()
    ///     .route(web::get(root() / "user" / int("id")), |m: Matched| {
    ///         web::from_result(m.param::<u32>("id").map(|id| format!("user {id}")))
    ///     })
    ///     .finish();
    ///
    /// let res = router.respond(TestRequest::get().uri("/user/12").to_request());
    /// assert_eq!(res.body_str(), Some("user 12"));
    /// ```
    pub fn param<T: FromValue>(&self, name: &str) -> Result<T, ExtractError> {
        let value = self.captures.params.get(name).ok_or_else(|| {
            log::debug!("path parameter {:?} is not bound by the route", name);
            ExtractError::MissingParam {
                name: name.to_owned(),
            }
        })?;

        T::from_value(value).ok_or_else(|| {
            log::debug!(
                "path parameter {:?} ({}) can not be read as {}",
                name,
                value.kind(),
                type_name::<T>()
            );
            ExtractError::ParamType {
                name: name.to_owned(),
                target: type_name::<T>(),
            }
        })
    }

    /// Returns a reference to the value a query matcher captured for `key`.
    ///
    /// `T` is the matcher's output type: `T` for [`required`](crate::query::required),
    /// `Option<T>` for [`optional`](crate::query::optional), `Vec<T>` for
    /// [`multi`](crate::query::multi) and `bool` for [`flag`](crate::query::flag).
    pub fn query_ref<T: Any>(&self, key: &str) -> Result<&T, ExtractError> {
        self.captures.query.get::<T>(key).ok_or_else(|| {
            log::debug!(
                "query parameter {:?} is not captured by the route as {}",
                key,
                type_name::<T>()
            );
            ExtractError::MissingQuery {
                key: key.to_owned(),
                target: type_name::<T>(),
            }
        })
    }

    /// Returns a copy of the value a query matcher captured for `key`.
    ///
    /// See [`query_ref`](Self::query_ref) for the type each matcher captures.
    pub fn query<T: Any + Clone>(&self, key: &str) -> Result<T, ExtractError> {
        self.query_ref::<T>(key).cloned()
    }

    /// Deserializes the path values, by binder name into a struct or by position into a tuple.
    pub fn load_params<'de, T: Deserialize<'de>>(&'de self) -> Result<T, ExtractError> {
        self.captures.params.load().map_err(|err| {
            log::debug!("failed to deserialize path parameters: {}", err);
            ExtractError::from(err)
        })
    }

    /// Deserializes the whole query string, independently of the route's query matchers.
    pub fn load_query<T: DeserializeOwned>(&self) -> Result<T, ExtractError> {
        serde_urlencoded::from_str(self.req.query_string()).map_err(|err| {
            log::debug!("failed to deserialize query string: {}", err);
            ExtractError::from(err)
        })
    }

    /// Request body.
    #[inline]
    pub fn body(&self) -> &bytes::Bytes {
        self.req.body()
    }

    /// Splits into the request and the captures.
    pub fn into_parts(self) -> (Request, Captures) {
        (self.req, self.captures)
    }
}
