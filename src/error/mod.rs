//! Error and Result module

use derive_more::{Display, Error, From};

use crate::http::StatusCode;

#[allow(clippy::module_inception)]
mod error;
mod macros;
mod response_error;

pub(crate) use self::macros::{downcast_dyn, downcast_get_type_id};
pub use self::{error::Error, response_error::ResponseError};
pub use crate::http::header::InvalidHeaderPart;
pub use wayfinder_router::{query::QueryDecodeError, PatternError, UrlGenerationError};

/// A convenience [`Result`](std::result::Result) for router operations.
///
/// This type alias is generally used to avoid writing out `wayfinder::Error` directly.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when a handler reads the captures of its matched route.
///
/// These indicate a handler asking for something its route pattern does not provide, or a
/// deserialization target that does not fit the captured values.
#[derive(Debug, Clone, Display, Error, From)]
#[non_exhaustive]
pub enum ExtractError {
    /// The route pattern has no binder with this name.
    #[display("path parameter {name:?} is not bound by the route")]
    MissingParam {
        /// Name of the binder.
        name: String,
    },

    /// The bound value has a kind that can not be converted to the requested type.
    #[display("path parameter {name:?} can not be read as {target}")]
    ParamType {
        /// Name of the binder.
        name: String,

        /// Requested type.
        target: &'static str,
    },

    /// No query matcher of the route captured this key with the requested type.
    #[display("query parameter {key:?} is not captured by the route as {target}")]
    MissingQuery {
        /// Query key.
        key: String,

        /// Requested type.
        target: &'static str,
    },

    /// Captured values could not be deserialized into the requested type.
    #[display("can not deserialize captures: {source}")]
    #[from]
    Deserialize {
        /// Deserializer error.
        source: serde::de::value::Error,
    },
}

impl ResponseError for ExtractError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExtractError::Deserialize { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for UrlGenerationError {}

impl ResponseError for PatternError {}

impl ResponseError for QueryDecodeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl ResponseError for InvalidHeaderPart {}
