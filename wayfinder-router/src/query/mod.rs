//! Query string parsing, per-type codecs and query matchers.
//!
//! Codecs are three independent traits resolved by type: [`QueryParamKey`] names the key a type
//! is read from, [`QueryParamDecoder`] decodes it and [`QueryParamEncoder`] renders it back.
//!
//! Matchers run after method and path matched. A decode failure never raises an error: a
//! [`Required`] matcher turns it into a non-match and an [`Optional`] matcher into `None`.

use std::borrow::Cow;

mod builder;
mod codec;
mod matcher;
mod params;

pub use self::builder::QueryString;
pub use self::codec::{QueryDecodeError, QueryParamDecoder, QueryParamEncoder, QueryParamKey};
pub use self::matcher::{
    Flag, Multi, Optional, QueryMatcher, QueryValue, QueryValues, Required,
};
pub use self::params::QueryParams;

/// Matches the first value of `key`, which must be present and decode to `T`.
pub fn required<T>(key: impl Into<Cow<'static, str>>) -> Required<T>
where
    T: QueryParamDecoder + Send + Sync + 'static,
{
    Required::new(key)
}

/// Captures the first value of `key` decoded as `T`, or `None` if it is absent or does not
/// decode.
pub fn optional<T>(key: impl Into<Cow<'static, str>>) -> Optional<T>
where
    T: QueryParamDecoder + Send + Sync + 'static,
{
    Optional::new(key)
}

/// Captures every value of `key` decoded as `T`.
pub fn multi<T>(key: impl Into<Cow<'static, str>>) -> Multi<T>
where
    T: QueryParamDecoder + Send + Sync + 'static,
{
    Multi::new(key)
}

/// Captures whether `key` is present.
pub fn flag(key: impl Into<Cow<'static, str>>) -> Flag {
    Flag::new(key)
}

/// Like [`required`], reading the key from `T`'s [`QueryParamKey`] implementation.
pub fn param<T>() -> Required<T>
where
    T: QueryParamKey + QueryParamDecoder + Send + Sync + 'static,
{
    Required::new(T::KEY)
}

/// Like [`optional`], reading the key from `T`'s [`QueryParamKey`] implementation.
pub fn optional_param<T>() -> Optional<T>
where
    T: QueryParamKey + QueryParamDecoder + Send + Sync + 'static,
{
    Optional::new(T::KEY)
}
