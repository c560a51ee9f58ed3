//! Header names, values and the [`TryIntoHeaderPair`] conversion used by builders.

use std::convert::Infallible;

pub use ::http::header::*;
use derive_more::{Display, Error};

/// An interface for types that can be converted into a [`HeaderName`] + [`HeaderValue`] pair for
/// insertion into a [`HeaderMap`].
///
/// Implemented for any `(name, value)` tuple whose parts convert into a header name and value,
/// such as `(&str, &str)`, `(HeaderName, String)` or `(HeaderName, HeaderValue)`.
pub trait TryIntoHeaderPair: Sized {
    /// Converts into a validated header name and value.
    fn try_into_pair(self) -> Result<(HeaderName, HeaderValue), InvalidHeaderPart>;
}

impl<K, V> TryIntoHeaderPair for (K, V)
where
    K: TryInto<HeaderName>,
    K::Error: Into<InvalidHeaderPart>,
    V: TryInto<HeaderValue>,
    V::Error: Into<InvalidHeaderPart>,
{
    fn try_into_pair(self) -> Result<(HeaderName, HeaderValue), InvalidHeaderPart> {
        let (name, value) = self;
        let name = name.try_into().map_err(Into::into)?;
        let value = value.try_into().map_err(Into::into)?;
        Ok((name, value))
    }
}

/// A header name or value was invalid.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum InvalidHeaderPart {
    /// Invalid header name.
    #[display("invalid header name: {_0}")]
    Name(InvalidHeaderName),

    /// Invalid header value.
    #[display("invalid header value: {_0}")]
    Value(InvalidHeaderValue),
}

impl From<InvalidHeaderName> for InvalidHeaderPart {
    fn from(err: InvalidHeaderName) -> Self {
        InvalidHeaderPart::Name(err)
    }
}

impl From<InvalidHeaderValue> for InvalidHeaderPart {
    fn from(err: InvalidHeaderValue) -> Self {
        InvalidHeaderPart::Value(err)
    }
}

impl From<Infallible> for InvalidHeaderPart {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs() {
        let (name, value) = ("x-id", "42").try_into_pair().unwrap();
        assert_eq!(name, "x-id");
        assert_eq!(value, "42");

        let (name, _) = (CONTENT_TYPE, String::from("text/plain"))
            .try_into_pair()
            .unwrap();
        assert_eq!(name, CONTENT_TYPE);

        assert!(matches!(
            ("bad name", "x").try_into_pair(),
            Err(InvalidHeaderPart::Name(_))
        ));
        assert!(matches!(
            ("x-id", "bad\nvalue").try_into_pair(),
            Err(InvalidHeaderPart::Value(_))
        ));
    }
}
