use derive_more::{Display, Error};

/// A query value could not be decoded to the requested type.
///
/// Matchers treat this as a non-match; it is never surfaced from routing.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("can not decode {value:?} as {target}")]
pub struct QueryDecodeError {
    value: String,
    target: &'static str,
}

impl QueryDecodeError {
    /// Creates an error for `value` that could not be decoded as `target`.
    pub fn new(value: impl Into<String>, target: &'static str) -> Self {
        Self {
            value: value.into(),
            target,
        }
    }

    /// The raw value that failed to decode.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Name of the type decoding was attempted for.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

/// The query key a type is read from when no key is given explicitly.
///
/// See [`query::param`](crate::query::param).
pub trait QueryParamKey {
    /// Query string key.
    const KEY: &'static str;
}

/// Decodes one raw query value.
pub trait QueryParamDecoder: Sized {
    /// Decodes `value`, which is already percent-decoded.
    fn decode(value: &str) -> Result<Self, QueryDecodeError>;
}

/// Encodes a value for a query string. Percent-encoding is applied by
/// [`QueryString`](crate::query::QueryString).
pub trait QueryParamEncoder {
    /// Renders the value.
    fn encode(&self) -> String;
}

impl<T: QueryParamEncoder + ?Sized> QueryParamEncoder for &T {
    fn encode(&self) -> String {
        (**self).encode()
    }
}

impl QueryParamEncoder for str {
    fn encode(&self) -> String {
        self.to_owned()
    }
}

/// Implements the query codec traits for types with `FromStr` and `Display` implementations.
///
/// With a key, [`QueryParamKey`] is implemented as well.
///
/// # Examples
/// ```
/// use std::{fmt, str::FromStr};
///
/// use wayfinder_router::query::{self, QueryMatcher as _, QueryParamDecoder, QueryParams};
///
/// #[derive(Debug, PartialEq)]
/// struct Page(u32);
///
/// impl FromStr for Page {
///     type Err = std::num::ParseIntError;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         s.parse().map(Page)
///     }
/// }
///
/// impl fmt::Display for Page {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// wayfinder_router::query_param!(Page, "page");
///
/// assert_eq!(Page::decode("3"), Ok(Page(3)));
///
/// let matcher = query::param::<Page>();
/// let value = matcher.try_match(&QueryParams::parse("page=3")).unwrap();
/// assert_eq!(value.downcast_ref::<Page>(), Some(&Page(3)));
/// ```
#[macro_export]
macro_rules! query_param {
    ($ty:ty) => {
        impl $crate::query::QueryParamDecoder for $ty {
            fn decode(value: &str) -> Result<Self, $crate::query::QueryDecodeError> {
                value
                    .parse()
                    .map_err(|_| $crate::query::QueryDecodeError::new(value, stringify!($ty)))
            }
        }

        impl $crate::query::QueryParamEncoder for $ty {
            fn encode(&self) -> String {
                self.to_string()
            }
        }
    };

    ($ty:ty, $key:expr) => {
        $crate::query_param!($ty);

        impl $crate::query::QueryParamKey for $ty {
            const KEY: &'static str = $key;
        }
    };
}

query_param!(i8);
query_param!(i16);
query_param!(i32);
query_param!(i64);
query_param!(i128);
query_param!(isize);
query_param!(u8);
query_param!(u16);
query_param!(u32);
query_param!(u64);
query_param!(u128);
query_param!(usize);
query_param!(f32);
query_param!(f64);
query_param!(bool);
query_param!(char);
query_param!(String);
