use std::fmt;

use url::form_urlencoded;

use super::{QueryParamEncoder, QueryParamKey};

/// Builds a query string from encodable values.
///
/// # Examples
/// ```
/// use wayfinder_router::query::QueryString;
///
/// let qs = QueryString::new()
///     .append("q", "hello world")
///     .append("page", &2)
///     .append_all("tag", ["a&b", "c"])
///     .finish();
///
/// assert_eq!(qs, "q=hello+world&page=2&tag=a%26b&tag=c");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Constructs an empty query string builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `key=value` pair.
    pub fn append<V>(mut self, key: impl Into<String>, value: V) -> Self
    where
        V: QueryParamEncoder,
    {
        self.pairs.push((key.into(), value.encode()));
        self
    }

    /// Appends one pair per value, all under `key`.
    pub fn append_all<I>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: QueryParamEncoder,
    {
        let key = key.into();

        for value in values {
            self.pairs.push((key.clone(), value.encode()));
        }

        self
    }

    /// Appends a value under its type's [`QueryParamKey`].
    pub fn append_param<T>(self, value: &T) -> Self
    where
        T: QueryParamKey + QueryParamEncoder,
    {
        self.append(T::KEY, value)
    }

    /// Returns `true` if no pairs were appended.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the encoded query string, without a leading `?`.
    pub fn finish(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.finish())
    }
}
