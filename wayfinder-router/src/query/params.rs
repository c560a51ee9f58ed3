use url::form_urlencoded;

/// Decoded query string: an ordered multimap of keys to values.
///
/// `+` is decoded as a space and percent-escapes are decoded. A key without `=` has an empty
/// value.
///
/// # Examples
/// ```
/// use wayfinder_router::query::QueryParams;
///
/// let params = QueryParams::parse("tag=a&tag=b&q=hello+world&debug");
///
/// assert_eq!(params.get("q"), Some("hello world"));
/// assert_eq!(params.get_all("tag").collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(params.get("debug"), Some(""));
/// assert!(!params.contains("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses a query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(key, val)| (key.into_owned(), val.into_owned()))
            .collect();

        QueryParams { pairs }
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all values for `key`, in query string order.
    pub fn get_all<'a, 'k>(&'a self, key: &'k str) -> impl Iterator<Item = &'a str> + 'k
    where
        'a: 'k,
    {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `key` appears at least once.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Iterates over all `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs, counting repeated keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }

    #[test]
    fn decoding() {
        let params = QueryParams::parse("?name=J%C3%BCrgen&path=a%2Fb&sum=1%2B1");

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("name"), Some("Jürgen"));
        assert_eq!(params.get("path"), Some("a/b"));
        assert_eq!(params.get("sum"), Some("1+1"));
    }

    #[test]
    fn order_is_kept() {
        let params = QueryParams::parse("b=1&a=2&b=3");
        let pairs = params.iter().collect::<Vec<_>>();
        assert_eq!(pairs, [("b", "1"), ("a", "2"), ("b", "3")]);
        assert_eq!(params.get("b"), Some("1"));
    }

    #[test]
    fn values_outlive_key() {
        let params = QueryParams::parse("tag=a&tag=b&q=x");

        let (first, tags) = {
            let key = String::from("tag");
            (params.get(&key), params.get_all(&key).collect::<Vec<_>>())
        };

        assert_eq!(first, Some("a"));
        assert_eq!(tags, ["a", "b"]);
    }

    #[test]
    fn from_pairs() {
        let params = [("a", "1")].into_iter().collect::<QueryParams>();
        assert_eq!(params, QueryParams::parse("a=1"));
    }
}
