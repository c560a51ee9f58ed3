use std::{borrow::Cow, ops::Index};

use serde::{de, Deserialize};
use smallvec::SmallVec;

use crate::{de::ParamsDeserializer, quoter, FromValue, Value};

/// Request path split into segments, stored inline for typical path depths.
pub(crate) type Segments<'a> = SmallVec<[Cow<'a, str>; 8]>;

/// Splits a request path into segments, optionally percent-decoding each one.
///
/// `""` and `"/"` have no segments. A trailing slash yields a trailing empty segment, so
/// `"/user/"` is `["user", ""]`.
pub(crate) fn split_segments(path: &str, decode: bool) -> Segments<'_> {
    let path = path.strip_prefix('/').unwrap_or(path);

    if path.is_empty() {
        return Segments::new();
    }

    path.split('/')
        .map(|seg| {
            if decode {
                quoter::decode_segment(seg)
            } else {
                Cow::Borrowed(seg)
            }
        })
        .collect()
}

/// Values bound while matching a path pattern.
///
/// Bindings keep the order of the binders in the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    segments: Vec<(Cow<'static, str>, Value)>,
}

impl Params {
    /// Constructs an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, name: impl Into<Cow<'static, str>>, value: Value) {
        self.segments.push((name.into(), value));
    }

    /// Check if there are any bound values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns number of bound values.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Get bound value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.segments
            .iter()
            .find(|(seg_name, _)| seg_name == name)
            .map(|(_, val)| val)
    }

    /// Get bound value by name if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    /// Get bound value by name, converted to `T`.
    ///
    /// Returns `None` if nothing is bound to `name` or the value does not convert.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/user/{id:int}/{rest}*");
    /// let params = pattern.capture("/user/12/a/b").unwrap();
    ///
    /// assert_eq!(params.typed::<i32>("id"), Some(12));
    /// assert_eq!(params.typed::<u8>("id"), Some(12));
    /// assert_eq!(params.typed::<Vec<String>>("rest").unwrap(), ["a", "b"]);
    /// assert_eq!(params.typed::<i32>("missing"), None);
    /// ```
    pub fn typed<T: FromValue>(&self, name: &str) -> Option<T> {
        T::from_value(self.get(name)?)
    }

    /// Return iterator to items in parameter container.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.segments.iter(),
        }
    }

    /// Deserializes bound values to a specified type `T`.
    ///
    /// Structs and maps are filled by binder name; tuples and sequences by binder position.
    ///
    /// # Errors
    /// Returns error when bound values cannot be deserialized into a `T` type.
    pub fn load<'de, T: Deserialize<'de>>(&'de self) -> Result<T, de::value::Error> {
        Deserialize::deserialize(ParamsDeserializer::new(self))
    }
}

/// Iterator over bound `(name, value)` pairs.
#[derive(Debug)]
pub struct ParamsIter<'a> {
    inner: std::slice::Iter<'a, (Cow<'static, str>, Value)>,
}

impl<'a> Iterator for ParamsIter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, val)| (name.as_ref(), val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_> {}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a Value);
    type IntoIter = ParamsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Index<&'a str> for Params {
    type Output = Value;

    fn index(&self, name: &'a str) -> &Value {
        self.get(name)
            .expect("Value for parameter is not available")
    }
}

impl Index<usize> for Params {
    type Output = Value;

    fn index(&self, idx: usize) -> &Value {
        &self.segments[idx].1
    }
}
