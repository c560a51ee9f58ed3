use std::{
    any::{type_name, Any},
    borrow::Cow,
    fmt,
    marker::PhantomData,
};

use super::{QueryParamDecoder, QueryParams};

/// A decoded query capture, downcast by [`QueryValues::get`].
pub type QueryValue = Box<dyn Any + Send + Sync>;

/// Matches one query key.
///
/// Returning `None` means the route does not match. Decode failures are handled inside the
/// matcher; they are never raised.
pub trait QueryMatcher: Send + Sync {
    /// Key this matcher reads.
    fn key(&self) -> &str;

    /// Reads and decodes this matcher's key.
    fn try_match(&self, params: &QueryParams) -> Option<QueryValue>;
}

/// First value for a key, which must be present and decode. Captures a `T`.
pub struct Required<T> {
    key: Cow<'static, str>,
    _t: PhantomData<fn() -> T>,
}

/// First value for a key, if present and decodable. Captures an `Option<T>` and always matches.
pub struct Optional<T> {
    key: Cow<'static, str>,
    _t: PhantomData<fn() -> T>,
}

/// All values for a key, each of which must decode. Captures a `Vec<T>`, empty when the key is
/// absent.
pub struct Multi<T> {
    key: Cow<'static, str>,
    _t: PhantomData<fn() -> T>,
}

/// Presence of a key. Captures a `bool` and always matches.
#[derive(Debug, Clone)]
pub struct Flag {
    key: Cow<'static, str>,
}

macro_rules! matcher_common {
    ($name:ident) => {
        impl<T> $name<T> {
            pub(crate) fn new(key: impl Into<Cow<'static, str>>) -> Self {
                Self {
                    key: key.into(),
                    _t: PhantomData,
                }
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self::new(self.key.clone())
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("key", &self.key)
                    .field("type", &type_name::<T>())
                    .finish()
            }
        }
    };
}

matcher_common!(Required);
matcher_common!(Optional);
matcher_common!(Multi);

impl Flag {
    pub(crate) fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Flag { key: key.into() }
    }
}

fn decode<T: QueryParamDecoder>(key: &str, value: &str) -> Option<T> {
    match T::decode(value) {
        Ok(val) => Some(val),
        Err(err) => {
            tracing::trace!("query key {:?}: {}", key, err);
            None
        }
    }
}

impl<T> QueryMatcher for Required<T>
where
    T: QueryParamDecoder + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn try_match(&self, params: &QueryParams) -> Option<QueryValue> {
        let value = params.get(&self.key)?;
        decode::<T>(&self.key, value).map(|val| Box::new(val) as QueryValue)
    }
}

impl<T> QueryMatcher for Optional<T>
where
    T: QueryParamDecoder + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn try_match(&self, params: &QueryParams) -> Option<QueryValue> {
        let value = params
            .get(&self.key)
            .and_then(|value| decode::<T>(&self.key, value));

        Some(Box::new(value))
    }
}

impl<T> QueryMatcher for Multi<T>
where
    T: QueryParamDecoder + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn try_match(&self, params: &QueryParams) -> Option<QueryValue> {
        let values = params
            .get_all(&self.key)
            .map(|value| decode::<T>(&self.key, value))
            .collect::<Option<Vec<T>>>()?;

        Some(Box::new(values))
    }
}

impl QueryMatcher for Flag {
    fn key(&self) -> &str {
        &self.key
    }

    fn try_match(&self, params: &QueryParams) -> Option<QueryValue> {
        Some(Box::new(params.contains(&self.key)))
    }
}

/// Query captures of a matched route, keyed by query key.
#[derive(Default)]
pub struct QueryValues {
    values: Vec<(Cow<'static, str>, QueryValue)>,
}

impl QueryValues {
    /// Constructs an empty set of captures.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: Cow<'static, str>, value: QueryValue) {
        self.values.push((key, value));
    }

    /// Returns the capture for `key` if it exists and has type `T`.
    ///
    /// The type is what the matcher captures: `T` for [`Required`], `Option<T>` for
    /// [`Optional`], `Vec<T>` for [`Multi`] and `bool` for [`Flag`].
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values
            .iter()
            .filter(|(k, _)| k == key)
            .find_map(|(_, val)| val.downcast_ref::<T>())
    }

    /// Returns `true` if a matcher captured `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.iter().any(|(k, _)| k == key)
    }

    /// Iterates over captured keys in matcher order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_ref())
    }

    /// Number of captures.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for QueryValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
