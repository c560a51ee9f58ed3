use std::fmt;

use http::Method;

/// Matches the request method.
///
/// The request method is always part of a route's [`Captures`](crate::Captures), which is how
/// [`MethodMatcher::Any`] makes the actual method available to the route's value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MethodMatcher {
    /// A single method.
    Exact(Method),

    /// Any of a set of methods.
    AnyOf(Vec<Method>),

    /// Every method.
    #[default]
    Any,
}

impl MethodMatcher {
    /// Returns `true` if `method` is accepted.
    pub fn matches(&self, method: &Method) -> bool {
        match self {
            MethodMatcher::Exact(m) => m == method,
            MethodMatcher::AnyOf(methods) => methods.contains(method),
            MethodMatcher::Any => true,
        }
    }
}

impl From<Method> for MethodMatcher {
    fn from(method: Method) -> Self {
        MethodMatcher::Exact(method)
    }
}

impl From<Vec<Method>> for MethodMatcher {
    fn from(methods: Vec<Method>) -> Self {
        MethodMatcher::AnyOf(methods)
    }
}

impl<const N: usize> From<[Method; N]> for MethodMatcher {
    fn from(methods: [Method; N]) -> Self {
        MethodMatcher::AnyOf(methods.into())
    }
}

impl fmt::Display for MethodMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodMatcher::Exact(m) => f.write_str(m.as_str()),
            MethodMatcher::AnyOf(methods) => {
                let names = methods.iter().map(Method::as_str).collect::<Vec<_>>();
                f.write_str(&names.join("|"))
            }
            MethodMatcher::Any => f.write_str("*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching() {
        assert!(MethodMatcher::Exact(Method::GET).matches(&Method::GET));
        assert!(!MethodMatcher::Exact(Method::GET).matches(&Method::HEAD));

        let set = MethodMatcher::from([Method::PUT, Method::PATCH]);
        assert!(set.matches(&Method::PATCH));
        assert!(!set.matches(&Method::POST));

        assert!(MethodMatcher::Any.matches(&Method::from_bytes(b"PURGE").unwrap()));
        assert!(!MethodMatcher::AnyOf(vec![]).matches(&Method::GET));
    }

    #[test]
    fn display() {
        assert_eq!(MethodMatcher::from(Method::GET).to_string(), "GET");
        assert_eq!(
            MethodMatcher::from(vec![Method::PUT, Method::PATCH]).to_string(),
            "PUT|PATCH"
        );
        assert_eq!(MethodMatcher::Any.to_string(), "*");
    }
}
