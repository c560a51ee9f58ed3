use std::{
    borrow::{Borrow, Cow},
    collections::HashMap,
    fmt,
    hash::{BuildHasher, Hash},
    ops::Div,
};

use bytestring::ByteString;
use derive_more::{Display, Error};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::{
    path::{split_segments, Params},
    segment::{Segment, SegmentKind},
    Value,
};

/// https://url.spec.whatwg.org/#fragment-percent-encode-set
const FRAGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// https://url.spec.whatwg.org/#path-percent-encode-set
const PATH: &AsciiSet = &FRAGMENT.add(b'#').add(b'?').add(b'{').add(b'}');

/// Path set plus the bytes that would change how a single segment is split or decoded.
const SEGMENT: &AsciiSet = &PATH.add(b'/').add(b'%');

/// Errors which can occur when parsing a path pattern string.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    /// Non-empty pattern did not start with `/`.
    #[display("pattern {pattern:?} must start with \"/\"")]
    MissingLeadingSlash {
        /// The offending pattern.
        pattern: String,
    },

    /// Unbalanced braces or a binder mixed with literal text in one segment.
    #[display("pattern contains malformed segment {segment:?}")]
    Malformed {
        /// The offending segment.
        segment: String,
    },

    /// A binder without a name, like `{}` or `{:int}`.
    #[display("binder in segment {segment:?} has no name")]
    EmptyName {
        /// The offending segment.
        segment: String,
    },

    /// Two binders share a name.
    #[display("binder name {name:?} is used more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A remainder binder (`{name}*`) is followed by more segments.
    #[display("remainder binder {name:?} must be the last segment")]
    TailNotLast {
        /// Name of the remainder binder.
        name: String,
    },

    /// A remainder binder was given a type; remainders always bind segments.
    #[display("remainder binder {name:?} can not be typed")]
    TypedTail {
        /// Name of the remainder binder.
        name: String,
    },

    /// Binder type was not a known type name and did not compile as a regex.
    #[display("invalid regex {regex:?} in binder: {reason}")]
    Regex {
        /// The expression as written.
        regex: String,
        /// Why it did not compile.
        reason: String,
    },
}

/// Errors which can occur when building a path from a pattern.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UrlGenerationError {
    /// No value was supplied for a binder.
    #[display("no value supplied for binder {name:?}")]
    MissingValue {
        /// Binder name.
        name: String,
    },

    /// The supplied value would not be matched by its binder.
    #[display("value {value:?} is not accepted by binder {name:?}")]
    RejectedValue {
        /// Binder name.
        name: String,
        /// Rendered value.
        value: String,
    },
}

/// Path matcher: an ordered list of segment matchers, optionally ending with a remainder binder.
///
/// Without a remainder the pattern has fixed arity and only matches paths with exactly as many
/// segments. With a remainder the leading segments must match and every trailing segment, possibly
/// none, is bound as [`Value::Segments`].
///
/// Paths are split on `/` first and each segment is percent-decoded afterwards, so `%2F` never
/// introduces a segment boundary. Both `""` and `"/"` have zero segments; `"/a/"` has two segments,
/// `"a"` and `""`.
///
/// # Building Patterns
/// Patterns can be composed with `/` starting at [`root()`]:
///
/// ```
/// use wayfinder_router::{int, rest, root, str};
///
/// let user = root() / "user" / int("id");
/// assert!(user.is_match("/user/12"));
/// assert!(!user.is_match("/user/abc"));
/// assert!(!user.is_match("/user/12/posts"));
///
/// let files = root() / "files" / str("bucket") / rest("path");
/// assert!(files.is_match("/files/media"));
/// assert!(files.is_match("/files/media/2021/cat.png"));
/// assert!(!files.is_match("/files"));
/// ```
///
/// # Pattern Strings
/// The same patterns can be parsed from strings. Binders are written `{name}` or `{name:type}`
/// where `type` is one of `str`, `int`, `long`, `uint` and `bool`. Any other type is compiled as a
/// regular expression the whole segment must match. A final `{name}*` segment is the remainder.
///
/// ```
/// use wayfinder_router::PathPattern;
///
/// let pattern = PathPattern::new("/user/{id:int}/files/{path}*");
/// assert_eq!(pattern.to_string(), "/user/{id:int}/files/{path}*");
///
/// let pattern = PathPattern::new("/currency/{code:[A-Z]{3}}");
/// assert!(pattern.is_match("/currency/EUR"));
/// assert!(!pattern.is_match("/currency/euro"));
///
/// assert!(PathPattern::parse("/user/{id:int").is_err());
/// assert!(PathPattern::parse("/{path}*/more").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathPattern {
    segments: Vec<Segment>,
    tail: Option<Cow<'static, str>>,
}

/// Remainder binder, appended to a pattern with `/`.
#[derive(Debug, Clone)]
pub struct Rest(Cow<'static, str>);

/// Returns the empty pattern, matching only `/` (or the empty path).
pub fn root() -> PathPattern {
    PathPattern::default()
}

/// Creates a remainder binder capturing all trailing segments under `name`.
pub fn rest(name: impl Into<Cow<'static, str>>) -> Rest {
    Rest(name.into())
}

impl PathPattern {
    /// Parses a pattern string.
    ///
    /// # Panics
    /// Panics if the pattern is malformed. Use [`parse`](Self::parse) to handle that as an error.
    pub fn new(pattern: &str) -> Self {
        match Self::parse(pattern) {
            Ok(pattern) => pattern,
            Err(err) => panic!("Wrong path pattern: {:?} {}", pattern, err),
        }
    }

    /// Parses a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let body = match pattern.strip_prefix('/') {
            Some(body) => body,
            None if pattern.is_empty() => pattern,
            None => {
                return Err(PatternError::MissingLeadingSlash {
                    pattern: pattern.to_owned(),
                })
            }
        };

        let raw_segments = split_pattern(body)?;
        let last_idx = raw_segments.len().saturating_sub(1);

        let mut parsed = PathPattern::default();

        for (idx, raw) in raw_segments.iter().enumerate() {
            match parse_segment(raw)? {
                Parsed::Segment(seg) => {
                    if let Some(name) = seg.name() {
                        parsed.check_name(name)?;
                    }
                    parsed.segments.push(seg);
                }

                Parsed::Tail(name) => {
                    if idx != last_idx {
                        return Err(PatternError::TailNotLast { name });
                    }
                    parsed.check_name(&name)?;
                    parsed.tail = Some(Cow::Owned(name));
                }
            }
        }

        Ok(parsed)
    }

    fn check_name(&self, name: &str) -> Result<(), PatternError> {
        let seen = self
            .segments
            .iter()
            .filter_map(Segment::name)
            .chain(self.tail.as_deref());

        for existing in seen {
            if existing == name {
                return Err(PatternError::DuplicateName {
                    name: name.to_owned(),
                });
            }
        }

        Ok(())
    }

    fn push(mut self, segment: Segment) -> Self {
        if let Some(tail) = &self.tail {
            panic!("can not append segment {} after remainder binder {:?}", segment, tail);
        }

        if let Some(name) = segment.name() {
            if let Err(err) = self.check_name(name) {
                panic!("{}", err);
            }
        }

        self.segments.push(segment);
        self
    }

    /// Appends a literal segment.
    ///
    /// # Panics
    /// Panics if the pattern already ends with a remainder binder.
    pub fn literal(self, literal: impl Into<String>) -> Self {
        self.push(Segment::Literal(literal.into()))
    }

    /// Appends a binder of the given kind.
    ///
    /// # Panics
    /// Panics if the pattern already ends with a remainder binder or `name` is already bound.
    pub fn bind(self, name: impl Into<Cow<'static, str>>, kind: SegmentKind) -> Self {
        self.push(Segment::Bind {
            name: name.into(),
            kind,
        })
    }

    /// Ends the pattern with a remainder binder.
    ///
    /// # Panics
    /// Panics if the pattern already ends with a remainder binder or `name` is already bound.
    pub fn rest(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();

        if let Some(tail) = &self.tail {
            panic!("can not append remainder {:?} after remainder binder {:?}", name, tail);
        }

        if let Err(err) = self.check_name(&name) {
            panic!("{}", err);
        }

        self.tail = Some(name);
        self
    }

    /// Returns the leading segment matchers.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns number of leading segment matchers, not counting the remainder.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if this pattern ends with a remainder binder.
    pub fn has_rest(&self) -> bool {
        self.tail.is_some()
    }

    /// Returns the name of the remainder binder, if any.
    pub fn rest_name(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Returns `true` if `path` matches this pattern.
    pub fn is_match(&self, path: &str) -> bool {
        self.capture(path).is_some()
    }

    /// Matches `path`, returning the bound values.
    ///
    /// Segments are percent-decoded before binders see them.
    pub fn capture(&self, path: &str) -> Option<Params> {
        self.capture_segments(&split_segments(path, true))
    }

    /// Like [`capture`](Self::capture) but binders see raw, still-encoded segments.
    pub fn capture_undecoded(&self, path: &str) -> Option<Params> {
        self.capture_segments(&split_segments(path, false))
    }

    pub(crate) fn capture_segments(&self, segments: &[Cow<'_, str>]) -> Option<Params> {
        let arity_ok = match self.tail {
            None => segments.len() == self.segments.len(),
            Some(_) => segments.len() >= self.segments.len(),
        };

        if !arity_ok {
            return None;
        }

        let mut params = Params::new();

        for (matcher, segment) in self.segments.iter().zip(segments) {
            if !matcher.try_match(segment, &mut params) {
                return None;
            }
        }

        if let Some(name) = &self.tail {
            let rest = segments[self.segments.len()..]
                .iter()
                .map(|seg| seg.clone().into_owned())
                .collect();

            params.add(name.clone(), Value::Segments(rest));
        }

        Some(params)
    }

    /// Builds a path from positional values, one per binder in pattern order.
    ///
    /// Values are checked against their binder and percent-encoded. A remainder value may be
    /// [`Value::Segments`] or a string, which is split on `/`; if no value is left for the
    /// remainder it is left empty.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_router::{PathPattern, Value};
    ///
    /// let pattern = PathPattern::new("/user/{id:int}/files/{path}*");
    ///
    /// let path = pattern.build_path([Value::Int(12), Value::from("a b/c.txt")]).unwrap();
    /// assert_eq!(path, "/user/12/files/a%20b/c.txt");
    ///
    /// assert!(pattern.build_path(["twelve"]).is_err());
    /// ```
    pub fn build_path<I>(&self, values: I) -> Result<String, UrlGenerationError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut values = values.into_iter().map(Into::into);

        self.render(|name, is_tail| match values.next() {
            Some(value) => Ok(value),
            None if is_tail => Ok(Value::Segments(Vec::new())),
            None => Err(missing(name)),
        })
    }

    /// Builds a path from named values.
    ///
    /// Unlike [`build_path`](Self::build_path), a missing remainder value is an error.
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashMap;
    /// use wayfinder_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/user/{id:int}/post/{title}");
    ///
    /// let mut map = HashMap::new();
    /// map.insert("id", "123");
    /// map.insert("title", "my-post");
    ///
    /// assert_eq!(pattern.build_path_from_map(&map).unwrap(), "/user/123/post/my-post");
    /// ```
    pub fn build_path_from_map<K, V, S>(
        &self,
        values: &HashMap<K, V, S>,
    ) -> Result<String, UrlGenerationError>
    where
        K: Borrow<str> + Eq + Hash,
        V: AsRef<str>,
        S: BuildHasher,
    {
        self.render(|name, _| {
            values
                .get(name)
                .map(|val| Value::from(val.as_ref()))
                .ok_or_else(|| missing(name))
        })
    }

    /// `next` is called once per binder in order, with `true` for the remainder binder.
    fn render<F>(&self, mut next: F) -> Result<String, UrlGenerationError>
    where
        F: FnMut(&str, bool) -> Result<Value, UrlGenerationError>,
    {
        let mut parts = Vec::with_capacity(self.segments.len() + 1);

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => parts.push(encode(lit)),

                Segment::Bind { name, kind } => {
                    let text = next(name, false)?.to_string();

                    if kind.try_extract(&text).is_none() {
                        return Err(UrlGenerationError::RejectedValue {
                            name: name.to_string(),
                            value: text,
                        });
                    }

                    parts.push(encode(&text));
                }
            }
        }

        if let Some(name) = &self.tail {
            match next(name, true)? {
                Value::Segments(segs) => parts.extend(segs.iter().map(|seg| encode(seg))),
                Value::Str(s) if s.is_empty() => {}
                Value::Str(s) => parts.extend(s.split('/').map(encode)),
                other => parts.push(encode(&other.to_string())),
            }
        }

        Ok(format!("/{}", parts.join("/")))
    }
}

fn missing(name: &str) -> UrlGenerationError {
    UrlGenerationError::MissingValue {
        name: name.to_owned(),
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

enum Parsed {
    Segment(Segment),
    Tail(String),
}

/// Splits on `/` outside of braces so binder regexes may contain `/` or nested braces.
fn split_pattern(body: &str) -> Result<Vec<&str>, PatternError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1).ok_or_else(|| PatternError::Malformed {
                    segment: body[start..=idx].to_owned(),
                })?;
            }
            '/' if depth == 0 => {
                segments.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(PatternError::Malformed {
            segment: body[start..].to_owned(),
        });
    }

    segments.push(&body[start..]);
    Ok(segments)
}

fn parse_segment(raw: &str) -> Result<Parsed, PatternError> {
    let malformed = || PatternError::Malformed {
        segment: raw.to_owned(),
    };

    if !raw.starts_with('{') {
        if raw.contains(['{', '}']) {
            return Err(malformed());
        }

        return Ok(Parsed::Segment(Segment::Literal(raw.to_owned())));
    }

    let (inner, is_tail) = match raw.strip_suffix("}*") {
        Some(inner) => (&inner[1..], true),
        None => match raw.strip_suffix('}') {
            Some(inner) => (&inner[1..], false),
            None => return Err(malformed()),
        },
    };

    let (name, ty) = match inner.split_once(':') {
        Some((name, ty)) => (name, Some(ty)),
        None => (inner, None),
    };

    if name.contains(['{', '}']) {
        return Err(malformed());
    }

    if name.is_empty() {
        return Err(PatternError::EmptyName {
            segment: raw.to_owned(),
        });
    }

    if is_tail {
        return match ty {
            None | Some("str") => Ok(Parsed::Tail(name.to_owned())),
            Some(_) => Err(PatternError::TypedTail {
                name: name.to_owned(),
            }),
        };
    }

    let kind = match ty {
        None => SegmentKind::Str,
        Some(ty) => match SegmentKind::from_type_name(ty) {
            Some(kind) => kind,
            None => SegmentKind::regex(ty)?,
        },
    };

    Ok(Parsed::Segment(Segment::Bind {
        name: Cow::Owned(name.to_owned()),
        kind,
    }))
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() && self.tail.is_none() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }

        if let Some(tail) = &self.tail {
            write!(f, "/{{{}}}*", tail)?;
        }

        Ok(())
    }
}

impl Div<&str> for PathPattern {
    type Output = PathPattern;

    fn div(self, literal: &str) -> PathPattern {
        self.literal(literal)
    }
}

impl Div<String> for PathPattern {
    type Output = PathPattern;

    fn div(self, literal: String) -> PathPattern {
        self.literal(literal)
    }
}

impl Div<Segment> for PathPattern {
    type Output = PathPattern;

    fn div(self, segment: Segment) -> PathPattern {
        self.push(segment)
    }
}

impl Div<Rest> for PathPattern {
    type Output = PathPattern;

    fn div(self, rest: Rest) -> PathPattern {
        self.rest(rest.0)
    }
}

/// Conversion into a [`PathPattern`], used by route constructors.
///
/// Strings are parsed with [`PathPattern::new`] and panic when malformed.
pub trait IntoPathPattern {
    /// Performs the conversion.
    fn into_path_pattern(self) -> PathPattern;
}

impl IntoPathPattern for PathPattern {
    fn into_path_pattern(self) -> PathPattern {
        self
    }
}

impl IntoPathPattern for &str {
    fn into_path_pattern(self) -> PathPattern {
        PathPattern::new(self)
    }
}

impl IntoPathPattern for &String {
    fn into_path_pattern(self) -> PathPattern {
        PathPattern::new(self)
    }
}

impl IntoPathPattern for String {
    fn into_path_pattern(self) -> PathPattern {
        PathPattern::new(&self)
    }
}

impl IntoPathPattern for ByteString {
    fn into_path_pattern(self) -> PathPattern {
        PathPattern::new(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boolean, int, long, str, uint};

    #[test]
    fn root_pattern() {
        let re = root();
        assert!(re.is_match("/"));
        assert!(re.is_match(""));
        assert!(!re.is_match("/a"));
        assert!(!re.is_match("//"));
        assert_eq!(re.to_string(), "/");

        let re = PathPattern::new("/");
        assert_eq!(re.segment_count(), 0);
        assert!(re.is_match(""));

        let re = PathPattern::new("");
        assert!(re.is_match("/"));
    }

    #[test]
    fn fixed_arity() {
        let re = root() / "user" / int("id");

        let params = re.capture("/user/12").unwrap();
        assert_eq!(params.get("id"), Some(&Value::Int(12)));

        assert!(!re.is_match("/user/abc"));
        assert!(!re.is_match("/user"));
        assert!(!re.is_match("/user/12/extra"));
        assert!(!re.is_match("/user/12/"));
        assert!(!re.is_match("/users/12"));
    }

    #[test]
    fn trailing_slash_is_a_segment() {
        let re = PathPattern::new("/user/");
        assert_eq!(re.segment_count(), 2);
        assert!(re.is_match("/user/"));
        assert!(!re.is_match("/user"));
        assert_eq!(re.to_string(), "/user/");
    }

    #[test]
    fn variable_arity() {
        let re = root() / "static" / rest("path");

        let params = re.capture("/static").unwrap();
        assert_eq!(params.get("path"), Some(&Value::Segments(vec![])));

        let params = re.capture("/static/css/site.css").unwrap();
        assert_eq!(params.typed::<Vec<String>>("path").unwrap(), ["css", "site.css"]);

        let params = re.capture("/static/").unwrap();
        assert_eq!(params.typed::<Vec<String>>("path").unwrap(), [""]);

        assert!(!re.is_match("/"));
        assert!(!re.is_match("/assets/css"));

        let everything = root() / rest("all");
        assert!(everything.is_match("/"));
        assert!(everything.is_match("/a/b/c"));
    }

    #[test]
    fn decoding() {
        let re = root() / "files" / str("name");

        let params = re.capture("/files/a%2Fb").unwrap();
        assert_eq!(params.get_str("name"), Some("a/b"));

        let params = re.capture_undecoded("/files/a%2Fb").unwrap();
        assert_eq!(params.get_str("name"), Some("a%2Fb"));

        let re = root() / "hello world";
        assert!(re.is_match("/hello%20world"));
        assert!(re.capture_undecoded("/hello%20world").is_none());
    }

    #[test]
    fn binder_types() {
        let re = PathPattern::new("/{a:int}/{b:long}/{c:uint}/{d:bool}/{e:str}");
        let params = re.capture("/-1/3000000000/7/true/x").unwrap();

        assert_eq!(params.get("a"), Some(&Value::Int(-1)));
        assert_eq!(params.get("b"), Some(&Value::Long(3_000_000_000)));
        assert_eq!(params.get("c"), Some(&Value::UInt(7)));
        assert_eq!(params.get("d"), Some(&Value::Bool(true)));
        assert_eq!(params.get("e"), Some(&Value::Str("x".to_owned())));

        assert!(!re.is_match("/3000000000/3000000000/7/true/x"));
        assert!(!re.is_match("/1/1/-7/true/x"));
        assert!(!re.is_match("/1/1/7/yes/x"));
    }

    #[test]
    fn uint_binder() {
        let re = root() / "n" / uint("n");
        assert_eq!(re.to_string(), "/n/{n:uint}");

        let params = re.capture("/n/18446744073709551615").unwrap();
        assert_eq!(params.get("n"), Some(&Value::UInt(u64::MAX)));

        assert!(!re.is_match("/n/-1"));
        assert!(!re.is_match("/n/x"));
    }

    #[test]
    fn dsl_matches_parsed() {
        let dsl = root() / "a" / long("id") / boolean("flag") / rest("tail");
        let parsed = PathPattern::new("/a/{id:long}/{flag:bool}/{tail}*");

        assert_eq!(dsl.to_string(), parsed.to_string());

        for path in ["/a/1/true", "/a/1/false/x/y", "/a/x/true", "/a/1"] {
            assert_eq!(dsl.capture(path), parsed.capture(path), "{}", path);
        }
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            PathPattern::parse("user"),
            Err(PatternError::MissingLeadingSlash { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/user/{id"),
            Err(PatternError::Malformed { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/user/id}"),
            Err(PatternError::Malformed { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/user-{id}"),
            Err(PatternError::Malformed { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/{id}x"),
            Err(PatternError::Malformed { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/{:int}"),
            Err(PatternError::EmptyName { .. })
        ));
        assert_eq!(
            PathPattern::parse("/{id}/{id}").unwrap_err(),
            PatternError::DuplicateName {
                name: "id".to_owned()
            }
        );
        assert!(matches!(
            PathPattern::parse("/{id}/{id}*"),
            Err(PatternError::DuplicateName { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/{tail}*/x"),
            Err(PatternError::TailNotLast { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/{tail:int}*"),
            Err(PatternError::TypedTail { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/{id:[0-9}"),
            Err(PatternError::Regex { .. })
        ));
        assert!(matches!(
            PathPattern::parse("/{id:(}"),
            Err(PatternError::Regex { .. })
        ));
    }

    #[test]
    #[should_panic = "Wrong path pattern"]
    fn new_panics() {
        PathPattern::new("/{id");
    }

    #[test]
    #[should_panic = "after remainder binder"]
    fn segment_after_rest_panics() {
        let _ = root() / rest("tail") / "more";
    }

    #[test]
    #[should_panic = "used more than once"]
    fn duplicate_dsl_name_panics() {
        let _ = root() / int("id") / str("id");
    }

    #[test]
    fn regex_binders() {
        assert!(matches!(
            PathPattern::parse("/v{n:\\d+}"),
            Err(PatternError::Malformed { .. })
        ));

        let re = PathPattern::new("/{version:v\\d+}/{slug:[a-z-]+}");
        let params = re.capture("/v2/hello-world").unwrap();
        assert_eq!(params.get_str("version"), Some("v2"));
        assert_eq!(params.get_str("slug"), Some("hello-world"));
        assert!(!re.is_match("/v2/Hello"));
        assert!(!re.is_match("/2/hello"));
        assert_eq!(re.to_string(), "/{version:v\\d+}/{slug:[a-z-]+}");
    }

    #[test]
    fn build_paths() {
        let re = PathPattern::new("/user/{id:int}/post/{title}");

        assert_eq!(
            re.build_path(["123", "my post"]).unwrap(),
            "/user/123/post/my%20post"
        );
        assert_eq!(
            re.build_path(["abc", "x"]).unwrap_err(),
            UrlGenerationError::RejectedValue {
                name: "id".to_owned(),
                value: "abc".to_owned(),
            }
        );
        assert_eq!(
            re.build_path(["1"]).unwrap_err(),
            UrlGenerationError::MissingValue {
                name: "title".to_owned()
            }
        );

        // slashes inside a single binder value are encoded
        assert_eq!(
            re.build_path([Value::Int(1), Value::from("a/b")]).unwrap(),
            "/user/1/post/a%2Fb"
        );

        assert_eq!(root().build_path(Vec::<Value>::new()).unwrap(), "/");
    }

    #[test]
    fn build_rest_paths() {
        let re = root() / "files" / rest("path");

        assert_eq!(re.build_path(Vec::<Value>::new()).unwrap(), "/files");
        assert_eq!(
            re.build_path([Value::Segments(vec!["a".into(), "b c".into()])])
                .unwrap(),
            "/files/a/b%20c"
        );
        assert_eq!(re.build_path(["x/y"]).unwrap(), "/files/x/y");

        let mut map = HashMap::new();
        assert_eq!(
            re.build_path_from_map(&map).unwrap_err(),
            UrlGenerationError::MissingValue {
                name: "path".to_owned()
            }
        );

        map.insert("path", "css/site.css");
        assert_eq!(re.build_path_from_map(&map).unwrap(), "/files/css/site.css");

        let built = re.build_path_from_map(&map).unwrap();
        assert!(re.is_match(&built));
    }

    #[test]
    fn into_path_pattern() {
        let from_str = "/a/{b}".into_path_pattern();
        let from_string = String::from("/a/{b}").into_path_pattern();
        let from_bytestring = ByteString::from_static("/a/{b}").into_path_pattern();
        let from_dsl = (root() / "a" / str("b")).into_path_pattern();

        for re in [from_str, from_string, from_bytestring, from_dsl] {
            assert_eq!(re.to_string(), "/a/{b}");
        }
    }
}
