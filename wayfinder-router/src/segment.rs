use std::{borrow::Cow, fmt, sync::Arc};

use crate::{
    path::Params,
    pattern::PatternError,
    regex::{segment_regex, Regex},
    Value,
};

/// Extracts a typed value from a single path segment.
///
/// Returning `None` means "this segment does not match"; the pattern containing the binder fails
/// and routing moves on to the next pattern. Implementations should not panic on bad input.
///
/// Closures of the form `Fn(&str) -> Option<Value>` implement this trait.
///
/// # Examples
/// ```
/// use wayfinder_router::{bind, root, Value};
///
/// // matches only even numbers
/// let even = |seg: &str| {
///     seg.parse::<i64>()
///         .ok()
///         .filter(|n| n % 2 == 0)
///         .map(Value::Long)
/// };
///
/// let pattern = root() / "even" / bind("n", even);
/// assert!(pattern.is_match("/even/4"));
/// assert!(!pattern.is_match("/even/5"));
/// assert!(!pattern.is_match("/even/four"));
/// ```
pub trait SegmentExtractor: Send + Sync {
    /// Attempts to extract a value from `segment`.
    fn try_extract(&self, segment: &str) -> Option<Value>;
}

impl<F> SegmentExtractor for F
where
    F: Fn(&str) -> Option<Value> + Send + Sync,
{
    fn try_extract(&self, segment: &str) -> Option<Value> {
        (self)(segment)
    }
}

/// A regular expression a whole segment must match.
#[derive(Clone)]
pub struct SegmentRegex(Regex);

impl SegmentRegex {
    /// Returns the source expression, including the anchors added around it.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn source(&self) -> &str {
        let re = self.0.as_str();
        re.strip_prefix("^(?:")
            .and_then(|re| re.strip_suffix(")$"))
            .unwrap_or(re)
    }
}

impl fmt::Debug for SegmentRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SegmentRegex").field(&self.source()).finish()
    }
}

/// What a binder accepts and what it binds.
#[derive(Clone)]
#[non_exhaustive]
pub enum SegmentKind {
    /// Any segment, bound as [`Value::Str`].
    Str,

    /// Segments parsing as `i32`, bound as [`Value::Int`].
    Int,

    /// Segments parsing as `i64`, bound as [`Value::Long`].
    Long,

    /// Segments parsing as `u64`, bound as [`Value::UInt`].
    UInt,

    /// `true` or `false`, bound as [`Value::Bool`].
    Bool,

    /// Segments fully matching a regex, bound as [`Value::Str`].
    Regex(SegmentRegex),

    /// A user supplied extractor.
    Custom(Arc<dyn SegmentExtractor>),
}

impl SegmentKind {
    /// Creates a regex-constrained kind.
    pub fn regex(re: &str) -> Result<Self, PatternError> {
        segment_regex(re)
            .map(|re| SegmentKind::Regex(SegmentRegex(re)))
            .map_err(|err| PatternError::Regex {
                regex: re.to_owned(),
                reason: err.to_string(),
            })
    }

    /// Maps the type names used in pattern strings (`{id:int}`) to kinds.
    pub(crate) fn from_type_name(name: &str) -> Option<Self> {
        Some(match name {
            "str" => SegmentKind::Str,
            "int" => SegmentKind::Int,
            "long" => SegmentKind::Long,
            "uint" => SegmentKind::UInt,
            "bool" => SegmentKind::Bool,
            _ => return None,
        })
    }

    /// Attempts to extract a value from `segment`.
    pub fn try_extract(&self, segment: &str) -> Option<Value> {
        match self {
            SegmentKind::Str => Some(Value::Str(segment.to_owned())),
            SegmentKind::Int => segment.parse().ok().map(Value::Int),
            SegmentKind::Long => segment.parse().ok().map(Value::Long),
            SegmentKind::UInt => segment.parse().ok().map(Value::UInt),
            SegmentKind::Bool => segment.parse().ok().map(Value::Bool),
            SegmentKind::Regex(re) => re
                .0
                .is_match(segment)
                .then(|| Value::Str(segment.to_owned())),
            SegmentKind::Custom(ext) => ext.try_extract(segment),
        }
    }

    /// Type annotation used when rendering a pattern; `None` for plain string binders.
    fn annotation(&self) -> Option<Cow<'_, str>> {
        match self {
            SegmentKind::Str => None,
            SegmentKind::Int => Some(Cow::Borrowed("int")),
            SegmentKind::Long => Some(Cow::Borrowed("long")),
            SegmentKind::UInt => Some(Cow::Borrowed("uint")),
            SegmentKind::Bool => Some(Cow::Borrowed("bool")),
            SegmentKind::Regex(re) => Some(Cow::Borrowed(re.source())),
            SegmentKind::Custom(_) => Some(Cow::Borrowed("custom")),
        }
    }
}

impl fmt::Debug for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Str => f.write_str("Str"),
            SegmentKind::Int => f.write_str("Int"),
            SegmentKind::Long => f.write_str("Long"),
            SegmentKind::UInt => f.write_str("UInt"),
            SegmentKind::Bool => f.write_str("Bool"),
            SegmentKind::Regex(re) => f.debug_tuple("Regex").field(re).finish(),
            SegmentKind::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One element of a path pattern.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Matches one segment exactly.
    Literal(String),

    /// Matches one segment accepted by `kind`, binding the extracted value to `name`.
    Bind {
        /// Name the value is bound to.
        name: Cow<'static, str>,
        /// What the binder accepts.
        kind: SegmentKind,
    },
}

impl Segment {
    /// Matches `segment`, pushing any bound value into `params`.
    ///
    /// Returns `false` when the segment does not match.
    pub fn try_match(&self, segment: &str, params: &mut Params) -> bool {
        match self {
            Segment::Literal(lit) => lit == segment,
            Segment::Bind { name, kind } => match kind.try_extract(segment) {
                Some(value) => {
                    params.add(name.clone(), value);
                    true
                }
                None => false,
            },
        }
    }

    /// Returns the binder name, if this segment binds.
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Bind { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(lit) => f.write_str(lit),
            Segment::Bind { name, kind } => match kind.annotation() {
                Some(ann) => write!(f, "{{{}:{}}}", name, ann),
                None => write!(f, "{{{}}}", name),
            },
        }
    }
}

/// Binds any segment as a string.
pub fn str(name: impl Into<Cow<'static, str>>) -> Segment {
    Segment::Bind {
        name: name.into(),
        kind: SegmentKind::Str,
    }
}

/// Binds a segment parsing as `i32`.
pub fn int(name: impl Into<Cow<'static, str>>) -> Segment {
    Segment::Bind {
        name: name.into(),
        kind: SegmentKind::Int,
    }
}

/// Binds a segment parsing as `i64`.
pub fn long(name: impl Into<Cow<'static, str>>) -> Segment {
    Segment::Bind {
        name: name.into(),
        kind: SegmentKind::Long,
    }
}

/// Binds a segment parsing as `u64`.
pub fn uint(name: impl Into<Cow<'static, str>>) -> Segment {
    Segment::Bind {
        name: name.into(),
        kind: SegmentKind::UInt,
    }
}

/// Binds a `true`/`false` segment.
pub fn boolean(name: impl Into<Cow<'static, str>>) -> Segment {
    Segment::Bind {
        name: name.into(),
        kind: SegmentKind::Bool,
    }
}

/// Binds a segment using a custom extractor.
pub fn bind<E>(name: impl Into<Cow<'static, str>>, extractor: E) -> Segment
where
    E: SegmentExtractor + 'static,
{
    Segment::Bind {
        name: name.into(),
        kind: SegmentKind::Custom(Arc::new(extractor)),
    }
}

/// Binds a segment that fully matches the regular expression `re`.
///
/// # Panics
/// Panics if `re` is not a valid regular expression.
pub fn regex(name: impl Into<Cow<'static, str>>, re: &str) -> Segment {
    match SegmentKind::regex(re) {
        Ok(kind) => Segment::Bind {
            name: name.into(),
            kind,
        },
        Err(err) => panic!("{}", err),
    }
}
