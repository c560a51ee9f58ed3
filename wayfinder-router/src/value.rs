use std::fmt;

/// A value bound by a path pattern.
///
/// Each segment binder produces one of these; the variant records which binder produced it. A
/// remainder binder always produces [`Value::Segments`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Raw (percent-decoded) segment text.
    Str(String),

    /// Segment parsed as a 32-bit signed integer.
    Int(i32),

    /// Segment parsed as a 64-bit signed integer.
    Long(i64),

    /// Segment parsed as a 64-bit unsigned integer.
    UInt(u64),

    /// Segment parsed as `true` or `false`.
    Bool(bool),

    /// Zero or more trailing segments captured by a remainder binder.
    Segments(Vec<String>),
}

impl Value {
    /// Returns the value as a string slice if it is [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the captured segments if this is [`Value::Segments`].
    pub fn as_segments(&self) -> Option<&[String]> {
        match self {
            Value::Segments(segs) => Some(segs),
            _ => None,
        }
    }

    /// Returns a short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::UInt(_) => "uint",
            Value::Bool(_) => "bool",
            Value::Segments(_) => "segments",
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::Int(n) => Some(n.into()),
            Value::Long(n) => Some(n.into()),
            Value::UInt(n) => Some(n.into()),
            _ => None,
        }
    }
}

/// Segments are joined with `/`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::UInt(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Segments(segs) => f.write_str(&segs.join("/")),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(segs: Vec<String>) -> Self {
        Value::Segments(segs)
    }
}

/// Typed retrieval of a bound [`Value`].
///
/// Integer targets accept any integer variant whose value fits. They do not parse
/// [`Value::Str`]; bind the segment with a numeric binder instead.
pub trait FromValue: Sized {
    /// Converts the value, returning `None` if it has an incompatible kind or does not fit.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! from_value_int {
    ($($tp:ty)+) => {
        $(
            impl FromValue for $tp {
                fn from_value(value: &Value) -> Option<Self> {
                    <$tp>::try_from(value.as_i128()?).ok()
                }
            }
        )+
    };
}

from_value_int!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match *value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }
}

/// Any scalar converts to its textual form; segments are joined with `/`.
impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.to_string())
    }
}

impl FromValue for Vec<String> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Segments(segs) => Some(segs.clone()),
            Value::Str(s) => Some(vec![s.clone()]),
            _ => None,
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}
