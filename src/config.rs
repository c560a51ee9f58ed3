use std::borrow::Cow;

#[cfg(feature = "unicode")]
use regex::Regex;
#[cfg(not(feature = "unicode"))]
use regex_lite::Regex;

/// How a request path's slashes are treated before it is matched.
///
/// The default is `TrailingSlash::Strict`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingSlash {
    /// Match the path exactly as received; `/a/` and `/a` are different paths.
    #[default]
    Strict,

    /// Merge repeated slashes and trim trailing slashes from the end of the path.
    ///
    /// Using this will require all routes to omit trailing slashes for them to be accessible. The
    /// root path `/` is left as it is.
    Trim,

    /// Only merge repeated slashes, keeping a trailing slash if there is one.
    MergeOnly,
}

/// Router settings.
///
/// ```
/// use wayfinder::{RouterConfig, TrailingSlash};
///
/// let config = RouterConfig::default()
///     .trailing_slash(TrailingSlash::Trim)
///     .decode_segments(false);
///
/// assert_eq!(config.get_trailing_slash(), TrailingSlash::Trim);
/// assert!(!config.get_decode_segments());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    trailing_slash: TrailingSlash,
    decode_segments: bool,
}

impl RouterConfig {
    /// Sets how slashes in request paths are normalized before matching.
    pub fn trailing_slash(mut self, trailing_slash: TrailingSlash) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    /// Sets whether each path segment is percent-decoded after splitting. Defaults to `true`.
    ///
    /// Decoding happens after the path is split, so `%2F` never splits a segment.
    pub fn decode_segments(mut self, decode_segments: bool) -> Self {
        self.decode_segments = decode_segments;
        self
    }

    /// Returns the trailing slash behavior.
    pub fn get_trailing_slash(&self) -> TrailingSlash {
        self.trailing_slash
    }

    /// Returns whether path segments are percent-decoded.
    pub fn get_decode_segments(&self) -> bool {
        self.decode_segments
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            trailing_slash: TrailingSlash::Strict,
            decode_segments: true,
        }
    }
}

/// Applies a [`TrailingSlash`] behavior to request paths.
pub(crate) struct PathNormalizer {
    merge_slash: Regex,
    trailing_slash: TrailingSlash,
}

impl PathNormalizer {
    pub(crate) fn new(trailing_slash: TrailingSlash) -> Self {
        PathNormalizer {
            merge_slash: Regex::new("//+").expect("slash merging regex is valid"),
            trailing_slash,
        }
    }

    pub(crate) fn normalize<'a>(&self, path: &'a str) -> Cow<'a, str> {
        let merged = match self.trailing_slash {
            TrailingSlash::Strict => return Cow::Borrowed(path),
            TrailingSlash::Trim | TrailingSlash::MergeOnly => self.merge_slash.replace_all(path, "/"),
        };

        if self.trailing_slash != TrailingSlash::Trim {
            return merged;
        }

        let trimmed = merged.trim_end_matches('/');

        if trimmed.len() == merged.len() {
            merged
        } else if trimmed.is_empty() {
            Cow::Borrowed("/")
        } else {
            Cow::Owned(trimmed.to_owned())
        }
    }
}
