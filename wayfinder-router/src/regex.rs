//! Abstraction over `regex` and `regex-lite` depending on whether we have `unicode` crate feature
//! enabled.

use cfg_if::cfg_if;

#[cfg(feature = "unicode")]
pub(crate) use regex::{Error, Regex};
#[cfg(not(feature = "unicode"))]
pub(crate) use regex_lite::{Error, Regex};

/// Compiles a regex that must match a whole path segment.
pub(crate) fn segment_regex(re: &str) -> Result<Regex, Error> {
    cfg_if! {
        if #[cfg(feature = "unicode")] {
            regex::Regex::new(&format!("^(?:{})$", re))
        } else {
            regex_lite::Regex::new(&format!("^(?:{})$", re))
        }
    }
}
