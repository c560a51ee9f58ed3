//! Various HTTP related types.

pub mod header;

pub use ::http::{uri, Method, StatusCode, Uri, Version};
