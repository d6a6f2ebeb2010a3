//! Storage module for decoded media files
//!
//! Turns client-embedded base64 data URIs into files under the managed
//! upload area and returns stable filesystem references.

mod media_store;

pub use media_store::{MediaCategory, MediaDecodeError, MediaStore};
