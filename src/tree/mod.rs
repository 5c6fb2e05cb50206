//! Directory traversal
//!
//! Walks a directory subtree depth-first and digests every regular file found.

pub mod path;
pub mod walker;
