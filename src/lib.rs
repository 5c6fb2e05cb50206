//! hcompare: record and verify MD5 digests for every file in a directory tree.
//!
//! A manifest is a text file with one record per regular file:
//! `<32 hex digest>\t<decimal size>\t<path>\n`. Creation walks a tree and writes
//! one record per file; verification re-digests each listed file using the
//! recorded size and reports mismatches.

pub mod api;
pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;
