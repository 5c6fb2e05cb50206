//! Property-based tests for digest and manifest invariants

mod chunking;
mod records;
