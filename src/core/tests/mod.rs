//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (predicates, definition tables, slots)
//! - Pattern compiler tests
//! - Masking engine tests
//! - Caret placement tests

#[cfg(test)]
mod compiler_tests;
#[cfg(test)]
mod types_tests;
