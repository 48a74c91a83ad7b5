//! Binding module tests
//!
//! - Text field editing primitives
//! - Controller event routing, write-back and handlers

#[cfg(test)]
mod field_tests;
