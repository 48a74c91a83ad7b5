//! Config module tests
//!
//! - Profile file parsing
//! - Loading profiles from disk
