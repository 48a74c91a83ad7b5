use thiserror::Error;

/// Errors that can occur while constructing a mask.
///
/// Masking itself never fails; bad input degrades to the longest valid
/// prefix. Only configuration is checked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The mask pattern has no characters.
    #[error("Mask pattern is empty")]
    EmptyPattern,
}
