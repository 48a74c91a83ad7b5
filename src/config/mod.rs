//! Mask profile configuration.
//!
//! This module locates and loads profile files that name reusable masks and
//! custom placeholder definitions. Key features:
//!
//! - **Default location**: `~/.config/input-mask/masks.conf`, tilde expanded
//! - **Two-pass parsing**: `$variables` first, then `define`/`mask` lines
//! - **Line-numbered errors**: Every syntax problem reports where it happened
//!
//! # Example
//!
//! ```no_run
//! use input_mask::config::load_profiles;
//!
//! let profiles = load_profiles(None)?;
//! let mut phone = profiles.mask("phone")?;
//! println!("{}", phone.mask("5551234567"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod profiles;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use profiles::{MaskProfile, ProfileSet};

/// Where profiles are read from when no path is given
pub const DEFAULT_PROFILE_PATH: &str = "~/.config/input-mask/masks.conf";

/// Expand `~` and environment variables in a profile path
///
/// Falls back to [`DEFAULT_PROFILE_PATH`] when `path` is `None`.
pub fn resolve_profile_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let raw = match path {
        Some(path) => path.to_str().ok_or_else(|| ConfigError::InvalidSyntax {
            line: 0,
            message: format!("Invalid path encoding: {}", path.display()),
        })?,
        None => DEFAULT_PROFILE_PATH,
    };

    let expanded = shellexpand::tilde(raw);
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Resolve and load a profile file
pub fn load_profiles(path: Option<&Path>) -> Result<ProfileSet, ConfigError> {
    let path = resolve_profile_path(path)?;
    ProfileSet::load(&path)
}

#[cfg(test)]
mod tests;
