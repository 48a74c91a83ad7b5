// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/mod.rs
//!
//! Core masking logic
//!
//! This module contains the data structures and algorithms that turn raw
//! keystrokes into formatted values:
//! - Type definitions for predicates, definitions and slots
//! - Pattern compilation
//! - The alignment engine and caret placement
//! - Construction-time options and callbacks
//!
//! Nothing here touches files or a presentation layer, so everything can be
//! unit tested directly.

pub mod compiler;
pub mod engine;
pub mod error;
pub mod options;
pub mod types;

pub use compiler::{compile, Pattern};
pub use engine::{align, place_caret, Alignment, Mask};
pub use error::MaskError;
pub use options::{CompleteHandler, InvalidHandler, MaskOptions};
pub use types::*;

#[cfg(test)]
mod tests;
