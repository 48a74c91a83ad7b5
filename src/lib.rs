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

//! Input Mask
//!
//! Formats free-form keystrokes into fixed-shape values such as phone
//! numbers, dates or postal codes, while the user is still typing.
//!
//! # Features
//!
//! - **Pattern Compiler:** Turns `"(000) 000-0000"` into literal and placeholder slots
//! - **Literal Insertion:** Separators appear as soon as the user reaches them
//! - **Backspace Aware:** Deleting never re-inserts a trailing separator
//! - **Overflow Truncation:** Input past the end of the mask is discarded
//! - **Caret Tracking:** The caret lands where the user expects after reformatting
//! - **Profiles:** Named masks and custom definitions loaded from a config file
//!
//! # Architecture
//!
//! - **`core`:** Business logic (definitions, compiler, alignment engine, caret)
//! - **`config`:** Profile files (locating, parsing, building masks from them)
//! - **`binding`:** Editable surfaces and the controller that masks them
//!
//! # Examples
//!
//! ## Masking a value
//!
//! ```
//! use input_mask::Mask;
//!
//! let mut date = Mask::new("00/00/0000")?;
//! assert_eq!(date.mask("12"), "12/");
//! assert_eq!(date.mask("12345678"), "12/34/5678");
//! # Ok::<(), input_mask::MaskError>(())
//! ```
//!
//! ## Custom definitions and callbacks
//!
//! ```
//! use input_mask::{Mask, MaskDefinition, MaskOptions, Predicate};
//!
//! let options = MaskOptions::new()
//!     .definition('H', MaskDefinition::new(Predicate::pattern("[0-9a-fA-F]")?))
//!     .on_complete(|value| println!("complete: {}", value));
//!
//! let mut mac = Mask::with_options("HH:HH:HH", options)?;
//! assert_eq!(mac.mask("a1b2c3"), "a1:b2:c3");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Inspecting a compiled pattern
//!
//! ```
//! use input_mask::{compile, DefinitionTable, Slot};
//!
//! let pattern = compile("00-AA", &DefinitionTable::default());
//! assert_eq!(pattern.len(), 5);
//! assert_eq!(pattern.slots()[2], Slot::Literal('-'));
//! ```

pub mod binding;
pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use core::{
    compile, DefinitionTable, InvalidCharacter, Mask, MaskDefinition, MaskError, MaskOptions,
    MaskResult, Pattern, Predicate, Slot,
};
