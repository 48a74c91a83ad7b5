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

//! Construction-time options for a [`Mask`](crate::core::Mask)
//!
//! # Example
//!
//! ```
//! use input_mask::{Mask, MaskDefinition, MaskOptions, Predicate};
//!
//! let options = MaskOptions::new()
//!     .definition('$', MaskDefinition::new(Predicate::Digit))
//!     .on_complete(|value| println!("done: {value}"));
//!
//! let mut mask = Mask::with_options("$$/$$", options)?;
//! assert_eq!(mask.mask("1234"), "12/34");
//! # Ok::<(), input_mask::MaskError>(())
//! ```

use std::fmt;

use crate::core::types::{DefinitionTable, InvalidCharacter, MaskDefinition};

/// Callback receiving each rejected character
pub type InvalidHandler = Box<dyn FnMut(&InvalidCharacter)>;

/// Callback receiving the finished string
pub type CompleteHandler = Box<dyn FnMut(&str)>;

/// Options recognised when building a mask
pub struct MaskOptions {
    /// Definitions merged over the built-in set (these win on collision)
    pub definitions: DefinitionTable,

    /// Invoked once per rejected raw character, in removal order
    pub on_invalid: Option<InvalidHandler>,

    /// Invoked when a pass first produces a full-length output
    pub on_complete: Option<CompleteHandler>,

    /// Log rejected characters when no `on_invalid` handler is set
    pub show_error: bool,
}

impl MaskOptions {
    /// Options with no overrides and no callbacks
    pub fn new() -> Self {
        Self {
            definitions: DefinitionTable::empty(),
            on_invalid: None,
            on_complete: None,
            show_error: false,
        }
    }

    /// Add or override a single placeholder definition
    pub fn definition(mut self, key: char, definition: MaskDefinition) -> Self {
        self.definitions.insert(key, definition);
        self
    }

    /// Merge a whole table of definitions
    pub fn definitions(mut self, table: &DefinitionTable) -> Self {
        self.definitions.merge(table);
        self
    }

    pub fn on_invalid(mut self, handler: impl FnMut(&InvalidCharacter) + 'static) -> Self {
        self.on_invalid = Some(Box::new(handler));
        self
    }

    pub fn on_complete(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(handler));
        self
    }

    pub fn show_error(mut self, show: bool) -> Self {
        self.show_error = show;
        self
    }
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MaskOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskOptions")
            .field("definitions", &self.definitions)
            .field("on_invalid", &self.on_invalid.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .field("show_error", &self.show_error)
            .finish()
    }
}
