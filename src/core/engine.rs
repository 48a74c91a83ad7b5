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

//! src/core/engine.rs
//!
//! Masking engine
//!
//! Aligns a raw input string against a compiled [`Pattern`] in a single
//! left-to-right pass:
//! 1. Unmask: drop characters that no placeholder (and no literal) accepts
//! 2. Alignment: walk the slots with a read cursor into what is left
//! 3. Truncation: input remaining after the last slot is discarded
//! 4. Completion: report when every slot is filled
//! 5. Caret: map the caller's caret into the formatted output
//!
//! The engine never returns an error for input; it always produces the
//! longest valid prefix it can.

use tracing::{trace, warn};

use crate::core::compiler::{compile, Pattern};
use crate::core::error::MaskError;
use crate::core::options::MaskOptions;
use crate::core::types::{DefinitionTable, InvalidCharacter, MaskResult, Slot};

/// Result of aligning raw input against a pattern, before any callbacks run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alignment {
    /// Emitted characters, at most one per slot
    pub output: Vec<char>,

    /// Raw input offset each output char came from (`None` for an
    /// auto-inserted literal)
    pub origins: Vec<Option<usize>>,

    /// Characters dropped during unmask and alignment, in removal order
    pub rejected: Vec<InvalidCharacter>,

    /// Number of valid characters discarded because the pattern was full
    pub overflow: usize,
}

impl Alignment {
    fn emit(&mut self, c: char, origin: Option<usize>) {
        self.output.push(c);
        self.origins.push(origin);
    }

    pub fn formatted(&self) -> String {
        self.output.iter().collect()
    }
}

/// Align `raw` against `pattern`
///
/// `previous_len` is the char length of the previous pass's output. Trailing
/// literals are only appended while the output is longer than that, so typing
/// forward auto-inserts separators while deleting backwards removes them.
pub fn align(pattern: &Pattern, raw: &str, previous_len: usize) -> Alignment {
    let mut alignment = Alignment::default();

    // Unmask: keep only characters that could satisfy some slot
    let mut input: Vec<(usize, char)> = Vec::with_capacity(raw.len());
    for (position, c) in raw.chars().enumerate() {
        if pattern.accepts(c) || pattern.has_literal(c) {
            input.push((position, c));
        } else {
            alignment.rejected.push(InvalidCharacter {
                character: c,
                position,
                pattern: pattern.accepted_classes(),
            });
        }
    }

    let mut cursor = 0;
    let mut stopped = false;

    'slots: for slot in pattern.slots() {
        match slot {
            Slot::Literal(literal) => match input.get(cursor) {
                Some(&(position, c)) if c == *literal => {
                    // User typed the separator themselves; don't duplicate it
                    cursor += 1;
                    alignment.emit(*literal, Some(position));
                }
                Some(_) => alignment.emit(*literal, None),
                None if alignment.output.len() > previous_len => {
                    alignment.emit(*literal, None);
                }
                None => {
                    stopped = true;
                    break 'slots;
                }
            },
            Slot::Placeholder { definition, .. } => loop {
                let Some(&(position, c)) = input.get(cursor) else {
                    // An optional slot with nothing left is skipped so the
                    // literals after it still get their growth check
                    if definition.optional {
                        continue 'slots;
                    }
                    stopped = true;
                    break 'slots;
                };

                if definition.predicate.matches(c) {
                    cursor += 1;
                    alignment.emit(c, Some(position));
                    break;
                }

                if definition.optional {
                    break;
                }

                // Drop the character and retry this slot with the next one
                alignment.rejected.push(InvalidCharacter {
                    character: c,
                    position,
                    pattern: definition.predicate.source().to_string(),
                });
                cursor += 1;
            },
        }
    }

    if !stopped {
        alignment.overflow = input.len() - cursor;
    }

    alignment
}

/// Place the caret in the formatted output
///
/// `raw_caret` is the caret offset (in chars) inside the raw input the pass
/// was given. The caret lands right after the last output char that came from
/// before it. When the output grew, it also skips literals the engine just
/// inserted at that spot.
pub fn place_caret(alignment: &Alignment, raw_caret: Option<usize>, previous_len: usize) -> usize {
    let len = alignment.output.len();
    let Some(raw_caret) = raw_caret else {
        return len;
    };

    let mut caret = alignment
        .origins
        .iter()
        .rposition(|origin| matches!(origin, Some(position) if *position < raw_caret))
        .map_or(0, |index| index + 1);

    if len > previous_len {
        while caret < len && alignment.origins[caret].is_none() {
            caret += 1;
        }
    }

    caret.min(len)
}

/// A mask instance bound to one editing session
///
/// Holds the compiled pattern together with the state of the previous pass,
/// which distinguishes typing forward from deleting.
///
/// # Example
/// ```
/// use input_mask::Mask;
///
/// let mut phone = Mask::new("(000) 000-0000")?;
/// assert_eq!(phone.mask("123"), "(123) ");
/// assert_eq!(phone.mask("1234567890"), "(123) 456-7890");
/// # Ok::<(), input_mask::MaskError>(())
/// ```
pub struct Mask {
    pattern: Pattern,
    options: MaskOptions,
    last_output: String,
    last_caret: usize,
}

impl Mask {
    /// Create a mask using the built-in definitions
    pub fn new(mask: &str) -> Result<Self, MaskError> {
        Self::with_options(mask, MaskOptions::new())
    }

    /// Create a mask with custom options
    ///
    /// `options.definitions` are merged over the built-in set.
    pub fn with_options(mask: &str, options: MaskOptions) -> Result<Self, MaskError> {
        let mut definitions = DefinitionTable::default();
        definitions.merge(&options.definitions);
        Self::from_pattern(compile(mask, &definitions), options)
    }

    /// Create a mask from an already compiled pattern
    pub fn from_pattern(pattern: Pattern, options: MaskOptions) -> Result<Self, MaskError> {
        if pattern.is_empty() {
            return Err(MaskError::EmptyPattern);
        }

        Ok(Self {
            pattern,
            options,
            last_output: String::new(),
            last_caret: 0,
        })
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Output of the most recent pass
    pub fn last_output(&self) -> &str {
        &self.last_output
    }

    /// Caret returned by the most recent pass
    pub fn last_caret(&self) -> usize {
        self.last_caret
    }

    /// Forget the previous pass, as if the mask was freshly created
    pub fn reset(&mut self) {
        self.last_output.clear();
        self.last_caret = 0;
    }

    /// Mask `raw` and return the formatted string
    pub fn mask(&mut self, raw: &str) -> String {
        self.mask_with_caret(raw, None).formatted
    }

    /// Mask `raw` with the caller's caret offset into it
    ///
    /// Pass `None` when there is no caret to track; the returned caret is then
    /// the end of the output.
    pub fn mask_with_caret(&mut self, raw: &str, caret: Option<usize>) -> MaskResult {
        let previous_len = self.last_output.chars().count();
        let alignment = align(&self.pattern, raw, previous_len);

        self.report_rejected(&alignment.rejected);

        if alignment.overflow > 0 {
            trace!(
                overflow = alignment.overflow,
                "discarded input past end of mask"
            );
        }

        let formatted = alignment.formatted();
        let caret = place_caret(&alignment, caret, previous_len);
        let complete = alignment.output.len() == self.pattern.len();

        if complete && formatted != self.last_output {
            if let Some(handler) = self.options.on_complete.as_mut() {
                handler(&formatted);
            }
        }

        self.last_output.clone_from(&formatted);
        self.last_caret = caret;

        MaskResult {
            formatted,
            caret,
            complete,
        }
    }

    fn report_rejected(&mut self, rejected: &[InvalidCharacter]) {
        for invalid in rejected {
            if let Some(handler) = self.options.on_invalid.as_mut() {
                handler(invalid);
            } else if self.options.show_error {
                warn!(
                    character = %invalid.character,
                    position = invalid.position,
                    "{}",
                    invalid.message()
                );
            }
        }
    }
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mask")
            .field("pattern", &self.pattern.source())
            .field("options", &self.options)
            .field("last_output", &self.last_output)
            .field("last_caret", &self.last_caret)
            .finish()
    }
}
