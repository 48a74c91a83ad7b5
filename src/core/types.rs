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

//! src/core/types.rs
//!
//! Core type definitions for input masking
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Predicate`: A character-class test attached to a placeholder
//! - `MaskDefinition`: A predicate plus its `optional` flag
//! - `DefinitionTable`: Placeholder key → definition, seeded with built-ins
//! - `Slot`: One compiled position of a mask pattern
//! - `MaskResult`: The outcome of a single masking pass
//! - `InvalidCharacter`: Report for a character dropped during masking

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while building custom definitions
#[derive(Debug, Error, PartialEq)]
pub enum DefinitionError {
    /// The supplied regex did not compile
    #[error("Invalid definition pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Character-class test used by a placeholder slot
///
/// The three built-in classes are ASCII-only, matching the single code unit
/// model of mask patterns. `Pattern` wraps a caller-supplied regex which is
/// tested against one character at a time.
#[derive(Clone, Debug)]
pub enum Predicate {
    /// `[0-9]`
    Digit,
    /// `[a-zA-Z]`
    Letter,
    /// `[a-zA-Z0-9]`
    Alphanumeric,
    /// Caller-supplied regex
    Pattern(Regex),
}

impl Predicate {
    /// Compile a predicate from regex source
    pub fn pattern(source: &str) -> Result<Self, DefinitionError> {
        Regex::new(source)
            .map(Predicate::Pattern)
            .map_err(|e| DefinitionError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns true if `c` satisfies this predicate
    pub fn matches(&self, c: char) -> bool {
        match self {
            Predicate::Digit => c.is_ascii_digit(),
            Predicate::Letter => c.is_ascii_alphabetic(),
            Predicate::Alphanumeric => c.is_ascii_alphanumeric(),
            Predicate::Pattern(regex) => {
                let mut buf = [0u8; 4];
                regex.is_match(c.encode_utf8(&mut buf))
            }
        }
    }

    /// Source text of the class, used for messages and de-duplication
    pub fn source(&self) -> &str {
        match self {
            Predicate::Digit => "[0-9]",
            Predicate::Letter => "[a-zA-Z]",
            Predicate::Alphanumeric => "[a-zA-Z0-9]",
            Predicate::Pattern(regex) => regex.as_str(),
        }
    }
}

impl PartialEq for Predicate {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
    }
}

impl Eq for Predicate {}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source())
    }
}

/// A named validation rule for one placeholder character
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MaskDefinition {
    /// Test applied to the candidate input character
    pub predicate: Predicate,

    /// Optional slots are skipped (not failed) when the next input
    /// character does not fit them
    pub optional: bool,
}

impl MaskDefinition {
    /// Create a required definition
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            optional: false,
        }
    }

    /// Create an optional definition
    pub fn optional(predicate: Predicate) -> Self {
        Self {
            predicate,
            optional: true,
        }
    }

    /// Create a required definition from regex source
    ///
    /// # Example
    /// ```
    /// use input_mask::MaskDefinition;
    ///
    /// let hex = MaskDefinition::from_pattern("[0-9a-fA-F]").unwrap();
    /// assert!(hex.predicate.matches('c'));
    /// assert!(!hex.predicate.matches('g'));
    /// ```
    pub fn from_pattern(source: &str) -> Result<Self, DefinitionError> {
        Predicate::pattern(source).map(Self::new)
    }
}

/// Mapping from placeholder character to its definition
///
/// `DefinitionTable::default()` holds the built-in set:
/// - `0`: digit
/// - `9`: optional digit
/// - `A`: letter
/// - `Z`: letter or digit
#[derive(Clone, Debug, PartialEq)]
pub struct DefinitionTable {
    entries: BTreeMap<char, MaskDefinition>,
}

impl DefinitionTable {
    /// A table with no definitions at all (every pattern char is literal)
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace a definition
    pub fn insert(&mut self, key: char, definition: MaskDefinition) -> Option<MaskDefinition> {
        self.entries.insert(key, definition)
    }

    /// Merge `other` over this table; entries in `other` win on collision
    pub fn merge(&mut self, other: &DefinitionTable) {
        for (key, definition) in &other.entries {
            self.entries.insert(*key, definition.clone());
        }
    }

    /// Look up the definition for a placeholder key
    pub fn get(&self, key: char) -> Option<&MaskDefinition> {
        self.entries.get(&key)
    }

    /// Returns true if `key` is a placeholder character
    pub fn contains(&self, key: char) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &MaskDefinition)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}

impl Default for DefinitionTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert('0', MaskDefinition::new(Predicate::Digit));
        table.insert('9', MaskDefinition::optional(Predicate::Digit));
        table.insert('A', MaskDefinition::new(Predicate::Letter));
        table.insert('Z', MaskDefinition::new(Predicate::Alphanumeric));
        table
    }
}

/// One compiled position of a mask pattern
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// Fixed character copied verbatim into the output
    Literal(char),

    /// Position that consumes one input character accepted by `definition`
    Placeholder {
        /// Pattern character this slot was compiled from
        key: char,
        definition: MaskDefinition,
    },
}

impl Slot {
    /// Serializable summary of this slot
    pub fn kind(&self) -> SlotKind {
        match self {
            Slot::Literal(c) => SlotKind::Literal { char: *c },
            Slot::Placeholder { key, definition } => SlotKind::Placeholder {
                key: *key,
                class: definition.predicate.source().to_string(),
                optional: definition.optional,
            },
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Slot::Literal(_))
    }
}

/// Serializable view of a [`Slot`]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlotKind {
    Literal { char: char },
    Placeholder { key: char, class: String, optional: bool },
}

/// Outcome of a single masking pass
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MaskResult {
    /// Formatted output, never longer than the pattern
    pub formatted: String,

    /// Caret offset into `formatted`, in chars
    pub caret: usize,

    /// True when every slot of the pattern is filled
    pub complete: bool,
}

/// A character removed from the raw input during masking
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InvalidCharacter {
    /// The rejected character
    pub character: char,

    /// Char offset of the character in the raw input
    pub position: usize,

    /// Class the character failed to satisfy
    pub pattern: String,
}

impl InvalidCharacter {
    /// Human-readable description
    pub fn message(&self) -> String {
        format!(
            "The character {} does not match this pattern: {}",
            self.character, self.pattern
        )
    }
}

impl fmt::Display for InvalidCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
