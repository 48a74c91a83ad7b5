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

//! src/core/compiler.rs
//!
//! Mask pattern compiler
//!
//! Turns a mask string such as `(000) 000-0000` into an ordered slot
//! sequence. Every character is either a placeholder (its key exists in the
//! definition table) or a literal. There is no malformed pattern: unknown
//! characters are literals.

use tracing::debug;

use crate::core::types::{DefinitionTable, Predicate, Slot, SlotKind};

/// A compiled mask pattern
///
/// Immutable after [`compile`]. Holds one slot per pattern character plus the
/// de-duplicated predicates the pattern actually references, which the
/// engine uses for its coarse unmask filter.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    source: String,
    slots: Vec<Slot>,
    predicates: Vec<Predicate>,
}

impl Pattern {
    /// The mask string this pattern was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots (equals the pattern's char count)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Predicates referenced by at least one placeholder, without duplicates
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns true if `c` appears as a literal anywhere in the pattern
    pub fn has_literal(&self, c: char) -> bool {
        self.slots.iter().any(|slot| matches!(slot, Slot::Literal(l) if *l == c))
    }

    /// Returns true if `c` satisfies any placeholder of the pattern
    pub fn accepts(&self, c: char) -> bool {
        self.predicates.iter().any(|p| p.matches(c))
    }

    /// Combined class description used when reporting unmask rejections
    pub fn accepted_classes(&self) -> String {
        self.predicates
            .iter()
            .map(Predicate::source)
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Serializable description of every slot
    pub fn describe(&self) -> Vec<SlotKind> {
        self.slots.iter().map(Slot::kind).collect()
    }
}

/// Compile a mask pattern against a definition table
///
/// # Example
/// ```
/// use input_mask::{compile, DefinitionTable, Slot};
///
/// let pattern = compile("00-A", &DefinitionTable::default());
/// assert_eq!(pattern.len(), 4);
/// assert!(matches!(pattern.slots()[2], Slot::Literal('-')));
/// ```
pub fn compile(mask: &str, definitions: &DefinitionTable) -> Pattern {
    let mut predicates: Vec<Predicate> = Vec::new();

    let slots: Vec<Slot> = mask
        .chars()
        .map(|c| match definitions.get(c) {
            Some(definition) => {
                if !predicates.contains(&definition.predicate) {
                    predicates.push(definition.predicate.clone());
                }
                Slot::Placeholder {
                    key: c,
                    definition: definition.clone(),
                }
            }
            None => Slot::Literal(c),
        })
        .collect();

    debug!(
        mask,
        slots = slots.len(),
        classes = predicates.len(),
        "compiled mask pattern"
    );

    Pattern {
        source: mask.to_string(),
        slots,
        predicates,
    }
}
