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

//! Pattern compiler tests
//!
//! Tests for turning mask strings into slot sequences:
//! - Literal vs placeholder classification
//! - Custom definitions
//! - Predicate de-duplication
//! - Unmask helpers (accepts / has_literal)

use crate::core::{
    compiler::compile,
    types::{DefinitionTable, MaskDefinition, Predicate, Slot, SlotKind},
};

#[test]
fn test_slot_count_matches_pattern_length() {
    let pattern = compile("(000) 000-0000", &DefinitionTable::default());
    assert_eq!(pattern.len(), 14);
    assert_eq!(pattern.source(), "(000) 000-0000");
}

#[test]
fn test_classifies_slots() {
    let pattern = compile("0-A", &DefinitionTable::default());
    let slots = pattern.slots();

    assert!(matches!(slots[0], Slot::Placeholder { key: '0', .. }));
    assert!(matches!(slots[1], Slot::Literal('-')));
    assert!(matches!(slots[2], Slot::Placeholder { key: 'A', .. }));
}

#[test]
fn test_unknown_characters_are_literals() {
    let pattern = compile("$$/$$", &DefinitionTable::default());
    assert!(pattern.slots().iter().all(Slot::is_literal));
    assert!(pattern.predicates().is_empty());
}

#[test]
fn test_custom_definition_makes_placeholder() {
    let mut table = DefinitionTable::default();
    table.insert('$', MaskDefinition::new(Predicate::Digit));

    let pattern = compile("$$/$$", &table);
    let literals = pattern.slots().iter().filter(|s| s.is_literal()).count();
    assert_eq!(literals, 1);
}

#[test]
fn test_optional_slots_occupy_a_position() {
    let pattern = compile("99-00", &DefinitionTable::default());
    assert_eq!(pattern.len(), 5);
    assert!(matches!(
        &pattern.slots()[0],
        Slot::Placeholder { definition, .. } if definition.optional
    ));
}

#[test]
fn test_duplicate_predicates_collapsed() {
    // '0' and '9' share the digit predicate
    let pattern = compile("0099AA", &DefinitionTable::default());
    assert_eq!(pattern.predicates().len(), 2);
    assert_eq!(pattern.accepted_classes(), "[0-9]|[a-zA-Z]");
}

#[test]
fn test_only_used_predicates_are_collected() {
    let pattern = compile("00/00", &DefinitionTable::default());
    assert!(pattern.accepts('5'));
    assert!(!pattern.accepts('a'));
}

#[test]
fn test_has_literal() {
    let pattern = compile("(000) 000-0000", &DefinitionTable::default());
    assert!(pattern.has_literal('('));
    assert!(pattern.has_literal(' '));
    assert!(pattern.has_literal('-'));
    assert!(!pattern.has_literal('/'));
}

#[test]
fn test_describe() {
    let pattern = compile("0.", &DefinitionTable::default());
    assert_eq!(
        pattern.describe(),
        vec![
            SlotKind::Placeholder {
                key: '0',
                class: "[0-9]".to_string(),
                optional: false,
            },
            SlotKind::Literal { char: '.' },
        ]
    );
}

#[test]
fn test_empty_pattern_compiles_to_nothing() {
    let pattern = compile("", &DefinitionTable::default());
    assert!(pattern.is_empty());
}

#[test]
fn test_describe_serializes_tagged_slots() {
    let pattern = compile("0-", &DefinitionTable::default());
    let json = serde_json::to_string(&pattern.describe()).unwrap();

    assert_eq!(
        json,
        r#"[{"kind":"placeholder","key":"0","class":"[0-9]","optional":false},{"kind":"literal","char":"-"}]"#
    );
}
