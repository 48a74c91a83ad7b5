use crate::core::types::{
    DefinitionError, DefinitionTable, InvalidCharacter, MaskDefinition, Predicate, Slot, SlotKind,
};

#[test]
fn test_builtin_predicates() {
    assert!(Predicate::Digit.matches('7'));
    assert!(!Predicate::Digit.matches('a'));
    assert!(Predicate::Letter.matches('Q'));
    assert!(!Predicate::Letter.matches('1'));
    assert!(Predicate::Alphanumeric.matches('z'));
    assert!(Predicate::Alphanumeric.matches('0'));
    assert!(!Predicate::Alphanumeric.matches('-'));
}

#[test]
fn test_builtin_classes_are_ascii_only() {
    // Arabic-Indic digit and accented letter are outside the classes
    assert!(!Predicate::Digit.matches('٣'));
    assert!(!Predicate::Letter.matches('é'));
}

#[test]
fn test_regex_predicate() {
    let hex = Predicate::pattern("[0-9a-fA-F]").unwrap();
    assert!(hex.matches('b'));
    assert!(hex.matches('F'));
    assert!(!hex.matches('g'));
    assert_eq!(hex.source(), "[0-9a-fA-F]");
}

#[test]
fn test_invalid_regex_rejected() {
    let result = Predicate::pattern("[0-9");
    assert!(matches!(
        result,
        Err(DefinitionError::InvalidPattern { ref pattern, .. }) if pattern == "[0-9"
    ));
}

#[test]
fn test_predicates_compare_by_source() {
    assert_eq!(Predicate::Digit, Predicate::pattern("[0-9]").unwrap());
    assert_ne!(Predicate::Digit, Predicate::Letter);
}

#[test]
fn test_default_table_has_builtins() {
    let table = DefinitionTable::default();
    assert_eq!(table.len(), 4);

    assert_eq!(table.get('0'), Some(&MaskDefinition::new(Predicate::Digit)));
    assert_eq!(table.get('9'), Some(&MaskDefinition::optional(Predicate::Digit)));
    assert_eq!(table.get('A'), Some(&MaskDefinition::new(Predicate::Letter)));
    assert_eq!(table.get('Z'), Some(&MaskDefinition::new(Predicate::Alphanumeric)));
    assert!(!table.contains('$'));
}

#[test]
fn test_merge_caller_wins() {
    let mut table = DefinitionTable::default();

    let mut overrides = DefinitionTable::empty();
    overrides.insert('A', MaskDefinition::from_pattern("[A-Z]").unwrap());
    overrides.insert('$', MaskDefinition::new(Predicate::Digit));

    table.merge(&overrides);

    assert_eq!(table.len(), 5);
    assert_eq!(table.get('A').unwrap().predicate.source(), "[A-Z]");
    assert!(table.contains('$'));
}

#[test]
fn test_slot_kind() {
    let literal = Slot::Literal('-');
    assert!(literal.is_literal());
    assert_eq!(literal.kind(), SlotKind::Literal { char: '-' });

    let placeholder = Slot::Placeholder {
        key: '9',
        definition: MaskDefinition::optional(Predicate::Digit),
    };
    assert!(!placeholder.is_literal());
    assert_eq!(
        placeholder.kind(),
        SlotKind::Placeholder {
            key: '9',
            class: "[0-9]".to_string(),
            optional: true,
        }
    );
}

#[test]
fn test_invalid_character_message() {
    let invalid = InvalidCharacter {
        character: 'x',
        position: 3,
        pattern: "[0-9]".to_string(),
    };

    assert_eq!(
        invalid.message(),
        "The character x does not match this pattern: [0-9]"
    );
    assert_eq!(format!("{}", invalid), invalid.message());
}
