use crate::binding::{MaskTarget, TextField};

#[test]
fn test_insert_advances_caret() {
    let mut field = TextField::new();
    field.insert('a');
    field.insert('c');
    field.move_left();
    field.insert('b');

    assert_eq!(field.value(), "abc");
    assert_eq!(field.caret(), 2);
}

#[test]
fn test_insert_str() {
    let mut field = TextField::with_value("15");
    field.move_to(1);
    field.insert_str("234");

    assert_eq!(field.value(), "12345");
    assert_eq!(field.caret(), 4);
}

#[test]
fn test_backspace_and_delete() {
    let mut field = TextField::with_value("abc");

    assert_eq!(field.backspace(), Some('c'));
    assert_eq!(field.value(), "ab");
    assert_eq!(field.delete(), None);

    field.move_to(0);
    assert_eq!(field.backspace(), None);
    assert_eq!(field.delete(), Some('a'));
    assert_eq!(field.value(), "b");
    assert_eq!(field.caret(), 0);
}

#[test]
fn test_multibyte_chars() {
    let mut field = TextField::with_value("né");
    assert_eq!(field.caret(), 2);

    field.move_left();
    field.insert('ü');
    assert_eq!(field.value(), "nüé");
    assert_eq!(field.backspace(), Some('ü'));
    assert_eq!(field.value(), "né");
}

#[test]
fn test_caret_clamped() {
    let mut field = TextField::with_value("12");
    field.move_to(10);
    assert_eq!(field.caret(), 2);

    field.move_right();
    assert_eq!(field.caret(), 2);

    // Shrinking the value pulls the caret back
    MaskTarget::set_value(&mut field, "1");
    assert_eq!(MaskTarget::caret(&field), Some(1));
}
