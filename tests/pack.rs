//! Pack loading and validation tests.

use std::fs;

use cardring::{Card, CardError, Pack, PackError};

fn write_pack(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn loads_valid_pack_in_file_order() {
    let file = write_pack("4\n3\n2\n1\n0\n1\n2\n3\n");
    let pack = Pack::from_path(file.path(), 1).unwrap();

    assert_eq!(pack.players(), 1);
    let values: Vec<u32> = pack.cards().iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![4, 3, 2, 1, 0, 1, 2, 3]);
}

#[test]
fn blank_lines_and_whitespace_are_ignored() {
    let text = "  1\n\n2  \n3\n\t4\n5\n\n6\n7\n8\n\n";
    let pack = Pack::from_reader(text.as_bytes(), 1).unwrap();
    assert_eq!(pack.len(), 8);
    assert_eq!(pack.cards()[3], Card::from(4));
}

#[test]
fn wrong_size_is_rejected() {
    let text = "1\n".repeat(15);
    let err = Pack::from_reader(text.as_bytes(), 2).unwrap_err();
    assert!(matches!(
        err,
        PackError::WrongSize {
            expected: 16,
            actual: 15
        }
    ));

    let cards = vec![Card::from(1); 17];
    assert!(matches!(
        Pack::from_cards(cards, 2),
        Err(PackError::WrongSize {
            expected: 16,
            actual: 17
        })
    ));
}

#[test]
fn non_integer_line_is_reported() {
    let err = Pack::from_reader("1\n2\nthree\n".as_bytes(), 1).unwrap_err();
    match err {
        PackError::NotAnInteger { line, token } => {
            assert_eq!(line, 3);
            assert_eq!(token, "three");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        Pack::from_reader("1.5\n".as_bytes(), 1),
        Err(PackError::NotAnInteger { line: 1, .. })
    ));
}

#[test]
fn negative_value_is_reported() {
    let err = Pack::from_reader("1\n\n-4\n".as_bytes(), 1).unwrap_err();
    assert!(matches!(
        err,
        PackError::InvalidCard {
            line: 3,
            source: CardError::InvalidValue(-4)
        }
    ));
    assert_eq!(
        err.to_string(),
        "line 3: card value must be a non-negative integer, got -4"
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = Pack::from_path(&path, 1).unwrap_err();
    assert!(matches!(err, PackError::Io { path: ref p, .. } if *p == path));
}

#[test]
fn zero_players_is_rejected() {
    assert!(matches!(
        Pack::from_reader("".as_bytes(), 0),
        Err(PackError::NoPlayers)
    ));
    assert!(matches!(
        Pack::from_cards(Vec::new(), 0),
        Err(PackError::NoPlayers)
    ));
}

#[test]
fn generated_pack_is_seeded_and_complete() {
    let a = Pack::generate(4, 11);
    let b = Pack::generate(4, 11);
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);

    let mut values: Vec<u32> = a.cards().iter().map(|c| c.value()).collect();
    values.sort_unstable();
    let expected: Vec<u32> = (1..=4).flat_map(|v| [v; 8]).collect();
    assert_eq!(values, expected);
}
