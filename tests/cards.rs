//! Card and hand rule tests.

use cardring::{Card, CardError, Hand};

fn card(value: u32) -> Card {
    Card::from(value)
}

fn hand_of(values: &[u32]) -> Hand {
    let mut hand = Hand::new();
    for &value in values {
        hand.add_card(card(value));
    }
    hand
}

#[test]
fn card_rejects_negative_values() {
    assert_eq!(Card::new(-1), Err(CardError::InvalidValue(-1)));
    assert_eq!(Card::new(0).map(Card::value), Ok(0));
    assert_eq!(Card::try_from(12_i64), Ok(card(12)));
    assert!(Card::new(i64::from(u32::MAX) + 1).is_err());
}

#[test]
fn cards_compare_by_value() {
    assert_eq!(card(3), card(3));
    assert!(card(2) < card(3));
    assert_eq!(card(42).to_string(), "42");
}

#[test]
fn winning_hand_needs_four_equal_cards() {
    assert!(hand_of(&[5, 5, 5, 5]).is_winning());
    assert!(!hand_of(&[5, 5, 5, 4]).is_winning());
    assert!(!hand_of(&[5, 5, 5]).is_winning());
    assert!(!hand_of(&[5, 5, 5, 5, 5]).is_winning());
    assert!(!Hand::new().is_winning());
}

#[test]
fn discard_takes_first_unwanted_card() {
    let mut hand = hand_of(&[3, 5, 3, 3]);
    assert_eq!(hand.choose_discard(3), Some(card(5)));
    assert_eq!(hand.cards(), &[card(3), card(3), card(3)]);

    let mut hand = hand_of(&[1, 2, 4, 1]);
    assert_eq!(hand.choose_discard(1), Some(card(2)));
    assert_eq!(hand.to_string(), "1 4 1");
}

#[test]
fn discard_falls_back_to_first_card() {
    let mut hand = hand_of(&[3, 3, 3, 3]);
    assert_eq!(hand.choose_discard(3), Some(card(3)));
    assert_eq!(hand.len(), 3);

    assert_eq!(Hand::new().choose_discard(3), None);
}

#[test]
fn hand_displays_space_separated_values() {
    assert_eq!(hand_of(&[1, 2, 1, 1, 3]).to_string(), "1 2 1 1 3");
    assert_eq!(Hand::new().to_string(), "");
}
