//! Deck queue, locking, and wake-up tests.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use cardring::{Card, DeckPair, GameCoordinator};

const TIMEOUT: Duration = Duration::from_secs(5);

fn card(value: u32) -> Card {
    Card::from(value)
}

#[test]
fn deck_is_fifo() {
    let coordinator = GameCoordinator::new(1);
    let deck = coordinator.deck(1).unwrap();
    deck.push(card(1));
    deck.push(card(2));
    deck.push(card(3));

    assert_eq!(deck.try_take_first(), Some(card(1)));
    assert_eq!(deck.try_take_first(), Some(card(2)));
    assert_eq!(deck.try_take_first(), Some(card(3)));
    assert_eq!(deck.try_take_first(), None);
}

#[test]
fn snapshot_is_independent_copy() {
    let coordinator = GameCoordinator::new(1);
    let deck = coordinator.deck(1).unwrap();
    deck.push(card(7));
    deck.push(card(8));

    let mut copy = deck.snapshot();
    copy.clear();
    assert_eq!(deck.snapshot(), vec![card(7), card(8)]);
    assert_eq!(deck.len(), 2);
}

#[test]
fn guard_operations_share_the_lock() {
    let coordinator = GameCoordinator::new(1);
    let deck = coordinator.deck(1).unwrap();

    let mut guard = deck.acquire_exclusive();
    assert_eq!(guard.deck_id(), 1);
    guard.push(card(4));
    guard.push(card(9));
    assert_eq!(guard.try_take_first(), Some(card(4)));
    assert_eq!(guard.len(), 1);
    guard.release();

    assert_eq!(deck.snapshot(), vec![card(9)]);
}

#[test]
fn coordinator_numbers_decks_from_one() {
    let coordinator = GameCoordinator::new(3);
    let ids: Vec<usize> = coordinator.decks().iter().map(|d| d.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(coordinator.deck(0).is_none());
    assert!(coordinator.deck(4).is_none());
    assert_eq!(coordinator.deck(2).map(|d| d.id()), Some(2));
}

#[test]
fn wait_returns_immediately_when_cards_present() {
    let coordinator = GameCoordinator::new(1);
    let deck = coordinator.deck(1).unwrap();
    deck.push(card(1));
    assert!(deck.wait_until_ready_or_game_ended());
}

#[test]
fn wait_wakes_on_push() {
    let coordinator = GameCoordinator::new(1);
    let deck = coordinator.deck(1).unwrap();
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        scope.spawn(|| {
            let ready = deck.wait_until_ready_or_game_ended();
            tx.send(ready).unwrap();
        });
        thread::sleep(Duration::from_millis(50));
        deck.push(card(5));
        assert_eq!(rx.recv_timeout(TIMEOUT), Ok(true));
    });
}

#[test]
fn wait_wakes_on_win_without_cards() {
    let coordinator = GameCoordinator::new(2);
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for deck in coordinator.decks() {
            let tx = tx.clone();
            scope.spawn(move || {
                tx.send(deck.wait_until_ready_or_game_ended()).unwrap();
            });
        }
        thread::sleep(Duration::from_millis(50));
        assert!(coordinator.declare_win_if_first(1));
        assert_eq!(rx.recv_timeout(TIMEOUT), Ok(false));
        assert_eq!(rx.recv_timeout(TIMEOUT), Ok(false));
    });
}

#[test]
fn wait_after_game_end_does_not_block() {
    let coordinator = GameCoordinator::new(1);
    assert!(coordinator.abandon());
    assert!(!coordinator.deck(1).unwrap().wait_until_ready_or_game_ended());
}

#[test]
fn pair_moves_card_from_left_to_right() {
    let coordinator = GameCoordinator::new(2);
    let left = coordinator.deck(2).unwrap();
    let right = coordinator.deck(1).unwrap();
    left.push(card(6));

    let mut pair = DeckPair::acquire(left, right);
    let drawn = pair.take_from_left().unwrap();
    pair.push_to_right(drawn);
    assert_eq!(pair.take_from_left(), None);
    pair.release();

    assert!(left.is_empty());
    assert_eq!(right.snapshot(), vec![card(6)]);
}

#[test]
fn pair_on_a_single_deck_takes_one_lock() {
    let coordinator = GameCoordinator::new(1);
    let deck = coordinator.deck(1).unwrap();
    deck.push(card(1));
    deck.push(card(2));

    let mut pair = DeckPair::acquire(deck, deck);
    assert!(matches!(pair, DeckPair::Shared(_)));
    let drawn = pair.take_from_left().unwrap();
    pair.push_to_right(drawn);
    pair.release();

    assert_eq!(deck.snapshot(), vec![card(2), card(1)]);
}

#[test]
fn opposite_pairs_do_not_deadlock() {
    let coordinator = GameCoordinator::new(2);
    let (one, two) = (coordinator.deck(1).unwrap(), coordinator.deck(2).unwrap());
    for value in 0..4 {
        one.push(card(value));
        two.push(card(value));
    }
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        for (left, right) in [(one, two), (two, one)] {
            let tx = tx.clone();
            scope.spawn(move || {
                for _ in 0..10_000 {
                    let mut pair = DeckPair::acquire(left, right);
                    if let Some(card) = pair.take_from_left() {
                        pair.push_to_right(card);
                    }
                }
                tx.send(()).unwrap();
            });
        }
        assert!(rx.recv_timeout(TIMEOUT).is_ok());
        assert!(rx.recv_timeout(TIMEOUT).is_ok());
    });

    assert_eq!(one.len() + two.len(), 8);
}
