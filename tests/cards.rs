//! Card, deck, hand, and dealer policy tests.

use blackjack_engine::{
    Card, DEALER_STANDS_ON, DECK_SIZE, Dealer, Deck, DeckError, Hand, Outcome, SCORE_LIMIT, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand(ranks: &[u8]) -> Hand {
    ranks
        .iter()
        .enumerate()
        .map(|(index, &rank)| card(Suit::ALL[index % 4], rank))
        .collect()
}

fn faces(deck: &Deck) -> Vec<(u8, u8)> {
    let mut faces: Vec<(u8, u8)> = deck.iter().map(|c| (c.suit as u8, c.rank)).collect();
    faces.sort_unstable();
    faces
}

#[test]
fn new_deck_holds_52_unique_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut unique = faces(&deck);
    unique.dedup();
    assert_eq!(unique.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation() {
    let canonical = faces(&Deck::new());

    for seed in 0..20 {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(faces(&deck), canonical);
    }
}

#[test]
fn shuffle_depends_on_seed() {
    let mut first = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(1));
    let mut second = Deck::new();
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(2));
    let mut again = Deck::new();
    again.shuffle(&mut ChaCha8Rng::seed_from_u64(1));

    assert_ne!(first, second);
    assert_eq!(first, again);
}

#[test]
fn shuffle_spreads_each_card_over_the_top_position() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let rounds = 5200;
    let mut top_counts = [0_u32; DECK_SIZE];

    for _ in 0..rounds {
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        let top = deck.draw().unwrap();
        let index = top.suit as usize * 13 + (top.rank as usize - 1);
        top_counts[index] += 1;
    }

    // Expected 100 per card.
    for count in top_counts {
        assert!((50..=150).contains(&count), "biased count {count}");
    }
}

#[test]
fn draw_takes_from_the_front_until_empty() {
    let mut deck = Deck::stacked(&[card(Suit::Hearts, 3), card(Suit::Clubs, 12)]).unwrap();

    assert_eq!(deck.iter().next(), Some(&card(Suit::Hearts, 3)));
    assert_eq!(deck.draw(), Ok(card(Suit::Hearts, 3)));
    assert_eq!(deck.draw(), Ok(card(Suit::Clubs, 12)));
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));
}

#[test]
fn stacked_deck_rejects_duplicates() {
    let hidden = card(Suit::Spades, 1).face_down();
    assert_eq!(
        Deck::stacked(&[card(Suit::Spades, 1), card(Suit::Hearts, 2), hidden]).unwrap_err(),
        DeckError::DuplicateCard
    );
}

#[test]
fn card_display_and_orientation() {
    assert_eq!(card(Suit::Spades, 1).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "Q♦");
    assert_eq!(card(Suit::Clubs, 7).to_string(), "7♣");

    let mut hole = card(Suit::Clubs, 13).face_down();
    assert!(!hole.is_face_up());
    hole.reveal();
    assert!(hole.is_face_up());
    assert_eq!(hole, card(Suit::Clubs, 13));
}

#[test]
fn aces_count_high_until_they_would_bust() {
    assert_eq!(hand(&[1, 6]).score(), 17);
    assert!(hand(&[1, 6]).is_soft());
    assert_eq!(hand(&[1, 6, 10]).score(), 17);
    assert!(!hand(&[1, 6, 10]).is_soft());
    assert_eq!(hand(&[1, 1]).score(), 12);
    assert_eq!(hand(&[1, 1, 9]).score(), 21);
    assert_eq!(hand(&[1, 1, 1, 1]).score(), 14);
    assert_eq!(hand(&[13, 12, 5]).score(), 25);
    assert!(hand(&[13, 12, 5]).is_bust());
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(hand(&[1, 13]).is_blackjack());
    assert!(hand(&[10, 1]).is_blackjack());
    assert!(!hand(&[7, 7, 7]).is_blackjack());
    assert_eq!(hand(&[7, 7, 7]).score(), 21);
    assert!(!hand(&[10, 10]).is_blackjack());
}

#[test]
fn single_ace_counts_as_eleven_only_when_safe() {
    for others in 2..=30_u8 {
        let mut ranks = match others {
            2..=10 => vec![others],
            11 => vec![9, 2],
            12..=20 => vec![10, others - 10],
            21 => vec![10, 9, 2],
            _ => vec![10, 10, others - 20],
        };
        ranks.push(1);

        let expected = if others + 11 <= SCORE_LIMIT {
            others + 11
        } else {
            others + 1
        };
        assert_eq!(hand(&ranks).score(), expected, "ranks {ranks:?}");
    }
}

#[test]
fn score_ignores_card_order() {
    let hands: [&[u8]; 6] = [
        &[1, 6, 10],
        &[1, 1, 9],
        &[13, 1, 1, 5],
        &[2, 3, 4, 1, 12],
        &[10, 10, 2],
        &[1, 1, 1, 8],
    ];

    for ranks in hands {
        let expected = hand(ranks).score();
        let mut order = ranks.to_vec();
        for _ in 0..order.len() {
            order.rotate_left(1);
            assert_eq!(hand(&order).score(), expected);
            let reversed: Vec<u8> = order.iter().rev().copied().collect();
            assert_eq!(hand(&reversed).score(), expected);
        }
    }
}

#[test]
fn visible_score_skips_face_down_cards() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Clubs, 6).face_down());

    assert_eq!(hand.visible_score(), 11);
    assert_eq!(hand.score(), 17);

    assert!(hand.reveal_all());
    assert_eq!(hand.visible_score(), 17);
    assert!(!hand.reveal_all());
}

#[test]
fn dealer_stops_exactly_at_17_or_bust() {
    for seed in 0..300 {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut dealer = Dealer::new();
        dealer.take_up_card(deck.draw().unwrap());
        dealer.take_hole_card(deck.draw().unwrap());
        assert!(!dealer.is_hole_revealed());

        let drawn = dealer.play(&mut deck).unwrap();
        let cards = dealer.hand().cards();
        assert!(dealer.is_hole_revealed());
        assert_eq!(cards.len(), 2 + drawn.len());
        assert!(dealer.hand().score() >= DEALER_STANDS_ON);

        // Every hand the dealer drew to was below 17.
        for len in 2..cards.len() {
            let prefix: Hand = cards[..len].iter().copied().collect();
            assert!(prefix.score() < DEALER_STANDS_ON);
        }
    }
}

#[test]
fn dealer_play_reports_empty_deck() {
    let mut deck = Deck::stacked(&[card(Suit::Hearts, 2)]).unwrap();
    let mut dealer = Dealer::new();
    dealer.take_up_card(card(Suit::Clubs, 5));
    dealer.take_hole_card(card(Suit::Spades, 4));

    assert_eq!(dealer.play(&mut deck), Err(DeckError::Empty));
    assert_eq!(dealer.hand().len(), 3);
}

#[test]
fn outcome_resolution() {
    assert_eq!(Outcome::resolve(20, 18, 21), Outcome::PlayerWin);
    assert_eq!(Outcome::resolve(12, 22, 21), Outcome::PlayerWin);
    assert_eq!(Outcome::resolve(18, 18, 21), Outcome::Push);
    assert_eq!(Outcome::resolve(17, 18, 21), Outcome::DealerWin);
    assert_eq!(Outcome::resolve(22, 22, 21), Outcome::DealerWin);
    assert_eq!(Outcome::resolve(22, 17, 21), Outcome::DealerWin);
}

#[test]
fn stacked_deck_rejects_impossible_ranks() {
    assert_eq!(
        Deck::stacked(&[card(Suit::Hearts, 0)]).unwrap_err(),
        DeckError::InvalidCard
    );
    assert_eq!(
        Deck::stacked(&[card(Suit::Hearts, 2), card(Suit::Clubs, 14)]).unwrap_err(),
        DeckError::InvalidCard
    );
    assert!(Deck::stacked(&[card(Suit::Hearts, 1), card(Suit::Clubs, 13)]).is_ok());
}
