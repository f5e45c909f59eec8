use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Drawing from an exhausted deck. Recoverable: the caller decides whether
/// to reshuffle, start a new round, or abort.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("deck is empty")]
pub struct EmptyDeckError;

/// A standard 52-card deck.
///
/// Owned by a single game session; draws pop from the top, so the deck
/// should be shuffled before dealing.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 52-card deck: every rank 2-14 crossed with every suit.
    ///
    /// ```
    /// use cardlib::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle with the thread RNG.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw().ok()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        // distinctness is on the full (rank, suit) identity, not rank-only
        // card equality
        let ids: BTreeSet<(Rank, Suit)> = d.cards.iter().map(|c| c.to_tuple()).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        let ids1: Vec<_> = d1.cards.iter().map(|c| c.to_tuple()).collect();
        let ids2: Vec<_> = d2.cards.iter().map(|c| c.to_tuple()).collect();
        assert_eq!(ids1, ids2);
    }

    #[test]
    fn shuffle_keeps_all_cards() {
        let mut d = Deck::standard();
        d.shuffle();
        assert_eq!(d.len(), 52);
        let ids: BTreeSet<(Rank, Suit)> = d.cards.iter().map(|c| c.to_tuple()).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn draw_reduces_length_and_returns_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.draw().unwrap();
        let c2 = d.draw().unwrap();
        assert_ne!(c1.to_tuple(), c2.to_tuple());
        assert_eq!(d.len(), 50);
        let hand = d.draw_n(5);
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn exhausted_deck_fails_to_draw() {
        let mut d = Deck::standard();
        for _ in 0..52 {
            d.draw().unwrap();
        }
        assert!(d.is_empty());
        assert_eq!(d.draw(), Err(EmptyDeckError));
        // still failing on repeated attempts
        assert_eq!(d.draw(), Err(EmptyDeckError));
    }
}
