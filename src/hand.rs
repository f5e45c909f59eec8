use crate::cards::Card;
use crate::evaluator::{self, Evaluation};

/// A mutable, ordered collection of cards owned by one holder (a player's
/// pocket or the shared table).
///
/// ```
/// use cardlib::cards::{Card, Suit};
/// use cardlib::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::ace(Suit::Spades));
/// hand.add_card(Card::numbered(7, Suit::Hearts).unwrap());
/// hand.sort();
/// assert_eq!(hand.cards()[0].rank_value(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the cards at the given set of positions. Survivors keep their
    /// relative order. Duplicate and out-of-range indices are ignored.
    pub fn drop_cards(&mut self, indices: &[usize]) {
        let mut i = 0;
        self.cards.retain(|_| {
            let keep = !indices.contains(&i);
            i += 1;
            keep
        });
    }

    /// Sort the hand in place, ascending by rank value.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Evaluate the best poker hand reachable from this hand plus the shared
    /// table cards. Neither collection is mutated.
    ///
    /// ```
    /// use cardlib::cards::{Card, Suit};
    /// use cardlib::evaluator::Category;
    /// use cardlib::hand::Hand;
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::ace(Suit::Spades));
    /// hand.add_card(Card::ace(Suit::Hearts));
    /// let table = [Card::king(Suit::Clubs), Card::queen(Suit::Diamonds)];
    /// let eval = hand.best_poker_hand(&table);
    /// assert_eq!(eval.category(), Category::OnePair);
    /// ```
    pub fn best_poker_hand(&self, table_cards: &[Card]) -> Evaluation {
        evaluator::evaluate(&self.cards, table_cards)
    }
}
