pub(crate) mod detectors;
pub(crate) mod pool;

use self::detectors::DETECTORS;
use self::pool::PoolAnalysis;
use crate::cards::{Card, Rank};
use core::cmp::Ordering;

/// Poker hand category. Discriminants are the conventional strength values,
/// so a higher number is a stronger hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether the tie-break rank participates when comparing two
    /// evaluations of this category.
    ///
    /// Inherited rule, preserved exactly: only the categories decided by
    /// rank multiplicities (and the high-card fallback) consult the
    /// tie-break. Straights, flushes, full houses and straight flushes of
    /// the same category compare equal even when one hand's qualifying
    /// cards are objectively higher.
    const fn compares_tie_break(self) -> bool {
        matches!(
            self,
            Category::HighCard
                | Category::OnePair
                | Category::TwoPair
                | Category::ThreeOfAKind
                | Category::FourOfAKind
        )
    }
}

/// The result of evaluating a card pool: the best category the pool reaches,
/// the pool-wide tie-break rank, and the cards that were considered.
///
/// Immutable once built; a fresh value is constructed per [`evaluate`] call.
/// Ordering is total over the `(category, effective tie-break)` key.
#[derive(Debug, Clone)]
pub struct Evaluation {
    category: Category,
    tie_break: Option<Rank>,
    cards: Vec<Card>,
}

impl Evaluation {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Highest rank in the evaluated pool; `None` only for an empty pool.
    pub fn tie_break(&self) -> Option<Rank> {
        self.tie_break
    }

    /// The merged pool this evaluation was computed from.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Compare against another evaluation to pick a winner or detect a tie.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn sort_key(&self) -> (u8, u8) {
        let kicker = if self.category.compares_tie_break() {
            self.tie_break.map_or(0, Rank::value)
        } else {
            0
        };
        (self.category.ordinal(), kicker)
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Evaluation {}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Evaluate the best poker hand reachable from a player's cards plus the
/// shared table cards.
///
/// The two slices are merged into one working pool; neither input is
/// mutated. Category predicates run over the full pool in descending
/// strength order and the first match wins, so a qualifying subset anywhere
/// in the pool is sufficient. Total for every pool size: an empty pool
/// yields a degenerate high card with no tie-break.
///
/// ```
/// use cardlib::cards::parse_cards;
/// use cardlib::evaluator::{evaluate, Category};
///
/// let hole = parse_cards("Ah Ad").unwrap();
/// let table = parse_cards("Kc Qd Jh").unwrap();
/// let eval = evaluate(&hole, &table);
/// assert_eq!(eval.category(), Category::OnePair);
/// ```
pub fn evaluate(cards: &[Card], table_cards: &[Card]) -> Evaluation {
    let mut pool = Vec::with_capacity(cards.len() + table_cards.len());
    pool.extend_from_slice(cards);
    pool.extend_from_slice(table_cards);

    let analysis = PoolAnalysis::new(&pool);
    let mut category = Category::HighCard;
    for (cat, predicate) in DETECTORS {
        if predicate(&analysis) {
            category = cat;
            break;
        }
    }

    Evaluation { category, tie_break: analysis.max_rank(), cards: pool }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap(), &[])
    }

    #[test]
    fn empty_pool_is_high_card_without_tie_break() {
        let e = evaluate(&[], &[]);
        assert_eq!(e.category(), Category::HighCard);
        assert_eq!(e.tie_break(), None);
        assert!(e.cards().is_empty());
    }

    #[test]
    fn single_card_is_high_card() {
        let e = eval("7c");
        assert_eq!(e.category(), Category::HighCard);
        assert_eq!(e.tie_break(), Some(Rank::Seven));
    }

    #[test]
    fn tie_break_is_the_pool_maximum() {
        // the pair is tens, but the ace on the table sets the tie-break
        let hole = parse_cards("10h 10s").unwrap();
        let table = parse_cards("Ad 3c").unwrap();
        let e = evaluate(&hole, &table);
        assert_eq!(e.category(), Category::OnePair);
        assert_eq!(e.tie_break(), Some(Rank::Ace));
    }

    #[test]
    fn first_matching_detector_wins() {
        // quads also satisfy trips and pair, but classify as quads
        let e = eval("10d 10h 10c 10s");
        assert_eq!(e.category(), Category::FourOfAKind);
    }

    #[test]
    fn comparison_uses_tie_break_for_kicker_categories() {
        let lo = eval("10h 10s 8c");
        let hi = eval("10h 10s Ac");
        assert!(lo < hi);
        assert_eq!(lo.compare(&hi), Ordering::Less);
        assert_eq!(hi.compare(&lo), Ordering::Greater);
    }

    #[test]
    fn comparison_ignores_tie_break_for_straights_and_flushes() {
        let low_straight = eval("2c 3d 4h 5s 6c");
        let high_straight = eval("10c Jd Qh Ks Ac");
        assert_eq!(low_straight.compare(&high_straight), Ordering::Equal);
        assert_eq!(low_straight, high_straight);

        let low_flush = eval("2h 4h 6h 8h 10h");
        let high_flush = eval("9h Jh Qh Kh Ah");
        assert_eq!(low_flush.compare(&high_flush), Ordering::Equal);
    }

    #[test]
    fn categories_order_before_tie_breaks() {
        let pair_of_aces = eval("Ah As 3c");
        let two_low_pairs = eval("2h 2s 3c 3d");
        assert!(pair_of_aces < two_low_pairs);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let hole = parse_cards("Qd Kh").unwrap();
        let table = parse_cards("10d 9d 8c 6s").unwrap();
        let a = evaluate(&hole, &table);
        let b = evaluate(&hole, &table);
        assert_eq!(a, b);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }
}
