use super::pool::PoolAnalysis;
use super::Category;

/// A category membership test over the analyzed pool.
pub(crate) type Predicate = fn(&PoolAnalysis) -> bool;

fn straight_flush(a: &PoolAnalysis) -> bool {
    a.has_straight_flush()
}

fn four_of_a_kind(a: &PoolAnalysis) -> bool {
    a.values_with_count(4) >= 1
}

fn full_house(a: &PoolAnalysis) -> bool {
    a.has_full_house()
}

fn flush(a: &PoolAnalysis) -> bool {
    a.has_flush()
}

fn straight(a: &PoolAnalysis) -> bool {
    a.has_straight()
}

fn three_of_a_kind(a: &PoolAnalysis) -> bool {
    a.values_with_count(3) >= 1
}

fn two_pair(a: &PoolAnalysis) -> bool {
    a.values_with_count(2) >= 2
}

fn one_pair(a: &PoolAnalysis) -> bool {
    a.values_with_count(2) >= 1
}

fn high_card(_a: &PoolAnalysis) -> bool {
    true
}

/// Detectors in descending strength order; evaluation scans this table and
/// the first matching predicate decides the category. The final entry always
/// matches, so the scan cannot fall through.
pub(crate) const DETECTORS: [(Category, Predicate); 9] = [
    (Category::StraightFlush, straight_flush),
    (Category::FourOfAKind, four_of_a_kind),
    (Category::FullHouse, full_house),
    (Category::Flush, flush),
    (Category::Straight, straight),
    (Category::ThreeOfAKind, three_of_a_kind),
    (Category::TwoPair, two_pair),
    (Category::OnePair, one_pair),
    (Category::HighCard, high_card),
];
