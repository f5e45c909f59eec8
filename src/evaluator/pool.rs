use crate::cards::{Card, Rank, Suit};

/// Pre-computed analysis of a card pool of any size, built once per
/// evaluation and shared by every category predicate.
///
/// All predicates look at the whole multiset: a qualifying subset anywhere
/// in the pool is enough, so nothing here is restricted to five cards.
#[derive(Debug, Clone)]
pub struct PoolAnalysis {
    /// Occurrences per rank value, indexed 2-14.
    rank_counts: [usize; 15],
    /// Occurrences per suit, indexed by `Suit::index`.
    suit_counts: [usize; 4],
    /// Distinct rank values in the pool, ascending.
    distinct_values: Vec<u8>,
    /// Distinct rank values per suit, ascending.
    suited_values: [Vec<u8>; 4],
    /// Highest rank anywhere in the pool; `None` for an empty pool.
    max_rank: Option<Rank>,
}

impl PoolAnalysis {
    pub fn new(pool: &[Card]) -> Self {
        let mut rank_counts = [0usize; 15];
        let mut suit_counts = [0usize; 4];
        let mut suited_values: [Vec<u8>; 4] = Default::default();

        for card in pool {
            let v = card.rank_value();
            rank_counts[v as usize] += 1;
            let s = card.suit().index();
            suit_counts[s] += 1;
            if !suited_values[s].contains(&v) {
                suited_values[s].push(v);
            }
        }
        for values in suited_values.iter_mut() {
            values.sort_unstable();
        }

        let distinct_values: Vec<u8> =
            (2u8..=14).filter(|&v| rank_counts[v as usize] > 0).collect();
        let max_rank = distinct_values.last().and_then(|&v| Rank::from_value(v));

        Self { rank_counts, suit_counts, distinct_values, suited_values, max_rank }
    }

    /// Highest rank in the entire pool. This is the evaluation tie-break
    /// value: deliberately the pool maximum, not the top of the qualifying
    /// subset.
    pub fn max_rank(&self) -> Option<Rank> {
        self.max_rank
    }

    /// Number of distinct rank values occurring at least `n` times.
    pub fn values_with_count(&self, n: usize) -> usize {
        self.rank_counts.iter().filter(|&&c| c >= n).count()
    }

    /// Some rank occurs >= 3 times and a different rank occurs >= 2 times.
    /// Two overlapping larger groups qualify (e.g. two distinct trips).
    pub fn has_full_house(&self) -> bool {
        let trips = self.rank_counts.iter().filter(|&&c| c >= 3).count();
        let pairs = self.rank_counts.iter().filter(|&&c| c >= 2).count();
        // every trips value also counts as a pair value, so a second pair
        // value is exactly what makes the "different rank" requirement hold
        trips >= 1 && pairs >= 2
    }

    /// Some suit occurs >= 5 times in the pool.
    pub fn has_flush(&self) -> bool {
        self.suit_counts.iter().any(|&c| c >= 5)
    }

    /// Five consecutive distinct rank values anywhere in the pool, with the
    /// ace also playing low to complete the wheel (A-2-3-4-5).
    pub fn has_straight(&self) -> bool {
        contains_run_of_five(&self.distinct_values)
    }

    /// A straight confined to the cards of a single suit.
    pub fn has_straight_flush(&self) -> bool {
        Suit::ALL
            .iter()
            .any(|&s| contains_run_of_five(&self.suited_values[s.index()]))
    }
}

/// Scan a sorted, deduplicated value slice for five consecutive values.
/// An ace (14) also counts as 1 so the wheel qualifies.
fn contains_run_of_five(values: &[u8]) -> bool {
    let mut extended: Vec<u8> = Vec::with_capacity(values.len() + 1);
    if values.last() == Some(&14) {
        extended.push(1);
    }
    extended.extend_from_slice(values);

    let mut run = 1;
    for pair in extended.windows(2) {
        if pair[1] == pair[0] + 1 {
            run += 1;
            if run == 5 {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}
