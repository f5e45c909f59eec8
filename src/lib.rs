//! cardlib: playing-card model and poker hand evaluation
//!
//! Goals:
//! - A small card/deck/hand model where card ordering is by rank alone
//! - A pure, total hand evaluator over card pools of any size
//! - No panics for any input; `Result` for the few recoverable errors
//!
//! ## Quick start: pick a winner
//! ```
//! use cardlib::cards::parse_cards;
//! use cardlib::evaluator::{evaluate, Category};
//! use std::cmp::Ordering;
//!
//! let table = parse_cards("10d 9d 8c 6s").unwrap();
//! let player_a = parse_cards("Qd Kh").unwrap();
//! let player_b = parse_cards("10h Ah").unwrap();
//!
//! let a = evaluate(&player_a, &table);
//! let b = evaluate(&player_b, &table);
//! assert_eq!(a.category(), Category::HighCard);
//! assert_eq!(b.category(), Category::OnePair);
//! assert_eq!(a.compare(&b), Ordering::Less);
//! ```
//!
//! The evaluator classifies the whole merged pool (private plus shared
//! cards) into one of nine categories via an ordered table of predicates,
//! strongest first. The tie-break rank is the maximum of the entire pool,
//! and only the categories decided by rank multiplicities consult it when
//! comparing; see [`evaluator::Evaluation`] for the inherited details.

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
