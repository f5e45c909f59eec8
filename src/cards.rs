use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). Ace always carries 14 here;
/// the evaluator treats it as 1 when extending a wheel straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Map an integer rank value (2-14) back to its `Rank`.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let upper = t.to_ascii_uppercase();
        let r = match upper.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Four suits. No hand-strength meaning; only a stable grouping key for
/// flush detection and a display tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Hearts,
    Spades,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Clubs, Suit::Diamonds];

    /// Stable bucket index for per-suit counting.
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Spades => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() == 1 {
            return Suit::try_from(t.chars().next().unwrap());
        }
        match t.to_ascii_lowercase().as_str() {
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// Numbered cards cover 2-10; face and ace cards fix their own value.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid numbered-card rank: {0} (expected 2-10)")]
pub struct InvalidRankError(pub u8);

/// A playing card: rank + suit.
///
/// Equality and ordering are defined by rank value alone; suit never breaks
/// a tie between two cards. `Hash` is deliberately not implemented because
/// it would have to disagree with `Eq`; use [`Card::to_tuple`] when the
/// exact (rank, suit) identity matters.
///
/// ```
/// use cardlib::cards::{Card, Suit};
///
/// let ah = Card::ace(Suit::Hearts);
/// let ad = Card::ace(Suit::Diamonds);
/// assert_eq!(ah, ad);
/// assert!(!(ah < ad) && !(ad < ah));
/// assert!(Card::king(Suit::Spades) < ah);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Build a numbered card, validating the 2-10 domain.
    pub fn numbered(value: u8, suit: Suit) -> Result<Self, InvalidRankError> {
        if !(2..=10).contains(&value) {
            return Err(InvalidRankError(value));
        }
        let rank = Rank::from_value(value).ok_or(InvalidRankError(value))?;
        Ok(Self { rank, suit })
    }

    pub const fn jack(suit: Suit) -> Self {
        Self { rank: Rank::Jack, suit }
    }

    pub const fn queen(suit: Suit) -> Self {
        Self { rank: Rank::Queen, suit }
    }

    pub const fn king(suit: Suit) -> Self {
        Self { rank: Rank::King, suit }
    }

    pub const fn ace(suit: Suit) -> Self {
        Self { rank: Rank::Ace, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Integer rank value, 2-14.
    pub const fn rank_value(self) -> u8 {
        self.rank as u8
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Full (rank, suit) identity, for callers that need to tell apart
    /// equal-ranked cards of different suits.
    pub const fn to_tuple(self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() < 2 {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        // rank is first char or "10"; suit is last char
        let (rank_str, suit_ch) = if t.len() == 2 {
            (&t[..1], t.chars().nth(1).unwrap())
        } else if t.len() == 3 && &t[..2] == "10" {
            (&t[..2], t.chars().nth(2).unwrap())
        } else {
            (&t[..t.len() - 1], t.chars().last().unwrap())
        };

        let rank = Rank::from_str(rank_str)?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use cardlib::cards::{parse_cards, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0].to_tuple(), (Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1].to_tuple(), (Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2].to_tuple(), (Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
