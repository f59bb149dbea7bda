use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

/// Represents the rank (face value) of a card from Ace (1) through King (13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7, a peek card
    Seven,
    /// Rank 8, a peek card
    Eight,
    /// Rank 9, a spy card
    Nine,
    /// Rank 10, a spy card
    Ten,
    /// Jack (11), a switch card
    Jack,
    /// Queen (12), a switch card
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        let rank = match v {
            1 => Rank::Ace,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => return None,
        };
        Some(rank)
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }
}

/// The effect an action card grants when it is drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Look at one of your own cards (ranks 7-8)
    Peek,
    /// Look at one card in another player's hand (ranks 9-10)
    Spy,
    /// Exchange one of your cards with another player's (ranks 11-12)
    Switch,
}

impl ActionType {
    /// Action carried by a rank, if any. This mapping is the only source of
    /// action tags, so a card's action can never drift from its rank.
    pub fn for_rank(rank: Rank) -> Option<ActionType> {
        match rank {
            Rank::Seven | Rank::Eight => Some(ActionType::Peek),
            Rank::Nine | Rank::Ten => Some(ActionType::Spy),
            Rank::Jack | Rank::Queen => Some(ActionType::Switch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Peek => "peek",
            ActionType::Spy => "spy",
            ActionType::Switch => "switch",
        }
    }

    /// Label shown on the use-action control while a card of this type is drawn.
    pub fn label(&self) -> &'static str {
        match self {
            ActionType::Peek => "PEEK",
            ActionType::Spy => "SPY",
            ActionType::Switch => "SWITCH",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single CABO card.
///
/// Identity (rank and suit) is fixed at construction; the only mutable part is
/// the face-up flag used for display. Equality and hashing consider identity
/// only, so a card compares equal to itself whichever way up it lies.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Identity rank, 1 through 13. The King of Diamonds reports 13 here;
    /// use [`Card::score`] for its point value.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn action_type(&self) -> Option<ActionType> {
        ActionType::for_rank(self.rank)
    }

    pub fn is_action(&self) -> bool {
        self.action_type().is_some()
    }

    /// Points this card contributes to a hand total: its rank, except the
    /// King of Diamonds which is worth -1.
    pub fn score(&self) -> i32 {
        if self.is_king_of_diamonds() {
            -1
        } else {
            i32::from(self.rank.value())
        }
    }

    pub fn is_king_of_diamonds(&self) -> bool {
        self.rank == Rank::King && self.suit == Suit::Diamonds
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit.name(), self.rank.value())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
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
    ]
}

/// All 52 cards in rank-major order, face down and unshuffled.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card::new(r, s));
        }
    }
    v
}
