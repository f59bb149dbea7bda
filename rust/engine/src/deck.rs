use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, ActionType, Card, Suit};
use crate::errors::GameError;

/// Number of cards a hand holds once dealt.
pub const HAND_SIZE: usize = 4;

/// Ordered stack of cards; the last element is the top.
///
/// The same type backs the draw deck, the discard pile and every hand. A hand
/// is simply a collection created with a capacity of [`HAND_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
    capacity: Option<usize>,
}

impl CardCollection {
    /// An empty, uncapped pile (used for the discard pile).
    pub fn pile() -> Self {
        Self::default()
    }

    /// An empty hand capped at [`HAND_SIZE`] cards.
    pub fn hand() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
            capacity: Some(HAND_SIZE),
        }
    }

    /// An uncapped collection holding `cards`, last element on top.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            capacity: None,
        }
    }

    /// A full 52-card deck shuffled with the given RNG.
    pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// A full deck shuffled deterministically from `seed`.
    pub fn new_deck_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled_deck(&mut rng)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.cards.len() >= cap)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyCollection)
    }

    /// Places `card` on top. Fails on a capped collection that is already full.
    pub fn add(&mut self, card: Card) -> Result<(), GameError> {
        if let Some(capacity) = self.capacity {
            if self.cards.len() >= capacity {
                return Err(GameError::HandFull { capacity });
            }
        }
        self.cards.push(card);
        Ok(())
    }

    /// Replaces the card at `index` with `card` and returns the displaced one.
    pub fn swap_at(&mut self, index: usize, card: Card) -> Result<Card, GameError> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(GameError::SlotOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, card))
    }

    /// Exchanges the card at `my_index` with the card at `other_index` in
    /// `other`. Both indices are checked before anything moves.
    pub fn switch_with(
        &mut self,
        my_index: usize,
        other: &mut CardCollection,
        other_index: usize,
    ) -> Result<(), GameError> {
        self.check_index(my_index)?;
        let incoming = *other.get(other_index).ok_or(GameError::SlotOutOfRange {
            index: other_index,
            len: other.len(),
        })?;
        let outgoing = self.swap_at(my_index, incoming)?;
        other.swap_at(other_index, outgoing)?;
        Ok(())
    }

    /// Exchanges two cards inside this collection. Switching a slot with
    /// itself leaves the collection unchanged.
    pub fn switch_within(&mut self, a: usize, b: usize) -> Result<(), GameError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.cards.swap(a, b);
        Ok(())
    }

    pub fn set_face_up(&mut self, index: usize, face_up: bool) -> Result<(), GameError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(GameError::SlotOutOfRange { index, len })?;
        card.set_face_up(face_up);
        Ok(())
    }

    pub fn hide_all(&mut self) {
        self.cards.iter_mut().for_each(|c| c.set_face_up(false));
    }

    pub fn reveal_all(&mut self) {
        self.cards.iter_mut().for_each(|c| c.set_face_up(true));
    }

    /// Point value of the card at `index`.
    pub fn score_at(&self, index: usize) -> Option<i32> {
        self.cards.get(index).map(Card::score)
    }

    /// Sum of card scores, with the King of Diamonds counting -1.
    pub fn score(&self) -> i32 {
        self.cards.iter().map(Card::score).sum()
    }

    fn check_index(&self, index: usize) -> Result<(), GameError> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(GameError::SlotOutOfRange {
                index,
                len: self.cards.len(),
            })
        }
    }
}

/// Census of a deck used to confirm it was built correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckReport {
    pub size: usize,
    pub distinct: usize,
    pub peek: usize,
    pub spy: usize,
    pub switch: usize,
    pub clubs: usize,
    pub diamonds: usize,
    pub hearts: usize,
    pub spades: usize,
    pub king_of_diamonds_scores_minus_one: bool,
}

impl DeckReport {
    pub fn inspect(deck: &CardCollection) -> Self {
        let mut report = DeckReport {
            size: deck.len(),
            distinct: 0,
            peek: 0,
            spy: 0,
            switch: 0,
            clubs: 0,
            diamonds: 0,
            hearts: 0,
            spades: 0,
            king_of_diamonds_scores_minus_one: false,
        };
        let mut seen = std::collections::HashSet::with_capacity(deck.len());
        for card in deck.cards() {
            if seen.insert(*card) {
                report.distinct += 1;
            }
            match card.suit() {
                Suit::Clubs => report.clubs += 1,
                Suit::Diamonds => report.diamonds += 1,
                Suit::Hearts => report.hearts += 1,
                Suit::Spades => report.spades += 1,
            }
            match card.action_type() {
                Some(ActionType::Peek) => report.peek += 1,
                Some(ActionType::Spy) => report.spy += 1,
                Some(ActionType::Switch) => report.switch += 1,
                None => {}
            }
            if card.is_king_of_diamonds() && card.score() == -1 && card.rank().value() == 13 {
                report.king_of_diamonds_scores_minus_one = true;
            }
        }
        report
    }

    pub fn is_valid(&self) -> bool {
        self.size == 52
            && self.distinct == 52
            && [self.peek, self.spy, self.switch].iter().all(|&n| n == 8)
            && [self.clubs, self.diamonds, self.hearts, self.spades]
                .iter()
                .all(|&n| n == 13)
            && self.king_of_diamonds_scores_minus_one
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn hand_rejects_fifth_card() {
        let mut hand = CardCollection::hand();
        for r in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four] {
            hand.add(c(r, Suit::Clubs)).unwrap();
        }
        assert!(hand.is_full());
        let err = hand.add(c(Rank::Five, Suit::Clubs)).unwrap_err();
        assert_eq!(err, GameError::HandFull { capacity: 4 });
        assert_eq!(hand.len(), 4);
    }

    #[test]
    fn pile_has_no_cap() {
        let mut pile = CardCollection::pile();
        for card in full_deck() {
            pile.add(card).unwrap();
        }
        assert_eq!(pile.len(), 52);
        assert!(!pile.is_full());
    }

    #[test]
    fn draw_takes_from_top() {
        let mut pile = CardCollection::from_cards(vec![
            c(Rank::Ace, Suit::Clubs),
            c(Rank::King, Suit::Spades),
        ]);
        assert_eq!(pile.draw().unwrap(), c(Rank::King, Suit::Spades));
        assert_eq!(pile.draw().unwrap(), c(Rank::Ace, Suit::Clubs));
        assert_eq!(pile.draw(), Err(GameError::EmptyCollection));
    }

    #[test]
    fn switch_within_same_slot_is_noop() {
        let mut hand = CardCollection::from_cards(vec![
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Two, Suit::Clubs),
        ]);
        let before = hand.clone();
        hand.switch_within(1, 1).unwrap();
        assert_eq!(hand, before);
        hand.switch_within(0, 1).unwrap();
        assert_eq!(hand.cards()[0], c(Rank::Two, Suit::Clubs));
        assert_eq!(hand.cards()[1], c(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn switch_with_bad_index_moves_nothing() {
        let mut a = CardCollection::from_cards(vec![c(Rank::Ace, Suit::Clubs)]);
        let mut b = CardCollection::from_cards(vec![c(Rank::Two, Suit::Clubs)]);
        let err = a.switch_with(0, &mut b, 3).unwrap_err();
        assert_eq!(err, GameError::SlotOutOfRange { index: 3, len: 1 });
        assert_eq!(a.cards()[0], c(Rank::Ace, Suit::Clubs));
        assert_eq!(b.cards()[0], c(Rank::Two, Suit::Clubs));
    }
}
