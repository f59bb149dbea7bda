//! Read-only table snapshot and the traits a front end implements.
//!
//! The engine never draws or hit-tests anything itself. A front end renders a
//! [`TableView`] through [`TableRenderer`] and reports what the pointer is on
//! through [`SlotLocator`].

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::deck::CardCollection;
use crate::rules::{LegalActions, PendingAction, Phase};
use crate::scoring::GameOutcome;

/// A hand slot at the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub seat: usize,
    pub slot: usize,
}

impl Target {
    pub fn new(seat: usize, slot: usize) -> Self {
        Self { seat, slot }
    }
}

/// Answers "which slot of this hand is under the pointer", without side effects.
pub trait SlotLocator {
    fn slot_at_pointer(&self, seat: usize, hand: &CardCollection) -> Option<usize>;
}

/// Draws a table snapshot, one region at a time.
pub trait TableRenderer {
    type Error;

    fn render_piles(
        &mut self,
        deck_remaining: usize,
        discard_top: Option<&CardView>,
    ) -> Result<(), Self::Error>;

    /// Draws one hand at row `position`.
    fn render_hand(&mut self, position: usize, player: &PlayerView) -> Result<(), Self::Error>;

    fn render_drawn(&mut self, drawn: Option<&CardView>) -> Result<(), Self::Error>;

    fn render_controls(&mut self, legal: &LegalActions) -> Result<(), Self::Error>;

    fn render_feed(&mut self, messages: &[String]) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub rank: u8,
    pub suit: Suit,
    pub face_up: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            rank: card.rank().value(),
            suit: card.suit(),
            face_up: card.is_face_up(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub label: usize,
    pub is_computer: bool,
    pub is_current: bool,
    pub cards: Vec<CardView>,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub deck_remaining: usize,
    /// Always face-up, whatever the card's own flag says
    pub discard_top: Option<CardView>,
    pub drawn: Option<CardView>,
    pub players: Vec<PlayerView>,
    pub current_seat: usize,
    pub phase: Phase,
    pub pending: PendingAction,
    pub cabo_player: Option<usize>,
    pub legal: LegalActions,
    pub messages: Vec<String>,
    pub outcome: Option<GameOutcome>,
}

impl TableView {
    pub fn render<R: TableRenderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.render_piles(self.deck_remaining, self.discard_top.as_ref())?;
        for (position, player) in self.players.iter().enumerate() {
            renderer.render_hand(position, player)?;
        }
        renderer.render_drawn(self.drawn.as_ref())?;
        renderer.render_controls(&self.legal)?;
        renderer.render_feed(&self.messages)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
