//! Text rendering of the table for terminal display.
//!
//! The shell is the engine's rendering and input collaborator: it draws
//! [`TableView`] snapshots through [`TextRenderer`] and turns typed `pick`
//! targets into pointer positions through [`TypedPointer`].
//!
//! ## Unicode vs ASCII Fallback
//!
//! Suits print as ♥ ♦ ♣ ♠ where the terminal is expected to support it and
//! as h d c s otherwise.
//!
//! ## Example
//!
//! ```rust
//! use cabo_engine::cards::Suit;
//! use cabo_engine::view::CardView;
//! use cabo_cli::formatters::format_card;
//!
//! let up = CardView { rank: 12, suit: Suit::Spades, face_up: true };
//! assert!(format_card(&up, false) == "Q♠" || format_card(&up, false) == "Qs");
//!
//! let down = CardView { face_up: false, ..up };
//! assert_eq!(format_card(&down, false), "##");
//! assert_ne!(format_card(&down, true), "##");
//! ```

use cabo_engine::cards::Suit;
use cabo_engine::deck::CardCollection;
use cabo_engine::rules::{HumanAction, LegalActions};
use cabo_engine::view::{CardView, PlayerView, SlotLocator, TableRenderer, Target};
use std::io::Write;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere assumes support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

/// Rank as printed on the card face: A, 2-10, J, Q, K.
pub fn format_rank(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    }
}

/// A card as seen on the table; face-down cards print as `##` unless `reveal`.
pub fn format_card(card: &CardView, reveal: bool) -> String {
    if card.face_up || reveal {
        format!("{}{}", format_rank(card.rank), format_suit(card.suit))
    } else {
        "##".to_string()
    }
}

/// Cards numbered from 1, e.g. `1:K♦ 2:## 3:## 4:7♣`.
pub fn format_hand(cards: &[CardView], reveal: bool) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c, reveal)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short command typed at the prompt for each control.
pub fn command_hint(action: HumanAction) -> &'static str {
    match action {
        HumanAction::Draw => "draw",
        HumanAction::BeginSwap => "swap",
        HumanAction::DeclareCabo => "cabo",
        HumanAction::UseAction => "action",
        HumanAction::EndTurn => "end",
    }
}

/// Writes a table snapshot as plain text lines.
pub struct TextRenderer<'a> {
    out: &'a mut dyn Write,
    /// Show face-down cards too
    reveal_all: bool,
    /// Print the activity feed
    show_feed: bool,
}

impl<'a> TextRenderer<'a> {
    pub fn new(out: &'a mut dyn Write, reveal_all: bool, show_feed: bool) -> Self {
        Self {
            out,
            reveal_all,
            show_feed,
        }
    }
}

impl TableRenderer for TextRenderer<'_> {
    type Error = std::io::Error;

    fn render_piles(
        &mut self,
        deck_remaining: usize,
        discard_top: Option<&CardView>,
    ) -> Result<(), Self::Error> {
        let discard = discard_top
            .map(|c| format_card(c, true))
            .unwrap_or_else(|| "empty".to_string());
        writeln!(
            self.out,
            "Deck: {} cards | Discard: {}",
            deck_remaining, discard
        )
    }

    fn render_hand(&mut self, position: usize, player: &PlayerView) -> Result<(), Self::Error> {
        let marker = if player.is_current { "*" } else { " " };
        let kind = if player.is_computer { "" } else { " (you)" };
        writeln!(
            self.out,
            "{}[{}] {}{}: {}",
            marker,
            position,
            player.name,
            kind,
            format_hand(&player.cards, self.reveal_all)
        )
    }

    fn render_drawn(&mut self, drawn: Option<&CardView>) -> Result<(), Self::Error> {
        match drawn {
            Some(card) => writeln!(self.out, "Drawn: {}", format_card(card, true)),
            None => Ok(()),
        }
    }

    fn render_controls(&mut self, legal: &LegalActions) -> Result<(), Self::Error> {
        let enabled = legal.enabled();
        if enabled.is_empty() {
            return Ok(());
        }
        let buttons: Vec<String> = enabled
            .iter()
            .map(|&a| format!("[{}: {}]", legal.label(a), command_hint(a)))
            .collect();
        writeln!(self.out, "Controls: {}", buttons.join(" "))
    }

    fn render_feed(&mut self, messages: &[String]) -> Result<(), Self::Error> {
        if self.show_feed {
            crate::ui::write_feed(self.out, messages)?;
        }
        Ok(())
    }
}

/// A pointer parked on a typed seat and slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedPointer(pub Target);

impl SlotLocator for TypedPointer {
    fn slot_at_pointer(&self, seat: usize, hand: &CardCollection) -> Option<usize> {
        (self.0.seat == seat && self.0.slot < hand.len()).then_some(self.0.slot)
    }
}
