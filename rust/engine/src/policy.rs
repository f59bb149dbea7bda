//! Decision seam between the engine and computer players.
//!
//! The engine owns every mutation of a computer turn; a [`TurnPolicy`] only
//! answers two questions about a read-only engine: what to do with the card
//! just drawn, and whether to call CABO afterwards.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionType, Card};
use crate::engine::Engine;

/// How a computer resolves the effect of a drawn action card.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ActionPlan {
    /// Look at an own slot; `None` when every own slot is already known
    Peek { slot: Option<usize> },
    /// Look at a slot in `seat`'s hand; `None` when nothing is worth spying on
    Spy { seat: usize, slot: Option<usize> },
    /// Exchange own `own_slot` with `seat`'s `slot`
    Switch {
        own_slot: usize,
        seat: usize,
        slot: usize,
    },
}

impl ActionPlan {
    pub fn action_type(&self) -> ActionType {
        match self {
            ActionPlan::Peek { .. } => ActionType::Peek,
            ActionPlan::Spy { .. } => ActionType::Spy,
            ActionPlan::Switch { .. } => ActionType::Switch,
        }
    }
}

/// What a computer does with the card it drew.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ComputerMove {
    /// Put the drawn card into own `slot` and discard the card it replaces
    Swap { slot: usize },
    /// Resolve the drawn card's effect, then discard it
    UseAction(ActionPlan),
    /// Discard the drawn card unused
    Discard,
}

/// Result of one atomic computer turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ComputerTurn {
    /// The deck was empty, so the game ended before anything else happened
    DeckExhausted,
    /// A card was drawn and dealt with; `applied` is the move actually carried out
    Played {
        drawn: Card,
        applied: ComputerMove,
        declared_cabo: bool,
    },
}

/// Decision procedure for a computer seat.
pub trait TurnPolicy {
    /// Choose a disposition for `drawn`. Invalid choices are downgraded to a discard.
    fn choose_move(&mut self, engine: &Engine, seat: usize, drawn: &Card) -> ComputerMove;

    /// Called after the move has been applied while no CABO is on the table.
    fn wants_cabo(&mut self, engine: &Engine, seat: usize) -> bool;
}
