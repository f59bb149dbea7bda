use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::ActionType;

/// Where the active player's turn stands.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Turn start: the player may draw or declare CABO
    AwaitingDraw,
    /// A drawn card is waiting to be swapped in, used, or discarded
    AwaitingDisposition,
    /// The drawn card has been dealt with; only ending the turn remains
    TurnComplete,
    /// Terminal state, scores are final
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::AwaitingDraw => "awaiting a draw",
            Phase::AwaitingDisposition => "a drawn card is pending",
            Phase::TurnComplete => "the turn is complete",
            Phase::GameOver => "the game is over",
        };
        f.write_str(s)
    }
}

/// Disposition the human has chosen and is now picking a target for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum PendingAction {
    #[default]
    None,
    Swapping,
    Peeking,
    Spying,
    Switching,
}

impl PendingAction {
    pub fn for_action(action: ActionType) -> Self {
        match action {
            ActionType::Peek => PendingAction::Peeking,
            ActionType::Spy => PendingAction::Spying,
            ActionType::Switch => PendingAction::Switching,
        }
    }

    /// Instruction shown once this disposition has been chosen.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            PendingAction::None => None,
            PendingAction::Swapping => {
                Some("Click a card in your hand to swap it with the drawn card.")
            }
            PendingAction::Peeking => Some("Click a card in your hand to peek at it."),
            PendingAction::Spying => Some("Click a card in another player's hand to spy on it."),
            PendingAction::Switching => Some(
                "Click a card from your hand, then a card from another Kingdom's hand to switch.",
            ),
        }
    }
}

/// The five logical controls a human can press.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HumanAction {
    Draw,
    BeginSwap,
    DeclareCabo,
    UseAction,
    EndTurn,
}

impl HumanAction {
    pub const ALL: [HumanAction; 5] = [
        HumanAction::Draw,
        HumanAction::BeginSwap,
        HumanAction::DeclareCabo,
        HumanAction::UseAction,
        HumanAction::EndTurn,
    ];

    /// Resting label of the control.
    pub fn label(&self) -> &'static str {
        match self {
            HumanAction::Draw => "Draw from Deck",
            HumanAction::BeginSwap => "Swap a Card",
            HumanAction::DeclareCabo => "Declare Cabo",
            HumanAction::UseAction => "Use Action",
            HumanAction::EndTurn => "End Turn",
        }
    }
}

impl fmt::Display for HumanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which controls are live right now. Used by the shell to enable buttons.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct LegalActions {
    pub draw: bool,
    pub swap: bool,
    pub declare_cabo: bool,
    /// Present only while a drawn action card is pending
    pub use_action: Option<ActionType>,
    pub end_turn: bool,
}

impl LegalActions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn allows(&self, action: HumanAction) -> bool {
        match action {
            HumanAction::Draw => self.draw,
            HumanAction::BeginSwap => self.swap,
            HumanAction::DeclareCabo => self.declare_cabo,
            HumanAction::UseAction => self.use_action.is_some(),
            HumanAction::EndTurn => self.end_turn,
        }
    }

    pub fn is_empty(&self) -> bool {
        HumanAction::ALL.iter().all(|&a| !self.allows(a))
    }

    /// Label for a control; the use-action control names the pending action.
    pub fn label(&self, action: HumanAction) -> &'static str {
        match (action, self.use_action) {
            (HumanAction::UseAction, Some(kind)) => kind.label(),
            _ => action.label(),
        }
    }

    pub fn enabled(&self) -> Vec<HumanAction> {
        HumanAction::ALL
            .iter()
            .copied()
            .filter(|&a| self.allows(a))
            .collect()
    }
}

/// Computes the live controls for the active seat.
///
/// Computer seats never get controls: their turns run as one atomic step.
///
/// # Examples
///
/// ```
/// use cabo_engine::cards::ActionType;
/// use cabo_engine::rules::{legal_actions, HumanAction, Phase};
///
/// let legal = legal_actions(Phase::AwaitingDraw, false, false, None);
/// assert!(legal.allows(HumanAction::Draw));
/// assert!(legal.allows(HumanAction::DeclareCabo));
/// assert!(!legal.allows(HumanAction::EndTurn));
///
/// let legal = legal_actions(Phase::AwaitingDisposition, false, true, Some(ActionType::Spy));
/// assert_eq!(legal.label(HumanAction::UseAction), "SPY");
/// assert!(!legal.allows(HumanAction::DeclareCabo));
/// ```
pub fn legal_actions(
    phase: Phase,
    is_computer: bool,
    cabo_declared: bool,
    drawn_action: Option<ActionType>,
) -> LegalActions {
    if is_computer {
        return LegalActions::none();
    }
    match phase {
        Phase::AwaitingDraw => LegalActions {
            draw: true,
            declare_cabo: !cabo_declared,
            ..LegalActions::none()
        },
        Phase::AwaitingDisposition => LegalActions {
            swap: true,
            use_action: drawn_action,
            end_turn: true,
            ..LegalActions::none()
        },
        Phase::TurnComplete => LegalActions {
            end_turn: true,
            ..LegalActions::none()
        },
        Phase::GameOver => LegalActions::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computer_seats_get_no_controls() {
        for phase in [
            Phase::AwaitingDraw,
            Phase::AwaitingDisposition,
            Phase::TurnComplete,
            Phase::GameOver,
        ] {
            assert!(legal_actions(phase, true, false, Some(ActionType::Peek)).is_empty());
        }
    }

    #[test]
    fn use_action_label_rests_without_action_card() {
        let legal = legal_actions(Phase::AwaitingDisposition, false, false, None);
        assert!(!legal.allows(HumanAction::UseAction));
        assert_eq!(legal.label(HumanAction::UseAction), "Use Action");
        assert_eq!(
            legal.enabled(),
            vec![HumanAction::BeginSwap, HumanAction::EndTurn]
        );
    }

    #[test]
    fn turn_complete_only_ends_turn() {
        let legal = legal_actions(Phase::TurnComplete, false, false, None);
        assert_eq!(legal.enabled(), vec![HumanAction::EndTurn]);
    }
}
