use crate::cards::Card;
use crate::deck::CardCollection;
use crate::errors::GameError;
use crate::knowledge::KnowledgeModel;

/// Seat names used for the default four-player table.
pub const DEFAULT_NAMES: [&str; 4] = ["Cyntra", "Avalon", "Balthor", "Ophira"];

/// Who is sitting in a seat. Only computer seats carry a knowledge model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerKind {
    /// Driven by input events from the shell
    Human,
    /// Driven by a turn policy, with its own memory of seen cards
    Computer(KnowledgeModel),
}

/// A participant at the table: a name, a stable seat label, and one hand.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name
    name: String,
    /// Seat index, also the owner key into every knowledge model
    label: usize,
    /// Human or computer
    kind: PlayerKind,
    /// Up to four cards
    hand: CardCollection,
}

impl Player {
    pub fn human(name: impl Into<String>, label: usize) -> Self {
        Self::with_kind(name, label, PlayerKind::Human)
    }

    pub fn computer(name: impl Into<String>, label: usize) -> Self {
        Self::with_kind(name, label, PlayerKind::Computer(KnowledgeModel::new()))
    }

    fn with_kind(name: impl Into<String>, label: usize, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            label,
            kind,
            hand: CardCollection::hand(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> usize {
        self.label
    }

    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }

    pub fn hand(&self) -> &CardCollection {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut CardCollection {
        &mut self.hand
    }

    pub fn give_card(&mut self, card: Card) -> Result<(), GameError> {
        self.hand.add(card)
    }

    pub fn knowledge(&self) -> Option<&KnowledgeModel> {
        match &self.kind {
            PlayerKind::Computer(k) => Some(k),
            PlayerKind::Human => None,
        }
    }

    pub fn knowledge_mut(&mut self) -> Option<&mut KnowledgeModel> {
        match &mut self.kind {
            PlayerKind::Computer(k) => Some(k),
            PlayerKind::Human => None,
        }
    }
}
