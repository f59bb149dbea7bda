//! # cabo-ai: Computer Players for CABO
//!
//! Computer opponents plug into the engine through the
//! [`TurnPolicy`](cabo_engine::policy::TurnPolicy) seam: the engine draws and
//! applies, the opponent only decides.
//!
//! ## Core Components
//!
//! - [`CaboOpponent`] - A named turn policy
//! - [`greedy`] - Greedy heuristic opponent
//! - [`create_ai`] - Factory for opponents by name
//! - [`run_computer_turns`] - Plays computer seats until a human is up
//!
//! ## Quick Start
//!
//! ```rust
//! use cabo_ai::{create_ai, run_computer_turns};
//! use cabo_engine::engine::Engine;
//! use cabo_engine::rules::HumanAction;
//!
//! let mut ai = create_ai("greedy", 42).expect("greedy is built in");
//! let mut engine = Engine::new(Some(42), Engine::standard_table("Cyntra")).unwrap();
//!
//! engine.invoke(HumanAction::Draw).unwrap();
//! engine.invoke(HumanAction::EndTurn).unwrap();
//! let turns = run_computer_turns(&mut engine, ai.as_mut()).unwrap();
//! assert!(engine.is_game_over() || engine.current_seat() == 0);
//! assert!(turns.len() <= 3);
//! ```
//!
//! ## AI Types
//!
//! - `"greedy"` - Swaps in lower cards, spends action cards, calls CABO on a low hand

use cabo_engine::engine::Engine;
use cabo_engine::errors::GameError;
use cabo_engine::policy::{ComputerTurn, TurnPolicy};
use tracing::debug;

pub mod greedy;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["greedy"];

/// A turn policy with a display name.
///
/// # Example Implementation
///
/// ```rust
/// use cabo_ai::CaboOpponent;
/// use cabo_engine::cards::Card;
/// use cabo_engine::engine::Engine;
/// use cabo_engine::policy::{ComputerMove, TurnPolicy};
///
/// struct Shy;
///
/// impl TurnPolicy for Shy {
///     fn choose_move(&mut self, _: &Engine, _: usize, _: &Card) -> ComputerMove {
///         ComputerMove::Discard
///     }
///     fn wants_cabo(&mut self, _: &Engine, _: usize) -> bool {
///         false
///     }
/// }
///
/// impl CaboOpponent for Shy {
///     fn name(&self) -> &str {
///         "Shy"
///     }
/// }
/// ```
pub trait CaboOpponent: TurnPolicy + Send + Sync {
    fn name(&self) -> &str;
}

pub fn is_known_ai(kind: &str) -> bool {
    AI_KINDS.contains(&kind)
}

/// Creates an opponent by name, seeding its private RNG from `seed`.
///
/// Returns `None` for an unknown name.
///
/// ```rust
/// use cabo_ai::create_ai;
///
/// let ai = create_ai("greedy", 7).unwrap();
/// assert_eq!(ai.name(), "GreedyAI");
/// assert!(create_ai("minimax", 7).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn CaboOpponent>> {
    match kind {
        "greedy" => Some(Box::new(greedy::GreedyAI::new(seed))),
        _ => None,
    }
}

/// Plays one whole computer turn for the current seat.
pub fn play_computer_turn(
    engine: &mut Engine,
    ai: &mut dyn CaboOpponent,
) -> Result<ComputerTurn, GameError> {
    let seat = engine.current_seat();
    let turn = engine.play_computer_turn(ai)?;
    debug!(seat, ai = ai.name(), turn = ?turn, "computer turn played");
    Ok(turn)
}

/// Plays computer turns until a human seat is up or the game ends.
pub fn run_computer_turns(
    engine: &mut Engine,
    ai: &mut dyn CaboOpponent,
) -> Result<Vec<ComputerTurn>, GameError> {
    let mut turns = Vec::new();
    while !engine.is_game_over() && engine.current_player().is_computer() {
        turns.push(play_computer_turn(engine, ai)?);
    }
    Ok(turns)
}
