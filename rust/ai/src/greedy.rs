//! Greedy heuristic opponent.
//!
//! Decisions use only what the knowledge model says the seat has seen, with
//! one deliberate exception: the CABO call looks at the true hand total.

use cabo_engine::cards::{ActionType, Card};
use cabo_engine::engine::Engine;
use cabo_engine::policy::{ActionPlan, ComputerMove, TurnPolicy};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::CaboOpponent;

/// Lower bound (inclusive) of the random CABO threshold.
pub const CABO_THRESHOLD_MIN: f64 = 13.0;
/// Upper bound (exclusive) of the random CABO threshold.
pub const CABO_THRESHOLD_MAX: f64 = 21.0;

/// Greedy opponent.
///
/// Each turn it:
/// - swaps the drawn card into its highest known slot (slot 0 when it knows
///   none) if the drawn card scores lower than that slot
/// - otherwise spends an action card: peek at an unseen own slot, spy on the
///   opponent, or switch its highest known card for the opponent's lowest
/// - otherwise discards
///
/// and then calls CABO when its hand total is below a threshold drawn from
/// [13, 21).
///
/// # Example
///
/// ```rust
/// use cabo_ai::greedy::GreedyAI;
/// use cabo_ai::CaboOpponent;
///
/// let ai = GreedyAI::new(42);
/// assert_eq!(ai.name(), "GreedyAI");
/// ```
#[derive(Debug, Clone)]
pub struct GreedyAI {
    rng: ChaCha20Rng,
}

impl GreedyAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh CABO threshold.
    pub fn cabo_threshold(&mut self) -> f64 {
        self.rng.random_range(CABO_THRESHOLD_MIN..CABO_THRESHOLD_MAX)
    }

    fn random_slot(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }

    fn plan_action(&mut self, engine: &Engine, seat: usize, kind: ActionType) -> ActionPlan {
        let opponent = opponent_seat(engine, seat);
        match kind {
            ActionType::Peek => ActionPlan::Peek {
                slot: unknown_slot(engine, seat),
            },
            ActionType::Spy => ActionPlan::Spy {
                seat: opponent,
                slot: spy_index(engine, seat, opponent),
            },
            ActionType::Switch => {
                let own_slot = match highest_known_index(engine, seat) {
                    Some(i) => i,
                    None => self.random_slot(hand_len(engine, seat)),
                };
                let slot = match lowest_known_index(engine, seat, opponent) {
                    Some(i) => i,
                    None => self.random_slot(hand_len(engine, opponent)),
                };
                ActionPlan::Switch {
                    own_slot,
                    seat: opponent,
                    slot,
                }
            }
        }
    }
}

impl TurnPolicy for GreedyAI {
    fn choose_move(&mut self, engine: &Engine, seat: usize, drawn: &Card) -> ComputerMove {
        let Some(player) = engine.player(seat) else {
            return ComputerMove::Discard;
        };
        let slot = highest_known_index(engine, seat).unwrap_or(0);
        if let Some(held) = player.hand().score_at(slot) {
            if drawn.score() < held {
                debug!(seat, slot, rank = drawn.rank().value(), held, "greedy swap");
                return ComputerMove::Swap { slot };
            }
        }
        match drawn.action_type() {
            Some(kind) => {
                let plan = self.plan_action(engine, seat, kind);
                debug!(seat, action = %kind, plan = ?plan, "greedy action");
                ComputerMove::UseAction(plan)
            }
            None => ComputerMove::Discard,
        }
    }

    fn wants_cabo(&mut self, engine: &Engine, seat: usize) -> bool {
        let Some(estimate) = blind_estimate(engine, seat) else {
            return false;
        };
        let threshold = self.cabo_threshold();
        debug!(seat, estimate, threshold, "cabo check");
        f64::from(estimate) < threshold
    }
}

impl CaboOpponent for GreedyAI {
    fn name(&self) -> &str {
        "GreedyAI"
    }
}

/// Seat targeted by spy and switch: the first human at the table, or the
/// next seat when there is no other human.
pub fn opponent_seat(engine: &Engine, seat: usize) -> usize {
    match engine.human_seat() {
        Some(human) if human != seat => human,
        _ => (seat + 1) % engine.players().len(),
    }
}

/// Own slot holding the highest-scoring card the seat has seen.
pub fn highest_known_index(engine: &Engine, seat: usize) -> Option<usize> {
    pick_known(engine, seat, seat, |candidate, best| candidate > best)
}

/// Slot of `owner`'s lowest-scoring card that `seat` has seen.
pub fn lowest_known_index(engine: &Engine, seat: usize, owner: usize) -> Option<usize> {
    pick_known(engine, seat, owner, |candidate, best| candidate < best)
}

/// First own slot the seat has not seen.
pub fn unknown_slot(engine: &Engine, seat: usize) -> Option<usize> {
    let len = hand_len(engine, seat);
    engine
        .player(seat)?
        .knowledge()?
        .unknown_slots(seat)
        .into_iter()
        .find(|&slot| slot < len)
}

/// First slot of `owner`'s hand that `seat` has not seen.
pub fn spy_index(engine: &Engine, seat: usize, owner: usize) -> Option<usize> {
    let knowledge = engine.player(seat)?.knowledge()?;
    (0..hand_len(engine, owner)).find(|&slot| !knowledge.is_known(owner, slot))
}

/// True total of the seat's hand.
pub fn blind_estimate(engine: &Engine, seat: usize) -> Option<i32> {
    engine.player(seat).map(|p| p.hand().score())
}

fn hand_len(engine: &Engine, seat: usize) -> usize {
    engine.player(seat).map_or(0, |p| p.hand().len())
}

/// Scans `owner`'s known slots in order and keeps the first one that beats
/// every earlier pick under `better`.
fn pick_known(
    engine: &Engine,
    seat: usize,
    owner: usize,
    better: impl Fn(i32, i32) -> bool,
) -> Option<usize> {
    let knowledge = engine.player(seat)?.knowledge()?;
    let hand = engine.player(owner)?.hand();
    let mut best: Option<(usize, i32)> = None;
    for slot in knowledge.known_slots(owner) {
        let Some(score) = hand.score_at(slot) else {
            continue;
        };
        match best {
            Some((_, b)) if !better(score, b) => {}
            _ => best = Some((slot, score)),
        }
    }
    best.map(|(slot, _)| slot)
}
