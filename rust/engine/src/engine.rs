use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::deck::{CardCollection, HAND_SIZE};
use crate::errors::GameError;
use crate::knowledge::MAX_SEATS;
use crate::logger::StatusLog;
use crate::player::{Player, DEFAULT_NAMES};
use crate::policy::{ActionPlan, ComputerMove, ComputerTurn, TurnPolicy};
use crate::rules::{legal_actions, HumanAction, LegalActions, PendingAction, Phase};
use crate::scoring::GameOutcome;
use crate::view::{CardView, PlayerView, SlotLocator, TableView, Target};

/// Smallest table the engine accepts.
pub const MIN_PLAYERS: usize = 2;

/// Cards each player is shown from their own hand after the deal.
pub const INITIAL_PEEK: usize = 2;

/// Turn and action state machine for one game of CABO.
///
/// The engine owns the deck, discard pile and players, and advances only when
/// one of its handlers is called: a human control ([`Engine::invoke`]), a
/// human target pick ([`Engine::select`] / [`Engine::click`]), or a whole
/// computer turn ([`Engine::play_computer_turn`]).
///
/// # Examples
///
/// ```
/// use cabo_engine::engine::Engine;
/// use cabo_engine::player::Player;
/// use cabo_engine::rules::{HumanAction, Phase};
///
/// let players = Engine::standard_table("Cyntra");
/// let mut engine = Engine::new(Some(12345), players).expect("valid table");
///
/// // 16 cards dealt, the human sees two of their own
/// assert_eq!(engine.deck().len(), 36);
/// assert!(engine.players()[0].hand().cards()[0].is_face_up());
///
/// engine.invoke(HumanAction::Draw).expect("draw is legal at turn start");
/// assert_eq!(engine.phase(), Phase::AwaitingDisposition);
/// engine.invoke(HumanAction::EndTurn).expect("end turn is legal");
/// assert_eq!(engine.current_seat(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    /// Draw pile, top is the last card
    deck: CardCollection,
    /// Discard pile, top is always shown face-up
    discard: CardCollection,
    /// Seats in turn order; a player's label equals its index
    players: Vec<Player>,
    /// Seat whose turn it is
    current: usize,
    /// Seat that called CABO; the game ends when play returns to it
    cabo_player: Option<usize>,
    /// Card drawn this turn and not yet dealt with
    drawn: Option<Card>,
    /// Disposition chosen by the human, awaiting a target
    pending: PendingAction,
    /// First pick of a two-step switch (own slot)
    switch_source: Option<usize>,
    /// The drawn card has been used and only ending the turn remains
    turn_resolved: bool,
    game_over: bool,
    /// Activity feed
    log: StatusLog,
}

impl Engine {
    /// Seats `players`, shuffles a fresh deck from `seed` (random when absent),
    /// deals four cards to each seat and performs the opening reveal.
    pub fn new(seed: Option<u64>, players: Vec<Player>) -> Result<Self, GameError> {
        let seed = seed.unwrap_or_else(rand::random);
        let deck = CardCollection::new_deck_with_seed(seed);
        let mut eng = Self::seat(players, deck)?;
        eng.deal_opening()?;
        eng.reveal_opening();
        info!(seed, players = eng.players.len(), "new game dealt");
        eng.announce_turn();
        Ok(eng)
    }

    /// Seats players whose hands are already filled, drawing from `deck` from
    /// then on. No dealing and no opening reveal take place.
    pub fn from_deal(players: Vec<Player>, deck: CardCollection) -> Result<Self, GameError> {
        let mut eng = Self::seat(players, deck)?;
        eng.announce_turn();
        Ok(eng)
    }

    /// One human in seat 0 facing three computer players.
    pub fn standard_table(human_name: &str) -> Vec<Player> {
        let mut players = vec![Player::human(human_name, 0)];
        for (label, name) in DEFAULT_NAMES.iter().enumerate().skip(1) {
            players.push(Player::computer(*name, label));
        }
        players
    }

    /// Four computer players, for simulations.
    pub fn all_computer_table() -> Vec<Player> {
        DEFAULT_NAMES
            .iter()
            .enumerate()
            .map(|(label, name)| Player::computer(*name, label))
            .collect()
    }

    fn seat(players: Vec<Player>, deck: CardCollection) -> Result<Self, GameError> {
        let count = players.len();
        if !(MIN_PLAYERS..=MAX_SEATS).contains(&count) {
            return Err(GameError::InvalidPlayerCount {
                count,
                min: MIN_PLAYERS,
                max: MAX_SEATS,
            });
        }
        if let Some((seat, p)) = players.iter().enumerate().find(|(i, p)| p.label() != *i) {
            return Err(GameError::SeatMismatch {
                seat,
                label: p.label(),
            });
        }
        Ok(Self {
            deck,
            discard: CardCollection::pile(),
            players,
            current: 0,
            cabo_player: None,
            drawn: None,
            pending: PendingAction::None,
            switch_source: None,
            turn_resolved: false,
            game_over: false,
            log: StatusLog::new(),
        })
    }

    fn deal_opening(&mut self) -> Result<(), GameError> {
        for _ in 0..HAND_SIZE {
            for p in &mut self.players {
                let c = self.deck.draw()?;
                p.give_card(c)?;
            }
        }
        Ok(())
    }

    /// The human sees their first two cards; each computer remembers its own.
    fn reveal_opening(&mut self) {
        for p in &mut self.players {
            let label = p.label();
            let shown = INITIAL_PEEK.min(p.hand().len());
            match p.knowledge_mut() {
                Some(k) => (0..shown).for_each(|slot| k.set_known(label, slot, true)),
                None => {
                    for slot in 0..shown {
                        // slot < len, cannot fail
                        let _ = p.hand_mut().set_face_up(slot, true);
                    }
                }
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn current_seat(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// First human seat, if any.
    pub fn human_seat(&self) -> Option<usize> {
        self.players.iter().position(|p| !p.is_computer())
    }

    pub fn deck(&self) -> &CardCollection {
        &self.deck
    }

    pub fn discard(&self) -> &CardCollection {
        &self.discard
    }

    pub fn drawn_card(&self) -> Option<&Card> {
        self.drawn.as_ref()
    }

    pub fn pending_action(&self) -> PendingAction {
        self.pending
    }

    pub fn switch_source(&self) -> Option<usize> {
        self.switch_source
    }

    pub fn cabo_player(&self) -> Option<usize> {
        self.cabo_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn status_log(&self) -> &StatusLog {
        &self.log
    }

    pub fn messages(&self) -> Vec<String> {
        self.log.messages()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.drawn.is_some() {
            Phase::AwaitingDisposition
        } else if self.turn_resolved {
            Phase::TurnComplete
        } else {
            Phase::AwaitingDraw
        }
    }

    pub fn legal_actions(&self) -> LegalActions {
        legal_actions(
            self.phase(),
            self.current_player().is_computer(),
            self.cabo_player.is_some(),
            self.drawn.as_ref().and_then(Card::action_type),
        )
    }

    /// Final scores, available once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game_over
            .then(|| GameOutcome::from_players(&self.players))
    }

    /// Applies one of the five human controls.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalTransition`] when the control is not live in the
    /// current phase (see [`Engine::legal_actions`]); the state is untouched.
    pub fn invoke(&mut self, action: HumanAction) -> Result<(), GameError> {
        match action {
            HumanAction::Draw => self.draw_from_deck(),
            HumanAction::DeclareCabo => self.declare_cabo(),
            HumanAction::BeginSwap => {
                self.require(action)?;
                self.choose_disposition(PendingAction::Swapping);
                Ok(())
            }
            HumanAction::UseAction => {
                self.require(action)?;
                if let Some(kind) = self.drawn.as_ref().and_then(Card::action_type) {
                    self.choose_disposition(PendingAction::for_action(kind));
                }
                Ok(())
            }
            HumanAction::EndTurn => {
                self.require(action)?;
                self.advance_turn();
                Ok(())
            }
        }
    }

    fn require(&self, action: HumanAction) -> Result<(), GameError> {
        if self.legal_actions().allows(action) {
            Ok(())
        } else {
            Err(GameError::IllegalTransition {
                action: action.label(),
                phase: self.phase(),
            })
        }
    }

    /// Draws the top card for the human. An empty deck ends the game instead.
    pub fn draw_from_deck(&mut self) -> Result<(), GameError> {
        self.require(HumanAction::Draw)?;
        let Ok(mut card) = self.deck.draw() else {
            info!(seat = self.current, "deck exhausted on draw");
            self.finish_game();
            return Ok(());
        };
        card.set_face_up(true);
        self.drawn = Some(card);
        debug!(seat = self.current, card = %card, "human drew");
        let msg = format!("{} drew a card.", self.current_player().name());
        self.log.push(msg);
        Ok(())
    }

    /// Records a CABO call by the human and ends their turn.
    pub fn declare_cabo(&mut self) -> Result<(), GameError> {
        self.require(HumanAction::DeclareCabo)?;
        self.record_cabo();
        self.advance_turn();
        Ok(())
    }

    fn record_cabo(&mut self) {
        self.cabo_player = Some(self.current);
        info!(seat = self.current, "CABO declared");
        let msg = format!("{} declares CABO!", self.current_player().name());
        self.log.push(msg);
    }

    fn choose_disposition(&mut self, pending: PendingAction) {
        self.pending = pending;
        self.switch_source = None;
        if let Some(prompt) = pending.prompt() {
            self.log.push(prompt);
        }
    }

    /// Finds the slot under the pointer, checking seats in order.
    pub fn pointer_target(&self, locator: &dyn SlotLocator) -> Option<Target> {
        self.players.iter().enumerate().find_map(|(seat, p)| {
            locator
                .slot_at_pointer(seat, p.hand())
                .map(|slot| Target::new(seat, slot))
        })
    }

    /// Routes a pointer press to the pending disposition.
    pub fn click(&mut self, locator: &dyn SlotLocator) -> bool {
        let target = self.pointer_target(locator);
        self.select(target)
    }

    /// Feeds a picked slot to the pending disposition. Returns `false`, with
    /// nothing changed, when there is no pending disposition or the pick is
    /// not a valid target for it.
    pub fn select(&mut self, target: Option<Target>) -> bool {
        let Some(target) = target else {
            return false;
        };
        match self.pending {
            PendingAction::None => false,
            PendingAction::Swapping if target.seat == self.current => {
                self.resolve_swap(target.slot)
            }
            PendingAction::Swapping => false,
            PendingAction::Peeking => self.resolve_peek(target),
            PendingAction::Spying => self.resolve_spy(target),
            PendingAction::Switching => self.resolve_switch(target),
        }
    }

    /// Puts the drawn card into the current player's `slot` and discards the
    /// card it replaces. Every computer forgets that slot.
    pub fn resolve_swap(&mut self, slot: usize) -> bool {
        if self.pending != PendingAction::Swapping {
            return false;
        }
        let Some(card) = self.drawn else {
            return false;
        };
        let seat = self.current;
        let Ok(displaced) = self.players[seat].hand_mut().swap_at(slot, card) else {
            return false;
        };
        self.drawn = None;
        self.put_on_discard(displaced);
        self.forget_everywhere(seat, slot);
        debug!(seat, slot, card = %card, replaced = %displaced, "human swapped");
        self.log.push(format!(
            "Swapped the drawn card with card {} in the hand.",
            slot + 1
        ));
        self.complete_disposition();
        true
    }

    /// Turns one of the current player's own cards face-up.
    pub fn resolve_peek(&mut self, target: Target) -> bool {
        if self.pending != PendingAction::Peeking || target.seat != self.current {
            return false;
        }
        if self.players[target.seat]
            .hand_mut()
            .set_face_up(target.slot, true)
            .is_err()
        {
            return false;
        }
        debug!(seat = target.seat, slot = target.slot, "human peeked");
        self.log
            .push(format!("Revealed card {} in the hand.", target.slot + 1));
        self.discard_drawn();
        self.complete_disposition();
        true
    }

    /// Turns one card of another player face-up.
    pub fn resolve_spy(&mut self, target: Target) -> bool {
        if self.pending != PendingAction::Spying || target.seat == self.current {
            return false;
        }
        let Some(victim) = self.players.get_mut(target.seat) else {
            return false;
        };
        if victim.hand_mut().set_face_up(target.slot, true).is_err() {
            return false;
        }
        let msg = format!("Spied on {}'s card.", victim.name());
        debug!(seat = target.seat, slot = target.slot, "human spied");
        self.log.push(msg);
        self.discard_drawn();
        self.complete_disposition();
        true
    }

    /// Two-step switch: the first pick must be an own slot and is only
    /// remembered; the second must be another player's slot and performs the
    /// exchange.
    pub fn resolve_switch(&mut self, target: Target) -> bool {
        if self.pending != PendingAction::Switching {
            return false;
        }
        let seat = self.current;
        match self.switch_source {
            None => {
                if target.seat != seat || target.slot >= self.players[seat].hand().len() {
                    return false;
                }
                self.switch_source = Some(target.slot);
                true
            }
            Some(source) => {
                if target.seat == seat {
                    return false;
                }
                if let Err(e) = self.switch_cards(Target::new(seat, source), target) {
                    debug!(error = %e, "switch target rejected");
                    return false;
                }
                let msg = format!("Switched a card with {}", self.players[target.seat].name());
                self.log.push(msg);
                self.discard_drawn();
                self.complete_disposition();
                true
            }
        }
    }

    fn complete_disposition(&mut self) {
        self.pending = PendingAction::None;
        self.switch_source = None;
        self.drawn = None;
        self.turn_resolved = true;
    }

    /// Exchanges the cards at `a` and `b`; every computer's knowledge of the
    /// two positions is exchanged with them. Nothing moves on error.
    pub(crate) fn switch_cards(&mut self, a: Target, b: Target) -> Result<(), GameError> {
        let n = self.players.len();
        if let Some(bad) = [a, b].iter().find(|t| t.seat >= n) {
            return Err(GameError::NoSuchSeat { seat: bad.seat });
        }
        if a.seat == b.seat {
            self.players[a.seat]
                .hand_mut()
                .switch_within(a.slot, b.slot)?;
        } else {
            let (first, second) = two_mut(&mut self.players, a.seat, b.seat);
            first
                .hand_mut()
                .switch_with(a.slot, second.hand_mut(), b.slot)?;
        }
        for p in &mut self.players {
            if let Some(k) = p.knowledge_mut() {
                k.exchange((a.seat, a.slot), (b.seat, b.slot));
            }
        }
        debug!(
            from_seat = a.seat,
            from_slot = a.slot,
            to_seat = b.seat,
            to_slot = b.slot,
            "cards switched"
        );
        Ok(())
    }

    fn forget_everywhere(&mut self, seat: usize, slot: usize) {
        for p in &mut self.players {
            if let Some(k) = p.knowledge_mut() {
                k.forget(seat, slot);
            }
        }
    }

    fn put_on_discard(&mut self, card: Card) {
        if let Err(e) = self.discard.add(card) {
            warn!(error = %e, card = %card, "discard pile rejected a card");
        }
    }

    fn discard_drawn(&mut self) {
        if let Some(card) = self.drawn.take() {
            self.put_on_discard(card);
        }
    }

    /// Ends the current turn: hides every card, discards any drawn card, and
    /// moves to the next seat. Reaching the seat that called CABO ends the game.
    pub fn advance_turn(&mut self) {
        if self.game_over {
            return;
        }
        for p in &mut self.players {
            p.hand_mut().hide_all();
        }
        self.discard_drawn();
        self.pending = PendingAction::None;
        self.switch_source = None;
        self.turn_resolved = false;
        self.current = (self.current + 1) % self.players.len();
        if Some(self.current) == self.cabo_player {
            self.finish_game();
        } else {
            self.announce_turn();
        }
    }

    fn announce_turn(&mut self) {
        info!(seat = self.current, name = %self.current_player().name(), "turn started");
        let msg = format!("Turn for {}", self.current_player().name());
        self.log.push(msg);
    }

    fn finish_game(&mut self) {
        self.game_over = true;
        self.discard_drawn();
        self.pending = PendingAction::None;
        self.switch_source = None;
        for p in &mut self.players {
            p.hand_mut().reveal_all();
        }
        let outcome = GameOutcome::from_players(&self.players);
        info!(winner = ?outcome.winner_name(), "game over");
    }

    /// Runs a whole computer turn as one step: draw, let `policy` decide,
    /// apply, maybe call CABO, and advance to the next seat.
    ///
    /// An empty deck ends the game at once and returns
    /// [`ComputerTurn::DeckExhausted`]. A move the engine cannot carry out
    /// (bad slot, action that does not match the card) becomes a plain discard.
    ///
    /// # Errors
    ///
    /// [`GameError::NotComputerTurn`] if the current seat is human, and
    /// [`GameError::IllegalTransition`] if the turn has already started or
    /// the game is over.
    pub fn play_computer_turn<P: TurnPolicy + ?Sized>(
        &mut self,
        policy: &mut P,
    ) -> Result<ComputerTurn, GameError> {
        let seat = self.current;
        if !self.players[seat].is_computer() {
            return Err(GameError::NotComputerTurn { seat });
        }
        let phase = self.phase();
        if phase != Phase::AwaitingDraw {
            return Err(GameError::IllegalTransition {
                action: "Computer turn",
                phase,
            });
        }
        let name = self.players[seat].name().to_string();
        self.log.push(format!("{} is taking their turn.", name));

        let Ok(mut card) = self.deck.draw() else {
            info!(seat, "deck exhausted on computer draw");
            self.finish_game();
            return Ok(ComputerTurn::DeckExhausted);
        };
        card.set_face_up(true);
        self.drawn = Some(card);
        self.log.push(format!("{} drew a card.", name));

        let chosen = policy.choose_move(self, seat, &card);
        debug!(seat, card = %card, chosen = ?chosen, "computer decided");
        self.drawn = None;
        let applied = self.apply_computer_move(seat, card, chosen);

        let mut declared_cabo = false;
        if self.cabo_player.is_none() && policy.wants_cabo(self, seat) {
            self.record_cabo();
            declared_cabo = true;
        }
        self.advance_turn();
        Ok(ComputerTurn::Played {
            drawn: card,
            applied,
            declared_cabo,
        })
    }

    fn apply_computer_move(&mut self, seat: usize, card: Card, mv: ComputerMove) -> ComputerMove {
        match mv {
            ComputerMove::Swap { slot } => {
                match self.players[seat].hand_mut().swap_at(slot, card) {
                    Ok(displaced) => {
                        self.put_on_discard(displaced);
                        self.forget_everywhere(seat, slot);
                        if let Some(k) = self.players[seat].knowledge_mut() {
                            k.set_known(seat, slot, true);
                        }
                        let msg = format!(
                            "{} swapped the drawn card with card {} in their hand.",
                            self.players[seat].name(),
                            slot + 1
                        );
                        self.log.push(msg);
                        mv
                    }
                    Err(e) => {
                        warn!(seat, error = %e, "computer swap rejected");
                        self.discard_unused(seat, card)
                    }
                }
            }
            ComputerMove::UseAction(plan) if card.action_type() == Some(plan.action_type()) => {
                match self.apply_action_plan(seat, plan) {
                    Ok(()) => {
                        self.put_on_discard(card);
                        mv
                    }
                    Err(e) => {
                        warn!(seat, error = %e, plan = ?plan, "computer action rejected");
                        self.discard_unused(seat, card)
                    }
                }
            }
            ComputerMove::UseAction(plan) => {
                warn!(seat, card = %card, plan = ?plan, "action does not match drawn card");
                self.discard_unused(seat, card)
            }
            ComputerMove::Discard => self.discard_unused(seat, card),
        }
    }

    fn discard_unused(&mut self, seat: usize, card: Card) -> ComputerMove {
        self.put_on_discard(card);
        let msg = format!(
            "{} discarded the drawn card: {}",
            self.players[seat].name(),
            card
        );
        self.log.push(msg);
        ComputerMove::Discard
    }

    fn apply_action_plan(&mut self, seat: usize, plan: ActionPlan) -> Result<(), GameError> {
        let n = self.players.len();
        let name = self.players[seat].name().to_string();
        match plan {
            ActionPlan::Peek { slot } => {
                if let Some(slot) = slot {
                    let len = self.players[seat].hand().len();
                    if slot >= len {
                        return Err(GameError::SlotOutOfRange { index: slot, len });
                    }
                }
                self.log.push(format!(
                    "{} uses an action card: {}",
                    name,
                    plan.action_type()
                ));
                if let Some(slot) = slot {
                    if let Some(k) = self.players[seat].knowledge_mut() {
                        k.set_known(seat, slot, true);
                    }
                    self.log
                        .push(format!("{} peeked at their card {}", name, slot + 1));
                }
            }
            ActionPlan::Spy {
                seat: victim,
                slot,
            } => {
                if victim >= n {
                    return Err(GameError::NoSuchSeat { seat: victim });
                }
                if victim == seat {
                    return Err(GameError::InvalidTarget);
                }
                if let Some(slot) = slot {
                    let len = self.players[victim].hand().len();
                    if slot >= len {
                        return Err(GameError::SlotOutOfRange { index: slot, len });
                    }
                }
                self.log.push(format!(
                    "{} uses an action card: {}",
                    name,
                    plan.action_type()
                ));
                if let Some(slot) = slot {
                    if let Some(k) = self.players[seat].knowledge_mut() {
                        k.set_known(victim, slot, true);
                    }
                    let msg = format!(
                        "{} spied on {}'s card {}",
                        name,
                        self.players[victim].name(),
                        slot + 1
                    );
                    self.log.push(msg);
                }
            }
            ActionPlan::Switch {
                own_slot,
                seat: victim,
                slot,
            } => {
                if victim == seat {
                    return Err(GameError::InvalidTarget);
                }
                self.switch_cards(Target::new(seat, own_slot), Target::new(victim, slot))?;
                self.log.push(format!(
                    "{} uses an action card: {}",
                    name,
                    plan.action_type()
                ));
                let msg = format!(
                    "{} switched card {} with {}'s {}.",
                    name,
                    own_slot + 1,
                    self.players[victim].name(),
                    slot + 1
                );
                self.log.push(msg);
            }
        }
        debug!(seat, plan = ?plan, "computer action applied");
        Ok(())
    }

    /// Read-only snapshot for rendering.
    pub fn view(&self) -> TableView {
        TableView {
            deck_remaining: self.deck.len(),
            discard_top: self.discard.top().map(|c| CardView {
                face_up: true,
                ..CardView::from(c)
            }),
            drawn: self.drawn.as_ref().map(CardView::from),
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(seat, p)| PlayerView {
                    name: p.name().to_string(),
                    label: p.label(),
                    is_computer: p.is_computer(),
                    is_current: seat == self.current,
                    cards: p.hand().cards().iter().map(CardView::from).collect(),
                })
                .collect(),
            current_seat: self.current,
            phase: self.phase(),
            pending: self.pending,
            cabo_player: self.cabo_player,
            legal: self.legal_actions(),
            messages: self.log.messages(),
            outcome: self.outcome(),
        }
    }
}

/// Mutable references to two distinct elements.
fn two_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn hand_of(player: &mut Player, ranks: [Rank; 4], suit: Suit) {
        for r in ranks {
            player.give_card(Card::new(r, suit)).unwrap();
        }
    }

    fn two_computers() -> Engine {
        let mut a = Player::computer("A", 0);
        let mut b = Player::computer("B", 1);
        hand_of(&mut a, [Rank::Ace, Rank::Two, Rank::Three, Rank::Four], Suit::Clubs);
        hand_of(&mut b, [Rank::Five, Rank::Six, Rank::Seven, Rank::Eight], Suit::Hearts);
        Engine::from_deal(vec![a, b], CardCollection::pile()).unwrap()
    }

    #[test]
    fn switch_cards_across_hands_moves_knowledge_with_cards() {
        let mut eng = two_computers();
        eng.players[0].knowledge_mut().unwrap().set_known(0, 1, true);
        eng.switch_cards(Target::new(0, 1), Target::new(1, 3)).unwrap();

        assert_eq!(eng.players[0].hand().cards()[1].rank(), Rank::Eight);
        assert_eq!(eng.players[1].hand().cards()[3].rank(), Rank::Two);
        let k = eng.players[0].knowledge().unwrap();
        assert!(!k.is_known(0, 1));
        assert!(k.is_known(1, 3));
    }

    #[test]
    fn switch_cards_within_one_hand_is_safe() {
        let mut eng = two_computers();
        eng.switch_cards(Target::new(1, 2), Target::new(1, 2)).unwrap();
        assert_eq!(eng.players[1].hand().cards()[2].rank(), Rank::Seven);
        eng.switch_cards(Target::new(1, 0), Target::new(1, 2)).unwrap();
        assert_eq!(eng.players[1].hand().cards()[0].rank(), Rank::Seven);
        assert_eq!(eng.players[1].hand().cards()[2].rank(), Rank::Five);
        assert_eq!(eng.players[1].hand().len(), 4);
    }

    #[test]
    fn switch_cards_rejects_unknown_seat() {
        let mut eng = two_computers();
        let err = eng
            .switch_cards(Target::new(0, 0), Target::new(3, 0))
            .unwrap_err();
        assert_eq!(err, GameError::NoSuchSeat { seat: 3 });
    }

    #[test]
    fn two_mut_returns_requested_order() {
        let mut v = [1, 2, 3];
        let (a, b) = two_mut(&mut v, 2, 0);
        assert_eq!((*a, *b), (3, 1));
    }
}
