use cabo_engine::cards::{Card, Rank, Suit};
use cabo_engine::deck::CardCollection;
use cabo_engine::engine::Engine;
use cabo_engine::player::Player;
use cabo_engine::policy::{ActionPlan, ComputerMove, ComputerTurn, TurnPolicy};
use cabo_engine::rules::HumanAction;
use cabo_engine::view::Target;

/// Plays the queued moves in order, then discards.
struct Scripted(Vec<ComputerMove>);

impl TurnPolicy for Scripted {
    fn choose_move(&mut self, _engine: &Engine, _seat: usize, _drawn: &Card) -> ComputerMove {
        if self.0.is_empty() {
            ComputerMove::Discard
        } else {
            self.0.remove(0)
        }
    }

    fn wants_cabo(&mut self, _engine: &Engine, _seat: usize) -> bool {
        false
    }
}

fn fill(p: &mut Player, suit: Suit) {
    for r in [Rank::Two, Rank::Three, Rank::Four, Rank::Five] {
        p.give_card(Card::new(r, suit)).unwrap();
    }
}

/// Human at 0, computers at 1 and 2. Seat 2 starts knowing its own slot 3
/// and seat 1's slot 0. `deck` is drawn from the end.
fn table(deck: Vec<Card>) -> Engine {
    let mut human = Player::human("Cyntra", 0);
    let mut one = Player::computer("Avalon", 1);
    let mut two = Player::computer("Balthor", 2);
    fill(&mut human, Suit::Clubs);
    fill(&mut one, Suit::Hearts);
    fill(&mut two, Suit::Spades);
    let k = two.knowledge_mut().unwrap();
    k.set_known(2, 3, true);
    k.set_known(1, 0, true);
    Engine::from_deal(vec![human, one, two], CardCollection::from_cards(deck)).unwrap()
}

fn knows(eng: &Engine, observer: usize, seat: usize, slot: usize) -> bool {
    eng.players()[observer]
        .knowledge()
        .unwrap()
        .is_known(seat, slot)
}

#[test]
fn human_switch_moves_knowledge_with_the_card() {
    let mut eng = table(vec![Card::new(Rank::Jack, Suit::Diamonds)]);
    eng.invoke(HumanAction::Draw).unwrap();
    eng.invoke(HumanAction::UseAction).unwrap();
    assert!(eng.select(Some(Target::new(0, 1))));
    assert!(eng.select(Some(Target::new(2, 3))));

    // Balthor saw the five of spades in its slot 3; that card now sits in Cyntra's slot 1
    assert!(!knows(&eng, 2, 2, 3));
    assert!(knows(&eng, 2, 0, 1));
    assert_eq!(
        eng.players()[0].hand().cards()[1],
        Card::new(Rank::Five, Suit::Spades)
    );
    // Avalon saw neither position
    assert!(!knows(&eng, 1, 0, 1));
    assert!(!knows(&eng, 1, 2, 3));
}

#[test]
fn human_swap_makes_everyone_forget_the_slot() {
    let mut eng = table(vec![Card::new(Rank::Ace, Suit::Diamonds)]);
    eng.invoke(HumanAction::Draw).unwrap();
    eng.invoke(HumanAction::BeginSwap).unwrap();
    assert!(eng.select(Some(Target::new(0, 0))));
    assert!(!knows(&eng, 2, 0, 0));
    // unrelated knowledge survives
    assert!(knows(&eng, 2, 1, 0));
}

#[test]
fn computer_swap_marks_own_slot_and_clears_others() {
    let mut eng = table(vec![
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Diamonds),
    ]);
    eng.invoke(HumanAction::Draw).unwrap();
    eng.invoke(HumanAction::EndTurn).unwrap();
    assert_eq!(eng.current_seat(), 1);

    let mut ai = Scripted(vec![ComputerMove::Swap { slot: 0 }]);
    let turn = eng.play_computer_turn(&mut ai).unwrap();
    assert!(matches!(
        turn,
        ComputerTurn::Played {
            applied: ComputerMove::Swap { slot: 0 },
            ..
        }
    ));
    assert_eq!(
        eng.players()[1].hand().cards()[0],
        Card::new(Rank::Ace, Suit::Diamonds)
    );
    assert!(knows(&eng, 1, 1, 0));
    // Balthor had seen the old card there
    assert!(!knows(&eng, 2, 1, 0));
    assert!(eng
        .messages()
        .contains(&"Avalon swapped the drawn card with card 1 in their hand.".to_string()));
}

#[test]
fn computer_switch_exchanges_every_observer() {
    let mut eng = table(vec![
        Card::new(Rank::Queen, Suit::Clubs),
        Card::new(Rank::Six, Suit::Diamonds),
    ]);
    eng.invoke(HumanAction::Draw).unwrap();
    eng.invoke(HumanAction::EndTurn).unwrap();

    let plan = ActionPlan::Switch {
        own_slot: 0,
        seat: 2,
        slot: 3,
    };
    let mut ai = Scripted(vec![ComputerMove::UseAction(plan)]);
    eng.play_computer_turn(&mut ai).unwrap();

    assert_eq!(
        eng.players()[1].hand().cards()[0],
        Card::new(Rank::Five, Suit::Spades)
    );
    // Balthor knew both positions before, so it still knows both
    assert!(knows(&eng, 2, 1, 0));
    assert!(knows(&eng, 2, 2, 3));
    assert!(eng
        .messages()
        .contains(&"Avalon switched card 1 with Balthor's 4.".to_string()));
}

#[test]
fn computer_peek_and_spy_record_knowledge() {
    let mut eng = table(vec![
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Six, Suit::Diamonds),
    ]);
    eng.invoke(HumanAction::Draw).unwrap();
    eng.invoke(HumanAction::EndTurn).unwrap();

    let mut ai = Scripted(vec![
        ComputerMove::UseAction(ActionPlan::Peek { slot: Some(2) }),
        ComputerMove::UseAction(ActionPlan::Spy {
            seat: 0,
            slot: Some(1),
        }),
    ]);
    eng.play_computer_turn(&mut ai).unwrap();
    assert!(knows(&eng, 1, 1, 2));
    assert!(!eng.players()[1].hand().cards()[2].is_face_up());
    assert!(eng
        .messages()
        .contains(&"Avalon uses an action card: peek".to_string()));

    eng.play_computer_turn(&mut ai).unwrap();
    assert!(knows(&eng, 2, 0, 1));
    assert!(eng
        .messages()
        .contains(&"Balthor uses an action card: spy".to_string()));
    assert!(eng
        .messages()
        .contains(&"Balthor spied on Cyntra's card 2".to_string()));
}

#[test]
fn mismatched_computer_action_becomes_discard() {
    let mut eng = table(vec![
        Card::new(Rank::Seven, Suit::Clubs),
        Card::new(Rank::Six, Suit::Diamonds),
    ]);
    eng.invoke(HumanAction::Draw).unwrap();
    eng.invoke(HumanAction::EndTurn).unwrap();

    let plan = ActionPlan::Switch {
        own_slot: 0,
        seat: 2,
        slot: 0,
    };
    let mut ai = Scripted(vec![ComputerMove::UseAction(plan)]);
    let turn = eng.play_computer_turn(&mut ai).unwrap();
    assert!(matches!(
        turn,
        ComputerTurn::Played {
            applied: ComputerMove::Discard,
            ..
        }
    ));
    assert_eq!(
        eng.players()[1].hand().cards()[0],
        Card::new(Rank::Two, Suit::Hearts)
    );
    assert_eq!(eng.discard().top(), Some(&Card::new(Rank::Seven, Suit::Clubs)));
}
