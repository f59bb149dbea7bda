//! Input parsing for the interactive `play` command.
//!
//! Each line typed at the prompt becomes one [`ParseResult`]: a control, a
//! slot pick, a redisplay request, quit, or an error message to show.

use cabo_engine::rules::HumanAction;
use cabo_engine::view::Target;

#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// One of the five table controls
    Action(HumanAction),
    /// Point at a card: `pick S.N`, seat S, 1-based slot N
    Pick(Target),
    /// Redraw the table and the recent feed
    Show,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

pub const HELP: &str =
    "Commands: draw, swap, action, cabo, end, pick S.N (seat S, card N), show, q";

/// Parse one line of `play` input (case-insensitive).
///
/// ```rust
/// # use cabo_cli::validation::{parse_play_input, ParseResult};
/// use cabo_engine::rules::HumanAction;
/// use cabo_engine::view::Target;
///
/// assert_eq!(parse_play_input("draw"), ParseResult::Action(HumanAction::Draw));
/// assert_eq!(parse_play_input("pick 2.3"), ParseResult::Pick(Target::new(2, 2)));
/// assert_eq!(parse_play_input("Q"), ParseResult::Quit);
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&head) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match head {
        "q" | "quit" => ParseResult::Quit,
        "show" | "s" => ParseResult::Show,
        "draw" | "d" => ParseResult::Action(HumanAction::Draw),
        "swap" => ParseResult::Action(HumanAction::BeginSwap),
        "action" | "use" | "a" => ParseResult::Action(HumanAction::UseAction),
        "cabo" => ParseResult::Action(HumanAction::DeclareCabo),
        "end" | "e" => ParseResult::Action(HumanAction::EndTurn),
        "pick" | "p" => match parts.get(1) {
            Some(arg) => match parse_target(arg) {
                Ok(target) => ParseResult::Pick(target),
                Err(msg) => ParseResult::Invalid(msg),
            },
            None => ParseResult::Invalid("pick requires a target (e.g., 'pick 1.3')".to_string()),
        },
        _ => ParseResult::Invalid(format!("Unrecognized command '{}'. {}", head, HELP)),
    }
}

/// Parse `S.N` into a target: seat `S` as shown on the table, card `N` counted from 1.
pub fn parse_target(s: &str) -> Result<Target, String> {
    let (seat, slot) = s
        .split_once('.')
        .ok_or_else(|| format!("Invalid target '{}': expected SEAT.CARD", s))?;
    let seat: usize = seat
        .parse()
        .map_err(|_| format!("Invalid seat '{}'", seat))?;
    let slot: usize = slot
        .parse()
        .map_err(|_| format!("Invalid card number '{}'", slot))?;
    if slot == 0 {
        return Err("Card numbers start at 1".to_string());
    }
    Ok(Target::new(seat, slot - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_and_aliases() {
        assert_eq!(parse_play_input("SWAP"), ParseResult::Action(HumanAction::BeginSwap));
        assert_eq!(parse_play_input(" a "), ParseResult::Action(HumanAction::UseAction));
        assert_eq!(parse_play_input("cabo"), ParseResult::Action(HumanAction::DeclareCabo));
        assert_eq!(parse_play_input("e"), ParseResult::Action(HumanAction::EndTurn));
        assert_eq!(parse_play_input("show"), ParseResult::Show);
    }

    #[test]
    fn pick_targets() {
        assert_eq!(parse_play_input("p 0.1"), ParseResult::Pick(Target::new(0, 0)));
        assert!(matches!(parse_play_input("pick"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("pick 1.0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("pick x.2"), ParseResult::Invalid(_)));
        assert!(matches!(parse_play_input("pick 12"), ParseResult::Invalid(_)));
    }

    #[test]
    fn unknown_and_empty_input() {
        match parse_play_input("fold") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(
            parse_play_input("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
