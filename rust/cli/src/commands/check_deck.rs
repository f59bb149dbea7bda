//! Deck check command handler.
//!
//! Builds a fresh shuffled deck and confirms its composition: 52 distinct
//! cards, 8 of each action type, 13 of each suit, and the King of Diamonds
//! worth -1.

use crate::error::CliError;
use crate::ui;
use cabo_engine::deck::{CardCollection, DeckReport};
use std::io::Write;

pub fn handle_check_deck_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let report = DeckReport::inspect(&CardCollection::new_deck_with_seed(seed));
    write_report(&report, seed, out)?;
    if report.is_valid() {
        writeln!(out, "Deck OK")?;
        Ok(())
    } else {
        ui::write_error(err, "deck composition is wrong")?;
        Err(CliError::InvalidInput(format!(
            "deck check failed for seed {}",
            seed
        )))
    }
}

fn write_report(report: &DeckReport, seed: u64, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "check-deck: seed={}", seed)?;
    writeln!(out, "Cards: {} ({} distinct)", report.size, report.distinct)?;
    writeln!(
        out,
        "Actions: peek={} spy={} switch={}",
        report.peek, report.spy, report.switch
    )?;
    writeln!(
        out,
        "Suits: clubs={} diamonds={} hearts={} spades={}",
        report.clubs, report.diamonds, report.hearts, report.spades
    )?;
    writeln!(
        out,
        "King of Diamonds scores -1: {}",
        if report.king_of_diamonds_scores_minus_one {
            "yes"
        } else {
            "no"
        }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_passes() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_check_deck_command(Some(3), &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cards: 52 (52 distinct)"));
        assert!(text.contains("Actions: peek=8 spy=8 switch=8"));
        assert!(text.contains("King of Diamonds scores -1: yes"));
        assert!(text.trim_end().ends_with("Deck OK"));
        assert!(err.is_empty());
    }
}
