//! # Play Command
//!
//! Interactive CABO at the terminal: the human sits in seat 0 against three
//! computer opponents. The shell renders the table as text, maps typed
//! commands onto the five controls, and turns `pick S.N` into a pointer
//! position for the pending disposition. Computer turns run between inputs,
//! each as one atomic step.

use crate::config;
use crate::error::CliError;
use crate::formatters::{TextRenderer, TypedPointer, command_hint};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{HELP, ParseResult, parse_play_input};
use cabo_ai::{create_ai, play_computer_turn};
use cabo_engine::engine::Engine;
use cabo_engine::rules::Phase;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Options given on the command line; `None` falls back to the configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub seed: Option<u64>,
    pub name: Option<String>,
    pub ai: Option<String>,
    pub reveal_all: bool,
}

/// Handle the play command: one interactive game.
///
/// Returns `Ok(())` when the game ends or the user quits, and
/// `CliError::Interrupted` when input runs out mid-game.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    let mut cfg = resolved.config;
    if let Some(name) = opts.name {
        cfg.player_name = name;
    }
    if let Some(ai) = opts.ai {
        cfg.ai = ai;
    }
    cfg.seed = opts.seed.or(cfg.seed);
    cfg.reveal_all |= opts.reveal_all;
    config::validate(&cfg)?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut ai = create_ai(&cfg.ai, seed)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown ai '{}'", cfg.ai)))?;
    let mut eng = Engine::new(Some(seed), Engine::standard_table(&cfg.player_name))?;
    info!(seed, ai = %cfg.ai, "play session started");

    writeln!(
        out,
        "play: seed={} name={} ai={}",
        seed, cfg.player_name, cfg.ai
    )?;
    writeln!(out, "{}", HELP)?;
    if cfg.reveal_all {
        ui::display_warning(err, "reveal_all is on: every card is shown face-up")?;
    }

    let mut session = Session {
        eng: &mut eng,
        seen: 0,
        reveal_all: cfg.reveal_all,
    };
    session.flush_feed(out)?;
    session.render(out, false)?;

    loop {
        if session.eng.current_player().is_computer() {
            // One turn at a time so the feed never evicts unseen lines.
            while !session.eng.is_game_over() && session.eng.current_player().is_computer() {
                play_computer_turn(session.eng, ai.as_mut())?;
                session.flush_feed(out)?;
            }
            if session.eng.is_game_over() {
                break;
            }
            session.render(out, false)?;
        }

        write!(out, "{}> ", prompt_hint(session.eng))?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Err(CliError::Interrupted("input closed before the game ended".into()));
        };

        match parse_play_input(&line) {
            ParseResult::Action(action) => {
                if !session.eng.legal_actions().allows(action) {
                    ui::write_error(
                        err,
                        &format!("'{}' is not available right now", command_hint(action)),
                    )?;
                    continue;
                }
                if let Err(e) = session.eng.invoke(action) {
                    ui::write_error(err, &e.to_string())?;
                    continue;
                }
                debug!(action = %action, "human control");
                session.flush_feed(out)?;
                if session.eng.is_game_over() {
                    break;
                }
                if !session.eng.current_player().is_computer() {
                    session.render(out, false)?;
                }
            }
            ParseResult::Pick(target) => {
                if session.eng.click(&TypedPointer(target)) {
                    session.flush_feed(out)?;
                    session.render(out, false)?;
                } else {
                    writeln!(out, "Nothing happens.")?;
                }
            }
            ParseResult::Show => session.render(out, true)?,
            ParseResult::Quit => {
                writeln!(out, "Quit.")?;
                return Ok(());
            }
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    writeln!(out, "Game over.")?;
    session.render(out, false)?;
    if let Some(outcome) = session.eng.outcome() {
        for line in outcome.summary_lines() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// What the prompt reminds the player of.
fn prompt_hint(eng: &Engine) -> String {
    if let Some(prompt) = eng.pending_action().prompt() {
        return match eng.switch_source() {
            Some(slot) => format!("{} (card {} chosen) ", prompt, slot + 1),
            None => format!("{} ", prompt),
        };
    }
    match eng.phase() {
        Phase::TurnComplete => "end turn ".to_string(),
        _ => String::new(),
    }
}

struct Session<'e> {
    eng: &'e mut Engine,
    /// Feed lines already printed
    seen: usize,
    reveal_all: bool,
}

impl Session<'_> {
    fn flush_feed(&mut self, out: &mut dyn Write) -> Result<(), CliError> {
        let log = self.eng.status_log();
        ui::write_feed(out, &log.since(self.seen))?;
        self.seen = log.pushed();
        Ok(())
    }

    fn render(&self, out: &mut dyn Write, with_feed: bool) -> Result<(), CliError> {
        self.eng
            .view()
            .render(&mut TextRenderer::new(out, self.reveal_all, with_feed))?;
        Ok(())
    }
}
