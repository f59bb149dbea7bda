//! Deal command handler.
//!
//! Deals an opening four-seat table and shows it as the human would see it
//! (own slots 1 and 2 face-up), or dumps the whole snapshot as JSON.

use crate::config;
use crate::error::CliError;
use crate::formatters::TextRenderer;
use cabo_engine::engine::Engine;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let name = cfg.player_name;
    let eng = Engine::new(Some(seed), Engine::standard_table(&name))?;
    let view = eng.view();
    if json {
        writeln!(out, "{}", view.to_json()?)?;
    } else {
        writeln!(out, "deal: seed={}", seed)?;
        view.render(&mut TextRenderer::new(out, false, false))?;
    }
    Ok(())
}
