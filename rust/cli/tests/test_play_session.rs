//! Scripted interactive sessions through `cabo_cli::run_with_input`.

use serial_test::serial;
use std::io::Cursor;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    for key in [
        cabo_cli::config::ENV_CONFIG,
        cabo_cli::config::ENV_SEED,
        cabo_cli::config::ENV_PLAYER_NAME,
        cabo_cli::config::ENV_AI,
        cabo_cli::config::ENV_REVEAL_ALL,
    ] {
        // SAFETY: every test here runs under #[serial]
        unsafe { std::env::remove_var(key) };
    }
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cabo_cli::run_with_input(args, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn quit_at_first_prompt() {
    let (code, out, err) = play(&["cabo", "play", "--seed", "1"], "q\n");
    assert_eq!(code, 0);
    assert!(out.contains("play: seed=1 name=Cyntra ai=greedy"));
    assert!(out.contains("Commands: draw, swap, action, cabo, end"));
    assert!(out.contains("Quit."));
    assert!(err.is_empty());
}

#[test]
#[serial]
fn name_flag_renames_the_human_seat() {
    let (code, out, _) = play(&["cabo", "play", "--seed", "1", "--name", "Mira"], "q\n");
    assert_eq!(code, 0);
    assert!(out.contains("*[0] Mira (you): "));
    assert!(out.contains("> Turn for Mira"));
}

#[test]
#[serial]
fn reveal_all_shows_every_card() {
    let (code, out, _) = play(&["cabo", "play", "--seed", "1", "--reveal-all"], "q\n");
    assert_eq!(code, 0);
    assert!(!out.contains("##"));
}

#[test]
#[serial]
fn bad_lines_do_not_end_the_game() {
    let (code, out, err) = play(
        &["cabo", "play", "--seed", "8"],
        "dance\npick\npick 9\n\ndraw\nend\nq\n",
    );
    assert_eq!(code, 0);
    assert!(err.contains("Unrecognized command 'dance'"));
    assert!(err.contains("pick requires a target"));
    assert!(err.contains("Empty input"));
    assert!(out.contains("> Cyntra drew a card."));
    assert!(out.contains("Quit."));
}

#[test]
#[serial]
fn declaring_cabo_finishes_after_one_round() {
    let (code, out, _) = play(&["cabo", "play", "--seed", "21"], "cabo\n");
    assert_eq!(code, 0);
    let (_, end) = out.split_once("Game over.").unwrap();
    for name in ["Cyntra", "Avalon", "Balthor", "Ophira"] {
        assert!(end.contains(&format!("{}'s score: ", name)));
    }
    assert_eq!(out.matches("is taking their turn.").count(), 3);
}

#[test]
#[serial]
fn drawing_and_ending_reaches_game_over() {
    // the deck holds 36 cards after the deal, so the game cannot outlast this
    let script = "draw\nend\n".repeat(15);
    let (code, out, err) = play(&["cabo", "play", "--seed", "404"], &script);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.contains("Game over."));
    assert!(out.contains("Winner: ") || out.contains("No Winner. The war starts."));
}

#[test]
#[serial]
fn closed_input_exits_130() {
    let (code, _, err) = play(&["cabo", "play", "--seed", "2"], "draw\n");
    assert_eq!(code, 130);
    assert!(err.contains("Interrupted"));
}
