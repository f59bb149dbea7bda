//! End-to-end checks of every subcommand through `cabo_cli::run`.

use serde_json::Value;
use serial_test::serial;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cabo_cli::run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn clear_env() {
    for key in [
        cabo_cli::config::ENV_CONFIG,
        cabo_cli::config::ENV_SEED,
        cabo_cli::config::ENV_PLAYER_NAME,
        cabo_cli::config::ENV_AI,
        cabo_cli::config::ENV_REVEAL_ALL,
    ] {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn help_lists_every_subcommand() {
    let (code, out, _) = run(&["cabo", "--help"]);
    assert_eq!(code, 0);
    for cmd in cabo_cli::cli::Commands::NAMES {
        assert!(out.contains(cmd), "help should mention '{}'", cmd);
    }
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let (code, out, err) = run(&["cabo"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Usage: cabo <command> [options]"));
}

#[test]
#[serial]
fn deal_is_reproducible_and_hides_opponents() {
    let (code, first, _) = run(&["cabo", "deal", "--seed", "2024"]);
    let (_, second, _) = run(&["cabo", "deal", "--seed", "2024"]);
    assert_eq!(code, 0);
    assert_eq!(first, second);

    let lines: Vec<&str> = first.lines().collect();
    assert_eq!(lines[0], "deal: seed=2024");
    assert_eq!(lines[1], "Deck: 36 cards | Discard: empty");
    assert!(lines[2].starts_with("*[0] Cyntra (you): 1:"));
    // own slots 3 and 4 stay face-down
    assert!(lines[2].ends_with("3:## 4:##"));
    for line in &lines[3..6] {
        assert!(line.contains("1:## 2:## 3:## 4:##"), "{}", line);
    }
    assert!(lines[6].starts_with("Controls: [Draw from Deck: draw]"));
}

#[test]
#[serial]
fn deal_json_snapshot() {
    let (code, out, _) = run(&["cabo", "deal", "--seed", "5", "--json"]);
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(json["phase"], "AwaitingDraw");
    assert_eq!(json["players"].as_array().unwrap().len(), 4);
}

#[test]
fn check_deck_passes_for_any_seed() {
    for seed in ["0", "1", "99999"] {
        let (code, out, err) = run(&["cabo", "check-deck", "--seed", seed]);
        assert_eq!(code, 0, "stderr: {}", err);
        assert!(out.contains("Cards: 52 (52 distinct)"));
        assert!(out.contains("Actions: peek=8 spy=8 switch=8"));
        assert!(out.trim_end().ends_with("Deck OK"));
    }
}

#[test]
#[serial]
fn sim_reports_a_tally() {
    clear_env();
    let (code, out, err) = run(&["cabo", "sim", "--games", "4", "--seed", "77"]);
    assert_eq!(code, 0, "stderr: {}", err);
    assert!(out.starts_with("sim: games=4 seed=77 ai=greedy"));
    let wins: u32 = out
        .lines()
        .filter_map(|l| l.strip_suffix(" wins"))
        .filter_map(|l| l.rsplit(": ").next())
        .map(|n| n.parse::<u32>().unwrap())
        .sum();
    let ties: u32 = out
        .lines()
        .find_map(|l| l.strip_prefix("Ties: "))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(wins + ties, 4);
}

#[test]
fn sim_rejects_zero_games() {
    let (code, _, err) = run(&["cabo", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(!err.is_empty());
}

#[test]
#[serial]
fn cfg_reports_sources() {
    clear_env();
    // SAFETY: serialized with the other environment tests
    unsafe { std::env::set_var(cabo_cli::config::ENV_SEED, "31") };
    let (code, out, _) = run(&["cabo", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["seed"]["value"], 31);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["player_name"]["value"], "Cyntra");
    assert_eq!(json["player_name"]["source"], "default");
    assert_eq!(json["ai"]["value"], "greedy");
}

#[test]
#[serial]
fn cfg_file_then_env() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cabo.toml");
    std::fs::write(&path, "player_name = \"Mira\"\nai = \"greedy\"\nseed = 4\n").unwrap();
    // SAFETY: serialized with the other environment tests
    unsafe {
        std::env::set_var(cabo_cli::config::ENV_CONFIG, &path);
        std::env::set_var(cabo_cli::config::ENV_SEED, "8");
    }
    let (code, out, _) = run(&["cabo", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["player_name"]["value"], "Mira");
    assert_eq!(json["player_name"]["source"], "file");
    assert_eq!(json["seed"]["value"], 8);
    assert_eq!(json["seed"]["source"], "env");
}

#[test]
#[serial]
fn broken_config_file_is_an_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cabo.toml");
    std::fs::write(&path, "seed = \"not a number\"").unwrap();
    // SAFETY: serialized with the other environment tests
    unsafe { std::env::set_var(cabo_cli::config::ENV_CONFIG, &path) };
    let (code, _, err) = run(&["cabo", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
    assert_eq!(err.matches("Error: ").count(), 1, "reported once: {}", err);
}
