use std::process::Command;

use serde_json::Value;

fn run_sim(seed: &str) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg(seed)
        .output()
        .expect("run sim");
    assert!(output.status.success(), "sim failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("sim prints json")
}

#[test]
fn test_sim_plays_to_the_end() {
    let result = run_sim("5");
    assert_eq!(result["seed"], 5);

    let winner = result["winner"].as_str().unwrap();
    assert!(winner == "player" || winner == "opponent");
    let status = result["status"].as_str().unwrap();
    match winner {
        "player" => assert_eq!(status, "🎉 You win!"),
        _ => assert_eq!(status, "💥 You lose!"),
    }

    let player_shots = result["player"]["shots"].as_u64().unwrap();
    let opponent_shots = result["opponent"]["shots"].as_u64().unwrap();
    assert!(player_shots == opponent_shots || player_shots == opponent_shots + 1);
    let sunk = result[winner]["ships_sunk"].as_u64().unwrap();
    assert_eq!(sunk, 8);
}

#[test]
fn test_sim_is_deterministic() {
    assert_eq!(run_sim("17"), run_sim("17"));
}

#[test]
fn test_sim_rejects_bad_seed() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("not-a-number")
        .output()
        .expect("run sim");
    assert!(!output.status.success());
}

#[test]
fn test_sim_without_seed_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("run sim");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
}
