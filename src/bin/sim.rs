#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use polyship::{
    BoardId, GameController, MatchConfig, Phase, RecordingRenderer, ShotLog, Side, BOARD_SIZE,
};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

/// Plays one match with random player shots and prints a JSON summary.
#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("sim");
    let [_, seed] = args.as_slice() else {
        eprintln!("Usage: {} <seed>", program);
        std::process::exit(1);
    };
    let seed: u64 = seed.parse()?;

    let config = MatchConfig::default().with_seed(seed);
    let mut controller = GameController::from_config(RecordingRenderer::new(), config)?;
    let mut shooter = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut fired = ShotLog::new();

    controller.start()?;
    while controller.phase() == Phase::InProgress && fired.len() < BOARD_SIZE {
        let index = fired
            .pick_untried(&mut shooter)
            .ok_or_else(|| anyhow::anyhow!("player ran out of targets"))?;
        fired.insert(index);
        if let Some(reply) = controller.on_cell_activated(BoardId::Opponent, index) {
            controller.opponent_reply(reply);
        }
    }

    let winner = match controller.winner() {
        Some(Side::Player) => Some("player"),
        Some(Side::Opponent) => Some("opponent"),
        None => None,
    };
    let result = json!({
        "seed": seed,
        "winner": winner,
        "player": {
            "shots": controller.turns().shots_fired(Side::Player),
            "ships_sunk": controller.board(BoardId::Opponent).sunk_ships(),
        },
        "opponent": {
            "shots": controller.turns().shots_fired(Side::Opponent),
            "ships_sunk": controller.board(BoardId::Player).sunk_ships(),
        },
        "status": controller.renderer().last_status(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
