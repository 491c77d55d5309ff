#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use polyship::{
    cli::{coord_to_string, parse_command, print_help, TerminalRenderer},
    init_logging, populate_with_retries, run_session, GameController, MatchConfig, UiEvent,
    MAX_POPULATE_ATTEMPTS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::BufRead;
#[cfg(feature = "std")]
use std::time::Duration;
#[cfg(feature = "std")]
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = polyship::REPLY_DELAY_MS, help = "Delay before the computer fires back")]
        reply_delay_ms: u64,
    },
    /// Print one randomly generated fleet layout.
    Layout {
        #[arg(long, help = "Fix RNG seed for a reproducible layout")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            reply_delay_ms,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut config =
                MatchConfig::default().with_reply_delay(Duration::from_millis(reply_delay_ms));
            config.seed = seed;

            print_help();
            let mut controller = GameController::from_config(TerminalRenderer::stdout(), config)?;

            let (tx, mut rx) = mpsc::channel::<UiEvent>(16);
            std::thread::spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    if line.trim().eq_ignore_ascii_case("help") {
                        print_help();
                        continue;
                    }
                    match parse_command(&line) {
                        Ok(event) => {
                            if tx.blocking_send(event).is_err() || event == UiEvent::Quit {
                                break;
                            }
                        }
                        Err(e) => eprintln!("✗ {}", e),
                    }
                }
            });

            let summary = run_session(&mut controller, &mut rx, config.reply_delay).await?;
            println!(
                "Played {} match(es); your shots: {}, computer shots: {}",
                summary.matches_played, summary.player_shots, summary.opponent_shots
            );
        }
        Commands::Layout { seed } => {
            let mut rng = seeded_rng(seed);
            let layout = populate_with_retries(&mut rng, MAX_POPULATE_ATTEMPTS)?;
            print!("{:?}", layout.grid());
            for ship in layout.ships() {
                println!(
                    "{:<10} at {:<3} rotated {:>3}°",
                    ship.kind.name(),
                    coord_to_string(polyship::to_index(ship.left, ship.top)),
                    ship.rotation.degrees()
                );
            }
        }
    }
    Ok(())
}
