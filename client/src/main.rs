mod config;
mod render;
mod runner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode};
use common::{log, logger};
use tokio::io::BufReader;

use config::{CONFIG_FILE, ClientConfigStore};
use runner::Runner;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe in the terminal, against a friend or the computer")]
struct Args {
    /// YAML settings file; created on exit if the settings changed
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// pvp or cpu
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, normal or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    debug: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut store = ClientConfigStore::yaml(&args.config);
    let mut config = store.load()?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix, args.debug || config.debug_log);

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} at {} difficulty, seed {}",
        config.mode,
        config.difficulty,
        rng.seed()
    );

    let mut runner = Runner::new(
        config.mode,
        config.difficulty,
        Duration::from_millis(config.computer_delay_ms),
        rng,
    );
    let mut stdout = std::io::stdout();
    runner.run(BufReader::new(tokio::io::stdin()), &mut stdout).await?;

    let state = runner.state();
    if state.mode != config.mode || state.difficulty != config.difficulty {
        config.mode = state.mode;
        config.difficulty = state.difficulty;
        store.save(&config)?;
        log!("Saved settings to {}", store.path().display());
    }

    Ok(())
}
