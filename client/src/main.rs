mod config;
mod render;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use ntoe_common::config::Validate;
use ntoe_common::{debug_log, log, logger};

use config::{Config, get_config_manager};
use runner::{GameResult, run_game};

#[derive(Parser)]
#[command(name = "ntoe", about = "N×N tic-tac-toe in the terminal")]
struct Args {
    /// YAML config file; defaults to ntoe_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    min_run: Option<usize>,

    /// Log generated lines and turn changes, and label board coordinates
    #[arg(long)]
    debug: bool,

    #[arg(long)]
    log_prefix: Option<String>,
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(size) = args.size {
        config.tictactoe.board_size = size;
    }
    if let Some(min_run) = args.min_run {
        config.tictactoe.min_run = min_run;
    }
    config.tictactoe.debug |= args.debug;
    if args.log_prefix.is_some() {
        config.log_prefix = args.log_prefix.clone();
    }
}

/// Flags override the file, so the file alone is not validated: an invalid
/// file is accepted when the flags repair it.
fn load_config(args: &Args) -> Result<Config, String> {
    let mut config = get_config_manager(args.config.clone()).get_unvalidated_config()?;
    apply_overrides(&mut config, args);
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = load_config(&args)?;

    logger::init_logger(config.log_prefix.clone(), config.tictactoe.debug);

    let mut engine = config.tictactoe.create_engine()?;

    log!(
        "Starting {}x{} game, {} in a row wins",
        engine.board_size(),
        engine.board_size(),
        engine.min_run()
    );
    debug_log!("{} moves first", engine.current_player());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = run_game(&mut engine, stdin.lock(), &mut stdout, config.tictactoe.debug)?;

    if result == GameResult::Abandoned {
        log!("Game abandoned after {} moves", engine.history().len());
    }

    Ok(())
}
