mod arena;
mod config;
mod console;

use std::path::PathBuf;

use clap::Parser;
use common::config::{EngineConfig, Validate};
use common::{Mark, Strategy, TicTacToeGameState, log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Bot strategy or difficulty (Random/Easy, Heuristic/Medium, Minimax/Hard, RuleBased/Challenging)
    #[arg(long)]
    difficulty: Option<Strategy>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Ply limit for minimax
    #[arg(long)]
    depth: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Bot plays X and opens each round
    #[arg(long)]
    bot_first: bool,

    /// Run this many bot-vs-bot rounds instead of an interactive game
    #[arg(long, value_name = "ROUNDS")]
    arena: Option<u32>,

    /// Strategy driving the other side in arena mode
    #[arg(long, default_value = "Random")]
    opponent: Strategy,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn build_config(args: &Args) -> Result<EngineConfig, String> {
    let mut config = config::get_config_manager(args.config.as_deref()).get_config()?;

    if let Some(strategy) = args.difficulty {
        config.strategy = strategy;
    }
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if args.depth.is_some() {
        config.search_depth = args.depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.bot_first {
        config.bot_mark = Mark::X;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = build_config(&args)?;
    let mut rng = config.create_rng();
    log!(
        "Board {0}x{0}, bot {1} plays {2}, seed {3}",
        config.board_size,
        config.strategy,
        config.bot_mark,
        rng.seed()
    );

    let mut state = TicTacToeGameState::from_config(&config);

    match args.arena {
        Some(rounds) => {
            let scores = arena::run_arena(&mut state, args.opponent, rounds, &mut rng)?;
            println!(
                "{} ({}) vs {} ({}) over {} rounds",
                config.strategy,
                config.bot_mark,
                args.opponent,
                config.human_mark(),
                rounds
            );
            console::print_scores(&scores);
        }
        None => console::run_interactive(state, rng)?,
    }

    Ok(())
}
