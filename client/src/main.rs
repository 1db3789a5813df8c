mod command;
mod config;
mod terminal_game;

use std::io;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use common::games::tictactoe::{GameMode, SearchMode, Side};
use common::{log, logger};

use config::{CONFIG_FILE_NAME, Config, get_config_manager};
use terminal_game::{TerminalGame, TerminalGameOptions};

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Ai,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::HumanVsHuman,
            ModeArg::Ai => GameMode::HumanVsAi,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Random,
    Optimal,
}

impl From<LevelArg> for SearchMode {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Random => SearchMode::Random,
            LevelArg::Optimal => SearchMode::ExhaustiveOptimal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    /// X, moves first
    A,
    /// O
    B,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::A => Side::PlayerA,
            SideArg::B => Side::PlayerB,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: String,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    level: Option<LevelArg>,

    #[arg(long, value_enum)]
    ai_side: Option<SideArg>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(mode) = self.mode {
            config.game.mode = mode.into();
        }
        if let Some(level) = self.level {
            config.game.ai_level = level.into();
        }
        if let Some(side) = self.ai_side {
            config.game.ai_side = side.into();
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;
    let config = args.apply_to(config);
    log!("Loaded config from {}", args.config);

    let options = TerminalGameOptions {
        settings: config.game.to_settings(),
        rng_seed: config.rng_seed,
        ai_move_delay: Duration::from_millis(config.game.ai_move_delay_ms),
    };

    let stdin = io::stdin();
    let mut game = TerminalGame::new(stdin.lock(), io::stdout(), options);
    game.run()?;

    log!("Bye");
    Ok(())
}
