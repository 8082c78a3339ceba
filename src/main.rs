use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use assassin_game::config::CliConfig;
use assassin_game::{Config, GameInterface, Roster, RosterLoader, VERSION};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "assassin")]
#[command(about = "Run a game of assassin from a list of names")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File with one name per line (or a JSON array of names)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Color theme (default, dark, plain)
    #[arg(short, long)]
    theme: Option<String>,

    /// Record these kills in order instead of prompting
    #[arg(short, long = "kill", value_name = "NAME")]
    kills: Vec<String>,

    /// Participant names in stalking order; overrides the roster file
    names: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?,
        None => Config::default(),
    };
    config.merge_with_cli(CliConfig {
        roster_file: cli.roster.clone(),
        log_level: None,
        debug: cli.debug,
        theme: cli.theme.clone(),
    });
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("assassin_game={},assassin={},warn", config.logging.level, config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Assassin v{}", VERSION);

    let roster = resolve_roster(&cli, &config)?;

    let mut game_interface = GameInterface::new(config)?;
    game_interface.start(&roster)?;

    let outcome = if cli.kills.is_empty() {
        game_interface.run()
    } else {
        game_interface.run_scripted(&cli.kills)
    };

    if let Err(e) = outcome {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    info!("Game session ended");
    Ok(())
}

fn resolve_roster(cli: &Cli, config: &Config) -> Result<Roster> {
    if !cli.names.is_empty() {
        return Ok(Roster::from_names(cli.names.iter().cloned()));
    }

    match &config.game.roster_file {
        Some(path) => Ok(RosterLoader::load(path)?),
        None => bail!("No participants given: pass names or --roster <FILE>"),
    }
}
