use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::Parser;
use engine::prelude::*;

mod levels;
mod script;
mod view;

pub const GAME_NAME: &str = "delve";

#[derive(Parser, Debug)]
#[command(name = GAME_NAME, about = "Headless dungeon crawl")]
struct Args {
    #[arg(long, help = "Game world seed, overrides the config file")]
    seed: Option<u64>,

    #[arg(long, help = "Game configuration file in IDM format")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the map after every command")]
    verbose: bool,

    #[arg(help = "Player commands: n s e w < > . g eat:N wield:N ...")]
    commands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();

    let mut config: Config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            idm::from_str(&text)
                .map_err(|e| anyhow!("Bad config {}: {e}", path.display()))?
        }
        None => Default::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    log::info!("seed: {}", config.seed);

    let missing = config.missing_templates();
    if !missing.is_empty() {
        bail!("Unknown templates in config: {}", missing.join(", "));
    }
    config.validate().context("Bad config")?;

    let mut r = Runtime::from_config(levels::terrain()?, &config)?;
    let player = r.player().context("No player in game")?;
    r.start();

    for word in &args.commands {
        if r.scenario_status() == ScenarioStatus::Lost {
            log::info!("Player is dead, skipping remaining commands");
            break;
        }

        let cmd = match script::parse(word)? {
            // Pick up everything.
            Command::Pickup(v) if v.is_empty() => {
                let n = player.loc(&r).map_or(0, |loc| r.map().items_at(loc).len());
                Command::Pickup((0..n).collect())
            }
            cmd => cmd,
        };
        log::debug!("command: {cmd:?}");
        r.command(cmd);

        if args.verbose {
            println!("{}", view::screen(&r));
        } else {
            for m in player.messages(&r) {
                println!("{m}");
            }
        }
        player.clear_messages(&mut r);
    }

    print!("{}", view::screen(&r));
    if r.scenario_status() == ScenarioStatus::Lost {
        println!("Game over.");
    }
    Ok(())
}
