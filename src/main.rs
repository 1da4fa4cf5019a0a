use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use kata::player::store::ProgressStore;
use kata::session::{self, Session};
use kata::{Config, bank, banner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show earned achievements instead of playing a round
    #[arg(long)]
    achievements: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kata=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let store = ProgressStore::open_default()?;

    if cli.achievements {
        let player = store.load();
        session::write_achievement_report(&mut io::stdout(), &player)?;
        return Ok(());
    }

    let mut stdout = io::stdout();
    banner::show(&mut stdout, Path::new(banner::LOGO_ASSET))?;

    let config = Config::load()?;
    let bank = bank::builtin::question_bank();
    let bosses = bank::builtin::boss_schedule();
    let mut player = store.load();

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), stdout);
    session.run(&bank, &bosses, &mut player, &store)?;

    Ok(())
}
