use std::io;

use anyhow::Result;
use rookery_play::{Game, GameConfig};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "rookery starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Game::new(GameConfig::default()).run(stdin.lock(), &mut stdout)?;
    Ok(())
}
