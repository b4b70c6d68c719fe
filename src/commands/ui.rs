//! Interactive randomizer.

use anyhow::{Context, Result};

use tmix::tui::RandomizerApp;
use tmix::{Config, Session, StateStore};

/// Open the full-screen randomizer and save its state on exit.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let config = Config::load()?;
    let path = StateStore::default_path()?;
    let store = StateStore::open(&path)
        .with_context(|| format!("Failed to open state file {}", path.display()))?;

    let session = Session::new(&config, store);
    RandomizerApp::new(session, &config)
        .context("Failed to start the interactive screen")?
        .run()
}
