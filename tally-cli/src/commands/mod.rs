//! CLI command implementations

pub mod add;
pub mod list;
pub mod register;
pub mod remove;
pub mod status;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tally_core::TallyContext;

/// Get the tally directory from environment or default
pub fn get_tally_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TALLY_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".tally")
    }
}

/// Get or create the ledger context
pub fn get_context() -> Result<TallyContext> {
    let tally_dir = get_tally_dir();

    std::fs::create_dir_all(&tally_dir)
        .with_context(|| format!("Failed to create tally directory: {:?}", tally_dir))?;

    TallyContext::new(&tally_dir).context("Failed to initialize tally context")
}

/// Resolve the acting user: an explicit id wins, then the configured
/// active user.
pub fn resolve_user(ctx: &TallyContext, user: Option<String>) -> Result<String> {
    if let Some(user) = user {
        return Ok(user);
    }
    match &ctx.config.active_user {
        Some(id) => Ok(id.clone()),
        None => bail!("No active user. Register one with `tally register` or pass --user."),
    }
}
