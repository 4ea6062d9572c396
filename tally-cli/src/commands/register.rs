//! Register command - create a user and make them active

use anyhow::Result;
use colored::Colorize;

use super::{get_context, get_tally_dir};
use crate::output;

pub async fn run(name: &str, email: &str, password: &str) -> Result<()> {
    let mut ctx = get_context()?;

    let user = ctx.user_service.register(name, email, password).await?;

    ctx.config.set_active_user(user.id());
    ctx.config.save(&get_tally_dir())?;

    output::success(&format!("Registered {} <{}>", user.name(), user.email()));
    println!("Active user: {}", user.id().bold());
    Ok(())
}
