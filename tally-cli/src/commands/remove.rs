//! Remove command - delete a ledger entry

use anyhow::Result;

use super::{get_context, resolve_user};
use crate::output;

pub async fn run(id: &str, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let user_id = resolve_user(&ctx, user)?;

    ctx.transaction_service.delete(id, &user_id).await?;

    output::success(&format!("Removed {}", id));
    Ok(())
}
