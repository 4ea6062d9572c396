//! Add command - record a ledger entry

use anyhow::Result;
use uuid::Uuid;

use super::{get_context, resolve_user};
use crate::output;

pub async fn run(
    kind: &str,
    amount: f64,
    description: &str,
    id: Option<String>,
    user: Option<String>,
) -> Result<()> {
    let ctx = get_context()?;
    let user_id = resolve_user(&ctx, user)?;
    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

    ctx.transaction_service
        .create(&id, &user_id, kind, amount, description)
        .await?;

    output::success(&format!("Recorded {} {}", kind.to_lowercase(), id));
    Ok(())
}
