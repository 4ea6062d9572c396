//! List command - show a user's entries and running totals

use anyhow::Result;
use colored::Colorize;

use super::{get_context, resolve_user};
use crate::output;

pub async fn run(kind: Option<&str>, user: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user_id = resolve_user(&ctx, user)?;

    let summary = ctx.transaction_service.list(&user_id, kind).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.transactions.is_empty() {
        println!("No entries recorded.");
    } else {
        let mut table = output::create_table();
        table.set_header(vec!["Id", "Kind", "Amount", "Description", "Created"]);
        for tx in &summary.transactions {
            table.add_row(vec![
                tx.id().to_string(),
                tx.kind().to_string(),
                tx.formatted_amount(),
                tx.description().to_string(),
                tx.created_at().format("%Y-%m-%d").to_string(),
            ]);
        }
        println!("{}", table);
    }

    println!();
    println!("Income:   {}", format!("{:.2}", summary.total_income).green());
    println!("Expenses: {}", format!("{:.2}", summary.total_expenses).red());
    println!("Balance:  {}", format!("{:.2}", summary.balance).bold());
    Ok(())
}
