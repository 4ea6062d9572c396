//! Status command - show the active user and ledger summary

use anyhow::Result;
use colored::Colorize;
use tally_core::ports::UserStore;

use super::get_context;
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let Some(user_id) = ctx.config.active_user.clone() else {
        if json {
            println!("{}", serde_json::json!({ "activeUser": null }));
        } else {
            println!("No active user. Register one with `tally register`.");
        }
        return Ok(());
    };

    let Some(user) = ctx.users.find_by_id(&user_id).await? else {
        anyhow::bail!("Active user {} is not in the store", user_id);
    };

    let summary = ctx.transaction_service.list(&user_id, None).await?;

    if json {
        let payload = serde_json::json!({
            "activeUser": user_id,
            "email": user.email().as_str(),
            "entries": summary.transactions.len(),
            "totalIncome": summary.total_income,
            "totalExpenses": summary.total_expenses,
            "balance": summary.balance,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "Ledger Status".bold());
    println!();

    output::info(&format!("Active user: {} <{}>", user.name(), user.email()));

    let mut table = output::create_table();
    table.add_row(vec!["Entries", &summary.transactions.len().to_string()]);
    table.add_row(vec!["Income", &format!("{:.2}", summary.total_income)]);
    table.add_row(vec!["Expenses", &format!("{:.2}", summary.total_expenses)]);
    table.add_row(vec!["Balance", &format!("{:.2}", summary.balance)]);
    println!("{}", table);

    Ok(())
}
