//! Tally CLI - a personal finance ledger in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{add, list, register, remove, status};

/// Tally - track income and expenses from the command line
#[derive(Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user and make them the active user
    Register {
        /// Display name
        #[arg(long)]
        name: String,
        /// Email address (one account per address)
        #[arg(long)]
        email: String,
        /// Password (stored hashed, never raw)
        #[arg(long)]
        password: String,
    },

    /// Record an income or expense entry
    Add {
        /// Entry kind: income or expense
        kind: String,
        /// Amount, e.g. 42.50
        amount: f64,
        /// What the entry was for
        description: String,
        /// Explicit entry id (generated when omitted)
        #[arg(long)]
        id: Option<String>,
        /// Owning user id (defaults to the active user)
        #[arg(long, env = "TALLY_USER")]
        user: Option<String>,
    },

    /// List entries with running totals
    List {
        /// Only show entries of this kind (income or expense)
        #[arg(long)]
        kind: Option<String>,
        /// User id to list for (defaults to the active user)
        #[arg(long, env = "TALLY_USER")]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an entry you own
    Remove {
        /// Entry id to remove
        id: String,
        /// Acting user id (defaults to the active user)
        #[arg(long, env = "TALLY_USER")]
        user: Option<String>,
    },

    /// Show the active user and ledger summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => register::run(&name, &email, &password).await,
        Commands::Add {
            kind,
            amount,
            description,
            id,
            user,
        } => add::run(&kind, amount, &description, id, user).await,
        Commands::List { kind, user, json } => list::run(kind.as_deref(), user, json).await,
        Commands::Remove { id, user } => remove::run(&id, user).await,
        Commands::Status { json } => status::run(json).await,
    }
}
