//! CLI administration tool for phish-tracker.
//!
//! Manages campaign recipients and recorded clicks and prints the campaign
//! report without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register one recipient
//! cargo run --bin admin -- recipients add alice@example.com
//!
//! # Import a newline/comma separated list
//! cargo run --bin admin -- recipients import targets.txt
//!
//! # List recipients with tracking links
//! cargo run --bin admin -- recipients list
//!
//! # Delete recipients (clicks are kept)
//! cargo run --bin admin -- recipients delete 3 5 -y
//!
//! # Latest clicks
//! cargo run --bin admin -- clicks list --limit 20
//!
//! # Campaign report
//! cargo run --bin admin -- report
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME`
//! - `PUBLIC_BASE_URL` (optional): base of printed tracking links

use phish_tracker::config::Config;
use phish_tracker::domain::repositories::ClickFilter;
use phish_tracker::server::connect_pool;
use phish_tracker::state::{AppState, HttpSettings};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for managing phish-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage campaign recipients
    Recipients {
        #[command(subcommand)]
        action: RecipientAction,
    },

    /// Inspect and prune recorded clicks
    Clicks {
        #[command(subcommand)]
        action: ClickAction,
    },

    /// Show the campaign report
    Report,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Recipient subcommands.
#[derive(Subcommand)]
enum RecipientAction {
    /// Register one recipient
    Add {
        /// Email address
        email: String,
    },

    /// Import recipients from a text file (newline and/or comma separated)
    Import {
        /// Path to the file
        file: PathBuf,
    },

    /// List all recipients
    List,

    /// Delete recipients by id
    Delete {
        /// Recipient ids
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Click subcommands.
#[derive(Subcommand)]
enum ClickAction {
    /// List clicks, newest first
    List {
        /// Show at most N clicks
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Delete clicks by id
    Delete {
        /// Click ids
        #[arg(required = true)]
        ids: Vec<i64>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;
    let state = AppState::new(Arc::new(pool.clone()), HttpSettings::from_config(&config));

    match cli.command {
        Commands::Recipients { action } => handle_recipient_action(action, &state).await?,
        Commands::Clicks { action } => handle_click_action(action, &state).await?,
        Commands::Report => handle_report(&state).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches recipient commands.
async fn handle_recipient_action(action: RecipientAction, state: &AppState) -> Result<()> {
    match action {
        RecipientAction::Add { email } => add_recipient(state, &email).await,
        RecipientAction::Import { file } => import_recipients(state, &file).await,
        RecipientAction::List => list_recipients(state).await,
        RecipientAction::Delete { ids, yes } => delete_recipients(state, &ids, yes).await,
    }
}

async fn add_recipient(state: &AppState, email: &str) -> Result<()> {
    let recipient = state
        .registry_service
        .add_recipient(email)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "✅ Recipient added".green().bold());
    println!("  ID:    {}", recipient.id.to_string().bright_black());
    println!("  Email: {}", recipient.email.cyan());
    println!("  Token: {}", recipient.token.bright_yellow());

    if let Some(base) = &state.settings.public_base_url {
        println!("  Link:  {}", recipient.tracking_link(base).bright_white());
    }

    Ok(())
}

/// Feeds a text file to the bulk import and prints the per-item errors.
async fn import_recipients(state: &AppState, file: &Path) -> Result<()> {
    println!("{}", "📥 Importing recipients".bright_blue().bold());
    println!();

    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let report = state.registry_service.bulk_add(&text).await;

    println!(
        "  Added:   {}",
        report.added.to_string().bright_green().bold()
    );
    println!(
        "  Skipped: {}",
        report.skipped.to_string().bright_yellow().bold()
    );

    if !report.errors.is_empty() {
        println!();
        for error in &report.errors {
            println!("  {} {}", "•".red(), error);
        }
    }
    println!();

    Ok(())
}

/// Lists recipients, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 Recipients
///
///   ID    Email                          Token             Created
///   ─────────────────────────────────────────────────────────────────────────
///   2     bob@example.com                9c1e0b7a44f2d3e8  2026-03-02 09:12
/// ```
async fn list_recipients(state: &AppState) -> Result<()> {
    println!("{}", "📋 Recipients".bright_blue().bold());
    println!();

    let recipients = state
        .registry_service
        .list_recipients()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list recipients: {}", e))?;

    if recipients.is_empty() {
        println!("{}", "  No recipients found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<17} {:<16}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Token".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for recipient in &recipients {
        println!(
            "  {:<5} {:<30} {:<17} {}",
            recipient.id.to_string().bright_black(),
            recipient.email.cyan(),
            recipient.token.bright_yellow(),
            recipient
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );

        if let Some(base) = &state.settings.public_base_url {
            println!("        {}", recipient.tracking_link(base).bright_black());
        }
    }

    println!();
    println!(
        "  Total: {}",
        recipients.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn delete_recipients(state: &AppState, ids: &[i64], skip_confirm: bool) -> Result<()> {
    if !skip_confirm && !confirm(&format!("Delete {} recipient(s)?", ids.len()))? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let deleted = state
        .registry_service
        .delete_recipients(ids)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete recipients: {}", e))?;

    println!(
        "{} {}",
        "✅ Recipients deleted:".green().bold(),
        deleted.to_string().bright_white().bold()
    );

    Ok(())
}

/// Dispatches click commands.
async fn handle_click_action(action: ClickAction, state: &AppState) -> Result<()> {
    match action {
        ClickAction::List { limit } => list_clicks(state, limit).await,
        ClickAction::Delete { ids, yes } => delete_clicks(state, &ids, yes).await,
    }
}

async fn list_clicks(state: &AppState, limit: Option<i64>) -> Result<()> {
    println!("{}", "🖱  Clicks".bright_blue().bold());
    println!();

    let filter = match limit {
        Some(limit) => ClickFilter::page(0, limit.max(1)),
        None => ClickFilter::all(),
    };

    let clicks = state
        .ledger_service
        .list_clicks(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list clicks: {}", e))?;

    if clicks.is_empty() {
        println!("{}", "  No clicks recorded".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<19} {:<16} {:<30} {}",
        "ID".bright_white().bold(),
        "Time".bright_white().bold(),
        "IP".bright_white().bold(),
        "Recipient".bright_white().bold(),
        "User agent".bright_white().bold()
    );
    println!("  {}", "─".repeat(100).bright_black());

    for item in &clicks {
        let recipient = match (&item.email, item.click.recipient_id) {
            (Some(email), _) => email.cyan(),
            (None, Some(id)) => format!("deleted #{}", id).bright_black(),
            (None, None) => format!("unknown token {}", item.click.token).red(),
        };

        println!(
            "  {:<6} {:<19} {:<16} {:<30} {}",
            item.click.id.to_string().bright_black(),
            item.click
                .clicked_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            item.click.ip,
            recipient,
            item.click.user_agent.bright_black()
        );
    }

    println!();

    Ok(())
}

async fn delete_clicks(state: &AppState, ids: &[i64], skip_confirm: bool) -> Result<()> {
    if !skip_confirm && !confirm(&format!("Delete {} click(s)?", ids.len()))? {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let deleted = state
        .ledger_service
        .delete_clicks(Some(ids))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete clicks: {}", e))?;

    println!(
        "{} {}",
        "✅ Clicks deleted:".green().bold(),
        deleted.to_string().bright_white().bold()
    );

    Ok(())
}

/// Displays the campaign report.
async fn handle_report(state: &AppState) -> Result<()> {
    println!("{}", "📊 Campaign report".bright_blue().bold());
    println!();

    let s = state
        .analytics_service
        .snapshot()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute report: {}", e))?;

    println!(
        "  Links sent:      {}",
        s.total_links.to_string().bright_white().bold()
    );
    println!(
        "  Total clicks:    {}",
        s.total_clicks.to_string().bright_green().bold()
    );
    println!(
        "  Clicked links:   {}",
        s.unique_clicked_links.to_string().bright_green().bold()
    );
    println!(
        "  Not clicked:     {}",
        s.non_clicked.to_string().bright_yellow().bold()
    );
    println!(
        "  Click ratio:     {}",
        format!("{:.2}", s.click_ratio).bright_white().bold()
    );
    println!(
        "  Click rate:      {}",
        format!("{:.2}%", s.click_percentage).bright_red().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
