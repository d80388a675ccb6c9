//! CLI administration tool for page-quality-engine.
//!
//! Runs index health audits and database diagnostics without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Full audit with the configured sample size
//! cargo run --bin admin -- audit
//!
//! # Audit 300 airports and 300 routes, print JSON
//! cargo run --bin admin -- audit --sample-size 300 --json
//!
//! # Condensed health check
//! cargo run --bin admin -- quick-check
//!
//! # Content signature of a text
//! cargo run --bin admin -- hash "Delhi airport has 42 daily departures"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`page_quality_engine::config`].

use page_quality_engine::application::services::AuditService;
use page_quality_engine::config::{self, Config, MAX_AUDIT_SAMPLE_SIZE};
use page_quality_engine::domain::entities::AuditReport;
use page_quality_engine::infrastructure::persistence::PgEntityRepository;
use page_quality_engine::server::connect_pool;
use page_quality_engine::utils::content_hash::{generate_content_hash, normalize_content};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing page-quality-engine.
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
    /// Run a sampled index health audit
    Audit {
        /// Entities sampled per type (defaults to AUDIT_SAMPLE_SIZE)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_AUDIT_SAMPLE_SIZE as i64))]
        sample_size: Option<u32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Condensed audit over a fixed sample
    QuickCheck,

    /// Print the content signature of a text
    Hash {
        /// Text to normalize and hash
        text: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show row counts of the flight tables
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Hash { text } = &cli.command {
        print_hash(text);
        return Ok(());
    }

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Audit { sample_size, json } => {
            let sample_size = sample_size.map_or(config.audit_sample_size, |n| n as usize);
            handle_audit(&config, pool, sample_size, json).await?
        }
        Commands::QuickCheck => handle_quick_check(&config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Hash { .. } => {}
    }

    Ok(())
}

fn audit_service(config: &Config, pool: PgPool) -> AuditService<PgEntityRepository> {
    let repository = Arc::new(PgEntityRepository::new(Arc::new(pool)));
    AuditService::new(repository, config.audit_concurrency, config.audit_timeout())
}

/// Runs the audit and prints it as a table or JSON.
async fn handle_audit(config: &Config, pool: PgPool, sample_size: usize, json: bool) -> Result<()> {
    if !json {
        println!("{}", "🔍 Index Health Audit".bright_blue().bold());
        println!();
        println!(
            "  Sampling {} airports and {} routes...",
            sample_size.to_string().cyan(),
            sample_size.to_string().cyan()
        );
        println!();
    }

    let report = audit_service(config, pool)
        .run_audit(sample_size)
        .await
        .context("Audit failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AuditReport) {
    println!(
        "  Total pages:       {}",
        report.total_pages.to_string().bright_white().bold()
    );
    println!(
        "  Indexable:         {}",
        report.indexable_pages.to_string().bright_green().bold()
    );
    println!(
        "  Noindex:           {}",
        report.noindex_pages.to_string().yellow().bold()
    );
    println!("  Indexability rate: {}", format_rate(report.indexability_rate));

    if report.skipped_pages > 0 {
        println!(
            "  Skipped:           {}",
            report.skipped_pages.to_string().red().bold()
        );
    }
    println!();

    if report.duplicate_patterns.is_empty() {
        println!("{}", "✅ No duplicate structural patterns".green().bold());
        println!();
        return;
    }

    println!("{}", "⚠️  Duplicate structural patterns".yellow().bold());
    println!();
    println!(
        "  {:<8} {}",
        "Pages".bright_white().bold(),
        "Pattern".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for pattern in &report.duplicate_patterns {
        println!(
            "  {:<8} {}",
            pattern.count.to_string().yellow(),
            pattern.pattern.cyan()
        );
        for url in &pattern.urls {
            println!("           {}", url.bright_black());
        }
    }
    println!();
}

fn format_rate(rate: f64) -> ColoredString {
    let text = format!("{:.2}%", rate);
    if rate >= 80.0 {
        text.bright_green().bold()
    } else if rate >= 50.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

/// Runs the quick health check.
async fn handle_quick_check(config: &Config, pool: PgPool) -> Result<()> {
    println!("{}", "📊 Quick Health Check".bright_blue().bold());
    println!();

    let health = audit_service(config, pool)
        .quick_health_check()
        .await
        .context("Quick health check failed")?;

    println!("  Indexability rate:  {}", format_rate(health.indexability_rate));
    println!(
        "  Duplicate patterns: {}",
        health.duplicate_pattern_count.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_hash(text: &str) {
    println!("  Normalized: {}", normalize_content(text).bright_black());
    println!("  Hash:       {}", generate_content_hash(text).bright_yellow().bold());
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            for table in ["airports", "routes", "flights", "airlines"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await?;

                println!(
                    "  {:<10} {}",
                    format!("{table}:"),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
