//! CLI administration tool for visit-counter.
//!
//! Inspects the visit store and the cached counter, and performs database
//! operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Show or drop the cached visit count
//! cargo run --bin admin -- cache show
//! cargo run --bin admin -- cache flush --yes
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`visit_counter::config`].

use visit_counter::config::{self, Config, mask_connection_string};
use visit_counter::domain::repositories::VisitRepository;
use visit_counter::infrastructure::cache::{CacheService, RedisCache, VISIT_COUNT_KEY};
use visit_counter::infrastructure::persistence::{
    PgVisitRepository, PoolSettings, connect_pool, ping_pool,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing visit-counter.
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
    /// Show statistics
    Stats,

    /// Cached visit count
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Show the cached visit count
    Show,

    /// Drop the cached visit count
    Flush {
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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Stats => handle_stats(&config).await?,
        Commands::Cache { action } => handle_cache_action(action, &config).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

async fn connect_db(config: &Config) -> Result<PgPool> {
    connect_pool(&config.database_url, PoolSettings::from(config))
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&config.database_url)
            )
        })
}

async fn connect_cache(config: &Config) -> Result<RedisCache> {
    RedisCache::connect(&config.redis_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to Redis at {}",
                mask_connection_string(&config.redis_url)
            )
        })
}

/// Displays visit statistics.
///
/// Shows:
/// - Total number of visits
/// - Most recent visit
/// - Whether the count is currently cached
async fn handle_stats(config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = connect_db(config).await?;
    let repo = PgVisitRepository::new(Arc::new(pool));

    let total = repo.count().await.context("Failed to count visits")?;
    let latest = repo
        .list(1, 0)
        .await
        .context("Failed to read latest visit")?;

    println!(
        "  Visits:        {}",
        total.to_string().bright_green().bold()
    );

    match latest.first() {
        Some(visit) => println!(
            "  Latest visit:  {} {}",
            visit
                .visit_time
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_white(),
            visit.user_agent.cyan()
        ),
        None => println!("  Latest visit:  {}", "none".bright_black()),
    }

    let cached = match connect_cache(config).await {
        Ok(cache) => match cache.get_cached_count().await {
            Ok(Some(count)) => count.to_string().bright_green(),
            Ok(None) => "not cached".yellow(),
            Err(e) => format!("unavailable ({e})").red(),
        },
        Err(_) => "unavailable".red(),
    };
    println!("  Cached count:  {}", cached);
    println!();

    Ok(())
}

/// Handles cached counter commands.
async fn handle_cache_action(action: CacheAction, config: &Config) -> Result<()> {
    let cache = connect_cache(config).await?;

    match action {
        CacheAction::Show => {
            println!("{}", "🗄️  Cached Visit Count".bright_blue().bold());
            println!();

            let value = cache
                .get_cached_count()
                .await
                .context("Failed to read cached count")?;

            match value {
                Some(count) => println!(
                    "  {}: {}",
                    VISIT_COUNT_KEY.cyan(),
                    count.to_string().bright_green().bold()
                ),
                None => println!("  {}: {}", VISIT_COUNT_KEY.cyan(), "not cached".yellow()),
            }
            println!();
        }
        CacheAction::Flush { yes } => {
            println!("{}", "🧹 Flush Cached Visit Count".bright_blue().bold());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete key '{VISIT_COUNT_KEY}'?"))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            cache
                .invalidate_cached_count()
                .await
                .context("Failed to flush cached count")?;

            println!("{}", "✅ Cached count flushed".green().bold());
            println!(
                "  {}",
                "The next read recomputes it from the database.".bright_black()
            );
            println!();
        }
    }

    cache.close().await;
    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let pool = connect_db(config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            ping_pool(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    pool.close().await;
    Ok(())
}
