//! CLI administration tool for library-api.
//!
//! Provides commands for inspecting the catalogue and performing database
//! operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Show server version and row counts
//! cargo run --bin admin -- db info
//!
//! # Search books
//! cargo run --bin admin -- book list --title aventuras --size 10
//!
//! # Delete a book
//! cargo run --bin admin -- book delete 42
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use library_api::application::services::BookService;
use library_api::config::{Config, mask_connection_string};
use library_api::domain::pagination::PageRequest;
use library_api::domain::repositories::BookFilter;
use library_api::infrastructure::persistence::PgBookRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing library-api.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage books
    Book {
        #[command(subcommand)]
        action: BookAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Show database info
    Info,
}

/// Book subcommands.
#[derive(Subcommand)]
enum BookAction {
    /// List books, optionally filtered by title and author
    List {
        /// Part of the title (case-insensitive)
        #[arg(short, long)]
        title: Option<String>,

        /// Part of the author name (case-insensitive)
        #[arg(short, long)]
        author: Option<String>,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(short, long, default_value_t = 20)]
        size: u32,
    },

    /// Delete a book by id
    Delete {
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Book { action } => handle_book_action(action, &pool).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let books_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
                .fetch_one(pool)
                .await?;

            let loans_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loans")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Books:      {}",
                books_count.to_string().bright_green().bold()
            );
            println!(
                "  Loans:      {}",
                loans_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Dispatches book commands.
async fn handle_book_action(action: BookAction, pool: &PgPool) -> Result<()> {
    let service = BookService::new(Arc::new(PgBookRepository::new(Arc::new(pool.clone()))));

    match action {
        BookAction::List {
            title,
            author,
            page,
            size,
        } => list_books(&service, BookFilter::new(title, author), PageRequest::new(page, size)).await,
        BookAction::Delete { id, yes } => delete_book(&service, id, yes).await,
    }
}

/// Prints one page of books.
///
/// # Output Format
///
/// ```text
/// 📚 Books
///
///   ID    Title                          Author                    ISBN
///   ─────────────────────────────────────────────────────────────────────────────
///   1     Aventuras de Jhonson           James Jhonson             123456789
///
///   Page 1 of 1, 1 book(s) total
/// ```
async fn list_books(
    service: &BookService<PgBookRepository>,
    filter: BookFilter,
    request: PageRequest,
) -> Result<()> {
    println!("{}", "📚 Books".bright_blue().bold());
    println!();

    let page = service
        .find_by_author_and_title(filter, request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list books: {}", e))?;

    if page.content.is_empty() {
        println!("{}", "  No books found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<25} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Author".bright_white().bold(),
        "ISBN".bright_white().bold()
    );
    println!("  {}", "─".repeat(77).bright_black());

    for book in &page.content {
        println!(
            "  {:<5} {:<30} {:<25} {}",
            book.id.unwrap_or_default().to_string().bright_black(),
            book.title.cyan(),
            book.author,
            book.isbn.bright_black()
        );
    }

    println!();
    println!(
        "  Page {} of {}, {} book(s) total",
        (page.request.page + 1).to_string().bright_white().bold(),
        page.total_pages().max(1),
        page.total_elements.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a book after confirmation (default: No).
///
/// Books with registered loans are refused by the database.
async fn delete_book(
    service: &BookService<PgBookRepository>,
    id: i64,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Book".bright_blue().bold());
    println!();

    let book = service
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Book not found")?;

    println!("  Title:  {}", book.title.cyan());
    println!("  Author: {}", book.author);
    println!("  ISBN:   {}", book.isbn.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this book?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(book)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete book: {}", e))?;

    println!();
    println!("{}", "✅ Book deleted successfully!".green().bold());
    println!();

    Ok(())
}
