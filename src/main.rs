use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use bookreviews::api::{book_reviews, user_reviews, UserReviewsQuery};
use bookreviews::{Catalog, CatalogSnapshot, Config};
use clap::{Parser, Subcommand};
use tracing::{error, info};

/// Print a user's or a book's reviews from a catalog snapshot, ranked.
#[derive(Parser, Debug)]
#[command(name = "bookreviews", version)]
struct Cli {
    /// JSON catalog snapshot to load
    #[arg(long, value_name = "FILE")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reviews written by a user
    User {
        id: String,
        /// newest, oldest, highest_rating or lowest_rating
        #[arg(long)]
        sort: Option<String>,
    },
    /// Reviews posted on a book
    Book {
        id: String,
        #[arg(long)]
        sort: Option<String>,
    },
}

fn main() -> ExitCode {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,bookreviews=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> bookreviews::Result<()> {
    let config = Config::load()?;
    let raw = fs::read_to_string(&cli.data)?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw)?;
    let catalog = Catalog::from_snapshot(snapshot, config)?;
    info!(path = %cli.data.display(), "catalog ready");

    let output = match cli.command {
        Command::User { id, sort } => {
            let page = user_reviews(&catalog, &UserReviewsQuery { user_id: id, sort })?;
            serde_json::to_string_pretty(&page)?
        }
        Command::Book { id, sort } => {
            let page = book_reviews(&catalog, &id, sort.as_deref())?;
            serde_json::to_string_pretty(&page)?
        }
    };
    println!("{}", output);
    Ok(())
}
