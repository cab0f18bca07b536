mod db;
mod fetch;
mod parse;
mod table;

use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

const DEFAULT_URL: &str = "https://csie.ncut.edu.tw/content.php?key=86OP82WJQO";

#[derive(Parser)]
#[command(name = "contact_scraper", about = "Department contact scraper with SQLite dedup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a member page, show the contact table, persist new contacts
    Fetch {
        /// Page to scrape
        #[arg(default_value = DEFAULT_URL)]
        url: String,
        /// Match title/email inside each member block instead of zipping
        /// whole-page match lists
        #[arg(long)]
        segmented: bool,
    },
    /// Show every stored contact
    List,
    /// Show store statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch { url, segmented } => {
            if !fetch::validate_url(&url) {
                bail!("invalid URL {:?}: expected an http(s):// address", url);
            }

            let raw = fetch::fetch(&url).context("Unable to fetch page")?;
            info!("fetched {} bytes", raw.len());

            let rows = if segmented {
                parse::segmented::extract(&raw)
            } else {
                parse::extract(&raw)
            };
            info!("extracted {} contacts", rows.len());

            print!("{}", table::render(&rows));

            let conn = db::connect(&db::db_path())?;
            db::init_schema(&conn)?;
            let inserted =
                db::dedup_persist(&conn, &rows).context("Unable to save contacts")?;
            println!("\n{} contacts ({} new)", rows.len(), inserted);
        }
        Commands::List => {
            let conn = db::connect(&db::db_path())?;
            db::init_schema(&conn)?;
            let rows = db::fetch_contacts(&conn)?;
            print!("{}", table::render(&rows));
            println!("\n{} contacts", rows.len());
        }
        Commands::Stats => {
            let conn = db::connect(&db::db_path())?;
            db::init_schema(&conn)?;
            println!("Database: {:?}", db::db_path());
            println!("Contacts: {}", db::count_contacts(&conn)?);
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
