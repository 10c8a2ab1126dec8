use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use tasklist::commands::Command;
use tasklist::first_run::{ensure_name, greeting};
use tasklist_db::{Database, DbError, DbResult};

/// Environment variable name for the database path
const TL_DB_PATH_ENV: &str = "TL_DB_PATH";

/// tasklist - A single-user task list manager
#[derive(Parser)]
#[command(name = "tl")]
#[command(version = "0.1.0")]
#[command(about = "A single-user task list manager", long_about = None)]
struct Args {
    /// Path to the database directory (can also be set via TL_DB_PATH env var)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Get the database path from command line, environment variable, or default.
///
/// Priority:
/// 1. Command line --db argument
/// 2. TL_DB_PATH environment variable (if non-empty)
/// 3. Default path (~/.tasklist/data)
fn resolve_db_path(cli_db: Option<PathBuf>) -> DbResult<PathBuf> {
    if let Some(path) = cli_db {
        return Ok(path);
    }

    if let Ok(env_path) = std::env::var(TL_DB_PATH_ENV)
        && !env_path.is_empty()
    {
        return Ok(PathBuf::from(env_path));
    }

    Database::default_path()
}

/// Initialize logging from RUST_LOG, defaulting to warnings only
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=tasklist_db=debug` - repository activity
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run_app().await {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
async fn run_app() -> Result<(), DbError> {
    let args = Args::parse();
    let stdin = std::io::stdin();
    let output = run_with_args(&args, &mut stdin.lock()).await?;
    println!("{}", output);
    Ok(())
}

/// Run the application with the given arguments
///
/// `input` answers the first-run name prompt. Returns the text to print.
async fn run_with_args<R: BufRead>(args: &Args, input: &mut R) -> Result<String, DbError> {
    let db_path = resolve_db_path(args.db.clone())?;

    let db = Database::connect(&db_path).await?;
    db.init().await?;

    match &args.command {
        Some(cmd) => {
            if cmd.requires_profile() {
                ensure_name(&db, input, &mut std::io::stderr()).await?;
            }
            cmd.execute(&db).await
        }
        None => {
            let name = ensure_name(&db, input, &mut std::io::stderr()).await?;
            Ok(format!(
                "{}\nUse 'tl --help' for usage information.",
                greeting(&name)
            ))
        }
    }
}
