//! # roomwatch CLI
//!
//! Command-line entry point for the vacancy monitor. Two trigger shapes:
//!
//! - `check` (the default): run one monitoring pass, print the resulting
//!   record as formatted JSON, exit 0 on success and 1 on failure
//! - `invoke`: run one pass and print an HTTP-style response envelope
//!   (status code 200/500 plus a JSON body), for request-handler style
//!   schedulers that want the outcome in the payload
//!
//! Configuration comes from the environment, optionally via a `.env`
//! file. `LOG_LEVEL` (or `RUST_LOG`) controls verbosity.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use roomwatch::watcher::{InvocationResponse, RoomWatch};

#[derive(Parser)]
#[command(author, version, about = "Room vacancy monitoring with AI summarization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one monitoring pass and print the resulting record
    Check,

    /// Run one pass and print a structured success/failure response
    Invoke,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; a real environment wins over file values
    let _ = dotenvy::dotenv();

    init_logging();

    let cli = Cli::parse();
    let exit_code = match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => check_command().await,
        Commands::Invoke => invoke_command().await?,
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    // LOG_LEVEL keeps parity with the deployment environment; RUST_LOG
    // still takes precedence when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        EnvFilter::new(level.to_lowercase())
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn check_command() -> i32 {
    let watch = match RoomWatch::from_env() {
        Ok(watch) => watch,
        Err(e) => {
            error!("Execution failed: {}", e);
            return 1;
        }
    };

    match watch.run().await {
        Ok(record) => {
            let banner = "=".repeat(50);
            println!("\n{}", banner);
            println!("ROOMWATCH RESULTS");
            println!("{}", banner);
            match serde_json::to_string_pretty(&record) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("(unprintable record: {})", e),
            }
            println!("{}\n", banner);
            0
        }
        Err(e) => {
            error!("Execution failed: {}", e);
            1
        }
    }
}

async fn invoke_command() -> anyhow::Result<i32> {
    let response = match RoomWatch::from_env() {
        Ok(watch) => watch.invoke().await,
        Err(e) => {
            error!("Execution failed: {}", e);
            InvocationResponse::failure(&e.to_string())
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    // The outcome travels in the payload for this trigger shape
    Ok(0)
}
