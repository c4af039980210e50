//! Handle Scout - username availability checking across social sites
//!
//! Probes every built-in site concurrently and reports where the username
//! is still free.

use clap::Parser;
use handle_scout::{builtin_sites, Result, UsernameChecker};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "handle-scout", version, about = "Check username availability across social sites")]
struct Cli {
    /// Username to check
    username: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.username).await {
        println!("{e}");
        process::exit(1);
    }
}

async fn run(username: &str) -> Result<()> {
    let checker = UsernameChecker::new();
    let sites = builtin_sites();

    let outcome = checker.check_all(username, &sites).await?;
    tracing::debug!(
        summary = %serde_json::to_string(&outcome.summary())?,
        "check finished"
    );

    if outcome.is_fully_available() {
        println!("Available!");
        return Ok(());
    }

    println!("Unavailable on:");
    for site in &outcome.unavailable {
        println!("- {}", site.name);
    }

    Ok(())
}
