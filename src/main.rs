mod cli;
mod config;
mod error;
mod github;
mod packager;
mod publisher;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::publisher::ReleasePublisher;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Token is checked before anything is packed or any request is sent
    let Some(token) = args.github_token.clone() else {
        eprintln!("Usage: npm-ghrelease [GITHUB-TOKEN]");
        eprintln!("The token can also be provided via the GITHUB_TOKEN environment variable.");
        std::process::exit(1);
    };

    if args.verbose {
        tracing::info!("Running npm-ghrelease with verbose output");
    }

    let publisher = ReleasePublisher::new(args, token)?;
    publisher.run().await?;

    Ok(())
}
