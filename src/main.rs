//! Hyperliquid docs pipeline - command-line batch job.
//!
//! Generates OpenAPI 3.1.1 documents from a local checkout of the
//! Hyperliquid SDK, rewrites the API section of a table-of-contents
//! document, and synchronizes the documents with a GitBook organization.
//!
//! # Usage
//!
//! ```bash
//! hl-docs [OPTIONS] --toc <FILE> <SDK_PATH>
//! ```
//!
//! Publishing requires `GITBOOK_API_TOKEN` and `GITBOOK_ORG_ID` in the
//! environment.
//!
//! # Examples
//!
//! Regenerate and publish:
//! ```bash
//! hl-docs ./hyperliquid-sdk --toc docs/SUMMARY.md
//! ```
//!
//! Keep a local copy of every document:
//! ```bash
//! hl-docs ./hyperliquid-sdk --toc docs/SUMMARY.md -o out/specs -f yaml
//! ```

mod cli;
mod config;
mod error;
mod openapi;
mod publisher;
mod registry;
mod resolver;
mod schema;
mod serializer;
mod source;
mod symbols;
mod toc;
mod types;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Hyperliquid docs pipeline starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Documentation update completed successfully");

    Ok(())
}
