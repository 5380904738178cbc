//! CLI for the redlist listing-address tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use redlist_core::config;
use redlist_core::Sort;

use commands::{run_front_page, run_parse, run_sorts, run_subreddit, Output};

/// Top-level CLI for redlist.
#[derive(Debug, Parser)]
#[command(name = "redlist")]
#[command(about = "redlist: parse and build subreddit listing addresses", long_about = None)]
pub struct Cli {
    /// Print the listing as JSON instead of a table.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by the commands that build an address.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListingOptions {
    /// Sort order, e.g. "hot", "new" or "top_week".
    #[arg(long)]
    pub sort: Option<Sort>,
    /// Number of posts to request.
    #[arg(long)]
    pub limit: Option<u32>,
    /// Fetch the page before this item.
    #[arg(long)]
    pub before: Option<String>,
    /// Fetch the page after this item.
    #[arg(long)]
    pub after: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a listing URL or path and show its canonical form.
    Parse {
        /// Full URL or path, e.g. "/r/pics/top?t=week".
        address: String,
    },

    /// Build the address of a subreddit (or combination like "a+b").
    Subreddit {
        /// Subreddit name, with or without "/r/".
        name: String,
        #[command(flatten)]
        options: ListingOptions,
    },

    /// Build the front page address.
    FrontPage {
        #[command(flatten)]
        options: ListingOptions,
    },

    /// List the known sort orders.
    Sorts,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        config::set_endpoint(cfg.endpoint()?);

        let out = Output {
            json: cli.json,
            labels: cfg.labels(),
        };

        match cli.command {
            CliCommand::Parse { address } => run_parse(&out, &address)?,
            CliCommand::Subreddit { name, options } => run_subreddit(&out, &name, &options)?,
            CliCommand::FrontPage { options } => run_front_page(&out, &options)?,
            CliCommand::Sorts => run_sorts(&out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
