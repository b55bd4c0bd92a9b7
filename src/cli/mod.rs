pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::range::parse_iso_date;

#[derive(Parser)]
#[command(name = "nebula")]
#[command(about = "Browse astronomy pictures of the day from the terminal", long_about = None)]
pub struct Cli {
    /// Feed URL, overriding the config file
    #[arg(long, global = true)]
    pub feed_url: Option<String>,

    /// Config file to load instead of ~/.config/nebula/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file path (the TUI defaults to the cache directory)
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub start: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD), capped at today
    #[arg(long, value_parser = parse_iso_date)]
    pub end: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive gallery (default)
    Tui,
    /// Print the gallery for a date range
    List {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Write the gallery as a standalone HTML page
    Export {
        #[command(flatten)]
        range: RangeArgs,

        /// Output file
        #[arg(short, long, default_value = "gallery.html")]
        out: PathBuf,
    },
}
