//! # Nebula
//!
//! A terminal gallery for a daily astronomy picture feed.
//!
//! ## Architecture
//!
//! Every load runs the same one-way pipeline:
//!
//! ```text
//! Fetcher → Normalizer → Range filter → Ordering → View mapper → Presenter
//! ```
//!
//! - [`fetcher`]: Uncached HTTP download of the feed document
//! - [`normalizer`]: Accepts a bare array or a `results` wrapper
//! - [`pipeline`]: Inclusive date filtering and newest-first ordering
//! - [`view`]: Card fields, thumbnails and video embed detection
//! - [`presenter`]: Gallery and detail modal state, HTML markup
//! - [`tui`]: Terminal front end built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the last two weeks interactively
//! nebula
//!
//! # Print a range
//! nebula list --start 2024-01-01 --end 2024-01-10
//!
//! # Write a standalone page
//! nebula export --start 2024-01-01 --out gallery.html
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the feed
/// client, the load tracker and the loaded configuration.
pub mod app;

/// Command-line interface using clap.
///
/// - `tui` - Launch the interactive gallery (default)
/// - `list [--start] [--end]` - Print cards for a range
/// - `export [--start] [--end] --out <file>` - Write an HTML page
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/nebula/config.toml`, supporting:
/// - Feed URL and default window length
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`Entry`](domain::Entry): One feed record, leniently parsed
/// - [`MediaKind`](domain::MediaKind): Image, video or unknown media
/// - [`DateRange`](domain::DateRange): Validated inclusive date window
pub mod domain;

/// Feed download.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for fetching raw bytes
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`LoadTracker`](fetcher::LoadTracker): Discards responses from superseded loads
pub mod fetcher;

/// Feed document parsing into [`Entry`](domain::Entry) records.
pub mod normalizer;

/// Range filtering and ordering.
pub mod pipeline;

/// Gallery and detail presentation state.
pub mod presenter;

/// Terminal user interface.
///
/// Range bar with start/end fields and a Load button, a card grid,
/// and a detail popup. Mouse clicks and keyboard activation reach the
/// same handlers.
pub mod tui;

/// View mapping from entries to gallery cards.
pub mod view;
