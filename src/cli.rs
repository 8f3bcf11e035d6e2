//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for dogfinder using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive dashboard (default)
//! - **breeds**: List every breed the service knows
//! - **search**: Search dogs and print the records
//! - **match**: Ask the service to pick a match among the given ids
//! - **dogs**: Print records for the given ids
//! - **locations**: Look up or search postal locations
//! - **config**: Show the configuration or store the user details
//! - **completions**: Print a shell completion script
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use dogfinder::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["dogfinder", "search", "--breed", "Pug", "--age-max", "4"]);
//! if let Some(Commands::Search(args)) = cli.command {
//!     let query = args.to_query(None);
//!     assert_eq!(query.breeds, Some(vec!["Pug".to_string()]));
//!     assert_eq!(query.age_max, Some(4));
//! }
//! ```

use crate::api::query::query_from_cursor;
use crate::models::{DogSearchQuery, LocationSearchRequest};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the path of the configuration file
    Path,

    /// Prompt for name and email and save them
    #[command(name = "set-user")]
    SetUser,
}

/// Location subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LocationsCommands {
    /// Search locations by city or state
    Search {
        /// City name
        #[arg(long)]
        city: Option<String>,

        /// Two-letter state codes (can specify multiple: --state MA --state NY)
        #[arg(long = "state", value_name = "STATE")]
        states: Vec<String>,

        /// Number of results to return
        #[arg(long)]
        size: Option<u32>,

        /// Offset of the first result
        #[arg(long)]
        from: Option<u32>,
    },
}

impl LocationsCommands {
    /// Build the request body for a location search
    #[must_use]
    pub fn to_request(&self) -> LocationSearchRequest {
        let Self::Search {
            city,
            states,
            size,
            from,
        } = self;
        LocationSearchRequest {
            city: city.clone(),
            states: Some(states.clone()).filter(|s| !s.is_empty()),
            geo_bounding_box: None,
            size: *size,
            from: *from,
        }
    }
}

/// Filters for the search command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Breeds to include (can specify multiple: -b Pug -b Akita)
    #[arg(short = 'b', long = "breed", value_name = "BREED")]
    pub breeds: Vec<String>,

    /// Postal codes to include
    #[arg(short = 'z', long = "zip", value_name = "ZIP")]
    pub zip_codes: Vec<String>,

    /// Minimum age in years
    #[arg(long = "age-min", value_name = "N")]
    pub age_min: Option<u32>,

    /// Maximum age in years
    #[arg(long = "age-max", value_name = "N")]
    pub age_max: Option<u32>,

    /// Identifiers requested from the service
    #[arg(long, value_name = "N")]
    pub size: Option<u32>,

    /// Offset, or a `next`/`prev` cursor printed by an earlier search
    #[arg(long, value_name = "CURSOR")]
    pub from: Option<String>,

    /// Sort directive such as `breed:asc` or `age:desc` (overrides config)
    #[arg(long, value_name = "FIELD:DIR")]
    pub sort: Option<String>,

    /// Print only this page of the results
    #[arg(long, value_name = "N")]
    pub page: Option<usize>,

    /// Records per page when `--page` is given (overrides config)
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

impl SearchArgs {
    /// Build the search query, using `default_sort` when no `--sort` is given
    ///
    /// A `--from` value holding a full cursor (`/dogs/search?...`) replaces
    /// the other filters with the ones encoded in the cursor.
    #[must_use]
    pub fn to_query(&self, default_sort: Option<String>) -> DogSearchQuery {
        if let Some(cursor) = self.from.as_deref().filter(|f| f.contains('?')) {
            return query_from_cursor(cursor);
        }

        let non_empty = |values: &[String]| Some(values.to_vec()).filter(|v| !v.is_empty());
        DogSearchQuery {
            breeds: non_empty(&self.breeds),
            zip_codes: non_empty(&self.zip_codes),
            age_min: self.age_min,
            age_max: self.age_max,
            size: self.size,
            from: self.from.clone(),
            sort: self.sort.clone().or(default_sort),
        }
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "dogfinder")]
#[command(about = "Browse adoptable dogs and find a match", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Name used to log in (overrides config)
    #[arg(long, global = true)]
    pub name: Option<String>,

    /// Email used to log in (overrides config)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Root URL of the adoption service (overrides config)
    #[arg(long = "base-url", global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive dashboard (default)
    #[command(visible_alias = "b")]
    Browse,

    /// List all breeds
    Breeds,

    /// Search dogs and print the matching records
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Pick a match among the given dog ids
    Match {
        /// Candidate dog ids
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Print the records for the given dog ids
    Dogs {
        /// Dog ids
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Look up locations by postal code, or search them
    #[command(args_conflicts_with_subcommands = true)]
    Locations {
        #[command(subcommand)]
        command: Option<LocationsCommands>,

        /// Postal codes to look up
        #[arg(value_name = "ZIP")]
        zip_codes: Vec<String>,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a completion script for the given shell
    Completions {
        /// Target shell
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}
