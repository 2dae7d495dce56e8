//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::config::OutputFormat;

/// Dobble-style card deck generator: every pair of cards shares exactly one symbol
#[derive(Parser, Debug)]
#[command(name = "dobble")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a deck and list its cards
    Generate {
        /// Symbols (images) per card, 2..=15 (default: from config)
        #[arg(allow_negative_numbers = true)]
        symbols: Option<String>,

        /// Output format (default: from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Mark card as processed (1-based, repeatable)
        #[arg(short, long = "processed", value_name = "CARD")]
        processed: Vec<usize>,
    },

    /// Check whether the raw construction is already a valid deck
    Check {
        /// Symbols (images) per card, 2..=15
        #[arg(allow_negative_numbers = true)]
        symbols: String,
    },

    /// Show symbol and card counts for a card size
    Formula {
        /// Symbols (images) per card, 2..=15
        #[arg(allow_negative_numbers = true)]
        symbols: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}
