//! Command-line argument definitions.

use chessort_engine::schedule::StrategyKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "chessort",
    version,
    about = "Split a player list into groups and draw a round-robin schedule for each group"
)]
pub struct ChessortCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw groups and round-robin rounds from a player list
    Draw(DrawArgs),
    /// Show the resolved configuration and where each value came from
    Cfg,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DrawArgs {
    /// Text file with one player per line (blank lines are ignored, .zst accepted)
    pub input: String,

    /// Number of players per group
    #[arg(short = 'n', long = "group", allow_negative_numbers = true)]
    pub group: i64,

    /// RNG seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scheduling strategy: randomized or circle
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Reshuffle attempts per round (randomized strategy only)
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// How a draw is written to standard output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Group tables followed by numbered rounds
    Text,
    /// The draw record as pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// # Examples
    ///
    /// ```
    /// # use chessort_cli::cli::OutputFormat;
    /// assert_eq!(OutputFormat::Json.as_str(), "json");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
