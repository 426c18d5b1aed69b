use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bylines")]
#[command(about = "Track writer statistics and render leaderboard reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the data file (also: BYLINES_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a writer to the roster
    #[command(alias = "a")]
    Add {
        /// Name of the writer
        name: String,
    },

    /// Show the ranked leaderboard
    #[command(alias = "ls")]
    List,

    /// Overwrite a writer's article and view counts
    Set {
        /// Writer id (as shown by `list`)
        id: String,

        /// Total article count
        articles: u64,

        /// Total view count
        views: u64,
    },

    /// Remove a writer (no error if the id is unknown)
    #[command(alias = "rm")]
    Remove {
        /// Writer id
        id: String,
    },

    /// Render the leaderboard report as a PNG
    Report {
        /// Period start (YYYY-MM-DD); the subtitle needs both dates
        #[arg(long = "from")]
        start: Option<String>,

        /// Period end (YYYY-MM-DD)
        #[arg(long = "to")]
        end: Option<String>,

        /// Output file (defaults to writer_report_<range>.png)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Re-run the id repair pass against the store
    Doctor,

    /// Print the path of the data file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., font-path)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
