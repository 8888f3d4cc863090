use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reviewlens")]
#[command(
    author,
    version,
    about = "Review authenticity and fraud-risk analysis from normalized review/price batches"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a normalized request file and emit the result as JSON
    Analyze {
        /// Path to the AnalysisRequest JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Engine configuration YAML (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the result JSON
        #[arg(long)]
        pretty: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify a single review text and print the verdict
    Classify {
        /// Review text
        #[arg(short, long)]
        text: String,

        /// Star rating 1-5
        #[arg(short, long, default_value = "3")]
        rating: u8,

        /// Treat the review as a verified purchase
        #[arg(long)]
        verified: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
