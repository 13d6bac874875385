//! Command-line interface definitions for pitch_press.
//!
//! Options can be provided via command-line flags, and the config path and
//! retry count also via environment variables.

use clap::Parser;

/// Command-line arguments for pitch_press.
///
/// # Examples
///
/// ```sh
/// # Aggregate press coverage and write both outputs
/// pitch_press -c pitch.yaml -j ./json -m ./markdown
///
/// # Check an investment amount and open the full risk list
/// pitch_press --amount '$3,000' --show-all-risks --select-risk 6
///
/// # Follow the countdown until the deadline
/// pitch_press --watch
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the pitch configuration file (YAML or JSON)
    #[arg(short, long, env = "PITCH_CONFIG", default_value = "pitch.yaml")]
    pub config: String,

    /// Output directory for the JSON page snapshot
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Output directory for the Markdown page
    #[arg(short, long)]
    pub markdown_output_dir: Option<String>,

    /// Investment amount as typed, e.g. "2500" or "$2,500.00"
    #[arg(long)]
    pub amount: Option<String>,

    /// Show every risk disclosure instead of the preview
    #[arg(long)]
    pub show_all_risks: bool,

    /// Select a risk disclosure by its position in the full list (0-based)
    #[arg(long)]
    pub select_risk: Option<usize>,

    /// Retry transient press fetch failures this many times (overrides config)
    #[arg(long, env = "PITCH_FETCH_RETRIES")]
    pub retries: Option<usize>,

    /// Keep printing the countdown until the deadline passes
    #[arg(short, long)]
    pub watch: bool,
}
