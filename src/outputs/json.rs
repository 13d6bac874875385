//! JSON output of the pitch page snapshot.
//!
//! The snapshot is the hand-off to any view layer: press articles, risk
//! pagination state, countdown text and investment gate state in one file.
//!
//! ```text
//! json_output_dir/
//! └── pitch.json
//! ```

use crate::models::PitchPage;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

pub const PAGE_FILENAME: &str = "pitch.json";

/// Write a [`PitchPage`] as pretty-printed JSON into `json_output_dir`.
///
/// # Returns
///
/// The path written, or an error if directory creation or writing fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_page(page: &PitchPage, json_output_dir: &str) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(page)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = Path::new(json_output_dir).join(PAGE_FILENAME);
    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = page.articles.len(), "Wrote JSON page snapshot");

    Ok(path)
}
