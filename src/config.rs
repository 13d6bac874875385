//! Pitch page configuration.
//!
//! Configuration is a single YAML (or JSON) document. The press, risk, team and
//! timeline lists may be given inline or in separate files, each loaded on its
//! own. A list file that cannot be read or parsed is logged and treated as
//! empty, so a broken press list simply means no press coverage.
//!
//! ```yaml
//! company: AvaWatz
//! deadline: 2024-10-31T17:00:00-07:00
//! min_investment: 2500
//! countdown_refresh_secs: 1
//! fetch:
//!   max_retries: 2
//! press_file: press.json
//! risks:
//!   - title: Illiquidity
//!     content: Shares cannot be resold for at least one year.
//! ```

use crate::invest::MIN_INVESTMENT;
use crate::models::{ArticleLink, RiskEntry, TeamMember, TimelineEvent};
use crate::scrapers::metadata::DEFAULT_IMAGE;
use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::{debug, error, info, instrument};

const DEFAULT_DEADLINE: &str = "2024-10-31T17:00:00-07:00";

/// How press pages are fetched.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    /// Extra attempts for transient failures. `0` fetches each link once.
    pub max_retries: usize,
    /// First backoff delay; doubles on each retry.
    pub base_delay_ms: u64,
    /// Per-request timeout. Unset leaves the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 1000,
            timeout_secs: None,
        }
    }
}

impl FetchConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct PitchConfig {
    pub company: String,
    /// When the offering closes.
    pub deadline: DateTime<FixedOffset>,
    pub min_investment: f64,
    /// Image used for articles without `og:image`.
    pub default_image: String,
    /// Countdown refresh period; `0` computes it once.
    pub countdown_refresh_secs: u64,
    pub fetch: FetchConfig,
    pub press: Vec<ArticleLink>,
    pub risks: Vec<RiskEntry>,
    pub team: Vec<TeamMember>,
    pub timeline: Vec<TimelineEvent>,
    /// Separate list files; relative paths resolve against the config file's directory.
    pub press_file: Option<PathBuf>,
    pub risks_file: Option<PathBuf>,
    pub team_file: Option<PathBuf>,
    pub timeline_file: Option<PathBuf>,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            company: "AvaWatz".to_string(),
            deadline: DateTime::parse_from_rfc3339(DEFAULT_DEADLINE)
                .expect("default deadline is valid RFC 3339"),
            min_investment: MIN_INVESTMENT,
            default_image: DEFAULT_IMAGE.to_string(),
            countdown_refresh_secs: 1,
            fetch: FetchConfig::default(),
            press: Vec::new(),
            risks: Vec::new(),
            team: Vec::new(),
            timeline: Vec::new(),
            press_file: None,
            risks_file: None,
            team_file: None,
            timeline_file: None,
        }
    }
}

impl PitchConfig {
    pub fn deadline_utc(&self) -> DateTime<Utc> {
        self.deadline.with_timezone(&Utc)
    }

    /// Read and parse the config file, then load any separate list files.
    ///
    /// # Errors
    ///
    /// Returns an error if the main file cannot be read or parsed. List file
    /// failures are logged and leave that list empty.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let mut config: Self = parse_document(path, &fs::read_to_string(path).await?)?;
        debug!("Parsed config document");

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        if let Some(file) = config.press_file.clone() {
            config.press = load_list_or_empty(&base_dir.join(file), "press links").await;
        }
        if let Some(file) = config.risks_file.clone() {
            config.risks = load_list_or_empty(&base_dir.join(file), "risks").await;
        }
        if let Some(file) = config.team_file.clone() {
            config.team = load_list_or_empty(&base_dir.join(file), "team members").await;
        }
        if let Some(file) = config.timeline_file.clone() {
            config.timeline = load_list_or_empty(&base_dir.join(file), "timeline").await;
        }

        info!(
            press = config.press.len(),
            risks = config.risks.len(),
            team = config.team.len(),
            timeline = config.timeline.len(),
            "Loaded pitch configuration"
        );
        Ok(config)
    }

    /// Like [`PitchConfig::load_from_path`], but a failure is logged and yields defaults.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_path(path).await {
            Ok(config) => config,
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "Error loading configuration; continuing with defaults"
                );
                Self::default()
            }
        }
    }
}

fn parse_document<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T, Box<dyn Error>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
async fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Box<dyn Error>> {
    let text = fs::read_to_string(path).await?;
    parse_document(path, &text)
}

async fn load_list_or_empty<T: DeserializeOwned>(path: &Path, what: &str) -> Vec<T> {
    match load_list(path).await {
        Ok(items) => items,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Error loading {what}; using an empty list");
            Vec::new()
        }
    }
}
