//! # pitch_press
//!
//! Data and state behind a single-page investment pitch site.
//!
//! The interesting part is press coverage: a configured list of article URLs is
//! fetched concurrently, each page's head tags are scraped into a normalized
//! [`models::ArticleRecord`], and failures are logged and dropped so partial
//! results are always usable. Around it sit three small state machines: the
//! risk disclosure view, the countdown to the offering deadline, and the
//! minimum investment gate.
//!
//! ## Architecture
//!
//! 1. **Config**: Load links, risks, team and timeline ([`config`])
//! 2. **Fetching**: One task per link, results in completion order ([`scrapers::press`], [`http`])
//! 3. **Extraction**: Fallback chains over HTML head tags ([`scrapers::metadata`])
//! 4. **State**: Risks, countdown and gate combined into a snapshot ([`page`])
//! 5. **Output**: JSON snapshot and Markdown page ([`outputs`])

pub mod cli;
pub mod config;
pub mod countdown;
pub mod http;
pub mod invest;
pub mod models;
pub mod outputs;
pub mod page;
pub mod risk;
pub mod scrapers;
pub mod utils;
