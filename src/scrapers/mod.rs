//! Press coverage scraping.
//!
//! The pitch page lists articles hosted elsewhere. Scraping follows two steps:
//!
//! 1. **Fetching**: Download every configured article page concurrently ([`press`])
//! 2. **Extraction**: Read title, description, image, date and source from the
//!    page head ([`metadata`])
//!
//! Failed fetches are logged and skipped; extraction never fails and falls
//! back to defaults for anything the page does not declare.

pub mod metadata;
pub mod press;
