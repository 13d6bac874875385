//! Concurrent press article aggregation.
//!
//! [`PressAggregator`] issues one independent fetch per configured link, feeds
//! each body through [`extract_with_image`], and yields records in completion
//! order. A failed fetch is logged and dropped without affecting its siblings.
//!
//! # Task ownership
//!
//! Every fetch runs on its own task inside a [`JoinSet`] owned by the returned
//! stream, and each result travels back by value through `join_next`. Dropping
//! the stream aborts whatever is still in flight. Triggering the aggregator's
//! [`ShutdownHandle`] resolves pending fetches to [`FetchError::Cancelled`], so
//! completions arriving after teardown are discarded instead of reported.

use crate::http::{FetchError, FetchHtml};
use crate::models::{ArticleLink, ArticleRecord};
use crate::scrapers::metadata::extract_with_image;
use futures::stream::{self, Stream, StreamExt};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

/// The settled result of fetching one link.
#[derive(Debug)]
pub struct FetchOutcome {
    pub link: ArticleLink,
    pub result: Result<ArticleRecord, FetchError>,
}

impl FetchOutcome {
    /// Keep the record, logging and dropping a failure.
    pub fn into_record(self) -> Option<ArticleRecord> {
        match self.result {
            Ok(record) => {
                debug!(url = %self.link.uri, title = %record.title, "Extracted press article");
                Some(record)
            }
            Err(FetchError::Cancelled) => {
                debug!(url = %self.link.uri, "Discarding press fetch after shutdown");
                None
            }
            Err(e) => {
                error!(url = %self.link.uri, error = %e, "Press article fetch failed; dropping link");
                None
            }
        }
    }
}

/// Signals teardown to an aggregator's in-flight fetches.
#[derive(Debug, Clone)]
pub struct ShutdownHandle(Arc<watch::Sender<bool>>);

impl ShutdownHandle {
    pub fn trigger(&self) {
        self.0.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.0.borrow()
    }
}

/// Fetches press links and extracts article metadata.
///
/// Dropping the aggregator (and all its shutdown handles) also tears down
/// fetches started by it.
pub struct PressAggregator<F> {
    fetcher: Arc<F>,
    default_image: Arc<str>,
    shutdown: ShutdownHandle,
}

impl<F> PressAggregator<F>
where
    F: FetchHtml + Send + Sync + 'static,
{
    /// Create an aggregator. `default_image` fills records whose page has no `og:image`.
    pub fn new(fetcher: F, default_image: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            fetcher: Arc::new(fetcher),
            default_image: Arc::from(default_image.into()),
            shutdown: ShutdownHandle(Arc::new(sender)),
        }
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Start one fetch task per link and stream their outcomes as they settle.
    ///
    /// Tasks are spawned immediately, so this must be called within a Tokio
    /// runtime. There is no concurrency limit and no deduplication: a link
    /// listed twice is fetched twice.
    #[instrument(level = "info", skip_all, fields(links = links.len()))]
    pub fn outcomes(
        &self,
        links: Vec<ArticleLink>,
    ) -> impl Stream<Item = FetchOutcome> + Send + 'static {
        let mut tasks = JoinSet::new();
        for link in links {
            let fetcher = Arc::clone(&self.fetcher);
            let default_image = Arc::clone(&self.default_image);
            let mut shutdown = self.shutdown.0.subscribe();

            tasks.spawn(async move {
                let result = tokio::select! {
                    biased;
                    // A closed channel means the aggregator is gone, which is teardown too.
                    _ = shutdown.wait_for(|down| *down) => Err(FetchError::Cancelled),
                    fetched = fetcher.fetch(&link.uri) => {
                        fetched.map(|html| extract_with_image(&html, &link.uri, &default_image))
                    }
                };
                FetchOutcome { link, result }
            });
        }
        info!(in_flight = tasks.len(), "Started press article fetches");

        stream::unfold(tasks, |mut tasks| async move {
            loop {
                match tasks.join_next().await {
                    Some(Ok(outcome)) => return Some((outcome, tasks)),
                    Some(Err(e)) => warn!(error = %e, "Press fetch task did not complete"),
                    None => return None,
                }
            }
        })
    }

    /// Stream extracted records in completion order, dropping failed links.
    pub fn records(
        &self,
        links: Vec<ArticleLink>,
    ) -> impl Stream<Item = ArticleRecord> + Send + 'static {
        self.outcomes(links)
            .filter_map(|outcome| std::future::ready(outcome.into_record()))
    }

    /// Fetch every link and return the records once all attempts have settled.
    ///
    /// Given N links of which K fail, exactly N−K records are returned. Their
    /// order follows completion and differs between runs.
    #[instrument(level = "info", skip_all)]
    pub async fn aggregate(&self, links: Vec<ArticleLink>) -> Vec<ArticleRecord> {
        let requested = links.len();
        let records: Vec<ArticleRecord> = self.records(links).collect().await;
        info!(
            requested,
            fetched = records.len(),
            dropped = requested - records.len(),
            "Aggregated press articles"
        );
        records
    }
}
