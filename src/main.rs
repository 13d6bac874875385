//! # pitch_press
//!
//! Builds the pitch page snapshot: loads configuration, aggregates press
//! coverage, applies the requested risk and investment interactions, and
//! writes JSON and Markdown outputs.
//!
//! ## Usage
//!
//! ```sh
//! pitch_press -c pitch.yaml -j ./json -m ./markdown
//! ```

use chrono::Utc;
use clap::Parser;
use futures::StreamExt;
use pitch_press::cli::Cli;
use pitch_press::config::PitchConfig;
use pitch_press::countdown::{Countdown, Refresh};
use pitch_press::http::{FetchHtml, HttpFetcher, RetryFetch};
use pitch_press::invest::parse_amount;
use pitch_press::models::{ArticleLink, ArticleRecord};
use pitch_press::outputs::{json, markdown};
use pitch_press::page::{Interaction, PageState};
use pitch_press::scrapers::press::PressAggregator;
use pitch_press::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("pitch_press starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = PitchConfig::load_or_default(&args.config).await;
    if let Some(retries) = args.retries {
        config.fetch.max_retries = retries;
    }

    // Early check: ensure output dirs are writable before any fetching
    for dir in [&args.json_output_dir, &args.markdown_output_dir]
        .into_iter()
        .flatten()
    {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Press coverage ----
    let fetcher = RetryFetch::new(
        HttpFetcher::new(config.fetch.timeout())?,
        config.fetch.max_retries,
        config.fetch.base_delay(),
    );
    let aggregator = PressAggregator::new(fetcher, config.default_image.clone());
    let articles = collect_press(&aggregator, config.press.clone()).await;

    // ---- Page state ----
    let interaction = Interaction {
        amount: args.amount.as_deref().and_then(|text| {
            let parsed = parse_amount(text);
            if parsed.is_none() {
                warn!(input = %text, "Could not read investment amount");
            }
            parsed
        }),
        show_all_risks: args.show_all_risks,
        select_risk: args.select_risk,
    };
    let mut state = PageState::from_config(&config);
    state.apply(&interaction);

    match state.gate.confirm() {
        Some(ack) => {
            info!(amount = ?interaction.amount, "Investment confirmed");
            println!("{}", ack.message);
        }
        None if interaction.amount.is_some() => {
            warn!(
                amount = ?interaction.amount,
                minimum = config.min_investment,
                "Investment amount below minimum; confirmation disabled"
            );
        }
        None => {}
    }

    let page = state.snapshot(&config, articles, Utc::now());
    info!(countdown = %page.countdown, articles = page.articles.len(), "Page snapshot ready");

    // ---- Outputs ----
    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_page(&page, dir).await {
            error!(error = %e, "Failed to write JSON snapshot");
        }
    }

    if let Some(dir) = &args.markdown_output_dir {
        let path = std::path::Path::new(dir).join(markdown::PAGE_FILENAME);
        info!(path = %path.display(), "Writing Markdown");
        if let Err(e) = tokio::fs::write(&path, markdown::page_to_markdown(&page)).await {
            error!(path = %path.display(), error = %e, "Failed writing Markdown");
        } else {
            info!(path = %path.display(), "Wrote pitch page Markdown");
        }
    }

    if args.watch {
        watch_countdown(
            state.countdown,
            Refresh::from_secs(config.countdown_refresh_secs),
        )
        .await;
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Aggregate press records, tearing down in-flight fetches on Ctrl-C.
///
/// Records already extracted when interrupted are kept.
#[instrument(level = "info", skip_all, fields(links = links.len()))]
async fn collect_press<F>(aggregator: &PressAggregator<F>, links: Vec<ArticleLink>) -> Vec<ArticleRecord>
where
    F: FetchHtml + Send + Sync + 'static,
{
    let requested = links.len();
    let shutdown = aggregator.shutdown_handle();
    let outcomes = aggregator.outcomes(links);
    tokio::pin!(outcomes);
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    let mut records = Vec::with_capacity(requested);
    loop {
        tokio::select! {
            next = outcomes.next() => match next {
                Some(outcome) => records.extend(outcome.into_record()),
                None => break,
            },
            _ = &mut interrupted, if !shutdown.is_triggered() => {
                warn!("Interrupted; discarding in-flight press fetches");
                shutdown.trigger();
            }
        }
    }

    info!(
        requested,
        fetched = records.len(),
        dropped = requested - records.len(),
        "Completed press aggregation"
    );
    records
}

/// Print countdown ticks until the deadline passes or Ctrl-C.
async fn watch_countdown(countdown: Countdown, refresh: Refresh) {
    info!(deadline = %countdown.deadline(), ?refresh, "Watching countdown");
    let mut ticks = countdown.ticks(refresh);
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    loop {
        tokio::select! {
            tick = ticks.next() => match tick {
                Some(state) => println!("{state}"),
                None => break,
            },
            _ = &mut interrupted => break,
        }
    }
}
