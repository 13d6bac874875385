//! Countdown to the offering deadline.
//!
//! Remaining time is re-derived from the wall clock on every tick, clamped at
//! zero, and formatted as whole days, hours, minutes and seconds.

use chrono::{DateTime, Utc};
use futures::stream::{self, BoxStream, StreamExt};
use std::fmt;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// How often the countdown is recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Compute once and keep the snapshot.
    Once,
    /// Recompute every period until the deadline passes.
    Every(Duration),
}

impl Refresh {
    /// `0` seconds means a one-shot countdown.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Refresh::Once
        } else {
            Refresh::Every(Duration::from_secs(secs))
        }
    }
}

/// Time left until the deadline at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownState {
    pub remaining: Duration,
}

impl CountdownState {
    pub fn is_elapsed(&self) -> bool {
        self.remaining.is_zero()
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.remaining.as_secs();
        write!(
            f,
            "{}d {}h {}m {}s",
            secs / SECS_PER_DAY,
            secs % SECS_PER_DAY / SECS_PER_HOUR,
            secs % SECS_PER_HOUR / SECS_PER_MINUTE,
            secs % SECS_PER_MINUTE
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    deadline: DateTime<Utc>,
}

impl Countdown {
    pub fn new(deadline: DateTime<Utc>) -> Self {
        Self { deadline }
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Remaining time as of `now`, never negative.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> CountdownState {
        let remaining = (self.deadline - now).to_std().unwrap_or(Duration::ZERO);
        CountdownState { remaining }
    }

    pub fn current(&self) -> CountdownState {
        self.remaining_at(Utc::now())
    }

    /// Stream countdown states according to `refresh`.
    ///
    /// A periodic stream emits immediately, then once per period, and ends
    /// right after emitting the first elapsed state. Must be polled within a
    /// Tokio runtime.
    pub fn ticks(self, refresh: Refresh) -> BoxStream<'static, CountdownState> {
        match refresh {
            Refresh::Once => stream::once(async move { self.current() }).boxed(),
            Refresh::Every(period) => {
                let mut ticker = interval(period);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                stream::unfold((ticker, false), move |(mut ticker, finished)| async move {
                    if finished {
                        return None;
                    }
                    ticker.tick().await;
                    let state = self.current();
                    Some((state, (ticker, state.is_elapsed())))
                })
                .boxed()
            }
        }
    }
}
