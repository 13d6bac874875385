//! Pitch page state assembly.
//!
//! [`PageState`] holds the interactive pieces of the page (risk view, investment
//! gate, countdown) and combines them with aggregated press records into a
//! [`PitchPage`] snapshot for the rendering surface.

use crate::config::PitchConfig;
use crate::countdown::Countdown;
use crate::invest::InvestmentGate;
use crate::models::{ArticleRecord, PitchPage};
use crate::risk::RiskView;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, warn};

/// User input replayed onto a freshly loaded page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interaction {
    pub amount: Option<f64>,
    pub show_all_risks: bool,
    /// Index into the full risk list.
    pub select_risk: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct PageState {
    pub risks: RiskView,
    pub gate: InvestmentGate,
    pub countdown: Countdown,
}

impl PageState {
    pub fn from_config(config: &PitchConfig) -> Self {
        Self {
            risks: RiskView::load(config.risks.clone()),
            gate: InvestmentGate::new(config.company.clone(), config.min_investment),
            countdown: Countdown::new(config.deadline_utc()),
        }
    }

    pub fn apply(&mut self, interaction: &Interaction) {
        if interaction.show_all_risks {
            self.risks.toggle_show_all();
        }
        if let Some(index) = interaction.select_risk {
            match self.risks.select_index(index) {
                Some(risk) => debug!(index, title = %risk.title, "Selected risk"),
                None => warn!(
                    index,
                    loaded = self.risks.all().len(),
                    "Ignoring selection of a risk that is not loaded"
                ),
            }
        }
        let valid = self.gate.set_amount(interaction.amount);
        debug!(amount = ?interaction.amount, valid, "Validated investment amount");
    }

    /// Snapshot the page as of `now`.
    pub fn snapshot(
        &self,
        config: &PitchConfig,
        articles: Vec<ArticleRecord>,
        now: DateTime<Utc>,
    ) -> PitchPage {
        PitchPage {
            company: config.company.clone(),
            generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            articles,
            risks: self.risks.snapshot(),
            countdown: self.countdown.remaining_at(now).to_string(),
            investment: self.gate.snapshot(),
            team: config.team.clone(),
            timeline: config.timeline.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskEntry;
    use chrono::TimeDelta;

    fn config() -> PitchConfig {
        PitchConfig {
            risks: (0..7)
                .map(|i| RiskEntry {
                    title: format!("Risk {i}"),
                    content: String::new(),
                })
                .collect(),
            ..PitchConfig::default()
        }
    }

    #[test]
    fn test_fresh_page_defaults() {
        let config = config();
        let state = PageState::from_config(&config);
        let now = config.deadline_utc() - TimeDelta::seconds(90_061);
        let page = state.snapshot(&config, Vec::new(), now);

        assert_eq!(page.countdown, "1d 1h 1m 1s");
        assert_eq!(page.risks.visible.len(), 5);
        assert_eq!(page.risks.selected.unwrap().title, "Risk 0");
        assert!(!page.investment.is_valid);
        assert_eq!(page.generated_at, "2024-10-30T22:58:59Z");
    }

    #[test]
    fn test_apply_interaction() {
        let config = config();
        let mut state = PageState::from_config(&config);
        state.apply(&Interaction {
            amount: Some(2500.0),
            show_all_risks: true,
            select_risk: Some(6),
        });

        let page = state.snapshot(&config, Vec::new(), config.deadline_utc() + TimeDelta::hours(1));
        assert!(page.risks.expanded);
        assert_eq!(page.risks.visible.len(), 7);
        assert_eq!(page.risks.selected.unwrap().title, "Risk 6");
        assert!(page.investment.is_valid);
        assert_eq!(page.countdown, "0d 0h 0m 0s");
        assert!(state.gate.confirm().is_some());
    }

    #[test]
    fn test_out_of_range_selection_keeps_default() {
        let config = config();
        let mut state = PageState::from_config(&config);
        state.apply(&Interaction {
            select_risk: Some(42),
            ..Interaction::default()
        });
        assert_eq!(state.risks.selected().unwrap().title, "Risk 0");
    }
}
