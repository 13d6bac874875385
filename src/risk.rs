//! Risk disclosure pagination and selection.
//!
//! The page shows a preview of the first [`PREVIEW_LEN`] risks with a toggle to
//! reveal the rest, and a detail pane for one selected risk. Selection may be
//! any loaded risk regardless of visibility, and it survives collapsing.

use crate::models::RiskEntry;
use serde::Serialize;

/// Number of risks shown while collapsed.
pub const PREVIEW_LEN: usize = 5;

/// Serializable view of [`RiskView`] for the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskViewState {
    pub all: Vec<RiskEntry>,
    pub visible: Vec<RiskEntry>,
    pub selected: Option<RiskEntry>,
    pub expanded: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RiskView {
    all: Vec<RiskEntry>,
    expanded: bool,
    // Index into `all`; `None` only when `all` is empty.
    selected: Option<usize>,
}

impl RiskView {
    /// Load risks collapsed, selecting the first visible entry.
    pub fn load(all: Vec<RiskEntry>) -> Self {
        let selected = if all.is_empty() { None } else { Some(0) };
        Self {
            all,
            expanded: false,
            selected,
        }
    }

    pub fn all(&self) -> &[RiskEntry] {
        &self.all
    }

    pub fn visible(&self) -> &[RiskEntry] {
        if self.expanded {
            &self.all
        } else {
            &self.all[..self.all.len().min(PREVIEW_LEN)]
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Number of risks hidden by the collapsed preview.
    pub fn hidden_count(&self) -> usize {
        self.all.len() - self.visible().len()
    }

    pub fn toggle_show_all(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn selected(&self) -> Option<&RiskEntry> {
        self.selected.and_then(|i| self.all.get(i))
    }

    /// Select the risk at `index` in the full list.
    ///
    /// Out-of-range indices leave the selection unchanged and return `None`.
    pub fn select_index(&mut self, index: usize) -> Option<&RiskEntry> {
        if index >= self.all.len() {
            return None;
        }
        self.selected = Some(index);
        self.all.get(index)
    }

    /// Select `risk` if it is one of the loaded entries.
    pub fn select(&mut self, risk: &RiskEntry) -> Option<&RiskEntry> {
        let index = self.all.iter().position(|entry| entry == risk)?;
        self.select_index(index)
    }

    pub fn snapshot(&self) -> RiskViewState {
        RiskViewState {
            all: self.all.clone(),
            visible: self.visible().to_vec(),
            selected: self.selected().cloned(),
            expanded: self.expanded,
        }
    }
}
