use crate::domain::entities::record::CountrySummary;

/// Country summary panel: visibility plus the lazily fetched rows.
#[derive(Debug, Clone, Default)]
pub struct SummaryState {
    visible: bool,
    loading: bool,
    loaded: bool,
    rows: Vec<CountrySummary>,
}

impl SummaryState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn rows(&self) -> &[CountrySummary] {
        &self.rows
    }

    /// Flips visibility. Returns true when the caller should fetch the rows:
    /// the panel was opened and nothing usable has been loaded yet.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        if !self.visible || self.loaded || self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// An empty answer is what a failed fetch degrades to, so it is not kept
    /// as loaded and the next open asks again.
    pub fn apply(&mut self, rows: Vec<CountrySummary>) {
        self.loading = false;
        self.loaded = !rows.is_empty();
        self.rows = rows;
    }
}
