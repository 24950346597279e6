//! Local state for the dashboard page.
//!
//! Selection logic lives here as plain methods so it stays testable on the
//! host: the `update` module only forwards messages to these methods.

use common::catalog;
use common::model::DataSource;

/// Source shown in the metric panel when the page loads, and the fallback
/// if the selected id ever stops resolving.
pub const DEFAULT_SOURCE_ID: &str = "opec-data";

/// Display-only time range selector in the header. It does not filter
/// anything; the metrics are a single current snapshot per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    LastDay,
    LastWeek,
    LastMonth,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::LastDay, TimeRange::LastWeek, TimeRange::LastMonth];

    /// Short value used as the `<option>` value attribute.
    pub fn value(&self) -> &'static str {
        match self {
            TimeRange::LastDay => "24h",
            TimeRange::LastWeek => "7d",
            TimeRange::LastMonth => "30d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LastDay => "Last 24 Hours",
            TimeRange::LastWeek => "Last 7 Days",
            TimeRange::LastMonth => "Last 30 Days",
        }
    }

    pub fn from_value(value: &str) -> Option<TimeRange> {
        Self::ALL.into_iter().find(|range| range.value() == value)
    }
}

pub struct DashboardPage {
    pub selected_source_id: String,
    pub time_range: TimeRange,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            selected_source_id: DEFAULT_SOURCE_ID.to_string(),
            time_range: TimeRange::LastDay,
        }
    }

    /// The source whose metrics the main panel shows. Falls back to the
    /// default id; `None` only if the catalog were ever missing both ids.
    pub fn current_source(&self) -> Option<&'static DataSource> {
        catalog::find_data_source(&self.selected_source_id)
            .or_else(|| catalog::find_data_source(DEFAULT_SOURCE_ID))
    }

    /// Returns true when the selection changed and the panel must rerender.
    pub fn select_source(&mut self, id: String) -> bool {
        if self.selected_source_id == id {
            return false;
        }
        self.selected_source_id = id;
        true
    }

    pub fn set_time_range(&mut self, range: TimeRange) -> bool {
        if self.time_range == range {
            return false;
        }
        self.time_range = range;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_fallback_source() {
        let page = DashboardPage::new();
        let source = page.current_source().unwrap();
        assert_eq!(source.id, DEFAULT_SOURCE_ID);
        assert_eq!(page.time_range, TimeRange::LastDay);
    }

    #[test]
    fn selecting_a_source_swaps_the_whole_metrics_snapshot() {
        let mut page = DashboardPage::new();
        let before = page.current_source().unwrap().metrics.clone();

        assert!(page.select_source("nymex-trading".to_string()));
        let after = page.current_source().unwrap();
        assert_eq!(after.id, "nymex-trading");
        assert_ne!(after.metrics, before);
        assert_eq!(after.metrics, catalog::find_data_source("nymex-trading").unwrap().metrics);
    }

    #[test]
    fn reselecting_the_same_source_reports_no_change() {
        let mut page = DashboardPage::new();
        assert!(!page.select_source(DEFAULT_SOURCE_ID.to_string()));
    }

    #[test]
    fn unknown_selection_falls_back_to_the_default() {
        let mut page = DashboardPage::new();
        page.select_source("no-such-source".to_string());
        assert_eq!(page.current_source().unwrap().id, DEFAULT_SOURCE_ID);
    }

    #[test]
    fn time_range_values_round_trip() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_value(range.value()), Some(range));
        }
        assert_eq!(TimeRange::from_value("90d"), None);
    }
}
