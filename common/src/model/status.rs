//! Health status enum and its display mappings.
//!
//! Every component that renders a status (sidebar indicators, detail badges,
//! table rows) goes through the mappings defined here so that the three
//! status values always resolve to the same color family: success → green,
//! warning → orange, error → red. The label wording differs between source
//! pages ("Healthy"/"Warning"/"Critical") and table pages ("High Quality"/
//! "Medium Quality"/"Low Quality"), but both are driven by the same enum.

use serde::{Deserialize, Serialize};

/// Health of a data source or table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Success,
    Warning,
    Error,
}

/// A resolved badge: display label plus the CSS class carrying the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl HealthStatus {
    /// Class for the small round status dot used in sidebars and table rows.
    pub fn indicator_class(&self) -> &'static str {
        match self {
            HealthStatus::Success => "status-success",
            HealthStatus::Warning => "status-warning",
            HealthStatus::Error => "status-error",
        }
    }

    /// Class for the colored left border on sidebar cards.
    pub fn border_class(&self) -> &'static str {
        match self {
            HealthStatus::Success => "border-success",
            HealthStatus::Warning => "border-warning",
            HealthStatus::Error => "border-error",
        }
    }

    /// Badge shown on data-source pages.
    pub fn source_badge(&self) -> StatusBadge {
        match self {
            HealthStatus::Success => StatusBadge {
                label: "Healthy",
                class: "badge-success",
            },
            HealthStatus::Warning => StatusBadge {
                label: "Warning",
                class: "badge-warning",
            },
            HealthStatus::Error => StatusBadge {
                label: "Critical",
                class: "badge-error",
            },
        }
    }

    /// Badge shown on table pages, where status reads as a quality grade.
    pub fn quality_badge(&self) -> StatusBadge {
        match self {
            HealthStatus::Success => StatusBadge {
                label: "High Quality",
                class: "badge-success",
            },
            HealthStatus::Warning => StatusBadge {
                label: "Medium Quality",
                class: "badge-warning",
            },
            HealthStatus::Error => StatusBadge {
                label: "Low Quality",
                class: "badge-error",
            },
        }
    }

    /// True when the status should count toward the dashboard alert banner.
    pub fn is_degraded(&self) -> bool {
        matches!(self, HealthStatus::Warning | HealthStatus::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HealthStatus; 3] = [
        HealthStatus::Success,
        HealthStatus::Warning,
        HealthStatus::Error,
    ];

    #[test]
    fn source_badge_is_total_and_distinct() {
        let labels: Vec<_> = ALL.iter().map(|s| s.source_badge().label).collect();
        assert_eq!(labels, vec!["Healthy", "Warning", "Critical"]);
        for status in ALL {
            assert!(!status.source_badge().class.is_empty());
        }
    }

    #[test]
    fn quality_badge_is_total_and_distinct() {
        let labels: Vec<_> = ALL.iter().map(|s| s.quality_badge().label).collect();
        assert_eq!(labels, vec!["High Quality", "Medium Quality", "Low Quality"]);
    }

    #[test]
    fn badge_flavors_share_the_color_class() {
        for status in ALL {
            assert_eq!(status.source_badge().class, status.quality_badge().class);
        }
    }

    #[test]
    fn only_warning_and_error_are_degraded() {
        assert!(!HealthStatus::Success.is_degraded());
        assert!(HealthStatus::Warning.is_degraded());
        assert!(HealthStatus::Error.is_degraded());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&HealthStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: HealthStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(back, HealthStatus::Error);
    }
}
