use serde::{Deserialize, Serialize};

/// One current snapshot of the six data-quality dimensions for a data
/// source. Each score is a percentage in `[0, 100]`; there is no history,
/// a source carries exactly one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub accuracy: f64,
    pub completeness: f64,
    pub consistency: f64,
    pub timeliness: f64,
    pub validity: f64,
    pub uniqueness: f64,
}

impl QualityMetrics {
    /// The six dimensions in display order, paired with their names.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("Accuracy", self.accuracy),
            ("Completeness", self.completeness),
            ("Consistency", self.consistency),
            ("Timeliness", self.timeliness),
            ("Validity", self.validity),
            ("Uniqueness", self.uniqueness),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_preserve_display_order_and_values() {
        let metrics = QualityMetrics {
            accuracy: 91.2,
            completeness: 88.7,
            consistency: 100.0,
            timeliness: 89.0,
            validity: 85.9,
            uniqueness: 98.5,
        };
        let entries = metrics.entries();
        assert_eq!(entries[0], ("Accuracy", 91.2));
        assert_eq!(entries[2], ("Consistency", 100.0));
        assert_eq!(entries[5], ("Uniqueness", 98.5));
    }
}
