use serde::{Deserialize, Serialize};

use crate::model::metrics::QualityMetrics;
use crate::model::status::HealthStatus;
use crate::model::table::Table;

/// A named upstream feed of market data. Defined once at startup and
/// immutable afterwards; `id` is the routing key for the detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    pub status: HealthStatus,
    pub description: String,
    pub tables: Vec<Table>,
    pub metrics: QualityMetrics,
}
