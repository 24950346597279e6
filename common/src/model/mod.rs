pub mod metrics;
pub mod source;
pub mod status;
pub mod table;

pub use metrics::QualityMetrics;
pub use source::DataSource;
pub use status::{HealthStatus, StatusBadge};
pub use table::{DateRange, Table, TableColumn};
