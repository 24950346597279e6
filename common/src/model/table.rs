//! Table and column records.
//!
//! A `Table` is owned exclusively by one `DataSource`; there is no back
//! reference to the parent. Callers that need both sides resolve the pair
//! through `catalog::find_table` with the composite `(source_id, table_id)`
//! key instead of storing a pointer in either direction.

use serde::{Deserialize, Serialize};

use crate::model::status::HealthStatus;

/// A single column in a table's schema. The declared type is free text
/// taken from the upstream catalog and is not enforced anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    pub data_type: String,
    pub description: String,
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
}

/// Free-text date coverage of a table, as reported by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// A dataset within a data source, with its descriptive metadata and
/// column schema. `records` and `columns` are the counts reported by the
/// upstream catalog; the schema panel counts `table_columns` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub records: u64,
    pub columns: u32,
    pub last_updated: String,
    pub status: HealthStatus,
    pub description: String,
    pub schema: String,
    pub date_range: DateRange,
    pub tags: Vec<String>,
    pub owners: Vec<String>,
    pub frequent_users: u32,
    pub table_columns: Vec<TableColumn>,
}
