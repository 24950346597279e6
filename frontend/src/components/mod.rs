pub mod alert_banner;
pub mod data_source_item;
pub mod metric_card;
pub mod metric_grid;
