//! Static catalog of data sources.
//!
//! The dataset is built once on first access and never mutated, so the
//! `'static` references handed out by the lookup functions stay valid for
//! the life of the process and are safe to read from anywhere. Lookups are
//! linear scans; the dataset is ten sources with a handful of tables each,
//! so nothing smarter is warranted.
//!
//! The only failure mode is an unknown identifier, reported as `None`.
//! Callers render a not-found fallback instead of panicking.

use std::sync::OnceLock;

use crate::model::metrics::QualityMetrics;
use crate::model::source::DataSource;
use crate::model::status::HealthStatus;
use crate::model::table::{DateRange, Table, TableColumn};

static DATA_SOURCES: OnceLock<Vec<DataSource>> = OnceLock::new();

/// All data sources, in sidebar display order.
pub fn data_sources() -> &'static [DataSource] {
    DATA_SOURCES.get_or_init(build_catalog)
}

/// Looks a data source up by id. `None` when the id is unknown.
pub fn find_data_source(id: &str) -> Option<&'static DataSource> {
    data_sources().iter().find(|source| source.id == id)
}

/// Resolves a table through its composite `(source_id, table_id)` key and
/// returns it together with the owning source.
pub fn find_table(source_id: &str, table_id: &str) -> Option<(&'static DataSource, &'static Table)> {
    let source = find_data_source(source_id)?;
    let table = source.tables.iter().find(|table| table.id == table_id)?;
    Some((source, table))
}

/// Number of sources currently in a warning or error state. Drives the
/// dashboard alert banner.
pub fn degraded_source_count() -> usize {
    data_sources()
        .iter()
        .filter(|source| source.status.is_degraded())
        .count()
}

fn col(
    name: &str,
    data_type: &str,
    description: &str,
    nullable: bool,
    primary_key: bool,
) -> TableColumn {
    TableColumn {
        name: name.to_string(),
        data_type: data_type.to_string(),
        description: description.to_string(),
        nullable,
        primary_key,
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn range(from: &str, to: &str) -> DateRange {
    DateRange {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn build_catalog() -> Vec<DataSource> {
    vec![
        DataSource {
            id: "reuters-commodities".to_string(),
            name: "Reuters Commodities".to_string(),
            status: HealthStatus::Success,
            description: "Real-time commodity prices and market data from Reuters".to_string(),
            tables: vec![
                Table {
                    id: "oil-prices".to_string(),
                    name: "Oil Prices".to_string(),
                    records: 45672,
                    columns: 12,
                    last_updated: "2024-01-15 09:30:00".to_string(),
                    status: HealthStatus::Success,
                    description: "Intraday spot and settlement prices for major crude \
                                  benchmarks, normalized to USD per barrel."
                        .to_string(),
                    schema: "reuters".to_string(),
                    date_range: range("2019-01-02", "2024-01-15"),
                    tags: strs(&["crude", "spot", "intraday", "usd"]),
                    owners: strs(&["m.keller@trading.example", "data-ops@trading.example"]),
                    frequent_users: 42,
                    table_columns: vec![
                        col("price_date", "date", "Trading date of the quote", false, true),
                        col("symbol", "string", "Benchmark symbol (BRN, WTI, DUB)", false, true),
                        col("open_price", "decimal", "First traded price of the session", false, false),
                        col("close_price", "decimal", "Settlement price of the session", false, false),
                        col("volume", "integer", "Contracts traded", true, false),
                        col("source_feed", "string", "Upstream Reuters feed identifier", true, false),
                    ],
                },
                Table {
                    id: "gas-futures".to_string(),
                    name: "Gas Futures".to_string(),
                    records: 23451,
                    columns: 8,
                    last_updated: "2024-01-15 09:29:45".to_string(),
                    status: HealthStatus::Success,
                    description: "Natural gas futures curve snapshots across the front \
                                  twelve delivery months."
                        .to_string(),
                    schema: "reuters".to_string(),
                    date_range: range("2020-03-01", "2024-01-15"),
                    tags: strs(&["natural-gas", "futures", "curve"]),
                    owners: strs(&["m.keller@trading.example"]),
                    frequent_users: 18,
                    table_columns: vec![
                        col("quote_ts", "timestamp", "Snapshot timestamp (UTC)", false, true),
                        col("contract_month", "date", "Delivery month of the contract", false, true),
                        col("settle_price", "decimal", "Settlement price in USD/MMBtu", false, false),
                        col("open_interest", "integer", "Open interest at snapshot time", true, false),
                    ],
                },
                Table {
                    id: "commodity-index".to_string(),
                    name: "Commodity Index".to_string(),
                    records: 8934,
                    columns: 15,
                    last_updated: "2024-01-15 09:28:30".to_string(),
                    status: HealthStatus::Warning,
                    description: "Daily levels for broad commodity indices with per-sector \
                                  sub-index breakdowns."
                        .to_string(),
                    schema: "reuters".to_string(),
                    date_range: range("2015-01-02", "2024-01-15"),
                    tags: strs(&["index", "daily", "cross-asset"]),
                    owners: strs(&["a.sorensen@trading.example", "data-ops@trading.example"]),
                    frequent_users: 9,
                    table_columns: vec![
                        col("index_date", "date", "Valuation date", false, true),
                        col("index_code", "string", "Index identifier (CRB, BCOM)", false, true),
                        col("level", "decimal", "Closing index level", false, false),
                        col("energy_sub", "decimal", "Energy sub-index level", true, false),
                        col("metals_sub", "decimal", "Metals sub-index level", true, false),
                        col("rebalanced", "boolean", "True on rebalancing days", false, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 91.2,
                completeness: 88.7,
                consistency: 100.0,
                timeliness: 89.0,
                validity: 85.9,
                uniqueness: 98.5,
            },
        },
        DataSource {
            id: "bloomberg-energy".to_string(),
            name: "Bloomberg Energy".to_string(),
            status: HealthStatus::Warning,
            description: "Energy market data and analytics from Bloomberg Terminal".to_string(),
            tables: vec![
                Table {
                    id: "energy-derivatives".to_string(),
                    name: "Energy Derivatives".to_string(),
                    records: 67890,
                    columns: 18,
                    last_updated: "2024-01-15 09:25:12".to_string(),
                    status: HealthStatus::Warning,
                    description: "Exchange and OTC energy derivative quotes with greeks \
                                  where the terminal provides them."
                        .to_string(),
                    schema: "bloomberg".to_string(),
                    date_range: range("2018-06-01", "2024-01-15"),
                    tags: strs(&["derivatives", "otc", "options"]),
                    owners: strs(&["j.marchetti@trading.example"]),
                    frequent_users: 27,
                    table_columns: vec![
                        col("instrument_id", "string", "Bloomberg instrument identifier", false, true),
                        col("quote_ts", "timestamp", "Quote timestamp (UTC)", false, true),
                        col("bid", "decimal", "Best bid", true, false),
                        col("ask", "decimal", "Best ask", true, false),
                        col("implied_vol", "decimal", "Implied volatility, if published", true, false),
                        col("underlying", "string", "Underlying commodity code", false, false),
                    ],
                },
                Table {
                    id: "power-markets".to_string(),
                    name: "Power Markets".to_string(),
                    records: 34567,
                    columns: 10,
                    last_updated: "2024-01-15 09:20:00".to_string(),
                    status: HealthStatus::Success,
                    description: "Hourly day-ahead and real-time power prices for the \
                                  major North American and European hubs."
                        .to_string(),
                    schema: "bloomberg".to_string(),
                    date_range: range("2019-01-01", "2024-01-15"),
                    tags: strs(&["power", "hourly", "day-ahead"]),
                    owners: strs(&["j.marchetti@trading.example", "power-desk@trading.example"]),
                    frequent_users: 33,
                    table_columns: vec![
                        col("delivery_hour", "timestamp", "Delivery hour (local market time)", false, true),
                        col("hub", "string", "Pricing hub identifier", false, true),
                        col("da_price", "decimal", "Day-ahead clearing price", false, false),
                        col("rt_price", "decimal", "Real-time price, when settled", true, false),
                        col("currency", "string", "Settlement currency", false, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 87.3,
                completeness: 92.1,
                consistency: 95.8,
                timeliness: 78.2,
                validity: 89.4,
                uniqueness: 96.7,
            },
        },
        DataSource {
            id: "sp-platts".to_string(),
            name: "S&P Platts".to_string(),
            status: HealthStatus::Success,
            description: "Petroleum and petrochemical price assessments".to_string(),
            tables: vec![
                Table {
                    id: "crude-assessments".to_string(),
                    name: "Crude Assessments".to_string(),
                    records: 12345,
                    columns: 14,
                    last_updated: "2024-01-15 09:32:15".to_string(),
                    status: HealthStatus::Success,
                    description: "Daily Platts price assessments for physical crude \
                                  grades, including differentials to benchmarks."
                        .to_string(),
                    schema: "platts".to_string(),
                    date_range: range("2016-01-04", "2024-01-15"),
                    tags: strs(&["crude", "assessment", "physical"]),
                    owners: strs(&["l.okafor@trading.example"]),
                    frequent_users: 21,
                    table_columns: vec![
                        col("assessment_date", "date", "Assessment publication date", false, true),
                        col("grade_code", "string", "Platts crude grade code", false, true),
                        col("assessed_price", "decimal", "Assessed outright price", false, false),
                        col("diff_to_benchmark", "decimal", "Differential to the linked benchmark", true, false),
                        col("benchmark", "string", "Benchmark the differential refers to", true, false),
                    ],
                },
                Table {
                    id: "refined-products".to_string(),
                    name: "Refined Products".to_string(),
                    records: 56789,
                    columns: 16,
                    last_updated: "2024-01-15 09:31:00".to_string(),
                    status: HealthStatus::Success,
                    description: "Refined product assessments (gasoline, diesel, jet, \
                                  fuel oil) across the main trading regions."
                        .to_string(),
                    schema: "platts".to_string(),
                    date_range: range("2016-01-04", "2024-01-15"),
                    tags: strs(&["products", "assessment", "regional"]),
                    owners: strs(&["l.okafor@trading.example", "products-desk@trading.example"]),
                    frequent_users: 25,
                    table_columns: vec![
                        col("assessment_date", "date", "Assessment publication date", false, true),
                        col("product_code", "string", "Product and specification code", false, true),
                        col("region", "string", "Trading region (USGC, NWE, SG)", false, true),
                        col("assessed_price", "decimal", "Assessed price in regional units", false, false),
                        col("unit", "string", "Price unit of measure", false, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 94.8,
                completeness: 96.3,
                consistency: 98.9,
                timeliness: 91.7,
                validity: 93.2,
                uniqueness: 99.1,
            },
        },
        DataSource {
            id: "ice-futures".to_string(),
            name: "ICE Futures".to_string(),
            status: HealthStatus::Error,
            description: "Intercontinental Exchange futures and options data".to_string(),
            tables: vec![
                Table {
                    id: "brent-futures".to_string(),
                    name: "Brent Futures".to_string(),
                    records: 78901,
                    columns: 20,
                    last_updated: "2024-01-15 08:45:30".to_string(),
                    status: HealthStatus::Error,
                    description: "Tick-aggregated Brent futures trades and end-of-day \
                                  settlements from ICE."
                        .to_string(),
                    schema: "ice".to_string(),
                    date_range: range("2017-01-03", "2024-01-15"),
                    tags: strs(&["brent", "futures", "settlement"]),
                    owners: strs(&["s.nakamura@trading.example"]),
                    frequent_users: 51,
                    table_columns: vec![
                        col("trade_date", "date", "Trading date", false, true),
                        col("contract_month", "date", "Contract delivery month", false, true),
                        col("settle_price", "decimal", "Exchange settlement price", false, false),
                        col("high", "decimal", "Session high", true, false),
                        col("low", "decimal", "Session low", true, false),
                        col("volume", "integer", "Contracts traded", false, false),
                    ],
                },
                Table {
                    id: "gas-options".to_string(),
                    name: "Gas Options".to_string(),
                    records: 23456,
                    columns: 12,
                    last_updated: "2024-01-15 08:30:00".to_string(),
                    status: HealthStatus::Error,
                    description: "TTF and NBP gas option settlements with strike-level \
                                  open interest."
                        .to_string(),
                    schema: "ice".to_string(),
                    date_range: range("2019-04-01", "2024-01-15"),
                    tags: strs(&["natural-gas", "options", "ttf", "nbp"]),
                    owners: strs(&["s.nakamura@trading.example", "data-ops@trading.example"]),
                    frequent_users: 12,
                    table_columns: vec![
                        col("trade_date", "date", "Trading date", false, true),
                        col("option_code", "string", "Option series identifier", false, true),
                        col("strike", "decimal", "Strike price", false, true),
                        col("call_put", "string", "C for call, P for put", false, false),
                        col("settle_price", "decimal", "Option settlement price", false, false),
                        col("open_interest", "integer", "Open interest at the strike", true, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 76.4,
                completeness: 68.9,
                consistency: 82.1,
                timeliness: 45.3,
                validity: 71.8,
                uniqueness: 88.9,
            },
        },
        DataSource {
            id: "nymex-trading".to_string(),
            name: "NYMEX Trading".to_string(),
            status: HealthStatus::Success,
            description: "New York Mercantile Exchange trading data".to_string(),
            tables: vec![
                Table {
                    id: "wti-crude".to_string(),
                    name: "WTI Crude".to_string(),
                    records: 89012,
                    columns: 22,
                    last_updated: "2024-01-15 09:33:45".to_string(),
                    status: HealthStatus::Success,
                    description: "WTI crude futures trades, settlements, and daily \
                                  volume/open-interest statistics."
                        .to_string(),
                    schema: "nymex".to_string(),
                    date_range: range("2014-01-02", "2024-01-15"),
                    tags: strs(&["wti", "futures", "settlement", "volume"]),
                    owners: strs(&["r.deluca@trading.example"]),
                    frequent_users: 64,
                    table_columns: vec![
                        col("trade_date", "date", "Trading date", false, true),
                        col("contract_month", "date", "Contract delivery month", false, true),
                        col("open_price", "decimal", "Opening price", false, false),
                        col("settle_price", "decimal", "Settlement price", false, false),
                        col("volume", "integer", "Contracts traded", false, false),
                        col("open_interest", "integer", "End-of-day open interest", false, false),
                    ],
                },
                Table {
                    id: "heating-oil".to_string(),
                    name: "Heating Oil".to_string(),
                    records: 34567,
                    columns: 11,
                    last_updated: "2024-01-15 09:32:30".to_string(),
                    status: HealthStatus::Success,
                    description: "NY Harbor ULSD (heating oil) futures settlements and \
                                  session statistics."
                        .to_string(),
                    schema: "nymex".to_string(),
                    date_range: range("2014-01-02", "2024-01-15"),
                    tags: strs(&["ulsd", "futures", "settlement"]),
                    owners: strs(&["r.deluca@trading.example", "products-desk@trading.example"]),
                    frequent_users: 15,
                    table_columns: vec![
                        col("trade_date", "date", "Trading date", false, true),
                        col("contract_month", "date", "Contract delivery month", false, true),
                        col("settle_price", "decimal", "Settlement price in USD/gal", false, false),
                        col("volume", "integer", "Contracts traded", true, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 96.1,
                completeness: 94.7,
                consistency: 99.2,
                timeliness: 93.5,
                validity: 95.8,
                uniqueness: 97.9,
            },
        },
        DataSource {
            id: "argus-media".to_string(),
            name: "Argus Media".to_string(),
            status: HealthStatus::Warning,
            description: "Independent energy and commodity price reporting".to_string(),
            tables: vec![Table {
                id: "petroleum-prices".to_string(),
                name: "Petroleum Prices".to_string(),
                records: 45678,
                columns: 13,
                last_updated: "2024-01-15 09:15:20".to_string(),
                status: HealthStatus::Warning,
                description: "Argus daily petroleum price assessments with bid/offer \
                              ranges where reported."
                    .to_string(),
                schema: "argus".to_string(),
                date_range: range("2018-01-02", "2024-01-15"),
                tags: strs(&["petroleum", "assessment", "daily"]),
                owners: strs(&["p.lindqvist@trading.example"]),
                frequent_users: 11,
                table_columns: vec![
                    col("assessment_date", "date", "Assessment publication date", false, true),
                    col("series_code", "string", "Argus price series code", false, true),
                    col("low", "decimal", "Low end of the assessed range", false, false),
                    col("high", "decimal", "High end of the assessed range", false, false),
                    col("midpoint", "decimal", "Assessed midpoint", false, false),
                ],
            }],
            metrics: QualityMetrics {
                accuracy: 85.7,
                completeness: 91.2,
                consistency: 87.6,
                timeliness: 82.4,
                validity: 88.9,
                uniqueness: 94.3,
            },
        },
        DataSource {
            id: "eia-reports".to_string(),
            name: "EIA Reports".to_string(),
            status: HealthStatus::Success,
            description: "U.S. Energy Information Administration statistical data".to_string(),
            tables: vec![Table {
                id: "weekly-petroleum".to_string(),
                name: "Weekly Petroleum Status".to_string(),
                records: 2345,
                columns: 25,
                last_updated: "2024-01-15 09:00:00".to_string(),
                status: HealthStatus::Success,
                description: "Weekly U.S. petroleum balance: stocks, production, \
                              imports, and refinery utilization."
                    .to_string(),
                schema: "eia".to_string(),
                date_range: range("2010-01-08", "2024-01-12"),
                tags: strs(&["stocks", "weekly", "us", "official"]),
                owners: strs(&["fundamentals@trading.example"]),
                frequent_users: 38,
                table_columns: vec![
                    col("report_week", "date", "Week-ending date of the report", false, true),
                    col("series_id", "string", "EIA series identifier", false, true),
                    col("value", "decimal", "Reported value in series units", false, false),
                    col("unit", "string", "Unit of measure", false, false),
                    col("revised", "boolean", "True when the value is a revision", false, false),
                ],
            }],
            metrics: QualityMetrics {
                accuracy: 99.1,
                completeness: 97.8,
                consistency: 99.5,
                timeliness: 95.2,
                validity: 98.7,
                uniqueness: 99.8,
            },
        },
        DataSource {
            id: "iea-statistics".to_string(),
            name: "IEA Statistics".to_string(),
            status: HealthStatus::Success,
            description: "International Energy Agency global energy statistics".to_string(),
            tables: vec![Table {
                id: "monthly-oil".to_string(),
                name: "Monthly Oil Market Report".to_string(),
                records: 1234,
                columns: 30,
                last_updated: "2024-01-15 08:00:00".to_string(),
                status: HealthStatus::Success,
                description: "Country-level supply, demand, and stock figures from the \
                              IEA monthly oil market report."
                    .to_string(),
                schema: "iea".to_string(),
                date_range: range("2012-01-01", "2023-12-01"),
                tags: strs(&["supply-demand", "monthly", "global", "official"]),
                owners: strs(&["fundamentals@trading.example", "a.sorensen@trading.example"]),
                frequent_users: 19,
                table_columns: vec![
                    col("report_month", "date", "Reference month", false, true),
                    col("country", "string", "ISO country code", false, true),
                    col("measure", "string", "Measure (supply, demand, stocks)", false, true),
                    col("value_kbd", "decimal", "Value in thousand barrels per day", false, false),
                ],
            }],
            metrics: QualityMetrics {
                accuracy: 97.5,
                completeness: 95.9,
                consistency: 98.1,
                timeliness: 88.7,
                validity: 96.4,
                uniqueness: 99.2,
            },
        },
        DataSource {
            id: "opec-data".to_string(),
            name: "OPEC Data".to_string(),
            status: HealthStatus::Warning,
            description: "Organization of Petroleum Exporting Countries production data".to_string(),
            tables: vec![
                Table {
                    id: "production-quotas".to_string(),
                    name: "Production Quotas".to_string(),
                    records: 567,
                    columns: 8,
                    last_updated: "2024-01-15 07:30:00".to_string(),
                    status: HealthStatus::Warning,
                    description: "Agreed production quotas per member country and \
                                  effective period."
                        .to_string(),
                    schema: "opec".to_string(),
                    date_range: range("2016-12-01", "2024-01-01"),
                    tags: strs(&["quotas", "production", "policy"]),
                    owners: strs(&["fundamentals@trading.example"]),
                    frequent_users: 7,
                    table_columns: vec![
                        col("effective_from", "date", "Start of the quota period", false, true),
                        col("country", "string", "Member country", false, true),
                        col("quota_kbd", "decimal", "Quota in thousand barrels per day", false, false),
                        col("adjusted", "boolean", "True when revised mid-period", false, false),
                    ],
                },
                Table {
                    id: "monthly-bulletin".to_string(),
                    name: "Monthly Oil Market Bulletin".to_string(),
                    records: 890,
                    columns: 35,
                    last_updated: "2024-01-15 07:00:00".to_string(),
                    status: HealthStatus::Success,
                    description: "Secondary-source production estimates and market \
                                  commentary figures from the monthly bulletin."
                        .to_string(),
                    schema: "opec".to_string(),
                    date_range: range("2015-01-01", "2023-12-01"),
                    tags: strs(&["production", "monthly", "secondary-sources"]),
                    owners: strs(&["fundamentals@trading.example"]),
                    frequent_users: 8,
                    table_columns: vec![
                        col("report_month", "date", "Reference month", false, true),
                        col("country", "string", "Member country", false, true),
                        col("production_kbd", "decimal", "Estimated production, kb/d", false, false),
                        col("source_type", "string", "Direct communication or secondary", false, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 89.3,
                completeness: 85.6,
                consistency: 92.4,
                timeliness: 76.8,
                validity: 87.2,
                uniqueness: 95.7,
            },
        },
        DataSource {
            id: "internal-trading".to_string(),
            name: "Internal Trading".to_string(),
            status: HealthStatus::Success,
            description: "Internal proprietary trading and risk management data".to_string(),
            tables: vec![
                Table {
                    id: "trade-positions".to_string(),
                    name: "Trade Positions".to_string(),
                    records: 123456,
                    columns: 40,
                    last_updated: "2024-01-15 09:35:00".to_string(),
                    status: HealthStatus::Success,
                    description: "Current and historical trade positions across all \
                                  desks, marked to the latest available prices."
                        .to_string(),
                    schema: "trading".to_string(),
                    date_range: range("2013-01-02", "2024-01-15"),
                    tags: strs(&["positions", "internal", "risk", "pnl"]),
                    owners: strs(&["risk-team@trading.example", "r.deluca@trading.example"]),
                    frequent_users: 156,
                    table_columns: vec![
                        col("position_id", "string", "Internal position identifier", false, true),
                        col("as_of_date", "date", "Position snapshot date", false, true),
                        col("desk", "string", "Owning trading desk", false, false),
                        col("instrument_id", "string", "Instrument reference", false, false),
                        col("quantity", "decimal", "Signed position quantity", false, false),
                        col("mark_price", "decimal", "Mark used for valuation", true, false),
                        col("pnl_usd", "decimal", "Mark-to-market P&L in USD", true, false),
                    ],
                },
                Table {
                    id: "risk-metrics".to_string(),
                    name: "Risk Metrics".to_string(),
                    records: 78901,
                    columns: 15,
                    last_updated: "2024-01-15 09:34:30".to_string(),
                    status: HealthStatus::Success,
                    description: "Daily desk-level risk figures: VaR, greeks, and limit \
                                  utilization."
                        .to_string(),
                    schema: "trading".to_string(),
                    date_range: range("2013-01-02", "2024-01-15"),
                    tags: strs(&["risk", "var", "limits", "internal"]),
                    owners: strs(&["risk-team@trading.example"]),
                    frequent_users: 44,
                    table_columns: vec![
                        col("as_of_date", "date", "Risk snapshot date", false, true),
                        col("desk", "string", "Trading desk", false, true),
                        col("var_95", "decimal", "One-day 95% value at risk", false, false),
                        col("delta", "decimal", "Aggregate delta exposure", true, false),
                        col("limit_used_pct", "decimal", "Share of risk limit in use", false, false),
                    ],
                },
            ],
            metrics: QualityMetrics {
                accuracy: 98.7,
                completeness: 99.1,
                consistency: 99.8,
                timeliness: 97.3,
                validity: 99.2,
                uniqueness: 99.9,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_resolves_to_itself() {
        for source in data_sources() {
            let found = find_data_source(&source.id).expect("known id must resolve");
            assert_eq!(found.id, source.id);
        }
    }

    #[test]
    fn unknown_ids_return_none() {
        assert!(find_data_source("no-such-source").is_none());
        assert!(find_data_source("").is_none());
        assert!(find_table("no-such-source", "oil-prices").is_none());
        assert!(find_table("reuters-commodities", "no-such-table").is_none());
    }

    #[test]
    fn ids_are_unique_across_the_dataset() {
        let sources = data_sources();
        for (i, a) in sources.iter().enumerate() {
            for b in &sources[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        let table_ids: Vec<_> = sources
            .iter()
            .flat_map(|s| s.tables.iter().map(|t| t.id.as_str()))
            .collect();
        let mut deduped = table_ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), table_ids.len());
    }

    #[test]
    fn composite_table_lookup_returns_owning_source() {
        let (source, table) = find_table("opec-data", "production-quotas").unwrap();
        assert_eq!(source.id, "opec-data");
        assert_eq!(table.name, "Production Quotas");

        // A valid table id under the wrong source must not resolve.
        assert!(find_table("reuters-commodities", "production-quotas").is_none());
    }

    #[test]
    fn degraded_count_matches_statuses() {
        let expected = data_sources()
            .iter()
            .filter(|s| s.status.is_degraded())
            .count();
        assert_eq!(degraded_source_count(), expected);
        assert_eq!(degraded_source_count(), 4);
    }

    #[test]
    fn dataset_has_ten_sources_in_catalog_order() {
        let ids: Vec<_> = data_sources().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "reuters-commodities",
                "bloomberg-energy",
                "sp-platts",
                "ice-futures",
                "nymex-trading",
                "argus-media",
                "eia-reports",
                "iea-statistics",
                "opec-data",
                "internal-trading",
            ]
        );
    }

    #[test]
    fn metric_scores_are_percentages() {
        for source in data_sources() {
            for (name, value) in source.metrics.entries() {
                assert!(
                    (0.0..=100.0).contains(&value),
                    "{}/{} out of range: {}",
                    source.id,
                    name,
                    value
                );
            }
        }
    }

    #[test]
    fn every_table_has_metadata_and_columns() {
        for source in data_sources() {
            for table in &source.tables {
                assert!(!table.description.is_empty(), "{}", table.id);
                assert!(!table.schema.is_empty(), "{}", table.id);
                assert!(!table.tags.is_empty(), "{}", table.id);
                assert!(!table.owners.is_empty(), "{}", table.id);
                assert!(!table.table_columns.is_empty(), "{}", table.id);
                assert!(
                    table.table_columns.iter().any(|c| c.primary_key),
                    "{} has no primary key column",
                    table.id
                );
            }
        }
    }

    #[test]
    fn avatar_overflow_fixture_is_present() {
        let (_, table) = find_table("internal-trading", "trade-positions").unwrap();
        assert_eq!(table.frequent_users, 156);
    }
}
