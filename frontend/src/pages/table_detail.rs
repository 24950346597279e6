//! Detail page for one table, addressed by
//! `/data-source/:data_source_id/table/:table_id`.
//!
//! Both identifiers come from the path; the pair is resolved through the
//! catalog's composite lookup, so a valid table id under the wrong source
//! still renders the not-found fallback.

use common::catalog;
use common::model::{DataSource, Table, TableColumn};
use gloo_console::warn;
use num_format::{Locale, ToFormattedString};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::not_found::NotFoundPage;
use crate::pages::set_document_title;
use crate::router::Route;

/// Avatars rendered before the stack collapses into a "+N more" note.
const MAX_AVATARS: u32 = 5;

#[derive(Properties, PartialEq)]
pub struct TableDetailProps {
    pub data_source_id: String,
    pub table_id: String,
}

pub struct TableDetailPage;

impl Component for TableDetailPage {
    type Message = ();
    type Properties = TableDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TableDetailPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        match catalog::find_table(&props.data_source_id, &props.table_id) {
            Some((source, table)) => render_table(source, table),
            None => html! { <NotFoundPage title="Table Not Found" /> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let props = ctx.props();
            match catalog::find_table(&props.data_source_id, &props.table_id) {
                Some((_, table)) => {
                    set_document_title(&format!("{}.{} | DQM", table.schema, table.name));
                }
                None => {
                    warn!(
                        "unknown table:",
                        props.data_source_id.clone(),
                        props.table_id.clone()
                    );
                    set_document_title("DQM | Not Found");
                }
            }
        }
    }
}

fn render_table(source: &DataSource, table: &Table) -> Html {
    html! {
        <div class="page">
            { build_header(source, table) }
            <div class="page-body detail-layout">
                <div class="meta-column">
                    { build_info_card(table) }
                    { build_tags_card(table) }
                    { build_users_card(table) }
                    { build_owners_card(table) }
                </div>
                <div class="schema-column">
                    { build_schema_card(table) }
                </div>
            </div>
        </div>
    }
}

fn build_header(source: &DataSource, table: &Table) -> Html {
    html! {
        <header class="page-header">
            <div class="header-left">
                <Link<Route>
                    to={Route::DataSourceDetail { id: source.id.clone() }}
                    classes="btn btn-ghost"
                >
                    <i class="material-icons">{"arrow_back"}</i>
                    { &source.name }
                </Link<Route>>
                <i class="material-icons logo-icon logo-icon-table">{"storage"}</i>
                <h1>{ format!("{}.{}", table.schema, table.name) }</h1>
            </div>
            <div class="header-actions">
                <button class="btn btn-secondary">
                    <i class="material-icons">{"visibility"}</i>
                    {"Preview Data"}
                </button>
                <button class="btn btn-primary">
                    <i class="material-icons">{"bar_chart"}</i>
                    {"Quality Report"}
                </button>
            </div>
        </header>
    }
}

fn build_info_card(table: &Table) -> Html {
    let badge = table.status.quality_badge();
    html! {
        <div class="card">
            <div class="card-header overview-header">
                <span class="card-title">
                    <i class="material-icons">{"storage"}</i>
                    {"Table Details"}
                </span>
                <span class={classes!("badge", badge.class)}>{ badge.label }</span>
            </div>
            <div class="card-body meta-sections">
                <div class="meta-section">
                    <h4>
                        <i class="material-icons">{"description"}</i>
                        {"Description"}
                    </h4>
                    <p class="muted">{ &table.description }</p>
                </div>
                <div class="meta-section">
                    <h4>
                        <i class="material-icons">{"bar_chart"}</i>
                        {"Statistics"}
                    </h4>
                    <div class="stat-grid">
                        <div>
                            <span class="muted">{"Records:"}</span>
                            <div class="stat-value">{ table.records.to_formatted_string(&Locale::en) }</div>
                        </div>
                        <div>
                            <span class="muted">{"Columns:"}</span>
                            <div class="stat-value">{ table.columns }</div>
                        </div>
                    </div>
                </div>
                <div class="meta-section">
                    <h4>
                        <i class="material-icons">{"calendar_today"}</i>
                        {"Date Range"}
                    </h4>
                    <div class="range-rows">
                        <div><span class="muted">{"From:"}</span>{ " " }{ &table.date_range.from }</div>
                        <div><span class="muted">{"To:"}</span>{ " " }{ &table.date_range.to }</div>
                    </div>
                </div>
                <div class="meta-section">
                    <h4>
                        <i class="material-icons">{"schedule"}</i>
                        {"Last Updated"}
                    </h4>
                    <p>{ &table.last_updated }</p>
                </div>
            </div>
        </div>
    }
}

fn build_tags_card(table: &Table) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"sell"}</i>
                    {"Tags"}
                </span>
            </div>
            <div class="card-body tag-list">
                {
                    table.tags.iter().map(|tag| html! {
                        <span key={tag.clone()} class="badge badge-chip">{ tag }</span>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn build_users_card(table: &Table) -> Html {
    let visible = visible_avatar_count(table.frequent_users);
    let overflow = overflow_count(table.frequent_users);

    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"group"}</i>
                    {"Frequent Users"}
                </span>
            </div>
            <div class="card-body">
                <div class="avatar-stack">
                    {
                        (0..visible).map(|i| html! {
                            <span class="avatar avatar-user">{ avatar_initial(i) }</span>
                        }).collect::<Html>()
                    }
                    {
                        if overflow > 0 {
                            html! { <span class="avatar-overflow">{ format!("+{overflow} more") }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <p class="muted small">
                    { format!("{} users access this table regularly", table.frequent_users) }
                </p>
            </div>
        </div>
    }
}

fn build_owners_card(table: &Table) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"verified_user"}</i>
                    {"Owners"}
                </span>
            </div>
            <div class="card-body owner-list">
                {
                    table.owners.iter().map(|owner| html! {
                        <div key={owner.clone()} class="owner-row">
                            <span class="avatar avatar-owner">{ owner_initial(owner) }</span>
                            <span>{ owner }</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn build_schema_card(table: &Table) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"key"}</i>
                    { format!("Columns ({})", table.table_columns.len()) }
                </span>
            </div>
            <div class="card-body">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Column Name"}</th>
                            <th>{"Type"}</th>
                            <th>{"Description"}</th>
                            <th class="centered">{"Nullable"}</th>
                            <th class="centered">{"Key"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { table.table_columns.iter().map(column_row).collect::<Html>() }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn column_row(column: &TableColumn) -> Html {
    html! {
        <tr key={column.name.clone()}>
            <td><span class="cell-primary column-name">{ &column.name }</span></td>
            <td>
                <span class={classes!("badge", "badge-type", type_badge_class(&column.data_type))}>
                    { &column.data_type }
                </span>
            </td>
            <td><span class="muted">{ &column.description }</span></td>
            <td class="centered">
                {
                    if column.nullable {
                        html! { <span class="badge badge-outline">{"NULL"}</span> }
                    } else {
                        html! { <span class="badge badge-not-null">{"NOT NULL"}</span> }
                    }
                }
            </td>
            <td class="centered">
                {
                    if column.primary_key {
                        html! { <i class="material-icons key-icon">{"key"}</i> }
                    } else {
                        html! {}
                    }
                }
            </td>
        </tr>
    }
}

fn visible_avatar_count(frequent_users: u32) -> u32 {
    frequent_users.min(MAX_AVATARS)
}

fn overflow_count(frequent_users: u32) -> u32 {
    frequent_users.saturating_sub(MAX_AVATARS)
}

fn avatar_initial(index: u32) -> char {
    (b'A' + (index % 26) as u8) as char
}

fn owner_initial(owner: &str) -> char {
    owner
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

fn type_badge_class(data_type: &str) -> &'static str {
    match data_type {
        "string" => "type-string",
        "integer" => "type-integer",
        "decimal" => "type-decimal",
        "timestamp" => "type-timestamp",
        "date" => "type-date",
        "boolean" => "type-boolean",
        _ => "type-default",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_stack_caps_at_five_with_overflow_note() {
        assert_eq!(visible_avatar_count(156), 5);
        assert_eq!(overflow_count(156), 151);
    }

    #[test]
    fn small_user_counts_show_no_overflow() {
        assert_eq!(visible_avatar_count(3), 3);
        assert_eq!(overflow_count(3), 0);
        assert_eq!(visible_avatar_count(5), 5);
        assert_eq!(overflow_count(5), 0);
    }

    #[test]
    fn avatar_initials_run_from_a() {
        assert_eq!(avatar_initial(0), 'A');
        assert_eq!(avatar_initial(4), 'E');
    }

    #[test]
    fn owner_initial_is_uppercased_first_char() {
        assert_eq!(owner_initial("m.keller@trading.example"), 'M');
        assert_eq!(owner_initial(""), '?');
    }

    #[test]
    fn known_types_get_dedicated_classes_and_unknown_falls_back() {
        for data_type in ["string", "integer", "decimal", "timestamp", "date", "boolean"] {
            assert_ne!(type_badge_class(data_type), "type-default");
        }
        assert_eq!(type_badge_class("geometry"), "type-default");
    }
}
