//! Detail page for one data source, addressed by `/data-source/:id`.
//!
//! The displayed entity is derived entirely from the path parameter via
//! the catalog lookup; the page holds no selection state of its own. An
//! unknown id renders the shared not-found fallback.

use common::catalog;
use common::model::{DataSource, Table};
use gloo_console::warn;
use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::metric_grid::metric_grid;
use crate::pages::not_found::NotFoundPage;
use crate::pages::set_document_title;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct DataSourceDetailProps {
    pub id: String,
}

pub enum Msg {
    OpenTable(String),
}

pub struct DataSourceDetailPage;

impl Component for DataSourceDetailPage {
    type Message = Msg;
    type Properties = DataSourceDetailProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DataSourceDetailPage
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenTable(table_id) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::TableDetail {
                        data_source_id: ctx.props().id.clone(),
                        table_id,
                    });
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match catalog::find_data_source(&ctx.props().id) {
            Some(source) => render_source(source, ctx.link()),
            None => html! { <NotFoundPage title="Data Source Not Found" /> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            match catalog::find_data_source(&ctx.props().id) {
                Some(source) => set_document_title(&format!("DQM | {}", source.name)),
                None => {
                    warn!("unknown data source id:", ctx.props().id.clone());
                    set_document_title("DQM | Not Found");
                }
            }
        }
    }
}

fn render_source(source: &'static DataSource, link: &Scope<DataSourceDetailPage>) -> Html {
    html! {
        <div class="page">
            { build_header(source) }
            <div class="page-body detail-stack">
                { build_overview(source) }
                <div class="card">
                    <div class="card-header">
                        <span class="card-title">{"Data Quality Metrics"}</span>
                    </div>
                    <div class="card-body">
                        { metric_grid(&source.metrics) }
                    </div>
                </div>
                { build_tables_card(source, link) }
                { build_trend_card() }
            </div>
        </div>
    }
}

fn build_header(source: &DataSource) -> Html {
    html! {
        <header class="page-header">
            <div class="header-left">
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost">
                    <i class="material-icons">{"arrow_back"}</i>
                    {"Dashboard"}
                </Link<Route>>
                <i class="material-icons logo-icon">{"bolt"}</i>
                <h1>{ format!("DQM | {}", source.name) }</h1>
            </div>
            <div class="header-actions">
                <button class="btn btn-secondary">
                    <i class="material-icons">{"refresh"}</i>
                    {"Refresh Data"}
                </button>
                <button class="btn btn-primary">
                    <i class="material-icons">{"bar_chart"}</i>
                    {"View Reports"}
                </button>
            </div>
        </header>
    }
}

fn build_overview(source: &DataSource) -> Html {
    let badge = source.status.source_badge();
    html! {
        <div class="card">
            <div class="card-header overview-header">
                <div>
                    <span class="card-title">
                        <i class="material-icons">{"storage"}</i>
                        { &source.name }
                    </span>
                    <p class="card-subtitle">{ &source.description }</p>
                </div>
                <span class={classes!("badge", badge.class)}>{ badge.label }</span>
            </div>
        </div>
    }
}

fn build_tables_card(source: &'static DataSource, link: &Scope<DataSourceDetailPage>) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"storage"}</i>
                    { format!("Tables ({})", source.tables.len()) }
                </span>
            </div>
            <div class="card-body">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Table Name"}</th>
                            <th class="centered">{"Records"}</th>
                            <th class="centered">{"Columns"}</th>
                            <th class="centered">{"Last Updated"}</th>
                            <th class="centered">{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { source.tables.iter().map(|table| table_row(table, link)).collect::<Html>() }
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn table_row(table: &Table, link: &Scope<DataSourceDetailPage>) -> Html {
    let table_id = table.id.clone();
    let onclick = link.callback(move |_| Msg::OpenTable(table_id.clone()));

    html! {
        <tr key={table.id.clone()} class="clickable-row" {onclick}>
            <td>
                <div class="cell-primary">{ &table.name }</div>
                <div class="cell-secondary">{ format!("ID: {}", table.id) }</div>
            </td>
            <td class="centered">{ table.records.to_formatted_string(&Locale::en) }</td>
            <td class="centered">{ table.columns }</td>
            <td class="centered">
                <span class="cell-with-icon">
                    <i class="material-icons">{"calendar_today"}</i>
                    { &table.last_updated }
                </span>
            </td>
            <td class="centered">
                <div class={classes!("status-indicator", "centered-indicator", table.status.indicator_class())} />
            </td>
        </tr>
    }
}

fn build_trend_card() -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">{"Data Quality Trend (Last 30 Days)"}</span>
            </div>
            <div class="card-body">
                <div class="placeholder-panel">
                    <p>{"Historical trend chart would be rendered here"}</p>
                </div>
            </div>
        </div>
    }
}
