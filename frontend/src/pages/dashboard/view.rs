//! View rendering for the dashboard page.
//!
//! Layout mirrors the control flow: header with the time-range select,
//! alert banner fed by the catalog's degraded-source count, a sidebar of
//! selectable sources, and a main panel showing the selected source's
//! metric snapshot plus the static issue/rule cards.

use common::catalog;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DashboardPage, TimeRange};
use crate::components::alert_banner::AlertBanner;
use crate::components::data_source_item::DataSourceItem;
use crate::components::metric_grid::metric_grid;
use crate::pages::not_found::NotFoundPage;

pub fn view(component: &DashboardPage, ctx: &Context<DashboardPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="page">
            { build_header(component, link) }
            <div class="page-body">
                <AlertBanner
                    count={catalog::degraded_source_count()}
                    message="data sources showing completeness issues - Requires immediate attention"
                />
                <div class="dashboard-layout">
                    { build_sidebar(component, link) }
                    { build_main_panel(component) }
                </div>
            </div>
        </div>
    }
}

fn build_header(component: &DashboardPage, link: &Scope<DashboardPage>) -> Html {
    let on_range_change = link.batch_callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        TimeRange::from_value(&value).map(Msg::SetTimeRange)
    });

    html! {
        <header class="page-header">
            <div class="header-left">
                <i class="material-icons logo-icon">{"bolt"}</i>
                <h1>{"DQM | Oil & Gas Trading"}</h1>
            </div>
            <div class="header-actions">
                <select class="range-select" onchange={on_range_change}>
                    {
                        TimeRange::ALL
                            .into_iter()
                            .map(|range| html! {
                                <option
                                    value={range.value()}
                                    selected={range == component.time_range}
                                >
                                    { range.label() }
                                </option>
                            })
                            .collect::<Html>()
                    }
                </select>
                <button class="btn btn-secondary">
                    <i class="material-icons">{"download"}</i>
                    {"Export Report"}
                </button>
                <button class="btn btn-primary">
                    <i class="material-icons">{"settings"}</i>
                    {"Configure Rules"}
                </button>
            </div>
        </header>
    }
}

fn build_sidebar(component: &DashboardPage, link: &Scope<DashboardPage>) -> Html {
    let sources = catalog::data_sources();

    html! {
        <aside class="sidebar">
            <div class="card">
                <div class="card-header">
                    <span class="card-title">
                        <i class="material-icons">{"monitor_heart"}</i>
                        { format!("Data Sources ({})", sources.len()) }
                    </span>
                </div>
                <div class="card-body source-list">
                    {
                        sources
                            .iter()
                            .map(|source| html! {
                                <DataSourceItem
                                    key={source.id.clone()}
                                    id={source.id.clone()}
                                    name={source.name.clone()}
                                    status={source.status}
                                    selected={source.id == component.selected_source_id}
                                    on_select={link.callback(Msg::SelectSource)}
                                />
                            })
                            .collect::<Html>()
                    }
                </div>
            </div>
        </aside>
    }
}

fn build_main_panel(component: &DashboardPage) -> Html {
    let Some(source) = component.current_source() else {
        return html! { <NotFoundPage title="Data Source Not Found" /> };
    };

    html! {
        <div class="main-panel">
            <div class="card">
                <div class="card-header">
                    <span class="card-title">
                        { format!("{} - Data Quality Overview", source.name) }
                    </span>
                </div>
                <div class="card-body">
                    { metric_grid(&source.metrics) }
                </div>
            </div>
            { build_visualization(component) }
            <div class="two-column">
                { build_active_issues() }
                { build_business_rules() }
            </div>
        </div>
    }
}

fn build_visualization(component: &DashboardPage) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"trending_up"}</i>
                    {"DQ Metrics Visualization"}
                </span>
            </div>
            <div class="card-body">
                <div class="placeholder-panel">
                    <p>
                        { format!(
                            "Interactive charts for the {} window would be rendered here",
                            component.time_range.label().to_lowercase(),
                        ) }
                    </p>
                </div>
            </div>
        </div>
    }
}

fn build_active_issues() -> Html {
    let issues = [
        ("status-error", "Missing price data for WTI crude"),
        ("status-warning", "Timestamp format inconsistency"),
        ("status-warning", "Duplicate trading records"),
    ];

    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title card-title-alert">
                    <i class="material-icons">{"monitor_heart"}</i>
                    { format!("Active Issues ({})", issues.len()) }
                </span>
            </div>
            <div class="card-body issue-list">
                {
                    issues
                        .into_iter()
                        .map(|(class, text)| html! {
                            <div class="issue-row">
                                <div class={classes!("status-indicator", class)} />
                                <span>{ text }</span>
                            </div>
                        })
                        .collect::<Html>()
                }
            </div>
        </div>
    }
}

fn build_business_rules() -> Html {
    let rules = [
        ("Price range validation", "status-success"),
        ("Trading hours check", "status-success"),
        ("Currency format validation", "status-warning"),
    ];

    html! {
        <div class="card">
            <div class="card-header">
                <span class="card-title">
                    <i class="material-icons">{"shield"}</i>
                    {"Business Rules Status"}
                </span>
            </div>
            <div class="card-body issue-list">
                {
                    rules
                        .into_iter()
                        .map(|(text, class)| html! {
                            <div class="rule-row">
                                <span>{ text }</span>
                                <div class={classes!("status-indicator", class)} />
                            </div>
                        })
                        .collect::<Html>()
                }
            </div>
        </div>
    }
}
