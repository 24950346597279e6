//! Route table for the dashboard.
//!
//! Detail routes carry their entity identifiers as path parameters; the
//! pages resolve them against the catalog and render a not-found fallback
//! when an identifier does not exist. The table route is addressable
//! directly, with both the source and the table id in the path.

use yew::{html, Html};
use yew_router::prelude::*;

use crate::pages::dashboard::DashboardPage;
use crate::pages::data_source_detail::DataSourceDetailPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::table_detail::TableDetailPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/data-source/:id")]
    DataSourceDetail { id: String },
    #[at("/data-source/:data_source_id/table/:table_id")]
    TableDetail {
        data_source_id: String,
        table_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::DataSourceDetail { id } => html! { <DataSourceDetailPage {id} /> },
        Route::TableDetail {
            data_source_id,
            table_id,
        } => html! { <TableDetailPage {data_source_id} {table_id} /> },
        Route::NotFound => html! { <NotFoundPage title="Page Not Found" /> },
    }
}
