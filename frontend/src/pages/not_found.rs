//! Fallback view for unresolved identifiers and unknown routes.
//!
//! The only recovery action in scope is returning to the dashboard root,
//! so the view is a centered message plus that single button. Detail pages
//! embed this component when their path parameters fail to resolve.

use yew::{html, AttrValue, Component, Context, Html, Properties};
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub title: AttrValue,
}

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = NotFoundProps;

    fn create(_ctx: &Context<Self>) -> Self {
        NotFoundPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found">
                <div class="not-found-body">
                    <h1>{ ctx.props().title.clone() }</h1>
                    <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                        <i class="material-icons">{"arrow_back"}</i>
                        {"Back to Dashboard"}
                    </Link<Route>>
                </div>
            </div>
        }
    }
}
