//! Sidebar entry for one data source.
//!
//! Clicking the card reports the source id through `on_select` so the
//! dashboard can swap its metric panel without navigating; the trailing
//! chevron is a plain router link to the source's detail page.

use common::model::HealthStatus;
use yew::{classes, html, AttrValue, Callback, Component, Context, Html, Properties};
use yew_router::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct DataSourceItemProps {
    pub id: AttrValue,
    pub name: AttrValue,
    pub status: HealthStatus,
    #[prop_or_default]
    pub selected: bool,
    pub on_select: Callback<String>,
}

pub enum Msg {
    Select,
}

pub struct DataSourceItem;

impl Component for DataSourceItem {
    type Message = Msg;
    type Properties = DataSourceItemProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DataSourceItem
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select => {
                let props = ctx.props();
                props.on_select.emit(props.id.to_string());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let card_class = classes!(
            "source-card",
            props.status.border_class(),
            props.selected.then_some("selected"),
        );

        html! {
            <div class={card_class} onclick={ctx.link().callback(|_| Msg::Select)}>
                <span class="source-name">{ props.name.clone() }</span>
                <div class="source-actions">
                    <div class={classes!("status-indicator", props.status.indicator_class())} />
                    <Link<Route>
                        to={Route::DataSourceDetail { id: props.id.to_string() }}
                        classes="source-open"
                    >
                        <i class="material-icons">{"chevron_right"}</i>
                    </Link<Route>>
                </div>
            </div>
        }
    }
}
