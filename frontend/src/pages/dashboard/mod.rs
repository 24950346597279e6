//! Dashboard page: root module wiring the Yew `Component` implementation
//! with submodules for state, messages, update logic, and view rendering.
//!
//! The page owns two pieces of local UI state: the currently selected data
//! source (sidebar) and the displayed time range (header select). Both are
//! private to this page; the detail pages derive everything from their
//! route parameters instead.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{DashboardPage, TimeRange};

use crate::pages::set_document_title;

impl Component for DashboardPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            set_document_title("DQM | Oil & Gas Trading");
        }
    }
}
