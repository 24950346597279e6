use yew::Context;

use super::messages::Msg;
use super::state::DashboardPage;

pub fn update(component: &mut DashboardPage, _ctx: &Context<DashboardPage>, msg: Msg) -> bool {
    match msg {
        Msg::SelectSource(id) => component.select_source(id),
        Msg::SetTimeRange(range) => component.set_time_range(range),
    }
}
