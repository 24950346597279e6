use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub message: AttrValue,
    pub count: usize,
}

pub struct AlertBanner;

impl Component for AlertBanner {
    type Message = ();
    type Properties = AlertBannerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AlertBanner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="alert-banner">
                <i class="material-icons alert-icon">{"warning_amber"}</i>
                <span class="alert-text">
                    <b>{props.count}</b>{" "}{props.message.clone()}
                </span>
            </div>
        }
    }
}
