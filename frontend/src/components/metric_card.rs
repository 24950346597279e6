//! Card for one quality dimension: current value plus a day-over-day
//! trend line. The trend direction and color are derived purely from the
//! sign of the change; there is no historical series behind the number.

use yew::{classes, html, AttrValue, Component, Context, Html, Properties};

/// Accent color of the dimension icon.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MetricColor {
    Green,
    Orange,
    Blue,
    Purple,
    Red,
}

impl MetricColor {
    fn icon_class(&self) -> &'static str {
        match self {
            MetricColor::Green => "metric-icon-green",
            MetricColor::Orange => "metric-icon-orange",
            MetricColor::Blue => "metric-icon-blue",
            MetricColor::Purple => "metric-icon-purple",
            MetricColor::Red => "metric-icon-red",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    /// Percentage in [0, 100].
    pub value: f64,
    /// Day-over-day change in percentage points.
    pub change: f64,
    /// Material icon name.
    pub icon: AttrValue,
    pub color: MetricColor,
}

pub struct MetricCard;

impl Component for MetricCard {
    type Message = ();
    type Properties = MetricCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MetricCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="metric-card">
                <div class="metric-card-header">
                    <i class={classes!("material-icons", "metric-icon", props.color.icon_class())}>
                        { props.icon.clone() }
                    </i>
                    <span class="metric-title">{ props.title.clone() }</span>
                </div>
                <div class="metric-value">{ format!("{:.1}%", props.value) }</div>
                <div class={classes!("metric-trend", trend_class(props.change))}>
                    <i class="material-icons trend-icon">{ trend_icon(props.change) }</i>
                    <span>{ change_caption(props.change) }</span>
                </div>
            </div>
        }
    }
}

pub fn trend_icon(change: f64) -> &'static str {
    if change > 0.0 {
        "trending_up"
    } else if change < 0.0 {
        "trending_down"
    } else {
        "trending_flat"
    }
}

pub fn trend_class(change: f64) -> &'static str {
    if change > 0.0 {
        "trend-up"
    } else if change < 0.0 {
        "trend-down"
    } else {
        "trend-flat"
    }
}

fn change_caption(change: f64) -> String {
    if change == 0.0 {
        "No change".to_string()
    } else {
        format!("{:.1}% from yesterday", change.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_direction_follows_the_sign() {
        assert_eq!(trend_icon(2.1), "trending_up");
        assert_eq!(trend_icon(-0.3), "trending_down");
        assert_eq!(trend_icon(0.0), "trending_flat");
    }

    #[test]
    fn trend_color_follows_the_sign() {
        assert_eq!(trend_class(1.8), "trend-up");
        assert_eq!(trend_class(-1.3), "trend-down");
        assert_eq!(trend_class(0.0), "trend-flat");
    }

    #[test]
    fn caption_uses_absolute_change() {
        assert_eq!(change_caption(0.0), "No change");
        assert_eq!(change_caption(-1.3), "1.3% from yesterday");
        assert_eq!(change_caption(2.1), "2.1% from yesterday");
    }
}
