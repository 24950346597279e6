use common::model::QualityMetrics;
use yew::{html, Html};

use crate::components::metric_card::{MetricCard, MetricColor};

// Mock day-over-day deltas; there is no trend storage behind the cards.
const CHANGES: [f64; 6] = [2.1, -1.3, 0.0, -0.5, 1.8, -0.3];
const ICONS: [&str; 6] = [
    "track_changes",
    "check_circle",
    "shield",
    "schedule",
    "show_chart",
    "group",
];
const COLORS: [MetricColor; 6] = [
    MetricColor::Green,
    MetricColor::Orange,
    MetricColor::Blue,
    MetricColor::Red,
    MetricColor::Green,
    MetricColor::Purple,
];

/// Renders the six dimension cards for one metrics snapshot. Shared by the
/// dashboard overview and the data-source detail page.
pub fn metric_grid(metrics: &QualityMetrics) -> Html {
    let cards = metrics
        .entries()
        .into_iter()
        .zip(CHANGES)
        .zip(ICONS)
        .zip(COLORS)
        .map(|((((title, value), change), icon), color)| {
            html! {
                <MetricCard {title} {value} {change} {icon} {color} />
            }
        })
        .collect::<Html>();

    html! {
        <div class="metric-grid">{ cards }</div>
    }
}
